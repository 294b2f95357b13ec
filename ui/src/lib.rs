//! Shared UI crate for the Manzil site: views, components, i18n and the
//! platform-independent controller logic under [`core`].

pub mod core;
pub mod i18n;
pub mod services;
pub mod views;

pub mod components {
    // Localized header with the language switch (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod lead_wizard;
    pub use lead_wizard::{ContactForm, LeadWizard};

    pub mod scroll_carousel;
    pub use scroll_carousel::{CarouselVariant, ScrollCarousel, TimelineItem};

    pub mod toasts;
    pub use toasts::Toasts;
}
