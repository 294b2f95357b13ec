use api::client::LEASING_FORM_PATH;
use api::Locale;
use dioxus::prelude::*;

use crate::components::lead_wizard::LeadWizard;
use crate::core::forms::LEASING_FORM;
use crate::t;

#[component]
pub fn Leasing(locale: ReadOnlySignal<Locale>) -> Element {
    // Bumped by the wizard on every step change; keys the intro so its entry animation replays.
    let mut generation = use_signal(|| 0u32);

    rsx! {
        section { class: "page page-leasing",
            div { key: "{generation}", class: "page-leasing__intro page-leasing__intro--enter",
                h1 { {t!("leasing-title")} }
                p { {t!("leasing-intro")} }
            }
            LeadWizard {
                schema: LEASING_FORM,
                endpoint: LEASING_FORM_PATH,
                locale,
                on_reanimate: move |_| generation += 1,
            }
        }
    }
}
