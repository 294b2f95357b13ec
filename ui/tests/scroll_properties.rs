//! Property-style checks for the scroll controller: sweeps over progress and
//! previous index instead of single hand-picked points.

use ui::core::scroll::{
    compute_progress, interpolate_item_style, resolve_index, HysteresisBand, IndexResolver,
    ItemStyle, ScrollCarouselController, ScrollTuning, SectionGeometry, SectionRect, StyleRange,
};

fn progress_grid() -> impl Iterator<Item = f64> {
    (0..=200).map(|step| step as f64 / 200.0)
}

#[test]
fn resolved_index_is_always_in_range() {
    let band = HysteresisBand::default();
    for n in 0..8usize {
        for p in progress_grid().chain([-0.5, 1.5, f64::NAN]) {
            for previous in 0..10usize {
                let index = resolve_index(p, n, previous, band);
                if n == 0 {
                    assert_eq!(index, 0);
                } else {
                    assert!(index < n, "n={n} p={p} previous={previous} -> {index}");
                }
            }
        }
    }
}

#[test]
fn forward_sweep_never_goes_back() {
    for n in 1..8usize {
        let mut resolver = IndexResolver::new(HysteresisBand::default());
        let mut last = 0;
        for p in progress_grid() {
            let index = resolver.resolve(p, n);
            assert!(index >= last, "n={n} p={p}: {last} -> {index}");
            last = index;
        }
        assert_eq!(last, n - 1);
    }
}

#[test]
fn backward_sweep_never_goes_forward() {
    let n = 6;
    let mut resolver = IndexResolver::new(HysteresisBand::default());
    resolver.reset(n - 1);
    let mut last = n - 1;
    for p in progress_grid().map(|p| 1.0 - p) {
        let index = resolver.resolve(p, n);
        assert!(index <= last, "p={p}: {last} -> {index}");
        last = index;
    }
    assert_eq!(last, 0);
}

#[test]
fn styles_stay_inside_their_ranges() {
    let range = StyleRange::default();
    for n in 1..6usize {
        for p in progress_grid() {
            for i in 0..n {
                let style = interpolate_item_style(i, n, p, &range);
                assert!((0.3..=1.0).contains(&style.opacity), "opacity {style:?}");
                assert!((0.9..=1.0).contains(&style.scale), "scale {style:?}");
                assert!((0.0..=6.0).contains(&style.blur_px), "blur {style:?}");
            }
        }
    }
}

#[test]
fn oscillation_inside_the_band_does_not_flap() {
    let n = 4;
    let mut resolver = IndexResolver::new(HysteresisBand::default());
    resolver.reset(1);

    for step in 0..40 {
        let jitter = if step % 2 == 0 { 0.05 } else { -0.05 };
        assert_eq!(resolver.resolve(0.5 + jitter, n), 1, "step {step}");
    }

    assert_eq!(resolver.resolve(0.6, n), 2);

    for step in 0..40 {
        let jitter = if step % 2 == 0 { 0.05 } else { -0.05 };
        assert_eq!(resolver.resolve(0.5 + jitter, n), 2, "step {step}");
    }
}

#[test]
fn progress_ends_pin_index_and_styles() {
    let tuning = ScrollTuning::default();
    let band = HysteresisBand::from_tuning(&tuning);
    for n in 1..6usize {
        for previous in 0..n {
            assert_eq!(resolve_index(0.0, n, previous, band), 0);
            assert_eq!(resolve_index(1.0, n, previous, band), n - 1);
        }
        for i in 0..n {
            assert_eq!(
                interpolate_item_style(i, n, 0.0, &tuning.style),
                ItemStyle::start(&tuning.style)
            );
            assert_eq!(
                interpolate_item_style(i, n, 1.0, &tuning.style),
                ItemStyle::end(&tuning.style)
            );
        }
    }
}

#[test]
fn progress_is_clamped_outside_the_zone() {
    let tuning = ScrollTuning::default();
    let rect = |top| SectionRect { top, height: 5000.0 };
    assert_eq!(compute_progress(rect(100.0), 1000.0, &tuning), 0.0);
    assert_eq!(compute_progress(rect(-350.0), 1000.0, &tuning), 0.0);
    assert_eq!(compute_progress(rect(-3600.0), 1000.0, &tuning), 1.0);
    assert_eq!(compute_progress(rect(-10_000.0), 1000.0, &tuning), 1.0);

    let mut last = 0.0;
    for top in (0..=5000).rev().step_by(50) {
        let p = compute_progress(rect(-(5000 - top) as f64), 1000.0, &tuning);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= last);
        last = p;
    }
}

#[test]
fn controller_follows_geometry() {
    let mut controller = ScrollCarouselController::new(5, ScrollTuning::default());
    let geometry = |top| SectionGeometry {
        rect: SectionRect { top, height: 5000.0 },
        viewport_height: 1000.0,
    };

    let update = controller.sample(Some(geometry(100.0)), 0.0).unwrap();
    assert_eq!(update.progress, 0.0);
    assert_eq!(update.active_index, 0);
    assert!(update.slide.is_none());

    let update = controller.sample(Some(geometry(-10_000.0)), 16.0).unwrap();
    assert_eq!(update.progress, 1.0);
    assert_eq!(update.active_index, 4);
    let slide = update.slide.expect("jumped to the last slide");
    assert_eq!((slide.from, slide.to), (0, 4));
    assert_eq!(slide.duration_ms, 950);

    assert!(controller.sample(None, 32.0).is_none());
    assert_eq!(controller.active_index(), 4);
}

#[test]
fn shrinking_the_item_count_clamps_the_index() {
    let mut controller = ScrollCarouselController::new(6, ScrollTuning::default());
    let geometry = SectionGeometry {
        rect: SectionRect { top: -10_000.0, height: 5000.0 },
        viewport_height: 1000.0,
    };
    controller.sample(Some(geometry), 0.0);
    assert_eq!(controller.active_index(), 5);

    controller.set_item_count(3);
    assert_eq!(controller.active_index(), 2);
    assert_eq!(controller.item_styles().len(), 3);
}

#[test]
fn extreme_bands_still_pin_the_endpoints() {
    for (retreat, advance) in [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
        let band = HysteresisBand::new(retreat, advance);
        for n in 1..6usize {
            for previous in 0..n {
                let label = format!("band {retreat}/{advance}");
                assert_eq!(resolve_index(0.0, n, previous, band), 0, "{label}");
                assert_eq!(resolve_index(1.0, n, previous, band), n - 1, "{label}");
            }
        }
    }
}
