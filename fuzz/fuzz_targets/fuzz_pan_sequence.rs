#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use pinp_core::geometry::{Rect, Size};
use pinp_core::gesture::{PanEvent, PanPhase};
use pinp_widgets::{Effect, Layout, PinpController, PulloutAffordance};

#[derive(Debug, Arbitrary)]
enum Step {
    Began,
    Changed(i16, i16),
    Ended(i16, i16),
    Cancelled(i16, i16),
    Restore,
    ToggleContainer,
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let (Ok(width), Ok(height)) = (u.int_in_range(40u16..=2000), u.int_in_range(40u16..=2000))
    else {
        return;
    };
    let Ok(steps) = Vec::<Step>::arbitrary(&mut u) else {
        return;
    };

    let container = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
    let size = Size::new(f64::from(width) / 3.0, f64::from(height) / 4.0);
    let mut center = container.center();
    let mut has_container = true;
    let mut ctl = PinpController::default().with_anchor(center);

    for step in steps {
        let layout = Layout::new(
            Rect::from_center_size(center, size),
            has_container.then_some(container),
        );
        let event = match step {
            Step::Began => Some(PanEvent::began()),
            Step::Changed(x, y) => Some(PanEvent::changed(f64::from(x), f64::from(y))),
            Step::Ended(x, y) => Some(PanEvent::ended(f64::from(x), f64::from(y))),
            Step::Cancelled(x, y) => Some(PanEvent::cancelled(f64::from(x), f64::from(y))),
            Step::Restore => None,
            Step::ToggleContainer => {
                has_container = !has_container;
                continue;
            }
        };

        let was_dragging = ctl.is_dragging();
        let effects = match event {
            Some(event) => ctl.handle(&event, &layout),
            None => ctl.restore(&layout),
        };

        for effect in &effects {
            match effect {
                Effect::MoveCenter { center: target, .. } => {
                    assert!(target.x.is_finite() && target.y.is_finite());
                    center = *target;
                }
                Effect::SetPullout(pullout) => {
                    assert!((0.0..=1.0).contains(&pullout.alpha));
                }
                Effect::Minimize(_) => unreachable!("only close minimizes"),
            }
        }

        if was_dragging && event.is_some_and(|e| e.phase == PanPhase::Ended) {
            let pullout = ctl.pullout();
            assert!(pullout == PulloutAffordance::HIDDEN || pullout.alpha == 1.0);
            assert!(!ctl.is_dragging());
        }
    }
});
