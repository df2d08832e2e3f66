//! Property-based invariant tests for the edge classifier.
//!
//! 1. Classification is deterministic
//! 2. Corners and edges never fire for the same input
//! 3. Releasing onto an edge or corner yields a rectangle that re-classifies
//!    as `None`
//! 4. A parked overlay always classifies as the matching closing state
//! 5. `scaled_fraction` never returns a non-finite number
//! 6. A fixed grid of centers on every boundary tie classifies into exactly
//!    one family (corner, closing, edge or none)
//!
//! Coordinates are integer-valued with even sizes so half-extents are exact.

use pinp_core::edge::{
    DEFAULT_MARGIN, EdgeState, PulloutSide, classify, pullout_position, reveal_fraction,
    scaled_fraction, snap_target,
};
use pinp_core::geometry::{Point, Rect, Size};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn container_strategy() -> impl Strategy<Value = Rect> {
    (-200i32..200, -200i32..200, 100i32..600, 100i32..900).prop_map(|(x, y, w, h)| {
        Rect::new(f64::from(x), f64::from(y), f64::from(w * 2), f64::from(h * 2))
    })
}

/// An overlay no larger than `container`, centered anywhere near it.
fn overlay_strategy(container: Rect) -> impl Strategy<Value = Rect> {
    let max_half_w = (container.width / 2.0) as i32;
    let max_half_h = (container.height / 2.0) as i32;
    let reach_x = container.width as i32;
    let reach_y = container.height as i32;
    (
        10i32..=max_half_w.max(10),
        10i32..=max_half_h.max(10),
        -reach_x..=reach_x * 2,
        -reach_y..=reach_y * 2,
    )
        .prop_map(move |(hw, hh, cx, cy)| {
            Rect::from_center_size(
                Point::new(container.x + f64::from(cx), container.y + f64::from(cy)),
                Size::new(f64::from(hw * 2), f64::from(hh * 2)),
            )
        })
}

fn pair_strategy() -> impl Strategy<Value = (Rect, Rect)> {
    container_strategy().prop_flat_map(|c| (overlay_strategy(c), Just(c)))
}

/// An overlay lying fully inside `container`, edges allowed to touch.
fn inside_pair_strategy() -> impl Strategy<Value = (Rect, Rect)> {
    container_strategy()
        .prop_flat_map(|c| {
            let max_half_w = (c.width / 2.0) as i32;
            let max_half_h = (c.height / 2.0) as i32;
            (Just(c), 10i32..=max_half_w, 10i32..=max_half_h)
        })
        .prop_flat_map(|(c, hw, hh)| {
            let (w, h) = (c.width as i32, c.height as i32);
            (Just(c), Just(hw), Just(hh), hw..=w - hw, hh..=h - hh)
        })
        .prop_map(|(c, hw, hh, cx, cy)| {
            let overlay = Rect::from_center_size(
                Point::new(c.x + f64::from(cx), c.y + f64::from(cy)),
                Size::new(f64::from(hw * 2), f64::from(hh * 2)),
            );
            (overlay, c)
        })
}

/// An overlay parked past the left or right edge: horizontal center outside
/// the container, vertical extent strictly inside it.
fn parked_pair_strategy() -> impl Strategy<Value = (Rect, Rect)> {
    container_strategy()
        .prop_flat_map(|c| {
            let max_half_w = (c.width / 2.0) as i32;
            let max_half_h = (c.height / 2.0) as i32;
            (Just(c), 10i32..=max_half_w, 10i32..max_half_h)
        })
        .prop_flat_map(|(c, hw, hh)| {
            let (w, h) = (c.width as i32, c.height as i32);
            (
                Just(c),
                Just(hw),
                Just(hh),
                any::<bool>(),
                1i32..=w,
                hh + 1..=h - hh - 1,
            )
        })
        .prop_map(|(c, hw, hh, left, past, cy)| {
            let cx = if left { -past } else { c.width as i32 + past };
            let overlay = Rect::from_center_size(
                Point::new(c.x + f64::from(cx), c.y + f64::from(cy)),
                Size::new(f64::from(hw * 2), f64::from(hh * 2)),
            );
            (overlay, c)
        })
}

fn any_corner(o: &Rect, c: &Rect) -> bool {
    let right = o.max_x() > c.max_x();
    let left = o.min_x() < c.min_x();
    let max_y = o.max_y() > c.max_y();
    let min_y = o.min_y() < c.min_y();
    let below = o.mid_y() > c.mid_y();
    let above = o.mid_y() < c.mid_y();
    (right && max_y && below)
        || (right && min_y && above)
        || (left && max_y && below)
        || (left && min_y && above)
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn classify_is_deterministic((overlay, container) in pair_strategy()) {
        let first = classify(&overlay, Some(&container));
        let second = classify(&overlay, Some(&container));
        prop_assert_eq!(first, second);
        prop_assert_eq!(
            pullout_position(&overlay, Some(&container)),
            pullout_position(&overlay, Some(&container))
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Corner/edge exclusivity
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn corners_exclude_edges((overlay, container) in pair_strategy()) {
        let state = classify(&overlay, Some(&container));
        if any_corner(&overlay, &container) {
            prop_assert!(state.is_corner(), "corner geometry classified as {:?}", state);
        } else {
            prop_assert!(!state.is_corner(), "non-corner geometry classified as {:?}", state);
        }
    }

    #[test]
    fn none_means_fully_inside((overlay, container) in pair_strategy()) {
        let state = classify(&overlay, Some(&container));
        prop_assert_eq!(state == EdgeState::None, container.contains_rect(&overlay));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Snap round-trip
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn snapped_edges_and_corners_land_inside((overlay, container) in pair_strategy()) {
        let state = classify(&overlay, Some(&container));
        prop_assume!(state.is_edge() || state.is_corner());

        let target = snap_target(state, overlay.size(), &container, overlay.center(), DEFAULT_MARGIN);
        let snapped = overlay.with_center(target);
        prop_assert_eq!(
            classify(&snapped, Some(&container)),
            EdgeState::None,
            "{:?} snapped to {:?}", state, snapped
        );
    }

    #[test]
    fn none_does_not_move((overlay, container) in inside_pair_strategy()) {
        prop_assert_eq!(classify(&overlay, Some(&container)), EdgeState::None);
        let anchor = overlay.center();
        prop_assert_eq!(
            snap_target(EdgeState::None, overlay.size(), &container, anchor, DEFAULT_MARGIN),
            anchor
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Parked overlays are closing
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parked_overlay_is_closing((overlay, container) in parked_pair_strategy()) {
        let position = pullout_position(&overlay, Some(&container));
        prop_assert!(position.show, "{:?} not parked in {:?}", overlay, container);
        let state = classify(&overlay, Some(&container));
        match position.side() {
            PulloutSide::Left => prop_assert_eq!(state, EdgeState::LeftClosing),
            PulloutSide::Right => prop_assert_eq!(state, EdgeState::RightClosing),
            PulloutSide::None => prop_assert!(false, "shown pullout without a side"),
        }
        prop_assert!(reveal_fraction(&overlay, Some(&container), DEFAULT_MARGIN).is_some());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. scaled_fraction is always finite
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scaled_fraction_is_finite(
        value in prop::num::f64::ANY,
        max in prop::num::f64::ANY,
        min in prop::num::f64::ANY,
    ) {
        prop_assert!(scaled_fraction(value, max, min).is_finite());
    }

    #[test]
    fn scaled_fraction_endpoints(min in -1.0e6f64..1.0e6, span in 1.0f64..1.0e6) {
        let max = min + span;
        prop_assert!(scaled_fraction(min, max, min).abs() < 1e-9);
        prop_assert!((scaled_fraction(max, max, min) - 1.0).abs() < 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Precedence grid over boundary ties
// ═══════════════════════════════════════════════════════════════════════

/// Centers for a 100x100 overlay in a 400x800 container. Each axis covers
/// the flush positions (min edge at 0, max edge at the container bound), the
/// vertical midline, and one step either side of each.
const GRID_X: [f64; 14] = [
    -60.0, -50.0, 0.0, 10.0, 50.0, 60.0, 200.0, 340.0, 350.0, 390.0, 400.0, 410.0, 450.0, 460.0,
];
const GRID_Y: [f64; 13] = [
    -60.0, -50.0, 0.0, 40.0, 50.0, 60.0, 400.0, 740.0, 750.0, 760.0, 800.0, 850.0, 860.0,
];

#[test]
fn tie_grid_classifies_into_one_family() {
    let container = Rect::new(0.0, 0.0, 400.0, 800.0);
    let size = Size::new(100.0, 100.0);
    for &x in &GRID_X {
        for &y in &GRID_Y {
            let overlay = Rect::from_center_size(Point::new(x, y), size);
            let state = classify(&overlay, Some(&container));
            let families = [
                state.is_corner(),
                state.is_closing(),
                state.is_edge(),
                state == EdgeState::None,
            ];
            assert_eq!(
                families.iter().filter(|&&f| f).count(),
                1,
                "({x}, {y}) classified as {state:?}"
            );
            assert_eq!(
                state.is_corner(),
                any_corner(&overlay, &container),
                "({x}, {y}) classified as {state:?}"
            );
            let outside =
                overlay.mid_x() < container.min_x() || overlay.mid_x() > container.max_x();
            assert_eq!(
                state.is_closing(),
                outside && !state.is_corner(),
                "({x}, {y}) classified as {state:?}"
            );
            assert_eq!(state == EdgeState::None, container.contains_rect(&overlay));
            if pullout_position(&overlay, Some(&container)).show {
                assert!(state.is_closing(), "({x}, {y}) parked as {state:?}");
            }
        }
    }
}

#[test]
fn tie_grid_named_cases() {
    let container = Rect::new(0.0, 0.0, 400.0, 800.0);
    let at = |x, y| {
        classify(
            &Rect::from_center_size(Point::new(x, y), Size::new(100.0, 100.0)),
            Some(&container),
        )
    };
    // Center on the right edge is not yet closing.
    assert_eq!(at(400.0, 400.0), EdgeState::Right);
    assert_eq!(at(0.0, 400.0), EdgeState::Left);
    // On the midline no corner applies, whatever the overflow.
    assert_eq!(at(460.0, 400.0), EdgeState::RightClosing);
    assert_eq!(at(450.0, 850.0), EdgeState::BottomRightCorner);
    assert_eq!(at(460.0, 0.0), EdgeState::TopRightCorner);
    assert_eq!(at(-60.0, 850.0), EdgeState::BottomLeftCorner);
    // Flush against the max-y edge: closing, but not parked.
    assert_eq!(at(-60.0, 750.0), EdgeState::LeftClosing);
    assert_eq!(at(350.0, 750.0), EdgeState::None);
    assert_eq!(at(50.0, 50.0), EdgeState::None);
    assert_eq!(at(200.0, 800.0), EdgeState::Top);
    assert_eq!(at(200.0, 0.0), EdgeState::Bottom);
}
