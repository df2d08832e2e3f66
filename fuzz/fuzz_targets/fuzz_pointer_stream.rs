#![no_main]

use libfuzzer_sys::fuzz_target;
use pinp_core::geometry::{Point, Rect, Size};
use pinp_core::gesture::{PointerEvent, PointerEventKind};
use pinp_widgets::{Effect, Layout, PinpController};

fuzz_target!(|data: &[u8]| {
    // Each event is 6 bytes: kind, pointer id, x (i16 le), y (i16 le).
    let container = Rect::new(0.0, 0.0, 390.0, 844.0);
    let size = Size::new(160.0, 90.0);
    let mut center = Point::new(195.0, 422.0);
    let mut ctl = PinpController::default().with_anchor(center);

    for chunk in data.chunks_exact(6) {
        let kind = match chunk[0] % 5 {
            0 => PointerEventKind::Down,
            1 | 2 => PointerEventKind::Move,
            3 => PointerEventKind::Up,
            _ => PointerEventKind::Cancel,
        };
        let id = u64::from(chunk[1] % 3);
        let x = f64::from(i16::from_le_bytes([chunk[2], chunk[3]]));
        let y = f64::from(i16::from_le_bytes([chunk[4], chunk[5]]));

        let layout = Layout::new(Rect::from_center_size(center, size), Some(container));
        for effect in ctl.handle_pointer(&PointerEvent::new(kind, id, x, y), &layout) {
            if let Effect::MoveCenter { center: target, .. } = effect {
                center = target;
            }
        }
    }

    let layout = Layout::new(Rect::from_center_size(center, size), Some(container));
    let _ = ctl.focus_lost(&layout);
    assert!(!ctl.is_dragging());
});
