//! Small shared helpers.

pub mod text_input;

pub use text_input::TextInput;

use ratatui::layout::Rect;

/// Shift a rectangle by a cell offset, clamped to the surrounding area.
///
/// Used to place the sliding wallet window: the part that has slid off the
/// viewport is simply not drawn.
pub fn offset_rect(rect: Rect, dx: i32, dy: i32, bounds: Rect) -> Rect {
    let x = i64::from(rect.x) + i64::from(dx);
    let y = i64::from(rect.y) + i64::from(dy);

    let left = x.max(i64::from(bounds.left()));
    let top = y.max(i64::from(bounds.top()));
    let right = (x + i64::from(rect.width)).min(i64::from(bounds.right()));
    let bottom = (y + i64::from(rect.height)).min(i64::from(bounds.bottom()));

    if right <= left || bottom <= top {
        return Rect::new(bounds.x, bounds.y, 0, 0);
    }
    Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    )
}
