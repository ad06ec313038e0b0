pub mod about;
pub mod collection;
pub mod contact;
pub mod home;

pub use about::AboutPage;
pub use collection::CollectionPage;
pub use contact::ContactPage;
pub use home::HomePage;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Visible portion of a content section at the current scroll offset, or
/// `None` when the section is entirely off screen.
pub(crate) fn section_rect(area: Rect, offset: f32, top: f32, rows: u16) -> Option<Rect> {
    let off = offset.round() as i32;
    let y0 = top.round() as i32 - off;
    let y1 = y0 + i32::from(rows);
    let vis0 = y0.max(0);
    let vis1 = y1.min(i32::from(area.height));
    if vis1 <= vis0 {
        return None;
    }
    Some(Rect::new(
        area.x,
        area.y + vis0 as u16,
        area.width,
        (vis1 - vis0) as u16,
    ))
}

/// Scroll delta for the common movement keys, `None` for anything else.
pub(crate) fn scroll_key_delta(key: &KeyEvent, page_rows: u16) -> Option<f32> {
    match key.code {
        KeyCode::Up => Some(-1.0),
        KeyCode::Down => Some(1.0),
        KeyCode::PageUp => Some(-f32::from(page_rows)),
        KeyCode::PageDown => Some(f32::from(page_rows)),
        _ => None,
    }
}

/// Scroll delta for mouse wheel events, `None` for anything else.
pub(crate) fn wheel_delta(mouse: &MouseEvent) -> Option<f32> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(-3.0),
        MouseEventKind::ScrollDown => Some(3.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_screen_sections_are_skipped() {
        let area = Rect::new(0, 0, 80, 24);
        assert!(section_rect(area, 0.0, 30.0, 10).is_none());
        assert!(section_rect(area, 50.0, 30.0, 10).is_none());
    }

    #[test]
    fn partially_visible_sections_are_clipped() {
        let area = Rect::new(0, 2, 80, 24);

        // Section straddling the bottom edge.
        let rect = section_rect(area, 0.0, 20.0, 10).unwrap();
        assert_eq!((rect.y, rect.height), (22, 4));

        // Section straddling the top edge.
        let rect = section_rect(area, 25.0, 20.0, 10).unwrap();
        assert_eq!((rect.y, rect.height), (2, 5));
    }
}
