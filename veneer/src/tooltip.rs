//! Tooltip placement.
//!
//! The enhancer owns at most one tooltip at a time; showing a new one
//! replaces the previous instance. Placement is computed from the trigger
//! element's bounding box, preferring the row above it and flipping below
//! when there is no room.

use unicode_width::UnicodeWidthStr;

use crate::geometry::Rect;

/// The active tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub text: String,
    /// The trigger element's bounding box.
    pub anchor: Rect,
    /// Where the tooltip renders.
    pub area: Rect,
}

impl Tooltip {
    /// Build a tooltip for `anchor`, placed within `screen`.
    pub fn new(text: impl Into<String>, anchor: Rect, screen: Rect) -> Self {
        let text = text.into();
        // One line of text plus a cell of padding either side.
        let width = (text.width() as u16).saturating_add(2).min(screen.width);
        let area = place_near(screen, anchor, (width, 1));
        Self { text, anchor, area }
    }
}

/// Compute a rectangle of `size` adjacent to `anchor`, inside `screen`.
///
/// Tries the row above the anchor first and falls back to below; x is
/// clamped so the tooltip never leaves the screen.
fn place_near(screen: Rect, anchor: Rect, size: (u16, u16)) -> Rect {
    let (width, height) = size;
    let width = width.min(screen.width);
    let height = height.min(screen.height);

    let y = if anchor.y >= screen.y + height {
        anchor.y - height
    } else {
        (anchor.bottom()).min(screen.bottom().saturating_sub(height))
    };

    let max_x = screen.x + screen.width.saturating_sub(width);
    let x = anchor.x.min(max_x).max(screen.x);

    Rect::new(x, y, width, height)
}
