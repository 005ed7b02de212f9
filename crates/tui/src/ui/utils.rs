//! Layout helpers shared by the UI components.

use ratatui::layout::Rect;

/// Narrowest drawer on terminals wide enough to hold it.
pub const DRAWER_MIN_WIDTH: u16 = 40;
pub const DRAWER_MAX_WIDTH: u16 = 56;
/// Share of the available width the drawer aims for, in percent.
const DRAWER_WIDTH_PERCENT: u16 = 35;

/// Area of the drawer panel inside `area`.
///
/// The panel is anchored to the left edge at full height. Its width is 35% of
/// `area`, clamped to `DRAWER_MIN_WIDTH..=DRAWER_MAX_WIDTH` and always at least
/// one column narrower than `area`, leaving backdrop to click.
///
/// # Examples
///
/// ```rust,ignore
/// let panel = drawer_rect(Rect::new(0, 0, 200, 50));
/// assert_eq!(panel, Rect::new(0, 0, 56, 50));
/// ```
pub fn drawer_rect(area: Rect) -> Rect {
    let preferred = (u32::from(area.width) * u32::from(DRAWER_WIDTH_PERCENT) / 100) as u16;
    // At least one backdrop column stays clickable.
    let width = preferred
        .clamp(DRAWER_MIN_WIDTH, DRAWER_MAX_WIDTH)
        .min(area.width.saturating_sub(1));
    Rect::new(area.x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_width_is_clamped() {
        assert_eq!(drawer_rect(Rect::new(0, 0, 100, 30)), Rect::new(0, 0, 40, 30));
        assert_eq!(drawer_rect(Rect::new(0, 0, 140, 30)), Rect::new(0, 0, 49, 30));
        assert_eq!(drawer_rect(Rect::new(0, 0, 200, 30)), Rect::new(0, 0, 56, 30));
    }

    #[test]
    fn drawer_never_exceeds_small_areas() {
        assert_eq!(drawer_rect(Rect::new(3, 2, 30, 10)), Rect::new(3, 2, 29, 10));
        assert_eq!(drawer_rect(Rect::new(0, 0, 40, 10)), Rect::new(0, 0, 39, 10));
        assert_eq!(drawer_rect(Rect::new(0, 0, 41, 10)), Rect::new(0, 0, 40, 10));
        assert_eq!(drawer_rect(Rect::default()).width, 0);
    }
}
