use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
};

use crate::ui::theme::Theme;

/// Fixed contact information shown in the Contact tab.
#[derive(Debug, PartialEq, Eq)]
pub struct ContactBlock {
    pub heading: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const CONTACT: ContactBlock = ContactBlock {
    heading: "Contact Information",
    description: "You can reach us via phone or email",
    phone: "879784556",
    email: "something@something.com",
};

const PHONE_PREFIX: &str = "• Phone: ";
const EMAIL_PREFIX: &str = "• E-mail: ";

impl ContactBlock {
    /// Target of the e-mail link.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Heading, description and phone line. Safe to wrap.
    pub fn details_text(&self, theme: &dyn Theme) -> Text<'static> {
        Text::from(vec![
            Line::styled(self.heading, theme.accent_emphasis_style()),
            Line::default(),
            Line::styled(self.description, theme.text_primary_style()),
            Line::default(),
            Line::from(vec![
                Span::styled(PHONE_PREFIX, theme.text_secondary_style()),
                Span::styled(self.phone, theme.text_primary_style()),
            ]),
        ])
    }

    /// The e-mail entry laid out for `width` columns.
    ///
    /// The address stays on one row so its cells are known: after the prefix
    /// when both fit, otherwise on the row below it.
    pub fn email_text(&self, theme: &dyn Theme, width: u16) -> Text<'static> {
        let prefix = Span::styled(EMAIL_PREFIX, theme.text_secondary_style());
        let link = Span::styled(self.email, theme.link_style());
        if self.email_fits_inline(width) {
            Text::from(Line::from(vec![prefix, link]))
        } else {
            Text::from(vec![Line::from(prefix), Line::from(link)])
        }
    }

    /// Cells covered by the link when [`Self::email_text`] is drawn at `area`.
    pub fn email_link_area(&self, area: Rect) -> Rect {
        let link = if self.email_fits_inline(area.width) {
            Rect::new(area.x.saturating_add(prefix_width()), area.y, self.email.len() as u16, 1)
        } else {
            Rect::new(area.x, area.y.saturating_add(1), self.email.len() as u16, 1)
        };
        link.intersection(area)
    }

    fn email_fits_inline(&self, width: u16) -> bool {
        usize::from(width) >= EMAIL_PREFIX.chars().count() + self.email.len()
    }
}

fn prefix_width() -> u16 {
    EMAIL_PREFIX.chars().count() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    #[test]
    fn literals_match_the_published_contact_details() {
        assert_eq!(CONTACT.phone, "879784556");
        assert_eq!(CONTACT.email, "something@something.com");
        assert_eq!(CONTACT.mailto(), "mailto:something@something.com");
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn email_shares_a_row_with_its_prefix_when_it_fits() {
        let theme = DraculaTheme::new();
        let text = CONTACT.email_text(&theme, 40);
        assert_eq!(text.lines.len(), 1);
        assert_eq!(line_text(&text.lines[0]), "• E-mail: something@something.com");
        assert_eq!(CONTACT.email_link_area(Rect::new(2, 4, 40, 3)), Rect::new(12, 4, 23, 1));
    }

    #[test]
    fn narrow_areas_move_the_email_below_its_prefix() {
        let theme = DraculaTheme::new();
        let text = CONTACT.email_text(&theme, 25);
        assert_eq!(text.lines.iter().map(line_text).collect::<Vec<_>>(), vec!["• E-mail: ", "something@something.com"]);
        assert_eq!(CONTACT.email_link_area(Rect::new(2, 4, 25, 3)), Rect::new(2, 5, 23, 1));
        // Narrower than the address itself: the link is clipped, not lost.
        assert_eq!(CONTACT.email_link_area(Rect::new(2, 4, 20, 3)), Rect::new(2, 5, 20, 1));
    }

    #[test]
    fn link_area_is_empty_without_room() {
        assert!(CONTACT.email_link_area(Rect::new(2, 4, 25, 1)).is_empty());
    }
}
