//! Top navigation bar.

use crate::model::SiteRoute;
use lunette_core::NavTarget;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

/// The fixed nav items. "Home" and "Showcase" both live on the home page
/// and differ only by anchor.
fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Home", target: NavTarget::anchor("/", "home") },
        NavItem { label: "Collection", target: NavTarget::page("/collection") },
        NavItem { label: "Showcase", target: NavTarget::anchor("/", "showcase") },
        NavItem { label: "About", target: NavTarget::page("/about") },
        NavItem { label: "Contact", target: NavTarget::page("/contact") },
    ]
}

pub struct Navbar {
    items: Vec<NavItem>,
    selected: usize,
}

impl Navbar {
    pub fn new() -> Self {
        Self { items: nav_items(), selected: 0 }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }

    /// Destination of the currently focused item.
    pub fn target(&self) -> NavTarget {
        self.items[self.selected].target.clone()
    }

    /// `scrolled` flips the bar to a solid backdrop once the page has
    /// moved past the first couple of rows, the way the original bar goes
    /// opaque after 50px.
    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect, scrolled: bool, current: SiteRoute) {
        let base = if scrolled {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(
                " Idée Opticals ",
                base.add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ", base),
        ];
        for (i, item) in self.items.iter().enumerate() {
            let mut style = base;
            let active = item.target.path == current.path()
                && item.target.anchor.as_deref().is_none_or(|a| a == "home");
            if active {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if i == self.selected {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", item.label), style));
            spans.push(Span::styled(" ", base));
        }

        let bar = Paragraph::new(Line::from(spans)).style(base);
        frame.render_widget(bar, Rect { height: 1, ..area });

        let hint = Paragraph::new(" Tab Focus │ Enter Go │ Esc Back │ q Quit ")
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        if area.height > 1 {
            frame.render_widget(hint, Rect { y: area.y + 1, height: 1, ..area });
        }
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_every_item_and_wraps() {
        let mut bar = Navbar::new();
        let n = nav_items().len();
        for _ in 0..n {
            bar.select_next();
        }
        assert_eq!(bar.target(), NavTarget::anchor("/", "home"));

        bar.select_prev();
        assert_eq!(bar.target(), NavTarget::page("/contact"));
    }

    #[test]
    fn showcase_item_targets_the_home_page_anchor() {
        let mut bar = Navbar::new();
        bar.select_next();
        bar.select_next();
        assert_eq!(bar.target(), NavTarget::anchor("/", "showcase"));
    }
}
