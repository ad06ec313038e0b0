//! About page. Static copy in a scrollable viewport.

use crate::pages::{scroll_key_delta, wheel_delta};
use lunette_core::{Action, AppContext, Component, Context, Entity, Event, EventContext, Viewport};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};
use std::time::Instant;

pub struct AboutPage {
    viewport: Entity<Viewport>,
}

impl AboutPage {
    pub fn new(cx: &AppContext) -> Self {
        Self {
            viewport: cx.new_entity(Viewport::new()),
        }
    }

    pub fn viewport(&self) -> Entity<Viewport> {
        self.viewport.clone()
    }

    fn content() -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::styled("Our Story", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::raw(
                "Idée Opticals started in a one-room workshop with a single \
                 conviction: a frame should disappear on your face and still \
                 be unmistakably yours.",
            ),
            Line::from(""),
            Line::raw(
                "Every pair is cut, tumbled and polished by hand. We keep the \
                 collection small on purpose; six silhouettes, refined year \
                 after year, instead of a new wall of lookalikes each season.",
            ),
            Line::from(""),
            Line::styled("What we care about", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::styled("  • Materials that age well", Style::default().fg(Color::Gray)),
            Line::styled("  • Hinges serviced for life", Style::default().fg(Color::Gray)),
            Line::styled("  • Fittings done by opticians, not sales staff", Style::default().fg(Color::Gray)),
            Line::from(""),
            Line::raw(
                "Visit the collection page to see the current line, or write \
                 to us through the contact page.",
            ),
        ]
    }
}

impl Component for AboutPage {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let area = cx.area;
        let lines = Self::content();
        let content_rows = lines.len() as u16 + 6; // wrapped copy needs slack

        let now = Instant::now();
        let offset = self
            .viewport
            .update(|v| {
                v.set_layout(area.height, content_rows);
                v.offset(now)
            })
            .unwrap_or(0.0);

        let page = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset.round() as u16, 0));
        frame.render_widget(page, area);
    }

    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        let delta = match &event {
            Event::Key(key) => scroll_key_delta(key, cx.area.height.saturating_sub(2)),
            Event::Mouse(mouse) => wheel_delta(mouse),
            Event::Resize(..) => None,
        }?;
        let _ = self.viewport.update(|v| v.scroll_by(delta));
        Some(Action::Noop)
    }
}
