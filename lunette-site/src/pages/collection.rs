//! The frames catalogue.

use crate::model::FRAME_DESIGNS;
use crate::pages::{scroll_key_delta, wheel_delta};
use lunette_core::{Action, AppContext, Component, Context, Entity, Event, EventContext, Viewport};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;

pub struct CollectionPage {
    viewport: Entity<Viewport>,
}

impl CollectionPage {
    pub fn new(cx: &AppContext) -> Self {
        Self {
            viewport: cx.new_entity(Viewport::new()),
        }
    }

    pub fn viewport(&self) -> Entity<Viewport> {
        self.viewport.clone()
    }

    fn content() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::styled("The Collection", Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(
                "Six silhouettes, made to order in our atelier.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ];
        for design in &FRAME_DESIGNS {
            lines.push(Line::from(vec![
                Span::styled(design.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  ${}", design.price_usd),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  [{}]", design.tag),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
            lines.push(Line::styled(
                format!("  {}", design.blurb),
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Component for CollectionPage {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let area = cx.area;
        let lines = Self::content();
        let content_rows = lines.len() as u16;

        let now = Instant::now();
        let offset = self
            .viewport
            .update(|v| {
                v.set_layout(area.height, content_rows);
                v.offset(now)
            })
            .unwrap_or(0.0);

        let page = Paragraph::new(lines).scroll((offset.round() as u16, 0));
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
