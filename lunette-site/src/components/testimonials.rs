//! "What our customers say" carousel section.

use crate::model::TESTIMONIALS;
use lunette_core::{
    Action, Carousel, Component, Context, Easing, Entity, Event, EventContext, TaskTracker,
    Transition,
};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use std::time::{Duration, Instant};

/// Rows this section occupies in the home page's content.
pub const SECTION_ROWS: u16 = 18;

const SWAP_DURATION: Duration = Duration::from_millis(500);
const SWAP_INDENT_COLS: f32 = 6.0;

/// The testimonial carousel. The timer ticks for as long as the home page
/// is active and keeps running across manual next/prev/jump.
pub struct TestimonialsSection {
    carousel: Entity<Carousel>,
    period: Duration,
    shown: usize,
    swap: Option<Transition>,
    tasks: TaskTracker,
}

impl TestimonialsSection {
    pub fn new(cx: &lunette_core::AppContext, period: Duration) -> Self {
        Self {
            carousel: cx.new_entity(Carousel::new(TESTIMONIALS.len())),
            period,
            shown: 0,
            swap: None,
            tasks: TaskTracker::new(),
        }
    }

    #[cfg(test)]
    pub fn carousel(&self) -> Entity<Carousel> {
        self.carousel.clone()
    }
}

impl Component for TestimonialsSection {
    fn on_mount(&mut self, cx: &mut Context) {
        cx.subscribe(&self.carousel);
    }

    fn on_enter(&mut self, cx: &mut Context) {
        let state = self.carousel.clone();
        let period = self.period;
        let handle = cx.spawn_task(move |app| async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await; // the immediate first tick
            loop {
                ticker.tick().await;
                let _ = state.update(Carousel::advance);
                app.refresh();
            }
        });
        self.tasks.track(handle);
    }

    fn on_exit(&mut self, _cx: &mut Context) {
        self.tasks.abort_all();
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let current = self.carousel.read(Carousel::current).unwrap_or(0);
        if current != self.shown {
            self.shown = current;
            // The incoming item always slides in from the same side,
            // whichever way the index moved.
            self.swap = Some(Transition::new(1.0, 0.0, SWAP_DURATION, Easing::EaseInOut));
        }

        let now = Instant::now();
        let slide = self.swap.as_ref().map_or(0.0, |t| t.sample(now));
        if self.swap.as_ref().is_some_and(|t| t.is_done(now)) {
            self.swap = None;
        }

        let testimonial = &TESTIMONIALS[current];
        let indent = " ".repeat((slide * SWAP_INDENT_COLS).round() as usize);
        let body_color = if slide > 0.35 { Color::DarkGray } else { Color::White };

        let stars = "★".repeat(usize::from(testimonial.rating));
        let dots: String = (0..TESTIMONIALS.len())
            .map(|i| if i == current { "● " } else { "○ " })
            .collect();

        let lines = vec![
            Line::styled(
                "What Our Customers Say",
                Style::default().add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
            Line::from(""),
            Line::styled(format!("{indent}{stars}"), Style::default().fg(Color::Yellow)),
            Line::from(""),
            Line::styled(
                format!("{indent}\u{201c}{}\u{201d}", testimonial.quote),
                Style::default().fg(body_color),
            ),
            Line::from(""),
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(
                    testimonial.name,
                    Style::default().fg(body_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", testimonial.role),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
            Line::styled(dots, Style::default().fg(Color::Gray)).alignment(Alignment::Center),
            Line::styled(
                "←/→ Prev/Next │ 1-4 Jump",
                Style::default().fg(Color::DarkGray),
            )
            .alignment(Alignment::Center),
        ];

        let section = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(section, cx.area);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        use crossterm::event::KeyCode;

        let Event::Key(key) = event else { return None };
        match key.code {
            KeyCode::Left => {
                let _ = self.carousel.update(Carousel::rewind);
                Some(Action::Noop)
            }
            KeyCode::Right => {
                let _ = self.carousel.update(Carousel::advance);
                Some(Action::Noop)
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = usize::from(c as u8 - b'0');
                if (1..=TESTIMONIALS.len()).contains(&index) {
                    let _ = self.carousel.update(|car| car.jump(index - 1));
                    Some(Action::Noop)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
