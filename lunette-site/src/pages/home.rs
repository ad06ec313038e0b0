//! Home page: hero, the 3D showcase section, the "Why Choose Us" feature
//! cards, the testimonial carousel and a footer, stacked in one scrollable
//! viewport. The `home` and `showcase` anchors live here and nowhere else.

use crate::components::{testimonials, SceneView, TestimonialsSection};
use crate::config::MotionOptions;
use crate::model::FEATURES;
use crate::pages::{scroll_key_delta, section_rect, wheel_delta};
use lunette_core::{
    depth_scale, fade_opacity, region_progress, Action, AppContext, Component, Context, Entity,
    Event, EventContext, TaskTracker, Viewport,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::{Duration, Instant};

const HERO_MIN_ROWS: u16 = 18;
const SHOWCASE_ROWS: u16 = 26;
const FEATURES_ROWS: u16 = 16;
const FOOTER_ROWS: u16 = 4;

pub struct HomePage {
    viewport: Entity<Viewport>,
    scene: SceneView,
    testimonials: TestimonialsSection,
    tasks: TaskTracker,
    frame_period: Duration,
}

impl HomePage {
    pub fn new(cx: &AppContext, options: &MotionOptions) -> Self {
        Self {
            viewport: cx.new_entity(Viewport::new()),
            scene: SceneView::eyeglasses(),
            testimonials: TestimonialsSection::new(cx, options.auto_advance()),
            tasks: TaskTracker::new(),
            frame_period: options.frame(),
        }
    }

    pub fn viewport(&self) -> Entity<Viewport> {
        self.viewport.clone()
    }

    #[cfg(test)]
    pub(crate) fn testimonials_carousel(&self) -> Entity<lunette_core::Carousel> {
        self.testimonials.carousel()
    }
}

impl Component for HomePage {
    fn on_mount(&mut self, cx: &mut Context) {
        self.testimonials.on_mount(cx);
    }

    fn on_enter(&mut self, cx: &mut Context) {
        // Frame clock while the page is active: the showcase spin and any
        // in-flight glide resolve during render and just need frames to
        // land on.
        let period = self.frame_period;
        let handle = cx.spawn_task(move |app| async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                app.refresh();
            }
        });
        self.tasks.track(handle);
        self.testimonials.on_enter(cx);
    }

    fn on_exit(&mut self, cx: &mut Context) {
        self.tasks.abort_all();
        self.testimonials.on_exit(cx);
    }

    fn on_shutdown(&mut self, cx: &mut Context) {
        self.tasks.abort_all();
        self.testimonials.on_exit(cx);
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let area = cx.area;
        let hero_rows = area.height.max(HERO_MIN_ROWS);
        let showcase_top = f32::from(hero_rows);
        let content_rows = hero_rows
            + SHOWCASE_ROWS
            + FEATURES_ROWS
            + testimonials::SECTION_ROWS
            + FOOTER_ROWS;

        let now = Instant::now();
        let offset = self
            .viewport
            .update(|v| {
                v.set_layout(area.height, content_rows);
                v.register_anchor("home", 0.0);
                v.register_anchor("showcase", showcase_top);
                v.offset(now)
            })
            .unwrap_or(0.0);

        // Spin speed follows scroll depth, clamped like the original
        // showcase model.
        let speed = (0.5 + f64::from(offset) * 0.02).min(1.5);
        self.scene.set_speed(speed * 0.05);
        self.scene.step();

        if let Some(rect) = section_rect(area, offset, 0.0, hero_rows) {
            render_hero(frame, rect);
        }

        if let Some(rect) = section_rect(area, offset, showcase_top, SHOWCASE_ROWS) {
            let progress = region_progress(offset, area.height, showcase_top, SHOWCASE_ROWS);
            self.scene.render(
                frame,
                rect,
                f64::from(depth_scale(progress)),
                fade_opacity(progress),
            );
        }

        let features_top = showcase_top + f32::from(SHOWCASE_ROWS);
        if let Some(rect) = section_rect(area, offset, features_top, FEATURES_ROWS) {
            render_features(frame, rect);
        }

        let testimonials_top = features_top + f32::from(FEATURES_ROWS);
        if let Some(rect) = section_rect(area, offset, testimonials_top, testimonials::SECTION_ROWS)
        {
            let mut section_cx = Context::new(cx.app.clone(), rect);
            self.testimonials.render(frame, &mut section_cx);
        }

        let footer_top = testimonials_top + f32::from(testimonials::SECTION_ROWS);
        if let Some(rect) = section_rect(area, offset, footer_top, FOOTER_ROWS) {
            render_footer(frame, rect);
        }
    }

    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        match &event {
            Event::Key(key) => {
                if let Some(delta) = scroll_key_delta(key, cx.area.height.saturating_sub(2)) {
                    let _ = self.viewport.update(|v| v.scroll_by(delta));
                    return Some(Action::Noop);
                }
                self.testimonials.handle_event(event, cx)
            }
            Event::Mouse(mouse) => wheel_delta(mouse).map(|delta| {
                let _ = self.viewport.update(|v| v.scroll_by(delta));
                Action::Noop
            }),
            Event::Resize(..) => None,
        }
    }
}

fn render_hero(frame: &mut ratatui::Frame, area: Rect) {
    let pad = usize::from(area.height.saturating_sub(8) / 2);
    let mut lines = vec![Line::from(""); pad];
    lines.extend([
        Line::styled(
            "I D É E   O P T I C A L S",
            Style::default().add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        Line::from("").alignment(Alignment::Center),
        Line::styled(
            "See the world differently",
            Style::default().fg(Color::Gray),
        )
        .alignment(Alignment::Center),
        Line::from(""),
        Line::styled(
            "Handcrafted frames for people who notice the details.",
            Style::default().fg(Color::DarkGray),
        )
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(""),
        Line::styled("↓ scroll", Style::default().fg(Color::DarkGray)).alignment(Alignment::Center),
    ]);
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_features(frame: &mut ratatui::Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::styled("Why Choose Us", Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Line::styled(
            "Excellence in every detail, commitment in every frame",
            Style::default().fg(Color::DarkGray),
        )
        .alignment(Alignment::Center),
        Line::from(""),
    ];
    for feature in &FEATURES {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", feature.icon)),
            Span::styled(feature.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::styled(
            format!("     {}", feature.blurb),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut ratatui::Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled("Idée Opticals", Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Line::styled(
            "© 2026 Idée Opticals · All frames made in our atelier",
            Style::default().fg(Color::DarkGray),
        )
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunette_core::AppContext;
    use ratatui::{backend::TestBackend, Terminal};

    // Render the page twice on an 80x24 test terminal: once to mount the
    // viewport, then again after scrolling to `offset`. Returns the screen
    // contents as text.
    fn screen_at(offset: f32) -> String {
        let app = AppContext::detached();
        let mut page = HomePage::new(&app, &crate::config::MotionOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        for _ in 0..2 {
            terminal
                .draw(|frame| {
                    let mut cx = Context::new(app.clone(), frame.area());
                    page.render(frame, &mut cx);
                })
                .unwrap();
            page.viewport().update(|v| v.scroll_by(offset)).unwrap();
        }
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn hero_opens_the_page() {
        let screen = screen_at(0.0);
        assert!(screen.contains("See the world differently"));
    }

    #[test]
    fn feature_cards_sit_between_showcase_and_testimonials() {
        // Hero fills the 24-row screen, the showcase follows; the features
        // section starts right after it.
        let features_top = 24.0 + f32::from(SHOWCASE_ROWS);
        let screen = screen_at(features_top);
        assert!(screen.contains("Why Choose Us"));
        assert!(screen.contains("Lifetime Warranty"));
    }

    #[test]
    fn footer_closes_the_page() {
        let screen = screen_at(10_000.0);
        assert!(screen.contains("© 2026"));
    }
}
