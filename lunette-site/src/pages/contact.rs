//! Contact page: a plain data-entry form. Nothing is submitted anywhere;
//! the fields exist, the send button does not do anything.

use lunette_core::{Action, Component, Context, Event, EventContext};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

#[derive(Default)]
pub struct ContactPage {
    focus: Option<Field>,
    name: String,
    email: String,
    message: String,
}

impl ContactPage {
    pub fn new() -> Self {
        Self {
            focus: Some(Field::Name),
            ..Self::default()
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn render_field(
        &self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
        field: Field,
        title: &str,
        value: &str,
    ) {
        let focused = self.focus == Some(field);
        let border = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if focused { "▏" } else { "" };
        let body = Paragraph::new(format!("{value}{cursor}")).block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
        frame.render_widget(body, area);
    }
}

impl Component for ContactPage {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(cx.area);

        let header = Paragraph::new(vec![
            Line::styled("Get in Touch", Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(
                "Tab/Shift-Tab to move between fields",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(header, chunks[0]);

        let name = self.name.clone();
        let email = self.email.clone();
        let message = self.message.clone();
        self.render_field(frame, chunks[1], Field::Name, "Name", &name);
        self.render_field(frame, chunks[2], Field::Email, "Email", &email);
        self.render_field(frame, chunks[3], Field::Message, "Message", &message);

        let send = Paragraph::new("[ Send Message ]").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(send, chunks[4]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        use crossterm::event::{KeyCode, KeyModifiers};

        let Event::Key(key) = event else { return None };
        let Some(focus) = self.focus else { return None };

        match key.code {
            KeyCode::Tab => {
                self.focus = Some(focus.next());
                Some(Action::Noop)
            }
            KeyCode::BackTab => {
                self.focus = Some(focus.prev());
                Some(Action::Noop)
            }
            KeyCode::Backspace => {
                self.field_mut(focus).pop();
                Some(Action::Noop)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.field_mut(focus).push(c);
                Some(Action::Noop)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use lunette_core::AppContext;
    use ratatui::layout::Rect;

    fn cx() -> EventContext {
        EventContext::new(AppContext::detached(), Rect::new(0, 0, 80, 24))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let mut page = ContactPage::new();
        let mut cx = cx();

        for c in "Ada".chars() {
            assert_eq!(page.handle_event(key(KeyCode::Char(c)), &mut cx), Some(Action::Noop));
        }
        page.handle_event(key(KeyCode::Tab), &mut cx);
        page.handle_event(key(KeyCode::Char('a')), &mut cx);
        page.handle_event(key(KeyCode::Backspace), &mut cx);

        assert_eq!(page.name, "Ada");
        assert_eq!(page.email, "");
    }

    #[test]
    fn focus_cycles_through_all_three_fields() {
        let mut page = ContactPage::new();
        let mut cx = cx();

        page.handle_event(key(KeyCode::Tab), &mut cx);
        assert_eq!(page.focus, Some(Field::Email));
        page.handle_event(key(KeyCode::Tab), &mut cx);
        assert_eq!(page.focus, Some(Field::Message));
        page.handle_event(key(KeyCode::Tab), &mut cx);
        assert_eq!(page.focus, Some(Field::Name));
        page.handle_event(key(KeyCode::BackTab), &mut cx);
        assert_eq!(page.focus, Some(Field::Message));
    }
}
