use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::list::InputField;

/// Widget that currently receives key presses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Item,
    Amount,
    AddButton,
    List,
}

impl Focus {
    /// Next stop in the Tab order. The list is skipped while it is empty.
    pub(crate) fn next(self, list_empty: bool) -> Self {
        match self {
            Focus::Item => Focus::Amount,
            Focus::Amount => Focus::AddButton,
            Focus::AddButton if list_empty => Focus::Item,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Item,
        }
    }

    /// Previous stop in the Tab order (Shift-Tab).
    pub(crate) fn previous(self, list_empty: bool) -> Self {
        match self {
            Focus::Item if list_empty => Focus::AddButton,
            Focus::Item => Focus::List,
            Focus::Amount => Focus::Item,
            Focus::AddButton => Focus::Amount,
            Focus::List => Focus::AddButton,
        }
    }

    /// The text field behind this focus stop, if any.
    pub(crate) fn input(self) -> Option<InputField> {
        match self {
            Focus::Item => Some(InputField::Item),
            Focus::Amount => Some(InputField::Amount),
            Focus::AddButton | Focus::List => None,
        }
    }
}

fn label(field: InputField) -> &'static str {
    match field {
        InputField::Item => "Item",
        InputField::Amount => "Amount",
    }
}

fn placeholder(field: InputField) -> &'static str {
    match field {
        InputField::Item => "Enter item",
        InputField::Amount => "Enter amount",
    }
}

/// Both inputs take any printable character; nothing is validated.
pub(crate) fn accepts(ch: char) -> bool {
    !ch.is_control()
}

/// Render a single input line, showing the placeholder while it is empty.
pub(crate) fn build_input_line(field: InputField, value: &str, active: bool) -> Line<'static> {
    let (display, style) = if value.is_empty() {
        (
            placeholder(field).to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if active {
        (value.to_string(), Style::default().fg(Color::Yellow))
    } else {
        (value.to_string(), Style::default())
    };

    let label_style = if active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{:<8}", format!("{}:", label(field))), label_style),
        Span::styled(display, style),
    ])
}

/// Column offset of the text cursor inside the input panel.
pub(crate) fn cursor_column(value: &str) -> u16 {
    8 + value.chars().count() as u16
}

pub(crate) fn build_add_button(active: bool) -> Line<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(vec![Span::raw(" ".repeat(8)), Span::styled("[ ADD ]", style)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn tab_order_skips_an_empty_list() {
        assert_eq!(Focus::AddButton.next(true), Focus::Item);
        assert_eq!(Focus::AddButton.next(false), Focus::List);
        assert_eq!(Focus::Item.previous(true), Focus::AddButton);
        assert_eq!(Focus::Item.previous(false), Focus::List);
    }

    #[test]
    fn empty_input_shows_placeholder() {
        let line = build_input_line(InputField::Amount, "", true);
        assert_eq!(text(&line), "Amount: Enter amount");
    }

    #[test]
    fn filled_input_shows_value() {
        let line = build_input_line(InputField::Item, "Milk", false);
        assert_eq!(text(&line), "Item:   Milk");
        assert_eq!(cursor_column("Milk"), 12);
    }

    #[test]
    fn control_characters_are_rejected() {
        assert!(accepts('x'));
        assert!(accepts(' '));
        assert!(!accepts('\u{7}'));
    }
}
