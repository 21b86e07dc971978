use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::list::{InputField, ShoppingList};

use super::forms::{accepts, build_add_button, build_input_line, cursor_column, Focus};
use super::helpers::{centered_column, entry_line, step_selection};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Two inputs, a spacer and the ADD button, plus the panel border.
const INPUT_PANEL_HEIGHT: u16 = 6;
/// Rows skipped by PageUp / PageDown in the list.
const PAGE_STEP: isize = 5;

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Screen state: the view-model plus which widget has focus and which row
/// is highlighted.
pub struct App {
    list: ShoppingList,
    focus: Focus,
    selected: usize,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(list: ShoppingList) -> Self {
        let mut app = Self {
            list,
            focus: Focus::Item,
            selected: 0,
            status: None,
        };
        app.report_failure();
        app
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let list_empty = self.list.entries().is_empty();
        match code {
            KeyCode::Esc => return true,
            KeyCode::Tab => self.focus = self.focus.next(list_empty),
            KeyCode::BackTab => self.focus = self.focus.previous(list_empty),
            _ => match self.focus {
                Focus::Item | Focus::Amount => self.handle_input_key(code),
                Focus::AddButton => {
                    if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.save_item();
                    }
                }
                Focus::List => self.handle_list_key(code),
            },
        }
        false
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        let Some(field) = self.focus.input() else {
            return;
        };

        match code {
            KeyCode::Enter => self.save_item(),
            KeyCode::Backspace => {
                self.list.field_mut(field).pop();
            }
            KeyCode::Down if field == InputField::Item => self.focus = Focus::Amount,
            KeyCode::Up if field == InputField::Amount => self.focus = Focus::Item,
            KeyCode::Char(ch) if accepts(ch) => self.list.field_mut(field).push(ch),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let len = self.list.entries().len();
        match code {
            KeyCode::Up => self.selected = step_selection(self.selected, -1, len),
            KeyCode::Down => self.selected = step_selection(self.selected, 1, len),
            KeyCode::PageUp => self.selected = step_selection(self.selected, -PAGE_STEP, len),
            KeyCode::PageDown => self.selected = step_selection(self.selected, PAGE_STEP, len),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = len.saturating_sub(1),
            KeyCode::Enter
            | KeyCode::Delete
            | KeyCode::Char(' ')
            | KeyCode::Char('b')
            | KeyCode::Char('B') => self.mark_selected_bought(),
            _ => {}
        }
    }

    /// ADD: insert the current inputs, then hand focus back to the item field.
    fn save_item(&mut self) {
        let item = self.list.item().to_string();
        if self.list.add() {
            self.focus = Focus::Item;
            self.set_status(format!("Added {item}."), StatusKind::Info);
        }
        self.report_failure();
    }

    fn mark_selected_bought(&mut self) {
        let Some(entry) = self.list.entries().get(self.selected).cloned() else {
            return;
        };

        if self.list.mark_bought(entry.id) {
            self.set_status(format!("Bought {}.", entry.item), StatusKind::Info);
        }
        self.report_failure();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.list.entries().len();
        if len == 0 {
            self.selected = 0;
            if self.focus == Focus::List {
                self.focus = Focus::Item;
            }
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Mirror the view-model's latest store failure in the footer.
    fn report_failure(&mut self) {
        if let Some(err) = self.list.last_failure() {
            let text = err.describe();
            self.set_status(text, StatusKind::Error);
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let column = centered_column(60, 40, content_area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(INPUT_PANEL_HEIGHT), Constraint::Min(0)])
            .split(column);

        self.draw_inputs(frame, chunks[0]);
        self.draw_list(frame, chunks[1]);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_inputs(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("New item");
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let lines = vec![
            build_input_line(
                InputField::Item,
                self.list.item(),
                self.focus == Focus::Item,
            ),
            build_input_line(
                InputField::Amount,
                self.list.amount(),
                self.focus == Focus::Amount,
            ),
            Line::from(""),
            build_add_button(self.focus == Focus::AddButton),
        ];
        frame.render_widget(Paragraph::new(lines), inner);

        if let Some(field) = self.focus.input() {
            let row = match field {
                InputField::Item => 0,
                InputField::Amount => 1,
            };
            let cursor_x = inner.x + cursor_column(self.list.field(field));
            frame.set_cursor_position((cursor_x, inner.y + row));
        }
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let title = Span::styled(
            "Shopping List",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let block = Block::default().borders(Borders::ALL).title(title);

        if self.list.entries().is_empty() {
            let empty = Paragraph::new("No items to get...")
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .list
            .entries()
            .iter()
            .map(|entry| ListItem::new(entry_line(entry)))
            .collect();

        let highlight = if self.focus == Focus::List {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.focus {
            Focus::Item | Focus::Amount | Focus::AddButton => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Add   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Next   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Quit"),
            ]),
            Focus::List => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter/b]", key_style),
                Span::raw(" Bought   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Next   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }
}
