use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::ShoppingEntry;

/// Label of the per-row delete action.
pub(crate) const BOUGHT_LABEL: &str = "Bought";

/// Build one list row: `item, amount` followed by the Bought action.
pub(crate) fn entry_line(entry: &ShoppingEntry) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{}, ", entry.item)),
        Span::raw(entry.amount.clone()),
        Span::raw("  "),
        Span::styled(
            BOUGHT_LABEL,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Produce a column centered within `area` that spans `percent_x` of its
/// width. Narrow terminals get the full width.
pub(crate) fn centered_column(percent_x: u16, min_width: u16, area: Rect) -> Rect {
    if area.width <= min_width {
        return area;
    }

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    if horizontal[1].width < min_width {
        area
    } else {
        horizontal[1]
    }
}

/// Move `selected` by `offset`, clamped to a list of `len` rows.
pub(crate) fn step_selection(selected: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = (len - 1) as isize;
    (selected as isize + offset).clamp(0, max) as usize
}
