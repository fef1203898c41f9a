//! Plain-text board rendering.

use ticketboard::domain::lookup::priority_label;
use ticketboard::{BoardSnapshot, Column, GroupingMode, Ticket};

/// Renders every column followed by any groups that have no column.
pub fn render_board(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();

    for column in snapshot.columns() {
        out.push_str(&column_header(&column, snapshot.view.grouping));
        for ticket in column.tickets {
            out.push_str(&ticket_line(ticket));
        }
    }

    let unlisted = snapshot.grouped.ungoverned_keys();
    if !unlisted.is_empty() {
        out.push_str("Unlisted groups:\n");
        for key in unlisted {
            out.push_str(&format!("  {} ({})\n", key, snapshot.grouped.group(key).len()));
        }
    }

    out
}

/// Formats a column heading such as `[bx-circle] Todo (2)`.
pub fn column_header(column: &Column<'_>, grouping: GroupingMode) -> String {
    let icon = if column.icon.is_empty() {
        String::new()
    } else {
        format!("[{}] ", column.icon)
    };
    let presence = match grouping {
        GroupingMode::Users if column.available => " - available",
        GroupingMode::Users => " - away",
        _ => "",
    };
    format!("{}{} ({}){}\n", icon, column.title, column.count(), presence)
}

/// Formats one ticket row; the priority label is omitted when unknown.
pub fn ticket_line(ticket: &Ticket) -> String {
    let label = priority_label(&ticket.priority.to_string());
    if label.is_empty() {
        format!("  {:<8} {}\n", ticket.id, ticket.title)
    } else {
        format!("  {:<8} {} [{}]\n", ticket.id, ticket.title, label)
    }
}
