pub mod board;
pub mod grouping;
pub mod lookup;
pub mod sorting;
pub mod ticket;

pub use board::{BoardSnapshot, BoardView, Column};
pub use grouping::{
    group_by_priority, group_by_status, group_by_user, group_tickets, GroupedResult, GroupingMode,
};
pub use lookup::{compute_availability, compute_status_mapping};
pub use sorting::{sort_by_priority_desc, sort_by_title, OrderBy};
pub use ticket::{BoardPayload, Priority, Ticket, TicketStatus, User};
