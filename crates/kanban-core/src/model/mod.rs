pub mod selector;
pub mod ticket;

pub use selector::{Grouping, Ordering, ParseSelectorError, TicketField};
pub use ticket::{BoardData, Priority, PriorityOutOfRange, Status, Ticket, User};
