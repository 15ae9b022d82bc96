//! kanban-core library.
//!
//! # Conventions
//!
//! - **Errors**: typed errors (`thiserror`) in the library, `anyhow::Result`
//!   where a caller only needs context.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod collate;
pub mod config;
pub mod error;
pub mod model;
pub mod projector;
pub mod source;
pub mod view;

pub use model::{BoardData, Grouping, Ordering, Priority, Status, Ticket, User};
pub use projector::{Group, project, project_board};
pub use view::{QueryHistory, SelectorStore, ViewSelectors, ViewStateStore};
