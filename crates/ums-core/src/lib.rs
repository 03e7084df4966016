//! User Management Studio core.
//!
//! Holds the in-memory record store and the dashboard controller that
//! moves it between the `Idle` and `Editing(i)` states. Records are never
//! persisted; a [`Dashboard`] lives exactly as long as its page.

pub mod dashboard;
pub mod store;

pub use dashboard::{Action, Dashboard, Transition};
pub use store::RecordStore;
