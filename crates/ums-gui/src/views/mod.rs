//! View components
//!
//! Views render from [`crate::state::AppState`] and queue dashboard
//! [`ums_core::Action`]s; the app applies the queue once the frame is laid
//! out.

mod dashboard;
mod form;
mod header;
mod table;

pub use dashboard::DashboardView;
pub use form::FormView;
pub use header::HeaderView;
pub use table::RecordTableView;
