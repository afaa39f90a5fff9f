//! Restaurant order lifecycle and analytics engine: order intake and
//! status tracking, real-time fan-out to dashboard sessions, and
//! time-windowed business metrics over the order history.

pub mod analytics;
pub mod api;
pub mod notify;
pub mod persistence;
pub mod types;
