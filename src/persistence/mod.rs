//! Database layer: pool, migrations, and the order store.

mod orders;
mod pool;

pub use orders::{
    WindowFilter, find_by_window, get_order_by_id, insert_order, update_order_status,
};
pub use pool::{connect_and_migrate, run_migrations};
pub use sqlx::PgPool;
