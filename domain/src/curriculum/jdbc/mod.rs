//! JDBC curriculum
//!
//! Every lesson is a named static so a consumer can import one topic
//! directly, and [`CATALOG`] composes them in display order:
//!
//! 1. [`INTRO`]: what JDBC is
//! 2. [`DRIVERS`]: driver types and URLs
//! 3. [`CONNECTIONS`]: DriverManager, DataSource, pooling
//! 4. [`STATEMENTS`]: plain `Statement`
//! 5. [`PREPARED_STATEMENTS`]: parameter binding
//! 6. [`RESULT_SETS`]: reading rows
//! 7. [`TRANSACTIONS`]: commit, rollback, isolation
//! 8. [`BATCH_UPDATES`]: bulk writes
//!
//! A lesson missing from this list is a compile error, never a silently
//! shorter catalog.

mod batch_updates;
mod connections;
mod drivers;
mod intro;
mod prepared_statements;
mod result_sets;
mod statements;
mod transactions;

pub use batch_updates::BATCH_UPDATES;
pub use connections::CONNECTIONS;
pub use drivers::DRIVERS;
pub use intro::INTRO;
pub use prepared_statements::PREPARED_STATEMENTS;
pub use result_sets::RESULT_SETS;
pub use statements::STATEMENTS;
pub use transactions::TRANSACTIONS;

use crate::catalog::Catalog;
use std::sync::LazyLock;

pub const CATALOG_ID: &str = "jdbc";

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(
        CATALOG_ID,
        "JDBC",
        "Connect Java applications to relational databases: drivers, connections, statements, result sets and transactions.",
        "database",
    )
    .with_topics([
        INTRO.clone(),
        DRIVERS.clone(),
        CONNECTIONS.clone(),
        STATEMENTS.clone(),
        PREPARED_STATEMENTS.clone(),
        RESULT_SETS.clone(),
        TRANSACTIONS.clone(),
        BATCH_UPDATES.clone(),
    ])
});

/// The composed JDBC catalog; built on first access and shared afterwards
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
