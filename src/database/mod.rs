pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod setup;
pub mod standings;
pub mod tournaments;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
pub use standings::SqliteStandings;

#[cfg(test)]
pub(crate) fn fresh_connection() -> DbConn {
    let pool = create_memory_pool().expect("in-memory pool");
    let mut conn = get_connection(&pool).expect("pooled connection");
    setup::reset_database(&mut conn).expect("schema reset");
    conn
}
