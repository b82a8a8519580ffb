//! Infrastructure Layer
//!
//! Database implementations and the in-process session store.

pub mod memory;
pub mod postgres;

pub use memory::InMemorySessionStore;
pub use postgres::PgUserRepository;
