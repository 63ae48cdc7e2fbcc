//! In-memory implementations - fallback when no database is configured.

mod posts;

pub use posts::InMemoryPostRepository;
