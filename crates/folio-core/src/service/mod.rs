//! Application services built on the domain and ports.

mod posts;
mod secret;

pub use posts::{PostService, PostSubmission, UpdateOutcome};
pub use secret::SharedSecret;
