//! Query engine module
//!
//! Filtering, sorting and leaderboard summaries over the normalized dataset.

mod engine;
mod state;


pub use engine::*;
pub use state::*;
