pub mod engine;
pub mod error_responses;
pub mod state;

pub use engine::QuizEngine;
pub use state::QuizState;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Per-request rng. `StdRng` is `Send`, so it can live inside handler futures.
pub fn request_rng() -> StdRng {
    StdRng::from_entropy()
}
