pub mod batch;
pub mod engine;
pub mod params;

pub use batch::{run_batch, run_batch_parallel, run_batch_with_progress, BatchConfig, BatchOutcome};
pub use engine::{build_deck, simulate_game, simulate_game_with_policy, GameOutcome};
pub use params::GameParams;
