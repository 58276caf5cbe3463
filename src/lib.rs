pub mod arena;
pub mod benchmark;
pub mod board;
pub mod chain;
pub mod config;
pub mod error;
pub mod eye;
pub mod eye_potential;
pub mod fast_random;
pub mod grid;
pub mod group;
pub mod hash;
pub mod health;
pub mod life;
pub mod nat_map;
pub mod nat_set;
pub mod neighbor;
pub mod perf_counter;
pub mod stats;
pub mod territory;
pub mod types;
pub mod worth;

// Re-export main types
pub use benchmark::Benchmark;
pub use board::{Board, CapturedStone, EyeView, GroupView, MoveRecord};
pub use config::{EngineConfig, Weights};
pub use error::{ConfigError, IllegalMove, InvariantViolation};
pub use eye::EyeType;
pub use grid::Stone;
pub use hash::{Hash, ZOBRIST};
pub use perf_counter::PerfCounter;
pub use stats::{EvalStats, Phase};
pub use types::*;
pub use worth::{PositionalScore, WorthInfo, WINNING_VALUE};
