//! Command implementations

pub mod check;
pub mod play;
pub mod score;

pub use check::{CheckResult, check_rack};
pub use play::run_play;
pub use score::{ScoreResult, score_word};
