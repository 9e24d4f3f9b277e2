//! # OCW Calculation Engine
//!
//! 食數變更可能期間的計算引擎

pub mod anchor;
pub mod blackout;
pub mod deadline;
pub mod engine;
pub mod unlock;
pub mod window_v1;
pub mod window_v2;

// Re-export 主要類型
pub use anchor::TuesdayAnchor;
pub use blackout::BlackoutAdjuster;
pub use deadline::DeadlineCalculator;
pub use engine::WindowCalculator;
pub use unlock::UnlockAdjuster;
pub use window_v1::WindowV1;
pub use window_v2::WindowV2;
