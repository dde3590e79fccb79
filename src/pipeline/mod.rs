//! Training pipeline
//!
//! Drives many environment games back-to-back and reports progress through
//! composable observers.

pub mod observers;
pub mod training;

pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use training::{SelfPlayTrainer, TrainingConfig, TrainingResult};
