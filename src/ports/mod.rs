//! Capability interfaces between the core and its collaborators

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::{GameObserver, TrainingObserver};
