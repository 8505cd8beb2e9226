//! planboard-rs: resource scheduling board engine.
//!
//! This crate provides the pure layout and interaction core of a
//! resource-by-time planning board: time/pixel mapping, interval lane
//! packing, row model construction and the gesture state machines that
//! turn pointer input into host-applied intents. Rendering, persistence
//! and business validation stay with the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{BoardEngine, BoardEngineConfig};
pub use error::{BoardError, BoardResult};
