//! Platform abstraction layer
//!
//! Device-independent pieces of the drivers:
//! - Input: held keys and on-screen buttons folded into [`TickInput`](crate::sim::TickInput)
//! - Autopilot: scripted pilot for the headless demo
//! - Headless: seeded demo run summarized as JSON by the native binary

pub mod autopilot;
pub mod headless;
pub mod input;

pub use autopilot::autopilot;
pub use headless::{DemoSummary, run_demo};
pub use input::{Command, InputState, TouchButton};
