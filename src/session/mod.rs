//! Frame-loop context: configuration, input, score ticks, and the per-frame driver.

/// Game configuration.
pub mod config;
/// Frame-loop context and runner.
pub mod frame_loop;
/// Keyboard input model and movement rule.
pub mod input;
/// Scheduled score tick events.
pub mod ticker;
