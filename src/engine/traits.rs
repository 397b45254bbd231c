// traits.rs - Engine entry-point seam

use crate::core::settings::ToolSettings;
use crate::engine::argv::ArgumentVector;

/// Entry point of a tree-building engine.
///
/// This is the only surface the bridge needs from the underlying
/// algorithm: hand over the resolved settings and the argument vector,
/// get back an exit code. Zero means success.
///
/// Hard precondition: the bridge performs no locking and native engines
/// keep process-wide state between calls, so hosts must serialize
/// invocations. Concurrent calls race on the engine's internal state.
pub trait TreeEngine {
    /// Run one tree construction and return the engine's exit code
    fn run(&mut self, settings: &ToolSettings, argv: &ArgumentVector) -> i32;

    /// Human-readable engine name
    fn name(&self) -> &'static str;

    /// Description of this engine binding
    fn description(&self) -> &'static str;
}
