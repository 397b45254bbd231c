// lib.rs - ftbridge library root

//! # ftbridge - Typed embedding bridge for the FastTree phylogenetics engine
//!
//! This library lets a host process drive FastTree's maximum-likelihood tree
//! construction through a structured, typed call instead of a raw argument
//! string. Grouped options (sequence, model, topology) are validated once at
//! the boundary, resolved into an explicit settings block plus a C-style
//! argument vector, and handed to the engine entry point in-process.
//!
//! ## Features
//!
//! - **Typed option groups**: sequence, model and topology schemas with
//!   optional fields; absent options leave engine defaults untouched
//! - **Dynamic boundary**: loosely typed host values are coerced with
//!   per-key type checking and structured errors
//! - **Engine seam**: the tree builder sits behind a trait, so hosts can
//!   bind the embedded native object or substitute their own
//! - **Run reports**: resolved settings and argument vectors serialize to
//!   JSON for reproducibility
//!
//! Invocations must be serialized by the host; the bridge performs no
//! locking and native engines keep process-wide state between calls.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use ftbridge::prelude::*;
//!
//! struct StubEngine;
//!
//! impl TreeEngine for StubEngine {
//!     fn run(&mut self, _settings: &ToolSettings, _argv: &ArgumentVector) -> i32 {
//!         0
//!     }
//!     fn name(&self) -> &'static str {
//!         "stub"
//!     }
//!     fn description(&self) -> &'static str {
//!         "Engine that does nothing"
//!     }
//! }
//!
//! let mut config = InvocationConfig::new("alignment.fasta");
//! config.model.ml_model = Some(MlModel::Wag);
//! config.model.ncat = Some(4);
//!
//! let mut settings = ToolSettings::default();
//! let mut engine = StubEngine;
//! run(&mut engine, &mut settings, &config)?;
//! # Ok::<(), ftbridge::BridgeError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod engine;
pub mod error;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config};
    pub use crate::core::{apply_config, invoke, run, RunReport};
    pub use crate::core::{ConfigGroup, ConfigValue, InvocationConfig, MlModel, ToolSettings};
    pub use crate::engine::{ArgumentVector, TreeEngine, PROGRAM_NAME};
    pub use crate::error::{BridgeError, ValueType};
    pub use crate::quick;
}

// Re-export main types at the root level for convenience
pub use crate::core::{InvocationConfig, MlModel, RunReport, ToolSettings};
pub use crate::engine::{ArgumentVector, TreeEngine};
pub use crate::error::{BridgeError, ValueType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("ftbridge v{} - Typed FastTree embedding bridge", VERSION)
}

/// Run a quick analysis: engine defaults plus raw passthrough arguments.
pub fn quick(
    engine: &mut dyn TreeEngine,
    input: &str,
    args: &[String],
) -> Result<(), BridgeError> {
    let mut config = InvocationConfig::new(input);
    config.args = args.to_vec();
    let mut settings = ToolSettings::default();
    crate::core::run(engine, &mut settings, &config)
}
