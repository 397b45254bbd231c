// report.rs - Resolved-run report

use std::fs;

use serde::{Deserialize, Serialize};

use crate::core::settings::ToolSettings;
use crate::engine::ArgumentVector;

/// Snapshot of a fully resolved invocation.
///
/// Captures everything needed to reproduce a run: the command line that
/// produced it, the resolved settings block and the synthesized argument
/// vector. Written as JSON on request; purely observability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated: String,
    pub version: String,
    pub command_line: String,
    pub settings: ToolSettings,
    pub argv: Vec<String>,
}

impl RunReport {
    pub fn new(command_line: &str, settings: &ToolSettings, argv: &ArgumentVector) -> Self {
        Self {
            generated: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            command_line: command_line.to_string(),
            settings: settings.clone(),
            argv: argv.tokens().map(str::to_string).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize run report: {}", e))
    }

    pub fn to_file(&self, path: &str) -> Result<(), String> {
        let content = self.to_json()?;
        fs::write(path, content)
            .map_err(|e| format!("Failed to write run report '{}': {}", path, e))?;
        println!("📄 Run report written to: {}", path);
        Ok(())
    }
}
