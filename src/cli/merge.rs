// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input and passthrough arguments
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.args.is_empty() {
            if let Some(args) = config.args {
                self.args = args;
            }
        }

        // Sequence group
        if let Some(sequence) = config.sequence {
            if self.ncodes.is_none() {
                self.ncodes = sequence.ncodes;
            }
            if !self.pseudo && sequence.pseudo.unwrap_or(false) {
                self.pseudo = true;
            }
            if !self.quote && sequence.quote.unwrap_or(false) {
                self.quote = true;
            }
        }

        // Model group
        if let Some(model) = config.model {
            if self.ml_model.is_none() {
                self.ml_model = model.ml_model.map(|m| m.name().to_string());
            }
            if self.ncat.is_none() {
                self.ncat = model.ncat;
            }
            if !self.second && model.second.unwrap_or(false) {
                self.second = true;
            }
            if !self.fastest && model.fastest.unwrap_or(false) {
                self.fastest = true;
            }
        }

        // Topology group
        if let Some(topology) = config.topology {
            if self.spr.is_none() {
                self.spr = topology.spr;
            }
            if self.mlnni.is_none() {
                self.mlnni = topology.mlnni;
            }
            if !self.exhaustive && topology.exhaustive.unwrap_or(false) {
                self.exhaustive = true;
            }
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
