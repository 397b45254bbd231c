// config.rs - Configuration file support

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{InvocationConfig, ModelOptions, SequenceOptions, TopologyOptions};

/// TOML configuration file contents. Every key is optional; command line
/// arguments override these settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Input alignment file
    pub input: Option<String>,

    /// Extra arguments passed verbatim to the engine
    pub args: Option<Vec<String>>,

    // Option groups
    pub sequence: Option<SequenceOptions>,
    pub model: Option<ModelOptions>,
    pub topology: Option<TopologyOptions>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self {
            input: None,
            args: None,
            sequence: None,
            model: None,
            topology: None,
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Capture a resolved invocation as a reusable configuration file
    pub fn from_invocation(config: &InvocationConfig) -> Self {
        Self {
            input: Some(config.input.clone()),
            args: if config.args.is_empty() {
                None
            } else {
                Some(config.args.clone())
            },
            sequence: Some(config.sequence.clone()),
            model: Some(config.model.clone()),
            topology: Some(config.topology.clone()),
        }
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# ftbridge.toml - Configuration file for ftbridge
# Command line arguments will override these settings

# Input alignment file (FASTA or interleaved phylip)
input = "/path/to/alignment.fasta"

# Extra arguments passed verbatim to the engine
# args = ["-nosupport", "-seed", "1234"]

# =============================================================================
# SEQUENCE
# =============================================================================

[sequence]

# Sequence type: 4 for nucleotide, 20 for protein
ncodes = 4

# Use pseudocounts to estimate distances between sequences with little or
# no overlap. Recommended for highly gapped sequences (weight=1).
pseudo = false

# Quote sequence names in the output and allow spaces, commas, parentheses
# and colons in them, but not single quote characters (fasta files only).
quote = false

# =============================================================================
# MODEL OPTIONS
# =============================================================================

[model]

# Maximum likelihood model:
#  - jtt: Jones-Taylor-Thorton 1992 (a.a. only)
#  - wag: Whelan-And-Goldman 2001 (a.a. only)
#  - lg:  Le-Gascuel 2008 (a.a. only)
#  - jc:  Jukes-Cantor (nt only)
#  - gtr: Generalized time-reversible (nt only)
ml_model = "jtt"

# The number of rate categories of sites. Enter 1 for no CAT model
# (default 20).
ncat = 20

# 2nd-level top hits heuristic. Reduces memory usage and running time but
# may lead to marginal reductions in tree quality.
second = true

# Faster neighbor-joining: turn off local hill-climbing search and use the
# top-hits heuristic more aggressively. Recommended for over 50,000
# sequences.
fastest = true

# =============================================================================
# TOPOLOGY REFINEMENT
# =============================================================================

[topology]

# Number of Subtree-Prune-Regraft rounds (default 2)
spr = 2

# Limit the number of rounds of maximum-likelihood nearest-neighbor
# interchanges. If set to -1, do 2*log(N) rounds, where N is the number of
# unique sequences (default). If set to 0, turn off both min-evo NNIs and
# SPRs.
mlnni = -1

# Turn off heuristics to avoid constant subtrees (affects both ML and ME
# NNIs). Additionally, always optimize all 5 branches at each NNI in 2
# rounds.
exhaustive = false
"#
        .to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
