// schema.rs - Typed configuration schema

use serde::{Deserialize, Serialize};

use crate::core::model::MlModel;
use crate::core::value::{ConfigGroup, ConfigValue};
use crate::error::BridgeError;

/// Sequence handling options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceOptions {
    /// Alphabet size: 4 for nucleotide, 20 for protein
    pub ncodes: Option<i32>,
    /// Use distance pseudocounts for barely overlapping sequences
    pub pseudo: Option<bool>,
    /// Quote sequence names in the output
    pub quote: Option<bool>,
}

impl SequenceOptions {
    /// Coerce a dynamic group into typed options
    pub fn from_group(group: &ConfigGroup) -> Result<Self, BridgeError> {
        Ok(Self {
            ncodes: group.get_int("ncodes")?,
            pseudo: group.get_bool("pseudo")?,
            quote: group.get_bool("quote")?,
        })
    }
}

/// Model options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Maximum-likelihood substitution model
    pub ml_model: Option<MlModel>,
    /// Number of rate categories of sites
    pub ncat: Option<i32>,
    /// Second-level top-hits heuristic
    pub second: Option<bool>,
    /// Faster neighbor-joining, recommended over 50,000 sequences
    pub fastest: Option<bool>,
}

impl ModelOptions {
    /// Coerce a dynamic group into typed options
    pub fn from_group(group: &ConfigGroup) -> Result<Self, BridgeError> {
        let ml_model = match group.get_text("ml_model")? {
            Some(name) => Some(name.parse()?),
            None => None,
        };
        Ok(Self {
            ml_model,
            ncat: group.get_int("ncat")?,
            second: group.get_bool("second")?,
            fastest: group.get_bool("fastest")?,
        })
    }
}

/// Topology refinement options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyOptions {
    /// Subtree-prune-regraft rounds
    pub spr: Option<i32>,
    /// Rounds of maximum-likelihood NNIs, -1 for 2*log(N)
    pub mlnni: Option<i32>,
    /// Exhaustive NNIs: no constant-subtree heuristics, optimize all
    /// five branches at each NNI
    pub exhaustive: Option<bool>,
}

impl TopologyOptions {
    /// Coerce a dynamic group into typed options
    pub fn from_group(group: &ConfigGroup) -> Result<Self, BridgeError> {
        Ok(Self {
            spr: group.get_int("spr")?,
            mlnni: group.get_int("mlnni")?,
            exhaustive: group.get_bool("exhaustive")?,
        })
    }
}

/// Complete, validated configuration for one invocation.
///
/// Absent options mean "leave the engine default unchanged". The free
/// argument list is appended verbatim to the synthesized command line and
/// never merged into the structured options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationConfig {
    /// Input alignment path
    pub input: String,
    #[serde(default)]
    pub sequence: SequenceOptions,
    #[serde(default)]
    pub model: ModelOptions,
    #[serde(default)]
    pub topology: TopologyOptions,
    /// Extra arguments passed through to the engine unmodified
    #[serde(default)]
    pub args: Vec<String>,
}

impl InvocationConfig {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            sequence: SequenceOptions::default(),
            model: ModelOptions::default(),
            topology: TopologyOptions::default(),
            args: Vec::new(),
        }
    }

    /// Validate a dynamic host configuration in one boundary pass.
    ///
    /// Absent groups behave exactly like empty ones. Raw argument elements
    /// are converted through their host string form; validation of their
    /// C-string representability happens when the argument vector is built.
    /// Any coercion failure aborts before the settings block is touched.
    pub fn from_dynamic(
        input: &str,
        sequence: Option<&ConfigGroup>,
        model: Option<&ConfigGroup>,
        topology: Option<&ConfigGroup>,
        args: Option<&[ConfigValue]>,
    ) -> Result<Self, BridgeError> {
        Ok(Self {
            input: input.to_string(),
            sequence: match sequence {
                Some(group) => SequenceOptions::from_group(group)?,
                None => SequenceOptions::default(),
            },
            model: match model {
                Some(group) => ModelOptions::from_group(group)?,
                None => ModelOptions::default(),
            },
            topology: match topology {
                Some(group) => TopologyOptions::from_group(group)?,
                None => TopologyOptions::default(),
            },
            args: args
                .unwrap_or(&[])
                .iter()
                .map(ConfigValue::to_string)
                .collect(),
        })
    }
}
