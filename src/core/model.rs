// model.rs - Maximum-likelihood model selection

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Maximum-likelihood substitution model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MlModel {
    Jtt,
    Wag,
    Lg,
    Jc,
    Gtr,
}

impl FromStr for MlModel {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jtt" => Ok(MlModel::Jtt),
            "wag" => Ok(MlModel::Wag),
            "lg" => Ok(MlModel::Lg),
            "jc" => Ok(MlModel::Jc),
            "gtr" => Ok(MlModel::Gtr),
            _ => Err(BridgeError::UnknownModel(s.to_string())),
        }
    }
}

impl MlModel {
    /// Engine selector triple (use_gtr, use_lg, use_wag).
    ///
    /// JTT and JC both map to all-false: JTT is the engine's protein
    /// default, JC its nucleotide default.
    pub fn selectors(&self) -> (bool, bool, bool) {
        match self {
            MlModel::Jtt => (false, false, false),
            MlModel::Wag => (false, false, true),
            MlModel::Lg => (false, true, false),
            MlModel::Jc => (false, false, false),
            MlModel::Gtr => (true, false, false),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MlModel::Jtt => "jtt",
            MlModel::Wag => "wag",
            MlModel::Lg => "lg",
            MlModel::Jc => "jc",
            MlModel::Gtr => "gtr",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MlModel::Jtt => "Jones-Taylor-Thorton 1992 (amino acids only)",
            MlModel::Wag => "Whelan-And-Goldman 2001 (amino acids only)",
            MlModel::Lg => "Le-Gascuel 2008 (amino acids only)",
            MlModel::Jc => "Jukes-Cantor (nucleotides only)",
            MlModel::Gtr => "Generalized time-reversible (nucleotides only)",
        }
    }
}
