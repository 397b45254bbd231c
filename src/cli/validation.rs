// validation.rs - Input validation utilities

use std::str::FromStr;

use crate::cli::args::Args;
use crate::core::{InvocationConfig, MlModel, ModelOptions, SequenceOptions, TopologyOptions};

/// Alphabet sizes the engine understands
const NUCLEOTIDE_CODES: i32 = 4;
const PROTEIN_CODES: i32 = 20;

/// Validate command line arguments into a typed invocation configuration.
///
/// Switches that were not given stay unset, leaving the engine defaults
/// unchanged rather than forcing an explicit false.
pub fn validate_args(args: &Args) -> Result<InvocationConfig, String> {
    let input = args
        .input
        .as_ref()
        .ok_or("input alignment file is required")?;

    if let Some(ncodes) = args.ncodes {
        if ncodes != NUCLEOTIDE_CODES && ncodes != PROTEIN_CODES {
            return Err(format!(
                "Invalid ncodes {}: use 4 (nucleotide) or 20 (protein)",
                ncodes
            ));
        }
    }

    if let Some(ncat) = args.ncat {
        if ncat < 1 {
            return Err(format!(
                "Invalid ncat {}: must be at least 1 (1 disables the CAT model)",
                ncat
            ));
        }
    }

    let ml_model = match &args.ml_model {
        Some(name) => Some(MlModel::from_str(name).map_err(|e| e.to_string())?),
        None => None,
    };

    Ok(InvocationConfig {
        input: input.clone(),
        sequence: SequenceOptions {
            ncodes: args.ncodes,
            pseudo: args.pseudo.then_some(true),
            quote: args.quote.then_some(true),
        },
        model: ModelOptions {
            ml_model,
            ncat: args.ncat,
            second: args.second.then_some(true),
            fastest: args.fastest.then_some(true),
        },
        topology: TopologyOptions {
            spr: args.spr,
            mlnni: args.mlnni,
            exhaustive: args.exhaustive.then_some(true),
        },
        args: args.args.clone(),
    })
}
