// assembler.rs - Invocation pipeline

use std::io::{self, Write};

use crate::core::schema::InvocationConfig;
use crate::core::settings::ToolSettings;
use crate::engine::{ArgumentVector, TreeEngine};
use crate::error::BridgeError;

/// Pseudocount weight applied when the `pseudo` option is given
const DISTANCE_PSEUDO_WEIGHT: f64 = 1.0;
/// Refresh threshold forced by the `fastest` heuristic
const TOPHITS_REFRESH_FASTEST: f64 = 0.5;
/// Highest ML-NNI optimization level, forced by exhaustive NNIs
const ML_ACCURACY_EXHAUSTIVE: i32 = 2;

/// Resolve a validated configuration into the settings block and build the
/// argument vector for the engine call.
///
/// Groups apply in a fixed order (sequence, model, topology) so that
/// derived values such as the `fastest` refresh threshold win over earlier
/// defaults; the free argument list is appended afterwards and never
/// merged into the structured settings. A trace of every resolved setting
/// goes to stderr.
///
/// Application is sequential without rollback: if a later step fails, the
/// settings written by earlier steps remain in place.
pub fn apply_config(
    settings: &mut ToolSettings,
    config: &InvocationConfig,
) -> Result<ArgumentVector, BridgeError> {
    eprintln!("> Setting options from arguments:\n");

    settings.file_name = Some(config.input.clone());
    eprintln!("- file_name = {}", config.input);

    // Sequence group
    if let Some(ncodes) = config.sequence.ncodes {
        settings.n_codes = ncodes;
    }
    eprintln!("- n_codes = {}", settings.n_codes);

    if config.sequence.pseudo.is_some() {
        // The shipped FastTreePy module assigns weight 1.0 whether the flag
        // is true or false.
        // TODO: confirm upstream whether `pseudo = false` should mean 0.0.
        settings.pseudo_weight = DISTANCE_PSEUDO_WEIGHT;
    }
    eprintln!("- pseudo_weight = {:.2}", settings.pseudo_weight);

    if let Some(quote) = config.sequence.quote {
        settings.quote = quote;
    }
    eprintln!("- quote = {}", settings.quote);

    // Model group
    if let Some(model) = config.model.ml_model {
        let (use_gtr, use_lg, use_wag) = model.selectors();
        settings.use_gtr = use_gtr;
        settings.use_lg = use_lg;
        settings.use_wag = use_wag;
    }
    eprintln!("- use_gtr = {}", settings.use_gtr);
    eprintln!("- use_lg = {}", settings.use_lg);
    eprintln!("- use_wag = {}", settings.use_wag);

    if let Some(ncat) = config.model.ncat {
        settings.n_rate_cats = ncat;
    }
    eprintln!("- n_rate_cats = {}", settings.n_rate_cats);

    if let Some(second) = config.model.second {
        settings.use_top_hits_2nd = second;
    }
    eprintln!("- use_top_hits_2nd = {}", settings.use_top_hits_2nd);

    if let Some(fastest) = config.model.fastest {
        settings.fastest = fastest;
        if fastest {
            settings.tophits_refresh = TOPHITS_REFRESH_FASTEST;
        }
    }
    eprintln!("- fastest = {}", settings.fastest);
    eprintln!("- tophits_refresh = {:.2}", settings.tophits_refresh);

    // Topology group
    if let Some(spr) = config.topology.spr {
        settings.spr = spr;
    }
    eprintln!("- spr = {}", settings.spr);

    if let Some(mlnni) = config.topology.mlnni {
        settings.ml_nni = mlnni;
    }
    eprintln!("- ml_nni = {}", settings.ml_nni);

    if config.topology.exhaustive.unwrap_or(false) {
        settings.ml_accuracy = ML_ACCURACY_EXHAUSTIVE;
        settings.fast_nni = false;
    }
    eprintln!("- ml_accuracy = {}", settings.ml_accuracy);
    eprintln!("- fast_nni = {}", settings.fast_nni);

    // Free argument list, appended verbatim after the program token
    let mut argv = ArgumentVector::new();
    for arg in &config.args {
        argv.push(arg)?;
    }

    Ok(argv)
}

/// Hand the assembled call to the engine and translate its exit status.
///
/// Both output streams are flushed before returning regardless of the
/// outcome: the host may have redirected them and needs deterministic
/// ordering relative to this call's return.
pub fn invoke(
    engine: &mut dyn TreeEngine,
    settings: &ToolSettings,
    argv: &ArgumentVector,
) -> Result<(), BridgeError> {
    eprintln!("\n> Calling: {} [{}]\n", argv, argv.argc());

    let code = engine.run(settings, argv);

    let _ = io::stdout().flush();
    let _ = io::stderr().flush();

    if code != 0 {
        return Err(BridgeError::ToolExecutionFailed(code));
    }
    Ok(())
}

/// Full pipeline: resolve the configuration, invoke the engine, translate
/// the result. Any failure is fatal to the call, with no retries.
pub fn run(
    engine: &mut dyn TreeEngine,
    settings: &mut ToolSettings,
    config: &InvocationConfig,
) -> Result<(), BridgeError> {
    let argv = apply_config(settings, config)?;
    invoke(engine, settings, &argv)
}
