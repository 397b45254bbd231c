// settings.rs - Engine settings block

use serde::{Deserialize, Serialize};

/// Process-wide FastTree settings, held as an explicit struct.
///
/// The embedded engine historically reads these from globals; the bridge
/// resolves them here and a [`TreeEngine`](crate::engine::TreeEngine)
/// implementation copies them across at call time. Defaults are the
/// engine's own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Input alignment path. None reads from standard input.
    pub file_name: Option<String>,
    /// Alphabet size: 4 for nucleotide, 20 for protein
    pub n_codes: i32,
    /// Pseudocount weight for distances between barely overlapping sequences
    pub pseudo_weight: f64,
    /// Quote sequence names in the output
    pub quote: bool,
    /// Generalized time-reversible model selector
    pub use_gtr: bool,
    /// Le-Gascuel 2008 model selector
    pub use_lg: bool,
    /// Whelan-And-Goldman 2001 model selector
    pub use_wag: bool,
    /// Number of rate categories of sites (1 disables the CAT model)
    pub n_rate_cats: i32,
    /// Second-level top-hits heuristic
    pub use_top_hits_2nd: bool,
    /// Aggressive neighbor-joining speedups
    pub fastest: bool,
    /// Top-hits list refresh threshold
    pub tophits_refresh: f64,
    /// Subtree-prune-regraft rounds
    pub spr: i32,
    /// Rounds of maximum-likelihood NNIs, -1 for 2*log(N)
    pub ml_nni: i32,
    /// ML-NNI optimization level
    pub ml_accuracy: i32,
    /// Skip NNIs on split branches judged unlikely to change
    pub fast_nni: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            file_name: None,
            n_codes: 20,
            pseudo_weight: 0.0,
            quote: false,
            use_gtr: false,
            use_lg: false,
            use_wag: false,
            n_rate_cats: 20,
            use_top_hits_2nd: false,
            fastest: false,
            tophits_refresh: 0.8,
            spr: 2,
            ml_nni: -1,
            ml_accuracy: 1,
            fast_nni: true,
        }
    }
}
