// native.rs - In-process binding to the embedded FastTree object

use std::ffi::CString;
use std::os::raw::{c_char, c_double, c_int};

use crate::core::settings::ToolSettings;
use crate::engine::argv::ArgumentVector;
use crate::engine::traits::TreeEngine;

// Globals and entry point of the FastTree object linked into this process.
// Names match the C source, hence the lint exception.
#[allow(non_upper_case_globals, non_snake_case)]
extern "C" {
    static mut fileName: *mut c_char;
    static mut nCodes: c_int;
    static mut pseudoWeight: c_double;
    static mut bQuote: bool;
    static mut bUseGtr: bool;
    static mut bUseLg: bool;
    static mut bUseWag: bool;
    static mut nRateCats: c_int;
    static mut useTopHits2nd: bool;
    static mut fastest: c_int;
    static mut tophitsRefresh: c_double;
    static mut spr: c_int;
    static mut MLnni: c_int;
    static mut mlAccuracy: c_int;
    static mut fastNNI: bool;

    fn FastTree(argc: c_int, argv: *mut *mut c_char) -> c_int;
}

/// Engine backed by the FastTree object linked into this process.
///
/// The native code keeps global state across calls and some of its
/// internal error paths call exit(), so serialize invocations and prefer
/// a worker process for repeated runs.
pub struct NativeFastTree {
    // Owns the input path C string for the duration of the call
    file_name: Option<CString>,
}

impl NativeFastTree {
    pub fn new() -> Self {
        Self { file_name: None }
    }
}

impl Default for NativeFastTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeEngine for NativeFastTree {
    fn run(&mut self, settings: &ToolSettings, argv: &ArgumentVector) -> i32 {
        self.file_name = settings
            .file_name
            .as_deref()
            .and_then(|path| CString::new(path).ok());

        let mut pointers = argv.as_argv();

        unsafe {
            fileName = self
                .file_name
                .as_ref()
                .map_or(std::ptr::null_mut(), |path| path.as_ptr() as *mut c_char);
            nCodes = settings.n_codes;
            pseudoWeight = settings.pseudo_weight;
            bQuote = settings.quote;
            bUseGtr = settings.use_gtr;
            bUseLg = settings.use_lg;
            bUseWag = settings.use_wag;
            nRateCats = settings.n_rate_cats;
            useTopHits2nd = settings.use_top_hits_2nd;
            fastest = c_int::from(settings.fastest);
            tophitsRefresh = settings.tophits_refresh;
            spr = settings.spr;
            MLnni = settings.ml_nni;
            mlAccuracy = settings.ml_accuracy;
            fastNNI = settings.fast_nni;

            FastTree(argv.argc() as c_int, pointers.as_mut_ptr() as *mut *mut c_char)
        }
    }

    fn name(&self) -> &'static str {
        "FastTree"
    }

    fn description(&self) -> &'static str {
        "Embedded FastTree maximum-likelihood engine"
    }
}
