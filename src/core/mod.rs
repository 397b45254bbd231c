// mod.rs - Core bridge module

pub mod assembler;
pub mod model;
pub mod report;
pub mod schema;
pub mod settings;
pub mod value;

// Re-export main types for convenience
pub use assembler::{apply_config, invoke, run};
pub use model::MlModel;
pub use report::RunReport;
pub use schema::{InvocationConfig, ModelOptions, SequenceOptions, TopologyOptions};
pub use settings::ToolSettings;
pub use value::{ConfigGroup, ConfigValue};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ArgumentVector, TreeEngine};
    use crate::error::BridgeError;

    /// Scripted engine standing in for the native binding
    struct MockEngine {
        exit_code: i32,
        calls: usize,
        last_argv: Vec<String>,
        last_settings: Option<ToolSettings>,
    }

    impl MockEngine {
        fn returning(exit_code: i32) -> Self {
            Self {
                exit_code,
                calls: 0,
                last_argv: Vec::new(),
                last_settings: None,
            }
        }
    }

    impl TreeEngine for MockEngine {
        fn run(&mut self, settings: &ToolSettings, argv: &ArgumentVector) -> i32 {
            self.calls += 1;
            self.last_argv = argv.tokens().map(str::to_string).collect();
            self.last_settings = Some(settings.clone());
            self.exit_code
        }

        fn name(&self) -> &'static str {
            "mock"
        }

        fn description(&self) -> &'static str {
            "Scripted engine for tests"
        }
    }

    #[test]
    fn test_fastest_forces_refresh_threshold() {
        let mut config = InvocationConfig::new("seqs.fasta");
        config.model.fastest = Some(true);

        let mut settings = ToolSettings::default();
        apply_config(&mut settings, &config).unwrap();
        assert!(settings.fastest);
        assert_eq!(settings.tophits_refresh, 0.5);

        // Explicit false and absent both keep the prior default
        let mut settings = ToolSettings::default();
        config.model.fastest = Some(false);
        apply_config(&mut settings, &config).unwrap();
        assert!(!settings.fastest);
        assert_eq!(settings.tophits_refresh, 0.8);

        let mut settings = ToolSettings::default();
        config.model.fastest = None;
        apply_config(&mut settings, &config).unwrap();
        assert_eq!(settings.tophits_refresh, 0.8);
    }

    #[test]
    fn test_exhaustive_forces_accuracy_and_disables_fast_nni() {
        let mut config = InvocationConfig::new("seqs.fasta");
        config.topology.exhaustive = Some(true);

        let mut settings = ToolSettings::default();
        apply_config(&mut settings, &config).unwrap();
        assert_eq!(settings.ml_accuracy, 2);
        assert!(!settings.fast_nni);

        for exhaustive in [Some(false), None] {
            let mut settings = ToolSettings::default();
            config.topology.exhaustive = exhaustive;
            apply_config(&mut settings, &config).unwrap();
            assert_eq!(settings.ml_accuracy, 1);
            assert!(settings.fast_nni);
        }
    }

    #[test]
    fn test_pseudo_flag_sets_the_same_weight_either_way() {
        let mut config = InvocationConfig::new("seqs.fasta");

        for pseudo in [Some(true), Some(false)] {
            let mut settings = ToolSettings::default();
            config.sequence.pseudo = pseudo;
            apply_config(&mut settings, &config).unwrap();
            assert_eq!(settings.pseudo_weight, 1.0);
        }

        let mut settings = ToolSettings::default();
        config.sequence.pseudo = None;
        apply_config(&mut settings, &config).unwrap();
        assert_eq!(settings.pseudo_weight, 0.0);
    }

    #[test]
    fn test_absent_and_empty_args_build_the_same_vector() {
        let absent = InvocationConfig::from_dynamic("seqs.fasta", None, None, None, None).unwrap();
        let empty =
            InvocationConfig::from_dynamic("seqs.fasta", None, None, None, Some(&[])).unwrap();
        assert_eq!(absent, empty);

        let mut settings = ToolSettings::default();
        let argv = apply_config(&mut settings, &absent).unwrap();
        assert_eq!(argv.tokens().collect::<Vec<_>>(), vec!["FastTree"]);
        let pointers = argv.as_argv();
        assert_eq!(pointers.len(), 2);
        assert!(pointers[1].is_null());
    }

    #[test]
    fn test_full_scenario_resolves_settings_and_succeeds() {
        let mut sequence = ConfigGroup::new();
        sequence.insert("ncodes", ConfigValue::Int(20));
        sequence.insert("quote", ConfigValue::Bool(true));

        let mut model = ConfigGroup::new();
        model.insert("ml_model", ConfigValue::Text("wag".to_string()));
        model.insert("ncat", ConfigValue::Int(4));
        model.insert("fastest", ConfigValue::Bool(true));

        let config =
            InvocationConfig::from_dynamic("seqs.fasta", Some(&sequence), Some(&model), None, None)
                .unwrap();

        let mut settings = ToolSettings::default();
        let mut engine = MockEngine::returning(0);
        run(&mut engine, &mut settings, &config).unwrap();

        assert_eq!(settings.file_name.as_deref(), Some("seqs.fasta"));
        assert_eq!(settings.n_codes, 20);
        assert!(settings.quote);
        assert!(settings.use_wag);
        assert!(!settings.use_gtr);
        assert!(!settings.use_lg);
        assert_eq!(settings.n_rate_cats, 4);
        assert_eq!(settings.tophits_refresh, 0.5);

        assert_eq!(engine.calls, 1);
        assert_eq!(engine.last_argv, vec!["FastTree"]);
        assert_eq!(engine.last_settings.unwrap(), settings);
    }

    #[test]
    fn test_unknown_model_aborts_before_any_invocation() {
        let mut model = ConfigGroup::new();
        model.insert("ml_model", ConfigValue::Text("unknown".to_string()));

        let err = InvocationConfig::from_dynamic("seqs.fasta", None, Some(&model), None, None)
            .unwrap_err();
        assert_eq!(err, BridgeError::UnknownModel("unknown".to_string()));
    }

    #[test]
    fn test_type_mismatch_aborts_before_any_invocation() {
        let mut sequence = ConfigGroup::new();
        sequence.insert("ncodes", ConfigValue::Text("twenty".to_string()));

        let err = InvocationConfig::from_dynamic("seqs.fasta", Some(&sequence), None, None, None)
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::TypeMismatch { ref key, .. } if key == "ncodes"
        ));
    }

    #[test]
    fn test_raw_args_convert_through_their_string_form() {
        let args = [
            ConfigValue::Int(1),
            ConfigValue::Text("two".to_string()),
            ConfigValue::Double(3.5),
        ];
        let config =
            InvocationConfig::from_dynamic("seqs.fasta", None, None, None, Some(&args)).unwrap();

        let mut settings = ToolSettings::default();
        let argv = apply_config(&mut settings, &config).unwrap();
        assert_eq!(
            argv.tokens().collect::<Vec<_>>(),
            vec!["FastTree", "1", "two", "3.5"]
        );
        assert!(argv.as_argv().last().unwrap().is_null());
    }

    #[test]
    fn test_nul_byte_argument_is_fatal() {
        let mut config = InvocationConfig::new("seqs.fasta");
        config.args = vec!["bad\0arg".to_string()];

        let mut settings = ToolSettings::default();
        let mut engine = MockEngine::returning(0);
        let err = run(&mut engine, &mut settings, &config).unwrap_err();
        assert_eq!(err, BridgeError::InvalidArgument("bad\0arg".to_string()));
        assert_eq!(engine.calls, 0);
    }

    #[test]
    fn test_nonzero_exit_code_maps_to_execution_failure() {
        let config = InvocationConfig::new("seqs.fasta");
        let mut settings = ToolSettings::default();

        let mut engine = MockEngine::returning(1);
        let err = run(&mut engine, &mut settings, &config).unwrap_err();
        assert_eq!(err, BridgeError::ToolExecutionFailed(1));
        assert_eq!(engine.calls, 1);
    }

    #[test]
    fn test_free_args_reach_the_engine_verbatim() {
        let mut config = InvocationConfig::new("seqs.fasta");
        config.args = vec![
            "-nosupport".to_string(),
            "-seed".to_string(),
            "1234".to_string(),
        ];

        let mut settings = ToolSettings::default();
        let mut engine = MockEngine::returning(0);
        run(&mut engine, &mut settings, &config).unwrap();
        assert_eq!(
            engine.last_argv,
            vec!["FastTree", "-nosupport", "-seed", "1234"]
        );
    }

    #[test]
    fn test_quick_runs_with_engine_defaults() {
        let mut engine = MockEngine::returning(0);
        crate::quick(&mut engine, "seqs.fasta", &["-nt".to_string()]).unwrap();

        assert_eq!(engine.calls, 1);
        assert_eq!(engine.last_argv, vec!["FastTree", "-nt"]);
        let settings = engine.last_settings.unwrap();
        assert_eq!(settings.file_name.as_deref(), Some("seqs.fasta"));
        assert_eq!(settings.n_rate_cats, 20);
    }

    #[test]
    fn test_run_report_serializes_the_resolved_call() {
        let mut config = InvocationConfig::new("seqs.fasta");
        config.model.ml_model = Some(MlModel::Gtr);

        let mut settings = ToolSettings::default();
        let argv = apply_config(&mut settings, &config).unwrap();
        let report = RunReport::new("ftbridge seqs.fasta", &settings, &argv);

        let json = report.to_json().unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.command_line, "ftbridge seqs.fasta");
        assert_eq!(parsed.argv, vec!["FastTree"]);
        assert!(parsed.settings.use_gtr);
        assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
    }
}
