// main.rs - CLI entry point

use ftbridge::cli::Config;
use ftbridge::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("🌳 ftbridge v{}", env!("CARGO_PKG_VERSION"));

    // Validate all arguments into a typed configuration
    let config = validate_args(&args)?;

    if let Some(path) = &args.save_config {
        Config::from_invocation(&config).to_file(path)?;
    }

    // Resolve settings and synthesize the engine command line
    let mut settings = ToolSettings::default();
    let argv = apply_config(&mut settings, &config).map_err(|e| e.to_string())?;

    if let Some(path) = &args.report {
        RunReport::new(&command_line, &settings, &argv).to_file(path)?;
    }

    if args.dry_run {
        let report = RunReport::new(&command_line, &settings, &argv);
        println!("{}", report.to_json()?);
        println!("🔎 Dry run: engine not invoked");
        return Ok(());
    }

    invoke_engine(&settings, &argv)
}

#[cfg(feature = "native")]
fn invoke_engine(settings: &ToolSettings, argv: &ArgumentVector) -> Result<(), String> {
    use ftbridge::engine::NativeFastTree;

    let mut engine = NativeFastTree::new();
    println!("🧬 Engine: {}", engine.description());
    invoke(&mut engine, settings, argv).map_err(|e| e.to_string())?;
    println!("✅ Tree construction finished");
    Ok(())
}

#[cfg(not(feature = "native"))]
fn invoke_engine(_settings: &ToolSettings, _argv: &ArgumentVector) -> Result<(), String> {
    Err(
        "this build does not embed the FastTree engine; rebuild with --features native \
         or use --dry-run"
            .to_string(),
    )
}
