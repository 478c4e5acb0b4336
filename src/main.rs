use clap::Parser;
use plugin_catalog::utils::logger;
use plugin_catalog::{CatalogConfig, CatalogError, CliArgs, EtlEngine, GradlePipeline, LocalStorage};

fn main() {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Err(e) = run() {
        tracing::error!("Run failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run() -> Result<(), CatalogError> {
    // Config errors stop the run before anything is read or printed.
    let config = CatalogConfig::from_env()?;
    tracing::debug!("Config: {:?}", config);

    let pipeline = GradlePipeline::new(LocalStorage::new(), config)?;
    let engine = EtlEngine::new(pipeline);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    engine.run(&mut out)?;
    Ok(())
}
