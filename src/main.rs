use anyhow::Context;
use clap::Parser;
use dao_voting_schema::core::ConfigProvider;
use dao_voting_schema::utils::error::ErrorSeverity;
use dao_voting_schema::utils::{logger, validation::Validate};
use dao_voting_schema::{
    CliConfig, ComposedSchema, ConsoleReporter, LocalStorage, LogFormat, SchemaConfig,
    SchemaEngine, SchemaError, SchemaPipeline, Settings,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting dao-voting-schema");
    tracing::debug!("CLI config: {:?}", cli);

    let file_config = match &cli.config {
        Some(path) => Some(
            SchemaConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?,
        ),
        None => None,
    };

    let settings = Settings::from_file_config(file_config.as_ref()).override_with(&cli);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage =
        LocalStorage::new(settings.schema_dir()).with_atomic_writes(settings.atomic_write());
    let pipeline = SchemaPipeline::new(storage, settings);
    let engine = SchemaEngine::new(pipeline, ConsoleReporter);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        match engine.build() {
            Ok(schema) => display_dry_run(&schema, &engine.pipeline().output_location()),
            Err(e) => fail(&e),
        }
        return Ok(());
    }

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Full schema written to {}", output_path);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn display_dry_run(schema: &ComposedSchema, target: &str) {
    println!("🔍 Dry Run Analysis:");
    println!("  Target: {}", target);
    println!("  Responses: {}", schema.responses.len());
    for key in schema.responses.keys() {
        println!("    - {}", key);
    }
    println!("✅ Dry run complete. Nothing was written.");
}

fn fail(e: &SchemaError) -> ! {
    tracing::error!(
        "❌ Schema generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,     // 輸入或設定錯誤
        ErrorSeverity::Critical => 3, // 寫入或系統錯誤
    };
    std::process::exit(exit_code);
}
