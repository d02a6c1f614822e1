use clap::Parser;
use std::io::Read;
use std::path::Path;
use student_csv_export::utils::{logger, validation::Validate};
use student_csv_export::{
    is_valid_intent_name, CliConfig, Command, ExportArgs, ExportError, LocalStorage, LogFormat,
    StudentCsvExporter,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting student-csv-export");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match config.command {
        Command::Export(args) => run_export(&args),
        Command::CheckIntent { name } => {
            let valid = is_valid_intent_name(Some(name.as_str()));
            println!("{}", valid);
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    let settings = match args.resolve_settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail(&e, 2),
    };

    let input = match read_input(args.input.as_deref()) {
        Ok(input) => input,
        Err(e) => fail(&e, 2),
    };

    let storage = LocalStorage::new(settings.output_path.clone());
    let exporter = StudentCsvExporter::new(storage, settings);

    let result = if args.batch {
        exporter.export_students(&input)
    } else {
        exporter.export_student(&input)
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> student_csv_export::Result<serde_json::Value> {
    let raw = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn fail(e: &ExportError, exit_code: i32) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code);
}
