use anyhow::Context;
use clap::Parser;
use graph_beta_models::config::{self, Command};
use graph_beta_models::core::ConfigProvider;
use graph_beta_models::utils::error::{ErrorSeverity, ModelError};
use graph_beta_models::utils::logger;
use graph_beta_models::utils::validation::{validate_required_field, Validate};
use graph_beta_models::{
    decode_json, encode_json, AdditionalDataHolder, CliConfig, ModelRegistry, ModelsConfig, Record,
    WriterOptions,
};
use serde_json::json;
use std::io::Read;

fn main() {
    let cli = CliConfig::parse();

    // 設定檔決定日誌格式，需在初始化日誌前載入
    let file_config = match load_file_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(severity_exit_code(e.severity()));
        }
    };

    let level = file_config.as_ref().and_then(|c| c.log_level());
    if file_config.as_ref().is_some_and(|c| c.json_logging()) {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting graph-models CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(severity_exit_code(e.severity()));
    }

    if let Err(e) = run(&cli, file_config.as_ref()) {
        let exit_code = match e.downcast_ref::<ModelError>() {
            Some(model_error) => {
                tracing::error!(
                    "❌ Command failed: {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    model_error.category(),
                    model_error.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", model_error.recovery_suggestion());
                eprintln!("❌ {}", model_error.user_friendly_message());
                eprintln!("💡 建議: {}", model_error.recovery_suggestion());
                severity_exit_code(model_error.severity())
            }
            None => {
                tracing::error!("❌ Command failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_file_config(cli: &CliConfig) -> Result<Option<ModelsConfig>, ModelError> {
    let Some(path) = &cli.config else {
        return Ok(None);
    };
    let config = ModelsConfig::from_file(path)?;
    config.validate()?;
    Ok(Some(config))
}

/// 依錯誤嚴重程度決定退出碼
fn severity_exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,      // 警告，但成功
        ErrorSeverity::Medium => 2,   // 輸入錯誤
        ErrorSeverity::High => 1,     // 解碼或編碼失敗
        ErrorSeverity::Critical => 3, // 系統或配置錯誤
    }
}

fn run(cli: &CliConfig, file_config: Option<&ModelsConfig>) -> anyhow::Result<()> {
    let fallback = file_config.map(|c| c as &dyn ConfigProvider);
    let options = config::writer_options(cli, fallback)?;
    let registry = ModelRegistry::global();

    match &cli.command {
        Command::Models => list_models(registry),
        Command::Decode { input, .. } => {
            let record = decode_input(cli, fallback, input.as_deref())?;
            print_summary(&record, options)?;
        }
        Command::Roundtrip { input, output, .. } => {
            let record = decode_input(cli, fallback, input.as_deref())?;
            let text = encode_json(&record, options)?;
            match output {
                Some(path) => {
                    std::fs::write(path, text.as_bytes())
                        .map_err(ModelError::from)
                        .with_context(|| format!("writing {}", path))?;
                    tracing::info!("📁 Output saved to: {}", path);
                }
                None => println!("{}", text),
            }
            tracing::info!("✅ Round trip completed as {}", record.schema().name);
        }
        Command::Enum { name, value } => {
            let def = registry.enum_def(name)?;
            let parsed = def.parse(value).map_err(ModelError::from)?;
            println!(
                "✅ {} '{}' = {} (canonical: '{}')",
                def.name,
                value,
                parsed.value(),
                parsed.to_wire_string()
            );
        }
    }

    Ok(())
}

fn decode_input(
    cli: &CliConfig,
    fallback: Option<&dyn ConfigProvider>,
    input: Option<&str>,
) -> anyhow::Result<Record> {
    let model = config::default_model(cli, fallback);
    let model = validate_required_field("model (--model or decode.default_model)", &model)?;
    let base = ModelRegistry::global().schema(model)?;

    let payload = read_input(input)?;
    tracing::info!("🔍 Decoding {} bytes as {}", payload.len(), base.name);

    let record = decode_json(&payload, base)?;
    if record.schema().name != base.name {
        tracing::info!("🔀 Resolved subtype {}", record.schema().name);
    }
    Ok(record)
}

fn read_input(input: Option<&str>) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(ModelError::from)
                .with_context(|| format!("reading {}", path))?;
            Ok(text)
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(ModelError::from)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn print_summary(record: &Record, options: WriterOptions) -> anyhow::Result<()> {
    let fields: Vec<&str> = record.set_fields().map(|(field, _)| field.key).collect();
    let additional: Vec<&String> = record.additional_data().keys().collect();

    let summary = json!({
        "resolvedType": record.schema().name,
        "odataType": record.odata_type(),
        "fields": fields,
        "additionalData": additional,
    });

    let text = if options.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{}", text);
    Ok(())
}

fn list_models(registry: &ModelRegistry) {
    for schema in registry.schemas() {
        match schema.base {
            Some(base) => println!("📦 {} (extends {})", schema.name, base.name),
            None => println!("📦 {}", schema.name),
        }
        for subtype in schema.subtypes {
            println!("   ↳ {} → {}", subtype.tag, subtype.schema.name);
        }
    }

    for def in registry.enums() {
        let kind = if def.flags { "flags" } else { "enum" };
        println!("🔢 {} ({}, {} members)", def.name, kind, def.members.len());
    }
}
