use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "graph-models")]
#[command(about = "Decode, inspect and re-encode Microsoft Graph beta payloads")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "How unset fields are written: omit | emit")]
    pub null_policy: Option<String>,

    #[arg(long, global = true, help = "Pretty-print encoded JSON")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 列出已註冊的模型、判別標籤與子型別
    Models,

    /// 解碼酬載並回報解析出的型別、已設定欄位與溢位 key
    Decode {
        #[arg(long)]
        model: Option<String>,

        /// 省略時讀取 stdin
        #[arg(long)]
        input: Option<String>,
    },

    /// 解碼後重新編碼
    Roundtrip {
        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        input: Option<String>,

        /// 省略時寫到 stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// 解析列舉的 wire 字串
    Enum { name: String, value: String },
}

impl Command {
    pub fn model(&self) -> Option<&str> {
        match self {
            Command::Decode { model, .. } | Command::Roundtrip { model, .. } => model.as_deref(),
            _ => None,
        }
    }

    pub fn input(&self) -> Option<&str> {
        match self {
            Command::Decode { input, .. } | Command::Roundtrip { input, .. } => input.as_deref(),
            _ => None,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn null_policy(&self) -> Option<&str> {
        self.null_policy.as_deref()
    }

    fn pretty(&self) -> Option<bool> {
        // 未指定旗標時交給設定檔決定
        self.pretty.then_some(true)
    }

    fn default_model(&self) -> Option<&str> {
        self.command.model()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }

        if let Some(policy) = &self.null_policy {
            validate_one_of("null_policy", policy, &["omit", "emit"])?;
        }

        if let Some(model) = self.command.model() {
            validate_non_empty_string("model", model)?;
        }

        if let Some(input) = self.command.input() {
            validate_path("input", input)?;
        }

        if let Command::Roundtrip {
            output: Some(output),
            ..
        } = &self.command
        {
            validate_path("output", output)?;
        }

        if let Command::Enum { name, value } = &self.command {
            validate_non_empty_string("enum.name", name)?;
            validate_non_empty_string("enum.value", value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decode_command() {
        let config = CliConfig::try_parse_from([
            "graph-models",
            "decode",
            "--model",
            "classifcationErrorBase",
            "--input",
            "payload.json",
            "--null-policy",
            "emit",
        ])
        .unwrap();

        assert_eq!(config.default_model(), Some("classifcationErrorBase"));
        assert_eq!(config.command.input(), Some("payload.json"));
        assert_eq!(ConfigProvider::null_policy(&config), Some("emit"));
        assert_eq!(ConfigProvider::pretty(&config), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_null_policy_fails_validation() {
        let config =
            CliConfig::try_parse_from(["graph-models", "models", "--null-policy", "skip"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_enum_command_takes_positionals() {
        let config = CliConfig::try_parse_from([
            "graph-models",
            "--pretty",
            "enum",
            "macOSGatekeeperAppSources",
            "anywhere",
        ])
        .unwrap();

        assert_eq!(ConfigProvider::pretty(&config), Some(true));
        match config.command {
            Command::Enum { name, value } => {
                assert_eq!(name, "macOSGatekeeperAppSources");
                assert_eq!(value, "anywhere");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
