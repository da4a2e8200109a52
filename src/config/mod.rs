#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::ModelsConfig;

use crate::adapters::json::{NullPolicy, WriterOptions};
use crate::core::ConfigProvider;
use crate::utils::error::{ModelError, Result};

/// 合併兩層配置：`primary`（通常是 CLI 旗標）優先，其次是設定檔
pub fn writer_options(
    primary: &dyn ConfigProvider,
    fallback: Option<&dyn ConfigProvider>,
) -> Result<WriterOptions> {
    let null_policy = match primary
        .null_policy()
        .or_else(|| fallback.and_then(|f| f.null_policy()))
    {
        Some(text) => text
            .parse::<NullPolicy>()
            .map_err(|e| ModelError::InvalidConfigValueError {
                field: "null_policy".to_string(),
                value: text.to_string(),
                reason: e.to_string(),
            })?,
        None => NullPolicy::default(),
    };

    let pretty = primary
        .pretty()
        .or_else(|| fallback.and_then(|f| f.pretty()))
        .unwrap_or(false);

    Ok(WriterOptions {
        null_policy,
        pretty,
    })
}

pub fn default_model<'a>(
    primary: &'a dyn ConfigProvider,
    fallback: Option<&'a dyn ConfigProvider>,
) -> Option<&'a str> {
    primary
        .default_model()
        .or_else(|| fallback.and_then(|f| f.default_model()))
}
