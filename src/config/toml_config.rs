use crate::core::{ConfigProvider, ModelRegistry};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default)]
    pub serialization: SerializationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializationConfig {
    pub null_policy: Option<String>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodeConfig {
    pub default_model: Option<String>,
}

impl ModelsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| ModelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GRAPH_NULL_POLICY})；未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ModelError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    /// 是否輸出 JSON 格式日誌
    pub fn json_logging(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl ConfigProvider for ModelsConfig {
    fn null_policy(&self) -> Option<&str> {
        self.serialization.null_policy.as_deref()
    }

    fn pretty(&self) -> Option<bool> {
        self.serialization.pretty
    }

    fn default_model(&self) -> Option<&str> {
        self.decode.default_model.as_deref()
    }
}

impl Validate for ModelsConfig {
    fn validate(&self) -> Result<()> {
        if let Some(policy) = &self.serialization.null_policy {
            validate_one_of("serialization.null_policy", policy, &["omit", "emit"])?;
        }

        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
        }

        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, LOG_FORMATS)?;
        }

        if let Some(model) = &self.decode.default_model {
            ModelRegistry::global()
                .schema(model)
                .map_err(|e| ModelError::InvalidConfigValueError {
                    field: "decode.default_model".to_string(),
                    value: model.clone(),
                    reason: e.to_string(),
                })?;
        }

        Ok(())
    }
}
