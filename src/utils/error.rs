use thiserror::Error;

/// 解碼失敗：欄位值與宣告的型別不符、格式錯誤或未知的列舉字串
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed {kind} value '{value}': {reason}")]
    Malformed {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("value {value} out of range for {kind}")]
    OutOfRange { kind: &'static str, value: String },

    #[error("unknown value '{value}' for enum {enum_name}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("{key}: {source}")]
    InField {
        key: String,
        #[source]
        source: Box<DecodeError>,
    },

    #[error("[{index}]: {source}")]
    InElement {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// 在錯誤外層加上欄位名稱
    pub fn in_field(self, key: &str) -> Self {
        DecodeError::InField {
            key: key.to_string(),
            source: Box::new(self),
        }
    }

    /// 在錯誤外層加上集合索引
    pub fn in_element(self, index: usize) -> Self {
        DecodeError::InElement {
            index,
            source: Box::new(self),
        }
    }
}

/// 編碼失敗：寫入器拒絕某個值，或寫入器狀態不一致
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("writer rejected value for '{key}': {reason}")]
    Rejected { key: String, reason: String },

    #[error("unbalanced writer state: {0}")]
    State(String),
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Payload is not valid JSON: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Schema '{schema}' declares no field '{key}'")]
    UnknownField { schema: &'static str, key: String },

    #[error("Field '{key}' of '{schema}' expects {expected}")]
    KindMismatch {
        schema: &'static str,
        key: String,
        expected: String,
    },

    #[error("Key '{key}' is a declared field of '{schema}' and cannot be stored as additional data")]
    DeclaredKey { schema: &'static str, key: String },

    #[error("Unknown model: {name}")]
    UnknownModel { name: String },

    #[error("Unknown enum: {name}")]
    UnknownEnum { name: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Decode,
    Encode,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ModelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ModelError::Decode(_) | ModelError::SerializationError(_) => ErrorCategory::Decode,
            ModelError::Encode(_) => ErrorCategory::Encode,
            ModelError::UnknownField { .. }
            | ModelError::KindMismatch { .. }
            | ModelError::DeclaredKey { .. }
            | ModelError::UnknownModel { .. }
            | ModelError::UnknownEnum { .. } => ErrorCategory::Input,
            ModelError::ConfigValidationError { .. }
            | ModelError::InvalidConfigValueError { .. }
            | ModelError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ModelError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Decode | ErrorCategory::Encode => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Decode => "檢查輸入內容是否符合所選模型的欄位型別",
            ErrorCategory::Encode => "檢查欄位值是否可被序列化（例如 NaN 或無限大的浮點數）",
            ErrorCategory::Input => "使用 `graph-models models` 列出可用的模型名稱",
            ErrorCategory::Configuration => "檢查 TOML 設定檔的內容與格式",
            ErrorCategory::System => "確認檔案路徑存在且具有讀寫權限",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ModelError::Decode(e) => format!("無法解碼輸入資料: {}", e),
            ModelError::Encode(e) => format!("無法編碼輸出資料: {}", e),
            ModelError::SerializationError(e) => format!("輸入不是有效的 JSON: {}", e),
            ModelError::UnknownModel { name } => format!("找不到模型 '{}'", name),
            ModelError::UnknownEnum { name } => format!("找不到列舉 '{}'", name),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
