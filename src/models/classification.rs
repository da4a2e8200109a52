use crate::domain::model::Record;
use crate::domain::schema::{FieldDef, Schema, Subtype, ValueKind};
use chrono::{DateTime, FixedOffset};

/// 分類錯誤的共同父型別（wire 名稱本身就拼成 `classifcation`）
pub static CLASSIFCATION_ERROR_BASE: Schema = Schema {
    name: "classifcationErrorBase",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("code", ValueKind::String),
        FieldDef::scalar("innerError", ValueKind::Object(&CLASSIFICATION_INNER_ERROR)),
        FieldDef::scalar("message", ValueKind::String),
        FieldDef::scalar("target", ValueKind::String),
    ],
    subtypes: &[Subtype {
        tag: "#microsoft.graph.classificationError",
        schema: &CLASSIFICATION_ERROR,
    }],
};

pub static CLASSIFICATION_ERROR: Schema = Schema {
    name: "classificationError",
    odata_type: Some("#microsoft.graph.classificationError"),
    base: Some(&CLASSIFCATION_ERROR_BASE),
    fields: &[FieldDef::collection(
        "details",
        ValueKind::Object(&CLASSIFCATION_ERROR_BASE),
    )],
    subtypes: &[],
};

pub static CLASSIFICATION_INNER_ERROR: Schema = Schema {
    name: "classificationInnerError",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("activityId", ValueKind::String),
        FieldDef::scalar("clientRequestId", ValueKind::String),
        FieldDef::scalar("code", ValueKind::String),
        FieldDef::scalar("errorDateTime", ValueKind::DateTime),
    ],
    subtypes: &[],
};

model! {
    pub struct ClassifcationErrorBase => CLASSIFCATION_ERROR_BASE;
}

model! {
    /// 帶有明細清單的分類錯誤
    pub struct ClassificationError => CLASSIFICATION_ERROR;
}

model! {
    pub struct ClassificationInnerError => CLASSIFICATION_INNER_ERROR;
}

impl ClassifcationErrorBase {
    pub fn code(&self) -> Option<&str> {
        self.get_str("code")
    }

    pub fn message(&self) -> Option<&str> {
        self.get_str("message")
    }

    pub fn inner_error(&self) -> Option<&Record> {
        self.get_object("innerError")
    }
}

impl ClassificationError {
    pub fn code(&self) -> Option<&str> {
        self.get_str("code")
    }

    /// 明細依 wire 順序；各元素可能各自解析成子型別
    pub fn details(&self) -> Vec<&Record> {
        self.get_objects("details").unwrap_or_default()
    }
}

impl ClassificationInnerError {
    pub fn error_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.get_date_time("errorDateTime")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::decode_model;
    use crate::domain::ports::Model;

    #[test]
    fn test_base_facade_accepts_resolved_subtype() {
        let payload = r##"{"@odata.type": "#microsoft.graph.classificationError", "code": "E1"}"##;
        let error: ClassifcationErrorBase = decode_model(payload).unwrap();
        assert!(error.is(&CLASSIFICATION_ERROR));
        assert_eq!(error.code(), Some("E1"));

        let narrowed = ClassificationError::from_record(error.into_record()).unwrap();
        assert!(narrowed.details().is_empty());
    }

    #[test]
    fn test_narrowing_base_instance_fails() {
        let base = ClassifcationErrorBase::new().into_record();
        assert!(ClassificationError::try_from(base).is_err());
    }

    #[test]
    fn test_constructor_seeds_tag() {
        let error = ClassificationError::new();
        assert_eq!(error.odata_type(), Some("#microsoft.graph.classificationError"));
        assert_eq!(ClassifcationErrorBase::new().odata_type(), None);
    }
}
