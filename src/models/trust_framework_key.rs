use crate::domain::schema::{FieldDef, Schema, ValueKind};
use chrono::{DateTime, Utc};

/// JSON Web Key 形式的信任架構金鑰；欄位名稱沿用 JWK 的短名稱
pub static TRUST_FRAMEWORK_KEY: Schema = Schema {
    name: "trustFrameworkKey",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("d", ValueKind::String),
        FieldDef::scalar("dp", ValueKind::String),
        FieldDef::scalar("dq", ValueKind::String),
        FieldDef::scalar("e", ValueKind::String),
        FieldDef::scalar("exp", ValueKind::Int64),
        FieldDef::scalar("k", ValueKind::String),
        FieldDef::scalar("kid", ValueKind::String),
        FieldDef::scalar("kty", ValueKind::String),
        FieldDef::scalar("n", ValueKind::String),
        FieldDef::scalar("nbf", ValueKind::Int64),
        FieldDef::scalar("p", ValueKind::String),
        FieldDef::scalar("q", ValueKind::String),
        FieldDef::scalar("qi", ValueKind::String),
        FieldDef::scalar("use", ValueKind::String),
        FieldDef::collection("x5c", ValueKind::String),
        FieldDef::scalar("x5t", ValueKind::String),
    ],
    subtypes: &[],
};

model! {
    pub struct TrustFrameworkKey => TRUST_FRAMEWORK_KEY;
}

impl TrustFrameworkKey {
    pub fn kid(&self) -> Option<&str> {
        self.get_str("kid")
    }

    /// `exp` 為 Unix 秒數
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.get_i64("exp")?, 0)
    }

    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.get_i64("nbf")?, 0)
    }

    pub fn certificate_chain(&self) -> Vec<&str> {
        self.get_strings("x5c").unwrap_or_default()
    }
}
