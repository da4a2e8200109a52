use crate::domain::schema::{FieldDef, Schema, ValueKind};
use crate::models::entity::ENTITY;
use crate::models::enums::{
    DeviceCustomAttributeValueType, RunAsAccountType, DEVICE_CUSTOM_ATTRIBUTE_VALUE_TYPE,
    RUN_AS_ACCOUNT_TYPE,
};

pub static DEVICE_CUSTOM_ATTRIBUTE_SHELL_SCRIPT: Schema = Schema {
    name: "deviceCustomAttributeShellScript",
    odata_type: None,
    base: Some(&ENTITY),
    fields: &[
        FieldDef::scalar("createdDateTime", ValueKind::DateTime),
        FieldDef::scalar("customAttributeName", ValueKind::String),
        FieldDef::scalar("customAttributeType", ValueKind::Enum(&DEVICE_CUSTOM_ATTRIBUTE_VALUE_TYPE)),
        FieldDef::scalar("description", ValueKind::String),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::scalar("fileName", ValueKind::String),
        FieldDef::scalar("lastModifiedDateTime", ValueKind::DateTime),
        FieldDef::collection("roleScopeTagIds", ValueKind::String),
        FieldDef::scalar("runAsAccount", ValueKind::Enum(&RUN_AS_ACCOUNT_TYPE)),
        FieldDef::scalar("scriptContent", ValueKind::Bytes),
    ],
    subtypes: &[],
};

model! {
    /// macOS 自訂屬性指令碼；指令碼內容以 base64 傳輸
    pub struct DeviceCustomAttributeShellScript => DEVICE_CUSTOM_ATTRIBUTE_SHELL_SCRIPT;
}

impl DeviceCustomAttributeShellScript {
    pub fn script_content(&self) -> Option<&[u8]> {
        self.get_bytes("scriptContent")
    }

    pub fn set_script_content(&mut self, content: impl Into<Vec<u8>>) -> crate::Result<()> {
        self.set("scriptContent", crate::domain::model::FieldValue::Bytes(content.into()))
    }

    pub fn custom_attribute_type(&self) -> Option<DeviceCustomAttributeValueType> {
        self.get_enum_as("customAttributeType")
    }

    pub fn run_as_account(&self) -> Option<RunAsAccountType> {
        self.get_enum_as("runAsAccount")
    }
}
