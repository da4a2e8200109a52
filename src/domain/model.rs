use crate::domain::duration::IsoDuration;
use crate::domain::ports::{AdditionalDataHolder, WireEnum};
use crate::domain::schema::{EnumDef, FieldDef, Schema, ValueKind};
use crate::utils::error::{ModelError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// 溢位資料（未宣告欄位）以未定型的樹狀值保存
pub type UntypedValue = serde_json::Value;
pub type AdditionalData = serde_json::Map<String, UntypedValue>;

/// 列舉值：所屬列舉定義與整數值（旗標列舉為位元遮罩）
#[derive(Clone, Copy)]
pub struct EnumValue {
    def: &'static EnumDef,
    value: i32,
}

impl EnumValue {
    pub(crate) fn new(def: &'static EnumDef, value: i32) -> Self {
        Self { def, value }
    }

    pub fn of<E: WireEnum>(member: E) -> Self {
        Self::new(E::definition(), member.value())
    }

    pub fn def(&self) -> &'static EnumDef {
        self.def
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// 旗標列舉是否包含指定成員
    pub fn contains<E: WireEnum>(&self, flag: E) -> bool {
        std::ptr::eq(self.def, E::definition()) && self.value & flag.value() == flag.value()
    }

    pub fn as_member<E: WireEnum>(&self) -> Option<E> {
        if std::ptr::eq(self.def, E::definition()) {
            E::from_value(self.value)
        } else {
            None
        }
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.value == other.value
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.def.name, self.to_wire_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Bytes(Vec<u8>),
    DateTime(DateTime<FixedOffset>),
    Date(NaiveDate),
    TimeOfDay(NaiveTime),
    Duration(IsoDuration),
    Uuid(Uuid),
    Enum(EnumValue),
    Object(Box<Record>),
    Collection(Vec<FieldValue>),
}

impl FieldValue {
    pub fn collection<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FieldValue>,
    {
        FieldValue::Collection(items.into_iter().map(Into::into).collect())
    }

    pub fn from_enum<E: WireEnum>(member: E) -> Self {
        FieldValue::Enum(EnumValue::of(member))
    }

    pub fn matches_kind(&self, kind: &ValueKind) -> bool {
        match (self, kind) {
            (FieldValue::String(_), ValueKind::String)
            | (FieldValue::Bool(_), ValueKind::Bool)
            | (FieldValue::Int32(_), ValueKind::Int32)
            | (FieldValue::Int64(_), ValueKind::Int64)
            | (FieldValue::Float64(_), ValueKind::Float64)
            | (FieldValue::Bytes(_), ValueKind::Bytes)
            | (FieldValue::DateTime(_), ValueKind::DateTime)
            | (FieldValue::Date(_), ValueKind::Date)
            | (FieldValue::TimeOfDay(_), ValueKind::TimeOfDay)
            | (FieldValue::Duration(_), ValueKind::Duration)
            | (FieldValue::Uuid(_), ValueKind::Uuid) => true,
            (FieldValue::Enum(value), ValueKind::Enum(def)) => std::ptr::eq(value.def(), *def),
            (FieldValue::Object(record), ValueKind::Object(schema)) => record.schema().is_a(*schema),
            _ => false,
        }
    }

    pub fn matches(&self, field: &FieldDef) -> bool {
        match self {
            FieldValue::Collection(items) if field.collection => {
                items.iter().all(|item| item.matches_kind(&field.kind))
            }
            _ if field.collection => false,
            value => value.matches_kind(&field.kind),
        }
    }
}

macro_rules! field_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::$variant(value)
                }
            }
        )*
    };
}

field_value_from! {
    String => String,
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    f64 => Float64,
    DateTime<FixedOffset> => DateTime,
    NaiveDate => Date,
    NaiveTime => TimeOfDay,
    IsoDuration => Duration,
    Uuid => Uuid,
    EnumValue => Enum,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<Record> for FieldValue {
    fn from(value: Record) -> Self {
        FieldValue::Object(Box::new(value))
    }
}

/// 由結構描述驅動的通用模型實例
///
/// 宣告欄位與溢位資料互斥：設定宣告欄位時會移除同名的溢位項目，
/// 溢位資料也不接受宣告欄位的 key。
#[derive(Clone)]
pub struct Record {
    schema: &'static Schema,
    fields: BTreeMap<&'static str, FieldValue>,
    additional_data: AdditionalData,
}

impl Record {
    pub fn new(schema: &'static Schema) -> Self {
        let mut record = Self {
            schema,
            fields: BTreeMap::new(),
            additional_data: AdditionalData::new(),
        };
        if let Some(odata_type) = schema.odata_type {
            if let Some(field) = schema.field(crate::core::discriminator::ODATA_TYPE_KEY) {
                record
                    .fields
                    .insert(field.key, FieldValue::String(odata_type.to_string()));
            }
        }
        record
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// 是否正好是指定型別
    pub fn is(&self, schema: &'static Schema) -> bool {
        std::ptr::eq(self.schema, schema)
    }

    /// 是否為指定型別或其子型別
    pub fn is_a(&self, schema: &'static Schema) -> bool {
        self.schema.is_a(schema)
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.get_str(crate::core::discriminator::ODATA_TYPE_KEY)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// 已設定的宣告欄位，依結構描述順序
    pub fn set_fields(&self) -> impl Iterator<Item = (&'static FieldDef, &FieldValue)> + '_ {
        self.schema
            .all_fields()
            .filter_map(move |field| self.fields.get(field.key).map(|value| (field, value)))
    }

    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<()> {
        let field = self.declared(key)?;
        let value = value.into();
        if !value.matches(field) {
            return Err(ModelError::KindMismatch {
                schema: self.schema.name,
                key: key.to_string(),
                expected: field.describe(),
            });
        }
        self.additional_data.remove(field.key);
        self.fields.insert(field.key, value);
        Ok(())
    }

    pub fn unset(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    /// 解碼時使用：欄位定義已由結構描述取得，型別由解碼器保證
    pub(crate) fn put_decoded(&mut self, field: &'static FieldDef, value: FieldValue) {
        self.additional_data.remove(field.key);
        self.fields.insert(field.key, value);
    }

    fn declared(&self, key: &str) -> Result<&'static FieldDef> {
        self.schema.field(key).ok_or_else(|| ModelError::UnknownField {
            schema: self.schema.name,
            key: key.to_string(),
        })
    }

    pub fn insert_additional(&mut self, key: impl Into<String>, value: UntypedValue) -> Result<()> {
        let key = key.into();
        if self.schema.field(&key).is_some() {
            return Err(ModelError::DeclaredKey {
                schema: self.schema.name,
                key,
            });
        }
        self.additional_data.insert(key, value);
        Ok(())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(FieldValue::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.fields.get(key) {
            Some(FieldValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_i32(&self, key: &str) -> Option<i32> {
        match self.fields.get(key) {
            Some(FieldValue::Int32(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.fields.get(key) {
            Some(FieldValue::Int64(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.fields.get(key) {
            Some(FieldValue::Float64(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        match self.fields.get(key) {
            Some(FieldValue::Bytes(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_date_time(&self, key: &str) -> Option<DateTime<FixedOffset>> {
        match self.fields.get(key) {
            Some(FieldValue::DateTime(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_date(&self, key: &str) -> Option<NaiveDate> {
        match self.fields.get(key) {
            Some(FieldValue::Date(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_time(&self, key: &str) -> Option<NaiveTime> {
        match self.fields.get(key) {
            Some(FieldValue::TimeOfDay(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_duration(&self, key: &str) -> Option<IsoDuration> {
        match self.fields.get(key) {
            Some(FieldValue::Duration(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_uuid(&self, key: &str) -> Option<Uuid> {
        match self.fields.get(key) {
            Some(FieldValue::Uuid(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_enum(&self, key: &str) -> Option<EnumValue> {
        match self.fields.get(key) {
            Some(FieldValue::Enum(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_enum_as<E: WireEnum>(&self, key: &str) -> Option<E> {
        self.get_enum(key).and_then(|value| value.as_member())
    }

    pub fn get_object(&self, key: &str) -> Option<&Record> {
        match self.fields.get(key) {
            Some(FieldValue::Object(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_collection(&self, key: &str) -> Option<&[FieldValue]> {
        match self.fields.get(key) {
            Some(FieldValue::Collection(items)) => Some(items),
            _ => None,
        }
    }

    /// 物件集合中的各個 Record，依原順序
    pub fn get_objects(&self, key: &str) -> Option<Vec<&Record>> {
        self.get_collection(key).map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    FieldValue::Object(record) => Some(record.as_ref()),
                    _ => None,
                })
                .collect()
        })
    }

    pub fn get_strings(&self, key: &str) -> Option<Vec<&str>> {
        self.get_collection(key).map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    FieldValue::String(value) => Some(value.as_str()),
                    _ => None,
                })
                .collect()
        })
    }
}

impl AdditionalDataHolder for Record {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema)
            && self.fields == other.fields
            && self.additional_data == other.additional_data
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("schema", &self.schema.name)
            .field("fields", &self.fields)
            .field("additional_data", &self.additional_data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classification::{CLASSIFCATION_ERROR_BASE, CLASSIFICATION_ERROR};
    use crate::models::enums::MacOSGatekeeperAppSources;
    use crate::models::device_configuration::MAC_OS_ENDPOINT_PROTECTION_CONFIGURATION;

    #[test]
    fn test_new_seeds_discriminator_for_subtypes() {
        let base = Record::new(&CLASSIFCATION_ERROR_BASE);
        assert_eq!(base.odata_type(), None);

        let sub = Record::new(&CLASSIFICATION_ERROR);
        assert_eq!(sub.odata_type(), Some("#microsoft.graph.classificationError"));
        assert!(sub.is(&CLASSIFICATION_ERROR));
        assert!(sub.is_a(&CLASSIFCATION_ERROR_BASE));
        assert!(sub.additional_data().is_empty());
    }

    #[test]
    fn test_set_checks_kind() {
        let mut record = Record::new(&CLASSIFCATION_ERROR_BASE);
        record.set("code", "InvalidInput").unwrap();
        assert_eq!(record.get_str("code"), Some("InvalidInput"));

        let err = record.set("code", 42).unwrap_err();
        assert!(matches!(err, ModelError::KindMismatch { .. }));

        let err = record.set("nonexistent", "x").unwrap_err();
        assert!(matches!(err, ModelError::UnknownField { .. }));
    }

    #[test]
    fn test_subtype_accepted_for_base_object_field() {
        let mut parent = Record::new(&CLASSIFICATION_ERROR);
        let child = Record::new(&CLASSIFICATION_ERROR);
        parent
            .set("details", FieldValue::collection(vec![child]))
            .unwrap();
        assert_eq!(parent.get_objects("details").unwrap().len(), 1);
    }

    #[test]
    fn test_overflow_and_declared_fields_stay_disjoint() {
        let mut record = Record::new(&CLASSIFCATION_ERROR_BASE);
        assert!(matches!(
            record.insert_additional("message", serde_json::json!("x")),
            Err(ModelError::DeclaredKey { .. })
        ));

        record
            .insert_additional("futureField", serde_json::json!(1))
            .unwrap();
        assert_eq!(record.additional_data().len(), 1);
    }

    #[test]
    fn test_typed_enum_accessor() {
        let mut record = Record::new(&MAC_OS_ENDPOINT_PROTECTION_CONFIGURATION);
        record
            .set(
                "gatekeeperAllowedAppSource",
                FieldValue::from_enum(MacOSGatekeeperAppSources::Anywhere),
            )
            .unwrap();
        assert_eq!(
            record.get_enum_as::<MacOSGatekeeperAppSources>("gatekeeperAllowedAppSource"),
            Some(MacOSGatekeeperAppSources::Anywhere)
        );
    }
}
