use crate::core::discriminator;
use crate::domain::model::{FieldValue, Record};
use crate::domain::ports::{
    AdditionalDataHolder, DecodeResult, EncodeResult, Parsable, ParseNode, SerializationWriter,
};
use crate::domain::schema::{FieldDef, Schema, ValueKind};
use crate::utils::error::DecodeError;

/// 解析判別標籤後建立實例並填入欄位。
///
/// 節點不存在或為 null 時回傳父型別的新實例。任何欄位解碼失敗都會中止整個
/// Record，不回傳部分結果。
pub fn decode<N: ParseNode>(node: Option<&N>, base: &'static Schema) -> DecodeResult<Record> {
    let schema = discriminator::resolve(base, node);
    let mut record = Record::new(schema);
    if let Some(node) = node {
        record.deserialize(node)?;
    }
    Ok(record)
}

/// 寫出完整物件（含開始與結束）
pub fn encode<W: SerializationWriter + ?Sized>(
    writer: &mut W,
    key: Option<&str>,
    record: &Record,
) -> EncodeResult {
    writer.start_object(key)?;
    record.serialize(writer)?;
    writer.end_object()
}

impl Parsable for Record {
    fn deserialize<N: ParseNode>(&mut self, node: &N) -> DecodeResult<()> {
        let Some(entries) = node.get_object_entries()? else {
            return Ok(());
        };

        for (key, child) in entries {
            match self.schema().field(&key) {
                Some(field) => {
                    // null 代表未設定，而不是零值
                    if let Some(value) = decode_field(&child, field).map_err(|e| e.in_field(&key))? {
                        self.put_decoded(field, value);
                    }
                }
                None => {
                    tracing::trace!(schema = self.schema().name, key = %key, "captured undeclared key");
                    self.additional_data_mut().insert(key, child.get_untyped_value());
                }
            }
        }
        Ok(())
    }

    fn serialize<W: SerializationWriter + ?Sized>(&self, writer: &mut W) -> EncodeResult {
        for field in self.schema().all_fields() {
            match self.get(field.key) {
                Some(value) => write_value(writer, Some(field.key), value)?,
                None => writer.write_null_value(field.key)?,
            }
        }
        writer.write_additional_data(self.additional_data())
    }
}

fn decode_field<N: ParseNode>(node: &N, field: &FieldDef) -> DecodeResult<Option<FieldValue>> {
    if !field.collection {
        return decode_value(node, &field.kind);
    }

    let Some(items) = node.get_collection_values()? else {
        return Ok(None);
    };
    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let value = decode_value(item, &field.kind)
            .and_then(|value| {
                value.ok_or(DecodeError::TypeMismatch {
                    expected: field.kind.name(),
                    found: "null",
                })
            })
            .map_err(|e| e.in_element(index))?;
        values.push(value);
    }
    Ok(Some(FieldValue::Collection(values)))
}

fn decode_value<N: ParseNode>(node: &N, kind: &ValueKind) -> DecodeResult<Option<FieldValue>> {
    let value = match kind {
        ValueKind::String => node.get_string_value()?.map(FieldValue::String),
        ValueKind::Bool => node.get_bool_value()?.map(FieldValue::Bool),
        ValueKind::Int32 => node.get_i32_value()?.map(FieldValue::Int32),
        ValueKind::Int64 => node.get_i64_value()?.map(FieldValue::Int64),
        ValueKind::Float64 => node.get_f64_value()?.map(FieldValue::Float64),
        ValueKind::Bytes => node.get_bytes_value()?.map(FieldValue::Bytes),
        ValueKind::DateTime => node.get_date_time_value()?.map(FieldValue::DateTime),
        ValueKind::Date => node.get_date_value()?.map(FieldValue::Date),
        ValueKind::TimeOfDay => node.get_time_value()?.map(FieldValue::TimeOfDay),
        ValueKind::Duration => node.get_duration_value()?.map(FieldValue::Duration),
        ValueKind::Uuid => node.get_uuid_value()?.map(FieldValue::Uuid),
        ValueKind::Enum(def) => node.get_enum_value(def)?.map(FieldValue::Enum),
        ValueKind::Object(schema) => {
            if node.is_null() {
                None
            } else {
                let record = decode(Some(node), schema)?;
                Some(FieldValue::Object(Box::new(record)))
            }
        }
    };
    Ok(value)
}

fn write_value<W: SerializationWriter + ?Sized>(
    writer: &mut W,
    key: Option<&str>,
    value: &FieldValue,
) -> EncodeResult {
    match value {
        FieldValue::String(v) => writer.write_string_value(key, v),
        FieldValue::Bool(v) => writer.write_bool_value(key, *v),
        FieldValue::Int32(v) => writer.write_i32_value(key, *v),
        FieldValue::Int64(v) => writer.write_i64_value(key, *v),
        FieldValue::Float64(v) => writer.write_f64_value(key, *v),
        FieldValue::Bytes(v) => writer.write_bytes_value(key, v),
        FieldValue::DateTime(v) => writer.write_date_time_value(key, v),
        FieldValue::Date(v) => writer.write_date_value(key, v),
        FieldValue::TimeOfDay(v) => writer.write_time_value(key, v),
        FieldValue::Duration(v) => writer.write_duration_value(key, v),
        FieldValue::Uuid(v) => writer.write_uuid_value(key, v),
        FieldValue::Enum(v) => writer.write_enum_value(key, v),
        FieldValue::Object(record) => encode(writer, key, record),
        FieldValue::Collection(items) => {
            writer.start_collection(key)?;
            for item in items {
                write_value(writer, None, item)?;
            }
            writer.end_collection()
        }
    }
}
