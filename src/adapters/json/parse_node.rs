use crate::domain::duration::IsoDuration;
use crate::domain::model::{EnumValue, UntypedValue};
use crate::domain::ports::{DecodeResult, ParseNode};
use crate::domain::schema::EnumDef;
use crate::utils::error::DecodeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::{Number, Value};
use uuid::Uuid;

/// 以 `serde_json::Value` 為底的解析節點
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn mismatch(&self, expected: &'static str) -> DecodeError {
        DecodeError::TypeMismatch {
            expected,
            found: self.kind_name(),
        }
    }

    fn text(&self, expected: &'static str) -> DecodeResult<Option<&'a str>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(text)),
            _ => Err(self.mismatch(expected)),
        }
    }

    /// 先取字串再交給格式解析，失敗時保留原字串
    fn parse_text<T, E: std::fmt::Display>(
        &self,
        kind: &'static str,
        parse: impl FnOnce(&str) -> Result<T, E>,
    ) -> DecodeResult<Option<T>> {
        let Some(text) = self.text(kind)? else {
            return Ok(None);
        };
        parse(text).map(Some).map_err(|e| DecodeError::Malformed {
            kind,
            value: text.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<'a> ParseNode for JsonParseNode<'a> {
    fn get_child_node(&self, key: &str) -> Option<Self> {
        self.value.as_object()?.get(key).map(JsonParseNode::new)
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn kind_name(&self) -> &'static str {
        match self.value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn get_string_value(&self) -> DecodeResult<Option<String>> {
        Ok(self.text("string")?.map(str::to_string))
    }

    fn get_bool_value(&self) -> DecodeResult<Option<bool>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    fn get_i32_value(&self) -> DecodeResult<Option<i32>> {
        let value = match self.get_i64_value() {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(None),
            Err(DecodeError::TypeMismatch { .. }) => return Err(self.mismatch("int32")),
            Err(_) => {
                return Err(DecodeError::OutOfRange {
                    kind: "int32",
                    value: self.value.to_string(),
                })
            }
        };
        i32::try_from(value).map(Some).map_err(|_| DecodeError::OutOfRange {
            kind: "int32",
            value: value.to_string(),
        })
    }

    fn get_i64_value(&self) -> DecodeResult<Option<i64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => match number.as_i64() {
                Some(value) => Ok(Some(value)),
                None if is_integer_literal(number) => Err(DecodeError::OutOfRange {
                    kind: "int64",
                    value: number.to_string(),
                }),
                // 帶小數的數字不是整數
                None => Err(self.mismatch("int64")),
            },
            _ => Err(self.mismatch("int64")),
        }
    }

    fn get_f64_value(&self) -> DecodeResult<Option<f64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => match number.as_f64() {
                Some(value) => Ok(Some(value)),
                // 超出 f64 範圍時不可當成未設定
                None => Err(DecodeError::OutOfRange {
                    kind: "double",
                    value: number.to_string(),
                }),
            },
            _ => Err(self.mismatch("double")),
        }
    }

    fn get_bytes_value(&self) -> DecodeResult<Option<Vec<u8>>> {
        self.parse_text("base64 bytes", |text| STANDARD.decode(text))
    }

    fn get_date_time_value(&self) -> DecodeResult<Option<DateTime<FixedOffset>>> {
        self.parse_text("date-time", DateTime::parse_from_rfc3339)
    }

    fn get_date_value(&self) -> DecodeResult<Option<NaiveDate>> {
        self.parse_text("date", |text| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
    }

    fn get_time_value(&self) -> DecodeResult<Option<NaiveTime>> {
        self.parse_text("time of day", str::parse::<NaiveTime>)
    }

    fn get_duration_value(&self) -> DecodeResult<Option<IsoDuration>> {
        let Some(text) = self.text("duration")? else {
            return Ok(None);
        };
        text.parse().map(Some)
    }

    fn get_uuid_value(&self) -> DecodeResult<Option<Uuid>> {
        self.parse_text("uuid", Uuid::parse_str)
    }

    fn get_enum_value(&self, def: &'static EnumDef) -> DecodeResult<Option<EnumValue>> {
        let Some(text) = self.text(def.name)? else {
            return Ok(None);
        };
        def.parse(text).map(Some)
    }

    fn get_collection_values(&self) -> DecodeResult<Option<Vec<Self>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items.iter().map(JsonParseNode::new).collect())),
            _ => Err(self.mismatch("array")),
        }
    }

    fn get_object_entries(&self) -> DecodeResult<Option<Vec<(String, Self)>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(
                map.iter()
                    .map(|(key, value)| (key.clone(), JsonParseNode::new(value)))
                    .collect(),
            )),
            _ => Err(self.mismatch("object")),
        }
    }

    fn get_untyped_value(&self) -> UntypedValue {
        self.value.clone()
    }
}

/// 以原始文字判斷是否為整數（任意精度下超出 u64 的整數也算）
fn is_integer_literal(number: &Number) -> bool {
    !number.to_string().contains(['.', 'e', 'E'])
}
