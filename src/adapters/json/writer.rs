use crate::domain::duration::IsoDuration;
use crate::domain::model::{AdditionalData, EnumValue};
use crate::domain::ports::{EncodeResult, SerializationWriter};
use crate::utils::error::{DecodeError, EncodeError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde_json::{Map, Number, Value};
use std::str::FromStr;
use uuid::Uuid;

/// 未設定欄位的輸出方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// 不輸出 key
    #[default]
    Omit,
    /// 輸出 `"key": null`
    EmitNull,
}

impl FromStr for NullPolicy {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "omit" => Ok(NullPolicy::Omit),
            "emit" => Ok(NullPolicy::EmitNull),
            other => Err(DecodeError::UnknownEnumValue {
                enum_name: "nullPolicy",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WriterOptions {
    pub null_policy: NullPolicy,
    pub pretty: bool,
}

enum Container {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

struct Frame {
    key: Option<String>,
    container: Container,
}

/// 將寫入呼叫組成 `serde_json::Value` 樹
pub struct JsonSerializationWriter {
    options: WriterOptions,
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl JsonSerializationWriter {
    pub fn new(options: WriterOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
            root: None,
        }
    }

    pub fn options(&self) -> WriterOptions {
        self.options
    }

    /// 取出完成的根值；仍有未結束的物件或集合時失敗
    pub fn into_value(self) -> EncodeResult<Value> {
        if !self.stack.is_empty() {
            return Err(EncodeError::State(format!(
                "{} container(s) still open",
                self.stack.len()
            )));
        }
        self.root
            .ok_or_else(|| EncodeError::State("nothing was written".to_string()))
    }

    fn put(&mut self, key: Option<&str>, value: Value) -> EncodeResult {
        match self.stack.last_mut() {
            None => {
                if self.root.is_some() {
                    return Err(EncodeError::State("root value already written".to_string()));
                }
                self.root = Some(value);
            }
            Some(Frame {
                container: Container::Object(map),
                ..
            }) => {
                let key = key.ok_or_else(|| {
                    EncodeError::State("object member written without a key".to_string())
                })?;
                map.insert(key.to_string(), value);
            }
            Some(Frame {
                container: Container::Array(items),
                ..
            }) => {
                if let Some(key) = key {
                    return Err(EncodeError::State(format!(
                        "collection element written with key '{key}'"
                    )));
                }
                items.push(value);
            }
        }
        Ok(())
    }

    fn pop(&mut self) -> EncodeResult<Frame> {
        self.stack
            .pop()
            .ok_or_else(|| EncodeError::State("end without matching start".to_string()))
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn start_object(&mut self, key: Option<&str>) -> EncodeResult {
        self.stack.push(Frame {
            key: key.map(str::to_string),
            container: Container::Object(Map::new()),
        });
        Ok(())
    }

    fn end_object(&mut self) -> EncodeResult {
        match self.pop()? {
            Frame {
                key,
                container: Container::Object(map),
            } => self.put(key.as_deref(), Value::Object(map)),
            Frame { .. } => Err(EncodeError::State("end_object closes a collection".to_string())),
        }
    }

    fn start_collection(&mut self, key: Option<&str>) -> EncodeResult {
        self.stack.push(Frame {
            key: key.map(str::to_string),
            container: Container::Array(Vec::new()),
        });
        Ok(())
    }

    fn end_collection(&mut self) -> EncodeResult {
        match self.pop()? {
            Frame {
                key,
                container: Container::Array(items),
            } => self.put(key.as_deref(), Value::Array(items)),
            Frame { .. } => Err(EncodeError::State("end_collection closes an object".to_string())),
        }
    }

    fn write_string_value(&mut self, key: Option<&str>, value: &str) -> EncodeResult {
        self.put(key, Value::String(value.to_string()))
    }

    fn write_bool_value(&mut self, key: Option<&str>, value: bool) -> EncodeResult {
        self.put(key, Value::Bool(value))
    }

    fn write_i32_value(&mut self, key: Option<&str>, value: i32) -> EncodeResult {
        self.put(key, Value::from(value))
    }

    fn write_i64_value(&mut self, key: Option<&str>, value: i64) -> EncodeResult {
        self.put(key, Value::from(value))
    }

    fn write_f64_value(&mut self, key: Option<&str>, value: f64) -> EncodeResult {
        let number = Number::from_f64(value).ok_or_else(|| EncodeError::Rejected {
            key: key.unwrap_or("[]").to_string(),
            reason: format!("{value} is not a finite double"),
        })?;
        self.put(key, Value::Number(number))
    }

    fn write_bytes_value(&mut self, key: Option<&str>, value: &[u8]) -> EncodeResult {
        self.put(key, Value::String(STANDARD.encode(value)))
    }

    fn write_date_time_value(&mut self, key: Option<&str>, value: &DateTime<FixedOffset>) -> EncodeResult {
        self.put(key, Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }

    fn write_date_value(&mut self, key: Option<&str>, value: &NaiveDate) -> EncodeResult {
        self.put(key, Value::String(value.format("%Y-%m-%d").to_string()))
    }

    fn write_time_value(&mut self, key: Option<&str>, value: &NaiveTime) -> EncodeResult {
        self.put(key, Value::String(value.to_string()))
    }

    fn write_duration_value(&mut self, key: Option<&str>, value: &IsoDuration) -> EncodeResult {
        self.put(key, Value::String(value.to_string()))
    }

    fn write_uuid_value(&mut self, key: Option<&str>, value: &Uuid) -> EncodeResult {
        self.put(key, Value::String(value.hyphenated().to_string()))
    }

    fn write_enum_value(&mut self, key: Option<&str>, value: &EnumValue) -> EncodeResult {
        self.put(key, Value::String(value.to_wire_string()))
    }

    fn write_null_value(&mut self, key: &str) -> EncodeResult {
        match self.options.null_policy {
            NullPolicy::Omit => Ok(()),
            NullPolicy::EmitNull => self.put(Some(key), Value::Null),
        }
    }

    fn write_additional_data(&mut self, data: &AdditionalData) -> EncodeResult {
        let Some(Frame {
            container: Container::Object(map),
            ..
        }) = self.stack.last_mut()
        else {
            return Err(EncodeError::State(
                "additional data written outside an object".to_string(),
            ));
        };

        for (key, value) in data {
            if map.contains_key(key) {
                tracing::debug!(key = %key, "declared field wins over additional data");
                continue;
            }
            map.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_frames() {
        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.start_object(None).unwrap();
        writer.write_string_value(Some("name"), "a").unwrap();
        writer.start_collection(Some("items")).unwrap();
        writer.write_i32_value(None, 1).unwrap();
        writer.start_object(None).unwrap();
        writer.write_bool_value(Some("ok"), true).unwrap();
        writer.end_object().unwrap();
        writer.end_collection().unwrap();
        writer.end_object().unwrap();

        assert_eq!(
            writer.into_value().unwrap(),
            json!({"name": "a", "items": [1, {"ok": true}]})
        );
    }

    #[test]
    fn test_unbalanced_state_is_reported() {
        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.start_object(None).unwrap();
        assert!(matches!(writer.end_collection(), Err(EncodeError::State(_))));

        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.start_object(None).unwrap();
        assert!(matches!(writer.into_value(), Err(EncodeError::State(_))));

        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        assert!(matches!(writer.end_object(), Err(EncodeError::State(_))));
    }

    #[test]
    fn test_non_finite_double_is_rejected() {
        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.start_object(None).unwrap();
        let err = writer.write_f64_value(Some("score"), f64::NAN).unwrap_err();
        assert!(matches!(err, EncodeError::Rejected { ref key, .. } if key == "score"));
    }

    #[test]
    fn test_null_policy() {
        for (policy, expected) in [
            (NullPolicy::Omit, json!({})),
            (NullPolicy::EmitNull, json!({"missing": null})),
        ] {
            let mut writer = JsonSerializationWriter::new(WriterOptions {
                null_policy: policy,
                pretty: false,
            });
            writer.start_object(None).unwrap();
            writer.write_null_value("missing").unwrap();
            writer.end_object().unwrap();
            assert_eq!(writer.into_value().unwrap(), expected);
        }

        assert_eq!("emit".parse::<NullPolicy>().unwrap(), NullPolicy::EmitNull);
        assert!("always".parse::<NullPolicy>().is_err());
    }

    #[test]
    fn test_declared_keys_win_over_additional_data() {
        let mut data = AdditionalData::new();
        data.insert("code".to_string(), json!("stale"));
        data.insert("extra".to_string(), json!(1));

        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.start_object(None).unwrap();
        writer.write_string_value(Some("code"), "fresh").unwrap();
        writer.write_additional_data(&data).unwrap();
        writer.end_object().unwrap();

        assert_eq!(
            writer.into_value().unwrap(),
            json!({"code": "fresh", "extra": 1})
        );
    }

    #[test]
    fn test_temporal_formats() {
        let mut writer = JsonSerializationWriter::new(WriterOptions::default());
        writer.start_collection(None).unwrap();
        let instant = DateTime::parse_from_rfc3339("2024-03-20T14:45:00Z").unwrap();
        writer.write_date_time_value(None, &instant).unwrap();
        writer
            .write_date_value(None, &NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
            .unwrap();
        writer
            .write_time_value(None, &NaiveTime::from_hms_opt(9, 0, 0).unwrap())
            .unwrap();
        writer
            .write_duration_value(None, &IsoDuration::from_hms(1, 30, 0))
            .unwrap();
        writer.end_collection().unwrap();

        assert_eq!(
            writer.into_value().unwrap(),
            json!(["2024-03-20T14:45:00Z", "2024-01-05", "09:00:00", "PT1H30M"])
        );
    }
}
