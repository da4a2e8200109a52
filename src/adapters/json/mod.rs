//! JSON 實作：`serde_json::Value` 上的 `ParseNode` 與 `SerializationWriter`。

mod parse_node;
mod writer;

pub use parse_node::JsonParseNode;
pub use writer::{JsonSerializationWriter, NullPolicy, WriterOptions};

use crate::core::record_codec;
use crate::domain::model::Record;
use crate::domain::ports::{EncodeResult, Model, ParseNode};
use crate::domain::schema::Schema;
use crate::utils::error::{ModelError, Result};
use serde_json::Value;

/// 解析 JSON 文字並依 `base` 解碼（含判別標籤解析）
pub fn decode_json(payload: &str, base: &'static Schema) -> Result<Record> {
    let value: Value = serde_json::from_str(payload)?;
    decode_json_value(&value, base)
}

pub fn decode_json_value(value: &Value, base: &'static Schema) -> Result<Record> {
    let record = record_codec::decode(Some(&JsonParseNode::new(value)), base)?;
    tracing::debug!(base = base.name, resolved = record.schema().name, "decoded record");
    Ok(record)
}

/// 頂層為陣列的酬載，每個元素各自解析判別標籤
pub fn decode_json_collection(value: &Value, base: &'static Schema) -> Result<Vec<Record>> {
    let node = JsonParseNode::new(value);
    let Some(items) = node.get_collection_values()? else {
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record = record_codec::decode(Some(item), base).map_err(|e| e.in_element(index))?;
        records.push(record);
    }
    Ok(records)
}

/// 解碼成具型別模型；判別標籤可能解析到 `M` 的子型別
pub fn decode_model<M: Model>(payload: &str) -> Result<M> {
    let record = decode_json(payload, M::schema())?;
    M::from_record(record).map_err(|record| ModelError::KindMismatch {
        schema: record.schema().name,
        key: String::new(),
        expected: M::schema().name.to_string(),
    })
}

pub fn encode_json_value(record: &Record, options: WriterOptions) -> EncodeResult<Value> {
    let mut writer = JsonSerializationWriter::new(options);
    record_codec::encode(&mut writer, None, record)?;
    writer.into_value()
}

pub fn encode_json(record: &Record, options: WriterOptions) -> Result<String> {
    let value = encode_json_value(record, options)?;
    let text = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}
