use crate::domain::duration::IsoDuration;
use crate::domain::model::{AdditionalData, EnumValue, Record, UntypedValue};
use crate::domain::schema::{EnumDef, Schema};
use crate::utils::error::{DecodeError, EncodeError};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use std::str::FromStr;
use uuid::Uuid;

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
pub type EncodeResult<T = ()> = std::result::Result<T, EncodeError>;

/// 解析器產生的抽象樹節點
///
/// 所有 `get_*_value` 在節點為 null 時回傳 `Ok(None)`，型別不符時回傳錯誤。
pub trait ParseNode: Sized {
    fn get_child_node(&self, key: &str) -> Option<Self>;

    fn is_null(&self) -> bool;

    /// 節點型別名稱，用於錯誤訊息
    fn kind_name(&self) -> &'static str;

    fn get_string_value(&self) -> DecodeResult<Option<String>>;
    fn get_bool_value(&self) -> DecodeResult<Option<bool>>;
    fn get_i32_value(&self) -> DecodeResult<Option<i32>>;
    fn get_i64_value(&self) -> DecodeResult<Option<i64>>;
    fn get_f64_value(&self) -> DecodeResult<Option<f64>>;
    fn get_bytes_value(&self) -> DecodeResult<Option<Vec<u8>>>;
    fn get_date_time_value(&self) -> DecodeResult<Option<DateTime<FixedOffset>>>;
    fn get_date_value(&self) -> DecodeResult<Option<NaiveDate>>;
    fn get_time_value(&self) -> DecodeResult<Option<NaiveTime>>;
    fn get_duration_value(&self) -> DecodeResult<Option<IsoDuration>>;
    fn get_uuid_value(&self) -> DecodeResult<Option<Uuid>>;
    fn get_enum_value(&self, def: &'static EnumDef) -> DecodeResult<Option<EnumValue>>;

    fn get_collection_values(&self) -> DecodeResult<Option<Vec<Self>>>;

    /// 物件節點的所有 (key, 子節點)，保留原順序
    fn get_object_entries(&self) -> DecodeResult<Option<Vec<(String, Self)>>>;

    /// 未宣告欄位以未定型值存入溢位資料
    fn get_untyped_value(&self) -> UntypedValue;
}

/// 序列化寫入器；`key` 為 None 表示集合元素或根值
pub trait SerializationWriter {
    fn start_object(&mut self, key: Option<&str>) -> EncodeResult;
    fn end_object(&mut self) -> EncodeResult;
    fn start_collection(&mut self, key: Option<&str>) -> EncodeResult;
    fn end_collection(&mut self) -> EncodeResult;

    fn write_string_value(&mut self, key: Option<&str>, value: &str) -> EncodeResult;
    fn write_bool_value(&mut self, key: Option<&str>, value: bool) -> EncodeResult;
    fn write_i32_value(&mut self, key: Option<&str>, value: i32) -> EncodeResult;
    fn write_i64_value(&mut self, key: Option<&str>, value: i64) -> EncodeResult;
    fn write_f64_value(&mut self, key: Option<&str>, value: f64) -> EncodeResult;
    fn write_bytes_value(&mut self, key: Option<&str>, value: &[u8]) -> EncodeResult;
    fn write_date_time_value(&mut self, key: Option<&str>, value: &DateTime<FixedOffset>) -> EncodeResult;
    fn write_date_value(&mut self, key: Option<&str>, value: &NaiveDate) -> EncodeResult;
    fn write_time_value(&mut self, key: Option<&str>, value: &NaiveTime) -> EncodeResult;
    fn write_duration_value(&mut self, key: Option<&str>, value: &IsoDuration) -> EncodeResult;
    fn write_uuid_value(&mut self, key: Option<&str>, value: &Uuid) -> EncodeResult;
    fn write_enum_value(&mut self, key: Option<&str>, value: &EnumValue) -> EncodeResult;

    /// 未設定的宣告欄位；是否輸出 null 由寫入器的 null 政策決定
    fn write_null_value(&mut self, key: &str) -> EncodeResult;

    /// 最後寫出溢位資料；已由宣告欄位寫出的 key 不會被覆蓋
    fn write_additional_data(&mut self, data: &AdditionalData) -> EncodeResult;
}

pub trait Parsable {
    /// 由物件節點填入欄位（不含型別解析）
    fn deserialize<N: ParseNode>(&mut self, node: &N) -> DecodeResult<()>;

    /// 寫出欄位內容；物件的開始與結束由呼叫端負責
    fn serialize<W: SerializationWriter + ?Sized>(&self, writer: &mut W) -> EncodeResult;
}

pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// 具名整數常數與其標準 wire 字串
pub trait WireEnum: Copy + FromStr<Err = DecodeError> + 'static {
    fn definition() -> &'static EnumDef;
    fn value(self) -> i32;
    fn from_value(value: i32) -> Option<Self>;
    fn as_str(self) -> &'static str;
}

/// 包裝 `Record` 的具型別模型
pub trait Model: Sized {
    fn schema() -> &'static Schema;
    fn record(&self) -> &Record;
    fn into_record(self) -> Record;

    /// Record 的型別是 `Self::schema()` 或其子型別時才轉換
    fn from_record(record: Record) -> std::result::Result<Self, Record>;
}

pub trait ConfigProvider: Send + Sync {
    fn null_policy(&self) -> Option<&str>;
    fn pretty(&self) -> Option<bool>;
    fn default_model(&self) -> Option<&str>;
}
