#[macro_use]
mod macros;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod models;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ModelsConfig;

pub use adapters::json::{
    decode_json, decode_json_collection, decode_json_value, decode_model, encode_json,
    encode_json_value, NullPolicy, WriterOptions,
};
pub use core::{decode, encode, ModelRegistry};
pub use domain::model::{EnumValue, FieldValue, Record, UntypedValue};
pub use domain::ports::{AdditionalDataHolder, Model, WireEnum};
pub use domain::schema::{EnumDef, Schema};
pub use utils::error::{DecodeError, EncodeError, ModelError, Result};
