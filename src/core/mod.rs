// Core layer: format-independent codec logic driven by the static schemas.

pub mod discriminator;
pub mod enum_codec;
pub mod record_codec;
pub mod registry;

pub use crate::domain::model::{FieldValue, Record};
pub use crate::domain::ports::{ConfigProvider, Parsable, ParseNode, SerializationWriter};
pub use crate::utils::error::Result;
pub use record_codec::{decode, encode};
pub use registry::ModelRegistry;
