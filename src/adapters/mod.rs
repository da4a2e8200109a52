// Adapters layer: concrete tree formats behind the ParseNode / SerializationWriter ports.

pub mod json;
