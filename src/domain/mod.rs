// Domain layer: schemas, records and ports (interfaces). No format-specific code here.

pub mod duration;
pub mod model;
pub mod ports;
pub mod schema;
