//! 內部巨集：產生 wire 列舉與具型別模型外觀。
//!
//! ## wire_enum!
//!
//! ```ignore
//! wire_enum! {
//!     pub enum MacOSGatekeeperAppSources => MAC_OS_GATEKEEPER_APP_SOURCES("macOSGatekeeperAppSources") {
//!         NotConfigured = "notConfigured": 0,
//!         MacAppStore = "macAppStore": 1,
//!     }
//! }
//! ```
//!
//! 名稱後加上 `, flags` 表示旗標列舉。產生 `#[repr(i32)]` 列舉、對應的
//! `static EnumDef`、`WireEnum`、`FromStr`、`Display` 與 `From<_> for FieldValue`。
//!
//! ## model!
//!
//! 以 newtype 包裝 `Record`，建構時綁定指定的結構描述。

macro_rules! wire_enum {
    (@flags flags) => {
        true
    };
    (@flags) => {
        false
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $def:ident($wire:literal $(, $flags:ident)?) {
            $($variant:ident = $member:literal : $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $($variant = $value),+
        }

        $vis static $def: $crate::domain::schema::EnumDef = $crate::domain::schema::EnumDef {
            name: $wire,
            members: &[$(($member, $value)),+],
            flags: wire_enum!(@flags $($flags)?),
        };

        impl $crate::domain::ports::WireEnum for $name {
            fn definition() -> &'static $crate::domain::schema::EnumDef {
                &$def
            }

            fn value(self) -> i32 {
                self as i32
            }

            fn from_value(value: i32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $member,)+
                }
            }
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                $crate::domain::ports::WireEnum::as_str(self)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::utils::error::DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $def.value_of(s)
                    .and_then(<Self as $crate::domain::ports::WireEnum>::from_value)
                    .ok_or_else(|| $crate::utils::error::DecodeError::UnknownEnumValue {
                        enum_name: $wire,
                        value: s.to_string(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for $crate::domain::model::FieldValue {
            fn from(value: $name) -> Self {
                $crate::domain::model::FieldValue::from_enum(value)
            }
        }
    };
}

macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $schema:path;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name($crate::domain::model::Record);

        impl $name {
            pub fn new() -> Self {
                Self($crate::domain::model::Record::new(&$schema))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::domain::ports::Model for $name {
            fn schema() -> &'static $crate::domain::schema::Schema {
                &$schema
            }

            fn record(&self) -> &$crate::domain::model::Record {
                &self.0
            }

            fn into_record(self) -> $crate::domain::model::Record {
                self.0
            }

            fn from_record(
                record: $crate::domain::model::Record,
            ) -> std::result::Result<Self, $crate::domain::model::Record> {
                if record.is_a(&$schema) {
                    Ok(Self(record))
                } else {
                    Err(record)
                }
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::domain::model::Record;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl TryFrom<$crate::domain::model::Record> for $name {
            type Error = $crate::domain::model::Record;

            fn try_from(record: $crate::domain::model::Record) -> std::result::Result<Self, Self::Error> {
                <Self as $crate::domain::ports::Model>::from_record(record)
            }
        }

        impl From<$name> for $crate::domain::model::Record {
            fn from(model: $name) -> Self {
                model.0
            }
        }

        impl From<$name> for $crate::domain::model::FieldValue {
            fn from(model: $name) -> Self {
                $crate::domain::model::FieldValue::Object(Box::new(model.0))
            }
        }
    };
}
