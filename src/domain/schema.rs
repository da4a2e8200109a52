//! 靜態模型結構描述：每個模型型別對應一個 `static Schema`。
//!
//! 子型別以 `base` 指向父型別（組合取代繼承），多型父型別以 `subtypes`
//! 列出可由 `@odata.type` 解析到的具體子型別。

use std::fmt;

/// 單一欄位值的語意型別
#[derive(Clone, Copy)]
pub enum ValueKind {
    String,
    Bool,
    Int32,
    Int64,
    Float64,
    Bytes,
    DateTime,
    Date,
    TimeOfDay,
    Duration,
    Uuid,
    Enum(&'static EnumDef),
    Object(&'static Schema),
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Bool => "boolean",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Float64 => "double",
            ValueKind::Bytes => "base64 bytes",
            ValueKind::DateTime => "date-time",
            ValueKind::Date => "date",
            ValueKind::TimeOfDay => "time of day",
            ValueKind::Duration => "duration",
            ValueKind::Uuid => "uuid",
            ValueKind::Enum(def) => def.name,
            ValueKind::Object(schema) => schema.name,
        }
    }
}

impl fmt::Debug for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 宣告欄位：wire key 與其型別
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub key: &'static str,
    pub kind: ValueKind,
    pub collection: bool,
}

impl FieldDef {
    pub const fn scalar(key: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            kind,
            collection: false,
        }
    }

    pub const fn collection(key: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            kind,
            collection: true,
        }
    }

    pub fn describe(&self) -> String {
        if self.collection {
            format!("collection of {}", self.kind.name())
        } else {
            self.kind.name().to_string()
        }
    }
}

/// 判別標籤 → 子型別
#[derive(Debug, Clone, Copy)]
pub struct Subtype {
    pub tag: &'static str,
    pub schema: &'static Schema,
}

pub struct Schema {
    /// 模型名稱，例如 `classificationError`
    pub name: &'static str,
    /// 建構時預設寫入 `@odata.type` 的值（只有部分子型別會設定）
    pub odata_type: Option<&'static str>,
    pub base: Option<&'static Schema>,
    /// 本型別自身宣告的欄位（不含父型別）
    pub fields: &'static [FieldDef],
    pub subtypes: &'static [Subtype],
}

impl Schema {
    /// 由根型別到自身的繼承鏈
    pub fn lineage(&'static self) -> Vec<&'static Schema> {
        let mut chain = vec![self];
        let mut current = self.base;
        while let Some(schema) = current {
            chain.push(schema);
            current = schema.base;
        }
        chain.reverse();
        chain
    }

    /// 全部宣告欄位，根型別的欄位在前
    pub fn all_fields(&'static self) -> impl Iterator<Item = &'static FieldDef> {
        self.lineage().into_iter().flat_map(|schema| schema.fields.iter())
    }

    pub fn field(&'static self, key: &str) -> Option<&'static FieldDef> {
        let mut current = Some(self);
        while let Some(schema) = current {
            if let Some(field) = schema.fields.iter().find(|f| f.key == key) {
                return Some(field);
            }
            current = schema.base;
        }
        None
    }

    pub fn is_polymorphic(&self) -> bool {
        !self.subtypes.is_empty()
    }

    /// `self` 是否為 `other` 或其子型別
    pub fn is_a(&'static self, other: &'static Schema) -> bool {
        let mut current = Some(self);
        while let Some(schema) = current {
            if std::ptr::eq(schema, other) {
                return true;
            }
            current = schema.base;
        }
        false
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Schema {}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("odata_type", &self.odata_type)
            .field("base", &self.base.map(|b| b.name))
            .field("fields", &self.fields.len())
            .field("subtypes", &self.subtypes.len())
            .finish()
    }
}

/// 列舉定義：成員名稱與整數值
#[derive(Debug)]
pub struct EnumDef {
    pub name: &'static str,
    pub members: &'static [(&'static str, i32)],
    /// 旗標列舉，wire 格式為逗號分隔的成員清單
    pub flags: bool,
}

impl EnumDef {
    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.members
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
    }

    pub fn value_of(&self, name: &str) -> Option<i32> {
        self.members
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| *value)
    }
}

impl PartialEq for EnumDef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for EnumDef {}

#[cfg(test)]
mod tests {
    use super::*;

    static ROOT: Schema = Schema {
        name: "root",
        odata_type: None,
        base: None,
        fields: &[FieldDef::scalar("id", ValueKind::String)],
        subtypes: &[Subtype {
            tag: "#test.leaf",
            schema: &LEAF,
        }],
    };

    static LEAF: Schema = Schema {
        name: "leaf",
        odata_type: Some("#test.leaf"),
        base: Some(&ROOT),
        fields: &[
            FieldDef::scalar("size", ValueKind::Int32),
            FieldDef::collection("children", ValueKind::Object(&ROOT)),
        ],
        subtypes: &[],
    };

    #[test]
    fn test_lineage_is_root_first() {
        let names: Vec<_> = LEAF.lineage().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["root", "leaf"]);

        let keys: Vec<_> = LEAF.all_fields().map(|f| f.key).collect();
        assert_eq!(keys, vec!["id", "size", "children"]);
    }

    #[test]
    fn test_field_lookup_walks_bases() {
        assert!(LEAF.field("id").is_some());
        assert!(LEAF.field("size").is_some());
        assert!(ROOT.field("size").is_none());
        assert_eq!(LEAF.field("children").unwrap().describe(), "collection of root");
    }

    #[test]
    fn test_is_a() {
        assert!(LEAF.is_a(&ROOT));
        assert!(LEAF.is_a(&LEAF));
        assert!(!ROOT.is_a(&LEAF));
        assert!(ROOT.is_polymorphic());
    }
}
