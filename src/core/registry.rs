use crate::domain::schema::{EnumDef, Schema};
use crate::models::{ALL_ENUMS, ALL_SCHEMAS};
use crate::utils::error::{ModelError, Result};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// 依名稱或判別標籤查找模型與列舉（供 CLI 與動態解碼使用）
pub struct ModelRegistry {
    by_name: BTreeMap<&'static str, &'static Schema>,
    by_tag: BTreeMap<&'static str, &'static Schema>,
    enums: BTreeMap<&'static str, &'static EnumDef>,
}

static REGISTRY: LazyLock<ModelRegistry> =
    LazyLock::new(|| ModelRegistry::build(ALL_SCHEMAS, ALL_ENUMS));

impl ModelRegistry {
    pub fn global() -> &'static ModelRegistry {
        &REGISTRY
    }

    fn build(schemas: &[&'static Schema], enums: &[&'static EnumDef]) -> Self {
        let mut by_name = BTreeMap::new();
        let mut by_tag = BTreeMap::new();
        for schema in schemas {
            by_name.insert(schema.name, *schema);
            for subtype in schema.subtypes {
                by_tag.insert(subtype.tag, subtype.schema);
            }
        }

        tracing::debug!(
            schemas = by_name.len(),
            tags = by_tag.len(),
            enums = enums.len(),
            "model registry built"
        );

        Self {
            by_name,
            by_tag,
            enums: enums.iter().map(|def| (def.name, *def)).collect(),
        }
    }

    pub fn schema(&self, name: &str) -> Result<&'static Schema> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownModel {
                name: name.to_string(),
            })
    }

    pub fn by_tag(&self, tag: &str) -> Option<&'static Schema> {
        self.by_tag.get(tag).copied()
    }

    pub fn enum_def(&self, name: &str) -> Result<&'static EnumDef> {
        self.enums
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownEnum {
                name: name.to_string(),
            })
    }

    /// 依名稱排序
    pub fn schemas(&self) -> impl Iterator<Item = &'static Schema> + '_ {
        self.by_name.values().copied()
    }

    pub fn enums(&self) -> impl Iterator<Item = &'static EnumDef> + '_ {
        self.enums.values().copied()
    }
}
