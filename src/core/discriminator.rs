//! 依 `@odata.type` 判別標籤選擇要實例化的具體子型別。
//!
//! 無標籤、標籤不是字串、或標籤不在父型別的表中時，一律退回父型別本身，
//! 讓舊版客戶端仍能解碼新的伺服器端子型別（其專屬欄位會進入溢位資料）。
//! 只做一層解析：解析出的子型別不會再依自己的表重新解析。

use crate::domain::ports::ParseNode;
use crate::domain::schema::Schema;

pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// 在父型別的判別表中做完全相符（區分大小寫）的查找
pub fn lookup(base: &'static Schema, tag: &str) -> Option<&'static Schema> {
    base.subtypes
        .iter()
        .find(|subtype| subtype.tag == tag)
        .map(|subtype| subtype.schema)
}

pub fn resolve<N: ParseNode>(base: &'static Schema, node: Option<&N>) -> &'static Schema {
    let Some(node) = node else {
        return base;
    };
    if !base.is_polymorphic() {
        return base;
    }

    let tag = match node.get_child_node(ODATA_TYPE_KEY).map(|child| child.get_string_value()) {
        Some(Ok(Some(tag))) => tag,
        _ => return base,
    };

    match lookup(base, &tag) {
        Some(schema) => {
            tracing::trace!(base = base.name, resolved = schema.name, "resolved discriminator");
            schema
        }
        None => {
            tracing::debug!(
                base = base.name,
                tag = %tag,
                "unrecognized discriminator, decoding as base type"
            );
            base
        }
    }
}
