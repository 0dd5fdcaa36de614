//! # 资产编号生成

use super::NetworkArea;

/// 由区域的资产前缀和存储分配的 id 生成资产编号
///
/// 只能在记录插入、id 已知之后调用；编辑时不重新生成。
#[must_use]
pub fn asset_number(area: NetworkArea, id: i32) -> String {
    format!("{}{}", area.prefixes().asset, id)
}
