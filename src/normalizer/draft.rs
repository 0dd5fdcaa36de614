//! # 规范化后的账户数据

use super::NetworkArea;

/// 待入库的账户数据（规范形状）
///
/// 单条新增、编辑和批量导入统一收敛到这个结构后再做前缀规范化。
/// 不含资产编号：资产编号一律在入库拿到 id 后重新生成，任何输入值都被丢弃。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    pub user_name: String,
    pub account_number: String,
    pub computer_name: String,
    pub phone_number: String,
    pub department: String,
    pub network_area: NetworkArea,
    pub account_status: String,
}
