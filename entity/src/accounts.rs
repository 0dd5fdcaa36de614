//! # 账户实体定义
//!
//! 账户信息表的 Sea-ORM 实体模型

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 账户实体
///
/// `asset_number` 由系统生成（`资产前缀 + id`），不接受用户输入；
/// `account_number` / `computer_name` 非空时始终携带当前网络区域的前缀。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_name: String,
    pub account_number: String,
    pub asset_number: String,
    pub computer_name: String,
    pub phone_number: String,
    pub department: String,
    pub network_area: String,
    pub account_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
