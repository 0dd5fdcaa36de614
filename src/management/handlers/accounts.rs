//! # 账户管理处理器

use crate::management::response::{app_error, success, success_with_message, success_without_data};
use crate::management::server::AppState;
use crate::management::services;
use crate::normalizer::{AccountDraft, NetworkArea};
use axum::extract::{Path, State};
use axum::response::Response;
use entity::accounts;
use serde::{Deserialize, Serialize};

/// 创建/更新账户请求
///
/// 资产编号不是输入字段：任何传入值都会被忽略，由系统生成。
#[derive(Debug, Deserialize)]
pub struct AccountRequest {
    /// 用户姓名（必填）
    pub user_name: String,
    /// 账号
    #[serde(default)]
    pub account_number: String,
    /// 计算机名
    #[serde(default)]
    pub computer_name: String,
    /// 联系电话
    #[serde(default)]
    pub phone_number: String,
    /// 所在部门
    #[serde(default)]
    pub department: String,
    /// 网络区域（未知值回退到生产网）
    #[serde(default)]
    pub network_area: String,
    /// 账号状态
    #[serde(default)]
    pub account_status: String,
}

impl From<AccountRequest> for AccountDraft {
    fn from(request: AccountRequest) -> Self {
        Self {
            user_name: request.user_name.trim().to_string(),
            account_number: request.account_number,
            computer_name: request.computer_name,
            phone_number: request.phone_number,
            department: request.department,
            network_area: NetworkArea::parse(&request.network_area),
            account_status: request.account_status,
        }
    }
}

/// 账户响应
#[derive(Debug, Serialize)]
pub struct AccountResponse {
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

impl From<accounts::Model> for AccountResponse {
    fn from(account: accounts::Model) -> Self {
        Self {
            id: account.id,
            user_name: account.user_name,
            account_number: account.account_number,
            asset_number: account.asset_number,
            computer_name: account.computer_name,
            phone_number: account.phone_number,
            department: account.department,
            network_area: account.network_area,
            account_status: account.account_status,
        }
    }
}

/// 列出全部账户
pub async fn list_accounts(State(state): State<AppState>) -> Response {
    match services::accounts::list_accounts(&state.database).await {
        Ok(records) => {
            let responses: Vec<AccountResponse> =
                records.into_iter().map(AccountResponse::from).collect();
            success(responses)
        }
        Err(err) => {
            tracing::error!("查询账户列表失败: {err}");
            app_error(err)
        }
    }
}

/// 创建账户
pub async fn create_account(
    State(state): State<AppState>,
    axum::Json(request): axum::Json<AccountRequest>,
) -> Response {
    match services::accounts::create_account(&state.database, &state.policy, request.into()).await
    {
        Ok(record) => {
            success_with_message(AccountResponse::from(record), "账户信息已添加")
        }
        Err(err) => app_error(err),
    }
}

/// 获取单个账户
pub async fn get_account(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match services::accounts::get_account(&state.database, id).await {
        Ok(record) => success(AccountResponse::from(record)),
        Err(err) => app_error(err),
    }
}

/// 更新账户
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    axum::Json(request): axum::Json<AccountRequest>,
) -> Response {
    match services::accounts::update_account(&state.database, &state.policy, id, request.into())
        .await
    {
        Ok(record) => {
            success_with_message(AccountResponse::from(record), "账户信息已更新")
        }
        Err(err) => app_error(err),
    }
}

/// 删除账户
pub async fn delete_account(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match services::accounts::delete_account(&state.database, id).await {
        Ok(()) => success_without_data("账户信息已删除"),
        Err(err) => {
            tracing::error!("删除账户 {id} 失败: {err}");
            app_error(err)
        }
    }
}
