//! # 路由配置
//!
//! 定义所有API路由和路由组织

use crate::management::server::AppState;
use axum::Router;
use axum::routing::{delete, get, post, put};

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 账户管理路由
        .nest("/accounts", account_routes())
        // 健康检查
        .route(
            "/health",
            get(crate::management::handlers::system::health_check),
        )
        .with_state(state)
}

/// 账户管理路由
fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crate::management::handlers::accounts::list_accounts),
        )
        .route(
            "/",
            post(crate::management::handlers::accounts::create_account),
        )
        // 批量导入导出（注册在 {id} 之前，避免路径歧义）
        .route(
            "/import",
            post(crate::management::handlers::transfer::import_accounts),
        )
        .route(
            "/export",
            get(crate::management::handlers::transfer::export_accounts),
        )
        .route(
            "/{id}",
            get(crate::management::handlers::accounts::get_account),
        )
        .route(
            "/{id}",
            put(crate::management::handlers::accounts::update_account),
        )
        .route(
            "/{id}",
            delete(crate::management::handlers::accounts::delete_account),
        )
}
