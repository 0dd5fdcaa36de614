//! # 管理服务器
//!
//! Axum HTTP服务器，提供账户管理API

use crate::config::ServerConfig;
use crate::error::{AdminError, Result};
use crate::normalizer::FieldPolicy;
use axum::Router;
use axum::routing::get;
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// 管理服务器应用状态
#[derive(Clone)]
pub struct AppState {
    /// 数据库连接
    pub database: DatabaseConnection,
    /// 字段规范化策略（进程启动时构建一次）
    pub policy: Arc<FieldPolicy>,
}

impl AppState {
    #[must_use]
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            database,
            policy: Arc::new(FieldPolicy::new()),
        }
    }
}

/// 管理服务器
pub struct AdminServer {
    /// 配置
    config: ServerConfig,
    /// 路由器
    router: Router,
}

impl AdminServer {
    /// 创建新的管理服务器
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        let router = Self::create_router(state);
        Self { config, router }
    }

    /// 创建路由器
    fn create_router(state: AppState) -> Router {
        let api_routes = super::routes::create_routes(state);

        let cors_layer = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
            .allow_origin(Any);

        Router::new()
            .nest("/api", api_routes)
            .route("/ping", get(super::handlers::system::ping_handler))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors_layer),
            )
    }

    /// 启动服务器
    pub async fn serve(self) -> Result<()> {
        let bind_address = self.config.bind_address.clone();
        let ip = bind_address.parse::<std::net::IpAddr>().map_err(|e| {
            AdminError::config(format!("无效的监听地址 '{bind_address}': {e}"))
        })?;
        let addr = SocketAddr::new(ip, self.config.port);

        info!("管理服务器启动于 {addr}");

        let listener = TcpListener::bind(&addr).await?;

        axum::serve(listener, self.router)
            .await
            .map_err(|e| AdminError::internal(format!("管理服务器运行错误: {e}")))?;

        Ok(())
    }
}
