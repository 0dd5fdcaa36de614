//! # 账户管理服务主程序
//!
//! 内部账户信息管理工具：账户增删改查 + Excel 批量导入导出

use account_admin::management::server::{AdminServer, AppState};
use account_admin::{AppConfig, Result, database, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logging::init_logging(None);

    // 加载配置
    let config = AppConfig::load()?;

    // 初始化数据库并运行迁移
    let db = database::init_database(&config.database.url).await?;
    database::run_migrations(&db).await?;

    // 启动服务
    info!("服务启动");
    let state = AppState::new(db);
    let server = AdminServer::new(config.server, state);
    if let Err(e) = server.serve().await {
        error!("服务启动失败: {e:?}");
        std::process::exit(1);
    }

    info!("服务正常关闭");
    Ok(())
}
