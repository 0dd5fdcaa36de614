//! # 批量导入导出服务
//!
//! 导入整体在一个事务内执行：任何一行失败则全部回滚，不产生部分提交。

use super::accounts::{insert_with_asset_number, unwrap_txn_err};
use crate::error::{AdminError, Result};
use crate::normalizer::FieldPolicy;
use crate::sheet;
use entity::accounts;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{info, warn};

/// 从上传的 Excel 文件导入账户，返回导入的记录数
pub async fn import_accounts(
    db: &DatabaseConnection,
    policy: &FieldPolicy,
    filename: &str,
    bytes: &[u8],
) -> Result<usize> {
    if !policy.is_allowed_file(filename) {
        warn!("拒绝不支持的上传文件: {filename}");
        return Err(AdminError::unsupported_file(
            "请上传Excel文件(.xlsx或.xls)",
        ));
    }

    let drafts = sheet::parse_workbook(bytes, policy)?;
    let count = drafts.len();

    db.transaction::<_, (), AdminError>(|txn| {
        Box::pin(async move {
            for draft in &drafts {
                insert_with_asset_number(txn, draft).await?;
            }
            Ok(())
        })
    })
    .await
    .map_err(unwrap_txn_err)?;

    info!("成功导入 {count} 条记录 (文件: {filename})");
    Ok(count)
}

/// 导出全部账户为 xlsx 字节流（id 升序）
pub async fn export_accounts(db: &DatabaseConnection) -> Result<Vec<u8>> {
    let records = accounts::Entity::find()
        .order_by_asc(accounts::Column::Id)
        .all(db)
        .await?;

    info!("导出 {} 条账户记录", records.len());
    sheet::write_accounts(&records)
}
