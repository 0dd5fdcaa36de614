//! # 账户管理服务
//!
//! 集中管理账户查询、创建、更新、删除的业务逻辑。
//! 创建是两步操作：插入拿到 id，再用 `资产前缀 + id` 回写资产编号，
//! 两步包在同一事务里，调用方观察不到中间态。

use crate::error::{AdminError, Result};
use crate::normalizer::{AccountDraft, FieldPolicy, asset_number};
use entity::accounts;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionError, TransactionTrait,
};
use tracing::info;

/// 解开事务包装错误
pub(super) fn unwrap_txn_err(err: TransactionError<AdminError>) -> AdminError {
    match err {
        TransactionError::Connection(e) => e.into(),
        TransactionError::Transaction(e) => e,
    }
}

/// 列出全部账户（id 升序）
pub async fn list_accounts(db: &DatabaseConnection) -> Result<Vec<accounts::Model>> {
    let records = accounts::Entity::find()
        .order_by_asc(accounts::Column::Id)
        .all(db)
        .await?;
    Ok(records)
}

/// 按 id 查询单个账户
pub async fn get_account(db: &DatabaseConnection, id: i32) -> Result<accounts::Model> {
    accounts::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AdminError::not_found(format!("账户 {id} 不存在")))
}

/// 插入一条已规范化的记录并回写生成的资产编号
///
/// 输入中的资产编号（如果有）已在规范化阶段被丢弃，这里总是重新生成。
pub(super) async fn insert_with_asset_number<C: ConnectionTrait>(
    conn: &C,
    draft: &AccountDraft,
) -> Result<accounts::Model> {
    let active = accounts::ActiveModel {
        user_name: Set(draft.user_name.clone()),
        account_number: Set(draft.account_number.clone()),
        asset_number: Set(String::new()),
        computer_name: Set(draft.computer_name.clone()),
        phone_number: Set(draft.phone_number.clone()),
        department: Set(draft.department.clone()),
        network_area: Set(draft.network_area.as_str().to_string()),
        account_status: Set(draft.account_status.clone()),
        ..Default::default()
    };

    let insert_result = accounts::Entity::insert(active).exec(conn).await?;
    let id = insert_result.last_insert_id;

    let update = accounts::ActiveModel {
        id: Set(id),
        asset_number: Set(asset_number(draft.network_area, id)),
        ..Default::default()
    };
    let model = update.update(conn).await?;
    Ok(model)
}

/// 创建账户（插入 + 生成资产编号，单事务）
pub async fn create_account(
    db: &DatabaseConnection,
    policy: &FieldPolicy,
    mut draft: AccountDraft,
) -> Result<accounts::Model> {
    if draft.user_name.trim().is_empty() {
        return Err(AdminError::validation("用户姓名是必填项"));
    }

    policy.normalize(&mut draft);

    let model = db
        .transaction::<_, accounts::Model, AdminError>(|txn| {
            Box::pin(async move { insert_with_asset_number(txn, &draft).await })
        })
        .await
        .map_err(unwrap_txn_err)?;

    info!("账户已创建: id={} user_name={}", model.id, model.user_name);
    Ok(model)
}

/// 更新账户
///
/// 区域变更时先剥旧前缀再加新前缀（normalize 完成）；
/// 资产编号保持创建时的值，编辑不重新生成。
pub async fn update_account(
    db: &DatabaseConnection,
    policy: &FieldPolicy,
    id: i32,
    mut draft: AccountDraft,
) -> Result<accounts::Model> {
    if draft.user_name.trim().is_empty() {
        return Err(AdminError::validation("用户姓名是必填项"));
    }

    let existing = get_account(db, id).await?;

    policy.normalize(&mut draft);

    let mut active: accounts::ActiveModel = existing.into();
    active.user_name = Set(draft.user_name);
    active.account_number = Set(draft.account_number);
    active.computer_name = Set(draft.computer_name);
    active.phone_number = Set(draft.phone_number);
    active.department = Set(draft.department);
    active.network_area = Set(draft.network_area.as_str().to_string());
    active.account_status = Set(draft.account_status);

    let model = active.update(db).await?;

    info!("账户已更新: id={}", model.id);
    Ok(model)
}

/// 删除账户
///
/// 删除不存在的 id 是无操作，不视为错误。
pub async fn delete_account(db: &DatabaseConnection, id: i32) -> Result<()> {
    let result = accounts::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected > 0 {
        info!("账户已删除: id={id}");
    }
    Ok(())
}
