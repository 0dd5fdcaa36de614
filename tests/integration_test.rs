//! # 集成测试
//!
//! 测试数据库迁移、账户CRUD和前缀/资产编号规则的集成

use account_admin::database::{init_database, run_migrations};
use account_admin::error::AdminError;
use account_admin::management::services::accounts as account_service;
use account_admin::normalizer::{AccountDraft, FieldPolicy, NetworkArea};
use sea_orm::DatabaseConnection;
use tempfile::NamedTempFile;

async fn setup_db(temp: &NamedTempFile) -> DatabaseConnection {
    let db_url = format!("sqlite:{}", temp.path().display());
    let db = init_database(&db_url).await.expect("数据库连接失败");
    run_migrations(&db).await.expect("数据库迁移失败");
    db
}

fn draft(name: &str, account: &str, area: NetworkArea) -> AccountDraft {
    AccountDraft {
        user_name: name.to_string(),
        account_number: account.to_string(),
        computer_name: String::new(),
        phone_number: String::new(),
        department: String::new(),
        network_area: area,
        account_status: String::new(),
    }
}

#[tokio::test]
async fn test_create_generates_prefixed_fields_and_asset_number() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    let created = account_service::create_account(
        &db,
        &policy,
        draft("张三", "001", NetworkArea::Management),
    )
    .await
    .expect("创建账户失败");

    assert_eq!(created.id, 1);
    assert_eq!(created.account_number, "foc-001");
    assert_eq!(created.asset_number, "g-fj-foc-1");
    assert_eq!(created.network_area, "管理网");
    assert_eq!(created.account_status, "使用中");
}

#[tokio::test]
async fn test_area_change_replaces_prefix_but_keeps_asset_number() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    let created = account_service::create_account(
        &db,
        &policy,
        draft("张三", "001", NetworkArea::Management),
    )
    .await
    .unwrap();
    assert_eq!(created.account_number, "foc-001");
    let original_asset = created.asset_number.clone();

    // 编辑：区域改为财务网，账号前缀替换为 foc-d-，资产编号不变
    let updated = account_service::update_account(
        &db,
        &policy,
        created.id,
        draft("张三", &created.account_number, NetworkArea::Finance),
    )
    .await
    .unwrap();

    assert_eq!(updated.account_number, "foc-d-001");
    assert_eq!(updated.network_area, "财务网");
    assert_eq!(updated.asset_number, original_asset);
}

#[tokio::test]
async fn test_repeated_saves_never_accumulate_prefixes() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    let mut record = account_service::create_account(
        &db,
        &policy,
        draft("李四", "002", NetworkArea::Production),
    )
    .await
    .unwrap();
    assert_eq!(record.account_number, "foc-d-002");

    // 原值回传多轮编辑，前缀不叠加
    for area in [
        NetworkArea::Management,
        NetworkArea::Finance,
        NetworkArea::Production,
    ] {
        record = account_service::update_account(
            &db,
            &policy,
            record.id,
            draft("李四", &record.account_number, area),
        )
        .await
        .unwrap();
    }
    assert_eq!(record.account_number, "foc-d-002");
}

#[tokio::test]
async fn test_create_requires_user_name() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    let err =
        account_service::create_account(&db, &policy, draft("  ", "001", NetworkArea::Production))
            .await
            .unwrap_err();
    assert!(matches!(err, AdminError::Validation { .. }));

    // 校验失败不产生状态变更
    let all = account_service::list_accounts(&db).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;

    account_service::delete_account(&db, 9999)
        .await
        .expect("删除不存在的账户不应报错");
}

#[tokio::test]
async fn test_get_missing_account_is_not_found() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;

    let err = account_service::get_account(&db, 42).await.unwrap_err();
    assert!(matches!(err, AdminError::NotFound { .. }));
}

#[tokio::test]
async fn test_list_is_ascending_by_id() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    for name in ["甲", "乙", "丙"] {
        account_service::create_account(&db, &policy, draft(name, "", NetworkArea::Production))
            .await
            .unwrap();
    }

    let all = account_service::list_accounts(&db).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(all[0].user_name, "甲");
    assert_eq!(all[2].user_name, "丙");
    // 每条记录都满足 asset_number == 资产前缀 + id
    for record in &all {
        assert_eq!(record.asset_number, format!("z-fj-foc-{}", record.id));
    }
}
