//! # 批量导入导出集成测试

use account_admin::database::{init_database, run_migrations};
use account_admin::error::AdminError;
use account_admin::management::services::{accounts as account_service, transfer};
use account_admin::normalizer::FieldPolicy;
use rust_xlsxwriter::Workbook;
use sea_orm::DatabaseConnection;
use tempfile::NamedTempFile;

async fn setup_db(temp: &NamedTempFile) -> DatabaseConnection {
    let db_url = format!("sqlite:{}", temp.path().display());
    let db = init_database(&db_url).await.expect("数据库连接失败");
    run_migrations(&db).await.expect("数据库迁移失败");
    db
}

/// 按行生成 xlsx 字节流（首行为表头）
fn make_xlsx(rows: &[Vec<&str>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            worksheet.write_string(r as u32, c as u16, *value).unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

const NAMED_HEADER: [&str; 8] = [
    "用户姓名",
    "账号",
    "资产编号",
    "计算机名",
    "联系电话",
    "所在部门",
    "网络区域",
    "账号状态",
];

#[tokio::test]
async fn test_import_named_chinese_headers_regenerates_asset_numbers() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    let mut rows = vec![NAMED_HEADER.to_vec()];
    let data = [
        ["张三", "001", "垃圾资产号A", "PC01", "13800000001", "运维部", "管理网", "使用中"],
        ["李四", "002", "垃圾资产号B", "PC02", "13800000002", "财务部", "财务网", "停用"],
        ["王五", "003", "垃圾资产号C", "PC03", "13800000003", "生产部", "生产网", "使用中"],
        ["赵六", "004", "垃圾资产号D", "PC04", "13800000004", "生产部", "", ""],
        ["孙七", "005", "垃圾资产号E", "PC05", "13800000005", "未知部", "不认识的区域", "使用中"],
    ];
    for row in &data {
        rows.push(row.to_vec());
    }
    let bytes = make_xlsx(&rows);

    let count = transfer::import_accounts(&db, &policy, "accounts.xlsx", &bytes)
        .await
        .expect("导入失败");
    assert_eq!(count, 5);

    let all = account_service::list_accounts(&db).await.unwrap();
    assert_eq!(all.len(), 5);

    // 输入的资产编号列被丢弃，统一重新生成
    for record in &all {
        assert!(!record.asset_number.contains("垃圾"));
    }
    assert_eq!(all[0].account_number, "foc-001");
    assert_eq!(all[0].asset_number, "g-fj-foc-1");
    assert_eq!(all[0].computer_name, "G-FJ-FOC-PC01");
    assert_eq!(all[1].account_number, "foc-d-002");
    assert_eq!(all[1].asset_number, "l-fj-foc-2");
    assert_eq!(all[1].account_status, "停用");
    // 空/未知区域回退到生产网，空状态取默认值
    assert_eq!(all[3].network_area, "生产网");
    assert_eq!(all[3].account_status, "使用中");
    assert_eq!(all[4].network_area, "生产网");
}

#[tokio::test]
async fn test_import_positional_six_columns_uses_defaults() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    // 非规范表头 -> 位置布局，首行按表头消费
    let rows = vec![
        vec!["姓名", "工号", "资产", "机器", "电话", "部门"],
        vec!["张三", "001", "x", "PC01", "123", "运维部"],
        vec!["李四", "002", "y", "PC02", "456", "生产部"],
    ];
    let bytes = make_xlsx(&rows);

    let count = transfer::import_accounts(&db, &policy, "legacy.xlsx", &bytes)
        .await
        .unwrap();
    assert_eq!(count, 2);

    let all = account_service::list_accounts(&db).await.unwrap();
    for record in &all {
        assert_eq!(record.network_area, "生产网");
        assert_eq!(record.account_status, "使用中");
        assert!(record.account_number.starts_with("foc-d-"));
    }
}

#[tokio::test]
async fn test_export_after_import_reproduces_rows() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    let rows = vec![
        NAMED_HEADER.to_vec(),
        vec!["张三", "001", "旧资产", "PC01", "123", "运维部", "管理网", "使用中"],
        vec!["李四", "002", "旧资产", "PC02", "456", "生产部", "生产网", "使用中"],
    ];
    transfer::import_accounts(&db, &policy, "in.xlsx", &make_xlsx(&rows))
        .await
        .unwrap();

    let exported = transfer::export_accounts(&db).await.unwrap();

    // 导出文件可被导入端读回，行数和字段值一致（资产编号为生成值）
    let drafts = account_admin::sheet::parse_workbook(&exported, &policy).unwrap();
    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].user_name, "张三");
    assert_eq!(drafts[0].account_number, "foc-001");
    assert_eq!(drafts[0].department, "运维部");
    assert_eq!(drafts[1].user_name, "李四");
    assert_eq!(drafts[1].account_number, "foc-d-002");
}

#[tokio::test]
async fn test_import_keeps_rows_with_empty_names() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    // 姓名校验只作用于单条新增/编辑表单，导入行原样入库
    let rows = vec![
        NAMED_HEADER.to_vec(),
        vec!["张三", "001", "", "PC01", "123", "运维部", "生产网", "使用中"],
        vec!["", "002", "", "PC02", "456", "生产部", "生产网", "使用中"],
    ];
    let count = transfer::import_accounts(&db, &policy, "in.xlsx", &make_xlsx(&rows))
        .await
        .unwrap();
    assert_eq!(count, 2);

    let all = account_service::list_accounts(&db).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].user_name, "");
    assert_eq!(all[1].account_number, "foc-d-002");
    assert_eq!(all[1].asset_number, "z-fj-foc-2");
}

#[tokio::test]
async fn test_unsupported_extension_rejected_without_state_change() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    let bytes = make_xlsx(&[NAMED_HEADER.to_vec()]);
    let err = transfer::import_accounts(&db, &policy, "accounts.csv", &bytes)
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::UnsupportedFile { .. }));

    let all = account_service::list_accounts(&db).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_malformed_file_aborts_with_zero_commits() {
    let temp = NamedTempFile::new().unwrap();
    let db = setup_db(&temp).await;
    let policy = FieldPolicy::new();

    let err = transfer::import_accounts(&db, &policy, "broken.xlsx", b"not an excel file")
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::Import { .. }));

    let all = account_service::list_accounts(&db).await.unwrap();
    assert!(all.is_empty());
}
