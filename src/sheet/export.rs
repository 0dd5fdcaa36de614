//! # 导出格式化
//!
//! 把全部账户记录按固定中文标签和列序写成 xlsx 字节流，id 列不导出。

use super::layout::{COLUMN_LABELS, Field};
use crate::error::{AdminError, Result};
use entity::accounts;
use rust_xlsxwriter::Workbook;

/// 导出工作表名
pub const EXPORT_SHEET_NAME: &str = "账户信息";
/// 下载文件名
pub const EXPORT_FILE_NAME: &str = "accounts_export.xlsx";

/// 把账户记录写成 xlsx 字节流
///
/// 调用方负责按 id 升序传入记录；本函数只做格式化，无副作用。
pub fn write_accounts(records: &[accounts::Model]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(EXPORT_SHEET_NAME)
        .map_err(|e| AdminError::internal(format!("设置工作表名失败: {e}")))?;

    // 表头
    for (col, (label, _)) in COLUMN_LABELS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *label)
            .map_err(|e| AdminError::internal(format!("写表头失败: {e}")))?;
    }

    // 数据行
    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, (_, field)) in COLUMN_LABELS.iter().enumerate() {
            let value = field_value(record, *field);
            worksheet
                .write_string(row, col as u16, value)
                .map_err(|e| AdminError::internal(format!("写数据行失败: {e}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AdminError::internal(format!("生成Excel文件失败: {e}")))
}

fn field_value(record: &accounts::Model, field: Field) -> &str {
    match field {
        Field::UserName => &record.user_name,
        Field::AccountNumber => &record.account_number,
        Field::AssetNumber => &record.asset_number,
        Field::ComputerName => &record.computer_name,
        Field::PhoneNumber => &record.phone_number,
        Field::Department => &record.department,
        Field::NetworkArea => &record.network_area,
        Field::AccountStatus => &record.account_status,
    }
}
