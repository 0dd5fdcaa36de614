//! # 导入映射
//!
//! 把上传的工作簿解析为规范记录序列。格式不可读、无工作表或列数不足
//! 都会让整个导入中止，不产生任何部分提交。

use super::layout::{Field, SheetLayout};
use crate::error::{AdminError, Result};
use crate::normalizer::{AccountDraft, FieldPolicy, NetworkArea};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

/// 解析工作簿字节流，返回规范化后的记录序列
///
/// 资产编号列的输入值被直接丢弃，入库后统一重新生成。
pub fn parse_workbook(bytes: &[u8], policy: &FieldPolicy) -> Result<Vec<AccountDraft>> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| AdminError::import_with_source("无法读取Excel文件".to_string(), e.into()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .ok_or_else(|| AdminError::import("Excel文件中没有工作表"))?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| {
            AdminError::import_with_source(format!("读取工作表 {sheet_name} 失败"), e.into())
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    // 布局只判定一次，之后所有行按同一映射处理
    let layout = SheetLayout::detect(header)?;

    let mut drafts = Vec::new();
    for row in rows {
        if is_blank_row(row) {
            continue;
        }
        let mut draft = map_row(row, &layout, policy);
        policy.normalize(&mut draft);
        drafts.push(draft);
    }

    Ok(drafts)
}

/// 按布局把一行映射为规范记录
fn map_row(row: &[Data], layout: &SheetLayout, policy: &FieldPolicy) -> AccountDraft {
    let get = |field: Field| -> String {
        layout
            .column_of(field)
            .and_then(|col| cell_string(row, col))
            .unwrap_or_default()
    };

    AccountDraft {
        user_name: get(Field::UserName),
        account_number: get(Field::AccountNumber),
        computer_name: get(Field::ComputerName),
        phone_number: get(Field::PhoneNumber),
        department: get(Field::Department),
        network_area: NetworkArea::parse(&get(Field::NetworkArea)),
        account_status: {
            let status = get(Field::AccountStatus);
            if status.trim().is_empty() {
                policy.default_status.to_string()
            } else {
                status
            }
        },
    }
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|cell| match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    })
}

/// 单元格转字符串，数值列（如电话、工号）不带小数点尾巴
fn cell_string(row: &[Data], col: usize) -> Option<String> {
    row.get(col).and_then(|cell| match cell {
        Data::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                Some(((*f) as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
