//! # 列布局识别
//!
//! 导入文件的列集合有三种情况：规范中文标签、纯位置布局（6/7/8列）、
//! 缺列的部分命名布局。布局在每次导入时只判定一次，行处理不再分支。

use crate::error::{AdminError, Result};
use calamine::Data;
use std::collections::HashMap;

/// 规范字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    UserName,
    AccountNumber,
    AssetNumber,
    ComputerName,
    PhoneNumber,
    Department,
    NetworkArea,
    AccountStatus,
}

/// 位置布局下的列顺序（前6列为基础字段，第7列区域，第8列状态）
const POSITIONAL_ORDER: [Field; 8] = [
    Field::UserName,
    Field::AccountNumber,
    Field::AssetNumber,
    Field::ComputerName,
    Field::PhoneNumber,
    Field::Department,
    Field::NetworkArea,
    Field::AccountStatus,
];

/// 规范中文标签与字段的对应关系，同时是导出列序
pub const COLUMN_LABELS: [(&str, Field); 8] = [
    ("用户姓名", Field::UserName),
    ("账号", Field::AccountNumber),
    ("资产编号", Field::AssetNumber),
    ("计算机名", Field::ComputerName),
    ("联系电话", Field::PhoneNumber),
    ("所在部门", Field::Department),
    ("网络区域", Field::NetworkArea),
    ("账号状态", Field::AccountStatus),
];

/// 一次导入判定出的列布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetLayout {
    /// 位置布局：按列序取前 count 列（6/7/8）
    Positional { count: usize },
    /// 命名布局：识别出的标签映射到字段所在列
    Named { columns: HashMap<Field, usize> },
}

impl SheetLayout {
    /// 从表头行判定布局
    ///
    /// 第一个规范标签（用户姓名）不在表头时视为位置布局；
    /// 不足6列的文件视为格式错误，整个导入中止。
    pub fn detect(header: &[Data]) -> Result<Self> {
        let labels: Vec<String> = header
            .iter()
            .map(|cell| match cell {
                Data::String(s) => s.trim().to_string(),
                other => other.to_string().trim().to_string(),
            })
            .collect();

        if labels.iter().any(|l| l == "用户姓名") {
            let mut columns = HashMap::new();
            for (idx, label) in labels.iter().enumerate() {
                if let Some((_, field)) = COLUMN_LABELS.iter().find(|(l, _)| l == label) {
                    // 重复标签取第一次出现的列
                    columns.entry(*field).or_insert(idx);
                }
            }
            return Ok(Self::Named { columns });
        }

        if header.len() < 6 {
            return Err(AdminError::import(format!(
                "无法识别的表格布局：仅 {} 列，至少需要 6 列",
                header.len()
            )));
        }
        Ok(Self::Positional {
            count: header.len().min(8),
        })
    }

    /// 某个字段所在的列，不存在时为 None
    #[must_use]
    pub fn column_of(&self, field: Field) -> Option<usize> {
        match self {
            Self::Positional { count } => POSITIONAL_ORDER[..*count]
                .iter()
                .position(|f| *f == field),
            Self::Named { columns } => columns.get(&field).copied(),
        }
    }
}
