//! # Excel 批量导入导出
//!
//! 导入：calamine 读取工作簿，按列布局归一化到规范记录形状；
//! 导出：rust_xlsxwriter 按固定中文标签和列序生成下载文件。

mod export;
mod import;
mod layout;

pub use export::{EXPORT_FILE_NAME, EXPORT_SHEET_NAME, write_accounts};
pub use import::parse_workbook;
pub use layout::{COLUMN_LABELS, Field, SheetLayout};
