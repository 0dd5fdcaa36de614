//! # 前缀规范化策略
//!
//! 固定的域策略（前缀候选列表、默认标签、上传扩展名白名单），
//! 进程启动时构建一次，显式传入规范化和导入逻辑，不做全局可变状态。

use super::{AccountDraft, NetworkArea};

/// 给字段值加前缀
///
/// 空值保持为空；已带该前缀的值原样返回，不会重复加前缀。
#[must_use]
pub fn add_prefix(value: &str, prefix: &str) -> String {
    if value.is_empty() || value.starts_with(prefix) {
        value.to_string()
    } else {
        format!("{prefix}{value}")
    }
}

/// 按候选列表顺序剥离第一个匹配的前缀，无匹配时原样返回
///
/// 候选列表必须按前缀长度降序排列：`foc-` 是 `foc-d-` 的前缀，
/// 若先试 `foc-`，`foc-d-X` 会被错误剥成 `d-X`。
#[must_use]
pub fn strip_known_prefix(value: &str, candidates: &[&str]) -> String {
    for prefix in candidates {
        if let Some(rest) = value.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    value.to_string()
}

/// 字段规范化策略
#[derive(Debug, Clone)]
pub struct FieldPolicy {
    /// 账号前缀候选（所有区域账号前缀的并集，长度降序）
    account_candidates: Vec<&'static str>,
    /// 计算机名前缀候选（所有区域计算机名前缀的并集，长度降序）
    computer_candidates: Vec<&'static str>,
    /// 允许上传的扩展名
    pub allowed_extensions: &'static [&'static str],
    /// 默认账号状态
    pub default_status: &'static str,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldPolicy {
    /// 构建固定策略
    #[must_use]
    pub fn new() -> Self {
        let mut account_candidates: Vec<&'static str> = Vec::new();
        let mut computer_candidates: Vec<&'static str> = Vec::new();
        for area in NetworkArea::ALL {
            let prefixes = area.prefixes();
            if !account_candidates.contains(&prefixes.account) {
                account_candidates.push(prefixes.account);
            }
            if !computer_candidates.contains(&prefixes.computer) {
                computer_candidates.push(prefixes.computer);
            }
        }
        // 最长匹配优先：确保 foc-d- 在 foc- 之前被尝试
        account_candidates.sort_by_key(|p| std::cmp::Reverse(p.len()));
        computer_candidates.sort_by_key(|p| std::cmp::Reverse(p.len()));

        Self {
            account_candidates,
            computer_candidates,
            allowed_extensions: &[".xlsx", ".xls"],
            default_status: "使用中",
        }
    }

    /// 规范化账号：先剥旧前缀，再加目标区域前缀
    #[must_use]
    pub fn normalize_account_number(&self, area: NetworkArea, value: &str) -> String {
        let stripped = strip_known_prefix(value.trim(), &self.account_candidates);
        add_prefix(&stripped, area.prefixes().account)
    }

    /// 规范化计算机名：先剥旧前缀，再加目标区域前缀
    #[must_use]
    pub fn normalize_computer_name(&self, area: NetworkArea, value: &str) -> String {
        let stripped = strip_known_prefix(value.trim(), &self.computer_candidates);
        add_prefix(&stripped, area.prefixes().computer)
    }

    /// 对一条账户数据做完整前缀规范化
    pub fn normalize(&self, draft: &mut AccountDraft) {
        draft.account_number =
            self.normalize_account_number(draft.network_area, &draft.account_number);
        draft.computer_name =
            self.normalize_computer_name(draft.network_area, &draft.computer_name);
        if draft.account_status.trim().is_empty() {
            draft.account_status = self.default_status.to_string();
        }
    }

    /// 文件名扩展名是否在白名单内（不区分大小写）
    #[must_use]
    pub fn is_allowed_file(&self, filename: &str) -> bool {
        let lower = filename.to_lowercase();
        self.allowed_extensions
            .iter()
            .any(|ext| lower.ends_with(ext))
    }
}
