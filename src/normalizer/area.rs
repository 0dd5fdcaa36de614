//! # 网络区域枚举

use serde::{Deserialize, Serialize};

/// 区域对应的前缀三元组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixSet {
    /// 账号前缀
    pub account: &'static str,
    /// 资产编号前缀
    pub asset: &'static str,
    /// 计算机名前缀
    pub computer: &'static str,
}

/// 网络区域（封闭枚举）
///
/// 任何无法识别的值一律归一化为默认区域（生产网）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NetworkArea {
    /// 管理网
    Management,
    /// 生产网（默认）
    #[default]
    Production,
    /// 财务网
    Finance,
}

impl NetworkArea {
    /// 所有区域，用于构建前缀候选列表
    pub const ALL: [Self; 3] = [Self::Management, Self::Production, Self::Finance];

    /// 解析区域字符串，未知或为空时回退到生产网
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "管理网" => Self::Management,
            "财务网" => Self::Finance,
            _ => Self::Production,
        }
    }

    /// 区域的存储/显示值
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Management => "管理网",
            Self::Production => "生产网",
            Self::Finance => "财务网",
        }
    }

    /// 固定前缀查找表
    #[must_use]
    pub const fn prefixes(self) -> PrefixSet {
        match self {
            Self::Management => PrefixSet {
                account: "foc-",
                asset: "g-fj-foc-",
                computer: "G-FJ-FOC-",
            },
            Self::Production => PrefixSet {
                account: "foc-d-",
                asset: "z-fj-foc-",
                computer: "Z-FJ-FOC-",
            },
            Self::Finance => PrefixSet {
                account: "foc-d-",
                asset: "l-fj-foc-",
                computer: "L-FJ-FOC-",
            },
        }
    }
}
