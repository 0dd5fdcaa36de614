//! # 字段规范化模块
//!
//! 账户字段的前缀规则是本系统唯一的核心逻辑：
//! 每个网络区域对应一组固定前缀（账号前缀 / 资产前缀 / 计算机名前缀），
//! 账号和计算机名在保存前先剥离旧前缀再加上当前区域的前缀，
//! 资产编号在记录创建后由 `资产前缀 + id` 生成。

mod area;
mod asset;
mod draft;
mod policy;

pub use area::{NetworkArea, PrefixSet};
pub use asset::asset_number;
pub use draft::AccountDraft;
pub use policy::{FieldPolicy, add_prefix, strip_known_prefix};
