//! 规则模块：厂商规则表的数据模型定义与加载
pub mod model;
pub mod loader;

// 导出核心接口
pub use self::model::{MpnRuleDef, PackageRuleDef, SeriesRuleDef, VendorRuleTable};
pub use self::loader::RuleTableLoader;
