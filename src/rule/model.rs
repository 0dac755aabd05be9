//! 厂商规则表数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化
//! 规则表是版本化配置数据：新增厂商只需提供一份规则表，无需新增代码

use serde::{Deserialize, Serialize};
use crate::taxonomy::ComponentType;

/// 单条MPN匹配规则定义（模式 + 所属类型）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MpnRuleDef {
    pub pattern: String,
    pub component_type: ComponentType,
}

/// 封装代码提取规则定义
/// MPN命中`pattern`时，封装码为`package`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRuleDef {
    pub pattern: String,
    pub package: String,
}

/// 系列提取规则定义
/// 捕获组1为系列名；无捕获组时取整体匹配
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRuleDef {
    pub pattern: String,
}

/// 完整厂商规则表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRuleTable {
    // 厂商名称（处理器标识）
    pub manufacturer: String,
    // MPN匹配规则
    pub rules: Vec<MpnRuleDef>,
    // 封装提取规则
    #[serde(default)]
    pub package_rules: Vec<PackageRuleDef>,
    // 系列提取规则
    #[serde(default)]
    pub series_rules: Vec<SeriesRuleDef>,
}

impl VendorRuleTable {
    /// 规则表声明的全部类型（去重，保持首次出现顺序）
    pub fn component_types(&self) -> Vec<ComponentType> {
        let mut types = Vec::new();
        for rule in &self.rules {
            if !types.contains(&rule.component_type) {
                types.push(rule.component_type);
            }
        }
        types
    }
}
