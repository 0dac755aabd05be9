//! 规则表加载管理器
//! 负责从JSON字符串或本地文件加载厂商规则表
//! 规则表为调用方提供的配置数据，核心不做网络拉取

use std::path::Path;
use tracing::debug;

use super::model::VendorRuleTable;
use crate::error::MpnResult;

/// 规则表加载器
pub struct RuleTableLoader;

impl RuleTableLoader {
    /// 从JSON字符串加载规则表
    pub fn from_json_str(json: &str) -> MpnResult<VendorRuleTable> {
        let table: VendorRuleTable = serde_json::from_str(json)?;
        debug!(
            "加载规则表 [{}]，MPN规则{}条，封装规则{}条，系列规则{}条",
            table.manufacturer,
            table.rules.len(),
            table.package_rules.len(),
            table.series_rules.len()
        );
        Ok(table)
    }

    /// 从本地JSON文件加载规则表
    pub fn from_json_file(path: &Path) -> MpnResult<VendorRuleTable> {
        let content = std::fs::read_to_string(path)?;
        debug!("读取规则表文件：{}", path.display());
        Self::from_json_str(&content)
    }

    /// 批量加载多份规则表（任一解析失败即整体失败）
    pub fn from_json_strs(jsons: &[&str]) -> MpnResult<Vec<VendorRuleTable>> {
        jsons.iter().map(|json| Self::from_json_str(json)).collect()
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::error::MpnClassifyError;

    #[test]
    fn test_load_from_json_str() {
        let json = r#"{
            "manufacturer": "Test Vendor",
            "rules": [{"pattern": "^BC[0-9]{3}$", "component_type": "transistor"}],
            "series_rules": [{"pattern": "^(BC[0-9]{3})"}]
        }"#;
        let table = RuleTableLoader::from_json_str(json).unwrap();
        assert_eq!(table.manufacturer, "Test Vendor");
        assert_eq!(table.series_rules.len(), 1);
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        // 测试场景：非法JSON返回解析错误
        let result = RuleTableLoader::from_json_str("{not json");
        assert!(matches!(result, Err(MpnClassifyError::RuleTableParseError(_))));
    }

    #[test]
    fn test_load_unknown_component_type_is_parse_error() {
        // 测试场景：未知类型标签按配置错误处理
        let json = r#"{
            "manufacturer": "Test",
            "rules": [{"pattern": "^X$", "component_type": "warp_core"}]
        }"#;
        let result = RuleTableLoader::from_json_str(json);
        assert!(matches!(result, Err(MpnClassifyError::RuleTableParseError(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = RuleTableLoader::from_json_file(Path::new("/nonexistent/rules.json"));
        assert!(matches!(result, Err(MpnClassifyError::RuleTableIoError(_))));
    }
}
