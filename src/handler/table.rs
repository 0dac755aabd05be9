//! 数据驱动的通用厂商处理器
//! 由一份VendorRuleTable直接构建，新增厂商无需新增代码
//! 规则表不携带电气语义，替代判定采取保守策略：仅相同MPN视为可替代

use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::ManufacturerHandler;
use crate::error::MpnResult;
use crate::registry::PatternRegistry;
use crate::rule::model::VendorRuleTable;
use crate::taxonomy::ComponentType;
use crate::utils::Normalizer;

/// 规则表驱动的通用处理器
pub struct TableHandler {
    table: VendorRuleTable,
    supported: Vec<ComponentType>,
    // 预编译的匹配/提取正则（与规则表行一一对应）
    mpn_regexes: Vec<Regex>,
    series_regexes: Vec<Regex>,
    package_regexes: Vec<(Regex, String)>,
}

impl TableHandler {
    /// 从规则表构建处理器，所有正则在此一次性编译
    /// 任一模式编译失败即整体失败（配置编写期错误）
    pub fn new(table: VendorRuleTable) -> MpnResult<Self> {
        let compile = |pattern: &str| -> MpnResult<Regex> {
            Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
        };

        let mpn_regexes = table
            .rules
            .iter()
            .map(|r| compile(&r.pattern))
            .collect::<MpnResult<Vec<_>>>()?;
        let series_regexes = table
            .series_rules
            .iter()
            .map(|r| compile(&r.pattern))
            .collect::<MpnResult<Vec<_>>>()?;
        let package_regexes = table
            .package_rules
            .iter()
            .map(|r| Ok((compile(&r.pattern)?, r.package.clone())))
            .collect::<MpnResult<Vec<_>>>()?;

        let supported = table.component_types();
        debug!(
            "构建规则表处理器 [{}]，规则{}条，支持类型{}种",
            table.manufacturer,
            table.rules.len(),
            supported.len()
        );

        Ok(Self {
            table,
            supported,
            mpn_regexes,
            series_regexes,
            package_regexes,
        })
    }

    /// MPN是否命中规则表中的任意一条规则
    fn in_catalog(&self, normalized: &str) -> bool {
        !normalized.is_empty() && self.mpn_regexes.iter().any(|r| r.is_match(normalized))
    }
}

impl ManufacturerHandler for TableHandler {
    fn name(&self) -> &str {
        &self.table.manufacturer
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> MpnResult<()> {
        for rule in &self.table.rules {
            registry.register(rule.component_type, &rule.pattern)?;
        }
        Ok(())
    }

    fn supported_types(&self) -> &[ComponentType] {
        &self.supported
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        let normalized = Normalizer::normalize(mpn);
        if normalized.is_empty() {
            return String::new();
        }
        self.package_regexes
            .iter()
            .find(|(regex, _)| regex.is_match(&normalized))
            .map(|(_, package)| package.clone())
            .unwrap_or_default()
    }

    fn extract_series(&self, mpn: &str) -> String {
        let normalized = Normalizer::normalize(mpn);
        if normalized.is_empty() {
            return String::new();
        }
        for regex in &self.series_regexes {
            if let Some(captures) = regex.captures(&normalized) {
                // 捕获组1为系列名，无捕获组时取整体匹配
                let matched = captures.get(1).or_else(|| captures.get(0));
                if let Some(m) = matched {
                    if !m.as_str().is_empty() {
                        return m.as_str().to_string();
                    }
                }
            }
        }
        String::new()
    }

    fn is_official_replacement(&self, mpn_a: &str, mpn_b: &str) -> bool {
        let a = Normalizer::normalize(mpn_a);
        let b = Normalizer::normalize(mpn_b);
        if a.is_empty() || b.is_empty() {
            return false;
        }
        // 规则表无电气语义，仅目录内相同MPN判定为可替代
        a == b && self.in_catalog(&a)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleTableLoader;
    use crate::taxonomy::ComponentType::*;

    fn test_table() -> TableHandler {
        let json = r#"{
            "manufacturer": "JEDEC Discrete",
            "rules": [
                {"pattern": "^2N[0-9]{3,4}[A-Z]?$", "component_type": "transistor"},
                {"pattern": "^MMBT[0-9]{4}[A-Z]?$", "component_type": "transistor"}
            ],
            "package_rules": [
                {"pattern": "^MMBT", "package": "SOT-23"},
                {"pattern": "^2N", "package": "TO-92"}
            ],
            "series_rules": [
                {"pattern": "^(2N[0-9]{3,4}|MMBT[0-9]{4})"}
            ]
        }"#;
        TableHandler::new(RuleTableLoader::from_json_str(json).unwrap()).unwrap()
    }

    #[test]
    fn test_table_handler_matches() {
        let handler = test_table();
        let mut registry = PatternRegistry::new();
        handler.initialize_patterns(&mut registry).unwrap();

        assert!(handler.matches("2N2222A", Transistor, &registry));
        assert!(handler.matches("mmbt3904", Transistor, &registry));
        assert!(!handler.matches("BMA456", Transistor, &registry));
        assert!(!handler.matches("", Transistor, &registry));
    }

    #[test]
    fn test_table_handler_double_init_idempotent() {
        // 测试场景：重复初始化不改变匹配结果与规则数
        let handler = test_table();
        let mut registry = PatternRegistry::new();
        handler.initialize_patterns(&mut registry).unwrap();
        let count = registry.rule_count(Transistor);
        handler.initialize_patterns(&mut registry).unwrap();
        assert_eq!(registry.rule_count(Transistor), count);
        assert!(handler.matches("2N2222", Transistor, &registry));
    }

    #[test]
    fn test_table_handler_extraction() {
        let handler = test_table();
        assert_eq!(handler.extract_series("2N2222A"), "2N2222");
        assert_eq!(handler.extract_series("MMBT3904"), "MMBT3904");
        assert_eq!(handler.extract_package_code("MMBT3904"), "SOT-23");
        assert_eq!(handler.extract_package_code("2N2222A"), "TO-92");
        // 未识别输入返回空串
        assert_eq!(handler.extract_series(""), "");
        assert_eq!(handler.extract_package_code("XYZ"), "");
    }

    #[test]
    fn test_table_handler_replacement_conservative() {
        // 测试场景：规则表处理器仅相同MPN判定可替代
        let handler = test_table();
        assert!(handler.is_official_replacement("2N2222A", "2n2222a"));
        assert!(!handler.is_official_replacement("2N2222A", "2N2907A"));
        assert!(!handler.is_official_replacement("", "2N2222A"));
        assert!(!handler.is_official_replacement("XYZ", "XYZ"));
    }

    #[test]
    fn test_table_handler_bad_pattern_fails_at_build() {
        // 测试场景：非法模式在构建期失败
        let json = r#"{
            "manufacturer": "Broken",
            "rules": [{"pattern": "^2N[0-9{4(", "component_type": "transistor"}]
        }"#;
        let table = RuleTableLoader::from_json_str(json).unwrap();
        assert!(TableHandler::new(table).is_err());
    }
}
