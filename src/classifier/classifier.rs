//! 分类器核心：整合规则注册表、厂商处理器与相似度计算器，对外提供统一查询入口
//! 调用方无需指明厂商：分类器逐个询问处理器自报匹配结果

use std::sync::Arc;
use tracing::debug;

use crate::classifier::part_class::{PartClass, PartClassLite};
use crate::config::GlobalConfig;
use crate::error::MpnResult;
use crate::handler::vendors::{
    BoschHandler, EverlightHandler, MurataHandler, ProtekHandler, VikingHandler,
};
use crate::handler::{ManufacturerHandler, TableHandler};
use crate::registry::PatternRegistry;
use crate::rule::RuleTableLoader;
use crate::similarity::{
    LexicalSimilarityCalculator, SimilarityCalculator, TransistorSimilarityCalculator,
    TvsSimilarityCalculator, clamp_score,
};
use crate::taxonomy::ComponentType;
use crate::utils::Normalizer;

// 内置的JEDEC分立器件规则表（数据驱动处理器示例）
const DISCRETE_RULES_JSON: &str = include_str!("../../data/discrete_rules.json");

/// MPN分类器
pub struct MpnClassifier {
    registry: PatternRegistry,
    handlers: Vec<Arc<dyn ManufacturerHandler>>,
    calculators: Vec<Box<dyn SimilarityCalculator>>,
    fallback: LexicalSimilarityCalculator,
    config: GlobalConfig,
}

impl MpnClassifier {
    /// 创建分类器（内置厂商目录）
    pub fn new(config: GlobalConfig) -> MpnResult<Self> {
        let handlers = Self::builtin_handlers()?;
        Self::with_handlers(config, handlers)
    }

    /// 以自定义处理器集合创建分类器
    ///
    /// 流程：1.各处理器注册规则 2.冻结注册表进入只读阶段 3.装配相似度计算器
    pub fn with_handlers(
        config: GlobalConfig,
        handlers: Vec<Arc<dyn ManufacturerHandler>>,
    ) -> MpnResult<Self> {
        let mut registry = PatternRegistry::new();
        for handler in &handlers {
            handler.initialize_patterns(&mut registry)?;
        }
        registry.freeze();
        debug!(
            "分类器初始化完成：处理器{}个，规则{}条",
            handlers.len(),
            registry.total_rule_count()
        );

        let calculators: Vec<Box<dyn SimilarityCalculator>> = vec![
            Box::new(TransistorSimilarityCalculator::new()),
            Box::new(TvsSimilarityCalculator::new()),
        ];
        let fallback = LexicalSimilarityCalculator::new(config.lexical_distance_weight);

        Ok(Self {
            registry,
            handlers,
            calculators,
            fallback,
            config,
        })
    }

    /// 内置处理器集合：五个编码厂商 + 一个规则表驱动的分立器件目录
    pub fn builtin_handlers() -> MpnResult<Vec<Arc<dyn ManufacturerHandler>>> {
        let discrete_table = RuleTableLoader::from_json_str(DISCRETE_RULES_JSON)?;
        Ok(vec![
            Arc::new(VikingHandler::new()),
            Arc::new(ProtekHandler::new()),
            Arc::new(BoschHandler::new()),
            Arc::new(EverlightHandler::new()),
            Arc::new(MurataHandler::new()),
            Arc::new(TableHandler::new(discrete_table)?),
        ])
    }

    /// 只读访问规则注册表
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// 当前配置
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 规范化MPN（透传工具方法）
    pub fn normalize(&self, mpn: &str) -> String {
        Normalizer::normalize(mpn)
    }

    /// 查找支持指定类型的全部处理器
    /// 多个厂商可合法声明同一通用类型，因此返回集合
    pub fn handlers_for_type(&self, component_type: ComponentType) -> Vec<&dyn ManufacturerHandler> {
        self.handlers
            .iter()
            .filter(|h| {
                h.supported_types()
                    .iter()
                    .any(|&t| ComponentType::is_satisfied_by(component_type, t))
            })
            .map(|h| h.as_ref())
            .collect()
    }

    /// 按MPN查找归属处理器（无需指明厂商）
    ///
    /// 返回首个自报匹配的处理器。多个厂商模式恰好同时命中时返回哪个
    /// 不属于契约内容，调用方不应依赖注册顺序。
    pub fn find_handler(&self, mpn: &str) -> Option<&dyn ManufacturerHandler> {
        let normalized = Normalizer::normalize(mpn);
        if normalized.is_empty() {
            return None;
        }
        self.handlers
            .iter()
            .find(|h| {
                h.supported_types()
                    .iter()
                    .any(|&t| self.registry.matches(&normalized, t))
            })
            .map(|h| h.as_ref())
    }

    /// 判断MPN是否属于指定类型（任一处理器自报匹配即可）
    pub fn classify(&self, mpn: &str, component_type: ComponentType) -> bool {
        self.handlers
            .iter()
            .any(|h| h.matches(mpn, component_type, &self.registry))
    }

    /// MPN满足的类型集合（含命中类型的通用父类型）
    pub fn matched_types(&self, mpn: &str) -> Vec<ComponentType> {
        let normalized = Normalizer::normalize(mpn);
        if normalized.is_empty() {
            return Vec::new();
        }
        let mut types = Vec::new();
        for &component_type in ComponentType::all() {
            if !self.registry.matches(&normalized, component_type) {
                continue;
            }
            if !types.contains(&component_type) {
                types.push(component_type);
            }
            if let Some(parent) = component_type.generic_parent() {
                if !types.contains(&parent) {
                    types.push(parent);
                }
            }
        }
        types
    }

    /// 提取封装代码：委托给归属处理器，无归属返回空串
    pub fn extract_package_code(&self, mpn: &str) -> String {
        self.find_handler(mpn)
            .map(|h| h.extract_package_code(mpn))
            .unwrap_or_default()
    }

    /// 提取产品系列：委托给归属处理器，无归属返回空串
    pub fn extract_series(&self, mpn: &str) -> String {
        self.find_handler(mpn)
            .map(|h| h.extract_series(mpn))
            .unwrap_or_default()
    }

    /// 官方替代判定：委托给mpn_a的归属处理器
    /// 厂商规则可能是单向的，需要对称结论时双向各查一次
    pub fn is_official_replacement(&self, mpn_a: &str, mpn_b: &str) -> bool {
        self.find_handler(mpn_a)
            .map(|h| h.is_official_replacement(mpn_a, mpn_b))
            .unwrap_or(false)
    }

    /// 跨厂商兼容性评分，输出[0,1]
    ///
    /// 选取首个对双方共同类型适用的领域计算器；无领域计算器适用时
    /// 回退到通用词法相似度
    pub fn similarity(&self, mpn_a: &str, mpn_b: &str) -> f64 {
        let a = Normalizer::normalize(mpn_a);
        let b = Normalizer::normalize(mpn_b);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let types_a = self.matched_types(&a);
        let types_b = self.matched_types(&b);
        for calculator in &self.calculators {
            let applicable = types_a
                .iter()
                .any(|&t| calculator.is_applicable(t) && types_b.contains(&t));
            if applicable {
                let score = clamp_score(calculator.calculate_similarity(&a, &b, &self.registry));
                debug!("相似度计算 [{}]：{} vs {} = {:.3}", calculator.name(), a, b, score);
                return score;
            }
        }

        let score = clamp_score(self.fallback.calculate_similarity(&a, &b, &self.registry));
        debug!("相似度计算 [{}]：{} vs {} = {:.3}", self.fallback.name(), a, b, score);
        score
    }

    /// 判断两个MPN是否达到高相似度阈值（可互换候选）
    pub fn is_compatible_pair(&self, mpn_a: &str, mpn_b: &str) -> bool {
        self.similarity(mpn_a, mpn_b) >= self.config.high_score_threshold
    }

    /// 完整分类：归属厂商 + 满足类型 + 系列与封装
    /// 无归属处理器返回None
    pub fn classify_full(&self, mpn: &str) -> Option<PartClass> {
        let handler = self.find_handler(mpn)?;
        let normalized = Normalizer::normalize(mpn);
        Some(PartClass {
            manufacturer: handler.name().to_string(),
            component_types: self.matched_types(&normalized),
            series: handler.extract_series(&normalized),
            package_code: handler.extract_package_code(&normalized),
            mpn: normalized,
        })
    }

    /// 精简版完整分类
    pub fn classify_full_lite(&self, mpn: &str) -> Option<PartClassLite> {
        self.classify_full(mpn).map(PartClassLite::from)
    }
}

// 对外暴露的简化接口（基于全局分类器实例）
use super::global::get_global_classifier;

/// 判断MPN是否属于指定类型
pub fn classify_mpn(mpn: &str, component_type: ComponentType) -> MpnResult<bool> {
    let classifier = get_global_classifier()?;
    Ok(classifier.classify(mpn, component_type))
}

/// 查找MPN归属厂商名称
pub fn find_mpn_manufacturer(mpn: &str) -> MpnResult<Option<String>> {
    let classifier = get_global_classifier()?;
    Ok(classifier.find_handler(mpn).map(|h| h.name().to_string()))
}

/// 提取MPN封装代码
pub fn extract_mpn_package_code(mpn: &str) -> MpnResult<String> {
    let classifier = get_global_classifier()?;
    Ok(classifier.extract_package_code(mpn))
}

/// 提取MPN产品系列
pub fn extract_mpn_series(mpn: &str) -> MpnResult<String> {
    let classifier = get_global_classifier()?;
    Ok(classifier.extract_series(mpn))
}

/// 官方替代判定
pub fn is_mpn_official_replacement(mpn_a: &str, mpn_b: &str) -> MpnResult<bool> {
    let classifier = get_global_classifier()?;
    Ok(classifier.is_official_replacement(mpn_a, mpn_b))
}

/// 跨厂商兼容性评分
pub fn calculate_mpn_similarity(mpn_a: &str, mpn_b: &str) -> MpnResult<f64> {
    let classifier = get_global_classifier()?;
    Ok(classifier.similarity(mpn_a, mpn_b))
}

/// 完整分类
pub fn classify_mpn_full(mpn: &str) -> MpnResult<Option<PartClass>> {
    let classifier = get_global_classifier()?;
    Ok(classifier.classify_full(mpn))
}

/// 规范化MPN（纯函数，不依赖全局实例）
pub fn normalize_mpn(mpn: &str) -> String {
    Normalizer::normalize(mpn)
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::taxonomy::ComponentType::*;

    fn classifier() -> MpnClassifier {
        MpnClassifier::new(ConfigManager::get_default()).unwrap()
    }

    #[test]
    fn test_classify_generic_and_qualified() {
        // 测试场景：BMA456同时满足通用与厂商限定加速度计类型
        let classifier = classifier();
        assert!(classifier.classify("BMA456", Accelerometer));
        assert!(classifier.classify("BMA456", AccelerometerBosch));
        assert!(!classifier.classify("BMA456", Gyroscope));
        assert!(!classifier.classify("", Accelerometer));
    }

    #[test]
    fn test_classify_across_vendors() {
        let classifier = classifier();
        assert!(classifier.classify("CR0603-FX-1001ELF", Resistor));
        assert!(classifier.classify("GBLC05C", TvsDiode));
        assert!(classifier.classify("EL817C", Optocoupler));
        assert!(classifier.classify("LQH32CN2R2M33L", Inductor));
        assert!(classifier.classify("2N2222A", Transistor));
        assert!(classifier.classify("1N4148", Diode));
    }

    #[test]
    fn test_find_handler_by_mpn() {
        // 测试场景：不指明厂商按MPN定位处理器
        let classifier = classifier();
        assert_eq!(classifier.find_handler("BMA456").unwrap().name(), "Bosch Sensortec");
        assert_eq!(classifier.find_handler("GBLC05C").unwrap().name(), "ProTek Devices");
        assert_eq!(classifier.find_handler("2N2222").unwrap().name(), "JEDEC Discrete");
        assert!(classifier.find_handler("TOTALLY-UNKNOWN-999").is_none());
        assert!(classifier.find_handler("").is_none());
    }

    #[test]
    fn test_handlers_for_type() {
        // 测试场景：类型→处理器索引
        let classifier = classifier();
        let resistor_handlers = classifier.handlers_for_type(Resistor);
        assert!(resistor_handlers.iter().any(|h| h.name() == "Viking Tech"));
        let oscillator_handlers = classifier.handlers_for_type(Oscillator);
        assert!(oscillator_handlers.is_empty());
    }

    #[test]
    fn test_extraction_delegates_to_handler() {
        let classifier = classifier();
        assert_eq!(classifier.extract_series("CR0603-FX-1001ELF"), "CR0603");
        assert_eq!(classifier.extract_package_code("CR0603-FX-1001ELF"), "0603");
        assert_eq!(classifier.extract_series("BMA456"), "BMA456");
        // 无归属处理器返回空串
        assert_eq!(classifier.extract_series("TOTALLY-UNKNOWN-999"), "");
        assert_eq!(classifier.extract_package_code(""), "");
    }

    #[test]
    fn test_official_replacement_scenarios() {
        // 测试场景：电压档不同不可替代，相同料可替代
        let classifier = classifier();
        assert!(classifier.is_official_replacement("GBLC05C", "GBLC05C"));
        assert!(!classifier.is_official_replacement("GBLC03C", "GBLC15C"));
        assert!(!classifier.is_official_replacement("UNKNOWN-999", "GBLC05C"));
    }

    #[test]
    fn test_similarity_known_equivalents() {
        // 测试场景：历史等效料高分，极性相反低分
        let classifier = classifier();
        assert!(classifier.similarity("2N2222", "PN2222") >= 0.9);
        assert!(classifier.similarity("2N2222", "2N2907") <= 0.3);
    }

    #[test]
    fn test_similarity_symmetry_and_range() {
        let classifier = classifier();
        let pairs = [
            ("2N2222", "PN2222"),
            ("GBLC05C", "GBLC15C"),
            ("BMA456", "BMG250"),
            ("CR0603-FX-1001ELF", "CR0805-FX-1001ELF"),
        ];
        for (a, b) in pairs {
            let forward = classifier.similarity(a, b);
            let backward = classifier.similarity(b, a);
            assert_eq!(forward, backward);
            assert!((0.0..=1.0).contains(&forward));
        }
    }

    #[test]
    fn test_similarity_empty_input_zero() {
        let classifier = classifier();
        assert_eq!(classifier.similarity("", "2N2222"), 0.0);
        assert_eq!(classifier.similarity("2N2222", "  "), 0.0);
    }

    #[test]
    fn test_similarity_fallback_for_unknown_types() {
        // 测试场景：无领域计算器适用时词法兜底
        let classifier = classifier();
        let score = classifier.similarity("BMA456", "BMA456");
        assert!(score >= 0.9);
        let cross = classifier.similarity("BMA456", "CR0603-FX-1001ELF");
        assert!(cross < 0.5);
    }

    #[test]
    fn test_classify_full() {
        let classifier = classifier();
        let part = classifier.classify_full(" cr0603-fx-1001elf ").unwrap();
        assert_eq!(part.mpn, "CR0603-FX-1001ELF");
        assert_eq!(part.manufacturer, "Viking Tech");
        assert_eq!(part.series, "CR0603");
        assert_eq!(part.package_code, "0603");
        assert!(part.component_types.contains(&ResistorChipViking));
        assert!(part.component_types.contains(&Resistor));

        assert!(classifier.classify_full("TOTALLY-UNKNOWN-999").is_none());
    }

    #[test]
    fn test_double_initialization_is_idempotent() {
        // 测试场景：处理器对同一注册表重复初始化不改变匹配结果
        let classifier = classifier();
        let before = classifier.registry().total_rule_count();

        let mut registry = PatternRegistry::new();
        let handlers = MpnClassifier::builtin_handlers().unwrap();
        for handler in &handlers {
            handler.initialize_patterns(&mut registry).unwrap();
        }
        for handler in &handlers {
            handler.initialize_patterns(&mut registry).unwrap();
        }
        assert_eq!(registry.total_rule_count(), before);
        assert!(registry.matches("BMA456", AccelerometerBosch));
    }

    #[test]
    fn test_supported_types_reachable() {
        // 测试场景：每个处理器声明的类型都已注册规则（无不可达类型）
        let classifier = classifier();
        let handlers = MpnClassifier::builtin_handlers().unwrap();
        for handler in &handlers {
            assert!(!handler.supported_types().is_empty());
            for &component_type in handler.supported_types() {
                assert!(
                    classifier.registry().has_pattern(component_type),
                    "{} 声明了未注册规则的类型 {}",
                    handler.name(),
                    component_type
                );
            }
            // 预留扩展点恒为空集
            assert!(handler.manufacturer_types().is_empty());
        }
    }
}
