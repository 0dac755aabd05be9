//! Everlight 光耦处理器（EL817/EL827/EL847系列）
//! MPN结构：系列 + CTR分档字母 + 编带后缀
//! 例：EL817C(TA) → 单通道光耦，CTR档位C，编带包装

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::super::ManufacturerHandler;
use crate::error::MpnResult;
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::utils::Normalizer;

// 注册到规则库的目录匹配模式
const CATALOG_PATTERN: &str = r"^EL8[124]7[ABCD]?(\((TA|TB)\))?(-V)?(-G)?$";

// MPN结构解析正则（提取器专用）
static PARSE_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(?P<series>EL8(?P<chan>[124])7)(?P<grade>[ABCD])?(\((TA|TB)\))?(-V)?(-G)?$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

const SUPPORTED_TYPES: &[ComponentType] = &[ComponentType::OptocouplerEverlight];

/// Everlight 处理器
pub struct EverlightHandler;

impl EverlightHandler {
    pub fn new() -> Self {
        Self
    }

    /// 解析MPN结构，返回(系列, 通道数, CTR档位)
    fn parse(mpn: &str) -> Option<(String, i32, String)> {
        let normalized = Normalizer::normalize(mpn);
        let captures = PARSE_REGEX.captures(&normalized)?;
        let series = captures.name("series")?.as_str().to_string();
        let channels = match captures.name("chan")?.as_str() {
            "1" => 1,
            "2" => 2,
            "4" => 4,
            _ => return None,
        };
        let grade = captures
            .name("grade")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        Some((series, channels, grade))
    }

    /// 提取CTR分档字母（A-D），未分档或无法识别返回空串
    pub fn extract_ctr_grade(&self, mpn: &str) -> String {
        Self::parse(mpn).map(|(_, _, grade)| grade).unwrap_or_default()
    }

    /// 提取通道数，无法识别返回哨兵值-1
    pub fn extract_channel_count(&self, mpn: &str) -> i32 {
        Self::parse(mpn).map(|(_, channels, _)| channels).unwrap_or(-1)
    }
}

impl Default for EverlightHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for EverlightHandler {
    fn name(&self) -> &str {
        "Everlight"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> MpnResult<()> {
        registry.register(ComponentType::OptocouplerEverlight, CATALOG_PATTERN)
    }

    fn supported_types(&self) -> &[ComponentType] {
        SUPPORTED_TYPES
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        match Self::parse(mpn) {
            Some((_, 1, _)) => "DIP-4".to_string(),
            Some((_, 2, _)) => "DIP-8".to_string(),
            Some((_, 4, _)) => "DIP-16".to_string(),
            _ => String::new(),
        }
    }

    fn extract_series(&self, mpn: &str) -> String {
        Self::parse(mpn).map(|(series, _, _)| series).unwrap_or_default()
    }

    /// 同系列（通道数一致）方可替代；CTR分档规则单向：
    /// 原料已分档时替代料必须同档，原料未分档时任意分档料可替代
    fn is_official_replacement(&self, mpn_a: &str, mpn_b: &str) -> bool {
        let (Some((series_a, _, grade_a)), Some((series_b, _, grade_b))) =
            (Self::parse(mpn_a), Self::parse(mpn_b))
        else {
            return false;
        };
        if series_a != series_b {
            return false;
        }
        grade_a.is_empty() || grade_a == grade_b
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ComponentType::*;

    #[test]
    fn test_everlight_matches() {
        let handler = EverlightHandler::new();
        let mut registry = PatternRegistry::new();
        handler.initialize_patterns(&mut registry).unwrap();

        assert!(handler.matches("EL817C", OptocouplerEverlight, &registry));
        assert!(handler.matches("EL817C", Optocoupler, &registry));
        assert!(handler.matches("el817c(ta)", Optocoupler, &registry));
        assert!(handler.matches("EL847", Optocoupler, &registry));
        assert!(!handler.matches("EL837", Optocoupler, &registry));
        assert!(!handler.matches("", Optocoupler, &registry));
    }

    #[test]
    fn test_everlight_ctr_grade() {
        let handler = EverlightHandler::new();
        assert_eq!(handler.extract_ctr_grade("EL817C"), "C");
        assert_eq!(handler.extract_ctr_grade("EL817A(TB)"), "A");
        // 未分档返回空串
        assert_eq!(handler.extract_ctr_grade("EL817"), "");
        assert_eq!(handler.extract_ctr_grade("XYZ"), "");
    }

    #[test]
    fn test_everlight_channel_count() {
        let handler = EverlightHandler::new();
        assert_eq!(handler.extract_channel_count("EL817C"), 1);
        assert_eq!(handler.extract_channel_count("EL827"), 2);
        assert_eq!(handler.extract_channel_count("EL847B"), 4);
        assert_eq!(handler.extract_channel_count(""), -1);
    }

    #[test]
    fn test_everlight_series_and_package() {
        let handler = EverlightHandler::new();
        assert_eq!(handler.extract_series("EL817C(TA)"), "EL817");
        assert_eq!(handler.extract_series("EL847"), "EL847");
        assert_eq!(handler.extract_package_code("EL817C"), "DIP-4");
        assert_eq!(handler.extract_package_code("EL827"), "DIP-8");
        assert_eq!(handler.extract_package_code("EL847"), "DIP-16");
    }

    #[test]
    fn test_everlight_replacement_grade_directional() {
        // 测试场景：未分档原料可被任意分档料替代，已分档原料必须同档
        let handler = EverlightHandler::new();
        assert!(handler.is_official_replacement("EL817", "EL817C"));
        assert!(handler.is_official_replacement("EL817C", "EL817C(TA)"));
        assert!(!handler.is_official_replacement("EL817C", "EL817"));
        assert!(!handler.is_official_replacement("EL817C", "EL817A"));
    }

    #[test]
    fn test_everlight_replacement_rejects_channel_mismatch() {
        // 测试场景：通道数不同（不同系列）不可替代
        let handler = EverlightHandler::new();
        assert!(!handler.is_official_replacement("EL817C", "EL827"));
        assert!(!handler.is_official_replacement("EL847", "EL817"));
        assert!(!handler.is_official_replacement("", "EL817"));
    }
}
