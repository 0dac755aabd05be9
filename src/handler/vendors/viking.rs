//! Viking Tech 厚膜贴片电阻处理器（CR/AR系列）
//! MPN结构：系列+尺寸码 - 容差/温漂码 - 阻值码+包装后缀
//! 例：CR0603-FX-1001ELF → 系列CR0603，封装0603，±1%，1kΩ

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::super::ManufacturerHandler;
use crate::error::MpnResult;
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::utils::{Normalizer, ValueCodeDecoder, value_codes::DECODE_FAILED, within_maximum};

// 注册到规则库的目录匹配模式
const CATALOG_PATTERN: &str =
    r"^(CR|AR)(0201|0402|0603|0805|1206|1210|2010|2512)-[A-Z][A-Z0-9]-[0-9R]{3,4}[A-Z]{0,4}$";

// MPN结构解析正则（提取器专用）
static PARSE_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"^(?P<family>CR|AR)(?P<size>0201|0402|0603|0805|1206|1210|2010|2512)-(?P<tol>[A-Z])(?P<tcr>[A-Z0-9])-(?P<value>[0-9R]{3,4})(?P<suffix>[A-Z]{0,4})$",
    )
    .case_insensitive(true)
    .build()
    .unwrap()
});

const SUPPORTED_TYPES: &[ComponentType] = &[ComponentType::ResistorChipViking];

/// Viking Tech 处理器
pub struct VikingHandler;

impl VikingHandler {
    pub fn new() -> Self {
        Self
    }

    /// 解析MPN结构，返回(系列, 尺寸, 容差码, 阻值码)
    fn parse(mpn: &str) -> Option<(String, String, String, String)> {
        let normalized = Normalizer::normalize(mpn);
        let captures = PARSE_REGEX.captures(&normalized)?;
        let family = captures.name("family")?.as_str();
        let size = captures.name("size")?.as_str();
        Some((
            format!("{}{}", family, size),
            size.to_string(),
            captures.name("tol")?.as_str().to_string(),
            captures.name("value")?.as_str().to_string(),
        ))
    }

    /// 容差码 → 容差百分比，未知码返回哨兵值-1.0
    fn tolerance_percent(code: &str) -> f64 {
        match code {
            "B" => 0.1,
            "D" => 0.5,
            "F" => 1.0,
            "G" => 2.0,
            "J" => 5.0,
            _ => DECODE_FAILED,
        }
    }

    /// 提取阻值（单位Ω），无法识别返回哨兵值-1.0
    pub fn extract_resistance(&self, mpn: &str) -> f64 {
        match Self::parse(mpn) {
            Some((_, _, _, value)) => ValueCodeDecoder::decode(&value),
            None => DECODE_FAILED,
        }
    }

    /// 提取容差百分比，无法识别返回哨兵值-1.0
    pub fn extract_tolerance(&self, mpn: &str) -> f64 {
        match Self::parse(mpn) {
            Some((_, _, tol, _)) => Self::tolerance_percent(&tol),
            None => DECODE_FAILED,
        }
    }
}

impl Default for VikingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for VikingHandler {
    fn name(&self) -> &str {
        "Viking Tech"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> MpnResult<()> {
        registry.register(ComponentType::ResistorChipViking, CATALOG_PATTERN)
    }

    fn supported_types(&self) -> &[ComponentType] {
        SUPPORTED_TYPES
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        Self::parse(mpn).map(|(_, size, _, _)| size).unwrap_or_default()
    }

    fn extract_series(&self, mpn: &str) -> String {
        Self::parse(mpn).map(|(series, _, _, _)| series).unwrap_or_default()
    }

    /// 同系列同阻值可替代；替代料容差须不劣于原料（更紧可替代更松，单向）
    /// AR系列（抗硫化）可替代同规格CR系列，反向不成立
    fn is_official_replacement(&self, mpn_a: &str, mpn_b: &str) -> bool {
        let (Some((series_a, size_a, tol_a, value_a)), Some((series_b, size_b, tol_b, value_b))) =
            (Self::parse(mpn_a), Self::parse(mpn_b))
        else {
            return false;
        };

        // 尺寸与阻值必须一致
        if size_a != size_b {
            return false;
        }
        let resistance_a = ValueCodeDecoder::decode(&value_a);
        let resistance_b = ValueCodeDecoder::decode(&value_b);
        if resistance_a < 0.0 || resistance_a != resistance_b {
            return false;
        }

        // 系列：同系列，或AR升级替代CR
        let family_a = &series_a[..2];
        let family_b = &series_b[..2];
        if family_a != family_b && !(family_a == "CR" && family_b == "AR") {
            return false;
        }

        // 容差：替代料不得比原料更松
        let tol_pct_a = Self::tolerance_percent(&tol_a);
        let tol_pct_b = Self::tolerance_percent(&tol_b);
        if tol_pct_a < 0.0 || tol_pct_b < 0.0 {
            return false;
        }
        within_maximum(tol_pct_a, tol_pct_b)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ComponentType::*;

    #[test]
    fn test_viking_matches() {
        let handler = VikingHandler::new();
        let mut registry = PatternRegistry::new();
        handler.initialize_patterns(&mut registry).unwrap();

        assert!(handler.matches("CR0603-FX-1001ELF", ResistorChipViking, &registry));
        // 厂商限定类型满足通用电阻类型
        assert!(handler.matches("CR0603-FX-1001ELF", Resistor, &registry));
        assert!(handler.matches("cr0603-fx-1001elf", Resistor, &registry));
        assert!(!handler.matches("BMA456", Resistor, &registry));
        assert!(!handler.matches("", Resistor, &registry));
    }

    #[test]
    fn test_viking_series_and_package() {
        // 测试场景：CR系列的系列名与封装码提取
        let handler = VikingHandler::new();
        assert_eq!(handler.extract_series("CR0603-FX-1001ELF"), "CR0603");
        assert_eq!(handler.extract_package_code("CR0603-FX-1001ELF"), "0603");
        assert_eq!(handler.extract_series("AR1206-JW-4992TLF"), "AR1206");
        // 未识别输入返回空串
        assert_eq!(handler.extract_series("GBLC05C"), "");
        assert_eq!(handler.extract_package_code(""), "");
    }

    #[test]
    fn test_viking_resistance_extraction() {
        let handler = VikingHandler::new();
        assert_eq!(handler.extract_resistance("CR0603-FX-1001ELF"), 1_000.0);
        assert_eq!(handler.extract_resistance("CR0805-JW-103ELF"), 10_000.0);
        // R记法小阻值
        assert_eq!(handler.extract_resistance("CR0603-FX-1R00ELF"), 1.0);
        assert_eq!(handler.extract_resistance("not-a-part"), -1.0);
    }

    #[test]
    fn test_viking_tolerance_extraction() {
        let handler = VikingHandler::new();
        assert_eq!(handler.extract_tolerance("CR0603-FX-1001ELF"), 1.0);
        assert_eq!(handler.extract_tolerance("CR0603-JX-1001ELF"), 5.0);
        assert_eq!(handler.extract_tolerance(""), -1.0);
    }

    #[test]
    fn test_viking_replacement_identical() {
        let handler = VikingHandler::new();
        assert!(handler.is_official_replacement("CR0603-FX-1001ELF", "CR0603-FX-1001ELF"));
    }

    #[test]
    fn test_viking_replacement_tolerance_directional() {
        // 测试场景：容差更紧（F±1%）可替代更松（J±5%），反向不成立
        let handler = VikingHandler::new();
        assert!(handler.is_official_replacement("CR0603-JX-1001ELF", "CR0603-FX-1001ELF"));
        assert!(!handler.is_official_replacement("CR0603-FX-1001ELF", "CR0603-JX-1001ELF"));
    }

    #[test]
    fn test_viking_replacement_rejects_mismatch() {
        let handler = VikingHandler::new();
        // 阻值不同
        assert!(!handler.is_official_replacement("CR0603-FX-1001ELF", "CR0603-FX-1002ELF"));
        // 尺寸不同
        assert!(!handler.is_official_replacement("CR0603-FX-1001ELF", "CR0805-FX-1001ELF"));
        // 空输入
        assert!(!handler.is_official_replacement("", "CR0603-FX-1001ELF"));
    }

    #[test]
    fn test_viking_replacement_ar_upgrade() {
        // 测试场景：AR抗硫化系列单向替代CR系列
        let handler = VikingHandler::new();
        assert!(handler.is_official_replacement("CR0603-FX-1001ELF", "AR0603-FX-1001ELF"));
        assert!(!handler.is_official_replacement("AR0603-FX-1001ELF", "CR0603-FX-1001ELF"));
    }
}
