//! TVS保护器件相似度计算器
//! 电压档是功能性参数：同档高分，跨档低分；系列与后缀差异按层级折算

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SimilarityCalculator, clamp_score, strip_packaging_suffixes};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::utils::Normalizer;

// 通用TVS命名结构：系列字母 + 电压码 + 方向性/规格后缀
static TVS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<series>[A-Z]{2,6})(?P<volt>[0-9]{1,2})(?P<suffix>[A-Z]{0,2})$").unwrap()
});

/// TVS相似度计算器
pub struct TvsSimilarityCalculator;

impl TvsSimilarityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 解析核心为(系列, 电压, 后缀)
    fn parse(core: &str) -> Option<(String, f64, String)> {
        let captures = TVS_REGEX.captures(core)?;
        let volt: f64 = captures.name("volt")?.as_str().parse().ok()?;
        Some((
            captures.name("series")?.as_str().to_string(),
            volt,
            captures.name("suffix").map(|m| m.as_str()).unwrap_or("").to_string(),
        ))
    }

    /// 类型门禁：命中注册表中的TVS规则，或符合通用TVS命名结构
    fn passes_gate(mpn: &str, core: &str, registry: &PatternRegistry) -> bool {
        registry.matches_satisfying(mpn, ComponentType::TvsDiode) || Self::parse(core).is_some()
    }
}

impl Default for TvsSimilarityCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityCalculator for TvsSimilarityCalculator {
    fn name(&self) -> &str {
        "tvs"
    }

    fn is_applicable(&self, component_type: ComponentType) -> bool {
        matches!(
            component_type,
            ComponentType::TvsDiode | ComponentType::TvsDiodeProtek
        )
    }

    fn calculate_similarity(&self, mpn_a: &str, mpn_b: &str, registry: &PatternRegistry) -> f64 {
        let core_a = strip_packaging_suffixes(&Normalizer::normalize(mpn_a));
        let core_b = strip_packaging_suffixes(&Normalizer::normalize(mpn_b));
        if core_a.is_empty() || core_b.is_empty() {
            return 0.0;
        }
        if !Self::passes_gate(mpn_a, &core_a, registry) || !Self::passes_gate(mpn_b, &core_b, registry) {
            return 0.0;
        }

        // 1. 核心一致（含无铅/编带后缀差异）
        if core_a == core_b {
            return 1.0;
        }

        let parsed_a = Self::parse(&core_a);
        let parsed_b = Self::parse(&core_b);
        if let (Some((series_a, volt_a, suffix_a)), Some((series_b, volt_b, suffix_b))) =
            (parsed_a, parsed_b)
        {
            if series_a == series_b {
                if volt_a == volt_b {
                    // 同系列同电压：后缀一致为同一料，仅后缀不同仍保持高分
                    return if suffix_a == suffix_b { 0.95 } else { 0.9 };
                }
                // 同系列跨电压档：功能不兼容，按档位差距折算到低分段
                let ratio = volt_a.min(volt_b) / volt_a.max(volt_b);
                return clamp_score(0.2 + 0.2 * ratio);
            }
            if volt_a == volt_b {
                // 跨系列同电压档：规格兼容的候选替代，中高分
                return 0.75;
            }
        }

        // 解析失败或跨系列跨电压：词法相似度折算到低中分段
        clamp_score(0.6 * strsim::jaro_winkler(&core_a, &core_b))
    }
}
