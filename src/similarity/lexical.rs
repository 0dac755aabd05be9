//! 通用词法相似度计算器
//! 无领域知识时的兜底评分：jaro-winkler编辑相似度 + token重合度加权
//! 适用于全部元器件类型

use super::{SimilarityCalculator, clamp_score, strip_packaging_suffixes, tokenize};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::utils::Normalizer;

/// 通用词法相似度计算器
pub struct LexicalSimilarityCalculator {
    // 编辑相似度分量权重（剩余为token重合度分量）
    distance_weight: f64,
}

impl LexicalSimilarityCalculator {
    pub fn new(distance_weight: f64) -> Self {
        Self {
            distance_weight: distance_weight.clamp(0.0, 1.0),
        }
    }

    /// token集合的Jaccard重合度
    fn token_overlap(a: &str, b: &str) -> f64 {
        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);
        if tokens_a.is_empty() || tokens_b.is_empty() {
            return 0.0;
        }
        let intersection = tokens_a.iter().filter(|t| tokens_b.contains(t)).count();
        let union = tokens_a.len() + tokens_b.len() - intersection;
        intersection as f64 / union as f64
    }
}

impl Default for LexicalSimilarityCalculator {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl SimilarityCalculator for LexicalSimilarityCalculator {
    fn name(&self) -> &str {
        "lexical"
    }

    /// 兜底计算器，适用于全部类型
    fn is_applicable(&self, _component_type: ComponentType) -> bool {
        true
    }

    fn calculate_similarity(&self, mpn_a: &str, mpn_b: &str, _registry: &PatternRegistry) -> f64 {
        let a = strip_packaging_suffixes(&Normalizer::normalize(mpn_a));
        let b = strip_packaging_suffixes(&Normalizer::normalize(mpn_b));
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        // 剥离包装后缀后核心型号一致，视为同一料
        if a == b {
            return 1.0;
        }

        let edit = strsim::jaro_winkler(&a, &b);
        let overlap = Self::token_overlap(&a, &b);
        clamp_score(self.distance_weight * edit + (1.0 - self.distance_weight) * overlap)
    }
}
