//! 相似度计算模块：按元器件类别插拔的兼容性评分器
//! 每个计算器声明自己适用的类型，输出[0,1]区间的对称评分
//! 领域知识（等效料族、极性、电压档）优先，通用词法相似度兜底
pub mod lexical;
pub mod transistor;
pub mod tvs;

use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

// 导出核心接口
pub use self::lexical::LexicalSimilarityCalculator;
pub use self::transistor::TransistorSimilarityCalculator;
pub use self::tvs::TvsSimilarityCalculator;

/// 相似度计算器统一契约
///
/// 实现约定：
/// - 对称：calculate_similarity(a, b) == calculate_similarity(b, a)
/// - 空输入或不适用类型返回0.0
/// - 相同MPN的评分不低于高分阈值（≥0.9）
/// - 已知不兼容对（极性相反等）评分不高于低分阈值（≤0.3）
/// - 输出始终在[0.0, 1.0]区间内
pub trait SimilarityCalculator: Send + Sync {
    /// 计算器名称（调试输出用）
    fn name(&self) -> &str;

    /// 判断本计算器是否适用于指定类型
    fn is_applicable(&self, component_type: ComponentType) -> bool;

    /// 计算两个MPN的兼容性评分
    fn calculate_similarity(&self, mpn_a: &str, mpn_b: &str, registry: &PatternRegistry) -> f64;
}

/// 评分收口到[0.0, 1.0]区间；NaN按0.0处理
#[inline]
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

// 已知的非功能性包装后缀（编带/卷装/无铅标记），比较核心型号前剥离
const NON_FUNCTIONAL_SUFFIXES: &[&str] = &[
    "-LF", "-TR", "/TR", "-RL", "/RL", "-TP", "-T1", "-T2", "-T3", "-E3",
    "(TA)", "(TB)", "-V", "-G", "-ND",
];

/// 剥离已知的非功能性包装后缀（可叠加，迭代剥离到不再变化）
pub(crate) fn strip_packaging_suffixes(normalized: &str) -> String {
    let mut core = normalized.to_string();
    loop {
        let before = core.len();
        for suffix in NON_FUNCTIONAL_SUFFIXES {
            if let Some(stripped) = core.strip_suffix(suffix) {
                core = stripped.to_string();
            }
        }
        if core.len() == before {
            return core;
        }
    }
}

/// 按分隔符拆分MPN为token序列
pub(crate) fn tokenize(s: &str) -> Vec<&str> {
    s.split(['-', '.', '/'])
        .filter(|t| !t.is_empty())
        .collect()
}
