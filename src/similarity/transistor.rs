//! 分立三极管相似度计算器
//! 领域知识分三层：历史等效料族（跨厂商互换） > 极性（NPN/PNP不可互换） > 词法兜底
//! 等效料族与极性表为人工维护的判定数据，与引擎逻辑解耦

use super::{SimilarityCalculator, clamp_score, strip_packaging_suffixes};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::utils::Normalizer;

/// 三极管极性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Npn,
    Pnp,
}

// 历史等效料族：同族内跨厂商可互换（2N=JEDEC通孔，PN/KSP=Fairchild/onsemi，MMBT=SMD）
const EQUIVALENCE_GROUPS: &[&[&str]] = &[
    &["2N2222", "PN2222", "KSP2222", "MMBT2222", "P2N2222"],
    &["2N2907", "PN2907", "KSP2907", "MMBT2907"],
    &["2N3904", "PN3904", "KSP3904", "MMBT3904"],
    &["2N3906", "PN3906", "KSP3906", "MMBT3906"],
    &["2N4401", "KSP4401", "MMBT4401"],
    &["2N4403", "KSP4403", "MMBT4403"],
    &["BC547", "BC847"],
    &["BC557", "BC857"],
];

// 与EQUIVALENCE_GROUPS逐条对应的极性
const GROUP_POLARITY: &[Polarity] = &[
    Polarity::Npn,
    Polarity::Pnp,
    Polarity::Npn,
    Polarity::Pnp,
    Polarity::Npn,
    Polarity::Pnp,
    Polarity::Npn,
    Polarity::Pnp,
];

// 未入族但极性已知的常见型号
const EXTRA_POLARITY: &[(&str, Polarity)] = &[
    ("2N5551", Polarity::Npn),
    ("2N5401", Polarity::Pnp),
    ("MMBT5551", Polarity::Npn),
    ("MMBT5401", Polarity::Pnp),
    ("BC548", Polarity::Npn),
    ("BC558", Polarity::Pnp),
    ("TIP31", Polarity::Npn),
    ("TIP32", Polarity::Pnp),
];

/// 分立三极管相似度计算器
pub struct TransistorSimilarityCalculator;

impl TransistorSimilarityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 提取比较核心：规范化、剥离包装后缀、剥离JEDEC修订字母
    fn core_of(mpn: &str) -> String {
        let core = strip_packaging_suffixes(&Normalizer::normalize(mpn));
        // 尾部修订字母（2N2222A → 2N2222）不影响等效判定
        if core.len() > 3 && core.ends_with('A') {
            let bytes = core.as_bytes();
            if bytes[core.len() - 2].is_ascii_digit() {
                return core[..core.len() - 1].to_string();
            }
        }
        core
    }

    /// 查找核心所属的等效料族（先精确查找，再尝试剥离尾部分档字母）
    fn group_index(core: &str) -> Option<usize> {
        let exact = EQUIVALENCE_GROUPS
            .iter()
            .position(|group| group.contains(&core));
        if exact.is_some() {
            return exact;
        }
        // BC547B之类的增益分档字母不改变所属族
        let bytes = core.as_bytes();
        if core.len() > 3
            && bytes[core.len() - 1].is_ascii_uppercase()
            && bytes[core.len() - 2].is_ascii_digit()
        {
            let trimmed = &core[..core.len() - 1];
            return EQUIVALENCE_GROUPS
                .iter()
                .position(|group| group.contains(&trimmed));
        }
        None
    }

    /// 核心的极性（等效料族极性优先，再查独立极性表）
    fn polarity_of(core: &str) -> Option<Polarity> {
        if let Some(index) = Self::group_index(core) {
            return Some(GROUP_POLARITY[index]);
        }
        // 分档字母不改变极性，剥离后再查一次
        let bytes = core.as_bytes();
        let trimmed = if core.len() > 3
            && bytes[core.len() - 1].is_ascii_uppercase()
            && bytes[core.len() - 2].is_ascii_digit()
        {
            Some(&core[..core.len() - 1])
        } else {
            None
        };
        for (known, polarity) in EXTRA_POLARITY {
            if *known == core || Some(*known) == trimmed {
                return Some(*polarity);
            }
        }
        None
    }

    /// 类型门禁：已知核心，或命中注册表中的三极管规则
    fn passes_gate(mpn: &str, core: &str, registry: &PatternRegistry) -> bool {
        Self::group_index(core).is_some()
            || Self::polarity_of(core).is_some()
            || registry.matches_satisfying(mpn, ComponentType::Transistor)
    }
}

impl Default for TransistorSimilarityCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityCalculator for TransistorSimilarityCalculator {
    fn name(&self) -> &str {
        "transistor"
    }

    fn is_applicable(&self, component_type: ComponentType) -> bool {
        component_type == ComponentType::Transistor
    }

    fn calculate_similarity(&self, mpn_a: &str, mpn_b: &str, registry: &PatternRegistry) -> f64 {
        let core_a = Self::core_of(mpn_a);
        let core_b = Self::core_of(mpn_b);
        if core_a.is_empty() || core_b.is_empty() {
            return 0.0;
        }
        // 类型门禁：任一侧不是可识别的三极管即不评分
        if !Self::passes_gate(mpn_a, &core_a, registry) || !Self::passes_gate(mpn_b, &core_b, registry) {
            return 0.0;
        }

        // 1. 核心一致（含修订字母/包装后缀差异）
        if core_a == core_b {
            return 1.0;
        }

        // 2. 同一等效料族：跨厂商历史互换料
        let group_a = Self::group_index(&core_a);
        let group_b = Self::group_index(&core_b);
        if let (Some(a), Some(b)) = (group_a, group_b) {
            if a == b {
                return 0.95;
            }
        }

        // 3. 极性相反：功能不可互换
        if let (Some(pol_a), Some(pol_b)) = (Self::polarity_of(&core_a), Self::polarity_of(&core_b)) {
            if pol_a != pol_b {
                return 0.2;
            }
        }

        // 4. 同极性不同族：词法相似度折算到中分段
        clamp_score(0.45 + 0.3 * strsim::jaro_winkler(&core_a, &core_b))
    }
}
