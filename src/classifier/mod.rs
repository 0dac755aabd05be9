//! 分类调度模块：分类器核心、结果模型与全局单例
pub mod classifier;
pub mod global;
pub mod part_class;

// 导出核心接口
pub use self::classifier::{
    MpnClassifier,
    classify_mpn,
    find_mpn_manufacturer,
    extract_mpn_package_code,
    extract_mpn_series,
    is_mpn_official_replacement,
    calculate_mpn_similarity,
    classify_mpn_full,
    normalize_mpn,
};
pub use self::global::{init_mpn_classifier, init_mpn_classifier_with_config};
pub use self::part_class::{PartClass, PartClassLite};
