//! rsmpnclassify - 电子元器件MPN分类与兼容性评分引擎

// 导出全局错误类型
pub use self::error::{MpnClassifyError, MpnResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出类型分类体系
pub use self::taxonomy::ComponentType;

// 导出规则注册表核心接口
pub use self::registry::{PatternRegistry, PatternRule};

// 导出规则表模块核心接口
pub use self::rule::{
    MpnRuleDef, PackageRuleDef, SeriesRuleDef, VendorRuleTable, RuleTableLoader
};

// 导出厂商处理器核心接口
pub use self::handler::{ManufacturerHandler, TableHandler};
pub use self::handler::vendors::{
    VikingHandler, ProtekHandler, BoschHandler, EverlightHandler, MurataHandler
};

// 导出相似度计算核心接口
pub use self::similarity::{
    SimilarityCalculator, LexicalSimilarityCalculator,
    TransistorSimilarityCalculator, TvsSimilarityCalculator, clamp_score
};

// 导出工具模块核心接口
pub use self::utils::{
    Normalizer, ValueCodeDecoder, RatingRange, meets_minimum, within_maximum
};

// 导出分类器核心接口（含兼容简化调用的全局接口）
pub use self::classifier::{
    MpnClassifier,
    PartClass,
    PartClassLite,
    init_mpn_classifier,
    init_mpn_classifier_with_config,
    classify_mpn,
    find_mpn_manufacturer,
    extract_mpn_package_code,
    extract_mpn_series,
    is_mpn_official_replacement,
    calculate_mpn_similarity,
    classify_mpn_full,
    normalize_mpn,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod taxonomy;
pub mod registry;
pub mod rule;
pub mod handler;
pub mod similarity;
pub mod utils;
pub mod classifier;
