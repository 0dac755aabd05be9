//! 全局配置管理,存储所有可配置项

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 高相似度阈值（达到视为可互换）
    pub high_score_threshold: f64,
    // 低相似度阈值（低于视为不兼容）
    pub low_score_threshold: f64,
    // 通用词法相似度中编辑距离分量的权重（剩余为token重合度分量）
    pub lexical_distance_weight: f64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            high_score_threshold: 0.9,
            low_score_threshold: 0.3,
            lexical_distance_weight: 0.6,
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn high_score_threshold(mut self, threshold: f64) -> Self {
        self.config.high_score_threshold = threshold;
        self
    }

    pub fn low_score_threshold(mut self, threshold: f64) -> Self {
        self.config.low_score_threshold = threshold;
        self
    }

    pub fn lexical_distance_weight(mut self, weight: f64) -> Self {
        self.config.lexical_distance_weight = weight;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
