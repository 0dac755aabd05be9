//! Bosch Sensortec MEMS传感器处理器（BMA/BMG/BMP/BME系列）
//! MPN即系列名：BMA456 → 加速度计456型
//! Bosch MPN不编码封装信息，封装提取返回空串

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::super::ManufacturerHandler;
use crate::error::MpnResult;
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::utils::Normalizer;

// 各产品族的目录匹配模式（类型, 模式）
const CATALOG_PATTERNS: &[(ComponentType, &str)] = &[
    (ComponentType::AccelerometerBosch, r"^BMA[0-9]{3}$"),
    (ComponentType::GyroscopeBosch, r"^BMG[0-9]{3}$"),
    (ComponentType::PressureSensorBosch, r"^BMP[0-9]{3}$"),
    (ComponentType::HumiditySensorBosch, r"^BME[0-9]{3}$"),
];

// 系列解析正则（提取器专用）
static SERIES_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(?P<series>BM[AGPE][0-9]{3})$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

const SUPPORTED_TYPES: &[ComponentType] = &[
    ComponentType::AccelerometerBosch,
    ComponentType::GyroscopeBosch,
    ComponentType::PressureSensorBosch,
    ComponentType::HumiditySensorBosch,
];

/// Bosch Sensortec 处理器
pub struct BoschHandler;

impl BoschHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BoschHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for BoschHandler {
    fn name(&self) -> &str {
        "Bosch Sensortec"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> MpnResult<()> {
        for (component_type, pattern) in CATALOG_PATTERNS {
            registry.register(*component_type, pattern)?;
        }
        Ok(())
    }

    fn supported_types(&self) -> &[ComponentType] {
        SUPPORTED_TYPES
    }

    fn extract_series(&self, mpn: &str) -> String {
        let normalized = Normalizer::normalize(mpn);
        SERIES_REGEX
            .captures(&normalized)
            .and_then(|c| c.name("series"))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// 传感器替代需要整体方案评审，仅目录内相同型号判定为可替代
    fn is_official_replacement(&self, mpn_a: &str, mpn_b: &str) -> bool {
        let series_a = self.extract_series(mpn_a);
        let series_b = self.extract_series(mpn_b);
        !series_a.is_empty() && series_a == series_b
    }
}
