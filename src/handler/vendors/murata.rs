//! Murata 电感与铁氧体磁珠处理器（LQ*系列电感、BLM系列磁珠）
//! LQ MPN结构：系列+尺寸+特性码 + 感值码 + 容差 + 包装码
//! 例：LQH32CN2R2M33L → LQH32CN系列，2.2µH，±20%
//! BLM MPN结构：BLM+尺寸+特性码 + 阻抗码 + 电流档 + 包装码
//! 例：BLM18AG601SN1D → BLM18AG系列，600Ω@100MHz

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::super::ManufacturerHandler;
use crate::error::MpnResult;
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::utils::{Normalizer, ValueCodeDecoder, value_codes::DECODE_FAILED, within_maximum};

// 注册到规则库的目录匹配模式（类型, 模式）
const CATALOG_PATTERNS: &[(ComponentType, &str)] = &[
    (ComponentType::InductorMurata, r"^LQ[A-Z][0-9]{2}[A-Z]{2}[0-9A-Z]{4,8}$"),
    (ComponentType::FerriteBeadMurata, r"^BLM[0-9]{2}[A-Z]{2}[0-9]{3}[A-Z]{2}[0-9][A-Z#]?$"),
];

// LQ电感结构解析正则（提取器专用）
static LQ_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"^(?P<series>LQ[A-Z](?P<size>[0-9]{2})[A-Z]{2})(?P<value>[0-9][0-9RN][0-9RN]?)(?P<tol>[JKM])(?P<pkg>[0-9A-Z]{2})(?P<opt>[A-Z#]?)$",
    )
    .case_insensitive(true)
    .build()
    .unwrap()
});

// BLM磁珠结构解析正则（提取器专用）
static BLM_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"^(?P<series>BLM(?P<size>[0-9]{2})[A-Z]{2})(?P<imp>[0-9]{3})(?P<cur>[A-Z]{2})(?P<pkg>[0-9])(?P<opt>[A-Z#]?)$",
    )
    .case_insensitive(true)
    .build()
    .unwrap()
});

const SUPPORTED_TYPES: &[ComponentType] = &[
    ComponentType::InductorMurata,
    ComponentType::FerriteBeadMurata,
];

/// Murata 处理器
pub struct MurataHandler;

impl MurataHandler {
    pub fn new() -> Self {
        Self
    }

    /// 尺寸码 → EIA英制封装码
    fn package_from_size(size: &str) -> &'static str {
        match size {
            "02" => "01005",
            "03" => "0201",
            "15" => "0402",
            "18" => "0603",
            "21" => "0805",
            "31" => "1206",
            "32" => "1210",
            "41" | "43" => "1812",
            _ => "",
        }
    }

    /// 容差码 → 容差百分比
    fn tolerance_percent(code: &str) -> f64 {
        match code {
            "J" => 5.0,
            "K" => 10.0,
            "M" => 20.0,
            _ => DECODE_FAILED,
        }
    }

    /// 感值码解码（单位µH）
    /// R记法以µH为单位（2R2→2.2µH），N记法以nH为单位（10N→0.01µH），EIA数字码以µH为单位
    fn decode_inductance(value: &str) -> f64 {
        if value.contains('N') {
            let nano = ValueCodeDecoder::decode_r_notation(&value.replace('N', "R"));
            if nano < 0.0 {
                return DECODE_FAILED;
            }
            return nano / 1000.0;
        }
        ValueCodeDecoder::decode(value)
    }

    /// 提取感值（单位µH），无法识别返回哨兵值-1.0
    pub fn extract_inductance(&self, mpn: &str) -> f64 {
        let normalized = Normalizer::normalize(mpn);
        match LQ_REGEX.captures(&normalized) {
            Some(captures) => Self::decode_inductance(
                captures.name("value").map(|m| m.as_str()).unwrap_or(""),
            ),
            None => DECODE_FAILED,
        }
    }

    /// 提取磁珠阻抗（单位Ω，@100MHz），无法识别返回哨兵值-1.0
    pub fn extract_impedance(&self, mpn: &str) -> f64 {
        let normalized = Normalizer::normalize(mpn);
        match BLM_REGEX.captures(&normalized) {
            Some(captures) => ValueCodeDecoder::decode_eia(
                captures.name("imp").map(|m| m.as_str()).unwrap_or(""),
            ),
            None => DECODE_FAILED,
        }
    }
}

impl Default for MurataHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for MurataHandler {
    fn name(&self) -> &str {
        "Murata"
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

    fn extract_package_code(&self, mpn: &str) -> String {
        let normalized = Normalizer::normalize(mpn);
        let size = LQ_REGEX
            .captures(&normalized)
            .or_else(|| BLM_REGEX.captures(&normalized))
            .and_then(|c| c.name("size").map(|m| m.as_str().to_string()));
        size.map(|s| Self::package_from_size(&s).to_string())
            .unwrap_or_default()
    }

    fn extract_series(&self, mpn: &str) -> String {
        let normalized = Normalizer::normalize(mpn);
        LQ_REGEX
            .captures(&normalized)
            .or_else(|| BLM_REGEX.captures(&normalized))
            .and_then(|c| c.name("series").map(|m| m.as_str().to_string()))
            .unwrap_or_default()
    }

    /// 电感：同系列同感值，替代料容差不得更松（单向）；包装码不参与判定
    /// 磁珠：同系列且阻抗与电流档一致
    fn is_official_replacement(&self, mpn_a: &str, mpn_b: &str) -> bool {
        let a = Normalizer::normalize(mpn_a);
        let b = Normalizer::normalize(mpn_b);
        if a.is_empty() || b.is_empty() {
            return false;
        }

        if let (Some(cap_a), Some(cap_b)) = (LQ_REGEX.captures(&a), LQ_REGEX.captures(&b)) {
            let series_equal = cap_a.name("series").map(|m| m.as_str())
                == cap_b.name("series").map(|m| m.as_str());
            if !series_equal {
                return false;
            }
            let value_a = Self::decode_inductance(cap_a.name("value").map(|m| m.as_str()).unwrap_or(""));
            let value_b = Self::decode_inductance(cap_b.name("value").map(|m| m.as_str()).unwrap_or(""));
            if value_a < 0.0 || value_a != value_b {
                return false;
            }
            let tol_a = Self::tolerance_percent(cap_a.name("tol").map(|m| m.as_str()).unwrap_or(""));
            let tol_b = Self::tolerance_percent(cap_b.name("tol").map(|m| m.as_str()).unwrap_or(""));
            return tol_a >= 0.0 && tol_b >= 0.0 && within_maximum(tol_a, tol_b);
        }

        if let (Some(cap_a), Some(cap_b)) = (BLM_REGEX.captures(&a), BLM_REGEX.captures(&b)) {
            let series_equal = cap_a.name("series").map(|m| m.as_str())
                == cap_b.name("series").map(|m| m.as_str());
            let imp_equal = cap_a.name("imp").map(|m| m.as_str())
                == cap_b.name("imp").map(|m| m.as_str());
            let cur_equal = cap_a.name("cur").map(|m| m.as_str())
                == cap_b.name("cur").map(|m| m.as_str());
            return series_equal && imp_equal && cur_equal;
        }

        false
    }
}
