//! ProTek Devices TVS保护器件处理器（GBLC低容瞬态抑制二极管、PSM712总线保护器）
//! GBLC MPN结构：GBLC + 工作电压码 + 方向性后缀（C为双向）
//! 例：GBLC05C → 5V双向低容TVS

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::super::ManufacturerHandler;
use crate::error::MpnResult;
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::utils::{Normalizer, value_codes::DECODE_FAILED};

// 注册到规则库的目录匹配模式
const CATALOG_PATTERNS: &[&str] = &[
    r"^GBLC(03|05|08|12|15|24)C?(-LF)?$",
    r"^PSM712(-LF)?$",
];

// GBLC结构解析正则（提取器专用）
static GBLC_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^GBLC(?P<volt>03|05|08|12|15|24)(?P<bidir>C)?(-LF)?$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

static PSM712_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^PSM712(-LF)?$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

const SUPPORTED_TYPES: &[ComponentType] = &[ComponentType::TvsDiodeProtek];

/// ProTek Devices 处理器
pub struct ProtekHandler;

impl ProtekHandler {
    pub fn new() -> Self {
        Self
    }

    /// 电压码 → 工作电压（V）
    fn voltage_from_code(code: &str) -> f64 {
        match code {
            "03" => 3.3,
            "05" => 5.0,
            "08" => 8.0,
            "12" => 12.0,
            "15" => 15.0,
            "24" => 24.0,
            _ => DECODE_FAILED,
        }
    }

    /// 提取工作电压（V），无法识别返回哨兵值-1.0
    pub fn extract_working_voltage(&self, mpn: &str) -> f64 {
        let normalized = Normalizer::normalize(mpn);
        if let Some(captures) = GBLC_REGEX.captures(&normalized) {
            return Self::voltage_from_code(captures.name("volt").map(|m| m.as_str()).unwrap_or(""));
        }
        if PSM712_REGEX.is_match(&normalized) {
            return 12.0;
        }
        DECODE_FAILED
    }

    /// 提取保护通道数，无法识别返回哨兵值-1
    pub fn extract_channel_count(&self, mpn: &str) -> i32 {
        let normalized = Normalizer::normalize(mpn);
        if GBLC_REGEX.is_match(&normalized) {
            return 1;
        }
        if PSM712_REGEX.is_match(&normalized) {
            return 2;
        }
        -1
    }
}

impl Default for ProtekHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for ProtekHandler {
    fn name(&self) -> &str {
        "ProTek Devices"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> MpnResult<()> {
        for pattern in CATALOG_PATTERNS {
            registry.register(ComponentType::TvsDiodeProtek, pattern)?;
        }
        Ok(())
    }

    fn supported_types(&self) -> &[ComponentType] {
        SUPPORTED_TYPES
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        let normalized = Normalizer::normalize(mpn);
        if GBLC_REGEX.is_match(&normalized) {
            return "SOD-323".to_string();
        }
        if PSM712_REGEX.is_match(&normalized) {
            return "SOT-23".to_string();
        }
        String::new()
    }

    fn extract_series(&self, mpn: &str) -> String {
        let normalized = Normalizer::normalize(mpn);
        if GBLC_REGEX.is_match(&normalized) {
            return "GBLC".to_string();
        }
        if PSM712_REGEX.is_match(&normalized) {
            return "PSM712".to_string();
        }
        String::new()
    }

    /// 同系列且电压档与方向性一致方可替代；-LF无铅后缀不影响判定
    fn is_official_replacement(&self, mpn_a: &str, mpn_b: &str) -> bool {
        let a = Normalizer::normalize(mpn_a);
        let b = Normalizer::normalize(mpn_b);
        if a.is_empty() || b.is_empty() {
            return false;
        }

        // GBLC系列：电压码与方向性后缀都必须一致
        if let (Some(cap_a), Some(cap_b)) = (GBLC_REGEX.captures(&a), GBLC_REGEX.captures(&b)) {
            let volt_equal = cap_a.name("volt").map(|m| m.as_str())
                == cap_b.name("volt").map(|m| m.as_str());
            let bidir_equal = cap_a.name("bidir").is_some() == cap_b.name("bidir").is_some();
            return volt_equal && bidir_equal;
        }

        // PSM712系列：同系列即同规格
        PSM712_REGEX.is_match(&a) && PSM712_REGEX.is_match(&b)
    }
}
