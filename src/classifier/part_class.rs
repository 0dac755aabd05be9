//! 分类结果数据模型
//! 仅存储分类结果，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::taxonomy::ComponentType;

/// MPN分类结果（完整版本）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartClass {
    // 规范化后的MPN
    pub mpn: String,
    // 归属厂商（处理器名称）
    pub manufacturer: String,
    // 满足的类型集合（含厂商限定类型及其通用父类型）
    pub component_types: Vec<ComponentType>,
    // 产品系列前缀（未识别为空串）
    pub series: String,
    // 封装代码（未识别为空串）
    pub package_code: String,
}

// ======== 为 PartClass 实现 Display trait（用于 CLI / Report 输出） ========
impl fmt::Display for PartClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.mpn, self.manufacturer)?;
        if !self.series.is_empty() {
            write!(f, " {}", self.series)?;
        }
        if !self.package_code.is_empty() {
            write!(f, " ({})", self.package_code)?;
        }
        Ok(())
    }
}

/// MPN分类结果（精简版本）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartClassLite {
    pub mpn: String,
    pub manufacturer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub series: String,
}

// ======== 类型转换 ========
impl From<PartClass> for PartClassLite {
    fn from(full: PartClass) -> Self {
        Self {
            mpn: full.mpn,
            manufacturer: full.manufacturer,
            series: full.series,
        }
    }
}

// ======== 为 PartClassLite 实现 Display trait（用于 CLI / Report 输出） ========
impl fmt::Display for PartClassLite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.mpn, self.manufacturer)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ComponentType::*;

    fn sample() -> PartClass {
        PartClass {
            mpn: "CR0603-FX-1001ELF".to_string(),
            manufacturer: "Viking Tech".to_string(),
            component_types: vec![ResistorChipViking, Resistor],
            series: "CR0603".to_string(),
            package_code: "0603".to_string(),
        }
    }

    #[test]
    fn test_part_class_display() {
        assert_eq!(
            sample().to_string(),
            "CR0603-FX-1001ELF [Viking Tech] CR0603 (0603)"
        );
    }

    #[test]
    fn test_part_class_lite_conversion() {
        let lite = PartClassLite::from(sample());
        assert_eq!(lite.mpn, "CR0603-FX-1001ELF");
        assert_eq!(lite.series, "CR0603");
        assert_eq!(lite.to_string(), "CR0603-FX-1001ELF [Viking Tech]");
    }

    #[test]
    fn test_part_class_serialize_roundtrip() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: PartClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back.component_types, vec![ResistorChipViking, Resistor]);
    }
}
