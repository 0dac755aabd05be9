//! 元器件类型分类体系
//! 固定的类型标签集合，带"厂商限定类型 → 通用类型"的父子关系
//! 进程启动时即确定，运行期不可变

use std::fmt;
use serde::{Deserialize, Serialize};

/// 元器件类型标签
/// 含通用类型与厂商限定类型两层；厂商限定类型通过 `generic_parent` 关联其通用父类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    // 通用类型
    Resistor,
    Capacitor,
    Inductor,
    FerriteBead,
    Diode,
    TvsDiode,
    Transistor,
    Mosfet,
    Optocoupler,
    Oscillator,
    Crystal,
    Accelerometer,
    Gyroscope,
    PressureSensor,
    HumiditySensor,

    // 厂商限定类型
    ResistorChipViking,
    TvsDiodeProtek,
    AccelerometerBosch,
    GyroscopeBosch,
    PressureSensorBosch,
    HumiditySensorBosch,
    OptocouplerEverlight,
    InductorMurata,
    FerriteBeadMurata,
}

impl ComponentType {
    /// 全部类型标签（固定集合）
    pub fn all() -> &'static [ComponentType] {
        use ComponentType::*;
        &[
            Resistor, Capacitor, Inductor, FerriteBead, Diode, TvsDiode,
            Transistor, Mosfet, Optocoupler, Oscillator, Crystal,
            Accelerometer, Gyroscope, PressureSensor, HumiditySensor,
            ResistorChipViking, TvsDiodeProtek, AccelerometerBosch,
            GyroscopeBosch, PressureSensorBosch, HumiditySensorBosch,
            OptocouplerEverlight, InductorMurata, FerriteBeadMurata,
        ]
    }

    /// 厂商限定类型的通用父类型；通用类型无父类型
    pub fn generic_parent(&self) -> Option<ComponentType> {
        use ComponentType::*;
        match self {
            ResistorChipViking => Some(Resistor),
            TvsDiodeProtek => Some(TvsDiode),
            AccelerometerBosch => Some(Accelerometer),
            GyroscopeBosch => Some(Gyroscope),
            PressureSensorBosch => Some(PressureSensor),
            HumiditySensorBosch => Some(HumiditySensor),
            OptocouplerEverlight => Some(Optocoupler),
            InductorMurata => Some(Inductor),
            FerriteBeadMurata => Some(FerriteBead),
            _ => None,
        }
    }

    /// 判断请求类型是否被实际匹配类型满足
    ///
    /// 满足条件：二者相等，或匹配类型是请求类型的厂商限定子类型。
    /// 反向不成立：匹配到通用类型不代表满足厂商限定类型。
    pub fn is_satisfied_by(requested: ComponentType, matched: ComponentType) -> bool {
        requested == matched || matched.generic_parent() == Some(requested)
    }

    /// 类型标签的稳定标识符（与serde序列化形式一致）
    pub fn as_str(&self) -> &'static str {
        use ComponentType::*;
        match self {
            Resistor => "resistor",
            Capacitor => "capacitor",
            Inductor => "inductor",
            FerriteBead => "ferrite_bead",
            Diode => "diode",
            TvsDiode => "tvs_diode",
            Transistor => "transistor",
            Mosfet => "mosfet",
            Optocoupler => "optocoupler",
            Oscillator => "oscillator",
            Crystal => "crystal",
            Accelerometer => "accelerometer",
            Gyroscope => "gyroscope",
            PressureSensor => "pressure_sensor",
            HumiditySensor => "humidity_sensor",
            ResistorChipViking => "resistor_chip_viking",
            TvsDiodeProtek => "tvs_diode_protek",
            AccelerometerBosch => "accelerometer_bosch",
            GyroscopeBosch => "gyroscope_bosch",
            PressureSensorBosch => "pressure_sensor_bosch",
            HumiditySensorBosch => "humidity_sensor_bosch",
            OptocouplerEverlight => "optocoupler_everlight",
            InductorMurata => "inductor_murata",
            FerriteBeadMurata => "ferrite_bead_murata",
        }
    }
}

// ======== 为 ComponentType 实现 Display trait（用于日志与结果输出） ========
impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
