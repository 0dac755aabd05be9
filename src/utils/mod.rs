//! 工具模块：MPN规范化、数值编码解码、参数范围比较
pub mod normalizer;
pub mod value_codes;
pub mod rating;

// 导出核心接口
pub use self::normalizer::Normalizer;
pub use self::value_codes::ValueCodeDecoder;
pub use self::rating::{RatingRange, meets_minimum, within_maximum};
