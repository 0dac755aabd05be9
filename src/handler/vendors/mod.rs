//! 内置示例厂商处理器
//! 每个厂商一个子模块：规则集为纯数据（模式串 + 小型判定表），判定逻辑保持轻量
//! 真实系统中的数十家厂商目录以规则表形式外部接入，此处实现为引擎的参考目录
pub mod viking;
pub mod protek;
pub mod bosch;
pub mod everlight;
pub mod murata;

pub use self::viking::VikingHandler;
pub use self::protek::ProtekHandler;
pub use self::bosch::BoschHandler;
pub use self::everlight::EverlightHandler;
pub use self::murata::MurataHandler;
