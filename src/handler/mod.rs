//! 厂商处理器模块：统一契约 + 数据驱动的通用处理器 + 内置示例厂商实现
//! 每个厂商一套规则集，通过同一trait多态接入调度层
pub mod table;
pub mod vendors;

use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;
use crate::error::MpnResult;
use crate::utils::Normalizer;

// 导出核心接口
pub use self::table::TableHandler;

/// 厂商处理器统一契约
///
/// 实现约定：
/// - 除注册阶段写入注册表外全程无状态，所有查询都是输入串的纯函数
/// - 查询接口对任意输入全定义：空串/不识别的MPN返回哨兵值（false/""/-1），绝不panic
/// - 厂商专属提取器（阻值、电压、通道数、感值、CTR等级等）由各实现自行补充
pub trait ManufacturerHandler: Send + Sync {
    /// 厂商名称（处理器标识）
    fn name(&self) -> &str;

    /// 将本厂商规则集注册到给定注册表
    /// 对同一注册表重复调用必须安全（注册表按(类型, 模式)幂等去重）
    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> MpnResult<()>;

    /// 本处理器支持的类型集合（固定、非空、无重复）
    fn supported_types(&self) -> &[ComponentType];

    /// 厂商标记类型集合
    /// 预留扩展点：当前所有处理器均返回空集，不承载任何语义
    fn manufacturer_types(&self) -> &[ComponentType] {
        &[]
    }

    /// 判断MPN是否属于本厂商目录且满足请求类型
    ///
    /// 默认实现：遍历支持类型中满足请求类型的项，询问注册表。
    /// 空输入返回false；匹配忽略大小写（规则均以忽略大小写方式编译）。
    fn matches(
        &self,
        mpn: &str,
        requested: ComponentType,
        registry: &PatternRegistry,
    ) -> bool {
        let normalized = Normalizer::normalize(mpn);
        if normalized.is_empty() {
            return false;
        }
        self.supported_types()
            .iter()
            .filter(|&&t| ComponentType::is_satisfied_by(requested, t))
            .any(|&t| registry.matches(&normalized, t))
    }

    /// 提取MPN中的封装/尺寸代码（如"0603"、"SOT-23"）
    /// 无法识别返回空串
    fn extract_package_code(&self, _mpn: &str) -> String {
        String::new()
    }

    /// 提取产品系列前缀（替代料比较的基本单位，如"BMA456"、"CR0603"）
    /// 无法识别返回空串
    fn extract_series(&self, _mpn: &str) -> String {
        String::new()
    }

    /// 厂商官方替代判定：mpn_b是否可替代mpn_a
    ///
    /// 最低行为要求：任一输入为空返回false；同系列同规格的相同MPN返回true；
    /// 跨系列或电气等级不兼容（极性/电压档/通道数不同）返回false。
    /// 不保证对称：部分厂商规则编码单向升级路径（高规格替代低规格），
    /// 需要对称判断时调用方应双向各查一次。
    fn is_official_replacement(&self, mpn_a: &str, mpn_b: &str) -> bool;
}
