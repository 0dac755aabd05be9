//! MPN规范化工具
//! 所有匹配、提取、比较操作的统一入口：先规范化，再计算

/// MPN规范化工具类
pub struct Normalizer;

impl Normalizer {
    /// 规范化MPN：去除首尾空白并转为ASCII大写
    ///
    /// 空字符串（或纯空白）规范化后为空字符串，调用方以空串作为"无输入"哨兵值。
    /// 仅转换ASCII字符，不做locale相关的大小写折叠（MPN字符集为ASCII字母数字与`-`/`.`/`/`）。
    /// 幂等：`normalize(normalize(x)) == normalize(x)`
    #[inline]
    pub fn normalize(mpn: &str) -> String {
        mpn.trim().chars().map(|c| c.to_ascii_uppercase()).collect()
    }

    /// 判断规范化后是否为空（无效输入）
    #[inline]
    pub fn is_blank(mpn: &str) -> bool {
        mpn.trim().is_empty()
    }
}
