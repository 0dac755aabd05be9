//! 数值编码解码工具模块
//! 负责解析MPN中常见的阻值/感值位置编码
//! 支持EIA数字码（末位为10的幂次）与R/K/M字母小数点记法，失败返回哨兵值-1.0

/// 数值编码解码工具类
/// 提供静态方法 `decode_eia` / `decode_r_notation` / `decode` 用于数值解码
pub struct ValueCodeDecoder;

/// 解码失败哨兵值
pub const DECODE_FAILED: f64 = -1.0;

impl ValueCodeDecoder {
    /// 解码EIA数字码（3位或4位）
    ///
    /// 前n-1位为有效数字，末位为10的幂次乘数：
    /// - `"103"` → 10 × 10^3 = 10000
    /// - `"1001"` → 100 × 10^1 = 1000
    /// - `"0000"` → 0（跳线电阻）
    ///
    /// 非3/4位纯数字输入返回 `DECODE_FAILED`
    pub fn decode_eia(code: &str) -> f64 {
        let code = code.trim();
        // 1. 前置过滤：仅接受3或4位纯数字
        if !(code.len() == 3 || code.len() == 4) || !code.bytes().all(|b| b.is_ascii_digit()) {
            return DECODE_FAILED;
        }

        // 2. 全零为跳线，数值为0
        if code.bytes().all(|b| b == b'0') {
            return 0.0;
        }

        // 3. 拆分有效数字与乘数位
        let (digits, exp) = code.split_at(code.len() - 1);
        let base: f64 = match digits.parse::<u32>() {
            Ok(v) => v as f64,
            Err(_) => return DECODE_FAILED,
        };
        let exp: i32 = match exp.parse::<i32>() {
            Ok(v) => v,
            Err(_) => return DECODE_FAILED,
        };

        base * 10f64.powi(exp)
    }

    /// 解码R/K/M字母小数点记法
    ///
    /// 字母标记小数点位置并携带倍率：
    /// - `"2R2"` → 2.2
    /// - `"1R00"` → 1.0
    /// - `"4K7"` → 4700
    /// - `"R047"` → 0.047
    /// - `"1M5"` → 1500000
    ///
    /// 不含字母、含多个字母或解析失败返回 `DECODE_FAILED`
    pub fn decode_r_notation(code: &str) -> f64 {
        let code = code.trim().to_ascii_uppercase();

        // 1. 定位唯一的倍率字母
        let mut marker: Option<(usize, f64)> = None;
        for (i, c) in code.char_indices() {
            let multiplier = match c {
                'R' => 1.0,
                'K' => 1_000.0,
                'M' => 1_000_000.0,
                c if c.is_ascii_digit() => continue,
                _ => return DECODE_FAILED, // 非法字符
            };
            if marker.is_some() {
                return DECODE_FAILED; // 多个字母，非本记法
            }
            marker = Some((i, multiplier));
        }
        let Some((pos, multiplier)) = marker else {
            return DECODE_FAILED; // 无字母，应走EIA解码
        };

        // 2. 以字母为小数点重组数字
        let decimal = format!("{}.{}", &code[..pos], &code[pos + 1..]);
        if decimal.trim_matches('.').is_empty() {
            return DECODE_FAILED;
        }
        match decimal.parse::<f64>() {
            Ok(v) => v * multiplier,
            Err(_) => DECODE_FAILED,
        }
    }

    /// 综合解码：先尝试EIA数字码，再尝试字母记法
    pub fn decode(code: &str) -> f64 {
        let eia = Self::decode_eia(code);
        if eia >= 0.0 {
            return eia;
        }
        Self::decode_r_notation(code)
    }
}
