//! 规则注册表：按元器件类型组织的编译后正则规则库
//! 初始化阶段写入（build phase），匹配阶段只读（read-only phase）
//! 同一类型可由多个厂商注册多条规则，任一规则命中即视为该类型命中

use std::collections::HashMap;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::{MpnClassifyError, MpnResult};
use crate::taxonomy::ComponentType;
use crate::utils::Normalizer;

/// 单条编译后规则
/// 规则一经注册不再变更，生命周期与注册表一致
#[derive(Debug, Clone)]
pub struct PatternRule {
    // 原始模式串（用于幂等去重与调试输出）
    pub source: String,
    // 编译后正则（忽略大小写）
    pub regex: Regex,
}

/// 规则注册表
/// 注册是追加式且幂等的：重复注册同一(类型, 模式)不产生新规则
#[derive(Debug, Default)]
pub struct PatternRegistry {
    rules: HashMap<ComponentType, Vec<PatternRule>>,
    frozen: bool,
}

impl PatternRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一条规则
    ///
    /// - 模式以忽略大小写方式编译，编译失败返回错误（规则编写期错误，非运行期错误）
    /// - 重复注册同一(类型, 模式)直接返回Ok，不新增规则（幂等，支持处理器重复初始化）
    /// - 注册表冻结后注册新规则返回错误，但重复注册已有规则仍然安全
    pub fn register(&mut self, component_type: ComponentType, pattern: &str) -> MpnResult<()> {
        // 1. 幂等去重：已存在的(类型, 模式)直接跳过，冻结前后行为一致
        if let Some(existing) = self.rules.get(&component_type) {
            if existing.iter().any(|r| r.source == pattern) {
                return Ok(());
            }
        }

        // 2. 冻结检查：只读阶段拒绝新规则
        if self.frozen {
            return Err(MpnClassifyError::RegistryFrozen(format!(
                "{} -> {}",
                component_type, pattern
            )));
        }

        // 3. 编译并入表
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()?;
        debug!("注册规则：{} -> {}", component_type, pattern);
        self.rules.entry(component_type).or_default().push(PatternRule {
            source: pattern.to_string(),
            regex,
        });
        Ok(())
    }

    /// 判断MPN是否命中指定类型的任意一条规则
    ///
    /// 先规范化再匹配；空输入或该类型无规则时返回false，绝不报错。
    /// 多条规则为逻辑或关系，求值顺序不影响结果。
    pub fn matches(&self, mpn: &str, component_type: ComponentType) -> bool {
        let normalized = Normalizer::normalize(mpn);
        if normalized.is_empty() {
            return false;
        }
        self.rules
            .get(&component_type)
            .map(|rules| rules.iter().any(|r| r.regex.is_match(&normalized)))
            .unwrap_or(false)
    }

    /// 判断MPN是否命中满足请求类型的任意类型
    /// 即请求通用类型时，其厂商限定子类型的规则命中同样算数
    pub fn matches_satisfying(&self, mpn: &str, requested: ComponentType) -> bool {
        ComponentType::all()
            .iter()
            .filter(|&&t| ComponentType::is_satisfied_by(requested, t))
            .any(|&t| self.matches(mpn, t))
    }

    /// 判断指定类型是否已注册至少一条规则
    pub fn has_pattern(&self, component_type: ComponentType) -> bool {
        self.rules
            .get(&component_type)
            .map(|rules| !rules.is_empty())
            .unwrap_or(false)
    }

    /// 指定类型的规则条数（幂等性测试用）
    pub fn rule_count(&self, component_type: ComponentType) -> usize {
        self.rules.get(&component_type).map(Vec::len).unwrap_or(0)
    }

    /// 全表规则总数
    pub fn total_rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// 冻结注册表，进入只读阶段
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// 是否已冻结
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}
