//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum MpnClassifyError {
    // 规则相关错误
    #[error("规则表解析失败：{0}")]
    RuleTableParseError(#[from] SerdeJsonError),
    #[error("规则表读取失败：{0}")]
    RuleTableIoError(#[from] IoError),
    #[error("规则注册失败：{0}")]
    PatternRegisterError(String),
    #[error("规则注册表已冻结，禁止新增规则：{0}")]
    RegistryFrozen(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 分类器相关错误
    #[error("分类器未初始化")]
    ClassifierNotInitialized,
    #[error("分类器初始化失败：{0}")]
    ClassifierInitError(String),

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type MpnResult<T> = Result<T, MpnClassifyError>;
