//! 全局分类器单例管理
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;

use super::classifier::MpnClassifier;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{MpnClassifyError, MpnResult};

/// 全局分类器实例
static GLOBAL_CLASSIFIER: Lazy<Arc<OnceCell<MpnClassifier>>> = Lazy::new(|| {
    Arc::new(OnceCell::new())
});

/// 初始化全局分类器（默认配置）
pub fn init_mpn_classifier() -> MpnResult<()> {
    init_mpn_classifier_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局分类器
pub fn init_mpn_classifier_with_config(config: GlobalConfig) -> MpnResult<()> {
    if GLOBAL_CLASSIFIER.get().is_some() {
        return Ok(());
    }

    let classifier = MpnClassifier::new(config)?;
    GLOBAL_CLASSIFIER.set(classifier).map_err(|_| {
        MpnClassifyError::ClassifierNotInitialized
    })?;

    Ok(())
}

/// 获取全局分类器
pub(crate) fn get_global_classifier() -> MpnResult<&'static MpnClassifier> {
    GLOBAL_CLASSIFIER.get()
        .ok_or(MpnClassifyError::ClassifierNotInitialized)
}
