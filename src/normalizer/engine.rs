//! 归一化主引擎
//!
//! 组合编码修复、NFKC 归一化、符号替换、记法规整与章节识别。

use anyhow::Result;
use std::collections::BTreeMap;
use unicode_normalization::UnicodeNormalization;

use crate::normalizer::encoding;
use crate::normalizer::notation;
use crate::normalizer::sections;
use crate::normalizer::symbols;
use crate::normalizer::types::{NormalizerConfig, ProcessingResult};

/// 物理文本归一化器（可复用，规则预编译）
pub struct TextNormalizer {
    config: NormalizerConfig,
    /// 处理统计（标签 → 次数）
    ///
    /// 构造时置空，随成功结果原样返回。当前没有阶段计数，
    /// 字段保留给后续阶段记录用，公开形态不变。
    processing_stats: BTreeMap<String, u64>,
}

impl TextNormalizer {
    /// 创建归一化器
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            processing_stats: BTreeMap::new(),
        }
    }

    /// 完整处理管线
    ///
    /// 五个阶段按固定顺序执行。总是返回结果值：
    /// 空输入与内部故障都折叠为 `ProcessingResult::Error`，不向上抛出，
    /// 实例在任何错误之后仍可继续使用。
    pub fn process(&self, text: &str) -> ProcessingResult {
        if text.is_empty() {
            return ProcessingResult::empty_input();
        }

        match self.run_stages(text) {
            Ok((cleaned_text, sections)) => ProcessingResult::Success {
                cleaned_text,
                sections,
                stats: self.processing_stats.clone(),
            },
            Err(e) => {
                tracing::warn!("文本归一化失败: {}", e);
                ProcessingResult::fault(e.to_string(), text)
            }
        }
    }

    /// 阶段 1–5，任何故障经 `?` 汇聚到 `process` 统一转换
    fn run_stages(&self, text: &str) -> Result<(String, BTreeMap<String, String>)> {
        // 1. 编码修复
        let text = encoding::fix_text(text);

        // 2. Unicode 归一化（NFKC：兼容分解 + 规范合成）
        let text: String = text.nfkc().collect();

        // 3. 符号替换，方向由配置决定
        let text = if self.config.preserve_unicode {
            symbols::words_to_glyphs(&text)
        } else {
            symbols::glyphs_to_words(&text)
        };

        // 4. 科学计数法规整
        let text = notation::reformat(&text, self.config.preserve_unicode);

        // 5. 章节识别（只读，不改正文）
        let sections = sections::detect(&text);

        Ok((text, sections))
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}
