//! 归一化类型定义

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 错误回显时保留的原文最大字符数（超出部分以 "..." 截断）
const ERROR_CONTEXT_CHARS: usize = 500;

/// 语言支持范围
///
/// 保留配置：当前任何阶段都不读取该值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSupport {
    /// 仅拉丁字符
    Latin,
    /// 多语言（默认）
    #[default]
    Multilingual,
    /// 全量 Unicode
    Full,
}

/// 归一化配置
///
/// 构造时确定，处理器生命周期内不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// true：词形转 Unicode 字形（alpha → α），指数输出 `<sup>` 上标；
    /// false：反向（α → alpha），指数输出纯 ASCII
    pub preserve_unicode: bool,
    /// 保留配置：当前不影响行为
    pub aggressive_clean: bool,
    /// 保留配置：当前不影响行为
    pub language_support: LanguageSupport,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            preserve_unicode: true,
            aggressive_clean: false,
            language_support: LanguageSupport::Multilingual,
        }
    }
}

/// 处理结果：成功 / 错误二选一
///
/// 序列化为无标签 JSON 对象，消费方以是否存在 `error` 键区分形态。
/// 成功形态固定包含 `cleaned_text`、`sections`、`stats` 三个键；
/// 错误形态包含 `error`，`original_text` 仅在非空时输出。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessingResult {
    /// 管线正常完成
    Success {
        /// 五个阶段处理后的文本
        cleaned_text: String,
        /// 识别到的章节（"constants" / "equations" → 原样片段）
        sections: BTreeMap<String, String>,
        /// 处理统计（标签 → 次数）
        stats: BTreeMap<String, u64>,
    },
    /// 空输入或管线故障
    Error {
        /// 错误描述
        error: String,
        /// 出错时的输入回显（截断到 500 字符）
        #[serde(default, skip_serializing_if = "String::is_empty")]
        original_text: String,
    },
}

impl ProcessingResult {
    /// 空输入错误（不带原文回显）
    pub(crate) fn empty_input() -> Self {
        Self::Error {
            error: "Empty input".to_string(),
            original_text: String::new(),
        }
    }

    /// 管线故障错误，原文按字符数截断
    pub(crate) fn fault(message: String, original: &str) -> Self {
        let mut chars = original.chars();
        let mut truncated: String = chars.by_ref().take(ERROR_CONTEXT_CHARS).collect();
        if chars.next().is_some() {
            truncated.push_str("...");
        }
        Self::Error {
            error: message,
            original_text: truncated,
        }
    }

    /// 是否为错误形态
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// 成功形态的清洗文本
    pub fn cleaned_text(&self) -> Option<&str> {
        match self {
            Self::Success { cleaned_text, .. } => Some(cleaned_text),
            Self::Error { .. } => None,
        }
    }

    /// 成功形态的章节映射
    pub fn sections(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Success { sections, .. } => Some(sections),
            Self::Error { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NormalizerConfig::default();
        assert!(config.preserve_unicode);
        assert!(!config.aggressive_clean);
        assert_eq!(config.language_support, LanguageSupport::Multilingual);
    }

    #[test]
    fn test_empty_input_serializes_without_original_text() {
        let result = ProcessingResult::empty_input();
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["error"], "Empty input");
        assert!(!obj.contains_key("original_text"));
    }

    #[test]
    fn test_fault_truncates_to_500_chars_plus_ellipsis() {
        let original = "x".repeat(600);
        let result = ProcessingResult::fault("boom".to_string(), &original);
        match result {
            ProcessingResult::Error { original_text, .. } => {
                assert_eq!(original_text.chars().count(), 503);
                assert!(original_text.ends_with("..."));
            }
            _ => panic!("expected error"),
        }
    }

    #[test]
    fn test_fault_short_input_not_truncated() {
        let result = ProcessingResult::fault("boom".to_string(), "short");
        match result {
            ProcessingResult::Error { original_text, .. } => {
                assert_eq!(original_text, "short");
            }
            _ => panic!("expected error"),
        }
    }

    #[test]
    fn test_fault_truncation_counts_chars_not_bytes() {
        // 多字节字符按字符数截断，不能在字节中间截断
        let original = "α".repeat(600);
        let result = ProcessingResult::fault("boom".to_string(), &original);
        match result {
            ProcessingResult::Error { original_text, .. } => {
                assert_eq!(original_text.chars().count(), 503);
            }
            _ => panic!("expected error"),
        }
    }

    #[test]
    fn test_success_json_shape() {
        let result = ProcessingResult::Success {
            cleaned_text: "α".to_string(),
            sections: BTreeMap::new(),
            stats: BTreeMap::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("cleaned_text"));
        assert!(obj.contains_key("sections"));
        assert!(obj.contains_key("stats"));
        assert!(!obj.contains_key("error"));
    }

    #[test]
    fn test_untagged_roundtrip() {
        let json = r#"{"error":"boom","original_text":"abc"}"#;
        let result: ProcessingResult = serde_json::from_str(json).unwrap();
        assert!(result.is_error());

        let json = r#"{"cleaned_text":"t","sections":{},"stats":{}}"#;
        let result: ProcessingResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_error());
        assert_eq!(result.cleaned_text(), Some("t"));
    }
}
