//! 章节识别（阶段 5）
//!
//! 只读扫描：定位 "constants" / "equations" 段落，不修改正文。
//! 每类章节只取第一处匹配；段落必须以空行结尾，否则不记录。

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    /// 章节识别规则（键名 + 模式），按声明顺序求值
    ///
    /// 捕获组 1 为章节正文：从关键词起，到首个空行之前（不含终结的换行）。
    static ref SECTION_RULES: Vec<(&'static str, Regex)> = vec![
        (
            "constants",
            Regex::new(r"(?i)((?:fundamental\s+)?constants?[\s\S]+?)\n\s*\n").unwrap(),
        ),
        (
            "equations",
            Regex::new(r"(?i)((?:key\s+)?equations?[\s\S]+?)\n\s*\n").unwrap(),
        ),
    ];
}

/// 识别章节
///
/// 返回映射最多含 "constants" 与 "equations" 两个键；
/// 未找到的章节不产生键（不输出空串占位）。
pub fn detect(text: &str) -> BTreeMap<String, String> {
    let mut sections = BTreeMap::new();
    for (name, rule) in SECTION_RULES.iter() {
        if let Some(caps) = rule.captures(text) {
            sections.insert((*name).to_string(), caps[1].to_string());
        }
    }
    sections
}
