//! 符号替换（阶段 3）
//!
//! 希腊字母 / 运算符在文本词形与 Unicode 字形之间互转。
//! 映射表按声明顺序应用；字形不会与其他词形冲突，单趟替换即可。

use lazy_static::lazy_static;
use regex::Regex;

/// 物理符号映射表（词形 → 字形）
///
/// 大小写敏感："delta" 与 "Delta" 是两个条目。
pub const SYMBOL_TABLE: &[(&str, &str)] = &[
    ("alpha", "α"),
    ("beta", "β"),
    ("gamma", "γ"),
    ("mu", "μ"),
    ("theta", "θ"),
    ("lambda", "λ"),
    ("delta", "δ"),
    ("sigma", "σ"),
    ("omega", "ω"),
    ("Delta", "Δ"),
    ("nabla", "∇"),
    ("partial", "∂"),
];

lazy_static! {
    /// 预编译的整词匹配规则（词形 → 字形方向）
    static ref WORD_RULES: Vec<(Regex, &'static str)> = SYMBOL_TABLE
        .iter()
        .map(|&(word, glyph)| {
            let pattern = format!(r"\b{word}\b");
            (Regex::new(&pattern).unwrap(), glyph)
        })
        .collect();
}

/// 词形 → 字形（整词、大小写敏感）
pub fn words_to_glyphs(text: &str) -> String {
    let mut result = text.to_string();
    for (rule, glyph) in WORD_RULES.iter() {
        if rule.is_match(&result) {
            result = rule.replace_all(&result, *glyph).into_owned();
        }
    }
    result
}

/// 字形 → 词形（普通子串替换，字形为单码点，无词边界歧义）
pub fn glyphs_to_words(text: &str) -> String {
    let mut result = text.to_string();
    for &(word, glyph) in SYMBOL_TABLE {
        if result.contains(glyph) {
            result = result.replace(glyph, word);
        }
    }
    result
}
