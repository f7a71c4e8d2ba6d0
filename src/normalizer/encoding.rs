//! 编码修复（阶段 1）
//!
//! 修复常见乱码（mojibake）：UTF-8 字节流被按 Latin-1/Windows-1252
//! 解码后产生的 "Ã©"、"â€œ" 一类文本。启发式、尽力而为：
//! 无法判定为乱码时原样返回，绝不失败。

use encoding_rs::UTF_8;

/// 单次调用内的最大修复轮数（双重编码需要两轮，三轮封顶）
const MAX_FIX_PASSES: usize = 3;

/// 修复文本编码
///
/// 契约：total 函数，检测不到损坏时返回等价文本。
/// 修复之后剥离残留的控制字符（保留 `\t` `\n` `\r`）。
pub fn fix_text(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_FIX_PASSES {
        match fix_once(&current) {
            Some(fixed) => current = fixed,
            None => break,
        }
    }
    strip_stray_controls(&current)
}

/// 单轮修复
///
/// 把每个字符逆映射回它在 Windows-1252/Latin-1 下的字节，
/// 若得到的字节流恰好是合法 UTF-8 且解码结果不同于输入，
/// 则判定为乱码并采用解码结果。任一字符无法逆映射即放弃。
fn fix_once(text: &str) -> Option<String> {
    if text.is_ascii() {
        return None;
    }

    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        bytes.push(byte_for_char(ch)?);
    }

    let decoded = UTF_8.decode_without_bom_handling_and_without_replacement(&bytes)?;
    if decoded == text {
        None
    } else {
        Some(decoded.into_owned())
    }
}

/// 字符 → 单字节逆映射
///
/// 0x80–0x9F 区间优先采用 Windows-1252 的可打印字符（智能引号、
/// 省略号等），其余 U+00FF 以下字符按 Latin-1 直通。
fn byte_for_char(ch: char) -> Option<u8> {
    match ch {
        '\u{20AC}' => Some(0x80), // €
        '\u{201A}' => Some(0x82), // ‚
        '\u{0192}' => Some(0x83), // ƒ
        '\u{201E}' => Some(0x84), // „
        '\u{2026}' => Some(0x85), // …
        '\u{2020}' => Some(0x86), // †
        '\u{2021}' => Some(0x87), // ‡
        '\u{02C6}' => Some(0x88), // ˆ
        '\u{2030}' => Some(0x89), // ‰
        '\u{0160}' => Some(0x8A), // Š
        '\u{2039}' => Some(0x8B), // ‹
        '\u{0152}' => Some(0x8C), // Œ
        '\u{017D}' => Some(0x8E), // Ž
        '\u{2018}' => Some(0x91), // '
        '\u{2019}' => Some(0x92), // '
        '\u{201C}' => Some(0x93), // "
        '\u{201D}' => Some(0x94), // "
        '\u{2022}' => Some(0x95), // •
        '\u{2013}' => Some(0x96), // –
        '\u{2014}' => Some(0x97), // —
        '\u{02DC}' => Some(0x98), // ˜
        '\u{2122}' => Some(0x99), // ™
        '\u{0161}' => Some(0x9A), // š
        '\u{203A}' => Some(0x9B), // ›
        '\u{0153}' => Some(0x9C), // œ
        '\u{017E}' => Some(0x9E), // ž
        '\u{0178}' => Some(0x9F), // Ÿ
        _ if (ch as u32) <= 0xFF => Some(ch as u8),
        _ => None,
    }
}

/// 剥离游离控制字符（C0/C1/DEL），保留 `\t` `\n` `\r`
fn strip_stray_controls(text: &str) -> String {
    text.chars()
        .filter(|&ch| !ch.is_control() || matches!(ch, '\t' | '\n' | '\r'))
        .collect()
}
