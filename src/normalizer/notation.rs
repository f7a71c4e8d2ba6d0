//! 科学计数法规整（阶段 4）
//!
//! 两条规则按声明顺序依次作用于全文：
//! 1. 乘幂写法："1.23 x 10^-5"、"6.02 × 10(23)"
//! 2. E 记法："1.23e-5"、"3E8"
//!
//! 规则 2 在规则 1 的输出上运行，不设防重写保护。

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// 乘幂写法：尾数 [x|×] 10 [^()]* 指数
    static ref POWER_OF_TEN: Regex =
        Regex::new(r"([0-9.]+)\s*[x×]\s*10\s*[\^()]*([+-]?[0-9]+)").unwrap();
    /// E 记法：尾数 [e|E] 指数
    static ref E_NOTATION: Regex =
        Regex::new(r"([0-9.]+)\s*[eE]\s*([+-]?[0-9]+)").unwrap();
}

/// 重排科学计数法
///
/// `preserve_unicode` 为 true 时输出 `×10<sup>指数</sup>` 上标形态，
/// 否则输出纯 ASCII 形态（乘幂 → `x10^指数`，E 记法原样规整）。
pub fn reformat(text: &str, preserve_unicode: bool) -> String {
    let text = POWER_OF_TEN.replace_all(text, |caps: &Captures| {
        if preserve_unicode {
            format!("{}×10<sup>{}</sup>", &caps[1], &caps[2])
        } else {
            format!("{}x10^{}", &caps[1], &caps[2])
        }
    });
    let text = E_NOTATION.replace_all(&text, |caps: &Captures| {
        if preserve_unicode {
            format!("{}×10<sup>{}</sup>", &caps[1], &caps[2])
        } else {
            format!("{}e{}", &caps[1], &caps[2])
        }
    });
    text.into_owned()
}
