//! 物理文本归一化层
//!
//! 在文档摄取和下游解析之间插入确定性清洗层，修复编码损坏、
//! 统一符号与记法写法。单次调用、无持久状态。
//!
//! ## 处理流程
//! 1. 编码修复（mojibake 启发式）
//! 2. Unicode 归一化（NFKC）
//! 3. 符号替换（alpha ↔ α）
//! 4. 科学计数法规整（1.23 x 10^-5 → 1.23×10<sup>-5</sup>）
//! 5. 章节识别（constants / equations，只读扫描）

mod encoding;
mod engine;
mod notation;
mod sections;
mod symbols;
mod types;

pub use engine::TextNormalizer;
pub use types::{LanguageSupport, NormalizerConfig, ProcessingResult};
