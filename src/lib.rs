//! # seqscan
//!
//! 面向 DNA / 多肽序列的精确字符串匹配与索引。
//!
//! 本 crate 只做内存中的纯函数计算：输入序列、模式和数值参数，输出位置、表或派生序列。
//!
//! - **精确匹配**：朴素匹配、Boyer-Moore 坏字符规则、完整 Boyer-Moore（含好后缀）
//! - **k-mer 索引**：有序 k-mer 表 + 二分查找 + 候选校验
//! - **后缀数组**：倍增法构建、逆后缀数组、区间查找
//! - **重叠检测**：读段后缀/前缀最长重叠、重叠图与贪心组装
//!
//! ## 快速示例
//!
//! ```rust
//! use seqscan::matching::{bad_char, naive};
//! use seqscan::index::{kmer, sa};
//! use seqscan::assembly::overlap;
//!
//! let text = b"GCTACGATCTAGAATCTA";
//!
//! assert_eq!(naive::find(text, b"TCT"), Some(7));
//! assert_eq!(bad_char::find(text, b"TCT"), Some(7));
//!
//! let idx = kmer::build_kmer_index(text, 3);
//! assert_eq!(kmer::query_kmer_index(text, b"TCT", &idx).unwrap(), vec![7, 14]);
//!
//! let sa_arr = sa::build_suffix_array(b"banana");
//! assert_eq!(sa_arr, vec![5, 3, 1, 0, 4, 2]);
//!
//! let ov = overlap::compute_overlap(b"ATTAGACCTG", b"AGACCTGCCG", overlap::DEFAULT_MIN_OVERLAP);
//! assert_eq!(ov.length, 7);
//! ```
//!
//! ## 模块说明
//!
//! - [`matching`] — 精确匹配算法与 [`matching::Matcher`] trait
//! - [`index`] — k-mer 有序索引与后缀数组
//! - [`assembly`] — 重叠检测、重叠图、贪心组装
//! - [`util`] — 字母表校验、反向互补、密码子表
//! - [`io`] — FASTA 读取（供命令行前端使用）

pub mod assembly;
pub mod error;
pub mod index;
pub mod io;
pub mod matching;
pub mod util;

pub use error::{Result, SeqError};
