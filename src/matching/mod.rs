//! 精确模式匹配。
//!
//! 三种策略共用 [`Matcher`] 签名，便于在测试中互换：
//!
//! - [`Naive`] — 逐位置暴力比较，O((n−m+1)·m)
//! - [`BadCharacter`] — Boyer-Moore 坏字符规则，最好 O(n/m)，最坏 O(n·m)
//! - [`BoyerMoore`] — 坏字符 + 强好后缀规则
//!
//! 约定：空模式在位置 0 匹配；模式长于文本时返回 `None`，从不 panic。

pub mod bad_char;
pub mod good_suffix;
pub mod naive;

pub trait Matcher {
    fn name(&self) -> &'static str;

    /// `pattern` 在 `text` 中第一次出现的位置。
    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize>;

    /// 所有出现位置（含重叠），升序。空模式返回空。
    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        let mut hits = Vec::new();
        if pattern.is_empty() {
            return hits;
        }
        let mut start = 0usize;
        while start + pattern.len() <= text.len() {
            match self.find(&text[start..], pattern) {
                Some(off) => {
                    hits.push(start + off);
                    start += off + 1;
                }
                None => break,
            }
        }
        hits
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

#[derive(Debug, Clone, Copy, Default)]
pub struct BadCharacter;

#[derive(Debug, Clone, Copy, Default)]
pub struct BoyerMoore;

impl Matcher for Naive {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        naive::find(text, pattern)
    }

    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        naive::find_all(text, pattern)
    }
}

impl Matcher for BadCharacter {
    fn name(&self) -> &'static str {
        "bad-char"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        bad_char::find(text, pattern)
    }

    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        bad_char::find_all(text, pattern)
    }
}

impl Matcher for BoyerMoore {
    fn name(&self) -> &'static str {
        "boyer-moore"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        good_suffix::find(text, pattern)
    }

    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        good_suffix::find_all(text, pattern)
    }
}

/// 所有内置匹配器，顺序固定。
pub fn all_matchers() -> [&'static dyn Matcher; 3] {
    [&Naive, &BadCharacter, &BoyerMoore]
}
