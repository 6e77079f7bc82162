use serde::Serialize;

pub const DEFAULT_MIN_OVERLAP: usize = 3;

/// `a` 的后缀与 `b` 的前缀的最长重叠。无重叠时长度为 0、序列为空。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub length: usize,
    #[serde(serialize_with = "crate::util::serialize_seq")]
    pub sequence: Vec<u8>,
}

impl Overlap {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// 满足 `a[len(a)-L..] == b[..L]` 的最大 `L >= min_length`。
///
/// 从 `min(len(a), len(b))` 向下尝试，第一个命中即为最长重叠。`min_length == 0` 按 1 处理。
pub fn compute_overlap(a: &[u8], b: &[u8], min_length: usize) -> Overlap {
    let min_length = min_length.max(1);
    let max_len = a.len().min(b.len());
    if max_len < min_length {
        return Overlap::default();
    }
    (min_length..=max_len)
        .rev()
        .find(|&l| a[a.len() - l..] == b[..l])
        .map(|l| Overlap { length: l, sequence: b[..l].to_vec() })
        .unwrap_or_default()
}
