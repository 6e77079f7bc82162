use serde::Serialize;

use crate::error::{Result, SeqError};
use crate::matching::naive;

/// 构建后缀数组（倍增法，O(n log² n)）。
/// 输入为原始字节文本，不需要哨兵；空后缀不计入。
/// 一个后缀是另一个的前缀时，较短者排在前面。
pub fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = text.iter().map(|&b| i64::from(b)).collect();
    let mut tmp: Vec<i64> = vec![0; n];

    let mut k = 1usize;
    while k < n {
        sa.sort_unstable_by(|&i, &j| key(&rank, i, k).cmp(&key(&rank, j, k)).then(i.cmp(&j)));

        tmp[sa[0]] = 0;
        for w in 1..n {
            let a = sa[w - 1];
            let b = sa[w];
            tmp[b] = tmp[a] + i64::from(key(&rank, a, k) != key(&rank, b, k));
        }

        // 复制回 rank
        rank.copy_from_slice(&tmp);
        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        k <<= 1;
    }

    log::trace!("suffix array built: n={}, doubling rounds up to k={}", n, k);
    sa
}

/// 倍增排序键；越过文本末尾的后半段记为 -1，保证短后缀排在前面。
#[inline]
fn key(rank: &[i64], i: usize, k: usize) -> (i64, i64) {
    (rank[i], if i + k < rank.len() { rank[i + k] } else { -1 })
}

/// 某一文本的后缀数组。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixArray {
    sa: Vec<usize>,
    #[serde(skip)]
    text_len: usize,
}

/// 展示用的一行：文本顺序下的后缀、起始位置及其排名。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixRow {
    pub suffix: String,
    pub position: usize,
    pub rank: usize,
}

impl SuffixArray {
    pub fn build(text: &[u8]) -> Self {
        Self { sa: build_suffix_array(text), text_len: text.len() }
    }

    fn check_text(&self, text: &[u8]) -> Result<()> {
        if text.len() != self.text_len {
            return Err(SeqError::TextMismatch { expected: self.text_len, actual: text.len() });
        }
        Ok(())
    }

    pub fn positions(&self) -> &[usize] {
        &self.sa
    }

    pub fn into_positions(self) -> Vec<usize> {
        self.sa
    }

    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// 逆后缀数组：`isa[sa[r]] == r`。
    pub fn inverse(&self) -> Vec<usize> {
        let mut isa = vec![0usize; self.sa.len()];
        for (r, &p) in self.sa.iter().enumerate() {
            isa[p] = r;
        }
        isa
    }

    /// `text` 必须是构建时的文本，长度不符时返回 [`SeqError::TextMismatch`]。
    pub fn rows(&self, text: &[u8]) -> Result<Vec<SuffixRow>> {
        self.check_text(text)?;
        Ok(self
            .inverse()
            .into_iter()
            .enumerate()
            .map(|(position, rank)| SuffixRow {
                suffix: String::from_utf8_lossy(&text[position..]).into_owned(),
                position,
                rank,
            })
            .collect())
    }

    /// 以 `pattern` 开头的所有后缀的起始位置（升序）。空模式返回空。
    pub fn search(&self, text: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
        self.check_text(text)?;
        let m = pattern.len();
        if m == 0 || m > text.len() {
            return Ok(Vec::new());
        }
        let head = move |p: usize| {
            let s = &text[p..];
            &s[..s.len().min(m)]
        };
        let lo = self.sa.partition_point(|&p| &text[p..] < pattern);
        let hi = lo + self.sa[lo..].partition_point(|&p| head(p) <= pattern);

        let mut hits: Vec<usize> = self.sa[lo..hi]
            .iter()
            .copied()
            .filter(|&p| naive::matches_at(text, pattern, p))
            .collect();
        hits.sort_unstable();
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_sa(text: &[u8]) -> Vec<usize> {
        let n = text.len();
        let mut suffixes: Vec<(usize, &[u8])> = (0..n).map(|i| (i, &text[i..])).collect();
        suffixes.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(&b.0)));
        suffixes.into_iter().map(|(i, _)| i).collect()
    }

    fn make_text(len: usize, alphabet: &[u8]) -> Vec<u8> {
        let mut x: u32 = 1_234_567;
        let mut v = Vec::with_capacity(len);
        for _ in 0..len {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            v.push(alphabet[(x >> 16) as usize % alphabet.len()]);
        }
        v
    }

    #[test]
    fn sa_banana() {
        assert_eq!(build_suffix_array(b"banana"), vec![5, 3, 1, 0, 4, 2]);
        assert_eq!(SuffixArray::build(b"banana").inverse(), vec![3, 2, 5, 1, 4, 0]);
    }

    #[test]
    fn sa_shorter_suffix_first() {
        assert_eq!(build_suffix_array(b"AAAA"), vec![3, 2, 1, 0]);
        assert_eq!(build_suffix_array(b"A"), vec![0]);
        assert!(build_suffix_array(b"").is_empty());
    }

    #[test]
    fn sa_matches_naive_on_small_random_texts() {
        for len in 1..=40 {
            for alphabet in [&b"ACGT"[..], &b"AB"[..], &b"ACDEFGHIKLMNPQRSTVWY"[..]] {
                let text = make_text(len, alphabet);
                assert_eq!(build_suffix_array(&text), naive_sa(&text), "mismatch on len={}", len);
            }
        }
    }

    #[test]
    fn rows_in_text_order() {
        let sa = SuffixArray::build(b"ACA");
        let rows = sa.rows(b"ACA").unwrap();
        // 排序：A(2) < ACA(0) < CA(1)
        assert_eq!(rows[0], SuffixRow { suffix: "ACA".into(), position: 0, rank: 1 });
        assert_eq!(rows[1], SuffixRow { suffix: "CA".into(), position: 1, rank: 2 });
        assert_eq!(rows[2], SuffixRow { suffix: "A".into(), position: 2, rank: 0 });
    }

    #[test]
    fn search_via_sa_interval() {
        let text = b"GCTACGATCTAGAATCTA";
        let sa = SuffixArray::build(text);
        assert_eq!(sa.search(text, b"CTA").unwrap(), vec![1, 8, 15]);
        assert_eq!(sa.search(text, b"TCTA").unwrap(), vec![7, 14]);
        assert_eq!(sa.search(text, b"A").unwrap(), naive::find_all(text, b"A"));
        assert!(sa.search(text, b"GGG").unwrap().is_empty());
        assert!(sa.search(text, b"").unwrap().is_empty());
    }

    #[test]
    fn other_text_rejected() {
        let sa = SuffixArray::build(b"GCTACGATCTAGAATCTA");
        assert!(matches!(
            sa.search(b"GCTA", b"CTA"),
            Err(SeqError::TextMismatch { expected: 18, actual: 4 })
        ));
        assert!(matches!(sa.rows(b"AC"), Err(SeqError::TextMismatch { .. })));
    }
}
