use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqError};
use crate::matching::naive;

/// 一个 k-mer 及其在文本中的起始位置。
///
/// 派生的 `Ord` 先比较子串再比较位置，即索引要求的排序。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KmerEntry {
    pub kmer: Vec<u8>,
    pub pos: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMeta {
    pub source_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// 有序 k-mer 索引：某一文本在某个 k 下的只读快照。
///
/// - 每个长度为 k 的子串按出现次数各占一项（重复 k-mer 为不同项）
/// - 项按子串字典序排列，相同子串按位置升序
/// - 查询用前 k 个字符做二分查找，再对候选位置用完整模式校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KmerIndex {
    k: usize,
    text_len: usize,
    entries: Vec<KmerEntry>,
    #[serde(default)]
    meta: IndexMeta,
}

impl KmerIndex {
    /// `k == 0` 或 `k > text.len()` 时返回空索引，不报错。
    pub fn build(text: &[u8], k: usize) -> Self {
        let n = text.len();
        if k == 0 || k > n {
            log::debug!("k-mer index: k={} out of range for text of length {}, index left empty", k, n);
            return Self { k, text_len: n, entries: Vec::new(), meta: IndexMeta::default() };
        }

        let mut entries: Vec<KmerEntry> = text
            .windows(k)
            .enumerate()
            .map(|(pos, w)| KmerEntry { kmer: w.to_vec(), pos })
            .collect();
        entries.sort_unstable();

        log::debug!("k-mer index: k={}, text_len={}, entries={}", k, n, entries.len());
        Self { k, text_len: n, entries, meta: IndexMeta::default() }
    }

    /// 同 [`KmerIndex::build`]，但 `k` 越界时返回错误而不是空索引。
    pub fn try_build(text: &[u8], k: usize) -> Result<Self> {
        if k == 0 || k > text.len() {
            return Err(SeqError::InvalidKmerLength { k, text_len: text.len() });
        }
        Ok(Self::build(text, k))
    }

    /// 查询 `pattern` 在 `text` 中的所有出现位置（升序）。
    ///
    /// `text` 必须是建索引时的文本。模式短于 k 时返回 [`SeqError::PatternTooShort`]；
    /// 长于 k 时以前 k 个字符检索，再逐个候选校验完整模式。
    pub fn query(&self, text: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
        if text.len() != self.text_len {
            return Err(SeqError::TextMismatch { expected: self.text_len, actual: text.len() });
        }
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }
        if pattern.len() < self.k {
            return Err(SeqError::PatternTooShort { pattern_len: pattern.len(), k: self.k });
        }

        let key = &pattern[..self.k];
        let (lo, hi) = self.key_range(key);
        let hits: Vec<usize> = self.entries[lo..hi]
            .iter()
            .map(|e| e.pos)
            .filter(|&p| naive::matches_at(text, pattern, p))
            .collect();
        debug_assert!(hits.windows(2).all(|w| w[0] < w[1]));
        Ok(hits)
    }

    /// 子串等于 `key` 的项所在区间 `[lo, hi)`（下界/上界二分）。
    fn key_range(&self, key: &[u8]) -> (usize, usize) {
        let lo = self.entries.partition_point(|e| e.kmer.as_slice() < key);
        let hi = lo + self.entries[lo..].partition_point(|e| e.kmer.as_slice() <= key);
        (lo, hi)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn text_len(&self) -> usize {
        self.text_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[KmerEntry] {
        &self.entries
    }

    pub fn distinct_kmers(&self) -> usize {
        if self.entries.is_empty() {
            return 0;
        }
        1 + self.entries.windows(2).filter(|w| w[0].kmer != w[1].kmer).count()
    }

    pub fn meta(&self) -> &IndexMeta {
        &self.meta
    }

    pub fn set_meta(&mut self, meta: IndexMeta) {
        self.meta = meta;
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let f = std::fs::File::create(path)?;
        let mut w = std::io::BufWriter::new(f);
        bincode::serialize_into(&mut w, self)?;
        // drop 时的写错误会被吞掉，必须显式 flush
        w.flush()?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let idx: Self = bincode::deserialize_from(std::io::BufReader::new(f))?;
        Ok(idx)
    }
}

pub fn build_kmer_index(text: &[u8], k: usize) -> KmerIndex {
    KmerIndex::build(text, k)
}

pub fn query_kmer_index(text: &[u8], pattern: &[u8], index: &KmerIndex) -> Result<Vec<usize>> {
    index.query(text, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_sorted_with_position_tiebreak() {
        let idx = KmerIndex::build(b"GATATAT", 3);
        let got: Vec<(Vec<u8>, usize)> = idx.entries().iter().map(|e| (e.kmer.clone(), e.pos)).collect();
        let want = vec![
            (b"ATA".to_vec(), 1),
            (b"ATA".to_vec(), 3),
            (b"GAT".to_vec(), 0),
            (b"TAT".to_vec(), 2),
            (b"TAT".to_vec(), 4),
        ];
        assert_eq!(got, want);
        assert_eq!(idx.distinct_kmers(), 3);
    }

    #[test]
    fn query_returns_all_positions_ascending() {
        let text = b"GCTACGATCTAGAATCTA";
        let idx = KmerIndex::build(text, 3);
        assert_eq!(idx.query(text, b"TCT").unwrap(), vec![7, 14]);
        assert_eq!(idx.query(text, b"CTA").unwrap(), vec![1, 8, 15]);
        assert!(idx.query(text, b"GGG").unwrap().is_empty());
    }

    #[test]
    fn longer_pattern_is_verified() {
        let text = b"GCTACGATCTAGAATCTA";
        let idx = KmerIndex::build(text, 3);
        assert_eq!(idx.query(text, b"CTAG").unwrap(), vec![8]);
        assert_eq!(idx.query(text, b"TCTA").unwrap(), vec![7, 14]);
        // 最后一个候选越过文本末尾
        assert!(idx.query(text, b"CTAA").unwrap().is_empty());
    }

    #[test]
    fn shorter_pattern_rejected() {
        let text = b"ACGTACGT";
        let idx = KmerIndex::build(text, 4);
        match idx.query(text, b"ACG") {
            Err(SeqError::PatternTooShort { pattern_len, k }) => {
                assert_eq!(pattern_len, 3);
                assert_eq!(k, 4);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn text_mismatch_rejected() {
        let idx = KmerIndex::build(b"ACGTACGT", 2);
        assert!(matches!(
            idx.query(b"ACGT", b"AC"),
            Err(SeqError::TextMismatch { expected: 8, actual: 4 })
        ));
    }

    #[test]
    fn boundary_k() {
        let text = b"ACGT";
        let full = KmerIndex::build(text, 4);
        assert_eq!(full.len(), 1);
        assert_eq!(full.query(text, b"ACGT").unwrap(), vec![0]);

        let over = KmerIndex::build(text, 5);
        assert!(over.is_empty());
        assert!(over.query(text, b"ACGTA").unwrap().is_empty());

        assert!(KmerIndex::build(text, 0).is_empty());
        assert!(KmerIndex::build(b"", 1).is_empty());
    }

    #[test]
    fn try_build_reports_invalid_k() {
        assert!(matches!(
            KmerIndex::try_build(b"ACGT", 0),
            Err(SeqError::InvalidKmerLength { k: 0, text_len: 4 })
        ));
        assert!(KmerIndex::try_build(b"ACGT", 5).is_err());
        assert_eq!(KmerIndex::try_build(b"ACGT", 2).unwrap(), KmerIndex::build(b"ACGT", 2));
    }

    #[test]
    fn save_and_load() {
        let text = b"ACGTTGCAACGT";
        let mut idx = KmerIndex::build(text, 3);
        idx.set_meta(IndexMeta { source_file: Some("x.fa".into()), ..Default::default() });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.kmi");
        idx.save_to_file(&path).unwrap();
        let loaded = KmerIndex::load_from_file(&path).unwrap();
        assert_eq!(loaded, idx);
        assert_eq!(loaded.query(text, b"ACG").unwrap(), vec![0, 8]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn save_reports_write_failure() {
        let idx = KmerIndex::build(b"ACGTACGTAC", 3);
        assert!(matches!(idx.save_to_file("/dev/full"), Err(SeqError::Io(_))));
    }
}
