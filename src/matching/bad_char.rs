/// 坏字符表：每个字节在模式中最右出现的下标，未出现记为 -1。
#[derive(Debug, Clone)]
pub struct BadCharTable {
    last: [isize; 256],
}

impl BadCharTable {
    pub fn new(pattern: &[u8]) -> Self {
        let mut last = [-1isize; 256];
        for (j, &c) in pattern.iter().enumerate() {
            last[c as usize] = j as isize;
        }
        Self { last }
    }

    #[inline]
    pub fn last_occurrence(&self, c: u8) -> Option<usize> {
        let j = self.last[c as usize];
        if j < 0 { None } else { Some(j as usize) }
    }

    /// 在模式下标 `j` 处与文本字符 `c` 失配时的右移量，至少为 1。
    #[inline]
    pub fn shift(&self, j: usize, c: u8) -> usize {
        let s = j as isize - self.last[c as usize];
        s.max(1) as usize
    }
}

/// 仅用坏字符规则的 Boyer-Moore 查找，约定同 [`super::naive::find`]。
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }
    if m > text.len() {
        return None;
    }
    let table = BadCharTable::new(pattern);
    scan(text, pattern, &table, 0)
}

pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut hits = Vec::new();
    if m == 0 || m > text.len() {
        return hits;
    }
    let table = BadCharTable::new(pattern);
    let mut s = 0usize;
    while let Some(pos) = scan(text, pattern, &table, s) {
        hits.push(pos);
        s = pos + 1;
    }
    hits
}

/// 从对齐位置 `s` 开始扫描，返回第一个完整匹配的对齐位置。
fn scan(text: &[u8], pattern: &[u8], table: &BadCharTable, mut s: usize) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();
    while s + m <= n {
        // 自右向左比较；j 为尚未比较的前缀长度
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(s);
        }
        s += table.shift(j - 1, text[s + j - 1]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::naive;

    #[test]
    fn table_records_rightmost_index() {
        let t = BadCharTable::new(b"GATTAG");
        assert_eq!(t.last_occurrence(b'G'), Some(5));
        assert_eq!(t.last_occurrence(b'A'), Some(4));
        assert_eq!(t.last_occurrence(b'T'), Some(3));
        assert_eq!(t.last_occurrence(b'C'), None);
    }

    #[test]
    fn shift_never_below_one() {
        let t = BadCharTable::new(b"GATTAG");
        // 'G' 最右出现在 5，位于 j=1 右侧
        assert_eq!(t.shift(1, b'G'), 1);
        // 'C' 不在模式中：整体越过失配位置
        assert_eq!(t.shift(4, b'C'), 5);
        assert_eq!(t.shift(4, b'A'), 1);
        assert_eq!(t.shift(3, b'A'), 1);
        assert_eq!(t.shift(5, b'T'), 2);
    }

    #[test]
    fn basic_search() {
        assert_eq!(find(b"ATGCGATCGATCG", b"GATC"), Some(4));
        assert_eq!(find(b"ATGCGATC", b"XXXX"), None);
        assert_eq!(find(b"ATGCGATC", b"ATGC"), Some(0));
        assert_eq!(find(b"", b"ATG"), None);
        assert_eq!(find(b"ATG", b""), Some(0));
    }

    #[test]
    fn non_dna_alphabet() {
        let text = b"MKWVTFISLLFLFSSAYSRGVFRR";
        assert_eq!(find(text, b"SSAYS"), naive::find(text, b"SSAYS"));
        assert_eq!(find(text, b"FRR"), Some(21));
    }

    #[test]
    fn degenerate_runs() {
        let text = vec![b'A'; 64];
        let mut pattern = vec![b'A'; 7];
        assert_eq!(find(&text, &pattern), Some(0));
        pattern[0] = b'C';
        assert_eq!(find(&text, &pattern), None);
        assert_eq!(find_all(&text, &vec![b'A'; 62]), vec![0, 1, 2]);
    }
}
