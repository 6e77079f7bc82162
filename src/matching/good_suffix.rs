use super::bad_char::BadCharTable;

/// 强好后缀位移表。
///
/// `shift[j + 1]` 为在模式下标 `j` 处失配时的右移量，`shift[0]` 为完整匹配后的右移量。
#[derive(Debug, Clone)]
pub struct GoodSuffixTable {
    shift: Vec<usize>,
}

impl GoodSuffixTable {
    pub fn new(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut shift = vec![0usize; m + 1];
        if m == 0 {
            return Self { shift };
        }
        // border[i]：pattern[i..] 的最长真边界的起始位置
        let mut border = vec![0usize; m + 1];

        // 情形 1：匹配的后缀在模式中另有出现
        let mut i = m;
        let mut j = m + 1;
        border[i] = j;
        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border[j];
            }
            i -= 1;
            j -= 1;
            border[i] = j;
        }

        // 情形 2：仅有匹配后缀的一部分出现在模式开头
        let mut j = border[0];
        for i in 0..=m {
            if shift[i] == 0 {
                shift[i] = j;
            }
            if i == j {
                j = border[j];
            }
        }

        Self { shift }
    }

    #[inline]
    pub fn after_mismatch(&self, j: usize) -> usize {
        self.shift[j + 1]
    }

    #[inline]
    pub fn after_match(&self) -> usize {
        self.shift[0]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.shift
    }
}

struct Tables {
    bad_char: BadCharTable,
    good_suffix: GoodSuffixTable,
}

impl Tables {
    fn new(pattern: &[u8]) -> Self {
        Self {
            bad_char: BadCharTable::new(pattern),
            good_suffix: GoodSuffixTable::new(pattern),
        }
    }
}

/// 完整 Boyer-Moore：右移量取坏字符与好后缀两者中的较大值。
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }
    if m > text.len() {
        return None;
    }
    let tables = Tables::new(pattern);
    let mut found = None;
    scan(text, pattern, &tables, |pos| {
        found = Some(pos);
        false
    });
    found
}

pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut hits = Vec::new();
    if m == 0 || m > text.len() {
        return hits;
    }
    let tables = Tables::new(pattern);
    scan(text, pattern, &tables, |pos| {
        hits.push(pos);
        true
    });
    hits
}

/// `on_match` 返回 false 时停止扫描。
fn scan<F>(text: &[u8], pattern: &[u8], tables: &Tables, mut on_match: F)
where
    F: FnMut(usize) -> bool,
{
    let n = text.len();
    let m = pattern.len();
    let mut s = 0usize;
    while s + m <= n {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }
        if j == 0 {
            if !on_match(s) {
                return;
            }
            s += tables.good_suffix.after_match().max(1);
        } else {
            let bc = tables.bad_char.shift(j - 1, text[s + j - 1]);
            let gs = tables.good_suffix.after_mismatch(j - 1);
            s += bc.max(gs).max(1);
        }
    }
}
