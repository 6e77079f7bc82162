/// 暴力匹配：返回第一次出现的位置。空模式返回 `Some(0)`。
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();
    if m > n {
        return None;
    }
    (0..=n - m).find(|&i| matches_at(text, pattern, i))
}

/// 所有起始位置（升序），重叠出现也会报告。
pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return Vec::new();
    }
    (0..=n - m).filter(|&i| matches_at(text, pattern, i)).collect()
}

/// 逐字符比较 `text[i..i+m]` 与模式；索引与后缀数组的校验也用这里的相等语义。
#[inline]
pub fn matches_at(text: &[u8], pattern: &[u8], i: usize) -> bool {
    match text.get(i..i + pattern.len()) {
        Some(window) => window.iter().zip(pattern).all(|(a, b)| a == b),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_occurrence() {
        assert_eq!(find(b"ATGCGATCGATCG", b"GATC"), Some(4));
        assert_eq!(find(b"ATGCGATC", b"ATG"), Some(0));
        assert_eq!(find(b"ATGCGATC", b"GATC"), Some(4));
        assert_eq!(find(b"ATGCGATC", b"XXXX"), None);
    }

    #[test]
    fn empty_and_oversized_patterns() {
        assert_eq!(find(b"ATGC", b""), Some(0));
        assert_eq!(find(b"", b""), Some(0));
        assert_eq!(find(b"", b"A"), None);
        assert_eq!(find(b"AT", b"ATGC"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(find(b"acgt", b"CG"), None);
        assert_eq!(find(b"acgt", b"cg"), Some(1));
    }

    #[test]
    fn find_all_overlapping() {
        assert_eq!(find_all(b"AAAA", b"AA"), vec![0, 1, 2]);
        assert_eq!(find_all(b"ATGATGATG", b"ATG"), vec![0, 3, 6]);
        assert!(find_all(b"ATGC", b"XX").is_empty());
        assert!(find_all(b"ATGC", b"").is_empty());
    }

    #[test]
    fn matches_at_out_of_range() {
        assert!(matches_at(b"ACGT", b"GT", 2));
        assert!(!matches_at(b"ACGT", b"GT", 3));
        assert!(!matches_at(b"ACGT", b"GT", 10));
    }
}
