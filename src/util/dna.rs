use crate::error::{Result, SeqError};

/// 匹配全部区分大小写；调用方应先统一转为大写。
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(u8::to_ascii_uppercase).collect()
}

#[inline]
pub fn is_nucleotide(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

/// 仅含大写 A/C/G/T；空序列视为合法。
pub fn is_dna(seq: &[u8]) -> bool {
    seq.iter().all(|&b| is_nucleotide(b))
}

/// 多肽：任意大写 ASCII 字母序列。
pub fn is_peptide(seq: &[u8]) -> bool {
    seq.iter().all(u8::is_ascii_uppercase)
}

pub fn validate_dna(seq: &[u8]) -> Result<()> {
    match seq.iter().position(|&b| !is_nucleotide(b)) {
        Some(position) => Err(SeqError::InvalidSymbol { symbol: char::from(seq[position]), position }),
        None => Ok(()),
    }
}

#[inline]
pub fn complement(base: u8) -> Option<u8> {
    match base.to_ascii_uppercase() {
        b'A' => Some(b'T'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        b'T' => Some(b'A'),
        _ => None,
    }
}

pub fn complement_seq(seq: &[u8]) -> Result<Vec<u8>> {
    seq.iter()
        .enumerate()
        .map(|(position, &b)| complement(b).ok_or(SeqError::InvalidSymbol { symbol: char::from(b), position }))
        .collect()
}

/// 反向互补。错误位置为原序列中的偏移。
pub fn revcomp(seq: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len());
    for (position, &b) in seq.iter().enumerate().rev() {
        out.push(complement(b).ok_or(SeqError::InvalidSymbol { symbol: char::from(b), position })?);
    }
    Ok(out)
}

/// G+C 占比，空序列返回 `None`。
pub fn gc_content(seq: &[u8]) -> Option<f64> {
    if seq.is_empty() {
        return None;
    }
    let gc = seq
        .iter()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    Some(gc as f64 / seq.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_without_substitution() {
        assert_eq!(normalize_seq(b"acgTnx"), b"ACGTNX");
    }

    #[test]
    fn alphabet_checks_are_case_sensitive() {
        assert!(is_dna(b"ACGT"));
        assert!(!is_dna(b"ACGt"));
        assert!(!is_dna(b"ACGN"));
        assert!(is_peptide(b"MKWVTFISLL"));
        assert!(!is_peptide(b"MKW1"));
        assert!(!is_peptide(b"mkw"));
    }

    #[test]
    fn validate_reports_first_bad_symbol() {
        assert!(validate_dna(b"GATTACA").is_ok());
        match validate_dna(b"GATXACA") {
            Err(SeqError::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, 'X');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn revcomp_basic() {
        assert_eq!(revcomp(b"ATGCGT").unwrap(), b"ACGCAT");
        assert_eq!(revcomp(b"acgt").unwrap(), b"ACGT");
        assert_eq!(complement_seq(b"ATGC").unwrap(), b"TACG");
        assert!(revcomp(b"ACNT").is_err());
    }

    #[test]
    fn gc_content_ratio() {
        assert_eq!(gc_content(b""), None);
        assert_eq!(gc_content(b"GGCC"), Some(1.0));
        assert_eq!(gc_content(b"atgc"), Some(0.5));
    }
}
