//! 标准遗传密码表（DNA 密码子 → 氨基酸单字母），终止密码子记为 `*`。

use serde::Serialize;

use crate::error::{Result, SeqError};

pub const STOP: u8 = b'*';
pub const START: u8 = b'M';

pub fn translate_codon(codon: &[u8; 3]) -> Option<u8> {
    let aa = match codon {
        b"TTT" | b"TTC" => b'F',
        b"TTA" | b"TTG" | b"CTT" | b"CTC" | b"CTA" | b"CTG" => b'L',
        b"ATT" | b"ATC" | b"ATA" => b'I',
        b"ATG" => b'M',
        b"GTT" | b"GTC" | b"GTA" | b"GTG" => b'V',
        b"TCT" | b"TCC" | b"TCA" | b"TCG" | b"AGT" | b"AGC" => b'S',
        b"CCT" | b"CCC" | b"CCA" | b"CCG" => b'P',
        b"ACT" | b"ACC" | b"ACA" | b"ACG" => b'T',
        b"GCT" | b"GCC" | b"GCA" | b"GCG" => b'A',
        b"TAT" | b"TAC" => b'Y',
        b"TAA" | b"TAG" | b"TGA" => STOP,
        b"CAT" | b"CAC" => b'H',
        b"CAA" | b"CAG" => b'Q',
        b"AAT" | b"AAC" => b'N',
        b"AAA" | b"AAG" => b'K',
        b"GAT" | b"GAC" => b'D',
        b"GAA" | b"GAG" => b'E',
        b"TGT" | b"TGC" => b'C',
        b"TGG" => b'W',
        b"CGT" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => b'R',
        b"GGT" | b"GGC" | b"GGA" | b"GGG" => b'G',
        _ => return None,
    };
    Some(aa)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// 读码框 0 上所有完整密码子的翻译
    #[serde(serialize_with = "crate::util::serialize_seq")]
    pub full: Vec<u8>,
    /// 起始 `M` 到终止 `*` 之间的残基（不含 `*`），多个 ORF 依次拼接
    #[serde(serialize_with = "crate::util::serialize_seq")]
    pub orf: Vec<u8>,
}

/// 按读码框 0 翻译；末尾不足一个密码子的碱基忽略。
pub fn translate(seq: &[u8]) -> Result<Translation> {
    let mut full = Vec::with_capacity(seq.len() / 3);
    let mut orf = Vec::new();
    let mut in_orf = false;

    for (i, chunk) in seq.chunks_exact(3).enumerate() {
        let codon = [
            chunk[0].to_ascii_uppercase(),
            chunk[1].to_ascii_uppercase(),
            chunk[2].to_ascii_uppercase(),
        ];
        let aa = translate_codon(&codon).ok_or_else(|| SeqError::InvalidCodon {
            codon: String::from_utf8_lossy(&codon).into_owned(),
            position: i * 3,
        })?;
        full.push(aa);

        match aa {
            START => in_orf = true,
            STOP => in_orf = false,
            _ => {}
        }
        if in_orf {
            orf.push(aa);
        }
    }

    Ok(Translation { full, orf })
}
