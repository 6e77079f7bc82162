pub mod codon;
pub mod dna;

use serde::Serializer;

/// 序列以字节保存，序列化为 JSON 时输出为字符串。
pub(crate) fn serialize_seq<S: Serializer>(seq: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&String::from_utf8_lossy(seq))
}
