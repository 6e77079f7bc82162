use thiserror::Error;

/// 库层错误类型。未找到匹配不是错误，用 `Option::None` 表示。
#[derive(Error, Debug)]
pub enum SeqError {
    /// k 为 0 或超过文本长度
    #[error("invalid k-mer length {k} for text of length {text_len}")]
    InvalidKmerLength { k: usize, text_len: usize },

    /// 查询模式短于索引的 k
    #[error("pattern of length {pattern_len} is shorter than index k={k}")]
    PatternTooShort { pattern_len: usize, k: usize },

    /// 查询文本与建索引时的文本长度不一致
    #[error("index was built over a text of length {expected}, got {actual}")]
    TextMismatch { expected: usize, actual: usize },

    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("invalid codon '{codon}' at position {position}")]
    InvalidCodon { codon: String, position: usize },

    #[error("unknown sequence id '{0}'")]
    UnknownNode(String),

    /// 组装时目标序列与建图时记录的重叠不一致
    #[error("sequence '{target}' does not start with its recorded overlap from '{source_id}'")]
    OverlapMismatch { source_id: String, target: String },

    #[error("duplicate sequence id '{0}'")]
    DuplicateNode(String),

    #[error("cannot build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index encoding error: {0}")]
    Encode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, SeqError>;
