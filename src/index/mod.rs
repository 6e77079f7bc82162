pub mod kmer;
pub mod sa;
