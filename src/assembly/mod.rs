//! 读段重叠检测与基于重叠图的贪心组装。

pub mod graph;
pub mod overlap;

/// 组装参数。
#[derive(Debug, Clone, Copy)]
pub struct AssemblyOpt {
    /// 成边所需的最短重叠，0 视为 1
    pub min_overlap: usize,
    /// 大于 1 时用 rayon 线程池并行计算两两重叠
    pub threads: usize,
}

impl Default for AssemblyOpt {
    fn default() -> Self {
        Self { min_overlap: overlap::DEFAULT_MIN_OVERLAP, threads: 1 }
    }
}
