use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use serde::Serialize;

use super::overlap::compute_overlap;
use super::AssemblyOpt;
use crate::error::{Result, SeqError};

/// 重叠图中的一条有向边：`source` 的后缀与 `target` 的前缀重叠。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapEdge {
    pub source: String,
    pub target: String,
    pub length: usize,
    #[serde(serialize_with = "crate::util::serialize_seq")]
    pub overlap: Vec<u8>,
}

/// 有向重叠图。边按 (source, target) 的输入顺序排列，与线程数无关。
#[derive(Debug, Clone, Default, Serialize)]
pub struct OverlapGraph {
    nodes: Vec<String>,
    edges: Vec<OverlapEdge>,
    /// source id -> edges 中的下标
    #[serde(skip)]
    adjacency: HashMap<String, Vec<usize>>,
}

impl OverlapGraph {
    pub fn with_nodes(nodes: Vec<String>) -> Self {
        Self { nodes, edges: Vec::new(), adjacency: HashMap::new() }
    }

    pub fn add_edge(&mut self, edge: OverlapEdge) {
        self.adjacency.entry(edge.source.clone()).or_default().push(self.edges.len());
        self.edges.push(edge);
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> &[OverlapEdge] {
        &self.edges
    }

    pub fn outgoing<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a OverlapEdge> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&i| &self.edges[i])
    }

    /// 重叠最长的出边；长度相同时取先加入的。
    pub fn best_successor(&self, id: &str) -> Option<&OverlapEdge> {
        self.outgoing(id)
            .reduce(|best, e| if e.length > best.length { e } else { best })
    }

    /// `matrix[i][j]` 为 nodes[i] -> nodes[j] 的重叠长度，无边为 0。
    pub fn adjacency_matrix(&self) -> Vec<Vec<usize>> {
        let index: HashMap<&str, usize> =
            self.nodes.iter().enumerate().map(|(i, id)| (id.as_str(), i)).collect();
        let n = self.nodes.len();
        let mut matrix = vec![vec![0usize; n]; n];
        for e in &self.edges {
            if let (Some(&i), Some(&j)) = (index.get(e.source.as_str()), index.get(e.target.as_str())) {
                matrix[i][j] = e.length;
            }
        }
        matrix
    }
}

/// 对所有有序对 (a, b)，a ≠ b，若重叠长度不小于 `opt.min_overlap` 则加边。
/// id 必须唯一。
pub fn build_overlap_graph(sequences: &[(String, Vec<u8>)], opt: &AssemblyOpt) -> Result<OverlapGraph> {
    let mut seen = HashSet::with_capacity(sequences.len());
    for (id, _) in sequences {
        if !seen.insert(id.as_str()) {
            return Err(SeqError::DuplicateNode(id.clone()));
        }
    }

    let edges_from = |i: usize| -> Vec<OverlapEdge> {
        let (src_id, a) = &sequences[i];
        sequences
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .filter_map(|(_, (dst_id, b))| {
                let ov = compute_overlap(a, b, opt.min_overlap);
                if ov.is_empty() {
                    return None;
                }
                Some(OverlapEdge {
                    source: src_id.clone(),
                    target: dst_id.clone(),
                    length: ov.length,
                    overlap: ov.sequence,
                })
            })
            .collect()
    };

    let n = sequences.len();
    let per_source: Vec<Vec<OverlapEdge>> = if opt.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(opt.threads).build()?;
        pool.install(|| (0..n).into_par_iter().map(edges_from).collect())
    } else {
        (0..n).map(edges_from).collect()
    };

    let mut graph = OverlapGraph::with_nodes(sequences.iter().map(|(id, _)| id.clone()).collect());
    for edge in per_source.into_iter().flatten() {
        graph.add_edge(edge);
    }
    log::debug!(
        "overlap graph: {} nodes, {} edges (min_overlap={}, threads={})",
        graph.nodes.len(),
        graph.edges.len(),
        opt.min_overlap,
        opt.threads
    );
    Ok(graph)
}

/// 以 "0".."n-1" 作为 id。
pub fn build_overlap_graph_from_list(sequences: &[Vec<u8>], opt: &AssemblyOpt) -> Result<OverlapGraph> {
    let named: Vec<(String, Vec<u8>)> = sequences
        .iter()
        .enumerate()
        .map(|(i, s)| (i.to_string(), s.clone()))
        .collect();
    build_overlap_graph(&named, opt)
}

/// 从每个节点出发，沿未访问的最长重叠出边前进，返回最长的一条路径
/// （长度相同时取先找到的）。
pub fn greedy_path(graph: &OverlapGraph) -> Vec<String> {
    let mut best: Vec<String> = Vec::new();
    for start in &graph.nodes {
        let mut path = vec![start.clone()];
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(start.as_str());
        let mut current = start.as_str();

        loop {
            let next = graph
                .outgoing(current)
                .filter(|e| !visited.contains(e.target.as_str()))
                .reduce(|best, e| if e.length > best.length { e } else { best });
            let Some(edge) = next else { break };
            current = edge.target.as_str();
            visited.insert(current);
            path.push(edge.target.clone());
        }

        if path.len() > best.len() {
            best = path;
        }
    }
    best
}

/// 按路径拼接序列，每一步去掉与前一条序列重叠的部分；两节点间无边时整条追加。
///
/// `sequences` 必须是建图时的序列；目标序列不以边上记录的重叠开头时返回
/// [`SeqError::OverlapMismatch`]。
pub fn assemble(sequences: &[(String, Vec<u8>)], path: &[String], graph: &OverlapGraph) -> Result<Vec<u8>> {
    let by_id: HashMap<&str, &[u8]> = sequences.iter().map(|(id, s)| (id.as_str(), s.as_slice())).collect();
    let lookup = |id: &str| by_id.get(id).copied().ok_or_else(|| SeqError::UnknownNode(id.to_string()));

    let Some(first) = path.first() else {
        return Ok(Vec::new());
    };
    let mut out = lookup(first)?.to_vec();
    for pair in path.windows(2) {
        let (src, dst) = (&pair[0], &pair[1]);
        let seq = lookup(dst)?;
        let rest = match graph.outgoing(src).find(|e| &e.target == dst) {
            Some(e) if seq.starts_with(&e.overlap) => &seq[e.length..],
            Some(_) => {
                return Err(SeqError::OverlapMismatch { source_id: src.clone(), target: dst.clone() });
            }
            None => seq,
        };
        out.extend_from_slice(rest);
    }
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub avg_overlap: f64,
    pub max_overlap: usize,
    pub min_overlap: usize,
    /// 边数 / n(n-1)
    pub density: f64,
}

pub fn graph_stats(graph: &OverlapGraph) -> GraphStats {
    let n = graph.nodes.len();
    let m = graph.edges.len();
    let lengths = graph.edges.iter().map(|e| e.length);
    let possible = n * n.saturating_sub(1);
    GraphStats {
        nodes: n,
        edges: m,
        avg_overlap: if m == 0 { 0.0 } else { lengths.clone().sum::<usize>() as f64 / m as f64 },
        max_overlap: lengths.clone().max().unwrap_or(0),
        min_overlap: lengths.min().unwrap_or(0),
        density: if possible == 0 { 0.0 } else { m as f64 / possible as f64 },
    }
}
