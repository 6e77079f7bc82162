//! 演示如何在 library 模式下使用 seqscan。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_search
//! ```

use seqscan::assembly::{graph, overlap, AssemblyOpt};
use seqscan::index::{kmer, sa};
use seqscan::matching::{all_matchers, Matcher};

fn main() {
    // 1. 参考序列
    let text = b"GCTACGATCTAGAATCTAGCTAGCTGATCGTAG";
    println!("文本: {}", String::from_utf8_lossy(text));
    println!("长度: {} bp", text.len());

    // 2. 三种精确匹配
    let pattern = b"TCTAG";
    for m in all_matchers() {
        println!("{:>12}: first={:?} all={:?}", m.name(), m.find(text, pattern), m.find_all(text, pattern));
    }

    // 3. k-mer 索引
    let idx = kmer::build_kmer_index(text, 4);
    println!("\nk-mer 索引：k={}，{} 项，{} 种不同 k-mer", idx.k(), idx.len(), idx.distinct_kmers());
    match kmer::query_kmer_index(text, pattern, &idx) {
        Ok(hits) => println!("查询 '{}': {:?}", String::from_utf8_lossy(pattern), hits),
        Err(e) => println!("查询失败: {}", e),
    }

    // 4. 后缀数组
    let sa_arr = sa::SuffixArray::build(text);
    println!("\n后缀数组前 8 项: {:?}", &sa_arr.positions()[..8]);
    match sa_arr.search(text, b"CTA") {
        Ok(hits) => println!("经后缀数组查找 'CTA': {:?}", hits),
        Err(e) => println!("查找失败: {}", e),
    }

    // 5. 重叠与贪心组装
    let reads: Vec<Vec<u8>> = vec![
        b"ATTAGACCTG".to_vec(),
        b"CCTGCCGGAA".to_vec(),
        b"AGACCTGCCG".to_vec(),
        b"GCCGGAATAC".to_vec(),
    ];
    let ov = overlap::compute_overlap(&reads[0], &reads[2], overlap::DEFAULT_MIN_OVERLAP);
    println!("\nread0/read2 重叠: {} ({})", ov.length, String::from_utf8_lossy(&ov.sequence));

    let opt = AssemblyOpt::default();
    let named: Vec<(String, Vec<u8>)> = reads.iter().enumerate().map(|(i, r)| (i.to_string(), r.clone())).collect();
    let g = match graph::build_overlap_graph(&named, &opt) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("构建重叠图失败: {}", e);
            return;
        }
    };
    let path = graph::greedy_path(&g);
    match graph::assemble(&named, &path, &g) {
        Ok(contig) => println!("路径 {:?} -> {}", path, String::from_utf8_lossy(&contig)),
        Err(e) => eprintln!("组装失败: {}", e),
    }

    println!("\n完成！");
}
