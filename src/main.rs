use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use seqscan::assembly::{self, graph, overlap};
use seqscan::index::{kmer, sa};
use seqscan::io::fasta::{self, SeqRecord};
use seqscan::matching::{BadCharacter, BoyerMoore, Matcher, Naive};
use seqscan::util::{codon, dna};

#[derive(Parser, Debug)]
#[command(name = "seqscan", author, version, about = "Exact matching and indexing for DNA/peptide sequences", arg_required_else_help = true)]
struct Cli {
    /// -v: info, -vv: debug (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Emit results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Sequence source: a FASTA file or a literal sequence.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// FASTA file
    fasta: Option<String>,
    /// Literal sequence (uppercased before use)
    #[arg(long)]
    seq: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algo {
    Naive,
    BadChar,
    BoyerMoore,
}

impl Algo {
    fn matcher(self) -> &'static dyn Matcher {
        match self {
            Algo::Naive => &Naive,
            Algo::BadChar => &BadCharacter,
            Algo::BoyerMoore => &BoyerMoore,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Exact pattern search in every input sequence
    Find {
        #[command(flatten)]
        input: Input,
        #[arg(short, long)]
        pattern: String,
        #[arg(short, long, value_enum, default_value_t = Algo::BadChar)]
        algo: Algo,
        /// Report every occurrence instead of the first one
        #[arg(long)]
        all: bool,
    },
    /// Build a sorted k-mer index of the first FASTA record
    Index {
        fasta: String,
        #[arg(short, long)]
        k: usize,
        /// Output prefix; the index is written to <prefix>.kmi
        #[arg(short, long, default_value = "ref")]
        output: String,
    },
    /// Query a k-mer index built by `index`
    Query {
        fasta: String,
        #[arg(short = 'i', long = "index")]
        index: String,
        #[arg(short, long)]
        pattern: String,
    },
    /// Suffix array of the first input sequence
    SuffixArray {
        #[command(flatten)]
        input: Input,
        /// Print suffix / position / rank rows in text order
        #[arg(long)]
        table: bool,
    },
    /// Longest suffix(A) / prefix(B) overlap
    Overlap {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(short, long = "min-length", default_value_t = overlap::DEFAULT_MIN_OVERLAP)]
        min_length: usize,
    },
    /// Greedy overlap-graph assembly of FASTA reads
    Assemble {
        fasta: String,
        #[arg(short, long = "min-overlap", default_value_t = overlap::DEFAULT_MIN_OVERLAP)]
        min_overlap: usize,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Translate DNA (frame 0) and extract the ORF residues
    Translate {
        #[command(flatten)]
        input: Input,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json = cli.json;
    match cli.command {
        Commands::Find { input, pattern, algo, all } => run_find(&input, &pattern, algo, all, json),
        Commands::Index { fasta, k, output } => run_index(&fasta, k, &output),
        Commands::Query { fasta, index, pattern } => run_query(&fasta, &index, &pattern, json),
        Commands::SuffixArray { input, table } => run_suffix_array(&input, table, json),
        Commands::Overlap { a, b, min_length } => run_overlap(&a, &b, min_length, json),
        Commands::Assemble { fasta, min_overlap, threads } => {
            run_assemble(&fasta, assembly::AssemblyOpt { min_overlap, threads }, json)
        }
        Commands::Translate { input } => run_translate(&input, json),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_fasta(path: &str) -> Result<Vec<SeqRecord>> {
    let recs = fasta::read_records(path).with_context(|| format!("cannot read FASTA '{}'", path))?;
    if recs.is_empty() {
        bail!("FASTA file '{}' contains no sequences", path);
    }
    log::info!("loaded {} sequence(s) from {}", recs.len(), path);
    Ok(recs)
}

fn load_input(input: &Input) -> Result<Vec<SeqRecord>> {
    if let Some(seq) = &input.seq {
        return Ok(vec![SeqRecord { id: "seq".to_string(), desc: None, seq: dna::normalize_seq(seq.as_bytes()) }]);
    }
    let path = input.fasta.as_deref().ok_or_else(|| anyhow!("no input sequence given"))?;
    load_fasta(path)
}

fn first_record(mut recs: Vec<SeqRecord>, what: &str) -> SeqRecord {
    if recs.len() > 1 {
        log::warn!("{}: using only the first of {} sequences ('{}')", what, recs.len(), recs[0].id);
    }
    recs.swap_remove(0)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct FindReport<'a> {
    id: &'a str,
    algorithm: &'static str,
    positions: Vec<usize>,
}

fn run_find(input: &Input, pattern: &str, algo: Algo, all: bool, json: bool) -> Result<()> {
    let recs = load_input(input)?;
    let pattern = dna::normalize_seq(pattern.as_bytes());
    let m = algo.matcher();

    let reports: Vec<FindReport> = recs
        .iter()
        .map(|rec| {
            let positions = if all {
                m.find_all(&rec.seq, &pattern)
            } else {
                m.find(&rec.seq, &pattern).into_iter().collect()
            };
            FindReport { id: &rec.id, algorithm: m.name(), positions }
        })
        .collect();

    if json {
        return print_json(&reports);
    }
    for r in &reports {
        if r.positions.is_empty() {
            println!("{}\tnot found", r.id);
        } else {
            let joined: Vec<String> = r.positions.iter().map(ToString::to_string).collect();
            println!("{}\t{}", r.id, joined.join(","));
        }
    }
    Ok(())
}

fn run_index(fasta_path: &str, k: usize, output: &str) -> Result<()> {
    let rec = first_record(load_fasta(fasta_path)?, "index");
    let mut idx = kmer::KmerIndex::try_build(&rec.seq, k)
        .with_context(|| format!("cannot index '{}'", rec.id))?;
    idx.set_meta(kmer::IndexMeta {
        source_file: Some(fasta_path.to_string()),
        build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
        build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
    });

    println!("sequence: {}", rec.id);
    println!("length: {}", rec.seq.len());
    println!("k: {}", idx.k());
    println!("entries: {}", idx.len());
    println!("distinct k-mers: {}", idx.distinct_kmers());

    let out_path = format!("{}.kmi", output);
    idx.save_to_file(&out_path)
        .with_context(|| format!("cannot write index to '{}'", out_path))?;
    println!("k-mer index saved: {}", out_path);
    Ok(())
}

fn run_query(fasta_path: &str, index_path: &str, pattern: &str, json: bool) -> Result<()> {
    let idx = kmer::KmerIndex::load_from_file(index_path)
        .with_context(|| format!("cannot load index '{}'", index_path))?;
    let rec = first_record(load_fasta(fasta_path)?, "query");
    let pattern = dna::normalize_seq(pattern.as_bytes());
    let positions = idx.query(&rec.seq, &pattern)?;

    if json {
        return print_json(&FindReport { id: &rec.id, algorithm: "kmer-index", positions });
    }
    println!("offsets: {:?}", positions);
    Ok(())
}

fn run_suffix_array(input: &Input, table: bool, json: bool) -> Result<()> {
    let rec = first_record(load_input(input)?, "suffix-array");
    let sa_arr = sa::SuffixArray::build(&rec.seq);
    if table {
        let rows = sa_arr.rows(&rec.seq)?;
        if json {
            return print_json(&rows);
        }
        println!("position\trank\tsuffix");
        for r in &rows {
            println!("{}\t{}\t{}", r.position, r.rank, r.suffix);
        }
        return Ok(());
    }
    if json {
        return print_json(&sa_arr);
    }
    println!("{:?}", sa_arr.positions());
    Ok(())
}

fn run_overlap(a: &str, b: &str, min_length: usize, json: bool) -> Result<()> {
    let a = dna::normalize_seq(a.as_bytes());
    let b = dna::normalize_seq(b.as_bytes());
    let ov = overlap::compute_overlap(&a, &b, min_length);
    if json {
        return print_json(&ov);
    }
    println!("{}\t{}", ov.length, String::from_utf8_lossy(&ov.sequence));
    Ok(())
}

#[derive(Serialize)]
struct AssemblyReport<'a> {
    stats: graph::GraphStats,
    path: &'a [String],
    edges: &'a [graph::OverlapEdge],
    contig: String,
}

fn run_assemble(fasta_path: &str, opt: assembly::AssemblyOpt, json: bool) -> Result<()> {
    let recs = load_fasta(fasta_path)?;
    let reads: Vec<(String, Vec<u8>)> = recs.into_iter().map(|r| (r.id, r.seq)).collect();

    let g = graph::build_overlap_graph(&reads, &opt)?;
    let path = graph::greedy_path(&g);
    let contig = graph::assemble(&reads, &path, &g)?;
    let stats = graph::graph_stats(&g);

    if json {
        return print_json(&AssemblyReport {
            stats,
            path: &path,
            edges: g.edges(),
            contig: String::from_utf8_lossy(&contig).into_owned(),
        });
    }
    println!("nodes: {}", stats.nodes);
    println!("edges: {}", stats.edges);
    println!("overlap avg/min/max: {:.2}/{}/{}", stats.avg_overlap, stats.min_overlap, stats.max_overlap);
    println!("density: {:.4}", stats.density);
    println!("path: {}", path.join(" -> "));
    println!(">contig len={}", contig.len());
    println!("{}", String::from_utf8_lossy(&contig));
    Ok(())
}

fn run_translate(input: &Input, json: bool) -> Result<()> {
    let recs = load_input(input)?;
    let mut out = Vec::with_capacity(recs.len());
    for rec in &recs {
        let t = codon::translate(&rec.seq).with_context(|| format!("cannot translate '{}'", rec.id))?;
        out.push((rec.id.as_str(), t));
    }
    if json {
        return print_json(&out);
    }
    for (id, t) in &out {
        println!(">{} full", id);
        println!("{}", String::from_utf8_lossy(&t.full));
        println!(">{} orf", id);
        println!("{}", String::from_utf8_lossy(&t.orf));
    }
    Ok(())
}
