//! `text-query`: index a text file and print the lines matching boolean word queries.
//!
//! ```text
//! text-query story.txt 'hair | Alice' '~(Daddy)' '"R&D" & "(draft)"'
//! ```
//!
//! Words containing whitespace or any of `~ & | ( ) "` are written in double quotes.
//!
//! With no queries, runs a fixed set of sample queries against the file.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;

use text_query::{parse_query, Query, TextIndex};

/// Index a text file and answer NOT (~) / AND (&) / OR (|) word queries against its lines
#[derive(Parser, Debug)]
#[command(name = "text-query")]
#[command(version, about, long_about = None)]
struct Args {
    /// File whose lines are indexed
    file: PathBuf,

    /// Queries to evaluate, e.g. 'hair & ~(Alice)'
    queries: Vec<String>,

    /// Print each result as a line of JSON
    #[arg(long)]
    json: bool,

    /// Log index and evaluation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn sample_queries() -> Vec<Query> {
    vec![Query::word("Daddy"),
         !Query::word("Alice"),
         Query::word("hair") | Query::word("Alice"),
         Query::word("hair") & Query::word("Alice"),
         Query::word("fiery") & Query::word("bird") | Query::word("wind")]
}

fn run(args: Args) -> text_query::Result<()> {
    let file = File::open(&args.file)?;
    let index = TextIndex::from_reader(BufReader::new(file))?;

    let queries = if args.queries.is_empty() {
        sample_queries()
    } else {
        args.queries.iter().map(|query| parse_query(query)).collect::<Result<Vec<_>, _>>()?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, query) in queries.iter().enumerate() {
        let result = query.eval(&index);
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            write!(out, "{}", result)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    if let Err(e) = run(args) {
        eprintln!("text-query: {}", e);
        process::exit(1);
    }
}
