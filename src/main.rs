use totem::{Corpus, MinedKey, fingerprint, miner};

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

/// Memorable identifiers mined from hash collisions.
#[derive(Parser)]
#[command(name = "totem", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mine a single key at the default difficulty
    Create {
        /// Fingerprint prefix length the key must match (6-15)
        #[arg(long, default_value_t = miner::DEFAULT_DIFFICULTY)]
        difficulty: usize,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Corpus file (bundled corpus when unset)
        #[arg(long, env = "TOTEM_CORPUS")]
        corpus: Option<String>,
    },

    /// Mine keys until a quota is met
    Mine {
        /// Fingerprint prefix length the keys must match (6-15)
        difficulty: usize,
        /// Number of keys to mine
        #[arg(long, default_value_t = 1)]
        quota: usize,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
        /// Corpus file (bundled corpus when unset)
        #[arg(long, env = "TOTEM_CORPUS")]
        corpus: Option<String>,
    },

    /// Show the phrase for a key
    Animal {
        /// Candidate key
        key: String,
        /// Corpus file (bundled corpus when unset)
        #[arg(long, env = "TOTEM_CORPUS")]
        corpus: Option<String>,
    },

    /// Check whether a key is a memorable identifier
    Validate {
        /// Candidate key
        key: String,
        /// Corpus file (bundled corpus when unset)
        #[arg(long, env = "TOTEM_CORPUS")]
        corpus: Option<String>,
    },

    /// Show the difficulty of a key (0 when unrecognized)
    Difficulty {
        /// Candidate key
        key: String,
        /// Corpus file (bundled corpus when unset)
        #[arg(long, env = "TOTEM_CORPUS")]
        corpus: Option<String>,
    },

    /// Look up a fingerprint directly, without hashing
    Search {
        /// 32-character hex fingerprint
        fingerprint: String,
        /// Corpus file (bundled corpus when unset)
        #[arg(long, env = "TOTEM_CORPUS")]
        corpus: Option<String>,
    },
}

fn fail(msg: &str) -> ! {
    eprintln!("{} {msg}", "error:".red().bold());
    process::exit(1);
}

/// Resolve the corpus for a command: an explicit file wins, otherwise the
/// corpus compiled into the binary.
fn load_corpus(path: Option<&str>) -> Corpus {
    match path {
        Some(p) => match Corpus::load(Path::new(p)) {
            Ok(corpus) => corpus,
            Err(e) => fail(&e.to_string()),
        },
        None => Corpus::bundled().clone(),
    }
}

fn print_mined(result: &MinedKey) {
    println!("{}", result.pretty.bold());
    println!("  {} {}", "key".dimmed(), result.key);
    println!("  {} {}", "hash".dimmed(), result.hash);
    println!("  {} {}", "length".dimmed(), result.length);
}

fn cmd_create(difficulty: usize, json: bool, corpus_path: Option<&str>) {
    let corpus = load_corpus(corpus_path);
    let result = match miner::create(&corpus, difficulty) {
        Ok(r) => r,
        Err(e) => fail(&e.to_string()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        print_mined(&result);
    }
}

fn cmd_mine(difficulty: usize, quota: usize, json: bool, corpus_path: Option<&str>) {
    let corpus = load_corpus(corpus_path);
    let results = match miner::mine_until(&corpus, difficulty, quota) {
        Ok(r) => r,
        Err(e) => fail(&e.to_string()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results).unwrap());
    } else {
        for result in &results {
            print_mined(result);
        }
    }
}

fn cmd_animal(key: &str, corpus_path: Option<&str>) {
    let corpus = load_corpus(corpus_path);
    match totem::animal(&corpus, key) {
        Some(phrase) => println!("{phrase}"),
        None => fail("no corpus match for key"),
    }
}

fn cmd_validate(key: &str, corpus_path: Option<&str>) {
    let corpus = load_corpus(corpus_path);
    if totem::validate(&corpus, key) {
        println!("{}", "valid".green());
    } else {
        println!("{}", "invalid".red());
        process::exit(1);
    }
}

fn cmd_difficulty(key: &str, corpus_path: Option<&str>) {
    let corpus = load_corpus(corpus_path);
    println!("{}", totem::difficulty(&corpus, key));
}

fn cmd_search(fp: &str, corpus_path: Option<&str>) {
    if fp.len() != fingerprint::LEN || !fp.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    {
        fail("fingerprint must be 32 lowercase hex characters");
    }
    let corpus = load_corpus(corpus_path);
    match totem::search(&corpus, fp) {
        Some(phrase) => println!("{phrase}"),
        None => fail("no corpus match for fingerprint"),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Create {
            difficulty,
            json,
            corpus,
        } => cmd_create(difficulty, json, corpus.as_deref()),
        Command::Mine {
            difficulty,
            quota,
            json,
            corpus,
        } => cmd_mine(difficulty, quota, json, corpus.as_deref()),
        Command::Animal { key, corpus } => cmd_animal(&key, corpus.as_deref()),
        Command::Validate { key, corpus } => cmd_validate(&key, corpus.as_deref()),
        Command::Difficulty { key, corpus } => cmd_difficulty(&key, corpus.as_deref()),
        Command::Search { fingerprint, corpus } => cmd_search(&fingerprint, corpus.as_deref()),
    }
}
