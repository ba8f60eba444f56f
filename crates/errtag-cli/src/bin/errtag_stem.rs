// errtag-stem: Stem words from stdin.
//
// Reads words in WX transliteration from stdin (one per line) and prints
// each with its stem:
//   word<TAB>stem
//   word<TAB>-      (no known suffix)
//
// Usage:
//   errtag-stem
//
// Options:
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

use errtag_hi::hindi::stemmer::HindiStemmer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if errtag_cli::wants_help(&args) {
        println!("errtag-stem: Stem words from stdin.");
        println!();
        println!("Usage: errtag-stem");
        println!();
        println!("Reads WX-transliterated words from stdin (one per line). Prints:");
        println!("  word<TAB>stem");
        println!("  word<TAB>-      (no known suffix)");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }
    if let Some(arg) = args.first() {
        errtag_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    let stemmer = HindiStemmer::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let stem = stemmer.stem(word).unwrap_or("-");
        let _ = writeln!(out, "{word}\t{stem}");
    }
}
