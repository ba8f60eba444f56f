// errtag-classify: Classify aligned edits and write M2.
//
// Reads JSON Lines records (one original sentence with its corrections and
// edit spans per line), labels every edit with its error type and writes
// one M2 block per record.
//
// Usage:
//   errtag-classify [-r RESOURCE_DIR] [-i INPUT] [-o OUTPUT] [--tally PATH]
//
// Options:
//   -r, --resource-dir PATH   Directory containing big.txt and hi-ptb-map
//   -i, --input PATH          Input JSON Lines file (default: stdin)
//   -o, --output PATH         Output M2 file (default: stdout)
//   --tally PATH              Write per-label edit counts as TSV
//   -h, --help                Print help

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;

use errtag_hi::HindiClassifier;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if errtag_cli::wants_help(&args) {
        println!("errtag-classify: Classify aligned edits and write M2.");
        println!();
        println!("Usage: errtag-classify [-r RESOURCE_DIR] [-i INPUT] [-o OUTPUT] [--tally PATH]");
        println!();
        println!("Reads JSON Lines records, one per line:");
        println!("  {{\"orig\": [TOKEN...], \"cors\": [{{\"toks\": [TOKEN...], \"edits\": [[o_start, o_end, c_start, c_end]...]}}]}}");
        println!("and writes one M2 block per record.");
        println!();
        println!("Options:");
        println!("  -r, --resource-dir PATH   Directory containing big.txt and hi-ptb-map");
        println!("  -i, --input PATH          Input JSON Lines file (default: stdin)");
        println!("  -o, --output PATH         Output M2 file (default: stdout)");
        println!("  --tally PATH              Write per-label edit counts as TSV");
        println!("  -h, --help                Print this help");
        println!();
        println!("Set RUST_LOG=errtag_hi=debug to log every classified edit to stderr.");
        return;
    }

    let (resource_dir, args) = errtag_cli::parse_resource_dir(&args);
    let (input_path, args) = errtag_cli::parse_option(&args, "--input", "-i");
    let (output_path, args) = errtag_cli::parse_option(&args, "--output", "-o");
    let (tally_path, args) = errtag_cli::parse_option(&args, "--tally", "--tally");
    if let Some(arg) = args.first() {
        errtag_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    errtag_cli::init_logging();

    let resources = errtag_cli::load_resources(resource_dir.as_deref())
        .unwrap_or_else(|e| errtag_cli::fatal(&e));
    let classifier = HindiClassifier::new(Arc::new(resources));

    let input: Box<dyn BufRead> = match &input_path {
        Some(path) => {
            let file = File::open(path)
                .unwrap_or_else(|e| errtag_cli::fatal(&format!("failed to open {path}: {e}")));
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &output_path {
        Some(path) => {
            let file = File::create(path)
                .unwrap_or_else(|e| errtag_cli::fatal(&format!("failed to create {path}: {e}")));
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(output);

    let tally = errtag_cli::input::process_input(input, &mut out, &classifier)
        .unwrap_or_else(|e| errtag_cli::fatal(&e.to_string()));
    if let Err(e) = out.flush() {
        errtag_cli::fatal(&format!("failed to write output: {e}"));
    }

    if let Some(path) = tally_path {
        let file = File::create(&path)
            .unwrap_or_else(|e| errtag_cli::fatal(&format!("failed to create {path}: {e}")));
        let mut tally_out = BufWriter::new(file);
        if let Err(e) = tally.write_tsv(&mut tally_out).and_then(|()| tally_out.flush()) {
            errtag_cli::fatal(&format!("failed to write {path}: {e}"));
        }
    }
}
