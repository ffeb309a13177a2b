use clap::Parser;
use std::io::{self, Read, Write};
use std::process;

#[derive(Parser)]
#[command(
    name = "pandoc-quotenote",
    about = "Pandoc JSON filter that tags quote divs for note styling"
)]
struct Cli {
    /// Target output format passed by pandoc (accepted, unused)
    format: Option<String>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    // the shipped rule does not vary by target format
    let _ = cli.format;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| die(&format!("cannot read stdin: {}", e)));

    let result = pandoc_quotenote::filter_str(&input).unwrap_or_else(|e| die(&e.to_string()));

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(result.as_bytes())
        .and_then(|_| handle.write_all(b"\n"))
        .unwrap_or_else(|e| die(&format!("cannot write stdout: {}", e)));
}
