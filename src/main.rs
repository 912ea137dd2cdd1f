use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lzw12::{DecodeOptions, Decompressor};

/// Decompress a file encoded with fixed-width 12-bit LZW.
#[derive(Debug, Parser)]
#[command(name = "lzw12", version, about)]
struct Cli {
    /// File to decompress
    file: PathBuf,

    /// Write the decoded bytes here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Fail on a dangling byte at the end of the input instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Abort if the decoded output grows past this many bytes
    #[arg(long, value_name = "BYTES")]
    max_output: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = DecodeOptions::new()
        .strict(cli.strict)
        .max_output(cli.max_output);

    let input = lzw12::open_input(&cli.file)?;

    eprintln!("Decompressing {} ...", cli.file.display());
    let decoded = Decompressor::new(options)
        .decompress(input)
        .with_context(|| format!("failed to decompress {}", cli.file.display()))?;
    eprintln!("decompression complete!");

    if decoded.stats.truncated {
        eprintln!("warning: dropped a dangling byte at the end of the input");
    }

    match &cli.output {
        Some(path) => fs::write(path, &decoded.data)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&decoded.data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
