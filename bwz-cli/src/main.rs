//! BWZ CLI - BWT + LZW file compressor
//!
//! Compresses files through a Burrows-Wheeler Transform followed by
//! adaptive-dictionary LZW coding, and decompresses them back.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension for compressed output.
const SUFFIX: &str = "bwz";

#[derive(Parser)]
#[command(name = "bwz")]
#[command(author, version, about = "BWZ - BWT + LZW file compressor")]
#[command(long_about = "
BWZ compresses files with a Burrows-Wheeler Transform composed with
adaptive-dictionary LZW coding.

Examples:
  bwz compress notes.txt
  bwz compress notes.txt --raw
  bwz decompress notes.txt.bwz
  bwz decompress archive.bwz -o restored.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        file: PathBuf,

        /// Output path (defaults to <file>.bwz)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the Burrows-Wheeler stage (plain LZW)
        #[arg(long)]
        raw: bool,
    },

    /// Decompress a .bwz file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        file: PathBuf,

        /// Output path (defaults to the input without its .bwz suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// The file was compressed with --raw
        #[arg(long)]
        raw: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { file, output, raw } => cmd_compress(&file, output, raw),
        Commands::Decompress { file, output, raw } => cmd_decompress(&file, output, raw),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(file: &Path, output: Option<PathBuf>, raw: bool) -> Result<(), Box<dyn Error>> {
    let data = fs::read(file)?;
    if data.is_empty() {
        return Err("cannot compress an empty file".into());
    }

    let plain = bwz_lzw::compress(&data)?;
    let composed = bwz_lzw::compress_with_bwt(&data)?;

    println!(
        "Compression ratio without BWT: {:.3}",
        data.len() as f64 / plain.len() as f64
    );
    println!(
        "Compression ratio with BWT:    {:.3}",
        data.len() as f64 / composed.len() as f64
    );

    let compressed = if raw { plain } else { composed };
    let output = output.unwrap_or_else(|| compressed_path(file));
    fs::write(&output, &compressed)?;

    println!(
        "Wrote {} ({} -> {} bytes)",
        output.display(),
        data.len(),
        compressed.len()
    );
    Ok(())
}

fn cmd_decompress(file: &Path, output: Option<PathBuf>, raw: bool) -> Result<(), Box<dyn Error>> {
    let data = fs::read(file)?;
    if data.is_empty() {
        return Err("cannot decompress an empty file".into());
    }

    let decompressed = if raw {
        bwz_lzw::decompress(&data)?
    } else {
        bwz_lzw::decompress_with_bwt(&data)?
    };

    let output = match output {
        Some(path) => path,
        None => {
            if file.extension().and_then(|e| e.to_str()) != Some(SUFFIX) {
                return Err(format!(
                    "input file does not end in .{}; use --output",
                    SUFFIX
                )
                .into());
            }
            file.with_extension("")
        }
    };

    fs::write(&output, &decompressed)?;

    println!(
        "Wrote {} ({} -> {} bytes)",
        output.display(),
        data.len(),
        decompressed.len()
    );
    Ok(())
}

/// Default compressed path: the input with `.bwz` appended.
fn compressed_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(".");
    name.push(SUFFIX);
    PathBuf::from(name)
}
