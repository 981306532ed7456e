//! onnx2ncnn CLI
//!
//! Converts an ONNX model file into an ncnn param/bin pair.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use onnx2ncnn::Converter;

/// Convert ONNX models to the ncnn param/bin format
#[derive(Parser, Debug)]
#[command(name = "onnx2ncnn")]
#[command(version)]
#[command(about = "Convert ONNX models to the ncnn param/bin format", long_about = None)]
struct Cli {
    /// Path to the input ONNX model
    input: PathBuf,

    /// Output param file path
    #[arg(default_value = "ncnn.param")]
    param: PathBuf,

    /// Output bin file path
    #[arg(default_value = "ncnn.bin")]
    bin: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stats = Converter::new()
        .convert_files(&cli.input, &cli.param, &cli.bin)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    eprintln!(
        "converted {} nodes into {} layers / {} blobs ({} fused)",
        stats.node_count, stats.layer_count, stats.blob_count, stats.reduced_node_count
    );

    Ok(())
}
