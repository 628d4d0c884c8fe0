// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! genoscore CLI
//!
//! Offline SNP scoring: reads the same `{"snps": [...]}` body the web service
//! accepts and prints the `{"results": [...]}` response.

use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use genoscore::{analyze, AnalyzeRequest, HeuristicModel};

#[derive(Parser)]
#[command(name = "genoscore")]
#[command(author, version, about = "SNP pathogenicity scoring")]
#[command(long_about = "Score SNP records with the heuristic pathogenicity model.

Examples:
  genoscore score -i snps.json
  echo '{\"snps\": [{\"rsId\": \"rs1\", \"chromosome\": \"1\", \"position\": 500, \"genotype\": \"AG\"}]}' | genoscore score")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score SNP records from a JSON request body
    Score {
        /// Input JSON file (reads stdin when omitted or "-")
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn read_input(input: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path),
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { input, pretty } => {
            let body = read_input(input.as_ref())?;
            let request = AnalyzeRequest::from_slice(&body)?;
            let response = analyze(&HeuristicModel, request).await;

            let failed = response.failed_count();
            if failed > 0 {
                tracing::warn!(
                    "{} of {} records could not be scored",
                    failed,
                    response.results.len()
                );
            }

            let stdout = io::stdout();
            let mut out = stdout.lock();
            if pretty {
                serde_json::to_writer_pretty(&mut out, &response)?;
            } else {
                serde_json::to_writer(&mut out, &response)?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}
