//! `zkp` command-line tool

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zkp_cli::{
    common::ConfigUtils,
    prove::{handle_generate_command, handle_prove_command, GenerateArgs, ProveArgs},
    setup::{handle_setup_command, SetupArgs},
    verify::{
        handle_check_command, handle_pairing_check_command, handle_verify_command, CheckArgs,
        PairingCheckArgs, VerifyArgs,
    },
};

#[derive(Parser)]
#[command(name = "zkp")]
#[command(about = "R1CS/QAP witness-hash proofs and legacy proof tools")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the trusted setup of the fixed-constant variant
    Setup(SetupArgs),
    /// Generate a fixed-constant proof
    Generate(GenerateArgs),
    /// Verify a fixed-constant proof
    Verify(VerifyArgs),
    /// Prove knowledge of a witness with the hash pipeline
    Prove(ProveArgs),
    /// Verify a proof bundle against a witness
    Check(CheckArgs),
    /// Run the curve-equality check on hex-encoded values
    PairingCheck(PairingCheckArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ConfigUtils::load_or_default(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Command::Setup(args) => {
            handle_setup_command(args, &config).context("setup failed")?;
        }
        Command::Generate(args) => {
            handle_generate_command(args, &config).context("proof generation failed")?;
        }
        Command::Verify(args) => handle_verify_command(args, &config)?,
        Command::Prove(args) => {
            let bundle = handle_prove_command(args, &config).context("proof generation failed")?;
            println!("{}", bundle.to_json()?);
        }
        Command::Check(args) => handle_check_command(args, &config)?,
        Command::PairingCheck(args) => handle_pairing_check_command(args)?,
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
