//! `zkp generate` and `zkp prove`

use crate::{
    common::{ArgUtils, CliConfig},
    Result,
};
use clap::Args;
use groth_backend::{read_json, write_json, FixedConstantProver, LegacyProof};
use std::path::PathBuf;
use tracing::info;
use zk_system::{HasherKind, ProofBundle, ZkProofSystem};
use zkp_field::{FieldHasher, Fr};

/// Arguments of the fixed-constant `generate` command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Witness values (base-10 integers)
    #[arg(required = true)]
    pub witnesses: Vec<String>,

    /// Path to save the proof (defaults to the configured proof path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments of the pipeline `prove` command
#[derive(Debug, Args)]
pub struct ProveArgs {
    /// Witness values (base-10 field elements)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Secret bound into the commitment
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Bundle whose proof is chained into the new proof
    #[arg(short, long)]
    pub previous: Option<PathBuf>,

    /// JSON file of extra constraints appended after setup
    #[arg(short, long)]
    pub circuit: Option<PathBuf>,

    /// Path to save the bundle (defaults to the configured bundle path)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn handle_generate_command(args: GenerateArgs, config: &CliConfig) -> Result<LegacyProof> {
    let witnesses = ArgUtils::parse_witnesses(&args.witnesses)?;
    let prover = FixedConstantProver::<Fr>::from_file(&config.setup_path)?;
    let proof = prover.generate(&witnesses)?;

    let output = args.output.unwrap_or_else(|| config.proof_path.clone());
    proof.save(&output)?;
    println!("Proof saved to {}", output.display());
    Ok(proof)
}

pub fn handle_prove_command(args: ProveArgs, config: &CliConfig) -> Result<ProofBundle<Fr>> {
    match config.system.hasher {
        HasherKind::Poseidon => prove_with(config.system.poseidon_hasher::<Fr>()?, args, config),
        HasherKind::Blake2s => prove_with(config.system.blake2s_hasher::<Fr>(), args, config),
    }
}

fn prove_with<H: FieldHasher<Fr>>(hasher: H, args: ProveArgs, config: &CliConfig) -> Result<ProofBundle<Fr>> {
    let inputs = ArgUtils::parse_field_inputs::<Fr>(&args.inputs)?;
    let secret = args
        .secret
        .as_deref()
        .map(ArgUtils::parse_field_input::<Fr>)
        .transpose()?;
    let previous = match &args.previous {
        Some(path) => Some(read_json::<ProofBundle<Fr>>(path)?.proof),
        None => None,
    };

    let mut system = ZkProofSystem::<Fr, H>::new(hasher);
    system.setup_constraints(inputs.len())?;
    if let Some(circuit) = &args.circuit {
        ArgUtils::load_circuit(system.constraint_system_mut(), circuit)?;
    }

    let bundle = system.generate_proof(&inputs, secret, previous)?;

    let out = args.out.unwrap_or_else(|| config.bundle_path.clone());
    write_json(&bundle, &out)?;
    info!(path = %out.display(), depth = bundle.proof.depth(), "bundle written");
    println!("Proof bundle saved to {}", out.display());
    Ok(bundle)
}
