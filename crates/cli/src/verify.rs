//! `zkp verify`, `zkp check` and `zkp pairing-check`

use crate::{
    common::{ArgUtils, CliConfig},
    CliError, Result,
};
use clap::Args;
use groth_backend::{read_json, CurveEqualityCheck, FixedConstantProver, HexTriple, LegacyProof};
use std::path::PathBuf;
use zk_system::{HasherKind, ProofBundle, ZkProofSystem};
use zkp_field::{BabyJubjub, FieldHasher, Fr};

/// Arguments of the fixed-constant `verify` command
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Witness values (base-10 integers)
    #[arg(required = true)]
    pub witnesses: Vec<String>,

    /// Proof to verify (defaults to the configured proof path)
    #[arg(short, long)]
    pub proof: Option<PathBuf>,
}

/// Arguments of the pipeline `check` command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Witness values (base-10 field elements)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Secret the bundle's commitment is checked against
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Bundle to verify (defaults to the configured bundle path)
    #[arg(short, long)]
    pub bundle: Option<PathBuf>,

    /// JSON file of extra constraints appended after setup
    #[arg(short, long)]
    pub circuit: Option<PathBuf>,
}

/// Arguments of the `pairing-check` command
#[derive(Debug, Args)]
pub struct PairingCheckArgs {
    /// JSON file with hex values {"A", "B", "C"}
    pub proof: PathBuf,

    /// JSON file with the hex verification key {"A", "B", "C"}
    pub vk: PathBuf,
}

pub fn handle_verify_command(args: VerifyArgs, config: &CliConfig) -> Result<()> {
    let witnesses = ArgUtils::parse_witnesses(&args.witnesses)?;
    let prover = FixedConstantProver::<Fr>::from_file(&config.setup_path)?;
    let proof_path = args.proof.unwrap_or_else(|| config.proof_path.clone());
    let proof = LegacyProof::load(&proof_path)?;

    if !prover.verify(&proof, &witnesses) {
        return Err(CliError::VerificationFailed(format!(
            "{} does not match the witnesses",
            proof_path.display()
        )));
    }
    println!("Proof is valid");
    Ok(())
}

pub fn handle_check_command(args: CheckArgs, config: &CliConfig) -> Result<()> {
    match config.system.hasher {
        HasherKind::Poseidon => check_with(config.system.poseidon_hasher::<Fr>()?, args, config),
        HasherKind::Blake2s => check_with(config.system.blake2s_hasher::<Fr>(), args, config),
    }
}

fn check_with<H: FieldHasher<Fr>>(hasher: H, args: CheckArgs, config: &CliConfig) -> Result<()> {
    let inputs = ArgUtils::parse_field_inputs::<Fr>(&args.inputs)?;
    let secret = args
        .secret
        .as_deref()
        .map(ArgUtils::parse_field_input::<Fr>)
        .transpose()?;
    let bundle_path = args.bundle.unwrap_or_else(|| config.bundle_path.clone());
    let bundle: ProofBundle<Fr> = read_json(&bundle_path)?;

    let mut system = ZkProofSystem::<Fr, H>::new(hasher);
    system.setup_constraints(inputs.len())?;
    if let Some(circuit) = &args.circuit {
        ArgUtils::load_circuit(system.constraint_system_mut(), circuit)?;
    }

    if !system.verify_proof(&bundle, &inputs, secret) {
        return Err(CliError::VerificationFailed(format!(
            "{} does not prove the given witness",
            bundle_path.display()
        )));
    }
    println!("Proof bundle is valid");
    Ok(())
}

pub fn handle_pairing_check_command(args: PairingCheckArgs) -> Result<()> {
    let proof: HexTriple = read_json(&args.proof)?;
    let vk: HexTriple = read_json(&args.vk)?;

    if !CurveEqualityCheck::new(BabyJubjub::new()).check(&proof, &vk) {
        return Err(CliError::VerificationFailed("curve equality check failed".to_string()));
    }
    println!("Curve equality check passed");
    Ok(())
}
