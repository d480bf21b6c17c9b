//! Drives a deployed `solotto` program through a real RPC endpoint.
//!
//! The provider is configured from the same environment `anchor test`
//! exports: `ANCHOR_PROVIDER_URL` for the cluster and `ANCHOR_WALLET` for the
//! path to the signer keypair.

use std::sync::Arc;

use anchor_client::{
    solana_sdk::{
        account::Account,
        commitment_config::CommitmentConfig,
        program_error::ProgramError,
        program_pack::Pack,
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair, Signature, Signer},
        system_instruction, system_program,
    },
    Client, ClientError, Cluster, Program,
};
use anchor_spl::token::spl_token;

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";

/// Lamports handed to the fresh authority; covers the state account rent.
const AUTHORITY_FUNDING: u64 = 100_000_000;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("invalid cluster url {url}: {reason}")]
    InvalidCluster { url: String, reason: String },
    #[error("failed to read keypair from {path}: {reason}")]
    Keypair { path: String, reason: String },
    #[error("program {0} is not deployed on the cluster")]
    ProgramNotDeployed(Pubkey),
    #[error("failed to build instruction: {0}")]
    Instruction(#[from] ProgramError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type Result<T, E = HarnessError> = std::result::Result<T, E>;

/// How to reach a cluster and who signs.
pub struct Provider {
    cluster: Cluster,
    payer: Arc<Keypair>,
}

impl Provider {
    pub fn new(cluster: Cluster, payer: Keypair) -> Self {
        Self {
            cluster,
            payer: Arc::new(payer),
        }
    }

    pub fn env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup(PROVIDER_URL_ENV).ok_or(HarnessError::MissingEnv(PROVIDER_URL_ENV))?;
        let wallet = lookup(WALLET_ENV).ok_or(HarnessError::MissingEnv(WALLET_ENV))?;

        let cluster = url
            .parse::<Cluster>()
            .map_err(|e| HarnessError::InvalidCluster {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        let payer = read_keypair_file(&wallet).map_err(|e| HarnessError::Keypair {
            path: wallet.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self::new(cluster, payer))
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Resolves a handle to `program_id`, failing when no executable account
    /// exists at that address.
    pub fn program(&self, program_id: Pubkey) -> Result<Program<Arc<Keypair>>> {
        let client = Client::new_with_options(
            self.cluster.clone(),
            self.payer.clone(),
            CommitmentConfig::confirmed(),
        );
        let program = client.program(program_id)?;

        let account = program
            .rpc()
            .get_account_with_commitment(&program_id, CommitmentConfig::confirmed())
            .map_err(ClientError::from)?
            .value;
        ensure_deployed(program_id, account.as_ref())?;
        Ok(program)
    }
}

/// Accepts only an executable account fetched for `program_id`.
pub fn ensure_deployed(program_id: Pubkey, account: Option<&Account>) -> Result<()> {
    match account {
        Some(account) if account.executable => Ok(()),
        _ => Err(HarnessError::ProgramNotDeployed(program_id)),
    }
}

/// Creates a mint and a funded authority, then calls `initialize` for them.
///
/// A fresh authority keeps the state PDA unused, so the call can be repeated
/// against a long-lived cluster.
pub fn initialize(program: &Program<Arc<Keypair>>) -> Result<Signature> {
    let payer = program.payer();
    let mint = Keypair::new();
    let authority = Keypair::new();

    let mint_rent = program
        .rpc()
        .get_minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN)
        .map_err(ClientError::from)?;

    let signature = program
        .request()
        .instruction(system_instruction::create_account(
            &payer,
            &mint.pubkey(),
            mint_rent,
            spl_token::state::Mint::LEN as u64,
            &spl_token::ID,
        ))
        .instruction(spl_token::instruction::initialize_mint2(
            &spl_token::ID,
            &mint.pubkey(),
            &authority.pubkey(),
            None,
            0,
        )?)
        .instruction(system_instruction::transfer(
            &payer,
            &authority.pubkey(),
            AUTHORITY_FUNDING,
        ))
        .accounts(solotto::accounts::Initialize {
            solotto: state_address(&authority.pubkey()),
            authority: authority.pubkey(),
            mint: mint.pubkey(),
            system_program: system_program::ID,
        })
        .args(solotto::instruction::Initialize {})
        .signer(&mint)
        .signer(&authority)
        .send()?;

    Ok(signature)
}

pub fn state_address(authority: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[solotto::SOLOTTO_SEED, authority.as_ref()], &solotto::ID).0
}

/// Provider from the environment, program by id, one `initialize` call.
pub fn run_initialization_test() -> Result<Signature> {
    let provider = Provider::env()?;
    run_initialization(&provider)
}

pub fn run_initialization(provider: &Provider) -> Result<Signature> {
    let program = provider.program(solotto::ID)?;
    let signature = initialize(&program)?;
    println!("Your transaction signature {}", signature);
    Ok(signature)
}
