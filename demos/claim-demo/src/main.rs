use anyhow::{Context, Result};
use claims::{parse_aptos_address, parse_evm_address, parse_sui_address, ClaimInfo, Distribution, Identity};
use ed25519_dalek::{Signer as _, SigningKey};
use rand_core::OsRng;
use signatures::{attest_discord, normalize_solana, SolanaSignResponse};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Claim Demo: root, proofs, signed messages ===\n");

    // A claimant with a Solana wallet; also the recipient of the Discord claim.
    let claimant = SigningKey::generate(&mut OsRng);
    let claimant_pubkey = claimant.verifying_key().to_bytes();

    // 1. Finalize the distribution and commit it.
    let distribution = Distribution::new(vec![
        ClaimInfo::new(
            Identity::Cosmwasm {
                address: "osmo1qnk2n4nlkpw9xfqntladh74w6ujtulwnmxnh3k".into(),
            },
            4000,
        ),
        ClaimInfo::new(Identity::Discord { username: "johndoe#8997".into() }, 1000),
        ClaimInfo::new(Identity::Solana { pubkey: claimant_pubkey }, 1000),
        ClaimInfo::new(
            Identity::Evm {
                address: parse_evm_address("0xf0e161bbd93ed9818cd3805e1b75f4a2d1a23d86")?,
            },
            2000,
        ),
        ClaimInfo::new(
            Identity::Aptos {
                address: parse_aptos_address(
                    "0x7e223eac9d2e8db1a2c4f4a1b85ccb9a3d8845b28d5e9e8d1cf9f2f0b7a6c4d3",
                )?,
            },
            3000,
        ),
        ClaimInfo::new(
            Identity::Sui {
                address: parse_sui_address(
                    "0x91c5b1e8c9ad5e9f7a2b4c6d8e0f1a3b5c7d9e0f2a4b6c8da1b3c5d7e9f0a2b4",
                )?,
            },
            5000,
        ),
    ]);

    info!(claims = distribution.claims().len(), depth = distribution.tree().depth(), "distribution finalized");
    println!("--- Distribution ---");
    println!("Merkle root: 0x{}", distribution.root_hex());

    // 2. Export the full proof table, as served per claimant from storage.
    println!("\n--- Proof table ---");
    for (claim, proof) in distribution.all_proofs() {
        println!(
            "  amount {:>5}  proof ({} bytes): {}",
            claim.amount,
            proof.to_bytes().len(),
            proof.to_hex()
        );
        assert!(proof.verify(distribution.root(), &claim.to_leaf()));
    }
    println!("All proofs verified against the root.");

    // 3. Claimant proves ownership of the Solana identity.
    println!("\n--- Signed messages ---");
    let payload = format!("claim tokens to {}", hex::encode(claimant_pubkey));
    let signature = claimant.sign(payload.as_bytes());
    let response = SolanaSignResponse {
        pubkey: Some(claimant_pubkey),
        signature: Some(signature.to_bytes().to_vec()),
        payload,
    };
    let solana_msg = normalize_solana(&response)?.context("wallet was connected")?;
    solana_msg.verify_ed25519()?;
    println!(
        "Solana self-signature OK (pubkey {})",
        hex::encode(&solana_msg.public_key)
    );

    // 4. Server attests the Discord identity with the dispenser guard key.
    let guard = SigningKey::generate(&mut OsRng);
    let discord_msg = attest_discord(&guard, "johndoe#8997", &claimant_pubkey);
    discord_msg.verify_ed25519()?;
    println!(
        "Discord attestation OK (guard {})",
        hex::encode(&discord_msg.public_key)
    );

    Ok(())
}
