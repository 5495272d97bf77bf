use claims::{
    parse_aptos_address, parse_evm_address, parse_sui_address, ClaimInfo, Distribution, Identity,
};
use merkle::HASH_LEN;

const COSMWASM_ADDR: &str = "osmo1qnk2n4nlkpw9xfqntladh74w6ujtulwnmxnh3k";
const DISCORD_USER: &str = "johndoe#8997";
const SOLANA_PUBKEY: &str = "3b8a2f5c117f669e4406fd36dcf405f0e9f1b2c4d85a7e6b9d0c3a1e5f708192";
const EVM_ADDRESS: &str = "0xf0e161bbd93ed9818cd3805e1b75f4a2d1a23d86";
const APTOS_ADDRESS: &str = "0x7e223eac9d2e8db1a2c4f4a1b85ccb9a3d8845b28d5e9e8d1cf9f2f0b7a6c4d3";
const SUI_ADDRESS: &str = "0x91c5b1e8c9ad5e9f7a2b4c6d8e0f1a3b5c7d9e0f2a4b6c8da1b3c5d7e9f0a2b4";

// Known-answer outputs for the six-claim distribution below. Any
// implementation sharing the leaf layout and hash function must reproduce
// these exactly.
const EXPECTED_ROOT: &str = "08906c07cc865611800944a263c9c50d852f1038";
const EXPECTED_PROOFS: [&str; 6] = [
    // cosmwasm
    "1287998b54ef298d34269027e633d2707255c25e54f1cc6197bbbf15bc91a36ce467d6bc19950a3751bd9c63098268e91318b182f69b78624ee6d6b2",
    // discord
    "543337271e77147b84697debf5b69ada8520b60e54f1cc6197bbbf15bc91a36ce467d6bc19950a3751bd9c63098268e91318b182f69b78624ee6d6b2",
    // solana
    "f5a8aed4259f1085963a532ced4e8b494005198f1797c3f05a721fbdebaa17a83587946fc623275c51bd9c63098268e91318b182f69b78624ee6d6b2",
    // evm
    "78d0aeded1f27380d6860d96aa6db6704f9543f31797c3f05a721fbdebaa17a83587946fc623275c51bd9c63098268e91318b182f69b78624ee6d6b2",
    // aptos
    "83a0de37d24bd67bab0a98cc824dd922b9257610a8a1180177cf30b2c0bebbb1adfe8f7985d051d2c514c7731b68317b121b1d4f2e6a166cabfe903a",
    // sui
    "201236c16095f90e8d7628037fbbcd67395247afa8a1180177cf30b2c0bebbb1adfe8f7985d051d2c514c7731b68317b121b1d4f2e6a166cabfe903a",
];

fn fixture_claims() -> Vec<ClaimInfo> {
    let mut solana_pubkey = [0u8; 32];
    hex::decode_to_slice(SOLANA_PUBKEY, &mut solana_pubkey).unwrap();

    vec![
        ClaimInfo::new(Identity::Cosmwasm { address: COSMWASM_ADDR.into() }, 4000),
        ClaimInfo::new(Identity::Discord { username: DISCORD_USER.into() }, 1000),
        ClaimInfo::new(Identity::Solana { pubkey: solana_pubkey }, 1000),
        ClaimInfo::new(
            Identity::Evm { address: parse_evm_address(EVM_ADDRESS).unwrap() },
            2000,
        ),
        ClaimInfo::new(
            Identity::Aptos { address: parse_aptos_address(APTOS_ADDRESS).unwrap() },
            3000,
        ),
        ClaimInfo::new(
            Identity::Sui { address: parse_sui_address(SUI_ADDRESS).unwrap() },
            5000,
        ),
    ]
}

#[test]
fn test_six_claim_known_root() {
    let dist = Distribution::new(fixture_claims());
    assert_eq!(dist.tree().depth(), 3);
    assert_eq!(dist.root_hex(), EXPECTED_ROOT);
}

#[test]
fn test_six_claim_known_proofs() {
    let dist = Distribution::new(fixture_claims());

    for (claim, expected) in dist.claims().iter().zip(EXPECTED_PROOFS) {
        let proof = dist.proof(claim).unwrap();
        assert_eq!(proof.to_hex(), expected);
        assert_eq!(proof.to_bytes().len(), 3 * HASH_LEN);
        assert!(proof.verify(dist.root(), &claim.to_leaf()));
    }
}

#[test]
fn test_all_proofs_matches_per_claim_lookup() {
    let dist = Distribution::new(fixture_claims());
    let table = dist.all_proofs();
    assert_eq!(table.len(), 6);

    for (claim, proof) in &table {
        assert_eq!(dist.proof(claim).unwrap(), *proof);
    }
}

#[test]
fn test_unknown_claim_has_no_proof() {
    let dist = Distribution::new(fixture_claims());
    let stranger = ClaimInfo::new(
        Identity::Discord { username: "someone_else".into() },
        1000,
    );
    assert!(dist.proof(&stranger).is_none());
}

#[test]
fn test_amount_is_part_of_the_leaf() {
    let dist = Distribution::new(fixture_claims());
    let mut claim = dist.claims()[1].clone();
    claim.amount += 1;
    assert!(dist.proof(&claim).is_none());
}

#[test]
fn test_evm_address_case_does_not_change_root() {
    let lower = Distribution::new(fixture_claims());

    let mut shouting = fixture_claims();
    shouting[3].identity = Identity::Evm {
        address: parse_evm_address(&EVM_ADDRESS.to_uppercase().replace("0X", "0x")).unwrap(),
    };
    let upper = Distribution::new(shouting);

    assert_eq!(lower.root(), upper.root());
}
