// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// The hash engine: builds the candidate string and computes its SHA-256
// digest. This is the hot loop of the miner, so it avoids any allocation
// beyond the one `String` the hex-encoded public key and seed are
// concatenated into.

use sha2::{Digest, Sha256};

use crate::core::types::Keypair;

/// `SHA256(hex_lowercase(pk) ++ seed)`. No separator, no trailing newline —
/// the candidate is exactly the byte concatenation the server also hashes.
pub fn candidate_digest(keypair: &Keypair, seed: &str) -> [u8; 32] {
    let mut candidate = String::with_capacity(130 + seed.len());
    candidate.push_str(&keypair.pk_hex());
    candidate.push_str(seed);

    let mut hasher = Sha256::new();
    hasher.update(candidate.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secp256k1::{PublicKey, Secp256k1, SecretKey};

    fn sample_keypair() -> Keypair {
        let secp = Secp256k1::new();
        let sk = SecretKey::from_slice(&[0x11; 32]).unwrap();
        let pk = PublicKey::from_secret_key(&secp, &sk);
        Keypair {
            sk: sk.secret_bytes(),
            pk: pk.serialize_uncompressed(),
        }
    }

    #[test]
    fn digest_matches_manual_concatenation() {
        let keypair = sample_keypair();
        let seed = "abc";
        let expected = {
            let mut hasher = Sha256::new();
            hasher.update(format!("{}{}", keypair.pk_hex(), seed).as_bytes());
            let out: [u8; 32] = hasher.finalize().into();
            out
        };
        assert_eq!(candidate_digest(&keypair, seed), expected);
    }

    #[test]
    fn different_seed_changes_digest() {
        let keypair = sample_keypair();
        assert_ne!(
            candidate_digest(&keypair, "seed-one"),
            candidate_digest(&keypair, "seed-two")
        );
    }
}
