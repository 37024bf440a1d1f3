// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Single keypair generation. Each call draws from `OsRng` via the
// `rand` feature of secp256k1 and returns immediately — secp256k1
// scalars are valid keys by construction, there is no rejection loop.

use secp256k1::Secp256k1;

use crate::core::types::Keypair;

/// Generate one keypair using a caller-supplied context. Callers own their
/// own `Secp256k1` context rather than sharing one across threads.
pub fn generate(secp: &Secp256k1<secp256k1::All>) -> Keypair {
    let (sk, pk) = secp.generate_keypair(&mut rand::thread_rng());
    Keypair {
        sk: sk.secret_bytes(),
        pk: pk.serialize_uncompressed(),
    }
}
