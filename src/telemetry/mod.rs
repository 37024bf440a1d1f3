// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.

pub mod printer;
pub mod reporter;
