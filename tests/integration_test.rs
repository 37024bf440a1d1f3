// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// End-to-end scenarios against a hand-rolled HTTP stub. The stub speaks
// just enough HTTP/1.1 to satisfy `reqwest`: a status line, a
// `Content-Length` header, and a body, over a plain `TcpListener`.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use clc_miner::core::{candidate_digest, types::Keypair};
use clc_miner::job::JobSlot;
use clc_miner::keys::KeypairPool;
use clc_miner::mining::observatory::Observatory;
use clc_miner::{submit, Config};
use secp256k1::Secp256k1;

/// A request handler returns the full HTTP response body text (the
/// caller wraps it with headers) given the path+query of the request.
type Handler = Box<dyn Fn(&str) -> String + Send + Sync>;

struct StubServer {
    addr: String,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    fn start(handler: Handler) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = format!("http://{}", listener.local_addr().unwrap());
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = Arc::clone(&shutdown);

        let handle = std::thread::spawn(move || {
            while !shutdown_clone.load(Ordering::Relaxed) {
                match listener.accept() {
                    Ok((stream, _)) => serve_one(stream, &handler),
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        std::thread::sleep(std::time::Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Self {
            addr,
            shutdown,
            handle: Some(handle),
        }
    }

    fn url(&self) -> String {
        self.addr.clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn serve_one(mut stream: TcpStream, handler: &Handler) {
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let body = handler(&path);
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn sample_keypair() -> Keypair {
    let secp = Secp256k1::new();
    let (sk, pk) = secp.generate_keypair(&mut rand::thread_rng());
    Keypair {
        sk: sk.secret_bytes(),
        pk: pk.serialize_uncompressed(),
    }
}

#[test]
fn trivial_difficulty_is_solved_on_first_attempt() {
    let mined = Arc::new(AtomicUsize::new(0));
    let mined_clone = Arc::clone(&mined);

    let server = StubServer::start(Box::new(move |path| {
        if path.starts_with("/get-challenge") {
            format!(
                r#"{{"seed":"abc","diff":"{}","reward":1.0,"lastFound":0}}"#,
                "ff".repeat(32)
            )
        } else if path.starts_with("/challenge-solved") {
            mined_clone.fetch_add(1, Ordering::SeqCst);
            "success".to_string()
        } else {
            "not found".to_string()
        }
    }));

    let mut config = Config::default();
    config.server = server.url();

    let client = submit::build_client(&config).unwrap();
    let job = submit::fetch_challenge(&client, &config).unwrap().unwrap();
    assert_eq!(job.seed, "abc");
    assert_eq!(job.diff, [0xffu8; 32]);

    let keypair = sample_keypair();
    let digest = candidate_digest(&keypair, &job.seed);
    assert!(clc_miner::core::meets_target(&digest, &job.diff));

    let solution = clc_miner::core::types::Solution {
        pk: keypair.pk,
        sk: keypair.sk,
        digest,
        reward: job.reward,
    };
    submit::submit_solution(&client, &config, &solution).unwrap();
    assert_eq!(mined.load(Ordering::SeqCst), 1);
}

#[test]
fn impossible_difficulty_never_meets_target() {
    let target = [0x00u8; 32];
    let keypair = sample_keypair();
    for seed in ["a", "b", "c", "d"] {
        let digest = candidate_digest(&keypair, seed);
        assert!(!clc_miner::core::meets_target(&digest, &target));
    }
}

#[test]
fn pool_mode_submission_includes_secret_and_key() {
    let server = StubServer::start(Box::new(|_path| "success".to_string()));

    let mut config = Config::default();
    config.server = server.url();
    config.pool_secret = "abcd".to_string();

    let client = submit::build_client(&config).unwrap();
    let keypair = sample_keypair();
    let digest = candidate_digest(&keypair, "seed");
    let solution = clc_miner::core::types::Solution {
        pk: keypair.pk,
        sk: keypair.sk,
        digest,
        reward: 1.0,
    };

    let url = clc_miner::submit::protocol::submit_url(&config, &solution, "deadbeef");
    assert!(url.contains("poolsecret=abcd"));
    assert!(url.contains(&format!("key={}", solution.sk_hex())));

    submit::submit_solution(&client, &config, &solution).unwrap();
}

#[test]
fn malformed_challenge_response_is_treated_as_no_change() {
    let server = StubServer::start(Box::new(|_path| {
        format!(r#"{{"diff":"{}","reward":1}}"#, "ff".repeat(32))
    }));

    let mut config = Config::default();
    config.server = server.url();

    let client = submit::build_client(&config).unwrap();
    let result = submit::fetch_challenge(&client, &config).unwrap();
    assert!(result.is_none());

    let slot = JobSlot::waiting();
    assert!(slot.snapshot().is_waiting());
}

#[test]
fn job_rotation_resets_best_hash_observatory() {
    let observatory = Observatory::new();
    let slot = JobSlot::waiting();

    let job1 = clc_miner::core::types::Job {
        seed: "s1".to_string(),
        diff: [0x10u8; 32],
        reward: 1.0,
        last_found_ms: 0,
    };
    assert!(slot.install_if_changed(job1));

    let mut better = [0xffu8; 32];
    better[0] = 0x00;
    observatory.offer_best_hash(&better);
    assert_eq!(observatory.best_hash(), better);

    let job2 = clc_miner::core::types::Job {
        seed: "s2".to_string(),
        diff: [0x20u8; 32],
        reward: 1.0,
        last_found_ms: 0,
    };
    assert!(slot.install_if_changed(job2));
    observatory.reset_best_hash();
    assert_eq!(observatory.best_hash(), [0xffu8; 32]);
}

#[test]
fn keypair_pool_generates_valid_uncompressed_keys() {
    let pool = KeypairPool::pregenerate(8, 2);
    for _ in 0..16 {
        let keypair = pool.next();
        assert_eq!(keypair.pk[0], 0x04);
        assert!(secp256k1::SecretKey::from_slice(&keypair.sk).is_ok());
    }
}
