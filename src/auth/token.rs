// src/auth/token.rs
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const TOKEN_BYTES: usize = 32;

/// Random token for magic links and session cookies (OS RNG).
pub fn generate_token_default() -> String {
    generate_token(&mut OsRng, TOKEN_BYTES)
}

/// `nbytes` random bytes as unpadded URL-safe base64, so the token can sit
/// in a query string or cookie without escaping.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of a token. Tokens are only ever stored in this form.
pub fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
