#![allow(dead_code)]

use rand::RngCore;
use rand::rngs::OsRng;

/// Generates a cryptographically random one-time password.
///
/// 32 bytes from the OS RNG, hex-encoded. Intended for provisioning flows
/// that hand a temporary credential to a newly created account.
pub fn one_time_password() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
