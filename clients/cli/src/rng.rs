use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Session randomness: the operating-system generator when it works,
/// a time-seeded ChaCha stream when it does not. The fallback is
/// informational, not an error.
pub fn session_rng() -> Box<dyn RngCore> {
    let mut probe = [0u8; 8];
    match OsRng.try_fill_bytes(&mut probe) {
        Ok(()) => Box::new(OsRng),
        Err(err) => {
            log::info!(
                "System random generator unavailable ({err}), \
                 diverting to a seeded pseudo-random generator"
            );
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            Box::new(ChaCha8Rng::seed_from_u64(seed))
        }
    }
}
