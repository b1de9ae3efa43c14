//! Timing Sampler
//!
//! Produces raw per-operation duration samples for the benchmark table's
//! baseline primitive, either by measuring repeated invocations of a real
//! primitive or by drawing from a configured baseline + Gaussian noise.
//!
//! Also hosts the injectable [`NoiseSource`] used by the aggregator to
//! perturb per-run latencies, and the seed-derivation helper that turns the
//! single configured integer seed into independent per-purpose RNG streams.

use std::time::{Duration, Instant};

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use x25519_dalek::{PublicKey, StaticSecret};

use crate::hs_interface::SimError;

// ============================================================================
// Seed Derivation
// ============================================================================

/// Domain tag for the aggregator's latency-noise stream
pub const NOISE_DOMAIN: &[u8] = b"pq-handshake/noise";

/// Domain tag for synthetic baseline sampling
pub const BASELINE_DOMAIN: &[u8] = b"pq-handshake/baseline";

/// Derive a 32-byte RNG seed from a domain tag and the configured seed.
///
/// Distinct tags yield independent streams from the same integer seed, so
/// noise injection and baseline synthesis stay decorrelated while remaining
/// reproducible.
pub fn derive_seed(tag: &[u8], seed: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(tag);
    hasher.update(&seed.to_le_bytes());
    *hasher.finalize().as_bytes()
}

/// Seeded RNG for one purpose domain.
pub fn seeded_rng(tag: &[u8], seed: u64) -> StdRng {
    StdRng::from_seed(derive_seed(tag, seed))
}

// ============================================================================
// Measurable Operations
// ============================================================================

/// One invocation of the primitive under measurement.
///
/// The sampler treats the operation as an opaque black box; it only records
/// elapsed wall-clock time around it.
pub trait MeasurableOp {
    fn execute(&mut self) -> Result<(), SimError>;
}

/// Classical Diffie-Hellman agreement over X25519.
///
/// Plays the classical-baseline role in benchmark mode: its measured
/// per-operation time is the baseline the KEM and signature timings are
/// scaled from.
pub struct X25519Agreement {
    secret: StaticSecret,
    peer: PublicKey,
}

impl X25519Agreement {
    pub fn new() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        let peer = PublicKey::from(&StaticSecret::random_from_rng(OsRng));
        Self { secret, peer }
    }
}

impl Default for X25519Agreement {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurableOp for X25519Agreement {
    fn execute(&mut self) -> Result<(), SimError> {
        let shared = self.secret.diffie_hellman(&self.peer);
        std::hint::black_box(shared.as_bytes());
        Ok(())
    }
}

/// Argon2id hash over a fixed input, for KDF-class timing sweeps.
pub struct Argon2Hash {
    argon2: Argon2<'static>,
    input: [u8; 32],
    salt: SaltString,
}

impl Argon2Hash {
    /// Configure an Argon2id instance with the given memory cost (KiB) and
    /// iteration count, single lane, 32-byte output.
    pub fn new(memory_kib: u32, iterations: u32) -> Result<Self, SimError> {
        let params = Params::new(memory_kib, iterations, 1, Some(32))
            .map_err(|e| SimError::MeasurementFailure(e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::encode_b64(&[0x42u8; 16])
            .map_err(|e| SimError::MeasurementFailure(e.to_string()))?;
        Ok(Self {
            argon2,
            input: [0x5au8; 32],
            salt,
        })
    }
}

impl MeasurableOp for Argon2Hash {
    fn execute(&mut self) -> Result<(), SimError> {
        let hash = self
            .argon2
            .hash_password(&self.input, &self.salt)
            .map_err(|e| SimError::MeasurementFailure(e.to_string()))?;
        std::hint::black_box(hash.hash);
        Ok(())
    }
}

// ============================================================================
// Live Measurement
// ============================================================================

/// Live timing measurement configuration.
#[derive(Debug, Clone)]
pub struct TimingSampler {
    /// Back-to-back invocations timed under one clock window per trial
    pub repetitions: usize,

    /// Number of trials, one output sample each
    pub trials: usize,

    /// Pause between trials. Lets CPU frequency and cache state drift so
    /// the trials carry realistic jitter instead of an artificially stable
    /// schedule.
    pub pause: Duration,
}

impl Default for TimingSampler {
    fn default() -> Self {
        Self {
            repetitions: 50,
            trials: 10,
            pause: Duration::from_millis(20),
        }
    }
}

impl TimingSampler {
    /// Measure the per-operation time of `op`, one sample per trial (ms).
    ///
    /// Each trial times `repetitions` invocations under a single
    /// [`Instant`] window and divides by the repetition count. If any
    /// invocation fails the whole run aborts; partial timing data is not
    /// substituted.
    pub fn measure_baseline(&self, op: &mut dyn MeasurableOp) -> Result<Vec<f64>, SimError> {
        let repetitions = self.repetitions.max(1);
        let mut samples = Vec::with_capacity(self.trials);

        for trial in 0..self.trials {
            let start = Instant::now();
            for _ in 0..repetitions {
                op.execute()?;
            }
            let per_op_ms = start.elapsed().as_secs_f64() * 1000.0 / repetitions as f64;
            samples.push(per_op_ms);

            if trial + 1 < self.trials && !self.pause.is_zero() {
                std::thread::sleep(self.pause);
            }
        }

        Ok(samples)
    }
}

/// Draw `trials` synthetic baseline samples: `baseline_mean_ms` plus
/// zero-mean Gaussian noise of `noise_std_ms`.
///
/// Used when no live measurement is desired; the caller supplies a seeded
/// RNG so results reproduce bit-identically for the same seed.
pub fn synthesize(
    baseline_mean_ms: f64,
    noise_std_ms: f64,
    trials: usize,
    rng: &mut StdRng,
) -> Vec<f64> {
    let dist = Normal::new(0.0, noise_std_ms.max(0.0)).unwrap();
    (0..trials)
        .map(|_| baseline_mean_ms + dist.sample(rng))
        .collect()
}

// ============================================================================
// Noise Source
// ============================================================================

/// Capability object producing the next latency-noise draw (ms).
///
/// Injected into the aggregator so tests can swap in a deterministic stub.
pub trait NoiseSource {
    fn next_noise_ms(&mut self) -> f64;
}

/// Zero-mean Gaussian noise on a seeded RNG stream.
pub struct GaussianNoise {
    dist: Normal<f64>,
    rng: StdRng,
}

impl GaussianNoise {
    pub fn new(std_dev_ms: f64, rng: StdRng) -> Self {
        Self {
            dist: Normal::new(0.0, std_dev_ms.max(0.0)).unwrap(),
            rng,
        }
    }

    /// Gaussian noise on the dedicated noise stream of `seed`.
    pub fn from_seed(std_dev_ms: f64, seed: u64) -> Self {
        Self::new(std_dev_ms, seeded_rng(NOISE_DOMAIN, seed))
    }
}

impl NoiseSource for GaussianNoise {
    fn next_noise_ms(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }
}

/// No-op noise source; every draw is zero.
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn next_noise_ms(&mut self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// Counts invocations, never fails
    struct CountingOp {
        calls: usize,
    }

    impl MeasurableOp for CountingOp {
        fn execute(&mut self) -> Result<(), SimError> {
            self.calls += 1;
            Ok(())
        }
    }

    /// Fails after a fixed number of successful invocations
    struct FailingOp {
        calls_before_failure: usize,
        calls: usize,
    }

    impl MeasurableOp for FailingOp {
        fn execute(&mut self) -> Result<(), SimError> {
            if self.calls >= self.calls_before_failure {
                return Err(SimError::MeasurementFailure("backend refused".into()));
            }
            self.calls += 1;
            Ok(())
        }
    }

    fn fast_sampler(repetitions: usize, trials: usize) -> TimingSampler {
        TimingSampler {
            repetitions,
            trials,
            pause: Duration::ZERO,
        }
    }

    #[test]
    fn test_measure_baseline_one_sample_per_trial() {
        let sampler = fast_sampler(2, 3);
        let mut op = CountingOp { calls: 0 };

        let samples = sampler.measure_baseline(&mut op).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(op.calls, 6);
        assert!(samples.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_measure_baseline_aborts_on_failure() {
        let sampler = fast_sampler(2, 5);
        let mut op = FailingOp {
            calls_before_failure: 3,
            calls: 0,
        };

        let result = sampler.measure_baseline(&mut op);

        assert_eq!(
            result,
            Err(SimError::MeasurementFailure("backend refused".into()))
        );
    }

    #[test]
    fn test_synthesize_is_reproducible() {
        let mut rng_a = seeded_rng(BASELINE_DOMAIN, 42);
        let mut rng_b = seeded_rng(BASELINE_DOMAIN, 42);

        let a = synthesize(1.2, 0.05, 10, &mut rng_a);
        let b = synthesize(1.2, 0.05, 10, &mut rng_b);

        assert_eq!(a.len(), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_synthesize_zero_std_is_constant() {
        let mut rng = seeded_rng(BASELINE_DOMAIN, 7);
        let samples = synthesize(1.2, 0.0, 4, &mut rng);
        assert_eq!(samples, vec![1.2; 4]);
    }

    #[test]
    fn test_seed_domains_are_independent() {
        let mut noise = seeded_rng(NOISE_DOMAIN, 1);
        let mut baseline = seeded_rng(BASELINE_DOMAIN, 1);
        assert_ne!(noise.gen::<u64>(), baseline.gen::<u64>());
    }

    #[test]
    fn test_gaussian_noise_is_reproducible() {
        let mut a = GaussianNoise::from_seed(0.05, 9);
        let mut b = GaussianNoise::from_seed(0.05, 9);

        for _ in 0..5 {
            assert_eq!(a.next_noise_ms(), b.next_noise_ms());
        }
    }

    #[test]
    fn test_no_noise_is_zero() {
        let mut noise = NoNoise;
        assert_eq!(noise.next_noise_ms(), 0.0);
    }

    #[test]
    fn test_x25519_agreement_executes() {
        let mut op = X25519Agreement::new();
        assert!(op.execute().is_ok());
    }
}
