//! Core Types for the Handshake Cost Model
//!
//! Shared value types used across the cost table, the protocol cost model,
//! the statistical aggregator and the network projector. Everything here is
//! an immutable value object: a simulation run builds fresh instances and
//! never mutates them afterwards.

// ============================================================================
// Primitives
// ============================================================================

/// Cryptographic primitive artifacts tracked by the cost table.
///
/// Each variant names one artifact family of a handshake. The compute time
/// of an entry is the CPU cost of producing it once; the size is what it
/// contributes to the wire. Transport-only artifacts (public keys,
/// certificate chains) carry a compute time of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// One key-encapsulation operation; size is the ciphertext
    KemEncapsulation,

    /// KEM public key as transported on the wire
    KemPublicKey,

    /// One post-quantum signature operation; size is the signature
    Signature,

    /// Signature public key as transported (benchmark table only)
    SignaturePublicKey,

    /// One classical public-key operation; size is the ciphertext
    ClassicalCipher,

    /// Symmetric suite per handshake (HMAC + HKDF + AEAD); size is the tag
    SymmetricSuite,

    /// X.509 certificate chain as transported (benchmark table only)
    CertificateChain,
}

/// Cost of a single primitive: compute time plus wire footprint.
///
/// Both fields are non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveCost {
    /// CPU time to execute one operation (ms)
    pub compute_time_ms: f64,

    /// Bytes this artifact contributes to one handshake on the wire
    pub size_bytes: u64,
}

// ============================================================================
// Handshake Cost
// ============================================================================

/// Aggregate cost of one complete handshake.
///
/// Latency is additive in milliseconds, overhead additive in bytes. No
/// rounding happens here; display formatting is the reporting layer's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandshakeCost {
    /// Total compute latency (ms)
    pub latency_ms: f64,

    /// Total bytes exchanged on the wire
    pub overhead_bytes: u64,
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by the simulation core.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A cost function referenced a primitive absent from the active table.
    /// This is a configuration error and fatal to the run.
    UnknownPrimitive(Primitive),

    /// A scenario declared a non-positive bandwidth, which would divide by
    /// zero in the projection formula. Surfaced before any projection runs.
    InvalidScenario {
        name: String,
        bandwidth_mbps: f64,
    },

    /// The primitive call under measurement failed. The whole sampling run
    /// aborts; timing data with a failed trial is not meaningful.
    MeasurementFailure(String),
}
