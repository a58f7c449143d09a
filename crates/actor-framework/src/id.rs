//! # Identifier Generation
//!
//! Each `ResourceActor` owns one generator and calls it once per successful create.

use uuid::Uuid;

/// Produces a fresh identifier on every call.
pub type IdGenerator = Box<dyn FnMut() -> String + Send>;

/// Random 128-bit identifiers rendered as 32 lowercase hex characters.
pub fn random_hex() -> IdGenerator {
    Box::new(|| Uuid::new_v4().simple().to_string())
}

/// `"{prefix}_1"`, `"{prefix}_2"`, … Deterministic, for tests and demos.
pub fn sequential(prefix: impl Into<String>) -> IdGenerator {
    let prefix = prefix.into();
    let mut next = 0u64;
    Box::new(move || {
        next += 1;
        format!("{prefix}_{next}")
    })
}
