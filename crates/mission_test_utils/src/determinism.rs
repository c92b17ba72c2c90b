//! Determinism testing utilities.
//!
//! Provides a harness for verifying that catalog construction produces
//! identical trees given identical literal data.
//!
//! # Testing Strategy
//!
//! A catalog must be rebuilt wholesale on reload and come out the same every
//! time. Sources of drift include:
//!
//! - **HashMap iteration order**: Rust's default hasher is randomized.
//!   Rosters are `BTreeMap`s and catalogs keep insertion order.
//!
//! - **Hidden counters**: No ids are handed out at construction time; keys
//!   derive from mission names only.
//!
//! Values are compared through a hash of their RON serialization, so any
//! serializable part of a catalog (a roster snapshot, a single mission) can
//! be checked the same way.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Result of a determinism test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all builds produced identical results.
    pub is_deterministic: bool,
    /// Hashes from each build.
    pub hashes: Vec<u64>,
}

impl DeterminismResult {
    /// Get all unique hashes (should be 1 for deterministic construction).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that construction was deterministic, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the builds produced different hashes.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let unique = self.unique_hashes();
            panic!(
                "Catalog construction is non-deterministic!\n\
                 Builds: {}\n\
                 Unique hashes: {} (expected 1)\n\
                 All hashes: {:?}",
                self.hashes.len(),
                unique.len(),
                self.hashes
            );
        }
    }
}

/// Hash a value through its RON serialization.
///
/// # Panics
///
/// Panics if the value cannot be serialized.
#[must_use]
pub fn serialized_hash<T: Serialize>(value: &T) -> u64 {
    let text = ron::ser::to_string(value).expect("value serializes to RON");
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

/// Build a value several times and verify every build hashes the same.
///
/// # Example
///
/// ```
/// use mission_core::prelude::*;
/// use mission_test_utils::determinism::verify_determinism;
///
/// let result = verify_determinism(3, || {
///     let roster = EnemyCatalog::standard();
///     MissionCatalog::standard(&roster).unwrap()
/// });
/// result.assert_deterministic();
/// ```
pub fn verify_determinism<T, Build>(runs: usize, build: Build) -> DeterminismResult
where
    T: Serialize,
    Build: Fn() -> T,
{
    let hashes: Vec<u64> = (0..runs).map(|_| serialized_hash(&build())).collect();
    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);
    tracing::debug!(
        "Determinism check: {} builds, deterministic = {}",
        hashes.len(),
        is_deterministic
    );

    DeterminismResult {
        is_deterministic,
        hashes,
    }
}
