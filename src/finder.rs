//! Pair-sum search over an integer sequence.
//!
//! Two strategies answer the same question: which two distinct positions hold
//! values that add up to the target. They agree on whether a pair exists but
//! may report different pairs when several qualify.

use std::{collections::HashMap, fmt};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two positions in a sequence, earlier index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FindError {
    #[error("No solution found.")]
    NotFound,
}

/// Search strategy used by [`find_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Nested scan, first match in (i, j) order. O(n²) time, O(1) space.
    BruteForce,
    /// Single pass with a value-to-index map. O(n) time, O(n) space.
    #[default]
    Complement,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BruteForce, Strategy::Complement];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::Complement => "complement",
        }
    }

    pub fn find(self, nums: &[i64], target: i64) -> Result<Pair, FindError> {
        match self {
            Strategy::BruteForce => brute_force(nums, target),
            Strategy::Complement => complement_lookup(nums, target),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Find two distinct indices `i < j` with `nums[i] + nums[j] == target`.
///
/// Returns [`FindError::NotFound`] when no such pair exists, including for
/// empty and single-element sequences.
///
/// # Example
///
/// ```ignore
/// let pair = find_pair(&[2, 7, 11, 15], 9, Strategy::Complement)?;
/// assert_eq!(pair, Pair::new(0, 1));
/// ```
pub fn find_pair(nums: &[i64], target: i64, strategy: Strategy) -> Result<Pair, FindError> {
    tracing::debug!(%strategy, len = nums.len(), target, "searching for pair");
    strategy.find(nums, target)
}

fn brute_force(nums: &[i64], target: i64) -> Result<Pair, FindError> {
    for (i, &a) in nums.iter().enumerate() {
        for (j, &b) in nums.iter().enumerate().skip(i + 1) {
            // An overflowing sum cannot equal any i64 target
            if a.checked_add(b) == Some(target) {
                return Ok(Pair::new(i, j));
            }
        }
    }

    Err(FindError::NotFound)
}

fn complement_lookup(nums: &[i64], target: i64) -> Result<Pair, FindError> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &num) in nums.iter().enumerate() {
        if let Some(complement) = target.checked_sub(num) {
            if let Some(&index) = seen.get(&complement) {
                return Ok(Pair::new(index, i));
            }
        }
        seen.insert(num, i);
    }

    Err(FindError::NotFound)
}
