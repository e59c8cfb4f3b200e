//! Coin acceptance rules.

use serde::{Deserialize, Serialize};

use coinvend_core::MonetaryAmount;

/// Major denominations the coin acceptor recognises.
pub const STANDARD_MAJORS: [i32; 3] = [0, 1, 2];

/// Minor denominations the coin acceptor recognises.
pub const STANDARD_MINORS: [i32; 5] = [0, 5, 10, 20, 50];

/// Whitelist of accepted coin denominations.
///
/// A coin is accepted only when its major field is in `majors` *and* its minor
/// field is in `minors`, so `(0, 54)` and `(-2, 20)` are both refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinPolicy {
    majors: Vec<i32>,
    minors: Vec<i32>,
}

impl CoinPolicy {
    pub fn new(majors: &[i32], minors: &[i32]) -> Self {
        Self {
            majors: majors.to_vec(),
            minors: minors.to_vec(),
        }
    }

    /// `{0, 1, 2}` major × `{0, 5, 10, 20, 50}` minor.
    pub fn standard() -> Self {
        Self::new(&STANDARD_MAJORS, &STANDARD_MINORS)
    }

    /// True when no coin can satisfy the policy.
    pub fn rejects_everything(&self) -> bool {
        self.majors.is_empty() || self.minors.is_empty()
    }

    pub fn accepts(&self, coin: &MonetaryAmount) -> bool {
        self.majors.contains(&coin.major()) && self.minors.contains(&coin.minor())
    }
}

impl Default for CoinPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
