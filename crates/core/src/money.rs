//! Exact two-unit currency values (major/minor, e.g. euros/cents).

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Number of minor units in one major unit.
pub const MINOR_PER_MAJOR: i64 = 100;

/// A currency amount stored as separate major and minor fields.
///
/// Construction is permissive: negative fields and `minor >= 100` are accepted
/// as given. Equality compares the fields, so `(0, 100)` and `(1, 0)` are not
/// equal even though they are worth the same. Use [`MonetaryAmount::compare_value`]
/// or [`MonetaryAmount::to_minor_units`] to compare worth.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonetaryAmount {
    major: i32,
    minor: i32,
}

impl ValueObject for MonetaryAmount {}

impl MonetaryAmount {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(major: i32, minor: i32) -> Self {
        Self { major, minor }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn major(&self) -> i32 {
        self.major
    }

    pub const fn minor(&self) -> i32 {
        self.minor
    }

    /// Total value expressed in minor units (`major * 100 + minor`).
    pub const fn to_minor_units(&self) -> i64 {
        self.major as i64 * MINOR_PER_MAJOR + self.minor as i64
    }

    /// Builds a normalized amount from a minor-unit total.
    ///
    /// Uses floor division, so `minor` always lands in `0..100`. The major
    /// field saturates at the `i32` bounds.
    pub fn from_minor_units(total: i64) -> Self {
        let major = total.div_euclid(MINOR_PER_MAJOR);
        let minor = total.rem_euclid(MINOR_PER_MAJOR);
        let major = i32::try_from(major).unwrap_or(if major < 0 { i32::MIN } else { i32::MAX });
        // rem_euclid(100) is always within 0..100.
        Self::new(major, minor as i32)
    }

    /// Field-wise sum with no carry: `(0, 50) + (0, 50) == (0, 100)`.
    ///
    /// Each field saturates at the `i32` bounds rather than wrapping.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(
            self.major.saturating_add(other.major),
            self.minor.saturating_add(other.minor),
        )
    }

    /// Difference of the two values, normalized.
    ///
    /// Unlike [`MonetaryAmount::add`] the result is carried: `(0, 100) - (0, 30)`
    /// yields `(0, 70)` and `(2, 0) - (0, 30)` yields `(1, 70)`.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::from_minor_units(self.to_minor_units() - other.to_minor_units())
    }

    /// Same value with the minor field carried into `0..100`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::from_minor_units(self.to_minor_units())
    }

    /// Orders two amounts by worth, ignoring how the fields are split.
    pub fn compare_value(&self, other: &Self) -> Ordering {
        self.to_minor_units().cmp(&other.to_minor_units())
    }

    /// True when this amount is worth at least `price`.
    pub fn covers(&self, price: &Self) -> bool {
        self.compare_value(price) != Ordering::Less
    }
}

/// Renders the worth, carried: `(0, 100)` prints as `1.00`.
impl core::fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.to_minor_units();
        let sign = if total < 0 { "-" } else { "" };
        let abs = total.unsigned_abs();
        let per_major = MINOR_PER_MAJOR.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / per_major, abs % per_major)
    }
}
