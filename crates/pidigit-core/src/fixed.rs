//! Binary fixed-point values with an explicit working precision.
//!
//! A `FixedPoint` stores `value · 2^bits` truncated to an integer. Every
//! operation keeps the precision of its receiver; combining two values of
//! different precision is a programming error.

use num_bigint::{BigInt, Sign};
use num_integer::Roots;
use num_traits::{Signed, Zero};

use crate::calculator::PiError;
use crate::constants::BITS_PER_DIGIT;

/// Working precision in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u64);

impl Precision {
    /// Precision of exactly `bits` fractional bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Precision budgeted for `digits` decimal digits (`digits × 4` bits).
    #[must_use]
    pub const fn for_digits(digits: u64) -> Self {
        Self(digits.saturating_mul(BITS_PER_DIGIT))
    }

    /// Number of fractional bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }
}

/// A real number held as `mantissa / 2^precision`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPoint {
    mantissa: BigInt,
    precision: Precision,
}

impl FixedPoint {
    /// Promote an exact integer to `precision`.
    #[must_use]
    pub fn from_integer(value: &BigInt, precision: Precision) -> Self {
        Self {
            mantissa: value << precision.bits(),
            precision,
        }
    }

    /// Build a value from an already scaled mantissa.
    #[must_use]
    pub fn from_mantissa(mantissa: BigInt, precision: Precision) -> Self {
        Self {
            mantissa,
            precision,
        }
    }

    /// The scaled integer `value · 2^bits`.
    #[must_use]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Working precision of this value.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Square root, truncated at this value's precision.
    pub fn sqrt(&self) -> Result<Self, PiError> {
        if self.mantissa.is_negative() {
            return Err(PiError::Calculation(
                "square root of a negative value".into(),
            ));
        }
        let widened = &self.mantissa << self.precision.bits();
        Ok(Self {
            mantissa: Roots::sqrt(&widened),
            precision: self.precision,
        })
    }

    /// Product of two values of the same precision.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(
            self.precision, other.precision,
            "fixed-point precisions must match"
        );
        Self {
            mantissa: (&self.mantissa * &other.mantissa) >> self.precision.bits(),
            precision: self.precision,
        }
    }

    /// Product with an exact integer; no rounding occurs.
    #[must_use]
    pub fn mul_integer(&self, factor: &BigInt) -> Self {
        Self {
            mantissa: &self.mantissa * factor,
            precision: self.precision,
        }
    }

    /// Quotient by an exact integer, truncated toward zero at this precision.
    pub fn div_integer(&self, divisor: &BigInt) -> Result<Self, PiError> {
        if divisor.is_zero() {
            return Err(PiError::Calculation("division by zero".into()));
        }
        Ok(Self {
            mantissa: &self.mantissa / divisor,
            precision: self.precision,
        })
    }

    /// Integer part, truncated toward zero.
    #[must_use]
    pub fn trunc(&self) -> BigInt {
        let magnitude = BigInt::from(self.mantissa.magnitude().clone()) >> self.precision.bits();
        if self.mantissa.sign() == Sign::Minus {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Fractional part as a mantissa in `[0, 2^bits)` for non-negative values.
    #[must_use]
    pub fn fract(&self) -> BigInt {
        &self.mantissa - (self.trunc() << self.precision.bits())
    }

    /// The scaled representation of `1` at this precision.
    #[must_use]
    pub fn unit(&self) -> BigInt {
        BigInt::from(1u8) << self.precision.bits()
    }
}
