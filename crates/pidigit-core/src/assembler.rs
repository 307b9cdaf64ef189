//! Conversion of the split triple into a fixed-point approximation of π.
//!
//!   π ≈ 426880·√10005 · Q / (13591409·Q + R)
//!
//! All fixed-point steps run at the single precision passed to `assemble`.

use num_bigint::BigInt;
use num_traits::Signed;

use crate::calculator::PiError;
use crate::constants::{CHUDNOVSKY_LINEAR_CONSTANT, SQRT_MULTIPLIER, SQRT_RADICAND};
use crate::fixed::{FixedPoint, Precision};

/// A fixed-point approximation of π, produced once per computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiApprox {
    value: FixedPoint,
}

impl PiApprox {
    /// Wrap an already computed value.
    #[must_use]
    pub fn new(value: FixedPoint) -> Self {
        Self { value }
    }

    /// The underlying fixed-point value.
    #[must_use]
    pub fn value(&self) -> &FixedPoint {
        &self.value
    }

    /// Working precision the approximation was assembled at.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.value.precision()
    }

    /// Render `decimals` truncated digits after the point, e.g. `3.14159`.
    #[must_use]
    pub fn to_decimal_string(&self, decimals: u32) -> String {
        let scaled = self
            .value
            .mul_integer(&BigInt::from(10u8).pow(decimals))
            .trunc()
            .to_string();
        if decimals == 0 {
            return scaled;
        }
        let (sign, magnitude) = match scaled.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", scaled.as_str()),
        };
        // At least one digit before the point.
        let width = decimals as usize + 1;
        let padded = format!("{magnitude:0>width$}");
        let split = padded.len() - decimals as usize;
        format!("{sign}{}.{}", &padded[..split], &padded[split..])
    }
}

/// Assemble π from the `Q` and `R` accumulators at `precision`.
pub fn assemble(q: &BigInt, r: &BigInt, precision: Precision) -> Result<PiApprox, PiError> {
    let coeff = FixedPoint::from_integer(&BigInt::from(SQRT_RADICAND), precision)
        .sqrt()?
        .mul_integer(&BigInt::from(SQRT_MULTIPLIER));

    let numerator = coeff.mul(&FixedPoint::from_integer(q, precision));

    let denominator = q * CHUDNOVSKY_LINEAR_CONSTANT + r;
    if !denominator.is_positive() {
        return Err(PiError::Calculation(format!(
            "non-positive series denominator ({} bits)",
            denominator.bits()
        )));
    }

    Ok(PiApprox::new(numerator.div_integer(&denominator)?))
}
