//! Numeric keyword resolution.
//!
//! Covers `minimum`/`maximum` (inclusive), `exclusiveMinimum`/
//! `exclusiveMaximum` (draft 6+ numeric form; the draft 4 boolean form is
//! not supported and is treated as a malformed keyword), and `multipleOf`.
//! Non-numeric instances pass these checks vacuously.

use super::{expect_number, InvalidSchema};
use crate::value::Json;

/// Relative tolerance for `multipleOf` division.
const MULTIPLE_OF_TOLERANCE: f64 = 1e-9;

/// The resolved numeric keywords of one schema node.
#[derive(Debug, Default)]
pub struct NumericKeywords {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub multiple_of: Option<f64>,
}

impl NumericKeywords {
    pub(crate) fn resolve(doc: &Json, strict: bool) -> Result<Self, InvalidSchema> {
        Ok(Self {
            minimum: expect_number(doc, "minimum", strict)?,
            maximum: expect_number(doc, "maximum", strict)?,
            exclusive_minimum: expect_number(doc, "exclusiveMinimum", strict)?,
            exclusive_maximum: expect_number(doc, "exclusiveMaximum", strict)?,
            multiple_of: expect_number(doc, "multipleOf", strict)?,
        })
    }
}

/// Whether `value` divides evenly by `divisor`, within floating-point
/// representation tolerance.
///
/// `0.0075 / 0.0001` computes as `74.99999999999999`; the quotient is
/// compared to its nearest integer with a relative tolerance so such
/// representation error does not fail the check.
pub fn is_multiple_of(value: f64, divisor: f64) -> bool {
    if divisor == 0.0 || !divisor.is_finite() || !value.is_finite() {
        return false;
    }
    let quotient = value / divisor;
    (quotient - quotient.round()).abs() <= MULTIPLE_OF_TOLERANCE * quotient.abs().max(1.0)
}
