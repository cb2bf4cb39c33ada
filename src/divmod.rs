use crate::error::{Error, Result};

/// Quotient and remainder of a floor division, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivMod {
    pub quotient: i64,
    pub remainder: i64,
}

impl From<DivMod> for (i64, i64) {
    fn from(value: DivMod) -> Self {
        (value.quotient, value.remainder)
    }
}

/// Floor division: the quotient rounds toward negative infinity and a
/// non-zero remainder carries the sign of the divisor.
pub fn divmod(dividend: i64, divisor: i64) -> Result<DivMod> {
    if divisor == 0 {
        return Err(Error::DivisionByZero);
    }

    let quotient = dividend.checked_div(divisor).ok_or(Error::Overflow)?;
    let remainder = dividend.checked_rem(divisor).ok_or(Error::Overflow)?;

    // Rust truncates toward zero; shift by one when the signs disagree
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        Ok(DivMod {
            quotient: quotient - 1,
            remainder: remainder + divisor,
        })
    } else {
        Ok(DivMod {
            quotient,
            remainder,
        })
    }
}
