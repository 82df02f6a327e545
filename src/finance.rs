//! Discounted-cashflow and return formulas.

use crate::constants::years_from_months;
use crate::errors::DomainError;
use crate::math::Scalar;

/// Computes the net present value of a cashflow series.
///
/// NPV = Σ CF_t / (1 + r)^t with `cashflows[0]` at time zero, undiscounted.
/// An empty series has a value of zero. Fails when `discount_rate` is not
/// strictly greater than -1.
pub fn npv(discount_rate: Scalar, cashflows: &[Scalar]) -> Result<Scalar, DomainError> {
    if discount_rate <= -1.0 {
        return Err(DomainError::new("discount_rate", "> -1"));
    }
    let base = 1.0 + discount_rate;
    // factor carries (1 + r)^t across the walk.
    let mut factor = 1.0;
    let mut total = 0.0;
    for &cf in cashflows {
        total += cf / factor;
        factor *= base;
    }
    Ok(total)
}

/// Computes return on investment as a decimal fraction of `cost`.
///
/// ROI = (gain - cost) / cost. Fails when `cost` is zero.
pub fn roi(gain: Scalar, cost: Scalar) -> Result<Scalar, DomainError> {
    if cost == 0.0 {
        return Err(DomainError::non_zero("cost"));
    }
    Ok((gain - cost) / cost)
}

/// Computes simple interest earned by `principal` over `months` at an
/// annual rate expressed as a decimal.
///
/// Interest = P · r · (months / 12). The duration is a whole month count,
/// so negative periods cannot be expressed; `principal` and `annual_rate`
/// may be negative (debt, negative rates).
#[must_use]
pub fn simple_interest(principal: Scalar, months: u32, annual_rate: Scalar) -> Scalar {
    principal * annual_rate * years_from_months(months)
}

/// Projects the expected return of a budgeted amount at a per-month rate
/// held for `months`.
#[must_use]
pub fn expected_return(budget: Scalar, monthly_rate: Scalar, months: u32) -> Scalar {
    budget * monthly_rate * Scalar::from(months)
}
