//! Compound growth helpers
//!
//! SIP contributions are treated as annuity-due: each instalment is paid at
//! the start of its month and compounds monthly at `annual / 12`. Lump sums
//! compound annually over `months / 12` fractional years.

use rust_decimal::{Decimal, MathematicalOps};

use core_kernel::{ensure_non_negative, round_currency_up, Rate, ValidationError};

fn overflow(months: u32) -> ValidationError {
    ValidationError::out_of_range(
        "annual_return",
        format!("growth over {months} months exceeds the representable range"),
    )
}

/// Future value of one unit paid at the start of each month for `months` months
///
/// Falls back to `months` when the monthly rate is zero.
pub fn annuity_due_factor(monthly_rate: Rate, months: u32) -> Result<Decimal, ValidationError> {
    let r = monthly_rate.as_decimal();
    if r.is_zero() {
        return Ok(Decimal::from(months));
    }
    let growth = monthly_rate
        .growth_factor()
        .checked_powu(u64::from(months))
        .ok_or_else(|| overflow(months))?;
    (growth - Decimal::ONE)
        .checked_div(r)
        .and_then(|factor| factor.checked_mul(Decimal::ONE + r))
        .ok_or_else(|| overflow(months))
}

/// Future value of a monthly SIP after `months` months at `annual_return`
pub fn sip_future_value(
    monthly_contribution: Decimal,
    annual_return: Rate,
    months: u32,
) -> Result<Decimal, ValidationError> {
    ensure_non_negative("monthly_contribution", monthly_contribution)?;
    let annual_return = annual_return.ensure_compoundable("annual_return")?;
    if monthly_contribution.is_zero() || months == 0 {
        return Ok(Decimal::ZERO);
    }
    monthly_contribution
        .checked_mul(annuity_due_factor(annual_return.monthly(), months)?)
        .ok_or_else(|| overflow(months))
}

/// Future value of a lump sum compounded annually over `months / 12` years
pub fn lump_sum_future_value(
    amount: Decimal,
    annual_return: Rate,
    months: u32,
) -> Result<Decimal, ValidationError> {
    ensure_non_negative("current_amount", amount)?;
    let annual_return = annual_return.ensure_compoundable("annual_return")?;
    if amount.is_zero() || months == 0 {
        return Ok(amount);
    }
    let years = Decimal::from(months) / Decimal::from(12);
    let growth = annual_return
        .growth_factor()
        .checked_powd(years)
        .ok_or_else(|| overflow(months))?;
    amount.checked_mul(growth).ok_or_else(|| overflow(months))
}

/// Monthly SIP needed to grow `current_amount` into `target_amount` in `months` months
///
/// The result is rounded up to the next cent.
/// Returns zero when the lump sum alone already reaches the target, or when no
/// months are left to contribute in.
pub fn required_monthly_contribution(
    target_amount: Decimal,
    current_amount: Decimal,
    months: u32,
    annual_return: Rate,
) -> Result<Decimal, ValidationError> {
    if months == 0 {
        return Ok(Decimal::ZERO);
    }
    let grown = lump_sum_future_value(current_amount, annual_return, months)?;
    let gap = target_amount - grown;
    if gap <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let factor = annuity_due_factor(annual_return.monthly(), months)?;
    if factor <= Decimal::ZERO {
        return Err(overflow(months));
    }
    gap.checked_div(factor)
        .map(round_currency_up)
        .ok_or_else(|| overflow(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::round_currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_rate_sip_is_plain_sum() {
        let fv = sip_future_value(dec!(1000), Rate::zero(), 24).unwrap();
        assert_eq!(fv, dec!(24000));
    }

    #[test]
    fn test_one_month_sip_earns_one_month() {
        // Paid at the start of the month, so it compounds once
        let fv = sip_future_value(dec!(1200), Rate::new(dec!(0.12)), 1).unwrap();
        assert_eq!(round_currency(fv), dec!(1212.00));
    }

    #[test]
    fn test_lump_sum_whole_years() {
        let fv = lump_sum_future_value(dec!(100000), Rate::new(dec!(0.10)), 24).unwrap();
        assert_eq!(round_currency(fv), dec!(121000.00));
    }

    #[test]
    fn test_lump_sum_zero_months() {
        let fv = lump_sum_future_value(dec!(100000), Rate::new(dec!(0.10)), 0).unwrap();
        assert_eq!(fv, dec!(100000));
    }

    #[test]
    fn test_rate_at_minus_one_rejected() {
        let err = sip_future_value(dec!(1000), Rate::new(dec!(-1)), 12).unwrap_err();
        assert_eq!(err.field(), "annual_return");
    }

    #[test]
    fn test_required_contribution_closes_gap() {
        let rate = Rate::new(dec!(0.12));
        let needed = required_monthly_contribution(dec!(1000000), dec!(100000), 60, rate).unwrap();
        let reached = sip_future_value(needed, rate, 60).unwrap()
            + lump_sum_future_value(dec!(100000), rate, 60).unwrap();
        assert!(reached >= dec!(1000000));
        assert!(reached - dec!(1000000) < dec!(100));
    }

    #[test]
    fn test_growth_beyond_decimal_range_is_an_error() {
        let err = sip_future_value(dec!(1000), Rate::new(dec!(6)), 163).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "annual_return", .. }));

        let err = annuity_due_factor(Rate::new(dec!(6)).monthly(), 400).unwrap_err();
        assert_eq!(err.field(), "annual_return");

        let err = required_monthly_contribution(dec!(1000000), dec!(0), 163, Rate::new(dec!(6))).unwrap_err();
        assert_eq!(err.field(), "annual_return");
    }

    #[test]
    fn test_required_contribution_when_already_funded() {
        let rate = Rate::new(dec!(0.08));
        let needed = required_monthly_contribution(dec!(100000), dec!(200000), 36, rate).unwrap();
        assert_eq!(needed, Decimal::ZERO);
        assert_eq!(required_monthly_contribution(dec!(100000), dec!(0), 0, rate).unwrap(), Decimal::ZERO);
    }
}
