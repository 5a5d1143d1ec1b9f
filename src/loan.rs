use crate::error::InputError;
use log::trace;
use std::fmt;

/// A fixed-rate amortizing home loan repaid monthly.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loan {
    pub principal: f64,
    pub term_months: u32,
    pub annual_rate: f64,
    pub dec_places: u32,
    pmt_amount: f64,
    total_paid: f64,
}

impl Loan {
    /// Fails with `ResultOutOfRange` when the payment or total cannot be represented.
    pub fn new(
        principal: f64,
        term_months: u32,
        annual_rate: f64,
        dec_places: u32,
    ) -> Result<Self, InputError> {
        let pmt_amount = get_pmt_amount(principal, term_months, annual_rate, dec_places)?;
        let total_paid = check_finite(round(pmt_amount * term_months as f64, dec_places))?;
        Ok(Self {
            principal,
            term_months,
            annual_rate,
            dec_places,
            pmt_amount,
            total_paid,
        })
    }

    pub fn get_pmt_amount(&self) -> f64 {
        self.pmt_amount
    }

    pub fn get_total_paid(&self) -> f64 {
        self.total_paid
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "principal {:.dec$}, term {} months, rate {}%, payment {:.dec$}, total paid {:.dec$}",
            self.principal,
            self.term_months,
            self.annual_rate,
            self.pmt_amount,
            self.total_paid,
            dec = self.dec_places as usize,
        )
    }
}

/// Round half away from zero to `dec` places.
pub fn round(amt: f64, dec: u32) -> f64 {
    if amt == 0. {
        0.
    } else {
        let scale = 10_f64.powi(dec as i32);
        (amt * scale).round() / scale
    }
}

// overflow anywhere in a formula surfaces as inf or NaN
pub(crate) fn check_finite(amt: f64) -> Result<f64, InputError> {
    if amt.is_finite() {
        Ok(amt)
    } else {
        Err(InputError::ResultOutOfRange)
    }
}

pub fn get_pmt_amount(
    principal: f64,   // loan principal (house value)
    term_months: u32, // number of monthly payments
    annual_rate: f64, // nominal annual rate as a percentage (i.e., 5.0, 3.75)
    dec_places: u32,  // round the payment to dec_places
) -> Result<f64, InputError> {
    let monthly_rate = annual_rate / 1200.;
    trace!("monthly rate {}", monthly_rate);

    // without interest the annuity factor is 0/0; repay in equal installments
    if monthly_rate == 0. {
        return check_finite(round(principal / term_months as f64, dec_places));
    }

    let discount = (1. + monthly_rate).powi(-(term_months as i32));
    let payment = (monthly_rate * principal) / (1. - discount);
    check_finite(round(payment, dec_places))
}
