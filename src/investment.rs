use crate::error::InputError;
use crate::loan::{check_finite, round};
use log::trace;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterestMode {
    /// Interest on the original principal only, once per year.
    Simple,
    /// Interest on principal plus accumulated interest, compounded annually.
    Compound,
}

impl fmt::Display for InterestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterestMode::Simple => write!(f, "simple"),
            InterestMode::Compound => write!(f, "compound"),
        }
    }
}

#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Investment {
    pub principal: f64,
    pub term_years: u32,
    pub annual_rate: f64,
    pub mode: InterestMode,
    pub dec_places: u32,
    final_balance: f64,
}

impl Investment {
    pub fn new(
        principal: f64,
        term_years: u32,
        annual_rate: f64,
        mode: InterestMode,
        dec_places: u32,
    ) -> Result<Self, InputError> {
        let final_balance =
            get_final_balance(principal, term_years, annual_rate, mode, dec_places)?;
        Ok(Self {
            principal,
            term_years,
            annual_rate,
            mode,
            dec_places,
            final_balance,
        })
    }

    pub fn get_final_balance(&self) -> f64 {
        self.final_balance
    }

    pub fn get_interest_earned(&self) -> f64 {
        round(self.final_balance - self.principal, self.dec_places)
    }
}

impl fmt::Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "principal {:.dec$}, {} years at {}% {}, final balance {:.dec$}",
            self.principal,
            self.term_years,
            self.annual_rate,
            self.mode,
            self.final_balance,
            dec = self.dec_places as usize,
        )
    }
}

pub fn get_final_balance(
    principal: f64,   // amount invested
    term_years: u32,  // years invested
    annual_rate: f64, // annual rate as a percentage (i.e., 5.0)
    mode: InterestMode,
    dec_places: u32,
) -> Result<f64, InputError> {
    // nothing grows from nothing, even when the growth factor overflows
    if principal == 0. {
        return Ok(0.);
    }

    let rate = annual_rate / 100.;
    let growth = match mode {
        InterestMode::Simple => 1. + rate * term_years as f64,
        InterestMode::Compound => (1. + rate).powi(term_years as i32),
    };
    trace!("{} growth factor {}", mode, growth);

    check_finite(round(principal * growth, dec_places))
}
