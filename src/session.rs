//! The interactive menu loop: pick a calculator, gather its inputs, print the result.

use crate::config::SessionConfig;
use crate::console::Console;
use crate::error::{FinanceError, InputError};
use crate::input::{get_interest_mode, get_money, get_percentage, get_period};
use crate::investment::Investment;
use crate::loan::Loan;
use log::{info, warn};
use std::str::FromStr;

const MENU: &str = "Which calculator would you like to use?
    - Mortgage calculator - used to calculate home loan repayments
    - Investment calculator - used to calculate interest on an investment

type 'mortgage' (or 'bond') or 'investment' to select, or 'cancel' to exit.
";

const LOAN_INTRO: &str = "In order to calculate how much you'll need to repay each month you'll need to provide:
    1) The current value of the house
    2) The interest rate (as a percentage)
    3) The number of months you want the loan to be over

Please enter:
";

const INVESTMENT_INTRO: &str = "In order to calculate the amount of interest you'll need to provide:
    1) The investment amount
    2) The interest rate (as a percentage)
    3) The number of years the amount is being invested for
    4) If the interest is 'simple' or 'compound'

Please enter:
";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuChoice {
    LoanCalculation,
    InvestmentCalculation,
    Cancel,
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "mortgage" | "bond" => Ok(MenuChoice::LoanCalculation),
            "investment" => Ok(MenuChoice::InvestmentCalculation),
            "cancel" => Ok(MenuChoice::Cancel),
            other => Err(InputError::UnknownRequest(other.to_string())),
        }
    }
}

fn banner(title: &str, fill: &str) -> String {
    format!("{0}{1}{0}", fill.repeat(10), title)
}

/// Show the menu until a recognised choice is entered.
pub fn select<C: Console + ?Sized>(console: &mut C) -> Result<MenuChoice, FinanceError> {
    loop {
        console.report(MENU)?;
        let raw = console.read_line("input: ")?;
        match raw.parse::<MenuChoice>() {
            Ok(choice) => return Ok(choice),
            Err(err) => {
                warn!("menu: {}", err);
                console.report(&format!(
                    "\n{}\n",
                    banner(&format!("ERROR! {}! Please try again.", err), "-")
                ))?;
            }
        }
    }
}

// an unrepresentable result sends the user back to the menu rather than printing inf
fn report_out_of_range<C: Console + ?Sized>(
    console: &mut C,
    err: InputError,
) -> Result<(), FinanceError> {
    warn!("calculation failed: {}", err);
    console.report(&format!("\nERROR! {}! Please try again.", err))
}

/// Gather a loan and print its repayments. `None` when the figures overflow.
pub fn calculate_loan<C: Console + ?Sized>(
    console: &mut C,
    config: &SessionConfig,
) -> Result<Option<Loan>, FinanceError> {
    console.report(&format!("\n{}\n", banner("Mortgage calculator", "-")))?;
    console.report(LOAN_INTRO)?;

    let amount = get_money(console, "The house value", config.dec_places)?;
    let rate = get_percentage(console, "The interest rate (as a percentage)")?;
    let months = get_period(console, "The number of months to repay over")?;

    let loan = match Loan::new(amount, months, rate, config.dec_places) {
        Ok(loan) => loan,
        Err(err) => {
            report_out_of_range(console, err)?;
            return Ok(None);
        }
    };
    info!("loan: {}", loan);
    console.report(&format!(
        "\nYou will have to repay {} each month, and {} in total.",
        config.format_money(loan.get_pmt_amount()),
        config.format_money(loan.get_total_paid())
    ))?;
    Ok(Some(loan))
}

/// Gather an investment and print its final balance. `None` when the figures overflow.
pub fn calculate_investment<C: Console + ?Sized>(
    console: &mut C,
    config: &SessionConfig,
) -> Result<Option<Investment>, FinanceError> {
    console.report(&format!("\n{}\n", banner("Investment calculator", "-")))?;
    console.report(INVESTMENT_INTRO)?;

    let amount = get_money(console, "The investment amount", config.dec_places)?;
    let rate = get_percentage(console, "The interest rate (as a percentage)")?;
    let years = get_period(console, "How many years you are investing for")?;
    let mode = get_interest_mode(console, "'Simple' or 'Compound' interest")?;

    let investment = match Investment::new(amount, years, rate, mode, config.dec_places) {
        Ok(investment) => investment,
        Err(err) => {
            report_out_of_range(console, err)?;
            return Ok(None);
        }
    };
    info!("investment: {}", investment);
    console.report(&format!("\n{} interest", mode))?;
    console.report(&format!(
        "\nAfter {} years, you will have {}, having earned {} in interest.",
        years,
        config.format_money(investment.get_final_balance()),
        config.format_money(investment.get_interest_earned())
    ))?;
    Ok(Some(investment))
}

/// Run the whole dialogue. Returns once the user cancels, or after the first result
/// when `return_to_menu` is off.
pub fn run<C: Console + ?Sized>(
    console: &mut C,
    config: &SessionConfig,
) -> Result<(), FinanceError> {
    console.report(&format!("{}\n", banner("finance calculators", "=")))?;

    loop {
        let choice = select(console)?;
        info!("selected {:?}", choice);
        match choice {
            MenuChoice::LoanCalculation => {
                calculate_loan(console, config)?;
            }
            MenuChoice::InvestmentCalculation => {
                calculate_investment(console, config)?;
            }
            MenuChoice::Cancel => break,
        }
        if !config.return_to_menu {
            break;
        }
        console.report("")?;
    }

    console.report(&format!("\n{}", banner("finance calculators END", "=")))?;
    Ok(())
}
