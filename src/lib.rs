//! Interactive loan repayment and investment growth calculators.

pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod investment;
pub mod loan;
pub mod session;

pub use config::SessionConfig;
pub use console::{Console, Terminal};
pub use error::{FinanceError, InputError};
pub use investment::{InterestMode, Investment};
pub use loan::Loan;
pub use session::MenuChoice;
