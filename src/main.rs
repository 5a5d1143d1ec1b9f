use finance_calculators::session;
use finance_calculators::{FinanceError, SessionConfig, Terminal};
use log::error;
use simple_logger::SimpleLogger;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
        .unwrap();

    let config = SessionConfig::default();
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());

    match session::run(&mut terminal, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("session ended: {}", err);
            if let FinanceError::EndOfInput = err {
                eprintln!("\nNo more input; exiting without a result.");
            } else {
                eprintln!("\n{}", err);
            }
            ExitCode::FAILURE
        }
    }
}

// verifies that types can implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<finance_calculators::Loan>();
    is_normal::<finance_calculators::Investment>();
    is_normal::<finance_calculators::MenuChoice>();
    is_normal::<SessionConfig>();
}
