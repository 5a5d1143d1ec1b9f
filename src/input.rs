//! Reading typed values out of free text.
//!
//! Numeric tokens are sanitised by dropping everything except digits and the decimal
//! point, so `£1,234.56`, `5%` and `240 months` all parse. A rejected token is reported
//! and the same prompt is shown again until a valid value arrives or input ends.

use crate::console::Console;
use crate::error::{FinanceError, InputError};
use crate::investment::InterestMode;
use log::{debug, warn};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputKind {
    /// Non-negative amount with at most `dec_places` fractional digits.
    Money { dec_places: u32 },
    /// Non-negative rate as typed by the user, e.g. 5 for 5%.
    Percentage,
    /// Whole number of months or years, at least 1.
    Period,
    InterestMode,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ValidatedValue {
    Money(f64),
    Percentage(f64),
    Period(u32),
    InterestMode(InterestMode),
}

fn non_numeric() -> &'static Regex {
    static NON_NUMERIC: OnceLock<Regex> = OnceLock::new();
    NON_NUMERIC.get_or_init(|| Regex::new(r"[^\d.]").expect("static pattern"))
}

/// Remove currency symbols, thousands separators, percent signs and any other decoration.
pub fn sanitise_num(value: &str) -> String {
    non_numeric().replace_all(value, "").into_owned()
}

// shared by every numeric kind: reject signs, strip decoration, parse
fn parse_non_negative(raw: &str) -> Result<(String, f64), InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::Empty);
    }
    if raw.contains('-') {
        return Err(InputError::Negative(raw.to_string()));
    }
    let cleaned = sanitise_num(raw);
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok((cleaned, value)),
        _ => Err(InputError::NotANumber(raw.to_string())),
    }
}

pub fn parse_money(raw: &str, dec_places: u32) -> Result<f64, InputError> {
    let (cleaned, value) = parse_non_negative(raw)?;
    let decimals = cleaned.split_once('.').map_or(0, |(_, frac)| frac.len());
    if decimals > dec_places as usize {
        return Err(InputError::TooManyDecimals {
            raw: raw.to_string(),
            max: dec_places,
        });
    }
    Ok(value)
}

pub fn parse_percentage(raw: &str) -> Result<f64, InputError> {
    parse_non_negative(raw).map(|(_, value)| value)
}

pub fn parse_period(raw: &str) -> Result<u32, InputError> {
    let (_, value) = parse_non_negative(raw)?;
    if value.fract() != 0. || value > i32::MAX as f64 {
        return Err(InputError::NotWholeNumber(raw.to_string()));
    }
    if value < 1. {
        return Err(InputError::NotPositive(raw.to_string()));
    }
    Ok(value as u32)
}

pub fn parse_interest_mode(raw: &str) -> Result<InterestMode, InputError> {
    match raw.trim().to_lowercase().as_str() {
        "simple" => Ok(InterestMode::Simple),
        "compound" => Ok(InterestMode::Compound),
        _ => Err(InputError::UnknownMode(raw.to_string())),
    }
}

/// Check a single raw token against `kind`.
pub fn validate(kind: InputKind, raw: &str) -> Result<ValidatedValue, InputError> {
    match kind {
        InputKind::Money { dec_places } => {
            parse_money(raw, dec_places).map(ValidatedValue::Money)
        }
        InputKind::Percentage => parse_percentage(raw).map(ValidatedValue::Percentage),
        InputKind::Period => parse_period(raw).map(ValidatedValue::Period),
        InputKind::InterestMode => parse_interest_mode(raw).map(ValidatedValue::InterestMode),
    }
}

/// Ask for `prompt` until `parse` accepts the answer. Only a closed or broken
/// console ends the loop early.
pub fn prompt_until<C, T, F>(console: &mut C, prompt: &str, parse: F) -> Result<T, FinanceError>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let raw = console.read_line(&format!("{}: ", prompt))?;
        match parse(&raw) {
            Ok(value) => {
                debug!("accepted '{}' for \"{}\"", raw, prompt);
                return Ok(value);
            }
            Err(err) => {
                warn!("rejected input for \"{}\": {}", prompt, err);
                console.report(&format!("\nERROR! {}! Please try again.\n", err))?;
            }
        }
    }
}

/// Prompt for any kind and hand back the validated value.
pub fn get_input<C: Console + ?Sized>(
    console: &mut C,
    kind: InputKind,
    prompt: &str,
) -> Result<ValidatedValue, FinanceError> {
    prompt_until(console, prompt, |raw| validate(kind, raw))
}

pub fn get_money<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    dec_places: u32,
) -> Result<f64, FinanceError> {
    prompt_until(console, prompt, |raw| parse_money(raw, dec_places))
}

pub fn get_percentage<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<f64, FinanceError> {
    prompt_until(console, prompt, parse_percentage)
}

pub fn get_period<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<u32, FinanceError> {
    prompt_until(console, prompt, parse_period)
}

pub fn get_interest_mode<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<InterestMode, FinanceError> {
    prompt_until(console, prompt, parse_interest_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use std::io::Cursor;
    use test_log::test;

    const MONEY: InputKind = InputKind::Money { dec_places: 2 };
    const PERCENTAGE: InputKind = InputKind::Percentage;
    const PERIOD: InputKind = InputKind::Period;
    const MODE: InputKind = InputKind::InterestMode;

    #[test]
    fn test_sanitise_num() {
        assert_eq!(sanitise_num("£1,234.56"), "1234.56");
        assert_eq!(sanitise_num("5.5%"), "5.5");
        assert_eq!(sanitise_num("240 months"), "240");
        assert_eq!(sanitise_num("abc"), "");
    }

    #[test]
    fn test_validate_money() {
        let money = |value: f64| -> Result<_, InputError> { Ok(ValidatedValue::Money(value)) };
        assert_eq!(validate(MONEY, "£1,234.56"), money(1234.56));
        assert_eq!(validate(MONEY, "$100000"), money(100000.));
        assert_eq!(validate(MONEY, "0"), money(0.));
        assert_eq!(validate(MONEY, "12.5"), money(12.5));
        assert_eq!(validate(MONEY, "100."), money(100.));

        assert_eq!(
            validate(MONEY, "abc"),
            Err(InputError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            validate(MONEY, "1.234"),
            Err(InputError::TooManyDecimals {
                raw: "1.234".to_string(),
                max: 2
            })
        );
        assert_eq!(
            validate(MONEY, "-£50"),
            Err(InputError::Negative("-£50".to_string()))
        );
        assert_eq!(
            validate(MONEY, "1.2.3"),
            Err(InputError::NotANumber("1.2.3".to_string()))
        );
        assert_eq!(validate(MONEY, "   "), Err(InputError::Empty));
    }

    #[test]
    fn test_validate_percentage() {
        let percentage =
            |value: f64| -> Result<_, InputError> { Ok(ValidatedValue::Percentage(value)) };
        assert_eq!(validate(PERCENTAGE, "5"), percentage(5.));
        assert_eq!(validate(PERCENTAGE, "3.875%"), percentage(3.875));
        assert_eq!(validate(PERCENTAGE, "0%"), percentage(0.));
        assert_eq!(
            validate(PERCENTAGE, "five"),
            Err(InputError::NotANumber("five".to_string()))
        );
        assert_eq!(
            validate(PERCENTAGE, "-5%"),
            Err(InputError::Negative("-5%".to_string()))
        );
    }

    #[test]
    fn test_validate_period() {
        let period = |value: u32| -> Result<_, InputError> { Ok(ValidatedValue::Period(value)) };
        assert_eq!(validate(PERIOD, "240"), period(240));
        assert_eq!(validate(PERIOD, "10 years"), period(10));
        assert_eq!(validate(PERIOD, "12.0"), period(12));
        assert_eq!(validate(PERIOD, "1"), period(1));
        assert_eq!(validate(PERIOD, "2147483647"), period(2147483647));
        assert_eq!(
            validate(PERIOD, "12.5"),
            Err(InputError::NotWholeNumber("12.5".to_string()))
        );
        assert_eq!(
            validate(PERIOD, "0"),
            Err(InputError::NotPositive("0".to_string()))
        );
        assert_eq!(
            validate(PERIOD, "-12"),
            Err(InputError::Negative("-12".to_string()))
        );
        assert_eq!(
            validate(PERIOD, "2147483648"),
            Err(InputError::NotWholeNumber("2147483648".to_string()))
        );
    }

    #[test]
    fn test_validate_interest_mode() {
        assert_eq!(
            validate(MODE, "SIMPLE"),
            Ok(ValidatedValue::InterestMode(InterestMode::Simple))
        );
        assert_eq!(
            validate(MODE, " Compound "),
            Ok(ValidatedValue::InterestMode(InterestMode::Compound))
        );
        for raw in ["comp", "compund", "s", ""] {
            assert_eq!(
                validate(MODE, raw),
                Err(InputError::UnknownMode(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_get_input_reprompts_until_valid() {
        let mut term = Terminal::new(Cursor::new("abc\n1.999\n£1,234.56\n"), Vec::new());
        assert_eq!(
            get_input(&mut term, MONEY, "The house value").unwrap(),
            ValidatedValue::Money(1234.56)
        );

        let output = String::from_utf8(term.into_writer()).unwrap();
        let decimals = "ERROR! '1.999' has more than 2 decimal places! Please try again.";
        assert_eq!(output.matches("The house value: ").count(), 3);
        assert!(output.contains("ERROR! 'abc' is not a number! Please try again."));
        assert!(output.contains(decimals));
    }

    #[test]
    fn test_typed_getters() {
        let script = "5%\nten\n10\nsimpel\nCOMPOUND\n";
        let mut term = Terminal::new(Cursor::new(script), Vec::new());
        assert_eq!(get_percentage(&mut term, "rate").unwrap(), 5.);
        assert_eq!(get_period(&mut term, "years").unwrap(), 10);
        assert_eq!(
            get_interest_mode(&mut term, "mode").unwrap(),
            InterestMode::Compound
        );
    }

    #[test]
    fn test_end_of_input_while_reprompting() {
        let mut term = Terminal::new(Cursor::new("abc\n"), Vec::new());
        assert!(matches!(
            get_money(&mut term, "The investment amount", 2),
            Err(FinanceError::EndOfInput)
        ));
    }
}
