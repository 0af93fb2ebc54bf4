//! Operator input normalization
//!
//! Pure helpers that turn raw console text into the values the record
//! operations accept.

use crate::types::{Amount, GymError, MAX_AGE, MIN_AGE};

/// Title-case a string
///
/// The first letter of every run of alphabetic characters is uppercased and
/// the remaining letters of the run are lowercased. Any non-alphabetic
/// character (space, hyphen, digit, apostrophe) starts a new run.
///
/// ```
/// use gym_ledger::core::normalize::title_case;
///
/// assert_eq!(title_case("half-yearly"), "Half-Yearly");
/// assert_eq!(title_case("aLiCe SMITH"), "Alice Smith");
/// ```
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(c);
            in_word = false;
        }
    }

    output
}

/// Parse and range-check a member age
///
/// # Errors
///
/// Returns `InvalidInput` if the text is not an integer or lies outside
/// the accepted range.
pub fn parse_age(input: &str) -> Result<u8, GymError> {
    let age: i64 = input
        .trim()
        .parse()
        .map_err(|_| GymError::invalid_input("age", format!("'{}' is not a number", input.trim())))?;

    validate_age(age)
}

/// Check that an age lies in the accepted range
pub fn validate_age(age: i64) -> Result<u8, GymError> {
    if age < i64::from(MIN_AGE) || age > i64::from(MAX_AGE) {
        return Err(GymError::invalid_input(
            "age",
            format!("should be between {} and {}", MIN_AGE, MAX_AGE),
        ));
    }
    // Range-checked above.
    Ok(age as u8)
}

/// Parse a payment amount
///
/// # Errors
///
/// Returns `InvalidInput` if the text is not an integer.
pub fn parse_amount(input: &str) -> Result<Amount, GymError> {
    input
        .trim()
        .parse()
        .map_err(|_| GymError::invalid_input("amount", format!("'{}' is not a number", input.trim())))
}

/// Normalize a member id typed at the console
pub fn normalize_member_id(input: &str) -> String {
    input.trim().to_uppercase()
}
