//! Menu choice validation.
//!
//! Pure functions only: reading lines is the game loop's job.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a number.")]
    Empty,

    #[error("'{0}' is not a number. Please enter a number.")]
    NotANumber(String),

    #[error("Please enter a number between 1 and {max}.")]
    OutOfRange { choice: u64, max: usize },
}

/// Parses a 1-based menu selection and returns the 0-based index.
pub fn parse_choice(raw: &str, option_count: usize) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let choice: u64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if choice == 0 || choice > option_count as u64 {
        return Err(InputError::OutOfRange {
            choice,
            max: option_count,
        });
    }
    Ok((choice - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_choices() {
        assert_eq!(parse_choice("1", 8), Ok(0));
        assert_eq!(parse_choice("8", 8), Ok(7));
        assert_eq!(parse_choice("  3 \n", 5), Ok(2));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_choice("", 5), Err(InputError::Empty));
        assert_eq!(parse_choice("   \n", 5), Err(InputError::Empty));
    }

    #[test]
    fn test_non_numeric_input() {
        assert_eq!(
            parse_choice("forest", 5),
            Err(InputError::NotANumber("forest".to_string()))
        );
        assert!(matches!(parse_choice("2.5", 5), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_choice("-1", 5), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_choice("0", 6),
            Err(InputError::OutOfRange { choice: 0, max: 6 })
        );
        assert_eq!(
            parse_choice("7", 6),
            Err(InputError::OutOfRange { choice: 7, max: 6 })
        );
    }

    #[test]
    fn test_huge_number_is_out_of_range() {
        assert!(matches!(
            parse_choice("18446744073709551615", 8),
            Err(InputError::OutOfRange { .. })
        ));
        // Past u64::MAX no longer parses
        assert!(matches!(
            parse_choice("99999999999999999999999", 8),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_no_options() {
        assert!(matches!(
            parse_choice("1", 0),
            Err(InputError::OutOfRange { max: 0, .. })
        ));
    }
}
