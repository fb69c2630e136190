use crate::error::ValidationError;

/// Parse a user-typed amount in milliliters.
///
/// Front-ends call this before [`IntakeController::add`](super::IntakeController::add);
/// a rejected amount never reaches the controller.
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    let amount = trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::NotANumber(trimmed.to_string()))?;

    if amount <= 0.0 {
        return Err(ValidationError::NotPositive(trimmed.to_string()));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_numbers() {
        assert_eq!(parse_amount("250"), Ok(250.0));
        assert_eq!(parse_amount(" 330.5 "), Ok(330.5));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn rejects_text() {
        for input in ["abc", "", "   ", "Enter ml", "250ml"] {
            assert!(
                matches!(parse_amount(input), Err(ValidationError::NotANumber(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_finite() {
        for input in ["NaN", "inf", "-inf", "infinity"] {
            assert!(matches!(
                parse_amount(input),
                Err(ValidationError::NotANumber(_))
            ));
        }
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(matches!(parse_amount("0"), Err(ValidationError::NotPositive(_))));
        assert!(matches!(parse_amount("-5"), Err(ValidationError::NotPositive(_))));
        assert!(matches!(parse_amount("-0.0"), Err(ValidationError::NotPositive(_))));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            parse_amount("x").unwrap_err().to_string(),
            "Please enter a valid number for the amount."
        );
        assert_eq!(
            parse_amount("0").unwrap_err().to_string(),
            "Please enter a positive number."
        );
    }
}
