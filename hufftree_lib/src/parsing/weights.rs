use super::{ParsingError::*, Result, Sign, TokenParser};

/// How command-line tokens are turned into weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// `atoi`-like: leading whitespace is skipped, trailing garbage is
    /// ignored and a token without digits reads as 0.
    #[default]
    Lenient,
    /// The whole token must be an optionally `+`-signed run of digits.
    Strict,
}

fn digits_value(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, digit| {
        acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
    })
}

/// Parse a single weight token.
///
/// Negative weights are rejected in both modes, except for `-0`. Values
/// that do not fit in a `u64` are an error instead of wrapping.
/// # Example
/// ```
/// # use hufftree_lib::parsing::{parse_weight, ParseMode, ParsingError};
/// assert_eq!(parse_weight("  12abc", ParseMode::Lenient)?, 12);
/// assert_eq!(parse_weight("abc", ParseMode::Lenient)?, 0);
/// assert!(parse_weight("abc", ParseMode::Strict).is_err());
/// # Ok::<(), ParsingError>(())
/// ```
pub fn parse_weight(token: &str, mode: ParseMode) -> Result<u64> {
    let mut parser = TokenParser::new(token);
    if mode == ParseMode::Lenient {
        parser.skip_whitespace();
    }

    let sign = parser.sign();
    let digits = parser.digits();

    if mode == ParseMode::Strict && (digits.is_empty() || !parser.is_empty()) {
        return Err(Malformed {
            token: token.to_owned(),
        });
    }

    let value = digits_value(digits).ok_or_else(|| Overflow {
        token: token.to_owned(),
    })?;

    if sign == Some(Sign::Minus) && value != 0 {
        return Err(NegativeWeight {
            token: token.to_owned(),
        });
    }

    Ok(value)
}

/// Parse every token, stopping at the first invalid one.
pub fn parse_weights<S: AsRef<str>>(tokens: &[S], mode: ParseMode) -> Result<Vec<u64>> {
    tokens
        .iter()
        .map(|token| parse_weight(token.as_ref(), mode))
        .collect()
}
