mod token_parser;
mod weights;

pub use token_parser::{Sign, TokenParser};
pub use weights::{parse_weight, parse_weights, ParseMode};

#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    #[error("Negative weight in token {token:?}")]
    NegativeWeight { token: String },

    #[error("Weight overflow in token {token:?}: does not fit in 64 bits")]
    Overflow { token: String },

    #[error("Malformed weight token {token:?}")]
    Malformed { token: String },
}

type Result<T, E = ParsingError> = std::result::Result<T, E>;
