use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreditCardError {
    #[error("negative amount")]
    NegativeAmount,

    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: i32, available: i32 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
