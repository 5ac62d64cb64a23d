//! 统一错误处理
//!
//! [`AppError`] gathers the component errors behind one type so the front
//! end can decide how each failure is shown:
//!
//! | Kind | Shown as |
//! |------|----------|
//! | `Checkout` | blocking alert |
//! | `Price` / `Review` | inline message |
//! | `Storage` | inline message, state unchanged |
//! | `Source` | replaces the content area |

use crate::cart::PriceError;
use crate::checkout::CheckoutError;
use crate::locations::ReviewError;
use crate::sources::SourceError;
use crate::storage::StorageError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("Invalid price: {0}")]
    Price(#[from] PriceError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("{0} not found")]
    NotFound(String),
}

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Checkout validation failures block the user with an alert
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Checkout(_))
    }

    /// Failures the UI swallows without telling the user
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Review(ReviewError::EmptyText))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_errors_keep_their_message() {
        let err = AppError::from(CheckoutError::EmptyCart);
        assert_eq!(err.to_string(), "Your cart is empty.");
        assert!(err.is_blocking());
        assert!(!err.is_silent());
    }

    #[test]
    fn test_empty_review_is_silent() {
        let err = AppError::from(ReviewError::EmptyText);
        assert!(err.is_silent());
        assert!(!err.is_blocking());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::not_found("Location pelham").to_string(), "Location pelham not found");
    }
}
