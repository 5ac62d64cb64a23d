//! 工具模块
//!
//! - [`error`]: application error type
//! - [`logger`]: tracing subscriber setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};
