//! Error type for every BSP entry point.
//!
//! ESP-IDF reports failures as `esp_err_t` status codes. The BSP forwards
//! them unchanged: the two codes it produces itself get named variants and
//! every other driver code is carried verbatim in [`BspError::Driver`].

use core::fmt;

/// `esp_err_t` value for success.
pub const ESP_OK: i32 = 0;
/// `esp_err_t` value for a generic failure.
pub const ESP_FAIL: i32 = -1;
/// `esp_err_t` value for a bad parameter.
pub const ESP_ERR_INVALID_ARG: i32 = 0x102;

/// Every fallible BSP operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BspError {
    /// A parameter was rejected (`ESP_ERR_INVALID_ARG`).
    InvalidArg,
    /// Generic failure, e.g. a driver returned a null handle (`ESP_FAIL`).
    Fail,
    /// Any other status code reported by a vendor driver.
    Driver(i32),
}

impl BspError {
    /// Translate a driver status code. `ESP_OK` maps to `Ok(())`.
    pub const fn from_code(code: i32) -> Result<()> {
        match code {
            ESP_OK => Ok(()),
            ESP_FAIL => Err(Self::Fail),
            ESP_ERR_INVALID_ARG => Err(Self::InvalidArg),
            other => Err(Self::Driver(other)),
        }
    }

    /// The `esp_err_t` this error stands for.
    pub const fn code(self) -> i32 {
        match self {
            Self::InvalidArg => ESP_ERR_INVALID_ARG,
            Self::Fail => ESP_FAIL,
            Self::Driver(code) => code,
        }
    }
}

/// Collapse a BSP result back into a status code, for callers that speak
/// `esp_err_t`.
pub const fn to_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => ESP_OK,
        Err(e) => e.code(),
    }
}

impl fmt::Display for BspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArg => write!(f, "invalid argument"),
            Self::Fail => write!(f, "operation failed"),
            Self::Driver(code) => write!(f, "driver error (rc=0x{:x})", code),
        }
    }
}

impl std::error::Error for BspError {}

/// BSP-wide `Result` alias.
pub type Result<T> = core::result::Result<T, BspError>;
