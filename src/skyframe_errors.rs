use thiserror::Error;

/// Errors raised at the fallible edges of the crate.
///
/// The coordinate transforms themselves never fail: numerically invalid
/// inputs propagate as `NaN`. Only date parsing and configuration loading
/// return a [`SkyframeError`].
#[derive(Error, Debug)]
pub enum SkyframeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid quadrant convention: {0} (expected \"legacy\" or \"atan2\")")]
    InvalidQuadrantConvention(String),

    #[error("Unable to parse transform configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl From<hifitime::HifitimeError> for SkyframeError {
    fn from(err: hifitime::HifitimeError) -> Self {
        SkyframeError::InvalidDate(err.to_string())
    }
}

impl PartialEq for SkyframeError {
    fn eq(&self, other: &Self) -> bool {
        use SkyframeError::*;
        match (self, other) {
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (InvalidQuadrantConvention(a), InvalidQuadrantConvention(b)) => a == b,

            // serde_json errors are not comparable: same variant is enough
            (ConfigParse(_), ConfigParse(_)) => true,

            _ => false,
        }
    }
}
