use thiserror::Error;

/// Typed failures raised at the classification boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BinError {
    #[error("invalid read-pair role code: {0}")]
    InvalidRoleCode(u8),
}
