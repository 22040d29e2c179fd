/// Type alias for Result with anyhow::Error as the error type.
/// Only the I/O edge (payload reading, config loading, output writing) returns errors;
/// aggregation and badge presentation are total functions.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
