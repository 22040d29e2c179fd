mod status_precedence;

pub use status_precedence::{OutcomeTally, StatusPrecedence};
