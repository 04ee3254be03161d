use thiserror::Error;

/// Fatal interpreter errors. Any of these aborts the load phase.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpError {
    /// Unknown command, empty record, or wrong number of arguments.
    #[error("syntax error")]
    Syntax,

    /// `define` named a shape type that has no factory.
    #[error("{0}: no such shape")]
    NoSuchShape(String),

    #[error("{0}: invalid number")]
    InvalidNumber(String),

    #[error("{0}: invalid color")]
    InvalidColor(String),

    /// Polygon coordinates must come in `x y` pairs.
    #[error("{0} coordinates: expected x y pairs")]
    OddCoordinates(usize),
}

pub type Result<T> = std::result::Result<T, InterpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_script_diagnostics() {
        assert_eq!(InterpError::Syntax.to_string(), "syntax error");
        assert_eq!(InterpError::NoSuchShape("blob".into()).to_string(), "blob: no such shape");
        assert_eq!(InterpError::InvalidColor("blurple".into()).to_string(), "blurple: invalid color");
    }
}
