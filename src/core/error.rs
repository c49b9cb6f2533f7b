use thiserror::Error;

/// Gateway-wide error model for uniform RPC/report mapping.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Divide was asked for a quotient with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
    /// The peer could not be reached or the tool catalog could not be read.
    #[error("connection failure: {0}")]
    Connection(String),
    #[error("{0}")]
    Message(String),
}

impl From<anyhow::Error> for CalcError {
    fn from(e: anyhow::Error) -> Self {
        CalcError::Message(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn it_displays_connection_failure_with_detail() {
        let e = CalcError::Connection("refused".into());
        assert_eq!(e.to_string(), "connection failure: refused");
    }

    #[test]
    fn it_converts_from_anyhow() {
        let any: anyhow::Error = anyhow::anyhow!("nope");
        let e: CalcError = any.into();
        assert_eq!(e.to_string(), "nope");
    }
}
