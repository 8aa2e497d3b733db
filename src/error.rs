use std::error::Error;
use std::fmt;

/// Error type for sieve construction.
///
/// The scan itself is pure boolean logic over a fixed domain and cannot fail;
/// the only failure mode is being unable to materialize the domain in the
/// first place. That error is fatal to the call: retrying with the same limit
/// cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// The requested limit cannot be allocated as a flag domain, either
    /// because it exceeds the platform's addressable size or because the
    /// backing allocation was refused.
    ResourceExhaustion {
        /// The limit that was requested.
        limit: u64,
    },
}

impl fmt::Display for SieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SieveError::ResourceExhaustion { limit } => {
                write!(f, "cannot allocate a sieve domain of {} flags", limit)
            }
        }
    }
}

impl Error for SieveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_limit() {
        let error = SieveError::ResourceExhaustion { limit: 42 };
        assert_eq!(
            "cannot allocate a sieve domain of 42 flags",
            error.to_string()
        );
    }
}
