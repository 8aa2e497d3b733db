// Internal modules
mod domain;
mod error;
mod sieve;

pub use crate::error::SieveError;
pub use crate::sieve::{compute, Sieve};
