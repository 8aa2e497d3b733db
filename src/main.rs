use prime_sieve::{compute, SieveError};

/// Print every prime below 100, one per line.
fn main() -> Result<(), SieveError> {
    for p in compute(100)? {
        println!("{}", p);
    }
    Ok(())
}
