use std::convert::TryFrom;

use crate::domain::Domain;
use crate::error::SieveError;

/// Sieve of Eratosthenes generating all primes below a fixed limit.
///
/// The sieve owns a boolean flag domain covering [0, limit). Scanning upward
/// from 2, the first flagged index is the next smallest prime; reporting it
/// strikes every proper multiple within the domain, so every composite has
/// been struck by its smallest prime factor before the scan reaches it.
///
/// The two historical variants of this program agreed on the elimination
/// logic but not on how far the reporting scan ran (limit / 2 in one, limit
/// in the other; both happened to emit the same list for their fixed limit
/// of 100). The policy here is the full-range scan: every index in
/// [2, limit) is visited, and reported exactly when its flag survived.
///
/// Usage:
///
///     use prime_sieve::Sieve;
///
///     let sieve = Sieve::new(20).unwrap();
///     assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19], sieve.collect::<Vec<_>>());
pub struct Sieve {
    domain: Domain,
    n: usize,
}

impl Sieve {
    /// Allocate a sieve domain covering [0, limit).
    ///
    /// Fails with `ResourceExhaustion` when the limit does not fit the
    /// platform's address width or the domain allocation is refused. That is
    /// the only failure mode; the scan itself cannot fail.
    pub fn new(limit: u64) -> Result<Sieve, SieveError> {
        let domain_len =
            usize::try_from(limit).map_err(|_| SieveError::ResourceExhaustion { limit })?;
        let domain =
            Domain::new(domain_len).map_err(|_| SieveError::ResourceExhaustion { limit })?;

        Ok(Sieve { domain, n: 2 })
    }

    /// Strike every proper multiple of p within the domain.
    fn strike_multiples(&mut self, p: usize) {
        for multiple in (p * 2..self.domain.len()).step_by(p) {
            self.domain.strike(multiple);
        }
    }
}

impl Iterator for Sieve {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        while self.n < self.domain.len() {
            let n = self.n;
            self.n += 1;
            if self.domain.flagged(n) {
                self.strike_multiples(n);
                return Some(n as u64);
            }
        }
        None
    }
}

/// Collect all primes strictly below `limit`, in ascending order.
///
/// Each call allocates, scans, and discards its own domain; the same limit
/// always yields the same sequence.
pub fn compute(limit: u64) -> Result<Vec<u64>, SieveError> {
    Ok(Sieve::new(limit)?.collect())
}
