use std::cmp;
use std::collections::TryReserveError;

/// Fixed-size boolean flag domain for the sieve.
///
/// `flagged(i)` means "i has not yet been proven composite". Flags are packed
/// one bit per index into u64 words: a vector of bits saves eight times the
/// memory compared to a vector of bools representing the same range, at the
/// cost of a couple extra CPU cycles of bit operations per access.
///
/// The domain is owned by a single sieve invocation. It is allocated once,
/// struck in place during the scan, and discarded afterward; nothing about it
/// persists between invocations.
pub struct Domain {
    words: Vec<u64>,
    len: usize,
}

impl Domain {
    const WORD_BITS: usize = 64;
    const SHIFT: usize = 6;
    const MASK: usize = 0b11_1111;

    /// Allocate a domain of `len` flags, all true except indices 0 and 1,
    /// which are never prime by definition.
    ///
    /// Allocation is fallible so that an oversized bound reaches the caller
    /// as an error instead of aborting the process.
    pub fn new(len: usize) -> Result<Domain, TryReserveError> {
        let word_len = ceil_div(len, Domain::WORD_BITS);
        let mut words = Vec::new();
        words.try_reserve_exact(word_len)?;
        words.resize(word_len, u64::MAX);
        // Flags past len stay false so the last word carries no stray
        // candidates.
        if let Some(end) = words.get_mut(len >> Domain::SHIFT) {
            *end &= !(u64::MAX << (len & Domain::MASK));
        }

        let mut domain = Domain { words, len };
        for i in 0..cmp::min(len, 2) {
            domain.strike(i);
        }
        Ok(domain)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// True if `index` has not been struck.
    pub fn flagged(&self, index: usize) -> bool {
        self.words[index >> Domain::SHIFT] & (1 << (index & Domain::MASK)) != 0
    }

    /// Strike `index` from the domain. Striking is monotonic: a struck flag
    /// is never set true again, and there is no operation that sets flags.
    pub fn strike(&mut self, index: usize) {
        self.words[index >> Domain::SHIFT] &= !(1 << (index & Domain::MASK));
    }
}

fn ceil_div(numerator: usize, denominator: usize) -> usize {
    numerator / denominator + (numerator % denominator != 0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strikes_zero_and_one() {
        let domain = Domain::new(10).unwrap();
        assert!(!domain.flagged(0));
        assert!(!domain.flagged(1));
        for index in 2..10 {
            assert!(domain.flagged(index));
        }
    }

    #[test]
    fn new_handles_tiny_lengths() {
        assert_eq!(0, Domain::new(0).unwrap().len());

        let domain = Domain::new(1).unwrap();
        assert!(!domain.flagged(0));

        let domain = Domain::new(2).unwrap();
        assert!(!domain.flagged(0));
        assert!(!domain.flagged(1));
    }

    #[test]
    fn strike_is_monotonic() {
        let mut domain = Domain::new(12).unwrap();
        domain.strike(4);
        domain.strike(4);
        assert!(!domain.flagged(4));
        assert!(domain.flagged(5));
    }

    #[test]
    fn strike_across_word_boundary() {
        let mut domain = Domain::new(130).unwrap();
        domain.strike(63);
        domain.strike(64);
        domain.strike(128);
        assert!(!domain.flagged(63));
        assert!(!domain.flagged(64));
        assert!(!domain.flagged(128));
        assert!(domain.flagged(65));
        assert!(domain.flagged(127));
        assert!(domain.flagged(129));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_domain_fails_to_allocate() {
        assert!(Domain::new(usize::MAX).is_err());
    }
}
