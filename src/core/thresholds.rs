use crate::encoders::algorithms::errors::TableError;

/// Capacity of a threshold table: base 2 needs 64 lengths to cover `u64`.
pub const MAX_LENGTHS: usize = 64;

/// Smallest value that needs each output length, for one base.
///
/// `min[0] = 0` and `min[l] = (min[l - 1] + 1) * base`, stopping at the last
/// entry that fits in a `u64`. The half-open ranges between consecutive
/// entries, plus the final range up to `u64::MAX`, partition all of `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdTable {
    base: u64,
    bits: u32,
    mins: [u64; MAX_LENGTHS],
    len: usize,
}

impl ThresholdTable {
    pub const fn new(base: u64) -> Result<Self, TableError> {
        if base < 2 {
            return Err(TableError::BaseTooSmall { base });
        }

        let mut mins = [0u64; MAX_LENGTHS];
        let mut len = 1;
        while len < MAX_LENGTHS {
            let next = match mins[len - 1].checked_add(1) {
                Some(v) => v.checked_mul(base),
                None => None,
            };
            match next {
                Some(v) => {
                    mins[len] = v;
                    len += 1;
                }
                None => break,
            }
        }

        // The bit-length shortcut in `length_of` needs at least two bits per digit.
        let bits = if base.is_power_of_two() && base >= 4 {
            base.trailing_zeros()
        } else {
            0
        };

        Ok(ThresholdTable {
            base,
            bits,
            mins,
            len,
        })
    }

    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Longest encoding any `u64` needs (Lmax).
    pub const fn max_len(&self) -> usize {
        self.len
    }

    /// Smallest value whose canonical encoding is `len` symbols long.
    ///
    /// Panics unless `1 <= len <= max_len()`.
    #[inline(always)]
    pub fn min_value(&self, len: usize) -> u64 {
        self.mins[len - 1]
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.mins[..self.len]
    }

    /// Canonical encoded length of `n`.
    #[inline]
    pub fn length_of(&self, n: u64) -> usize {
        if self.bits == 0 {
            return self.as_slice().partition_point(|&min| min <= n);
        }

        let guess = ((u64::BITS - n.leading_zeros()) / self.bits) as usize;
        if guess >= self.len {
            return self.len;
        }
        guess + usize::from(self.mins[guess] <= n)
    }
}
