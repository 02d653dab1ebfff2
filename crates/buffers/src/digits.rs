//! Little-endian digit accumulator with doubling growth.

use thiserror::Error;
use tracing::trace;

/// Smallest backing buffer allocated once the accumulator has to grow.
const MIN_CAPACITY: usize = 8;

/// Reported when the accumulator cannot obtain memory for more digits.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("failed to allocate room for {requested} digits")]
pub struct AllocError {
    /// The buffer size, in digits, that could not be reserved.
    pub requested: usize,
}

/// An arbitrary-precision unsigned integer stored as little-endian digits.
///
/// Every digit is smaller than the base passed to [`Digits::mul_add`], which
/// is at most 256, so a digit always fits in a byte. The backing buffer is
/// zero-filled up to its capacity and `len` marks the significant digits.
///
/// # Example
///
/// ```
/// use radix_buffers::Digits;
///
/// // 0x01_00 in base 58 is 256 = 4 * 58 + 24.
/// let mut digits = Digits::with_capacity(2).unwrap();
/// digits.mul_add(58, 256, 0x01).unwrap();
/// digits.mul_add(58, 256, 0x00).unwrap();
/// assert_eq!(digits.iter_be().collect::<Vec<_>>(), [4, 24]);
/// ```
#[derive(Debug, Clone)]
pub struct Digits {
    buf: Vec<u8>,
    len: usize,
}

impl Digits {
    /// Creates an empty accumulator (the value zero) with room for
    /// `capacity` digits.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            buf: zeroed(capacity)?,
            len: 0,
        })
    }

    /// Number of significant digits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of digits that fit before the next reallocation.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Significant digits, least significant first.
    pub fn as_le_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Significant digits, most significant first.
    pub fn iter_be(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_le_slice().iter().rev().copied()
    }

    /// Replaces the value `v` with `v * multiplier + addend`, all in `base`.
    ///
    /// The carry is propagated across the existing digits and whatever is
    /// left over is flushed into new high digits.
    pub fn mul_add(&mut self, base: u32, multiplier: u32, addend: u32) -> Result<(), AllocError> {
        debug_assert!((2..=256).contains(&base));
        debug_assert!(multiplier <= 256);

        let mut carry = addend;
        for digit in &mut self.buf[..self.len] {
            carry += u32::from(*digit) * multiplier;
            *digit = (carry % base) as u8;
            carry /= base;
        }
        while carry > 0 {
            self.push((carry % base) as u8)?;
            carry /= base;
        }
        Ok(())
    }

    /// Appends a new most significant digit.
    pub fn push(&mut self, digit: u8) -> Result<(), AllocError> {
        if self.len == self.buf.len() {
            self.grow()?;
        }
        self.buf[self.len] = digit;
        self.len += 1;
        Ok(())
    }

    fn grow(&mut self) -> Result<(), AllocError> {
        let new_size = self
            .buf
            .len()
            .checked_mul(2)
            .ok_or(AllocError {
                requested: usize::MAX,
            })?
            .max(MIN_CAPACITY);
        trace!(from = self.buf.len(), to = new_size, "growing digit accumulator");
        let mut new_buf = zeroed(new_size)?;
        new_buf[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = new_buf;
        Ok(())
    }
}

fn zeroed(size: usize) -> Result<Vec<u8>, AllocError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| AllocError { requested: size })?;
    buf.resize(size, 0);
    Ok(buf)
}
