// crates/wirebin-core/src/varint/wide.rs
//
// Integer capability used by the wide VarLong path. Anything wider than 64 bits
// works; `i128` is the fast fixed-width choice, `malachite::Integer` the
// arbitrary-precision one.

use std::cmp::Ordering;

use malachite::Integer;

use crate::error::{CodecError, Result};

pub trait WideInt: Clone + Ord + Sized {
    fn zero() -> Self;
    fn one() -> Self;
    fn from_u64(value: u64) -> Self;
    fn from_i64(value: i64) -> Self;

    fn plus(&self, rhs: &Self) -> Self;
    fn minus(&self, rhs: &Self) -> Self;
    fn times(&self, rhs: &Self) -> Self;

    /// Truncating division and remainder. Only called with a non-negative
    /// dividend and a positive divisor.
    fn div_rem(&self, rhs: &Self) -> (Self, Self);

    fn shl_bits(&self, bits: u32) -> Self;
    fn bitand(&self, rhs: &Self) -> Self;

    /// The value as a byte, if it is in `0..=255`.
    fn low_u8(&self) -> Option<u8>;

    fn to_decimal(&self) -> String;
    fn from_decimal(text: &str) -> Result<Self>;

    fn compare(&self, rhs: &Self) -> Ordering {
        self.cmp(rhs)
    }

    fn is_negative(&self) -> bool {
        self.compare(&Self::zero()) == Ordering::Less
    }
}

impl WideInt for i128 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn from_u64(value: u64) -> Self {
        value as i128
    }

    fn from_i64(value: i64) -> Self {
        value as i128
    }

    fn plus(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn minus(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn times(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        (self / rhs, self % rhs)
    }

    fn shl_bits(&self, bits: u32) -> Self {
        self << bits
    }

    fn bitand(&self, rhs: &Self) -> Self {
        self & rhs
    }

    fn low_u8(&self) -> Option<u8> {
        u8::try_from(*self).ok()
    }

    fn to_decimal(&self) -> String {
        self.to_string()
    }

    fn from_decimal(text: &str) -> Result<Self> {
        text.trim()
            .parse::<i128>()
            .map_err(|e| CodecError::InvalidNumber(format!("{text:?}: {e}")))
    }
}

impl WideInt for Integer {
    fn zero() -> Self {
        Integer::from(0)
    }

    fn one() -> Self {
        Integer::from(1)
    }

    fn from_u64(value: u64) -> Self {
        Integer::from(value)
    }

    fn from_i64(value: i64) -> Self {
        Integer::from(value)
    }

    fn plus(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn minus(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn times(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        (self / rhs, self % rhs)
    }

    fn shl_bits(&self, bits: u32) -> Self {
        self << bits as u64
    }

    fn bitand(&self, rhs: &Self) -> Self {
        self & rhs
    }

    fn low_u8(&self) -> Option<u8> {
        u8::try_from(self).ok()
    }

    fn to_decimal(&self) -> String {
        self.to_string()
    }

    fn from_decimal(text: &str) -> Result<Self> {
        text.trim()
            .parse::<Integer>()
            .map_err(|_| CodecError::InvalidNumber(format!("{text:?} is not an integer")))
    }
}
