//! The signed arbitrary-precision integer value type and its operators.
//!
//! `Int` owns its limb buffer exclusively; every operation below returns a
//! freshly normalized value rather than aliasing an operand's storage.
//! Compound-assign operators are the only ones that mutate in place, and
//! they do so by rebinding `*self`, matching this crate's collapse of the
//! add/sub/mul free-function-vs-method duality into a single operator
//! surface plus `*Assign` wrappers.

use crate::div::{div_rem_mag, has_remainder};
use crate::error::DivideByZeroError;
use crate::limbs::{cmp_mag, is_zero};
use crate::magnitude::{add_mag, sub_mag};
use crate::mul::mul_mag;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

/// An arbitrary-precision signed integer.
///
/// Canonical-form invariants (hold at every API boundary):
/// - `limbs` is never empty.
/// - `limbs` has no trailing (most-significant) zero unless its length is 1.
/// - every limb is in `0..=9999`.
/// - the zero value is unique: `limbs == [0]` implies `sign == false`.
#[derive(Clone, Debug)]
pub struct Int {
    pub(crate) sign: bool,
    pub(crate) limbs: Vec<u16>,
}

impl Int {
    /// The canonical zero value.
    pub fn zero() -> Self {
        Int {
            sign: false,
            limbs: vec![0],
        }
    }

    /// True if this value is zero.
    pub fn is_zero(&self) -> bool {
        is_zero(&self.limbs)
    }

    /// True if this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    fn from_sign_and_mag(sign: bool, mut limbs: Vec<u16>) -> Self {
        crate::limbs::normalize(&mut limbs);
        let sign = sign && !is_zero(&limbs);
        Int { sign, limbs }
    }

    /// `⌊self / rhs⌋` and the matching Euclidean-style remainder, or
    /// `Err` if `rhs` is zero. The operator forms (`/`, `%`) panic on
    /// division by zero, mirroring the built-in integer types; use this
    /// directly (or [`Int::checked_div`] / [`Int::checked_rem`]) when a
    /// recoverable signal is preferred.
    pub fn div_rem(&self, rhs: &Int) -> Result<(Int, Int), DivideByZeroError> {
        if rhs.is_zero() {
            return Err(DivideByZeroError);
        }

        if self.is_zero() {
            return Ok((Int::zero(), Int::zero()));
        }

        let result_sign = self.sign != rhs.sign;

        let (mut quotient, remainder) = div_rem_mag(&self.limbs, &rhs.limbs);
        let remainder_nonzero = has_remainder(&remainder);

        if result_sign && remainder_nonzero {
            quotient = add_mag(&quotient, &[1]);
        }

        let q = Int::from_sign_and_mag(result_sign, quotient);
        let r = self.checked_sub_product(&q, rhs);
        Ok((q, r))
    }

    /// `self - q*rhs`, used to derive the remainder from the quotient so
    /// the two always satisfy the division identity by construction.
    fn checked_sub_product(&self, q: &Int, rhs: &Int) -> Int {
        self.clone() - (q.clone() * rhs.clone())
    }

    /// Fallible division; `Err` only when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Int) -> Result<Int, DivideByZeroError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Fallible floor remainder; `Err` only when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Int) -> Result<Int, DivideByZeroError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }
}

impl Default for Int {
    fn default() -> Self {
        Int::zero()
    }
}

impl From<i64> for Int {
    fn from(x: i64) -> Self {
        if x == 0 {
            return Int::zero();
        }

        let sign = x < 0;
        // `i64::MIN.unsigned_abs()` is the one case plain negation would
        // overflow; `unsigned_abs` handles it directly.
        let mut mag = x.unsigned_abs();

        let mut limbs = Vec::new();
        while mag > 0 {
            limbs.push((mag % 10_000) as u16);
            mag /= 10_000;
        }

        Int { sign, limbs }
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.limbs == other.limbs
    }
}

impl Eq for Int {}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int {
    /// Total order consistent with mathematical value: differing signs
    /// decide outright (negative < positive), otherwise the magnitudes
    /// are compared directly for positive values and in reverse for
    /// negative ones.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_mag(&self.limbs, &other.limbs),
            (true, true) => cmp_mag(&other.limbs, &self.limbs),
        }
    }
}

impl Neg for Int {
    type Output = Int;

    /// Flips the sign, except zero's sign is always positive so `-0 == 0`.
    fn neg(self) -> Int {
        let sign = self.sign ^ !self.is_zero();
        Int {
            sign,
            limbs: self.limbs,
        }
    }
}

impl Add for Int {
    type Output = Int;

    /// Same sign: magnitudes add and the common sign is kept. Different
    /// signs: the smaller magnitude is subtracted from the larger and the
    /// larger operand's sign wins; equal magnitudes cancel to zero.
    fn add(self, rhs: Int) -> Int {
        if self.sign == rhs.sign {
            return Int::from_sign_and_mag(self.sign, add_mag(&self.limbs, &rhs.limbs));
        }

        match cmp_mag(&self.limbs, &rhs.limbs) {
            Ordering::Equal => Int::zero(),
            Ordering::Greater => Int::from_sign_and_mag(self.sign, sub_mag(&self.limbs, &rhs.limbs)),
            Ordering::Less => Int::from_sign_and_mag(rhs.sign, sub_mag(&rhs.limbs, &self.limbs)),
        }
    }
}

impl Sub for Int {
    type Output = Int;

    /// `a - b == a + (-b)`.
    fn sub(self, rhs: Int) -> Int {
        self + (-rhs)
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Int) -> Int {
        let sign = self.sign != rhs.sign;
        Int::from_sign_and_mag(sign, mul_mag(&self.limbs, &rhs.limbs))
    }
}

impl Div for Int {
    type Output = Int;

    /// Floor division. Panics on division by zero, matching the built-in
    /// integer types' `Div` impl; use [`Int::checked_div`] to handle it.
    fn div(self, rhs: Int) -> Int {
        self.checked_div(&rhs).expect("attempt to divide by zero")
    }
}

impl Rem for Int {
    type Output = Int;

    /// Remainder with the sign of `rhs` (or zero). Panics on division by
    /// zero; use [`Int::checked_rem`] to handle it.
    fn rem(self, rhs: Int) -> Int {
        self.checked_rem(&rhs).expect("attempt to divide by zero")
    }
}

impl AddAssign for Int {
    fn add_assign(&mut self, rhs: Int) {
        *self = self.clone() + rhs;
    }
}

impl SubAssign for Int {
    fn sub_assign(&mut self, rhs: Int) {
        *self = self.clone() - rhs;
    }
}

impl MulAssign for Int {
    fn mul_assign(&mut self, rhs: Int) {
        *self = self.clone() * rhs;
    }
}

impl DivAssign for Int {
    fn div_assign(&mut self, rhs: Int) {
        *self = self.clone() / rhs;
    }
}

impl RemAssign for Int {
    fn rem_assign(&mut self, rhs: Int) {
        *self = self.clone() % rhs;
    }
}
