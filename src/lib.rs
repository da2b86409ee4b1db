//! Arbitrary-precision signed decimal integer arithmetic.
//!
//! This crate provides [`Int`], a signed integer of unbounded magnitude
//! represented as a sign bit plus a little-endian sequence of base-10000
//! limbs. It covers parsing, formatting, the four arithmetic operators
//! with floor-division semantics, and a total order consistent with
//! mathematical value.
//!
//! The focus is on a small, auditable core rather than a sprawling
//! big-integer API: no floating-point bigint, no bitwise operations, no
//! modular exponentiation, and no alternate limb base.
//!
//! # Module overview
//!
//! - `limbs`
//!   Little-endian base-10000 limb buffers, the canonical-form
//!   normalization rule, and magnitude comparison.
//!
//! - `magnitude`
//!   Unsigned add and subtract kernels on magnitudes.
//!
//! - `mul`
//!   Magnitude multiplication: schoolbook convolution below a size
//!   threshold, FFT-based convolution above it.
//!
//! - `div`
//!   Long division on magnitudes, producing a truncating quotient and
//!   remainder; floor adjustment for signed results happens in `int`.
//!
//! - `text`
//!   Decimal parsing (`FromStr`) and formatting (`Display`), plus a
//!   whitespace-token reader for byte streams.
//!
//! - `int`
//!   [`Int`] itself: the signed value type, its canonical-form
//!   invariants, and the operator implementations that dispatch on sign
//!   and delegate to the magnitude kernels above.
//!
//! - `error`
//!   The two fallible boundaries of this crate: malformed decimal text
//!   and division by zero.
//!
//! # Design goals
//!
//! - No silent corruption: every kernel normalizes before returning, and
//!   there is exactly one representation of zero.
//! - Minimal and explicit API surface.
//! - Clear separation between the magnitude kernels and the signed
//!   dispatch built on top of them.

mod div;
mod error;
mod int;
mod limbs;
mod magnitude;
mod mul;
mod text;

pub use error::{DivideByZeroError, ParseIntError};
pub use int::Int;
pub use text::read_token;
