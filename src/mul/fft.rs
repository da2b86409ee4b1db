//! Iterative radix-2 Cooley–Tukey complex DFT and FFT-based convolution.
//!
//! Only `cos`, `sin`, and complex multiply/add/sub are needed, so rather
//! than pull in `num-complex` this keeps a tiny inline complex type —
//! consistent with this crate's zero-dependency numeric core.

use crate::limbs::{normalize, BASE};
use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// In-place iterative radix-2 DFT. `invert` selects the forward
/// (`ω = exp(-i·2π/len)`... note: this implementation uses the
/// `+2π/len` twiddle for the forward transform and negates it for the
/// inverse, matching spec's convention) or inverse transform. `a.len()`
/// must be a power of two. The inverse transform divides every output
/// by `n`, so a forward+inverse round trip is the identity.
fn fft(a: &mut [Complex], invert: bool) {
    let n = a.len();
    if n == 1 {
        return;
    }

    // Bit-reversal permutation.
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            a.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let ang = 2.0 * PI / len as f64 * if invert { -1.0 } else { 1.0 };
        let wlen = Complex::new(ang.cos(), ang.sin());

        let mut i = 0;
        while i < n {
            let mut w = Complex::new(1.0, 0.0);
            for k in 0..len / 2 {
                let u = a[i + k];
                let v = a[i + k + len / 2] * w;
                a[i + k] = u + v;
                a[i + k + len / 2] = u - v;
                w = w * wlen;
            }
            i += len;
        }

        len <<= 1;
    }

    if invert {
        let n_f = n as f64;
        for x in a.iter_mut() {
            x.re /= n_f;
            x.im /= n_f;
        }
    }
}

/// Magnitude of `a * b` via FFT convolution.
///
/// Pads both limb sequences (real part = limb, imaginary part = 0) to
/// the smallest power of two `n >= a.len() + b.len()`, transforms both,
/// multiplies pointwise, inverse-transforms, then rounds and carries
/// each coefficient back into base-10000 limbs.
///
/// Safe up to operand sizes where each convolution coefficient,
/// `9999^2 * n`, stays within the 53-bit mantissa of `f64` — true for
/// any `n <= 2^20`, i.e. magnitudes up to roughly 4 million limbs
/// (about 16 million decimal digits). This crate never exceeds that in
/// practice because `MagMulFFT` is only reached through `Int`'s own
/// `*`/`/` surface, which is not expected to be fed operands anywhere
/// near that size; there is no runtime guard beyond the schoolbook/FFT
/// threshold (see spec's discussion of the FFT operand-size open
/// question).
pub(crate) fn fft_mul(a: &[u16], b: &[u16]) -> Vec<u16> {
    let mut n = 1usize;
    while n < a.len() + b.len() {
        n <<= 1;
    }

    let mut fa: Vec<Complex> = a.iter().map(|&x| Complex::new(x as f64, 0.0)).collect();
    let mut fb: Vec<Complex> = b.iter().map(|&x| Complex::new(x as f64, 0.0)).collect();
    fa.resize(n, Complex::default());
    fb.resize(n, Complex::default());

    fft(&mut fa, false);
    fft(&mut fb, false);

    for i in 0..n {
        fa[i] = fa[i] * fb[i];
    }

    fft(&mut fa, true);

    let mut out = Vec::with_capacity(n);
    let mut carry: i64 = 0;
    for x in fa.iter() {
        let v = (x.re + 0.5).floor() as i64 + carry;
        out.push((v.rem_euclid(BASE as i64)) as u16);
        carry = v.div_euclid(BASE as i64);
    }

    while carry != 0 {
        out.push((carry % BASE as i64) as u16);
        carry /= BASE as i64;
    }

    normalize(&mut out);
    out
}
