use rand::distributions::uniform::SampleUniform;
use num_traits::{NumAssignOps, Num, NumCast};


/// All types that may be used in a [Tensor](crate::Tensor).
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Inner: PartialEq + Clone + Copy + Send + Sync + std::fmt::Debug {}
impl<T: PartialEq + Clone + Copy + Send + Sync + std::fmt::Debug> Inner for T {}


/// All numeric types.
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Numeric: Inner + PartialOrd + Num + NumCast + NumAssignOps + std::iter::Sum {}
impl<T: Inner + PartialOrd + Num + NumCast + NumAssignOps + std::iter::Sum> Numeric for T {}


/// All signed numeric types.
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Signed: Numeric + num_traits::Signed {}
impl<T: Numeric + num_traits::Signed> Signed for T {}


/// All continuous numeric types that layers, losses and
/// optimizers can work with.
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits, which in practice
/// means `f32` and `f64`.

pub trait Real: Signed + num_traits::real::Real + SampleUniform + Gemm {}
impl<T: Signed + num_traits::real::Real + SampleUniform + Gemm> Real for T {}


/// Row-major general matrix multiply kernel.
///
/// Computes `c = a · b` for contiguous `a` (m × k) and `b` (k × n),
/// overwriting the contiguous `c` (m × n).

pub trait Gemm: Sized {
  fn gemm(m: usize, k: usize, n: usize, a: &[Self], b: &[Self], c: &mut [Self]);
}

#[cfg(feature = "unsafe")]
macro_rules! impl_gemm {
  ($type:ty, $kernel:ident) => {
    impl Gemm for $type {
      fn gemm(m: usize, k: usize, n: usize, a: &[Self], b: &[Self], c: &mut [Self]) {
        assert!(a.len() == m * k && b.len() == k * n && c.len() == m * n);
        if m == 0 || n == 0 { return }
        unsafe {
          matrixmultiply::$kernel(
            m, k, n,
            1.0,
            a.as_ptr(), k as isize, 1,
            b.as_ptr(), n as isize, 1,
            0.0,
            c.as_mut_ptr(), n as isize, 1,
          );
        }
      }
    }
  };
}

#[cfg(not(feature = "unsafe"))]
macro_rules! impl_gemm {
  ($type:ty, $kernel:ident) => {
    impl Gemm for $type {
      fn gemm(m: usize, k: usize, n: usize, a: &[Self], b: &[Self], c: &mut [Self]) {
        assert!(a.len() == m * k && b.len() == k * n && c.len() == m * n);
        for (i, j) in itertools::iproduct!(0..m, 0..n) {
          c[i * n + j] = (0..k).map(|p| a[i * k + p] * b[p * n + j] ).sum();
        }
      }
    }
  };
}

impl_gemm!(f32, sgemm);
impl_gemm!(f64, dgemm);
