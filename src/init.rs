//! Parameter initializers for [Dense](crate::layer::Dense).
//!
//! Every function here returns a closure that populates a freshly
//! shaped tensor in place. Any other `FnOnce(&mut Tensor<T, 2>)`
//! works just as well.

use rand::Rng;

use crate::{
  internal,
  scalar::Real,
  tensor::Tensor,
};


pub fn zeros<T: Real>() -> impl FnOnce(&mut Tensor<T, 2>) {
  |tensor| tensor.fill(T::zero())
}

pub fn constant<T: Real>(value: T) -> impl FnOnce(&mut Tensor<T, 2>) {
  move |tensor| tensor.fill(value)
}

/// Uniform samples from `[low, high)`, drawn from the thread-local generator.

pub fn uniform<T: Real>(low: T, high: T) -> impl FnOnce(&mut Tensor<T, 2>) {
  move |tensor| uniform_with(&mut rand::thread_rng(), low, high)(tensor)
}

pub fn uniform_with<'a, T: Real + 'a, R: Rng>(rng: &'a mut R, low: T, high: T) -> impl FnOnce(&mut Tensor<T, 2>) + 'a {
  move |tensor| {
    for a in tensor.raw_mut() {
      *a = rng.gen_range(low, high);
    }
  }
}

/// Normally distributed samples with mean zero.

pub fn normal<T: Real>(std_dev: T) -> impl FnOnce(&mut Tensor<T, 2>) {
  move |tensor| normal_with(&mut rand::thread_rng(), std_dev)(tensor)
}

pub fn normal_with<'a, T: Real + 'a, R: Rng>(rng: &'a mut R, std_dev: T) -> impl FnOnce(&mut Tensor<T, 2>) + 'a {
  move |tensor| {
    for pair in tensor.raw_mut().chunks_mut(2) {
      let (a, b) = internal::randn::<T>(rng);
      pair[0] = a * std_dev;
      if let Some(second) = pair.get_mut(1) {
        *second = b * std_dev;
      }
    }
  }
}

/// Glorot/Xavier uniform initialization for a `[fan_in, fan_out]` matrix.
///
/// Samples from `±sqrt(6 / (fan_in + fan_out))`.

pub fn xavier_uniform<T: Real>() -> impl FnOnce(&mut Tensor<T, 2>) {
  |tensor| xavier_uniform_with(&mut rand::thread_rng())(tensor)
}

pub fn xavier_uniform_with<'a, T: Real + 'a, R: Rng>(rng: &'a mut R) -> impl FnOnce(&mut Tensor<T, 2>) + 'a {
  move |tensor| {
    let fan = (tensor.rows() + tensor.cols()).max(1);
    let limit = (internal::constant::<T>(6.0) / internal::constant(fan as f64)).sqrt();
    uniform_with(rng, -limit, limit)(tensor)
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn fills() {
    let mut t = Tensor::<f32, 2>::filled([2,2], 9.0);
    zeros()(&mut t);
    assert_eq!(t, Tensor::zeros([2,2]));
    constant(0.25)(&mut t);
    assert_eq!(t, Tensor::filled([2,2], 0.25));
  }

  #[test]
  fn uniform_range() {
    let mut t = Tensor::<f64, 2>::new([8,8]);
    uniform(-0.5, 0.5)(&mut t);
    assert!(t.iter().all(|&a| (-0.5..0.5).contains(&a) ));
    assert!(t.iter().any(|&a| a != 0.0 ));
  }

  #[test]
  fn seeded_is_reproducible() {
    let mut a = Tensor::<f64, 2>::new([3,5]);
    let mut b = Tensor::<f64, 2>::new([3,5]);
    uniform_with(&mut StdRng::seed_from_u64(42), 0.0, 1.0)(&mut a);
    uniform_with(&mut StdRng::seed_from_u64(42), 0.0, 1.0)(&mut b);
    assert_eq!(a, b);
  }

  #[test]
  fn normal_fills_odd_sizes() {
    let mut t = Tensor::<f64, 2>::filled([3,3], f64::NAN);
    normal_with(&mut StdRng::seed_from_u64(1), 0.1)(&mut t);
    assert!(t.iter().all(|a| a.is_finite() ));
    normal(1.0)(&mut t);
    assert!(t.iter().all(|a| a.is_finite() ));
  }

  #[test]
  fn xavier_bounds() {
    let mut t = Tensor::<f32, 2>::new([4,2]);
    xavier_uniform_with(&mut StdRng::seed_from_u64(3))(&mut t);
    let limit = 1.0f32;
    assert!(t.iter().all(|&a| a >= -limit && a < limit ));
    xavier_uniform()(&mut t);
    assert!(t.iter().all(|&a| a >= -limit && a < limit ));
  }
}
