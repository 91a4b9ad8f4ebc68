use rand::Rng;
use num_traits::NumCast;

use crate::{
  scalar::Real,
};


/// Convert a literal into the working float type.
///
/// Only used with small, finite constants, which every [Real] can represent.

#[inline]
pub fn constant<T: Real>(value: f64) -> T {
  <T as NumCast>::from(value).unwrap()
}


// Polar Box-Muller transformation

pub fn randn<T: Real>(rng: &mut impl Rng) -> (T, T) {
  loop {
    let u = rng.gen_range(-T::one(), T::one());
    let v = rng.gen_range(-T::one(), T::one());
    let r = u * u + v * v;
    // Try again if outside interval
    if r == T::zero() || r >= T::one() { continue }
    let c = (constant::<T>(-2.0) * r.ln() / r).sqrt();
    return (u * c, v * c)
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn randn_is_finite() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
      let (a, b): (f64, f64) = randn(&mut rng);
      assert!(a.is_finite() && b.is_finite());
    }
  }
}
