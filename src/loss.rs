use crate::{
  internal::*,
  scalar::Real,
  tensor::Tensor,
  error::Result,
};


/// Scalar training objective over a batch of predictions.
///
/// A loss is built fresh for every evaluation from a prediction and a
/// target of identical shape.

pub trait Loss<T: Real>: Sized {
  fn new(prediction: &Tensor<T, 2>, target: &Tensor<T, 2>) -> Result<Self>;

  /// Mean loss over all elements.
  fn value(&self) -> T;

  /// Derivative of [value](Loss::value) with respect to every prediction.
  fn gradient(&self) -> Tensor<T, 2>;
}


/// Mean squared error

#[derive(Debug, Clone)]
pub struct Mse<T: Real> {
  diff: Tensor<T, 2>,
}

impl<T: Real> Loss<T> for Mse<T> {
  fn new(prediction: &Tensor<T, 2>, target: &Tensor<T, 2>) -> Result<Self> {
    Ok(Self { diff: prediction.sub(target)? })
  }

  fn value(&self) -> T {
    self.diff.map(|d| d * d ).mean()
  }

  fn gradient(&self) -> Tensor<T, 2> {
    let factor = constant::<T>(2.0) / constant(self.diff.size() as f64);
    self.diff.scale(factor)
  }
}


/// Binary cross entropy for predictions in (0, 1)
///
/// Predictions get clamped to `[1e-7, 1 - 1e-7]` so that
/// the logarithms stay finite.

#[derive(Debug, Clone)]
pub struct Bce<T: Real> {
  losses: Tensor<T, 2>,
  gradient: Tensor<T, 2>,
}

impl<T: Real> Bce<T> {
  pub const EPSILON: f64 = 1e-7;
}

impl<T: Real> Loss<T> for Bce<T> {
  fn new(prediction: &Tensor<T, 2>, target: &Tensor<T, 2>) -> Result<Self> {
    let eps = constant(Self::EPSILON);
    let n = constant::<T>(prediction.size() as f64);
    let prediction = prediction.clamp(eps, T::one() - eps);
    let losses = prediction.zip_with(target, "bce", |p, t| {
      -(t * p.ln() + (T::one() - t) * (T::one() - p).ln())
    })?;
    let gradient = prediction.zip_with(target, "bce", |p, t| {
      (p - t) / (p * (T::one() - p) * n)
    })?;
    Ok(Self { losses, gradient })
  }

  fn value(&self) -> T {
    self.losses.mean()
  }

  fn gradient(&self) -> Tensor<T, 2> {
    self.gradient.clone()
  }
}
