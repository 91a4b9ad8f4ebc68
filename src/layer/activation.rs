use crate::{
  internal::*,
  scalar::Real,
  tensor::Tensor,
  layer::Layer,
  error::{ Error, Result },
};


/// Rectified linear unit, `max(0, x)` per element.

#[derive(Debug, Clone, Default)]
pub struct ReLU<T: Real> {
  input: Option<Tensor<T, 2>>,
}

impl<T: Real> ReLU<T> {
  pub fn new() -> Self {
    Self { input: None }
  }
}

impl<T: Real> Layer<T> for ReLU<T> {
  fn forward(&mut self, input: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    self.input = Some(input.clone());
    Ok(input.map(|a| if a > T::zero() { a } else { T::zero() } ))
  }

  fn backward(&mut self, grad: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    let input = self.input.as_ref()
      .ok_or(Error::BackwardBeforeForward { layer: self.name() })?;
    input.zip_with(grad, "relu backward", |z, g| if z > T::zero() { g } else { T::zero() } )
  }

  fn name(&self) -> &'static str {
    "ReLU"
  }
}


/// Logistic activation, `1 / (1 + e^-x)` per element.
///
/// Inputs are clamped to `[-500, 500]` before exponentiation.

#[derive(Debug, Clone, Default)]
pub struct Sigmoid<T: Real> {
  output: Option<Tensor<T, 2>>,
}

impl<T: Real> Sigmoid<T> {
  pub fn new() -> Self {
    Self { output: None }
  }
}

impl<T: Real> Layer<T> for Sigmoid<T> {
  fn forward(&mut self, input: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    let limit = constant::<T>(500.0);
    let output = input
      .clamp(-limit, limit)
      .map(|x| T::one() / (T::one() + (-x).exp()) );
    self.output = Some(output.clone());
    Ok(output)
  }

  fn backward(&mut self, grad: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    let output = self.output.as_ref()
      .ok_or(Error::BackwardBeforeForward { layer: self.name() })?;
    output.zip_with(grad, "sigmoid backward", |s, g| g * s * (T::one() - s) )
  }

  fn name(&self) -> &'static str {
    "Sigmoid"
  }
}
