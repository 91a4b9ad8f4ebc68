use crate::{
  scalar::Real,
  tensor::Tensor,
  optimize::Optimizer,
  error::Result,
};

mod dense;
mod activation;

pub use dense::Dense;
pub use activation::{ ReLU, Sigmoid };


/// A stateful transformation unit of a [Network](crate::Network).
///
/// Inputs and outputs are `[batch, features]` matrices. Layers cache
/// whatever their gradient needs during [forward](Layer::forward), so
/// [backward](Layer::backward) must follow a forward call on the same
/// input.

pub trait Layer<T: Real> {
  fn forward(&mut self, input: &Tensor<T, 2>) -> Result<Tensor<T, 2>>;

  /// Take the loss gradient w.r.t. this layer's output and return
  /// the gradient w.r.t. its input, storing parameter gradients.
  fn backward(&mut self, grad: &Tensor<T, 2>) -> Result<Tensor<T, 2>>;

  /// Apply `optimizer` to every learnable parameter.
  fn update_params(&mut self, _optimizer: &mut dyn Optimizer<T>) -> Result<()> {
    Ok(())
  }

  fn name(&self) -> &'static str;
}
