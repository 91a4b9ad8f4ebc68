use crate::{
  scalar::Real,
  tensor::Tensor,
  shape::Shape,
  parameter::Parameter,
  optimize::Optimizer,
  layer::Layer,
  error::{ Error, Result },
};


/// Fully connected layer computing `X · W + b`.
///
/// Weights are `[in_features, out_features]`, the bias is a
/// `[1, out_features]` row broadcast over the batch.

#[derive(Debug, Clone)]
pub struct Dense<T: Real> {
  weights: Parameter<T>,
  bias: Parameter<T>,
  input: Option<Tensor<T, 2>>,
}

impl<T: Real> Dense<T> {
  /// Create a layer whose parameters are populated by the given initializers.
  ///
  /// Each initializer receives a freshly shaped tensor and must set
  /// every element. See [init](crate::init) for common strategies.
  ///
  /// # Panics
  ///
  /// If an initializer leaves its tensor with a different shape.

  pub fn new(
    in_features: usize,
    out_features: usize,
    init_weights: impl FnOnce(&mut Tensor<T, 2>),
    init_bias: impl FnOnce(&mut Tensor<T, 2>),
  ) -> Self {
    let mut weights = Tensor::new([in_features, out_features]);
    let mut bias = Tensor::new([1, out_features]);
    init_weights(&mut weights);
    init_bias(&mut bias);
    let checked = weights.shape()
      .expect_same(&Shape::new([in_features, out_features]), "dense init")
      .and_then(|_| bias.shape().expect_same(&Shape::new([1, out_features]), "dense init") );
    if let Err(err) = checked {
      panic!("{}", err)
    }
    Self {
      weights: Parameter::new(weights),
      bias: Parameter::new(bias),
      input: None,
    }
  }

  pub fn in_features(&self) -> usize {
    self.weights.value().rows()
  }

  pub fn out_features(&self) -> usize {
    self.weights.value().cols()
  }

  pub fn weights(&self) -> &Tensor<T, 2> {
    self.weights.value()
  }

  pub fn bias(&self) -> &Tensor<T, 2> {
    self.bias.value()
  }

  pub fn weight_grad(&self) -> &Tensor<T, 2> {
    self.weights.grad()
  }

  pub fn bias_grad(&self) -> &Tensor<T, 2> {
    self.bias.grad()
  }
}

impl<T: Real> Layer<T> for Dense<T> {
  fn forward(&mut self, input: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    let output = input
      .matmul(self.weights.value())?
      .add_row(self.bias.value())?;
    self.input = Some(input.clone());
    Ok(output)
  }

  fn backward(&mut self, grad: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    let input = self.input.as_ref()
      .ok_or(Error::BackwardBeforeForward { layer: self.name() })?;
    if grad.rows() != input.rows() {
      return Err(Error::ShapeMismatch {
        op: "dense backward",
        lhs: input.dims().to_vec(),
        rhs: grad.dims().to_vec(),
      })
    }
    self.weights.set_grad(input.transpose().matmul(grad)?)?;
    self.bias.set_grad(grad.sum_rows())?;
    grad.matmul(&self.weights.value().transpose())
  }

  fn update_params(&mut self, optimizer: &mut dyn Optimizer<T>) -> Result<()> {
    optimizer.update(&mut self.weights)?;
    optimizer.update(&mut self.bias)
  }

  fn name(&self) -> &'static str {
    "Dense"
  }
}
