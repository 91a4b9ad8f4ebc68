use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
  tensor::Tensor,
  error::Result,
  scalar::Real,
};


pub fn make_id() -> usize {
  static LAST_ID: AtomicUsize = AtomicUsize::new(0);
  LAST_ID.fetch_add(1, Ordering::Relaxed)
}


/// A learnable matrix together with its gradient.
///
/// Every parameter receives a process-unique id on creation, which
/// stateful [optimizers](crate::optimize::Optimizer) use to keep
/// separate state per parameter. A clone is a new parameter and gets
/// an id of its own.

#[derive(Debug, PartialEq)]
pub struct Parameter<T: Real> {
  id: usize,
  value: Tensor<T, 2>,
  grad: Tensor<T, 2>,
}

impl<T: Real> Parameter<T> {
  /// Wrap `value` with a zeroed gradient of the same shape.

  pub fn new(value: Tensor<T, 2>) -> Self {
    Self {
      id: make_id(),
      grad: Tensor::zeros(value.dims()),
      value,
    }
  }

  pub fn id(&self) -> usize {
    self.id
  }

  pub fn value(&self) -> &Tensor<T, 2> {
    &self.value
  }

  pub fn grad(&self) -> &Tensor<T, 2> {
    &self.grad
  }

  /// Overwrite the gradient. It must have the parameter's shape.

  pub fn set_grad(&mut self, grad: Tensor<T, 2>) -> Result<()> {
    self.value.shape().expect_same(grad.shape(), "set_grad")?;
    self.grad = grad;
    Ok(())
  }

  /// Mutable value alongside the current gradient, for in-place updates.

  pub fn split_mut(&mut self) -> (&mut Tensor<T, 2>, &Tensor<T, 2>) {
    (&mut self.value, &self.grad)
  }
}

impl<T: Real> Clone for Parameter<T> {
  fn clone(&self) -> Self {
    Self {
      id: make_id(),
      value: self.value.clone(),
      grad: self.grad.clone(),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;

  #[test]
  fn unique_ids() {
    let a = Parameter::<f32>::new(Tensor::zeros([1,1]));
    let b = Parameter::<f32>::new(Tensor::zeros([1,1]));
    assert_ne!(a.id(), b.id());
  }

  #[test]
  fn clone_gets_fresh_id() {
    let a = Parameter::new(Tensor::<f64, 2>::ones([2,1]));
    let b = a.clone();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.value(), b.value());
    assert_eq!(a.grad(), b.grad());
  }

  #[test]
  fn zeroed_grad() {
    let p = Parameter::new(Tensor::from_rows(&[[1.0, 2.0, 3.0]]));
    assert_eq!(p.grad(), &Tensor::zeros([1,3]));
  }

  #[test]
  fn set_grad() {
    let mut p = Parameter::new(Tensor::<f64, 2>::ones([2,2]));
    p.set_grad(Tensor::filled([2,2], 0.5)).unwrap();
    assert_eq!(p.grad(), &Tensor::filled([2,2], 0.5));
    assert!(matches!(p.set_grad(Tensor::zeros([1,2])), Err(Error::ShapeMismatch { .. })));
  }
}
