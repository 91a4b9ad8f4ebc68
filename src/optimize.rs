use std::collections::HashMap;

use crate::{
  internal::*,
  scalar::Real,
  tensor::Tensor,
  parameter::Parameter,
  error::Result,
};


/// A first-order update rule, applied to one [Parameter] at a time.
///
/// Optimizers live for a whole training run and may keep state
/// between calls.

pub trait Optimizer<T: Real> {
  /// Construct an optimizer with default settings besides the learning rate.
  fn with_learning_rate(learning_rate: T) -> Self where Self: Sized;

  fn learning_rate(&self) -> T;

  /// Move `param` against its current gradient, in place.
  fn update(&mut self, param: &mut Parameter<T>) -> Result<()>;
}


/// Plain gradient descent

#[derive(Debug, Clone)]
pub struct Sgd<T: Real> {
  pub learning_rate: T,
}

impl<T: Real> Sgd<T> {
  pub fn new(learning_rate: T) -> Self {
    Self { learning_rate }
  }
}

impl<T: Real> Optimizer<T> for Sgd<T> {
  fn with_learning_rate(learning_rate: T) -> Self {
    Self::new(learning_rate)
  }

  fn learning_rate(&self) -> T {
    self.learning_rate
  }

  fn update(&mut self, param: &mut Parameter<T>) -> Result<()> {
    let rate = self.learning_rate;
    let (weights, grad) = param.split_mut();
    weights.zip_assign(grad, "sgd", |p, g| p - rate * g )
  }
}


#[derive(Debug, Clone)]
struct Moments<T: Real> {
  m: Tensor<T, 2>,
  v: Tensor<T, 2>,
  step: i32,
}


/// Adaptive Moment Estimation (ADAM)
///
/// Moment estimates and the bias correction step counter are kept
/// separately for every parameter id, so a single instance can serve
/// parameters of different shapes without them overwriting each
/// other's history.
///
/// State is never evicted on its own. An optimizer that outlives the
/// parameters it has seen should be [reset](Adam::reset), or have
/// single entries dropped with [forget](Adam::forget).

#[derive(Debug, Clone)]
pub struct Adam<T: Real> {
  pub learning_rate: T,
  pub beta1: T,
  pub beta2: T,
  pub epsilon: T,
  moments: HashMap<usize, Moments<T>>,
}

impl<T: Real> Adam<T> {
  pub fn new(learning_rate: T) -> Self {
    Self::with_betas(learning_rate, constant(0.9), constant(0.999))
  }

  pub fn with_betas(learning_rate: T, beta1: T, beta2: T) -> Self {
    Self::with_epsilon(learning_rate, beta1, beta2, constant(1e-8))
  }

  pub fn with_epsilon(learning_rate: T, beta1: T, beta2: T, epsilon: T) -> Self {
    Self {
      learning_rate,
      beta1,
      beta2,
      epsilon,
      moments: HashMap::new(),
    }
  }

  /// Number of updates applied so far to the parameter with `id`.

  pub fn steps(&self, id: usize) -> usize {
    self.moments.get(&id).map_or(0, |state| state.step as usize )
  }

  /// Current first and second moment estimates for the parameter with `id`.

  pub fn moments(&self, id: usize) -> Option<(&Tensor<T, 2>, &Tensor<T, 2>)> {
    self.moments.get(&id).map(|state| (&state.m, &state.v) )
  }

  /// Drop the state kept for the parameter with `id`.

  pub fn forget(&mut self, id: usize) {
    self.moments.remove(&id);
  }

  /// Drop all per-parameter state, keeping the hyperparameters.

  pub fn reset(&mut self) {
    self.moments.clear();
  }
}

impl<T: Real> Optimizer<T> for Adam<T> {
  fn with_learning_rate(learning_rate: T) -> Self {
    Self::new(learning_rate)
  }

  fn learning_rate(&self) -> T {
    self.learning_rate
  }

  fn update(&mut self, param: &mut Parameter<T>) -> Result<()> {
    let Self { learning_rate: rate, beta1, beta2, epsilon, .. } = *self;
    let dims = param.value().dims();
    let state = self.moments.entry(param.id()).or_insert_with(|| Moments {
      m: Tensor::zeros(dims),
      v: Tensor::zeros(dims),
      step: 0,
    });
    state.step += 1;

    let (weights, grad) = param.split_mut();
    state.m.zip_assign(grad, "adam", |m, g| beta1 * m + (T::one() - beta1) * g )?;
    state.v.zip_assign(grad, "adam", |v, g| beta2 * v + (T::one() - beta2) * g * g )?;

    let correction1 = T::one() - beta1.powi(state.step);
    let correction2 = T::one() - beta2.powi(state.step);
    let change = state.m.zip_with(&state.v, "adam", |m, v| {
      rate * (m / correction1) / ((v / correction2).sqrt() + epsilon)
    })?;
    weights.zip_assign(&change, "adam", |p, c| p - c )
  }
}
