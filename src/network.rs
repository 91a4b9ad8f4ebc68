use log::{ debug, trace, log_enabled, Level };

use crate::{
  scalar::Real,
  tensor::Tensor,
  layer::Layer,
  loss::Loss,
  optimize::Optimizer,
  error::{ Error, Result },
};


/// Lifecycle of a [Network].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
  /// No layers have been added yet.
  Empty,
  /// At least one layer, never trained.
  Assembled,
  /// At least one training epoch has completed.
  Trained,
}


/// An ordered stack of layers trained with plain backpropagation.
///
/// Layers run in insertion order on the way forward and in reverse
/// order on the way back. Parameter updates happen after the full
/// backward pass, again in insertion order.

#[derive(Default)]
pub struct Network<T: Real> {
  layers: Vec<Box<dyn Layer<T>>>,
  epochs: usize,
}

impl<T: Real> Network<T> {
  pub fn new() -> Self {
    Self { layers: vec![], epochs: 0 }
  }

  pub fn add_layer(&mut self, layer: impl Layer<T> + 'static) {
    debug!("Adding {} layer at position {}", layer.name(), self.layers.len());
    self.layers.push(Box::new(layer));
  }

  pub fn len(&self) -> usize {
    self.layers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.layers.is_empty()
  }

  /// Total number of epochs completed across all training runs.

  pub fn epochs_trained(&self) -> usize {
    self.epochs
  }

  pub fn state(&self) -> NetworkState {
    if self.layers.is_empty() {
      NetworkState::Empty
    } else if self.epochs == 0 {
      NetworkState::Assembled
    } else {
      NetworkState::Trained
    }
  }

  /// Run `input` through every layer, caching what backward needs.

  pub fn forward(&mut self, input: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    let mut output = input.clone();
    for layer in &mut self.layers {
      output = layer.forward(&output)?;
    }
    Ok(output)
  }

  pub fn predict(&mut self, input: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    self.forward(input)
  }

  /// Loss of the current predictions for `input` against `target`.

  pub fn evaluate<L: Loss<T>>(&mut self, input: &Tensor<T, 2>, target: &Tensor<T, 2>) -> Result<T> {
    let prediction = self.forward(input)?;
    Ok(L::new(&prediction, target)?.value())
  }

  /// Train on the full batch `(input, target)` for `epochs` epochs.
  ///
  /// A single optimizer of type `O` is created for the whole run.
  /// `batch_size` must be positive but every epoch processes the
  /// complete input as one batch.

  pub fn train<L, O>(
    &mut self,
    input: &Tensor<T, 2>,
    target: &Tensor<T, 2>,
    epochs: usize,
    batch_size: usize,
    learning_rate: T,
  ) -> Result<()>
  where
    L: Loss<T>,
    O: Optimizer<T>,
  {
    if epochs == 0 {
      return Err(Error::InvalidHyperparameter { name: "epochs", value: epochs.to_string() })
    }
    if batch_size == 0 {
      return Err(Error::InvalidHyperparameter { name: "batch size", value: batch_size.to_string() })
    }
    if !(learning_rate > T::zero()) {
      return Err(Error::InvalidHyperparameter { name: "learning rate", value: format!("{:?}", learning_rate) })
    }
    let mut optimizer = O::with_learning_rate(learning_rate);
    self.train_with::<L, O>(input, target, epochs, &mut optimizer)
  }

  /// Like [train](Self::train), with a caller-owned optimizer whose
  /// state persists after the run.

  pub fn train_with<L, O>(
    &mut self,
    input: &Tensor<T, 2>,
    target: &Tensor<T, 2>,
    epochs: usize,
    optimizer: &mut O,
  ) -> Result<()>
  where
    L: Loss<T>,
    O: Optimizer<T>,
  {
    if epochs == 0 {
      return Err(Error::InvalidHyperparameter { name: "epochs", value: epochs.to_string() })
    }
    debug!("Training {} layers on {} samples for {} epochs (learning rate {:?})",
      self.layers.len(), input.rows(), epochs, optimizer.learning_rate());

    for _ in 0..epochs {
      let prediction = self.forward(input)?;
      let loss = L::new(&prediction, target)?;
      if log_enabled!(Level::Trace) {
        trace!("Epoch {}: loss {:?}", self.epochs + 1, loss.value());
      }
      self.backward(&loss.gradient())?;
      self.update(optimizer)?;
      self.epochs += 1;
    }

    debug!("Training finished after {} epochs in total", self.epochs);
    Ok(())
  }

  fn backward(&mut self, grad: &Tensor<T, 2>) -> Result<()> {
    let mut grad = grad.clone();
    for layer in self.layers.iter_mut().rev() {
      grad = layer.backward(&grad)?;
    }
    Ok(())
  }

  fn update<O: Optimizer<T>>(&mut self, optimizer: &mut O) -> Result<()> {
    for layer in &mut self.layers {
      layer.update_params(&mut *optimizer)?;
    }
    Ok(())
  }
}

impl<T: Real> std::fmt::Debug for Network<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let names: Vec<_> = self.layers.iter().map(|layer| layer.name() ).collect();
    f.debug_struct("Network")
      .field("layers", &names)
      .field("epochs", &self.epochs)
      .finish()
  }
}
