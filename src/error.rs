use thiserror::Error;


/// Precondition violations raised by tensor, layer and training operations.
///
/// All of these are deterministic programmer errors. They are reported at
/// the operation that broke the invariant and never retried.

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
  /// Operand shapes disagree where equality is required.
  #[error("Shape mismatch in {op}: {lhs:?} vs {rhs:?}")]
  ShapeMismatch { op: &'static str, lhs: Vec<usize>, rhs: Vec<usize> },

  /// Element access outside the declared shape.
  #[error("Index {index:?} out of range for shape {shape:?}")]
  IndexOutOfRange { index: Vec<usize>, shape: Vec<usize> },

  /// Raw data doesn't fill the requested shape exactly.
  #[error("Shape needs {expected} elements, got {got}")]
  DataLength { expected: usize, got: usize },

  /// A layer was asked for gradients without a cached forward pass.
  #[error("{layer} backward called before forward")]
  BackwardBeforeForward { layer: &'static str },

  #[error("Invalid {name}: {value} (must be positive)")]
  InvalidHyperparameter { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    let err = Error::ShapeMismatch { op: "add", lhs: vec![2, 3], rhs: vec![3, 2] };
    assert_eq!(err.to_string(), "Shape mismatch in add: [2, 3] vs [3, 2]");

    let err = Error::IndexOutOfRange { index: vec![4, 0], shape: vec![2, 2] };
    assert_eq!(err.to_string(), "Index [4, 0] out of range for shape [2, 2]");

    let err = Error::BackwardBeforeForward { layer: "Dense" };
    assert_eq!(err.to_string(), "Dense backward called before forward");
  }
}
