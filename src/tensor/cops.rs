use itertools::iproduct;

use crate::{
  tensor::Tensor,
  shape::Shape,
  error::{ Error, Result },
  scalar::{ Inner, Numeric, Real },
};


// Matrix operations on rank 2 tensors

impl<T: Inner> Tensor<T, 2> {
  /// Build a matrix from literal rows.

  pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Self {
    let data = rows.iter().flat_map(|row| row.iter().copied() ).collect();
    Self { shape: Shape::new([rows.len(), C]), data }
  }

  pub fn rows(&self) -> usize {
    self.shape[0]
  }

  pub fn cols(&self) -> usize {
    self.shape[1]
  }

  pub fn transpose(&self) -> Self {
    let (rows, cols) = (self.rows(), self.cols());
    let data = iproduct!(0..cols, 0..rows)
      .map(|(j, i)| self.data[i * cols + j] )
      .collect();
    Self { shape: self.shape.transpose(), data }
  }
}

impl<T: Numeric> Tensor<T, 2> {
  /// Add a `[1, cols]` row to every row of `self`.

  pub fn add_row(&self, row: &Self) -> Result<Self> {
    if row.rows() != 1 || row.cols() != self.cols() {
      return Err(Error::ShapeMismatch {
        op: "add_row",
        lhs: self.shape.dims.to_vec(),
        rhs: row.shape.dims.to_vec(),
      })
    }
    let cols = self.cols();
    let data = self.data.iter()
      .enumerate()
      .map(|(i, &a)| a + row.data[i % cols] )
      .collect();
    Ok(Self { shape: self.shape, data })
  }

  /// Sum over the rows, producing a `[1, cols]` tensor.

  pub fn sum_rows(&self) -> Self {
    let cols = self.cols();
    let mut data = vec![T::zero(); cols];
    for (i, &a) in self.data.iter().enumerate() {
      data[i % cols] += a;
    }
    Self { shape: Shape::new([1, cols]), data }
  }
}

impl<T: Real> Tensor<T, 2> {
  /// Matrix product `self · rhs`.
  ///
  /// Fails with [Error::ShapeMismatch] unless `self.cols() == rhs.rows()`.

  pub fn matmul(&self, rhs: &Self) -> Result<Self> {
    if self.cols() != rhs.rows() {
      return Err(Error::ShapeMismatch {
        op: "matmul",
        lhs: self.shape.dims.to_vec(),
        rhs: rhs.shape.dims.to_vec(),
      })
    }
    let (m, k, n) = (self.rows(), self.cols(), rhs.cols());
    let mut data = vec![T::zero(); m * n];
    T::gemm(m, k, n, &self.data, &rhs.data, &mut data);
    Ok(Self { shape: Shape::new([m, n]), data })
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_rows() {
    let x = Tensor::from_rows(&[[1, 2, 3], [4, 5, 6]]);
    assert_eq!(x.dims(), [2,3]);
    assert_eq!(x[[1,0]], 4);
  }

  #[test]
  fn matmul() {
    let x = Tensor::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let y = Tensor::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    assert_eq!(x.matmul(&y), Ok(Tensor::from_rows(&[[22.0, 28.0], [49.0, 64.0]])));
  }

  #[test]
  fn matmul_vector() {
    let x = Tensor::from_rows(&[[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let y = Tensor::from_rows(&[[1.0], [2.0], [3.0]]);
    assert_eq!(x.matmul(&y), Ok(Tensor::from_rows(&[[14.0], [32.0]])));
  }

  #[test]
  fn matmul_inner_mismatch() {
    let x = Tensor::<f64, 2>::zeros([2,3]);
    let y = Tensor::<f64, 2>::zeros([2,3]);
    assert_eq!(x.matmul(&y), Err(Error::ShapeMismatch {
      op: "matmul",
      lhs: vec![2,3],
      rhs: vec![2,3],
    }));
  }

  #[test]
  fn transpose() {
    let a = Tensor::from_rows(&[[1, 2, 3], [4, 5, 6]]);
    let b = a.transpose();
    assert_eq!(b, Tensor::from_rows(&[[1, 4], [2, 5], [3, 6]]));
    assert_eq!(b.transpose(), a);
  }

  #[test]
  fn add_row() {
    let a = Tensor::from_rows(&[[1, 2], [3, 4], [5, 6]]);
    let b = Tensor::from_rows(&[[10, 20]]);
    assert_eq!(a.add_row(&b), Ok(Tensor::from_rows(&[[11, 22], [13, 24], [15, 26]])));
    assert!(a.add_row(&Tensor::from_rows(&[[1, 2, 3]])).is_err());
    assert!(a.add_row(&a).is_err());
  }

  #[test]
  fn sum_rows() {
    let a = Tensor::from_rows(&[[1, 2], [3, 4], [5, 6]]);
    assert_eq!(a.sum_rows(), Tensor::from_rows(&[[9, 12]]));
  }
}
