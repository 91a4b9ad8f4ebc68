use crate::error::{ Error, Result };


/// The shape of a [Tensor](crate::Tensor) of rank `N`.
///
/// Dimensions are fixed at creation, strides are always the
/// row-major strides of those dimensions.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape<const N: usize> {
  pub(crate) dims: [usize; N],
  pub(crate) strides: [usize; N],
}

impl<const N: usize> Shape<N> {
  pub fn new(dims: [usize; N]) -> Self {
    Self { dims, strides: Self::make_strides(&dims) }
  }

  fn make_strides(dims: &[usize; N]) -> [usize; N] {
    let mut strides = [0; N];
    if N == 0 { return strides }
    strides[N - 1] = 1;
    for i in (1..N).rev() {
      strides[i - 1] = dims[i] * strides[i];
    }
    strides
  }

  pub fn dims(&self) -> &[usize; N] {
    &self.dims
  }

  pub fn size(&self) -> usize {
    self.dims.iter().product()
  }

  pub const fn rank(&self) -> usize {
    N
  }

  pub fn strides(&self) -> &[usize; N] {
    &self.strides
  }

  /// Flat buffer offset of `indices`, validated against every dimension.

  pub fn index(&self, indices: &[usize; N]) -> Result<usize> {
    if indices.iter().zip(&self.dims).any(|(&i, &n)| i >= n ) {
      return Err(Error::IndexOutOfRange {
        index: indices.to_vec(),
        shape: self.dims.to_vec(),
      })
    }
    Ok(indices.iter()
      .zip(&self.strides)
      .map(|(&i, &s)| i * s )
      .sum())
  }

  /// Inverse of [index](Shape::index) for in-range offsets.

  pub fn unravel(&self, mut offset: usize) -> [usize; N] {
    let mut indices = [0; N];
    for (d, &stride) in self.strides.iter().enumerate() {
      if stride == 0 { continue }
      indices[d] = offset / stride;
      offset %= stride;
    }
    indices
  }

  /// Fail with [Error::ShapeMismatch] unless both shapes are identical.

  pub fn expect_same(&self, other: &Self, op: &'static str) -> Result<()> {
    if self.dims == other.dims {
      Ok(())
    } else {
      Err(Error::ShapeMismatch { op, lhs: self.dims.to_vec(), rhs: other.dims.to_vec() })
    }
  }
}

impl Shape<2> {
  pub fn transpose(&self) -> Self {
    Self::new([self.dims[1], self.dims[0]])
  }
}

impl<const N: usize> std::ops::Index<usize> for Shape<N> {
  type Output = usize;

  fn index(&self, i: usize) -> &usize {
    &self.dims[i]
  }
}

impl<const N: usize> std::fmt::Display for Shape<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Shape{:?}", self.dims)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strides() {
    let shape = Shape::new([3,2,2]);
    assert_eq!(shape.strides, [4,2,1]);

    let shape = Shape::new([2,3,2]);
    assert_eq!(shape.strides, [6,2,1]);
  }

  #[test]
  fn dims_and_strides_agree() {
    let shape = Shape::new([4,5,6]);
    assert_eq!(shape.dims(), &[4,5,6]);
    assert_eq!(shape.strides(), &[30,6,1]);
    assert_eq!(shape.index(&[3,4,5]), Ok(shape.size() - 1));
  }

  #[test]
  fn size() {
    assert_eq!(Shape::new([2,3,4]).size(), 24);
    assert_eq!(Shape::new([5,0]).size(), 0);
    assert_eq!(Shape::new([]).size(), 1);
  }

  #[test]
  fn index() {
    let shape = Shape::new([2,3]);
    assert_eq!(shape.index(&[0,0]), Ok(0));
    assert_eq!(shape.index(&[1,0]), Ok(3));
    assert_eq!(shape.index(&[1,2]), Ok(5));
  }

  #[test]
  fn index_out_of_range() {
    let shape = Shape::new([2,3]);
    assert_eq!(shape.index(&[2,0]), Err(Error::IndexOutOfRange {
      index: vec![2,0],
      shape: vec![2,3],
    }));
    assert!(shape.index(&[0,3]).is_err());
  }

  #[test]
  fn unravel() {
    let shape = Shape::new([3,2,2]);
    for offset in 0..shape.size() {
      let indices = shape.unravel(offset);
      assert_eq!(shape.index(&indices), Ok(offset));
    }
    assert_eq!(shape.unravel(7), [1,1,1]);
  }

  #[test]
  fn transpose() {
    let shape = Shape::new([2,3]).transpose();
    assert_eq!(shape.dims(), &[3,2]);
    assert_eq!(shape.strides, [2,1]);
  }

  #[test]
  fn expect_same() {
    let a = Shape::new([2,3]);
    assert!(a.expect_same(&Shape::new([2,3]), "add").is_ok());
    assert_eq!(a.expect_same(&Shape::new([3,2]), "add"), Err(Error::ShapeMismatch {
      op: "add",
      lhs: vec![2,3],
      rhs: vec![3,2],
    }));
  }
}
