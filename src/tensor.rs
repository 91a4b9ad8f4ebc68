use std::fmt::Debug;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

mod cops;
mod lops;

use crate::{
  internal::*,
  shape::Shape,
  error::{ Error, Result },
  scalar::{ Inner, Numeric, Real },
};


/// Dense, contiguous array of rank `N`.
///
/// Tensors may contain any type that satisfies [Inner], but
/// arithmetic is only available for [Numeric] inner types and
/// linear algebra for [Real] ones.
///
/// Tensors are plain values. Cloning copies the buffer and every
/// arithmetic operation allocates a fresh result, leaving its
/// operands untouched. Only [fill](Tensor::fill), [set](Tensor::set),
/// [zip_assign](Tensor::zip_assign) and indexed writes mutate.

#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T: Inner, const N: usize> {
  shape: Shape<N>,
  data: Vec<T>,
}

impl<T: Inner, const N: usize> Tensor<T, N> {
  pub fn from_shape(shape: Shape<N>, data: Vec<T>) -> Result<Self> {
    if shape.size() != data.len() {
      return Err(Error::DataLength { expected: shape.size(), got: data.len() })
    }
    Ok(Self { shape, data })
  }

  pub fn from_vec(dims: [usize; N], data: Vec<T>) -> Result<Self> {
    Self::from_shape(Shape::new(dims), data)
  }

  pub fn filled(dims: [usize; N], filler: T) -> Self {
    let shape = Shape::new(dims);
    Self { data: vec![filler; shape.size()], shape }
  }

  /// Build a tensor by calling `cb` with the indices of every element.

  pub fn init(dims: [usize; N], mut cb: impl FnMut([usize; N]) -> T) -> Self {
    let shape = Shape::new(dims);
    let data = (0..shape.size()).map(|i| cb(shape.unravel(i)) ).collect();
    Self { shape, data }
  }

  pub fn shape(&self) -> &Shape<N> {
    &self.shape
  }

  pub fn dims(&self) -> [usize; N] {
    self.shape.dims
  }

  pub fn size(&self) -> usize {
    self.shape.size()
  }

  pub const fn rank(&self) -> usize {
    N
  }

  pub fn raw(&self) -> &[T] {
    &self.data
  }

  pub fn raw_mut(&mut self) -> &mut [T] {
    &mut self.data
  }

  pub fn into_raw(self) -> Vec<T> {
    self.data
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.data.iter()
  }

  pub fn fill(&mut self, filler: T) {
    self.data.iter_mut().for_each(|a| *a = filler );
  }

  pub fn get(&self, indices: [usize; N]) -> Result<T> {
    Ok(self.data[self.shape.index(&indices)?])
  }

  pub fn get_mut(&mut self, indices: [usize; N]) -> Result<&mut T> {
    let i = self.shape.index(&indices)?;
    Ok(&mut self.data[i])
  }

  pub fn set(&mut self, indices: [usize; N], value: T) -> Result<()> {
    *self.get_mut(indices)? = value;
    Ok(())
  }

  /// Apply `cb` to every element, producing a tensor of the same shape.

  pub fn map<O, F>(&self, cb: F) -> Tensor<O, N>
  where
    O: Inner,
    F: Fn(T) -> O + Send + Sync,
  {
    #[cfg(feature = "rayon")]
    let data = self.data.par_iter().map(|&a| cb(a) ).collect();

    #[cfg(not(feature = "rayon"))]
    let data = self.data.iter().map(|&a| cb(a) ).collect();

    Tensor { shape: self.shape, data }
  }

  /// Combine two tensors of identical shape element by element.
  ///
  /// `op` names the operation in the [Error::ShapeMismatch] raised
  /// when the shapes differ. Nothing is ever broadcast.

  pub fn zip_with<O, F>(&self, rhs: &Self, op: &'static str, cb: F) -> Result<Tensor<O, N>>
  where
    O: Inner,
    F: Fn(T, T) -> O + Send + Sync,
  {
    self.shape.expect_same(&rhs.shape, op)?;

    #[cfg(feature = "rayon")]
    let data = self.data.par_iter()
      .zip(rhs.data.par_iter())
      .map(|(&a, &b)| cb(a, b) )
      .collect();

    #[cfg(not(feature = "rayon"))]
    let data = self.data.iter()
      .zip(rhs.data.iter())
      .map(|(&a, &b)| cb(a, b) )
      .collect();

    Ok(Tensor { shape: self.shape, data })
  }

  /// In-place variant of [zip_with](Tensor::zip_with), used for
  /// parameter updates.

  pub fn zip_assign<F>(&mut self, rhs: &Self, op: &'static str, cb: F) -> Result<()>
  where
    F: Fn(T, T) -> T + Send + Sync,
  {
    self.shape.expect_same(&rhs.shape, op)?;

    #[cfg(feature = "rayon")]
    self.data.par_iter_mut()
      .zip(rhs.data.par_iter())
      .for_each(|(a, &b)| *a = cb(*a, b) );

    #[cfg(not(feature = "rayon"))]
    self.data.iter_mut()
      .zip(rhs.data.iter())
      .for_each(|(a, &b)| *a = cb(*a, b) );

    Ok(())
  }
}

impl<T: Numeric, const N: usize> Tensor<T, N> {
  /// Create a tensor of the given shape.
  ///
  /// The buffer starts zeroed, but callers should treat it as
  /// unset until they [fill](Tensor::fill) or assign it.

  pub fn new(dims: [usize; N]) -> Self {
    Self::zeros(dims)
  }

  pub fn zeros(dims: [usize; N]) -> Self {
    Self::filled(dims, T::zero())
  }

  pub fn ones(dims: [usize; N]) -> Self {
    Self::filled(dims, T::one())
  }

  pub fn add(&self, rhs: &Self) -> Result<Self> {
    self.zip_with(rhs, "add", |a, b| a + b )
  }

  pub fn sub(&self, rhs: &Self) -> Result<Self> {
    self.zip_with(rhs, "sub", |a, b| a - b )
  }

  pub fn mul(&self, rhs: &Self) -> Result<Self> {
    self.zip_with(rhs, "mul", |a, b| a * b )
  }

  pub fn scale(&self, factor: T) -> Self {
    self.map(|a| a * factor )
  }

  pub fn div_scalar(&self, divisor: T) -> Self {
    self.map(|a| a / divisor )
  }

  pub fn add_scalar(&self, summand: T) -> Self {
    self.map(|a| a + summand )
  }

  pub fn sum(&self) -> T {
    self.data.iter().copied().sum()
  }

  pub fn clamp(&self, min: T, max: T) -> Self {
    self.map(|a| if a < min { min } else if a > max { max } else { a } )
  }
}

impl<T: Real, const N: usize> Tensor<T, N> {
  pub fn mean(&self) -> T {
    self.sum() / constant(self.size() as f64)
  }

  /// True when shapes match and no pair of elements differs by more than `tolerance`.

  pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
    self.shape == other.shape && self.data.iter()
      .zip(other.data.iter())
      .all(|(&a, &b)| num_traits::real::Real::abs(a - b) <= tolerance )
  }
}

impl<T: Inner, const N: usize> std::ops::Index<[usize; N]> for Tensor<T, N> {
  type Output = T;

  fn index(&self, indices: [usize; N]) -> &T {
    match self.shape.index(&indices) {
      Ok(i) => &self.data[i],
      Err(err) => panic!("{}", err),
    }
  }
}

impl<T: Inner, const N: usize> std::ops::IndexMut<[usize; N]> for Tensor<T, N> {
  fn index_mut(&mut self, indices: [usize; N]) -> &mut T {
    match self.shape.index(&indices) {
      Ok(i) => &mut self.data[i],
      Err(err) => panic!("{}", err),
    }
  }
}

impl<T: Inner, const N: usize> std::fmt::Display for Tensor<T, N> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Tensor{:?} ", self.shape.dims)?;
    print_chunks(0, &self.shape.dims, &self.data, f)?;
    Ok(())
  }
}

fn print_chunks<T: Debug>(idx: usize, dims: &[usize], vec: &[T], f: &mut std::fmt::Formatter) -> std::fmt::Result {
  let indent = (0..idx * 2).map(|_| " ").collect::<String>();
  if dims.is_empty() {
    write!(f, "{indent}{:?}", vec[0])?;
  } else if idx == dims.len() - 1 || vec.is_empty() {
    write!(f, "{indent}{:?}\n", vec)?;
  } else {
    let chunks = vec.chunks(vec.len() / dims[idx]);
    write!(f, "{indent}[\n")?;
    for chunk in chunks {
      print_chunks(idx + 1, dims, chunk, f)?;
    }
    write!(f, "{indent}]\n")?;
  }
  Ok(())
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_vec() {
    let x = Tensor::from_vec([2,3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(x.dims(), [2,3]);
    assert_eq!(x.size(), 6);
    assert_eq!(x.rank(), 2);
    assert_eq!(Tensor::from_vec([2,2], vec![1, 2, 3]),
      Err(Error::DataLength { expected: 4, got: 3 }));
  }

  #[test]
  fn index() {
    let mut x = Tensor::from_vec([2,2,2], vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(x.get([0,0,1]), Ok(2));
    assert_eq!(x.get([1,1,0]), Ok(7));
    assert_eq!(x[[1,0,1]], 6);
    x.set([1,0,1], 60).unwrap();
    x[[0,1,0]] = 30;
    assert_eq!(x.raw(), &[1, 2, 30, 4, 5, 60, 7, 8]);
  }

  #[test]
  fn index_out_of_range() {
    let mut x = Tensor::<f32, 2>::zeros([2,3]);
    assert_eq!(x.get([2,0]), Err(Error::IndexOutOfRange {
      index: vec![2,0],
      shape: vec![2,3],
    }));
    assert!(x.set([0,3], 1.0).is_err());
    assert_eq!(x, Tensor::zeros([2,3]));
  }

  #[test]
  #[should_panic(expected = "out of range")]
  fn index_operator_panics() {
    let x = Tensor::<i32, 1>::zeros([3]);
    let _ = x[[3]];
  }

  #[test]
  fn fill() {
    let mut x = Tensor::<f64, 2>::new([2,2]);
    x.fill(0.5);
    assert!(x.iter().all(|&a| a == 0.5 ));
  }

  #[test]
  fn init() {
    let x = Tensor::init([2,3], |[i, j]| i * 10 + j );
    assert_eq!(x.raw(), &[0, 1, 2, 10, 11, 12]);
  }

  #[test]
  fn elementwise() {
    let a = Tensor::from_vec([2,2], vec![1, 2, 3, 4]).unwrap();
    let b = Tensor::from_vec([2,2], vec![5, 6, 7, 8]).unwrap();
    assert_eq!(a.add(&b).unwrap().raw(), &[6, 8, 10, 12]);
    assert_eq!(b.sub(&a).unwrap().raw(), &[4, 4, 4, 4]);
    assert_eq!(a.mul(&b).unwrap().raw(), &[5, 12, 21, 32]);
    // Operands stay untouched
    assert_eq!(a.raw(), &[1, 2, 3, 4]);
  }

  #[test]
  fn elementwise_shape_mismatch() {
    let a = Tensor::<f32, 2>::zeros([2,3]);
    let b = Tensor::<f32, 2>::zeros([3,2]);
    assert_eq!(a.add(&b), Err(Error::ShapeMismatch { op: "add", lhs: vec![2,3], rhs: vec![3,2] }));
    assert!(a.sub(&b).is_err());
    assert!(a.mul(&b).is_err());
  }

  #[test]
  fn add_then_sub_restores() {
    let a = Tensor::init([3,4], |[i, j]| (i as f64 * 0.37 - j as f64 * 1.91).sin() );
    let b = Tensor::init([3,4], |[i, j]| (i * j) as f64 * 12.5 - 3.3 );
    let c = a.add(&b).unwrap().sub(&b).unwrap();
    assert!(c.approx_eq(&a, 1e-12));
  }

  #[test]
  fn scalar_ops() {
    let a = Tensor::from_vec([3], vec![2.0, 4.0, 6.0]).unwrap();
    assert_eq!(a.div_scalar(2.0).raw(), &[1.0, 2.0, 3.0]);
    assert_eq!(a.scale(0.5).raw(), &[1.0, 2.0, 3.0]);
    assert_eq!(a.add_scalar(1.0).raw(), &[3.0, 5.0, 7.0]);
    assert_eq!(a.sum(), 12.0);
    assert_eq!(a.mean(), 4.0);
  }

  #[test]
  fn clamp() {
    let a = Tensor::from_vec([4], vec![-2.0, 0.0, 0.5, 3.0]).unwrap();
    assert_eq!(a.clamp(0.0, 1.0).raw(), &[0.0, 0.0, 0.5, 1.0]);
  }

  #[test]
  fn clone_is_independent() {
    let a = Tensor::<f32, 2>::ones([2,2]);
    let mut b = a.clone();
    b.fill(3.0);
    assert_eq!(a, Tensor::ones([2,2]));
  }

  #[test]
  fn zip_assign() {
    let mut a = Tensor::from_vec([2], vec![1.0, 2.0]).unwrap();
    let b = Tensor::from_vec([2], vec![0.5, 0.5]).unwrap();
    a.zip_assign(&b, "update", |p, g| p - g ).unwrap();
    assert_eq!(a.raw(), &[0.5, 1.5]);
    assert!(a.zip_assign(&Tensor::zeros([3]), "update", |p, _| p ).is_err());
  }

  #[test]
  fn display() {
    let a = Tensor::from_vec([2,2], vec![1, 2, 3, 4]).unwrap();
    assert_eq!(a.to_string(), "Tensor[2, 2] [\n  [1, 2]\n  [3, 4]\n]\n");
  }
}
