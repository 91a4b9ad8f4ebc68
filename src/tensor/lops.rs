use crate::{
  tensor::Tensor,
  error::Result,
  scalar::{ Numeric, Signed },
};


// Operator overloads panic where the checked methods return an error.
// A shape mismatch is a programmer error that must not be carried on.

fn unwrap_shape<T>(result: Result<T>) -> T {
  match result {
    Ok(value) => value,
    Err(err) => panic!("{}", err),
  }
}

macro_rules! add_operator {
  ($trait:ident, $meth:ident, $assign_trait:ident, $assign_meth:ident, $symbol:tt) => {
    impl<T: Numeric, const N: usize> std::ops::$trait for &Tensor<T, N> { // &tensor + &other
      type Output = Tensor<T, N>;

      fn $meth(self, rhs: Self) -> Tensor<T, N> {
        unwrap_shape(self.zip_with(rhs, stringify!($meth), |a, b| a $symbol b ))
      }
    }

    impl<T: Numeric, const N: usize> std::ops::$trait for Tensor<T, N> { // tensor + other
      type Output = Tensor<T, N>;

      fn $meth(self, rhs: Self) -> Tensor<T, N> {
        &self $symbol &rhs
      }
    }

    impl<T: Numeric, const N: usize> std::ops::$trait<Tensor<T, N>> for &Tensor<T, N> { // &tensor + other
      type Output = Tensor<T, N>;

      fn $meth(self, rhs: Tensor<T, N>) -> Tensor<T, N> {
        self $symbol &rhs
      }
    }

    impl<T: Numeric, const N: usize> std::ops::$trait<&Tensor<T, N>> for Tensor<T, N> { // tensor + &other
      type Output = Tensor<T, N>;

      fn $meth(self, rhs: &Tensor<T, N>) -> Tensor<T, N> {
        &self $symbol rhs
      }
    }

    impl<T: Numeric, const N: usize> std::ops::$assign_trait<&Tensor<T, N>> for Tensor<T, N> { // tensor += &other
      fn $assign_meth(&mut self, rhs: &Tensor<T, N>) {
        unwrap_shape(self.zip_assign(rhs, stringify!($assign_meth), |a, b| a $symbol b ))
      }
    }
  };
}

add_operator!(Add, add, AddAssign, add_assign, +);
add_operator!(Sub, sub, SubAssign, sub_assign, -);
add_operator!(Mul, mul, MulAssign, mul_assign, *);

macro_rules! scalar_operator {
  ($trait:ident, $meth:ident, $symbol:tt) => {
    impl<T: Numeric, const N: usize> std::ops::$trait<T> for &Tensor<T, N> { // &tensor * T
      type Output = Tensor<T, N>;

      fn $meth(self, rhs: T) -> Tensor<T, N> {
        self.map(|a| a $symbol rhs )
      }
    }

    impl<T: Numeric, const N: usize> std::ops::$trait<T> for Tensor<T, N> { // tensor * T
      type Output = Tensor<T, N>;

      fn $meth(self, rhs: T) -> Tensor<T, N> {
        &self $symbol rhs
      }
    }
  };
}

scalar_operator!(Mul, mul, *);
scalar_operator!(Div, div, /);

impl<T: Signed, const N: usize> std::ops::Neg for &Tensor<T, N> {
  type Output = Tensor<T, N>;

  fn neg(self) -> Self::Output {
    self.map(|a| -a )
  }
}

impl<T: Signed, const N: usize> std::ops::Neg for Tensor<T, N> {
  type Output = Tensor<T, N>;

  fn neg(self) -> Self::Output {
    -&self
  }
}
