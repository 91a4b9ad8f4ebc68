//! Dense tensors and a small feed-forward network trainer.
//! Tiny. Few dependencies. CPU only. Stable Rust.
//!
//! # Features
//!
//! - **Checked shapes**: Every tensor operation validates its operands and
//! reports mismatches as an [Error] instead of producing garbage.
//!
//! - **Const-generic rank**: [Tensor] carries its rank in the type, so
//! matrix-only operations like [Tensor::matmul] simply don't exist for vectors.
//!
//! - **Explicit gradients**: Layers implement their own backward pass. No
//! computation graph gets recorded, which keeps memory use flat.
//!
//! - **Pluggable layers**: Anything implementing [Layer] can be added
//! to a [Network], next to the built-in [Dense], [ReLU] and [Sigmoid] layers.
//!
//! - **Optimization**: Includes plain [SGD](Sgd) and [Adam], as well as
//! mean squared error and binary cross entropy losses.
//!
//! # Examples
//!
//! Tensor arithmetic:
//! ```
//! use nanonet::Tensor;
//!
//! let a = Tensor::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
//! let b = Tensor::from_rows(&[[0.5], [1.0]]);
//!
//! let c = a.matmul(&b).unwrap();
//! assert_eq!(c, Tensor::from_rows(&[[2.5], [5.5]]));
//! assert_eq!(&a + &a, a.scale(2.0));
//! assert!(b.matmul(&b).is_err());
//! ```
//!
//! Learning XOR:
//! ```
//! use nanonet::{ init, Network, Dense, ReLU, Sigmoid, Bce, Adam, Tensor };
//!
//! let x = Tensor::from_rows(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
//! let y = Tensor::from_rows(&[[0.0], [1.0], [1.0], [0.0]]);
//!
//! let mut net = Network::<f64>::new();
//! net.add_layer(Dense::new(2, 8, init::xavier_uniform(), init::zeros()));
//! net.add_layer(ReLU::new());
//! net.add_layer(Dense::new(8, 1, init::xavier_uniform(), init::zeros()));
//! net.add_layer(Sigmoid::new());
//!
//! let before = net.evaluate::<Bce<_>>(&x, &y).unwrap();
//! net.train::<Bce<_>, Adam<_>>(&x, &y, 100, 4, 0.01).unwrap();
//! let after = net.evaluate::<Bce<_>>(&x, &y).unwrap();
//!
//! assert!(after < before);
//! ```
//!
//! ## More examples
//! Check the `/demos` folder for more example code.
//!
//!
//! # Optional features
//!
//! Some features can be toggled in your `Cargo.toml`.
//!
//! - `unsafe` *(default)*: Accelerated matrix math using [matrixmultiply] crate.
//! - `rayon`: Data-parallel elementwise operations using [rayon] crate.

mod internal;
mod shape;
mod tensor;
mod parameter;
mod network;

pub mod error;
pub mod scalar;
pub mod init;
pub mod layer;
pub mod loss;
pub mod optimize;

pub use error::{ Error, Result };
pub use shape::Shape;
pub use tensor::Tensor;
pub use parameter::Parameter;
pub use layer::{ Layer, Dense, ReLU, Sigmoid };
pub use loss::{ Loss, Mse, Bce };
pub use optimize::{ Optimizer, Sgd, Adam };
pub use network::{ Network, NetworkState };
