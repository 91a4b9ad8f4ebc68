// This example trains a small multi layer perceptron on the XOR problem.

// The network is assembled from built-in layers and trained on the full
// truth table for a fixed number of epochs, printing the loss along the way.

use rand::{ rngs::StdRng, SeedableRng };

use nanonet::{ init, Tensor, Network, Dense, ReLU, Sigmoid, Bce, Adam, Result };

fn main() -> Result<()> {
  let inputs = Tensor::from_rows(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
  let targets = Tensor::from_rows(&[[0.0], [1.0], [1.0], [0.0]]);

  // Seeded for reproducible runs
  let mut rng = StdRng::seed_from_u64(1);

  let mut net = Network::<f32>::new();
  net.add_layer(Dense::new(2, 16, init::xavier_uniform_with(&mut rng), init::zeros()));
  net.add_layer(ReLU::new());
  net.add_layer(Dense::new(16, 1, init::xavier_uniform_with(&mut rng), init::zeros()));
  net.add_layer(Sigmoid::new());

  // Keep the optimizer around so its moments carry over between rounds
  let mut optimizer = Adam::new(0.05);
  for _ in 0..10 {
    net.train_with::<Bce<_>, _>(&inputs, &targets, 100, &mut optimizer)?;
    let loss = net.evaluate::<Bce<_>>(&inputs, &targets)?;
    println!("Epoch {:>4}: loss {:.5}", net.epochs_trained(), loss);
  }

  println!("Predictions: {}", net.predict(&inputs)?);
  Ok(())
}
