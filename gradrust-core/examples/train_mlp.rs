//! # Exemple d'Entraînement d'un MLP Simple
//!
//! Cet exemple illustre les étapes fondamentales pour entraîner un petit
//! réseau de neurones avec `gradrust-core` :
//! 1. Construction d'un [`Mlp`] (2 -> 8 -> 1, tanh caché, sortie identité).
//! 2. Données synthétiques : une régression jouet sur quatre points.
//! 3. Boucle d'entraînement : forward, perte MSE, backward, pas Adam,
//!    remise à zéro des gradients.
//!
//! Exécution : `cargo run --example train_mlp`

use gradrust_core::model::{Activation, Mlp};
use gradrust_core::nn::{Loss, Module, MseLoss};
use gradrust_core::optim::{Adam, Optimizer};
use gradrust_core::{GradRustError, Value};

fn main() -> Result<(), GradRustError> {
    // Jeu de données jouet : y = 2*x0 - x1 + 0.5
    let samples: [([f64; 2], f64); 4] = [
        ([0.0, 0.0], 0.5),
        ([1.0, 0.0], 2.5),
        ([0.0, 1.0], -0.5),
        ([1.0, 1.0], 1.5),
    ];

    let mlp = Mlp::new(&[2, 8, 1], Activation::Tanh, Activation::Identity)?;
    let loss_fn = MseLoss::new();
    let mut optimizer = Adam::with_config(mlp.parameters(), 0.02, (0.9, 0.999), 1e-8, 0.0)?;

    println!("parameters: {}", mlp.parameters().len());

    for epoch in 0..200 {
        // Passe avant sur tous les échantillons
        let mut preds = Vec::with_capacity(samples.len());
        let mut targets = Vec::with_capacity(samples.len());
        for (features, target) in &samples {
            let input: Vec<Value> = features.iter().map(|&x| Value::new(x)).collect();
            let out = mlp.forward(&input)?;
            preds.push(out[0].clone());
            targets.push(*target);
        }

        let loss = loss_fn.calculate(&preds, &targets)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step();

        if epoch % 20 == 0 {
            println!("epoch {:>3}  loss {:.6}", epoch, loss.data());
        }
    }

    // Affiche les prédictions finales
    for (features, target) in &samples {
        let input: Vec<Value> = features.iter().map(|&x| Value::new(x)).collect();
        let out = mlp.forward(&input)?;
        println!(
            "f({:?}) = {:.4} (cible {:.1})",
            features,
            out[0].data(),
            target
        );
    }

    Ok(())
}
