//! Standalone self-check of the autodiff engine.
//!
//! Builds `z = x*y + y` at `x = 2, y = 3`, runs the backward pass and
//! verifies the gradients against the hand-derived values:
//! `dz/dx = y = 3` and `dz/dy = x + 1 = 3`.
//!
//! Exécution : `cargo run --example sanity_check`

use gradrust_core::Value;

fn main() {
    let x = Value::new(2.0);
    let y = Value::new(3.0);
    let z = &(&x * &y) + &y;

    z.backward();

    println!("z: {:?}", z);
    println!("dz/dx (should be y=3): {}", x.grad());
    println!("dz/dy (should be x+1=3): {}", y.grad());

    assert_eq!(x.grad(), 3.0);
    assert_eq!(y.grad(), 3.0);
    println!("sanity check passed");
}
