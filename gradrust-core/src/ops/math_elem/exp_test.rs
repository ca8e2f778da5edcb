use super::exp_op;
use crate::value::Value;

#[test]
fn test_exp_forward() {
    let x = Value::new(1.0);
    let y = exp_op(&x);
    assert!((y.data() - std::f64::consts::E).abs() < 1e-12);
}

#[test]
fn test_exp_backward_equals_forward_output() {
    let x = Value::new(0.5);
    let y = exp_op(&x);
    y.backward();
    assert!((x.grad() - y.data()).abs() < 1e-12);
}
