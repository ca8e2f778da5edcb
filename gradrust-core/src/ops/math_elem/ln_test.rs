use super::ln_op;
use crate::value::Value;
use crate::EPS;

#[test]
fn test_ln_forward_and_backward() {
    let x = Value::new(2.0);
    let y = ln_op(&x);
    assert!((y.data() - 2.0f64.ln()).abs() < 1e-12);
    y.backward();
    assert!((x.grad() - 0.5).abs() < 1e-12);
}

#[test]
fn test_ln_clamps_zero_input() {
    let x = Value::new(0.0);
    let y = ln_op(&x);
    assert_eq!(y.data(), EPS.ln());
    assert!(y.data().is_finite());
    y.backward();
    assert_eq!(x.grad(), 1.0 / EPS);
    assert!(x.grad().is_finite());
}

#[test]
fn test_ln_clamps_negative_input() {
    let x = Value::new(-3.0);
    let y = ln_op(&x);
    assert_eq!(y.data(), EPS.ln());
    y.backward();
    assert!(x.grad().is_finite());
}
