use super::mul_op;
use crate::value::Value;

#[test]
fn test_mul_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-4.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.data(), -8.0);
    assert_eq!(c.op(), "*");
}

#[test]
fn test_mul_backward_cross_values() {
    let a = Value::new(2.0);
    let b = Value::new(-4.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), -4.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_square_accumulates() {
    // a*a: d/da = 2a, via two additive contributions of a each.
    let a = Value::new(3.0);
    let c = mul_op(&a, &a);
    c.backward();
    assert_eq!(a.grad(), 6.0);
}
