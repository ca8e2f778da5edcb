use super::add_op;
use crate::value::Value;

#[test]
fn test_add_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.5);
    let c = add_op(&a, &b);
    assert_eq!(c.data(), -1.5);
    assert_eq!(c.op(), "+");
}

#[test]
fn test_add_backward_unit_contributions() {
    let a = Value::new(2.0);
    let b = Value::new(5.0);
    let c = add_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_add_same_operand_twice_accumulates() {
    // a + a: both contributions land on the same node.
    let a = Value::new(1.0);
    let c = add_op(&a, &a);
    c.backward();
    assert_eq!(c.data(), 2.0);
    assert_eq!(a.grad(), 2.0);
}
