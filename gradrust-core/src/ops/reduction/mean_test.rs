use super::mean_op;
use crate::value::Value;

#[test]
fn test_mean_forward() {
    let xs: Vec<Value> = [1.0, 2.0, 6.0].iter().map(|&x| Value::new(x)).collect();
    let m = mean_op(&xs);
    assert_eq!(m.data(), 3.0);
}

#[test]
fn test_mean_backward_scales_by_len() {
    let xs: Vec<Value> = [4.0, 8.0].iter().map(|&x| Value::new(x)).collect();
    let m = mean_op(&xs);
    m.backward();
    for x in &xs {
        assert_eq!(x.grad(), 0.5);
    }
}

#[test]
fn test_mean_empty_is_zero_leaf() {
    let m = mean_op(&[]);
    assert_eq!(m.data(), 0.0);
    assert!(m.grad_fn().is_none());
}
