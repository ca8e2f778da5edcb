use super::Linear;
use crate::error::GradRustError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;

fn set_weights(linear: &Linear, rows: &[&[f64]], bias: Option<&[f64]>) {
    for (i, row) in rows.iter().enumerate() {
        for (w, &v) in linear.weight_row(i).iter().zip(row.iter()) {
            w.set_data(v);
        }
    }
    if let Some(bias_vals) = bias {
        for (b, &v) in linear.bias().unwrap().iter().zip(bias_vals.iter()) {
            b.set_data(v);
        }
    }
}

#[test]
fn test_linear_creation() {
    let linear = Linear::new(10, 5, true, Init::Xavier);
    assert_eq!(linear.in_features(), 10);
    assert_eq!(linear.out_features(), 5);
    assert!(linear.bias().is_some());
    for b in linear.bias().unwrap() {
        assert_eq!(b.data(), 0.0);
    }

    let no_bias = Linear::new(20, 30, false, Init::Kaiming);
    assert!(no_bias.bias().is_none());
}

#[test]
fn test_linear_parameters_order_and_count() {
    let linear = Linear::new(3, 2, true, Init::Xavier);
    let params = linear.parameters();
    // 2 weight rows of 3, then 2 biases: weights before biases.
    assert_eq!(params.len(), 2 * 3 + 2);
    for (i, row_first) in params[..6].chunks(3).enumerate() {
        for (j, p) in row_first.iter().enumerate() {
            assert_eq!(p.node_id(), linear.weight_row(i)[j].node_id());
        }
    }
    assert_eq!(params[6].node_id(), linear.bias().unwrap()[0].node_id());
    assert_eq!(params[7].node_id(), linear.bias().unwrap()[1].node_id());

    let no_bias = Linear::new(5, 4, false, Init::Kaiming);
    assert_eq!(no_bias.parameters().len(), 20);
}

#[test]
fn test_linear_forward() {
    let linear = Linear::new(3, 2, true, Init::Xavier);
    set_weights(
        &linear,
        &[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]],
        Some(&[0.1, 0.2]),
    );
    let input: Vec<Value> = [10.0, 20.0, 30.0].iter().map(|&x| Value::new(x)).collect();
    let out = linear.forward(&input).unwrap();
    assert_eq!(out.len(), 2);
    assert!((out[0].data() - 140.1).abs() < 1e-9);
    assert!((out[1].data() - 320.2).abs() < 1e-9);
}

#[test]
fn test_linear_rejects_wrong_input_length() {
    let linear = Linear::new(3, 2, true, Init::Xavier);
    let input: Vec<Value> = [1.0, 2.0].iter().map(|&x| Value::new(x)).collect();
    let err = linear.forward(&input).unwrap_err();
    assert_eq!(
        err,
        GradRustError::DimensionMismatch {
            expected: 3,
            actual: 2,
            operation: "Linear forward".to_string(),
        }
    );
}

#[test]
fn test_linear_backward_populates_parameter_gradients() {
    // out = w0*x0 + w1*x1 + b: d out/d w_j = x_j, d out/d b = 1.
    let linear = Linear::new(2, 1, true, Init::Xavier);
    set_weights(&linear, &[&[3.0, 4.0]], Some(&[0.1]));
    let input: Vec<Value> = [10.0, 20.0].iter().map(|&x| Value::new(x)).collect();
    let out = linear.forward(&input).unwrap();
    assert!((out[0].data() - 110.1).abs() < 1e-9);

    out[0].backward();
    assert_eq!(linear.weight_row(0)[0].grad(), 10.0);
    assert_eq!(linear.weight_row(0)[1].grad(), 20.0);
    assert_eq!(linear.bias().unwrap()[0].grad(), 1.0);
    // Gradients also flow back into the inputs.
    assert_eq!(input[0].grad(), 3.0);
    assert_eq!(input[1].grad(), 4.0);
}

#[test]
fn test_linear_zero_grad() {
    let linear = Linear::new(2, 2, true, Init::Kaiming);
    let input: Vec<Value> = [1.0, -1.0].iter().map(|&x| Value::new(x)).collect();
    let out = linear.forward(&input).unwrap();
    out[0].backward();
    linear.zero_grad();
    for p in linear.parameters() {
        assert_eq!(p.grad(), 0.0);
    }
}
