// src/value/traits.rs

use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;

// --- Trait Implementations ---

impl Clone for Value {
    /// Shallow clone: bumps the reference count of the shared data block.
    /// Both handles refer to the same graph node.
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Value(data={:.6}, grad={:.6}, op={})",
            guard.data, guard.grad, guard.op
        )
    }
}

/// Equality is graph identity, not numeric equality: two values holding the
/// same number are distinct vertices, and collections over graph nodes must
/// never conflate them.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// Hashes by the address of the shared data block, consistent with
    /// the identity-based `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

// --- Operator overloads ---
// Convenience surface over the ops module; each binary operator is offered
// for owned values, references, and a plain f64 on either side (the f64 is
// lifted to a fresh leaf).

impl Add for &Value {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add_op(self, rhs)
    }
}

impl Add for Value {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add_op(&self, &rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        add_op(self, &Value::new(rhs))
    }
}

impl Add<Value> for f64 {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add_op(&Value::new(self), &rhs)
    }
}

impl Sub for &Value {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub for Value {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub_op(&self, &rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        sub_op(self, &Value::new(rhs))
    }
}

impl Sub<Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub_op(&Value::new(self), &rhs)
    }
}

impl Mul for &Value {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul for Value {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul_op(&self, &rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        mul_op(self, &Value::new(rhs))
    }
}

impl Mul<Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul_op(&Value::new(self), &rhs)
    }
}

impl Div for &Value {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div_op(self, rhs)
    }
}

impl Div for Value {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div_op(&self, &rhs)
    }
}

impl Div<f64> for &Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        div_op(self, &Value::new(rhs))
    }
}

impl Div<Value> for f64 {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div_op(&Value::new(self), &rhs)
    }
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}
