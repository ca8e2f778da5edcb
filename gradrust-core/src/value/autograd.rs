// src/value/autograd.rs

use std::sync::Arc;

use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::value::Value;

impl Value {
    /// Returns a clone of the `Arc` pointing to the backward rule, if any.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp + Send + Sync>> {
        self.read_data().grad_fn.clone()
    }

    /// Runs reverse-mode autodiff from this value.
    ///
    /// Builds the topological order of the subgraph reachable from `self`
    /// (leaves first), resets the gradient of every visited node to 0,
    /// seeds `self.grad = 1.0`, then walks the order in reverse invoking
    /// each node's backward rule. Because parents precede children in the
    /// forward order, every rule runs only after all of its node's incoming
    /// contributions have been accumulated.
    ///
    /// Afterwards every reachable node's gradient holds
    /// d(self)/d(node). Calling `backward` from an interior node is
    /// well-defined and yields sensitivities w.r.t. that sub-result.
    /// Repeated calls produce identical, independent gradient assignments:
    /// only nodes visited by *this* call are reset, and accumulation across
    /// multiple consumer paths within one call is additive by design.
    pub fn backward(&self) {
        let topo = topological_sort(self);
        log::debug!("backward pass over {} nodes", topo.len());

        // Reset only the visited subgraph, discarding gradients left over
        // from a previous call.
        for node in &topo {
            node.write_data().grad = 0.0;
        }
        self.write_data().grad = 1.0;

        for node in topo.iter().rev() {
            let (grad, grad_fn) = {
                let guard = node.read_data();
                (guard.grad, guard.grad_fn.clone())
            };
            if let Some(op) = grad_fn {
                let inputs = op.inputs();
                let contributions = op.backward(grad);
                debug_assert_eq!(
                    inputs.len(),
                    contributions.len(),
                    "backward rule returned a contribution count that does not match its inputs"
                );
                for (input, contribution) in inputs.iter().zip(contributions) {
                    input.write_data().grad += contribution;
                }
            }
        }
    }

    /// Resets this value's gradient accumulator to 0.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Returns a new leaf with the same numeric data but no history.
    pub fn detach(&self) -> Value {
        Value::new(self.data())
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn test_sanity_check() {
        // z = x*y + y at x=2, y=3: dz/dx = y = 3, dz/dy = x + 1 = 3.
        let x = Value::new(2.0);
        let y = Value::new(3.0);
        let z = &(&x * &y) + &y;
        z.backward();
        assert_eq!(z.data(), 9.0);
        assert_eq!(x.grad(), 3.0);
        assert_eq!(y.grad(), 3.0);
    }

    #[test]
    fn test_gradient_accumulation_over_two_paths() {
        // b = a*a + a*3: db/da = 2a + 3 = 7 at a=2.
        let a = Value::new(2.0);
        let b = &(&a * &a) + &(&a * 3.0);
        b.backward();
        assert_eq!(b.data(), 10.0);
        assert_eq!(a.grad(), 7.0);
    }

    #[test]
    fn test_backward_idempotent() {
        let a = Value::new(2.0);
        let b = Value::new(-1.5);
        let c = &(&a * &b) + &a;
        c.backward();
        let (ga, gb) = (a.grad(), b.grad());
        c.backward();
        assert_eq!(a.grad(), ga);
        assert_eq!(b.grad(), gb);
    }

    #[test]
    fn test_backward_lone_leaf() {
        let a = Value::new(42.0);
        a.backward();
        assert_eq!(a.grad(), 1.0);
    }

    #[test]
    fn test_backward_from_interior_node() {
        // d = (a*b) + b; backward from the interior product c = a*b computes
        // sensitivities w.r.t. c, not w.r.t. d.
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = &a * &b;
        let _d = &c + &b;
        c.backward();
        assert_eq!(c.grad(), 1.0);
        assert_eq!(a.grad(), 3.0);
        assert_eq!(b.grad(), 2.0);
    }

    #[test]
    fn test_backward_resets_stale_gradients() {
        // A gradient left by a previous pass must not leak into the next.
        let a = Value::new(2.0);
        let b = &a * &a;
        b.backward();
        assert_eq!(a.grad(), 4.0);

        let c = &a * 3.0;
        c.backward();
        assert_eq!(a.grad(), 3.0);
    }

    #[test]
    fn test_detach_drops_history() {
        let a = Value::new(2.0);
        let b = &a * &a;
        let d = b.detach();
        assert_eq!(d.data(), 4.0);
        assert!(d.grad_fn().is_none());
        d.backward();
        // Nothing upstream of a detached leaf.
        assert_eq!(a.grad(), 0.0);
        assert_eq!(d.grad(), 1.0);
    }
}
