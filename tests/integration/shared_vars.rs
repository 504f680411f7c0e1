//! Concurrent inference with a shared variable source

use minihm::{AlgorithmJ, AlgorithmW, Environment, Expr, Inference, SharedVarSupply};
use std::collections::HashSet;
use std::thread;

#[test]
fn test_parallel_inference_never_collides() {
    let supply = SharedVarSupply::new();
    let expr = Expr::abs("x", Expr::abs("y", Expr::var("x")));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let supply = supply.clone();
            let expr = expr.clone();
            thread::spawn(move || {
                let env = Environment::new();
                (0..25)
                    .map(|_| {
                        if i % 2 == 0 {
                            AlgorithmW::with_vars(supply.clone()).infer(&env, &expr).unwrap()
                        } else {
                            AlgorithmJ::with_vars(supply.clone()).infer(&env, &expr).unwrap()
                        }
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for ty in handle.join().unwrap() {
            for var in ty.free_vars() {
                assert!(seen.insert(var), "type variable {} reused", var);
            }
        }
    }
    assert_eq!(seen.len(), 200);
}
