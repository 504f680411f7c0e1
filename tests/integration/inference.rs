//! End-to-end inference through the public API

use minihm::{
    infer_j, infer_w, Algorithm, EngineConfig, Environment, Expr, MonoType, TypeError,
    TypeInferencer, TypeUnifier, TypeVar, VarSupply,
};

fn compose_expr() -> Expr {
    // λf.λg.λx. f (g x)
    Expr::abs(
        "f",
        Expr::abs(
            "g",
            Expr::abs(
                "x",
                Expr::app(Expr::var("f"), Expr::app(Expr::var("g"), Expr::var("x"))),
            ),
        ),
    )
}

#[test]
fn test_literals() {
    let env = Environment::new();
    let mut vars = VarSupply::new();
    for n in [-1, 0, 7, i64::MAX] {
        assert_eq!(infer_w(&Expr::int(n), &env, &mut vars).unwrap().1, MonoType::Int);
    }
    for b in [true, false] {
        let mut unifier = TypeUnifier::new();
        assert_eq!(infer_j(&Expr::bool(b), &env, &mut unifier, &mut vars).unwrap(), MonoType::Bool);
    }
}

#[test]
fn test_let_polymorphism_both_algorithms() {
    let expr = Expr::let_in(
        "id",
        Expr::abs("x", Expr::var("x")),
        Expr::app(Expr::var("id"), Expr::int(1)),
    );
    let env = Environment::new();

    let mut vars = VarSupply::new();
    let (_, w) = infer_w(&expr, &env, &mut vars).unwrap();
    assert_eq!(w, MonoType::Int);

    let mut unifier = TypeUnifier::new();
    let j = infer_j(&expr, &env, &mut unifier, &mut vars).unwrap();
    assert_eq!(j, MonoType::Int);
}

#[test]
fn test_composition_principal_type() {
    let a = MonoType::Var(TypeVar::new(0));
    let b = MonoType::Var(TypeVar::new(1));
    let c = MonoType::Var(TypeVar::new(2));
    // (a -> b) -> (c -> a) -> c -> b
    let expected = MonoType::func(
        MonoType::func(a.clone(), b.clone()),
        MonoType::func(
            MonoType::func(c.clone(), a),
            MonoType::func(c, b),
        ),
    );

    for algorithm in [Algorithm::W, Algorithm::J] {
        let mut engine = TypeInferencer::new(EngineConfig {
            algorithm,
            ..EngineConfig::default()
        });
        let ty = engine.infer(&Environment::new(), &compose_expr()).unwrap();
        assert_eq!(ty.normalize(), expected, "algorithm {}", algorithm);
        assert_eq!(
            ty.normalize().to_string(),
            "(a0 -> a1) -> (a2 -> a0) -> a2 -> a1"
        );
    }
}

#[test]
fn test_errors_propagate_from_deep_subtrees() {
    // let f = λx. x in (λy. f (1 true)) 2
    let expr = Expr::let_in(
        "f",
        Expr::abs("x", Expr::var("x")),
        Expr::app(
            Expr::abs("y", Expr::app(Expr::var("f"), Expr::app(Expr::int(1), Expr::bool(true)))),
            Expr::int(2),
        ),
    );
    let mut engine = TypeInferencer::default();
    let agreement = engine.check_agreement(&Environment::new(), &expr);
    assert!(agreement.agrees());
    assert!(matches!(agreement.w, Err(TypeError::TypeMismatch { .. })));
}

#[test]
fn test_error_messages() {
    let mut engine = TypeInferencer::default();
    let err = engine
        .infer(&Environment::new(), &Expr::app(Expr::int(1), Expr::int(2)))
        .unwrap_err();
    assert!(err.to_string().starts_with("Type mismatch"), "{}", err);

    let err = engine
        .infer(&Environment::new(), &Expr::abs("x", Expr::app(Expr::var("x"), Expr::var("x"))))
        .unwrap_err();
    assert!(err.to_string().starts_with("Infinite type"), "{}", err);
}

#[test]
fn test_scheme_display() {
    let mut engine = TypeInferencer::default();
    let scheme = engine
        .infer_scheme(&Environment::new(), &Expr::abs("x", Expr::abs("y", Expr::var("x"))))
        .unwrap();
    assert_eq!(scheme.binders().len(), 2);
    assert!(scheme.to_string().starts_with('∀'));
}
