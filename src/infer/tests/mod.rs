//! 推断算法测试
//!
//! W 和 J 共用同一组表达式夹具与期望类型


use crate::ast::Expr;
use crate::type_system::{Environment, MonoType, TypeScheme, TypeVar};
use std::collections::BTreeSet;

pub(super) fn var(n: usize) -> MonoType {
    MonoType::Var(TypeVar::new(n))
}

pub(super) fn func(
    from: MonoType,
    to: MonoType,
) -> MonoType {
    MonoType::func(from, to)
}

/// 期望结果
pub(super) enum Expected {
    /// 规范化后的类型
    Type(MonoType),
    /// 错误类别
    Error(&'static str),
}

/// 测试夹具
pub(super) struct Fixture {
    pub name: &'static str,
    pub env: Environment,
    pub expr: Expr,
    pub expected: Expected,
}

fn fixture(
    name: &'static str,
    expr: Expr,
    expected: Expected,
) -> Fixture {
    Fixture {
        name,
        env: Environment::new(),
        expr,
        expected,
    }
}

fn identity() -> Expr {
    Expr::abs("x", Expr::var("x"))
}

/// `∀a. a -> a -> a`
fn choose_env() -> Environment {
    let a = TypeVar::new(0);
    Environment::new().with(
        "choose",
        TypeScheme::new(
            BTreeSet::from([a]),
            func(MonoType::Var(a), func(MonoType::Var(a), MonoType::Var(a))),
        ),
    )
}

/// 两种算法共用的夹具
pub(super) fn fixtures() -> Vec<Fixture> {
    use Expected::{Error, Type};

    vec![
        fixture("int literal", Expr::int(3), Type(MonoType::Int)),
        fixture("bool literal", Expr::bool(true), Type(MonoType::Bool)),
        Fixture {
            name: "bound variable",
            env: Environment::new().with_mono("foo", MonoType::Int),
            expr: Expr::var("foo"),
            expected: Type(MonoType::Int),
        },
        Fixture {
            name: "application returns function result",
            env: Environment::new().with_mono("foo", func(MonoType::Int, MonoType::Bool)),
            expr: Expr::app(Expr::var("foo"), Expr::int(3)),
            expected: Type(MonoType::Bool),
        },
        fixture("unbound variable", Expr::var("x"), Error("unbound-variable")),
        fixture("identity", identity(), Type(func(var(0), var(0)))),
        fixture(
            "let body type",
            Expr::let_in(
                "x",
                Expr::abs("y", Expr::var("y")),
                Expr::app(Expr::var("x"), Expr::int(1)),
            ),
            Type(MonoType::Int),
        ),
        fixture(
            "let-bound identity",
            Expr::let_in("id", identity(), Expr::var("id")),
            Type(func(var(0), var(0))),
        ),
        fixture(
            "let-polymorphism at two types",
            Expr::let_in(
                "id",
                identity(),
                Expr::let_in(
                    "n",
                    Expr::app(Expr::var("id"), Expr::int(1)),
                    Expr::app(Expr::var("id"), Expr::bool(true)),
                ),
            ),
            Type(MonoType::Bool),
        ),
        fixture(
            "identity applied to itself",
            Expr::let_in("id", identity(), Expr::app(Expr::var("id"), Expr::var("id"))),
            Type(func(var(0), var(0))),
        ),
        fixture(
            "applying a non-function",
            Expr::app(Expr::int(1), Expr::int(2)),
            Error("type-mismatch"),
        ),
        fixture(
            "self application",
            Expr::abs("x", Expr::app(Expr::var("x"), Expr::var("x"))),
            Error("occurs-check"),
        ),
        fixture(
            "lambda parameter is monomorphic",
            Expr::abs(
                "f",
                Expr::let_in(
                    "n",
                    Expr::app(Expr::var("f"), Expr::int(1)),
                    Expr::app(Expr::var("f"), Expr::bool(true)),
                ),
            ),
            Error("type-mismatch"),
        ),
        fixture(
            "twice",
            Expr::abs(
                "f",
                Expr::abs(
                    "x",
                    Expr::app(Expr::var("f"), Expr::app(Expr::var("f"), Expr::var("x"))),
                ),
            ),
            Type(func(func(var(0), var(0)), func(var(0), var(0)))),
        ),
        fixture(
            "K combinator",
            Expr::abs("x", Expr::abs("y", Expr::var("x"))),
            Type(func(var(0), func(var(1), var(0)))),
        ),
        fixture(
            "S combinator",
            Expr::abs(
                "x",
                Expr::abs(
                    "y",
                    Expr::abs(
                        "z",
                        Expr::app(
                            Expr::app(Expr::var("x"), Expr::var("z")),
                            Expr::app(Expr::var("y"), Expr::var("z")),
                        ),
                    ),
                ),
            ),
            Type(func(
                func(var(0), func(var(1), var(2))),
                func(func(var(0), var(1)), func(var(0), var(2))),
            )),
        ),
        fixture(
            "shadowed parameter",
            Expr::abs("x", Expr::abs("x", Expr::var("x"))),
            Type(func(var(0), func(var(1), var(1)))),
        ),
        Fixture {
            name: "polymorphic environment binding",
            env: choose_env(),
            expr: Expr::app(Expr::app(Expr::var("choose"), Expr::int(1)), Expr::int(2)),
            expected: Type(MonoType::Int),
        },
        Fixture {
            name: "polymorphic binding still checks arguments",
            env: choose_env(),
            expr: Expr::app(Expr::app(Expr::var("choose"), Expr::int(1)), Expr::bool(false)),
            expected: Error("type-mismatch"),
        },
        Fixture {
            name: "parameter shadows environment binding",
            env: choose_env(),
            expr: Expr::abs("choose", Expr::app(Expr::var("choose"), Expr::int(1))),
            expected: Type(func(func(MonoType::Int, var(0)), var(0))),
        },
        fixture(
            "let shadows let",
            Expr::let_in("x", Expr::int(1), Expr::let_in("x", Expr::bool(true), Expr::var("x"))),
            Type(MonoType::Bool),
        ),
    ]
}

/// 按夹具的期望检查结果
pub(super) fn assert_fixture(
    fixture: &Fixture,
    result: &crate::type_system::TypeResult<MonoType>,
) {
    match (&fixture.expected, result) {
        (Expected::Type(expected), Ok(ty)) => {
            assert_eq!(&ty.normalize(), expected, "fixture '{}': got {}", fixture.name, ty)
        }
        (Expected::Error(kind), Err(err)) => {
            assert_eq!(err.kind(), *kind, "fixture '{}': got {}", fixture.name, err)
        }
        (Expected::Type(expected), Err(err)) => {
            panic!("fixture '{}': expected {}, got error {}", fixture.name, expected, err)
        }
        (Expected::Error(kind), Ok(ty)) => {
            panic!("fixture '{}': expected {} error, got {}", fixture.name, kind, ty)
        }
    }
}
