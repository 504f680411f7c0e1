//! Abstract Syntax Tree types
//!
//! The closed expression grammar the inference algorithms traverse. Trees are
//! built directly by the caller; nothing in this crate parses source text.

use std::fmt;

/// Expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal
    IntLit(i64),
    /// Boolean literal
    BoolLit(bool),
    /// Variable reference
    Var(String),
    /// Function application `func arg`
    App { func: Box<Expr>, arg: Box<Expr> },
    /// Lambda abstraction `λparam.body`
    Abs { param: String, body: Box<Expr> },
    /// `let name = init in body`
    Let {
        name: String,
        init: Box<Expr>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn int(value: i64) -> Self {
        Expr::IntLit(value)
    }

    pub fn bool(value: bool) -> Self {
        Expr::BoolLit(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn app(
        func: Expr,
        arg: Expr,
    ) -> Self {
        Expr::App {
            func: Box::new(func),
            arg: Box::new(arg),
        }
    }

    pub fn abs(
        param: impl Into<String>,
        body: Expr,
    ) -> Self {
        Expr::Abs {
            param: param.into(),
            body: Box::new(body),
        }
    }

    pub fn let_in(
        name: impl Into<String>,
        init: Expr,
        body: Expr,
    ) -> Self {
        Expr::Let {
            name: name.into(),
            init: Box::new(init),
            body: Box::new(body),
        }
    }

    /// Short name of the variant, used in trace output
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::IntLit(_) => "int",
            Expr::BoolLit(_) => "bool",
            Expr::Var(_) => "var",
            Expr::App { .. } => "app",
            Expr::Abs { .. } => "abs",
            Expr::Let { .. } => "let",
        }
    }

    fn is_atomic(&self) -> bool {
        matches!(self, Expr::IntLit(_) | Expr::BoolLit(_) | Expr::Var(_))
    }
}

impl fmt::Display for Expr {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expr::IntLit(value) => write!(f, "{}", value),
            Expr::BoolLit(value) => write!(f, "{}", value),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::App { func, arg } => {
                match **func {
                    Expr::Abs { .. } | Expr::Let { .. } => write!(f, "({})", func)?,
                    _ => write!(f, "{}", func)?,
                }
                if arg.is_atomic() {
                    write!(f, " {}", arg)
                } else {
                    write!(f, " ({})", arg)
                }
            }
            Expr::Abs { param, body } => write!(f, "λ{}.{}", param, body),
            Expr::Let { name, init, body } => write!(f, "let {} = {} in {}", name, init, body),
        }
    }
}
