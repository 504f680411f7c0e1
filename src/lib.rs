//! minihm
//!
//! Hindley-Milner type inference with let-polymorphism for a minimal lambda
//! calculus (integer and boolean literals, variables, application,
//! abstraction, let). Two independent algorithms share one contract:
//!
//! - Algorithm W passes substitutions and has no side effects.
//! - Algorithm J records unification in a union-find [`TypeUnifier`].
//!
//! # Example
//!
//! ```rust
//! use minihm::{infer_w, Environment, Expr, MonoType, VarSupply};
//!
//! let expr = Expr::let_in(
//!     "id",
//!     Expr::abs("x", Expr::var("x")),
//!     Expr::app(Expr::var("id"), Expr::int(1)),
//! );
//! let (_, ty) = infer_w(&expr, &Environment::new(), &mut VarSupply::new()).unwrap();
//! assert_eq!(ty, MonoType::Int);
//! ```

#![warn(rust_2018_idioms)]

pub mod ast;
pub mod infer;
pub mod type_system;

// Utility modules
pub mod util;

// Re-exports
pub use ast::Expr;
pub use infer::{
    infer_j, infer_w, Agreement, Algorithm, AlgorithmJ, AlgorithmW, Inference, TypeInferencer,
};
pub use type_system::{
    Environment, FreshVars, MonoType, SharedVarSupply, Substitution, TypeError, TypeResult,
    TypeScheme, TypeUnifier, TypeVar, VarSupply,
};
pub use util::config::EngineConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
