//! 类型推断
//!
//! 两种策略满足同一个“在环境中为表达式推断类型”的契约：
//! - algorithm_w: 传递替换的 Algorithm W，无副作用
//! - algorithm_j: 基于 union-find 的 Algorithm J，修改共享的合一器
//! - engine: 按配置选择策略的推断器

pub mod algorithm_j;
pub mod algorithm_w;
pub mod engine;

#[cfg(test)]
mod tests;

use crate::ast::Expr;
use crate::type_system::{Environment, MonoType, TypeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use algorithm_j::{infer_j, AlgorithmJ};
pub use algorithm_w::{infer_w, AlgorithmW};
pub use engine::{Agreement, TypeInferencer};

/// 推断策略
pub trait Inference {
    /// 策略名称
    fn algorithm(&self) -> Algorithm;

    /// 在给定环境中推断表达式的类型
    fn infer(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> TypeResult<MonoType>;
}

/// 可选的推断算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// 传递替换
    #[default]
    W,
    /// union-find
    J,
}

impl fmt::Display for Algorithm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Algorithm::W => write!(f, "W"),
            Algorithm::J => write!(f, "J"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" | "W" => Ok(Algorithm::W),
            "j" | "J" => Ok(Algorithm::J),
            other => Err(format!("unknown algorithm '{}', expected W or J", other)),
        }
    }
}
