//! 类型错误定义
//!
//! 推断过程中的所有失败都在此处描述，两种算法以相同的方式向上传播

use super::mono::MonoType;
use super::var::TypeVar;
use thiserror::Error;

/// 类型错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// 变量在当前环境中没有绑定
    #[error("Unbound variable: {name}")]
    UnboundVariable { name: String },

    /// 两个类型的构造器不兼容
    #[error("Type mismatch: {left} and {right} do not unify")]
    TypeMismatch { left: MonoType, right: MonoType },

    /// occurs check 失败（会构造出无限类型）
    #[error("Infinite type: {var} occurs in {ty}")]
    OccursCheck { var: TypeVar, ty: MonoType },
}

impl TypeError {
    /// 构造类型不匹配错误
    pub fn mismatch(
        left: &MonoType,
        right: &MonoType,
    ) -> Self {
        TypeError::TypeMismatch {
            left: left.clone(),
            right: right.clone(),
        }
    }

    /// 获取错误类别名称
    pub fn kind(&self) -> &'static str {
        match self {
            TypeError::UnboundVariable { .. } => "unbound-variable",
            TypeError::TypeMismatch { .. } => "type-mismatch",
            TypeError::OccursCheck { .. } => "occurs-check",
        }
    }
}

/// 类型推断结果
pub type TypeResult<T> = Result<T, TypeError>;
