//! 类型模式（多态类型）
//!
//! 对一组类型变量全称量化的单态类型，`let` 多态的载体。

use super::mono::MonoType;
use super::substitute::Substitution;
use super::var::{FreshVars, TypeVar};
use std::collections::BTreeSet;
use std::fmt;

/// 类型模式 `∀binders. body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScheme {
    /// 被量化的类型变量
    binders: BTreeSet<TypeVar>,
    /// 类型体
    body: MonoType,
    /// 自由变量（模式不可变，构造时计算一次）
    free: BTreeSet<TypeVar>,
}

impl TypeScheme {
    /// 创建新的类型模式
    pub fn new(
        binders: BTreeSet<TypeVar>,
        body: MonoType,
    ) -> Self {
        let free = body
            .free_vars()
            .difference(&binders)
            .copied()
            .collect();
        TypeScheme {
            binders,
            body,
            free,
        }
    }

    /// 不量化任何变量的单态模式
    pub fn mono(body: MonoType) -> Self {
        TypeScheme::new(BTreeSet::new(), body)
    }

    /// 被量化的变量
    pub fn binders(&self) -> &BTreeSet<TypeVar> {
        &self.binders
    }

    /// 类型体
    pub fn body(&self) -> &MonoType {
        &self.body
    }

    /// 检查是否为单态
    pub fn is_mono(&self) -> bool {
        self.binders.is_empty()
    }

    /// 自由变量：类型体的自由变量减去被量化的变量
    pub fn free_vars(&self) -> &BTreeSet<TypeVar> {
        &self.free
    }

    /// 应用替换，约束变量不受外层替换影响
    pub fn apply(
        &self,
        subst: &Substitution,
    ) -> TypeScheme {
        let filtered = subst.restrict(&self.binders);
        TypeScheme::new(self.binders.clone(), self.body.apply(&filtered))
    }

    /// 实例化：每个约束变量换成一个新鲜变量
    pub fn instantiate(
        &self,
        vars: &mut impl FreshVars,
    ) -> MonoType {
        if self.binders.is_empty() {
            return self.body.clone();
        }
        let replacement: Substitution = self
            .binders
            .iter()
            .map(|old| (*old, MonoType::Var(vars.fresh())))
            .collect();
        self.body.apply(&replacement)
    }
}

impl From<MonoType> for TypeScheme {
    fn from(body: MonoType) -> Self {
        TypeScheme::mono(body)
    }
}

impl fmt::Display for TypeScheme {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.binders.is_empty() {
            return write!(f, "{}", self.body);
        }
        write!(f, "∀")?;
        for (i, var) in self.binders.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, ". {}", self.body)
    }
}
