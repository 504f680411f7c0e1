//! 单态类型定义
//!
//! 实现具体类型及其上的结构化操作：
//! - MonoType: 单态类型（Int、Bool、类型变量、函数）
//! - 自由变量、替换应用、occurs check
//! - 最一般合一子（Algorithm W 使用）

use super::error::{TypeError, TypeResult};
use super::substitute::Substitution;
use super::var::TypeVar;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// 单态类型
///
/// 不可变的值类型，相等性按结构比较（union-find 也按结构查找）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MonoType {
    /// 整数类型
    Int,
    /// 布尔类型
    Bool,
    /// 类型变量（推断中）
    Var(TypeVar),
    /// 函数类型 `from -> to`
    Fn(Box<MonoType>, Box<MonoType>),
}

impl MonoType {
    /// 创建函数类型
    pub fn func(
        from: MonoType,
        to: MonoType,
    ) -> Self {
        MonoType::Fn(Box::new(from), Box::new(to))
    }

    /// 如果是 Var 变体，返回内部 TypeVar
    pub fn type_var(&self) -> Option<TypeVar> {
        match self {
            MonoType::Var(v) => Some(*v),
            _ => None,
        }
    }

    /// 是否是裸类型变量
    pub fn is_var(&self) -> bool {
        matches!(self, MonoType::Var(_))
    }

    /// 收集自由类型变量
    pub fn free_vars(&self) -> BTreeSet<TypeVar> {
        let mut vars = BTreeSet::new();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(
        &self,
        vars: &mut BTreeSet<TypeVar>,
    ) {
        match self {
            MonoType::Int | MonoType::Bool => {}
            MonoType::Var(v) => {
                vars.insert(*v);
            }
            MonoType::Fn(from, to) => {
                from.collect_free_vars(vars);
                to.collect_free_vars(vars);
            }
        }
    }

    /// 检查变量是否出现在类型中
    pub fn occurs(
        &self,
        var: TypeVar,
    ) -> bool {
        match self {
            MonoType::Int | MonoType::Bool => false,
            MonoType::Var(v) => *v == var,
            MonoType::Fn(from, to) => from.occurs(var) || to.occurs(var),
        }
    }

    /// 应用替换
    ///
    /// 替换中存放的是已求解的类型，查到即返回，不再递归替换目标
    pub fn apply(
        &self,
        subst: &Substitution,
    ) -> MonoType {
        match self {
            MonoType::Int | MonoType::Bool => self.clone(),
            MonoType::Var(v) => subst.lookup(*v).cloned().unwrap_or_else(|| self.clone()),
            MonoType::Fn(from, to) => MonoType::func(from.apply(subst), to.apply(subst)),
        }
    }

    /// 计算最一般合一子
    ///
    /// 返回的替换作用于两侧后二者在语法上相同
    pub fn most_general_unifier(
        &self,
        other: &MonoType,
    ) -> TypeResult<Substitution> {
        match (self, other) {
            (MonoType::Int, MonoType::Int) | (MonoType::Bool, MonoType::Bool) => {
                Ok(Substitution::new())
            }
            (MonoType::Var(var), ty) | (ty, MonoType::Var(var)) => bind_var(*var, ty),
            (MonoType::Fn(from1, to1), MonoType::Fn(from2, to2)) => {
                let s1 = from1.most_general_unifier(from2)?;
                // 第二次合一必须看到第一次的结果
                let s2 = to1.apply(&s1).most_general_unifier(&to2.apply(&s1))?;
                Ok(Substitution::compose(&s2, &s1))
            }
            _ => Err(TypeError::mismatch(self, other)),
        }
    }

    /// 规范化变量命名
    ///
    /// 按从左到右首次出现的顺序把变量重命名为 `a0, a1, ...`，
    /// 用于在“变量改名意义下”比较两个类型
    pub fn normalize(&self) -> MonoType {
        let mut renaming = HashMap::new();
        self.rename(&mut renaming)
    }

    fn rename(
        &self,
        renaming: &mut HashMap<TypeVar, TypeVar>,
    ) -> MonoType {
        match self {
            MonoType::Int | MonoType::Bool => self.clone(),
            MonoType::Var(v) => {
                let next = TypeVar::new(renaming.len());
                MonoType::Var(*renaming.entry(*v).or_insert(next))
            }
            MonoType::Fn(from, to) => {
                let from = from.rename(renaming);
                let to = to.rename(renaming);
                MonoType::func(from, to)
            }
        }
    }
}

/// 把变量绑定到类型，附带 occurs check
fn bind_var(
    var: TypeVar,
    ty: &MonoType,
) -> TypeResult<Substitution> {
    if ty.type_var() == Some(var) {
        return Ok(Substitution::new());
    }
    if ty.occurs(var) {
        return Err(TypeError::OccursCheck {
            var,
            ty: ty.clone(),
        });
    }
    Ok(Substitution::singleton(var, ty.clone()))
}

impl From<TypeVar> for MonoType {
    fn from(var: TypeVar) -> Self {
        MonoType::Var(var)
    }
}

impl fmt::Display for MonoType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            MonoType::Int => write!(f, "Int"),
            MonoType::Bool => write!(f, "Bool"),
            MonoType::Var(v) => write!(f, "{}", v),
            MonoType::Fn(from, to) if matches!(**from, MonoType::Fn(..)) => {
                write!(f, "({}) -> {}", from, to)
            }
            MonoType::Fn(from, to) => write!(f, "{} -> {}", from, to),
        }
    }
}
