//! 类型替换
//!
//! 从类型变量到单态类型的不可变映射，Algorithm W 用它在无副作用的前提下
//! 完成 union-find 在 Algorithm J 中的工作。

use super::mono::MonoType;
use super::var::TypeVar;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;

/// 类型替换映射
///
/// 存储的目标类型都已经“求解”，应用时查到即止
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: IndexMap<TypeVar, MonoType>,
}

impl Substitution {
    /// 创建空替换
    pub fn new() -> Self {
        Self::default()
    }

    /// 只含一个绑定的替换
    pub fn singleton(
        var: TypeVar,
        ty: MonoType,
    ) -> Self {
        let mut bindings = IndexMap::new();
        bindings.insert(var, ty);
        Substitution { bindings }
    }

    /// 获取绑定
    pub fn lookup(
        &self,
        var: TypeVar,
    ) -> Option<&MonoType> {
        self.bindings.get(&var)
    }

    /// 去掉指定变量后的副本
    ///
    /// 用于阻止替换深入类型模式的约束变量
    pub fn restrict(
        &self,
        excluded: &BTreeSet<TypeVar>,
    ) -> Substitution {
        Substitution {
            bindings: self
                .bindings
                .iter()
                .filter(|(var, _)| !excluded.contains(var))
                .map(|(var, ty)| (*var, ty.clone()))
                .collect(),
        }
    }

    /// 组合替换：先应用 `second`，再应用 `first`
    ///
    /// 满足 `t.apply(&compose(s1, s2)) == t.apply(&s2).apply(&s1)`
    pub fn compose(
        first: &Substitution,
        second: &Substitution,
    ) -> Substitution {
        let mut bindings: IndexMap<TypeVar, MonoType> = second
            .bindings
            .iter()
            .map(|(var, ty)| (*var, ty.apply(first)))
            .collect();
        for (var, ty) in &first.bindings {
            bindings.entry(*var).or_insert_with(|| ty.clone());
        }
        Substitution { bindings }
    }

    /// 遍历所有绑定
    pub fn iter(&self) -> impl Iterator<Item = (&TypeVar, &MonoType)> {
        self.bindings.iter()
    }

    /// 获取绑定数量
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(TypeVar, MonoType)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (TypeVar, MonoType)>>(iter: I) -> Self {
        Substitution {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, ty)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ↦ {}", var, ty)?;
        }
        write!(f, "}}")
    }
}
