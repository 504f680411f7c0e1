//! 类型环境
//!
//! 程序变量名到类型模式的不可变映射。所有操作都返回新环境，
//! 两种推断算法都从这里进入。

use super::mono::MonoType;
use super::scheme::TypeScheme;
use super::substitute::Substitution;
use super::var::{FreshVars, TypeVar};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;

/// 类型环境
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: IndexMap<String, TypeScheme>,
}

impl Environment {
    /// 创建空环境
    pub fn new() -> Self {
        Self::default()
    }

    /// 查找变量的类型模式
    pub fn lookup(
        &self,
        name: &str,
    ) -> Option<&TypeScheme> {
        self.bindings.get(name)
    }

    /// 去掉某个绑定
    pub fn without(
        &self,
        name: &str,
    ) -> Environment {
        let mut bindings = self.bindings.clone();
        bindings.shift_remove(name);
        Environment { bindings }
    }

    /// 添加或替换绑定
    pub fn with(
        &self,
        name: impl Into<String>,
        scheme: TypeScheme,
    ) -> Environment {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.into(), scheme);
        Environment { bindings }
    }

    /// 以单态类型添加或替换绑定
    pub fn with_mono(
        &self,
        name: impl Into<String>,
        ty: MonoType,
    ) -> Environment {
        self.with(name, TypeScheme::mono(ty))
    }

    /// 合并两个环境，同名时右侧优先
    pub fn union(
        &self,
        other: &Environment,
    ) -> Environment {
        let mut bindings = self.bindings.clone();
        for (name, scheme) in &other.bindings {
            bindings.insert(name.clone(), scheme.clone());
        }
        Environment { bindings }
    }

    /// 逐个对类型模式应用替换
    pub fn apply(
        &self,
        subst: &Substitution,
    ) -> Environment {
        Environment {
            bindings: self
                .bindings
                .iter()
                .map(|(name, scheme)| (name.clone(), scheme.apply(subst)))
                .collect(),
        }
    }

    /// 所有类型模式的自由变量之并
    pub fn free_vars(&self) -> BTreeSet<TypeVar> {
        self.bindings
            .values()
            .flat_map(|scheme| scheme.free_vars().iter().copied())
            .collect()
    }

    /// 环境中出现过的最大类型变量（含被量化的）
    pub fn max_type_var(&self) -> Option<TypeVar> {
        self.bindings
            .values()
            .filter_map(|scheme| scheme.body().free_vars().last().copied())
            .max()
    }

    /// 让变量源跳过环境里已经出现的变量
    pub fn reserve_vars(
        &self,
        vars: &mut impl FreshVars,
    ) {
        if let Some(used) = self.max_type_var() {
            vars.reserve(used);
        }
    }

    /// 泛化：量化类型中不在环境里自由出现的变量
    pub fn generalize(
        &self,
        ty: &MonoType,
    ) -> TypeScheme {
        let env_vars = self.free_vars();
        let binders = ty
            .free_vars()
            .into_iter()
            .filter(|var| !env_vars.contains(var))
            .collect();
        TypeScheme::new(binders, ty.clone())
    }

    /// 遍历所有绑定
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeScheme)> {
        self.bindings.iter().map(|(name, scheme)| (name.as_str(), scheme))
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

impl<S: Into<String>> FromIterator<(S, TypeScheme)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, TypeScheme)>>(iter: I) -> Self {
        Environment {
            bindings: iter
                .into_iter()
                .map(|(name, scheme)| (name.into(), scheme))
                .collect(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, scheme)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, scheme)?;
        }
        write!(f, "}}")
    }
}
