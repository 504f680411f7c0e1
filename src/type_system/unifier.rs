//! 类型合一器（union-find 实现）
//!
//! 为 Algorithm J 服务的并查集。与通用并查集不同，合并时不追求最短的
//! 父链，而是保证代表元偏向“项”：变量与 Int / Bool / 函数合并时，
//! 后者总是成为代表元。
//!
//! 不做路径压缩，`find` 每次都沿父链走到根。生命周期限定在一次顶层推断。

use super::error::{TypeError, TypeResult};
use super::mono::MonoType;
use super::var::TypeVar;
use std::collections::HashMap;

/// 并查集节点
#[derive(Debug, Clone)]
struct Node {
    value: MonoType,
    parent: Option<usize>,
}

/// 类型合一器
#[derive(Debug, Clone, Default)]
pub struct TypeUnifier {
    /// 节点存储
    nodes: Vec<Node>,
    /// 按结构相等查找节点
    index: HashMap<MonoType, usize>,
}

impl TypeUnifier {
    /// 创建空合一器
    pub fn new() -> Self {
        Self::default()
    }

    /// 已登记的类型数量
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 查找代表元
    ///
    /// 首次见到的类型会被登记为自身的根并原样返回
    pub fn find(
        &mut self,
        ty: &MonoType,
    ) -> MonoType {
        let root = self.find_root(ty);
        self.nodes[root].value.clone()
    }

    /// 合一两个类型
    pub fn unify(
        &mut self,
        a: &MonoType,
        b: &MonoType,
    ) -> TypeResult<()> {
        let a_root = self.find_root(a);
        let b_root = self.find_root(b);
        if a_root == b_root {
            return Ok(());
        }

        let a_rep = self.nodes[a_root].value.clone();
        let b_rep = self.nodes[b_root].value.clone();
        tracing::trace!("unify {} ~ {}", a_rep, b_rep);

        match (&a_rep, &b_rep) {
            // 函数类型按分量合并，不会变成同一个节点
            (MonoType::Fn(from1, to1), MonoType::Fn(from2, to2)) => {
                self.unify(from1, from2)?;
                self.unify(to1, to2)
            }
            (MonoType::Var(var), _) => self.link(*var, a_root, b_root),
            (_, MonoType::Var(var)) => self.link(*var, b_root, a_root),
            _ => Err(TypeError::mismatch(&a_rep, &b_rep)),
        }
    }

    /// 深度解析类型：变量和函数分量都替换为各自的代表元
    ///
    /// 未登记的类型视为自身的代表元，不会被登记
    pub fn resolve(
        &self,
        ty: &MonoType,
    ) -> MonoType {
        let rep = match self.index.get(ty) {
            Some(&id) => &self.nodes[self.root_of(id)].value,
            None => ty,
        };
        match rep {
            MonoType::Fn(from, to) => MonoType::func(self.resolve(from), self.resolve(to)),
            _ => rep.clone(),
        }
    }

    /// 把变量节点挂到另一个代表元之下
    fn link(
        &mut self,
        var: TypeVar,
        var_root: usize,
        term_root: usize,
    ) -> TypeResult<()> {
        let term = &self.nodes[term_root].value;
        if !term.is_var() {
            let resolved = self.resolve(term);
            if resolved.occurs(var) {
                return Err(TypeError::OccursCheck { var, ty: resolved });
            }
        }
        self.nodes[var_root].parent = Some(term_root);
        Ok(())
    }

    /// 登记（如有必要）并返回根节点
    fn find_root(
        &mut self,
        ty: &MonoType,
    ) -> usize {
        let id = match self.index.get(ty) {
            Some(&id) => id,
            None => {
                let id = self.nodes.len();
                self.nodes.push(Node {
                    value: ty.clone(),
                    parent: None,
                });
                self.index.insert(ty.clone(), id);
                id
            }
        };
        self.root_of(id)
    }

    fn root_of(
        &self,
        mut id: usize,
    ) -> usize {
        while let Some(parent) = self.nodes[id].parent {
            id = parent;
        }
        id
    }
}
