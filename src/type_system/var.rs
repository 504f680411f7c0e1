//! 类型变量定义
//!
//! 实现 Hindley-Milner 类型系统中的变量：
//! - TypeVar: 类型变量（用于类型推断）
//! - FreshVars: 新鲜类型变量的来源
//! - VarSupply: 调用方独占的计数器
//! - SharedVarSupply: 线程安全的共享计数器（含进程级全局计数器）

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// 类型变量（用于类型推断）
///
/// 每个类型变量有一个唯一的索引，用于在类型环境中追踪
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeVar(usize);

impl TypeVar {
    /// 创建新类型变量
    pub fn new(index: usize) -> Self {
        TypeVar(index)
    }

    /// 获取变量的索引
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TypeVar {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}

/// 新鲜类型变量的来源
///
/// 推断算法的每一处都通过它申请变量，同一来源分配出的变量互不相同
pub trait FreshVars {
    /// 分配一个从未分配过的类型变量
    fn fresh(&mut self) -> TypeVar;

    /// 保证之后分配的变量索引都大于 `used`
    fn reserve(
        &mut self,
        used: TypeVar,
    );
}

/// 单个调用方独占的变量计数器
#[derive(Debug, Clone, Default)]
pub struct VarSupply {
    next: usize,
}

impl VarSupply {
    /// 从 `a0` 开始分配
    pub fn new() -> Self {
        Self::default()
    }

    /// 从指定索引开始分配
    pub fn starting_at(first: usize) -> Self {
        VarSupply { next: first }
    }

    /// 下一个将要分配的索引
    pub fn peek(&self) -> usize {
        self.next
    }
}

impl FreshVars for VarSupply {
    fn fresh(&mut self) -> TypeVar {
        let var = TypeVar::new(self.next);
        self.next += 1;
        var
    }

    fn reserve(
        &mut self,
        used: TypeVar,
    ) {
        self.next = self.next.max(used.index() + 1);
    }
}

/// 可在线程间共享的变量计数器
///
/// 克隆出的句柄共享同一个计数器，并发分配不会产生重复的索引
#[derive(Debug, Clone, Default)]
pub struct SharedVarSupply {
    next: Arc<AtomicUsize>,
}

impl SharedVarSupply {
    /// 创建独立的共享计数器
    pub fn new() -> Self {
        Self::default()
    }

    /// 进程级全局计数器：进程启动时初始化，从不重置
    pub fn global() -> Self {
        static GLOBAL: OnceLock<SharedVarSupply> = OnceLock::new();
        GLOBAL.get_or_init(SharedVarSupply::new).clone()
    }
}

impl FreshVars for SharedVarSupply {
    fn fresh(&mut self) -> TypeVar {
        TypeVar::new(self.next.fetch_add(1, Ordering::Relaxed))
    }

    fn reserve(
        &mut self,
        used: TypeVar,
    ) {
        self.next.fetch_max(used.index() + 1, Ordering::Relaxed);
    }
}

impl<T: FreshVars + ?Sized> FreshVars for &mut T {
    fn fresh(&mut self) -> TypeVar {
        (**self).fresh()
    }

    fn reserve(
        &mut self,
        used: TypeVar,
    ) {
        (**self).reserve(used)
    }
}
