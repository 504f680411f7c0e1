//! Algorithm J（union-find）
//!
//! 每个节点只返回单态类型，所有合一信息都作为副作用记录在调用方提供的
//! `TypeUnifier` 中。合一器只能服务于一次顶层推断：复用会把上一次推断的
//! 代表元泄漏到下一次。

use super::{Algorithm, Inference};
use crate::ast::Expr;
use crate::type_system::{
    Environment, FreshVars, MonoType, TypeError, TypeResult, TypeScheme, TypeUnifier,
    VarSupply,
};
use std::collections::BTreeSet;
use tracing::trace;

/// 用 Algorithm J 推断类型
///
/// 返回的是代表元，其中的变量可能已在合一器中求解；
/// 需要完整类型时用 [`TypeUnifier::resolve`]。新变量总是排在环境中已有变量之后
pub fn infer_j<V: FreshVars>(
    expr: &Expr,
    env: &Environment,
    unifier: &mut TypeUnifier,
    vars: &mut V,
) -> TypeResult<MonoType> {
    env.reserve_vars(vars);
    infer_expr(expr, env, unifier, vars)
}

fn infer_expr<V: FreshVars>(
    expr: &Expr,
    env: &Environment,
    unifier: &mut TypeUnifier,
    vars: &mut V,
) -> TypeResult<MonoType> {
    let ty = match expr {
        Expr::IntLit(_) => MonoType::Int,
        Expr::BoolLit(_) => MonoType::Bool,
        Expr::Var(name) => env
            .lookup(name)
            .ok_or_else(|| TypeError::UnboundVariable { name: name.clone() })?
            .instantiate(vars),
        Expr::App { func, arg } => {
            let func_ty = infer_expr(func, env, unifier, vars)?;
            let arg_ty = infer_expr(arg, env, unifier, vars)?;
            let result = MonoType::Var(vars.fresh());
            unifier.unify(&func_ty, &MonoType::func(arg_ty, result.clone()))?;
            unifier.find(&result)
        }
        Expr::Abs { param, body } => {
            let param_ty = MonoType::Var(vars.fresh());
            let inner = env.with(param.clone(), TypeScheme::mono(param_ty.clone()));
            let body_ty = infer_expr(body, &inner, unifier, vars)?;
            MonoType::func(unifier.find(&param_ty), unifier.find(&body_ty))
        }
        Expr::Let { name, init, body } => {
            let init_ty = infer_expr(init, env, unifier, vars)?;
            let scheme = generalize(env, unifier, &init_ty);
            trace!("J: let {} : {}", name, scheme);
            let inner = env.with(name.clone(), scheme);
            infer_expr(body, &inner, unifier, vars)?
        }
    };
    trace!("J: {} : {}", expr.kind(), ty);
    Ok(ty)
}

/// 在合一器的当前状态下泛化
///
/// 环境中的类型模式不会随合一更新，所以比较自由变量前先把两边都解析到
/// 代表元；类型体也取解析后的形式，实例化时才能替换到真正未求解的变量
pub(crate) fn generalize(
    env: &Environment,
    unifier: &TypeUnifier,
    ty: &MonoType,
) -> TypeScheme {
    let env_vars: BTreeSet<_> = env
        .free_vars()
        .into_iter()
        .flat_map(|var| unifier.resolve(&MonoType::Var(var)).free_vars())
        .collect();
    let body = unifier.resolve(ty);
    let binders = body
        .free_vars()
        .into_iter()
        .filter(|var| !env_vars.contains(var))
        .collect();
    TypeScheme::new(binders, body)
}

impl Environment {
    /// 以当前环境为起点运行 Algorithm J
    pub fn infer_j<V: FreshVars>(
        &self,
        expr: &Expr,
        unifier: &mut TypeUnifier,
        vars: &mut V,
    ) -> TypeResult<MonoType> {
        infer_j(expr, self, unifier, vars)
    }
}

/// Algorithm J 策略
///
/// 每次顶层调用都使用新的合一器，并返回完全解析后的类型
#[derive(Debug, Clone, Default)]
pub struct AlgorithmJ<V = VarSupply> {
    vars: V,
}

impl<V: FreshVars> AlgorithmJ<V> {
    /// 使用给定的变量来源
    pub fn with_vars(vars: V) -> Self {
        AlgorithmJ { vars }
    }

    /// 推断并按环境泛化为类型模式
    pub fn infer_scheme(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> TypeResult<TypeScheme> {
        let mut unifier = TypeUnifier::new();
        let ty = infer_j(expr, env, &mut unifier, &mut self.vars)?;
        Ok(generalize(env, &unifier, &ty))
    }
}

impl<V: FreshVars> Inference for AlgorithmJ<V> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::J
    }

    fn infer(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> TypeResult<MonoType> {
        let mut unifier = TypeUnifier::new();
        let ty = infer_j(expr, env, &mut unifier, &mut self.vars)?;
        Ok(unifier.resolve(&ty))
    }
}
