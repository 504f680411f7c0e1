//! Algorithm W（传递替换）
//!
//! 对表达式做结构递归，每个节点返回推导该子树时发现的替换，以及应用该替换后
//! 子树的类型。替换的组合顺序总是“先生效的在右”：`mgu ∘ s2 ∘ s1`
//! 写作 `compose(mgu, compose(s2, s1))`。

use super::{Algorithm, Inference};
use crate::ast::Expr;
use crate::type_system::{
    Environment, FreshVars, MonoType, Substitution, TypeError, TypeResult, TypeScheme,
    VarSupply,
};
use tracing::trace;

/// 用 Algorithm W 推断类型，返回累积的替换和类型
///
/// 新变量总是排在环境中已有变量之后。
pub fn infer_w<V: FreshVars>(
    expr: &Expr,
    env: &Environment,
    vars: &mut V,
) -> TypeResult<(Substitution, MonoType)> {
    env.reserve_vars(vars);
    infer_expr(expr, env, vars)
}

fn infer_expr<V: FreshVars>(
    expr: &Expr,
    env: &Environment,
    vars: &mut V,
) -> TypeResult<(Substitution, MonoType)> {
    let (subst, ty) = match expr {
        Expr::IntLit(_) => (Substitution::new(), MonoType::Int),
        Expr::BoolLit(_) => (Substitution::new(), MonoType::Bool),
        Expr::Var(name) => {
            let scheme = env
                .lookup(name)
                .ok_or_else(|| TypeError::UnboundVariable { name: name.clone() })?;
            (Substitution::new(), scheme.instantiate(vars))
        }
        Expr::App { func, arg } => {
            let result = MonoType::Var(vars.fresh());
            let (s1, func_ty) = infer_expr(func, env, vars)?;
            let (s2, arg_ty) = infer_expr(arg, &env.apply(&s1), vars)?;
            let mgu = func_ty
                .apply(&s2)
                .most_general_unifier(&MonoType::func(arg_ty, result.clone()))?;
            let subst = Substitution::compose(&mgu, &Substitution::compose(&s2, &s1));
            (subst, result.apply(&mgu))
        }
        Expr::Abs { param, body } => {
            let param_ty = MonoType::Var(vars.fresh());
            // lambda 参数永远是单态的
            let inner = env
                .without(param)
                .with(param.clone(), TypeScheme::mono(param_ty.clone()));
            let (subst, body_ty) = infer_expr(body, &inner, vars)?;
            let ty = MonoType::func(param_ty.apply(&subst), body_ty);
            (subst, ty)
        }
        Expr::Let { name, init, body } => {
            let (s1, init_ty) = infer_expr(init, env, vars)?;
            let scheme = env.apply(&s1).generalize(&init_ty);
            trace!("W: let {} : {}", name, scheme);
            let inner = env.with(name.clone(), scheme).apply(&s1);
            let (s2, body_ty) = infer_expr(body, &inner, vars)?;
            (Substitution::compose(&s2, &s1), body_ty)
        }
    };
    trace!("W: {} : {} with {}", expr.kind(), ty, subst);
    Ok((subst, ty))
}

impl Environment {
    /// 以当前环境为起点运行 Algorithm W
    pub fn infer_w<V: FreshVars>(
        &self,
        expr: &Expr,
        vars: &mut V,
    ) -> TypeResult<(Substitution, MonoType)> {
        infer_w(expr, self, vars)
    }
}

/// Algorithm W 策略
#[derive(Debug, Clone, Default)]
pub struct AlgorithmW<V = VarSupply> {
    vars: V,
}

impl<V: FreshVars> AlgorithmW<V> {
    /// 使用给定的变量来源
    pub fn with_vars(vars: V) -> Self {
        AlgorithmW { vars }
    }

    /// 推断并同时返回替换
    pub fn infer_with_subst(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> TypeResult<(Substitution, MonoType)> {
        infer_w(expr, env, &mut self.vars)
    }

    /// 推断并按环境泛化为类型模式
    pub fn infer_scheme(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> TypeResult<TypeScheme> {
        let (subst, ty) = self.infer_with_subst(env, expr)?;
        Ok(env.apply(&subst).generalize(&ty))
    }
}

impl<V: FreshVars> Inference for AlgorithmW<V> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::W
    }

    fn infer(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> TypeResult<MonoType> {
        self.infer_with_subst(env, expr).map(|(_, ty)| ty)
    }
}
