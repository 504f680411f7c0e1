//! 按配置选择算法的推断器
//!
//! 持有配置和变量来源，每次调用都为 Algorithm J 新建合一器，
//! 调用方不必自己维护“一次推断一个合一器”的约束。

use super::{Algorithm, AlgorithmJ, AlgorithmW, Inference};
use crate::ast::Expr;
use crate::type_system::{Environment, MonoType, TypeResult, TypeScheme, VarSupply};
use crate::util::config::EngineConfig;
use tracing::debug;

/// 类型推断器
#[derive(Debug, Clone)]
pub struct TypeInferencer {
    config: EngineConfig,
    vars: VarSupply,
}

impl TypeInferencer {
    /// 使用给定配置创建推断器
    pub fn new(config: EngineConfig) -> Self {
        let vars = VarSupply::starting_at(config.first_var);
        TypeInferencer { config, vars }
    }

    /// 当前配置
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 推断单态类型（完全解析）
    pub fn infer(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> TypeResult<MonoType> {
        let algorithm = self.config.algorithm;
        let result = self.strategy(algorithm).infer(env, expr);
        match &result {
            Ok(ty) => debug!("{} ⊢ {} : {} (algorithm {})", env, expr, ty, algorithm),
            Err(err) => debug!("{} ⊢ {} failed: {} (algorithm {})", env, expr, err, algorithm),
        }
        result
    }

    /// 推断并泛化为主类型模式
    pub fn infer_scheme(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> TypeResult<TypeScheme> {
        let scheme = match self.config.algorithm {
            Algorithm::W => AlgorithmW::with_vars(&mut self.vars).infer_scheme(env, expr)?,
            Algorithm::J => AlgorithmJ::with_vars(&mut self.vars).infer_scheme(env, expr)?,
        };
        debug!("{} ⊢ {} : {}", env, expr, scheme);
        Ok(scheme)
    }

    /// 用两种算法分别推断，供比较
    pub fn check_agreement(
        &mut self,
        env: &Environment,
        expr: &Expr,
    ) -> Agreement {
        let w = self.strategy(Algorithm::W).infer(env, expr);
        let j = self.strategy(Algorithm::J).infer(env, expr);
        let agreement = Agreement { w, j };
        if !agreement.agrees() {
            debug!("W and J disagree on {}: {:?} vs {:?}", expr, agreement.w, agreement.j);
        }
        agreement
    }

    fn strategy(
        &mut self,
        algorithm: Algorithm,
    ) -> Box<dyn Inference + '_> {
        match algorithm {
            Algorithm::W => Box::new(AlgorithmW::with_vars(&mut self.vars)),
            Algorithm::J => Box::new(AlgorithmJ::with_vars(&mut self.vars)),
        }
    }
}

impl Default for TypeInferencer {
    fn default() -> Self {
        TypeInferencer::new(EngineConfig::default())
    }
}

/// 两种算法的推断结果
#[derive(Debug, Clone)]
pub struct Agreement {
    pub w: TypeResult<MonoType>,
    pub j: TypeResult<MonoType>,
}

impl Agreement {
    /// 两边都成功且类型在变量改名意义下相同，或两边以同一类错误失败
    pub fn agrees(&self) -> bool {
        match (&self.w, &self.j) {
            (Ok(w), Ok(j)) => w.normalize() == j.normalize(),
            (Err(w), Err(j)) => w.kind() == j.kind(),
            _ => false,
        }
    }
}
