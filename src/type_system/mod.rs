//! 类型系统子模块
//!
//! 将类型系统拆分为多个子模块以提高可维护性：
//! - var: 类型变量与新鲜变量来源
//! - mono: 单态类型定义与最一般合一子
//! - substitute: 类型替换
//! - scheme: 类型模式（多态类型）
//! - env: 类型环境
//! - unifier: union-find 合一器
//! - error: 类型错误定义

pub mod env;
pub mod error;
pub mod mono;
pub mod scheme;
pub mod substitute;
pub mod unifier;
pub mod var;

// 重新导出主要类型
pub use env::Environment;
pub use error::{TypeError, TypeResult};
pub use mono::MonoType;
pub use scheme::TypeScheme;
pub use substitute::Substitution;
pub use unifier::TypeUnifier;
pub use var::{FreshVars, SharedVarSupply, TypeVar, VarSupply};
