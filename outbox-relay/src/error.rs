//! 发布层统一错误定义
//!
//! 按失败面向划分为编码、存储与传输三类，
//! 便于调用方区分“提交前可重试/应回滚”的错误与“提交后仅可观测”的错误。
//!
use thiserror::Error;

/// 统一错误类型（发布层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OutboxError {
    /// 负载无法编码为稳定文本形式
    #[error("encoding error: {source}")]
    Encoding {
        #[from]
        source: serde_json::Error,
    },

    /// 暂存写入或失败标记写入失败
    #[error("store error: {reason}")]
    Store { reason: String },

    /// 网络/中间件发送失败
    #[error("transport error: {reason}")]
    Transport { reason: String },
}

impl OutboxError {
    pub fn store(reason: impl Into<String>) -> Self {
        OutboxError::Store {
            reason: reason.into(),
        }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        OutboxError::Transport {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type OutboxResult<T> = Result<T, OutboxError>;
