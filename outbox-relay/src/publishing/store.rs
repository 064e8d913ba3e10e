//! 存储门面（OutboxStore）
//!
//! 发布层面向持久化存储的窄接口：提交前写入暂存记录，
//! 提交后的发送失败时更新失败标记。
//!
use crate::{
    correlation::CorrelationId, error::OutboxResult as Result, message::StagedMessage,
};
use async_trait::async_trait;

/// 发件箱存储：暂存待发送消息并记录发送失败
#[async_trait]
pub trait OutboxStore: Send + Sync {
    /// 写入一条 Pending 暂存记录。
    ///
    /// 要求在调用方的当前事务内执行：若该事务回滚，写入应随之撤销
    /// （这是对具体实现的要求，本层不做校验）。
    async fn stage(&self, message: &StagedMessage) -> Result<()>;

    /// 将指定关联 ID 的记录标记为失败（Pending -> Failed）。
    ///
    /// 编排器不会进一步升级此调用自身的错误，仅做观测记录。
    async fn mark_failed(
        &self,
        correlation_id: &CorrelationId,
        reason: &str,
        elapsed_millis: u64,
    ) -> Result<()>;
}
