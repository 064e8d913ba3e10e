//! 暂存消息模型（StagedMessage）
//!
//! 定义发件箱记录在持久化层的标准形态：
//! 以关联 ID 为主键，在事务提交前写入（Pending），
//! 仅当提交后的发送失败时被标记为 Failed 并记录原因与耗时。
//! 本层从不将记录标记为“已发送”，也从不删除记录；
//! 成功发送的记录的清理/对账由外部流程负责。
//!
use crate::correlation::CorrelationId;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 暂存记录的可见状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStatus {
    /// 已暂存，等待（或已完成）提交后的发送
    Pending,
    /// 提交后的发送失败，已记录原因与耗时
    Failed,
}

#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct StagedMessage {
    /// 关联 ID，暂存记录与发送结果之间的连接键（主键，终身不变）
    correlation_id: CorrelationId,
    /// 目标交换机/主题
    destination: String,
    /// 路由键
    routing_key: String,
    /// 编码后的负载文本（对本层不透明）
    payload: String,
    /// 记录状态
    status: MessageStatus,
    /// 失败原因，仅在转入 Failed 时填充
    failure_reason: Option<String>,
    /// 发送耗时（毫秒），仅在转入 Failed 时填充
    elapsed_millis: Option<u64>,
    /// 暂存时间
    staged_at: DateTime<Utc>,
}

impl StagedMessage {
    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn routing_key(&self) -> &str {
        &self.routing_key
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn elapsed_millis(&self) -> Option<u64> {
        self.elapsed_millis
    }

    pub fn staged_at(&self) -> DateTime<Utc> {
        self.staged_at
    }

    /// 标记为发送失败，记录原因与耗时（Pending -> Failed）
    pub fn mark_failed(&mut self, reason: impl Into<String>, elapsed_millis: u64) {
        self.status = MessageStatus::Failed;
        self.failure_reason = Some(reason.into());
        self.elapsed_millis = Some(elapsed_millis);
    }
}
