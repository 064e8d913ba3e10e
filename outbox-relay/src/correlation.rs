//! 关联 ID（CorrelationId）
//!
//! 每次发布尝试生成一个全局唯一标识，作为暂存记录与发送结果之间的连接键，
//! 同时以消息元数据形式随消息下发，供下游消费方与链路追踪系统关联使用。
//!
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 发布尝试的全局唯一标识（字符串值对象，持久化形态为普通字符串）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// 生成一个新的关联 ID（随机 UUID v4）
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CorrelationId> for String {
    fn from(id: CorrelationId) -> Self {
        id.0
    }
}
