//! 内存版发件箱存储（InMemoryOutboxStore）
//!
//! 基于 `dashmap::DashMap` 实现的 `OutboxStore`，以关联 ID 为主键，
//! 典型用途：测试环境、示例与本地开发。
//! 附带若干查询方法，便于断言与模拟对账流程。
//!
//! 注意：该实现不参与任何事务，`stage` 的写入对回滚不可撤销，
//! 事务语义需配合 `InMemoryTransaction` 等边界替身在测试中模拟。
//!
use crate::error::{OutboxError, OutboxResult as Result};
use crate::message::{MessageStatus, StagedMessage};
use crate::{correlation::CorrelationId, publishing::OutboxStore};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// 简单的内存发件箱存储实现
#[derive(Clone, Default)]
pub struct InMemoryOutboxStore {
    records: Arc<DashMap<CorrelationId, StagedMessage>>,
}

impl InMemoryOutboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按关联 ID 查询暂存记录
    pub fn get(&self, correlation_id: &CorrelationId) -> Option<StagedMessage> {
        self.records.get(correlation_id).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全部 Pending 记录
    pub fn pending(&self) -> Vec<StagedMessage> {
        self.by_status(MessageStatus::Pending)
    }

    /// 全部 Failed 记录
    pub fn failed(&self) -> Vec<StagedMessage> {
        self.by_status(MessageStatus::Failed)
    }

    fn by_status(&self, status: MessageStatus) -> Vec<StagedMessage> {
        self.records
            .iter()
            .filter(|r| r.status() == status)
            .map(|r| r.value().clone())
            .collect()
    }
}

#[async_trait]
impl OutboxStore for InMemoryOutboxStore {
    async fn stage(&self, message: &StagedMessage) -> Result<()> {
        use dashmap::mapref::entry::Entry;

        // 关联 ID 即主键，重复写入视为持久化错误
        match self.records.entry(message.correlation_id().clone()) {
            Entry::Occupied(_) => Err(OutboxError::store(format!(
                "duplicate correlation id: {}",
                message.correlation_id()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(message.clone());
                Ok(())
            }
        }
    }

    async fn mark_failed(
        &self,
        correlation_id: &CorrelationId,
        reason: &str,
        elapsed_millis: u64,
    ) -> Result<()> {
        match self.records.get_mut(correlation_id) {
            Some(mut record) => {
                record.mark_failed(reason, elapsed_millis);
                Ok(())
            }
            None => Err(OutboxError::store(format!(
                "unknown correlation id: {correlation_id}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn pending(id: &CorrelationId) -> StagedMessage {
        StagedMessage::builder()
            .correlation_id(id.clone())
            .destination("orders-exchange".into())
            .routing_key("order.created".into())
            .payload(r#"{"id":42}"#.into())
            .status(MessageStatus::Pending)
            .staged_at(Utc::now())
            .build()
    }

    #[tokio::test]
    async fn stage_then_mark_failed_transitions_record() {
        let store = InMemoryOutboxStore::new();
        let id = CorrelationId::new();

        store.stage(&pending(&id)).await.expect("stage");
        assert_eq!(store.pending().len(), 1);

        store
            .mark_failed(&id, "broker unreachable", 7)
            .await
            .expect("mark failed");

        let record = store.get(&id).expect("record exists");
        assert_eq!(record.status(), MessageStatus::Failed);
        assert_eq!(record.failure_reason(), Some("broker unreachable"));
        assert_eq!(record.elapsed_millis(), Some(7));
        assert!(store.pending().is_empty());
        assert_eq!(store.failed().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_stage_is_rejected() {
        let store = InMemoryOutboxStore::new();
        let id = CorrelationId::new();

        store.stage(&pending(&id)).await.expect("first stage");
        let err = store.stage(&pending(&id)).await.expect_err("must fail");
        assert!(matches!(err, OutboxError::Store { .. }));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn mark_failed_for_unknown_id_is_an_error() {
        let store = InMemoryOutboxStore::new();
        let err = store
            .mark_failed(&CorrelationId::new(), "whatever", 0)
            .await
            .expect_err("must fail");
        assert!(matches!(err, OutboxError::Store { .. }));
    }
}
