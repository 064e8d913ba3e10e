//! 内存版提交阶段调度器
//!
//! 提供 `CommitScheduler` 协议的两个轻量实现：
//! - `ImmediateScheduler`：无事务场景，任务注册时立即就地执行；
//! - `InMemoryTransaction`：事务边界的测试替身，任务先入队，
//!   `commit` 时依序执行，`rollback` 时全部丢弃。
//!
use super::commit::{CommitScheduler, CommitTask};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// 无事务场景的调度器：任务立即执行
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

#[async_trait]
impl CommitScheduler for ImmediateScheduler {
    async fn after_commit(&self, task: CommitTask) {
        task.await;
    }
}

/// 事务边界的内存替身：显式 `commit`/`rollback` 驱动已注册任务
#[derive(Default)]
pub struct InMemoryTransaction {
    pending: Mutex<Vec<CommitTask>>,
}

impl InMemoryTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前待执行任务数
    pub async fn pending_tasks(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// 提交：按注册顺序执行全部任务
    pub async fn commit(&self) {
        let tasks = std::mem::take(&mut *self.pending.lock().await);
        for task in tasks {
            task.await;
        }
    }

    /// 回滚：丢弃全部任务，永不执行
    pub async fn rollback(&self) {
        self.pending.lock().await.clear();
    }
}

#[async_trait]
impl CommitScheduler for InMemoryTransaction {
    async fn after_commit(&self, task: CommitTask) {
        self.pending.lock().await.push(task);
    }
}
