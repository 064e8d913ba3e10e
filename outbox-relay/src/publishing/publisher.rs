//! 发布编排器（OutboxPublisher）
//!
//! 编排一次可靠发布的完整时序：
//! 生成关联 ID → 编码负载 → 事务内同步暂存 → 注册提交后发送任务。
//! 提交后的发送失败被就地吸收为失败标记写入，绝不向任何调用方重新抛出
//! （此时已无调用方栈帧存在）；调用方只会看到提交前的错误。
//!
//! 单次可靠发布的状态机：
//! `START → STAGED → {SEND_SUCCEEDED | SEND_FAILED}`，
//! 编码或暂存失败时 `START → REJECTED`（调用方收到错误，不调度发送）。
//! 本层不重试、不设发送超时、不保证跨调用的发送顺序。
//!
use super::{CommitScheduler, OutboxStore, Transport};
use crate::codec;
use crate::correlation::CorrelationId;
use crate::error::{OutboxError, OutboxResult as Result};
use crate::message::{MessageStatus, StagedMessage};
use bon::Builder;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// 失败标记写入自身失败时的观测回调
pub type ErrorHook = Arc<dyn Fn(&CorrelationId, &OutboxError) + Send + Sync>;

/// OutboxPublisher：
/// - `publish_durable`：提交前暂存、提交后发送、失败时按关联 ID 记录；
/// - `publish_best_effort`：跳过暂存，仅注册提交后发送，失败只做日志观测。
///
/// 三个协作方均以构造参数显式注入，无进程级默认值；
/// 编排器自身无共享可变状态，可在并发调用方之间自由共享。
#[derive(Builder)]
pub struct OutboxPublisher {
    store: Arc<dyn OutboxStore>,
    transport: Arc<dyn Transport>,
    scheduler: Arc<dyn CommitScheduler>,
    /// 失败标记写入自身失败时的观测回调（可选；无论是否设置都会输出 tracing 日志）
    error_hook: Option<ErrorHook>,
}

impl OutboxPublisher {
    /// 可靠发布：消息在当前事务提交前先落库暂存，提交成功后才发送。
    ///
    /// 编码失败或暂存失败同步返回错误，此时不会调度任何发送；
    /// 返回的关联 ID 可用于在调用方日志/链路中关联暂存记录。
    pub async fn publish_durable<T>(
        &self,
        destination: &str,
        routing_key: &str,
        payload: &T,
    ) -> Result<CorrelationId>
    where
        T: Serialize,
    {
        let correlation_id = CorrelationId::new();
        let encoded = codec::encode(payload)?;

        let message = StagedMessage::builder()
            .correlation_id(correlation_id.clone())
            .destination(destination.to_string())
            .routing_key(routing_key.to_string())
            .payload(encoded.clone())
            .status(MessageStatus::Pending)
            .staged_at(Utc::now())
            .build();

        // 暂存必须在返回调用方之前同步完成：未暂存的消息绝不调度发送
        self.store.stage(&message).await?;

        self.schedule_send(correlation_id.clone(), destination, routing_key, encoded, true)
            .await;

        Ok(correlation_id)
    }

    /// 尽力发布：不暂存，仅注册提交后的发送；发送失败只做日志观测。
    pub async fn publish_best_effort<T>(
        &self,
        destination: &str,
        routing_key: &str,
        payload: &T,
    ) -> Result<CorrelationId>
    where
        T: Serialize,
    {
        let correlation_id = CorrelationId::new();
        let encoded = codec::encode(payload)?;

        self.schedule_send(correlation_id.clone(), destination, routing_key, encoded, false)
            .await;

        Ok(correlation_id)
    }

    /// 注册提交后的发送任务；`staged` 表示是否存在可更新的暂存记录
    async fn schedule_send(
        &self,
        correlation_id: CorrelationId,
        destination: &str,
        routing_key: &str,
        payload: String,
        staged: bool,
    ) {
        let store = self.store.clone();
        let transport = self.transport.clone();
        let error_hook = self.error_hook.clone();
        let destination = destination.to_string();
        let routing_key = routing_key.to_string();

        let task = Box::pin(async move {
            let start = Instant::now();
            let outcome = transport
                .send(&destination, &routing_key, &correlation_id, &payload)
                .await;

            let Err(send_err) = outcome else {
                return;
            };
            let elapsed = start.elapsed().as_millis() as u64;

            if !staged {
                // 尽力发布没有暂存记录可更新，仅观测
                tracing::warn!(
                    correlation_id = %correlation_id,
                    error = %send_err,
                    "best-effort send failed"
                );
                return;
            }

            tracing::warn!(
                correlation_id = %correlation_id,
                error = %send_err,
                elapsed_millis = elapsed,
                "send failed after commit, marking staged record as failed"
            );

            if let Err(mark_err) = store
                .mark_failed(&correlation_id, &send_err.to_string(), elapsed)
                .await
            {
                // 失败标记本身失败只损失可观测性，不再升级
                tracing::error!(
                    correlation_id = %correlation_id,
                    error = %mark_err,
                    "failed to mark staged record as failed"
                );
                if let Some(hook) = &error_hook {
                    hook(&correlation_id, &mark_err);
                }
            }
        });

        self.scheduler.after_commit(task).await;
    }
}
