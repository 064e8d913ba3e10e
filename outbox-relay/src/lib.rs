//! 事务性发件箱发布层（outbox-relay）
//!
//! 位于业务事务与消息中间件之间的可靠发布层，保证：
//! - 可靠发布（durable）：消息在事务提交前先落库暂存（staging），
//!   提交成功后才真正发往消息中间件；
//! - 发送失败时按关联 ID 记录失败原因与耗时，供外部对账/补发流程使用；
//! - 尽力发布（best-effort）：跳过暂存，仅注册提交后的发送。
//!
//! 本 crate 只定义协议与编排逻辑，不绑定具体存储与传输实现：
//! - 持久化存储通过 `publishing::OutboxStore` 适配（如 Postgres 表）；
//! - 消息中间件通过 `publishing::Transport` 适配（如 RabbitMQ、NATS）；
//! - 事务提交时机通过 `publishing::CommitScheduler` 适配
//!   （真实事务管理器钩子，或无事务场景下的立即执行实现）。
//!
//! 典型用法：
//! 1. 为业务负载类型实现 `serde::Serialize`；
//! 2. 为三个协议提供具体实现（或使用内存实现做测试/本地开发）；
//! 3. 通过 `OutboxPublisher::builder()` 注入三者并在业务事务内调用
//!    `publish_durable`。
//!
pub mod codec;
pub mod correlation;
pub mod error;
pub mod message;
pub mod publishing;
