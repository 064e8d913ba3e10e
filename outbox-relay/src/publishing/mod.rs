//! 发布子系统（publishing）
//!
//! 提供事务性发布所需的协议与编排器：
//! - `OutboxStore`：暂存与失败标记的存储门面；
//! - `Transport`：面向消息中间件的发送门面；
//! - `CommitScheduler`：提交阶段回调的调度门面；
//! - `OutboxPublisher`：编排“编码 → 暂存 → 提交后发送 → 失败捕获”的核心流程。
//!
//! 该模块仅定义协议与编排逻辑，不绑定具体存储与传输实现；
//! 随附的内存实现面向测试、示例与本地开发。
//!
pub mod commit;
pub mod commit_inmemory;
pub mod publisher;
pub mod store;
pub mod store_inmemory;
pub mod transport;
pub mod transport_inmemory;

pub use commit::{CommitScheduler, CommitTask};
pub use commit_inmemory::{ImmediateScheduler, InMemoryTransaction};
pub use publisher::{ErrorHook, OutboxPublisher};
pub use store::OutboxStore;
pub use store_inmemory::InMemoryOutboxStore;
pub use transport::Transport;
pub use transport_inmemory::{InMemoryTransport, SentEnvelope};
