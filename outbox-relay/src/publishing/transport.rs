//! 传输门面（Transport）
//!
//! 发布层面向消息中间件的窄接口。连接、信道与交换机语义由具体实现负责，
//! 本层只关心单条消息的发送。
//!
use crate::{correlation::CorrelationId, error::OutboxResult as Result};
use async_trait::async_trait;

/// 消息传输：将编码后的负载发往目标
#[async_trait]
pub trait Transport: Send + Sync {
    /// 发送一条消息。
    ///
    /// 关联 ID 必须以消息元数据（如 header/属性）形式附加在消息上，
    /// 而非写入负载体内，以便下游无需解析负载即可关联发送与业务操作。
    async fn send(
        &self,
        destination: &str,
        routing_key: &str,
        correlation_id: &CorrelationId,
        payload: &str,
    ) -> Result<()>;
}
