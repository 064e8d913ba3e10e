//! 内存版消息传输（InMemoryTransport）
//!
//! 基于 `tokio::sync::broadcast` 实现的轻量传输，满足 `Transport` 协议：
//! - `send`：将信封广播给全部订阅者；
//! - `subscribe`：返回 `'static` 生命周期信封流，便于在 `tokio::spawn` 中消费；
//! - 典型用途：测试环境、示例与本地开发。
//!
//! 注意：若当前无订阅者，发送将被忽略而非报错。
//!
use crate::error::{OutboxError, OutboxResult as Result};
use crate::{correlation::CorrelationId, publishing::Transport};
use async_trait::async_trait;
use futures_core::stream::BoxStream;
use futures_util::StreamExt;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

/// 出站消息信封：负载为消息体，关联 ID 为元数据字段
#[derive(Debug, Clone)]
pub struct SentEnvelope {
    pub destination: String,
    pub routing_key: String,
    pub correlation_id: CorrelationId,
    pub payload: String,
}

/// 简单的内存传输实现
#[derive(Clone)]
pub struct InMemoryTransport {
    tx: broadcast::Sender<SentEnvelope>,
}

impl InMemoryTransport {
    /// 创建一个内存传输，`capacity` 为广播缓冲区容量
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// 返回一个 `'static` 生命周期的信封流
    pub fn subscribe(&self) -> BoxStream<'static, Result<SentEnvelope>> {
        let rx = self.tx.subscribe();
        let stream =
            BroadcastStream::new(rx).map(|r| r.map_err(|e| OutboxError::transport(e.to_string())));
        Box::pin(stream)
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn send(
        &self,
        destination: &str,
        routing_key: &str,
        correlation_id: &CorrelationId,
        payload: &str,
    ) -> Result<()> {
        let envelope = SentEnvelope {
            destination: destination.to_string(),
            routing_key: routing_key.to_string(),
            correlation_id: correlation_id.clone(),
            payload: payload.to_string(),
        };

        // 若当前无订阅者，broadcast 的 send 会返回错误，这里视为非致命并忽略
        let _ = self.tx.send(envelope);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_envelope_with_correlation_metadata() {
        let transport = InMemoryTransport::new(16);
        let mut stream = transport.subscribe();

        let id = CorrelationId::new();
        transport
            .send("orders-exchange", "order.created", &id, r#"{"id":42}"#)
            .await
            .expect("send");

        let envelope = stream
            .next()
            .await
            .expect("stream alive")
            .expect("no lag error");
        assert_eq!(envelope.destination, "orders-exchange");
        assert_eq!(envelope.routing_key, "order.created");
        assert_eq!(envelope.correlation_id, id);
        assert_eq!(envelope.payload, r#"{"id":42}"#);
    }

    #[tokio::test]
    async fn send_without_subscribers_is_not_an_error() {
        let transport = InMemoryTransport::new(16);
        transport
            .send("orders-exchange", "order.created", &CorrelationId::new(), "{}")
            .await
            .expect("send must succeed");
    }
}
