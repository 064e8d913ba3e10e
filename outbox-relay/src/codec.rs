//! 负载编码（codec）
//!
//! 将应用层负载编码为模式稳定（schema-stable）的 JSON 文本。
//! 负载类型通过实现 `serde::Serialize` 显式声明其编码方式，而非依赖反射。
//! 本层视暂存的负载为只写数据，故不提供解码；回放/重发路径由外部系统负责。
//!
use crate::error::OutboxResult;
use serde::Serialize;

/// 将负载编码为 JSON 文本；不可表示的内容返回 `OutboxError::Encoding`
pub fn encode<T>(value: &T) -> OutboxResult<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutboxError;
    use serde::ser::Error as _;
    use serde::{Serialize, Serializer};

    #[derive(Serialize)]
    struct OrderCreated {
        id: u64,
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Err(S::Error::custom("not representable"))
        }
    }

    #[test]
    fn encodes_value_to_stable_json() {
        let text = encode(&OrderCreated { id: 42 }).expect("encode payload");
        assert_eq!(text, r#"{"id":42}"#);
    }

    #[test]
    fn unrepresentable_payload_is_an_encoding_error() {
        let err = encode(&Unencodable).expect_err("must fail");
        assert!(matches!(err, OutboxError::Encoding { .. }));
    }
}
