//! 存储桶操作的错误类型。

use reqwest::StatusCode;
use thiserror::Error;

/// 存储桶操作可能产生的错误。
///
/// "存储桶已存在"不在其中，它被归类为成功结果
/// （见 [`BucketOutcome::AlreadyExists`](super::BucketOutcome)）。
#[derive(Debug, Error)]
pub enum StorageError {
    /// 网络层错误（连接失败、超时等）
    #[error("请求发送失败: {0}")]
    Transport(#[from] reqwest::Error),
    /// 服务端返回了无法识别的错误状态
    #[error("服务端返回错误状态 {status}: {message}")]
    Api { status: StatusCode, message: String },
    /// 服务端的 400 响应体不是合法的 JSON
    #[error("无法解析状态 {status} 的响应体: {source}")]
    InvalidResponse {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}
