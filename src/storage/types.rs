//! 存储桶接口的数据类型。

use serde::{Deserialize, Serialize};

/// 创建存储桶请求的负载。
///
/// `file_size_limit` 为 `None` 时不会出现在序列化结果中，
/// 最小负载只包含 `name` 和 `public` 两个字段。
#[derive(Debug, Serialize)]
pub struct CreateBucketRequest<'a> {
    pub name: &'a str,
    pub public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_limit: Option<u64>,
}

/// 服务端错误响应的负载。
///
/// 服务端在 400 响应中返回 JSON，`message` 字段描述失败原因。
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// 一次创建操作的成功结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketOutcome {
    /// 存储桶已创建
    Created,
    /// 存储桶已存在（视为成功）
    AlreadyExists,
}
