//! 存储桶创建操作。
//!
//! 该模块实现对远程存储服务的单次创建请求，并将响应分类为
//! 创建成功、已存在或失败。

use crate::config::{BucketSpec, Credentials};
use crate::storage::error::StorageError;
use crate::storage::types::{ApiErrorBody, BucketOutcome, CreateBucketRequest};
use reqwest::{Client, StatusCode, header};
use std::time::Duration;
use tracing::debug;

/// 单次请求的超时时间。
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 冲突响应中标识"存储桶已存在"的子串。
const ALREADY_EXISTS_MARKER: &str = "already exists";

/// 构建带默认超时的 HTTP 客户端。
///
/// # 返回值
///
/// 配置好的 `reqwest::Client`，构建失败时返回错误。
pub fn default_client() -> reqwest::Result<Client> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// 在远程存储服务上创建存储桶。
///
/// 向 `<base_url>/storage/v1/bucket` 发送一次 POST 请求，并按响应分类结果：
/// 1. 状态 200：创建成功。
/// 2. 状态 400 且响应 `message` 包含 "already exists"：存储桶已存在，视为成功。
/// 3. 其他状态：失败，携带状态码和服务端消息。
///
/// 不做任何重试，每次调用只发送一次请求；超时由 `client` 的配置决定。
///
/// # 参数
///
/// * `client` - 用于发送请求的 HTTP 客户端。
/// * `credentials` - 服务访问凭证。
/// * `spec` - 待创建存储桶的参数。
///
/// # 返回值
///
/// * `Ok(BucketOutcome)` - 创建成功或已存在。
/// * `Err(StorageError)` - 网络错误、服务端错误或响应解析失败。
pub async fn create_bucket(
    client: &Client,
    credentials: &Credentials,
    spec: &BucketSpec,
) -> Result<BucketOutcome, StorageError> {
    // 1. 拼接目标 URL 并构建请求负载
    let url = credentials.bucket_endpoint();
    let payload = CreateBucketRequest {
        name: &spec.name,
        public: spec.public,
        file_size_limit: spec.file_size_limit,
    };
    debug!(%url, name = %spec.name, public = spec.public, "发送创建存储桶请求");

    // 2. 发送请求（密钥只写入请求头，不进入日志）
    let response = client
        .post(&url)
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", credentials.service_role_key),
        )
        .json(&payload)
        .send()
        .await?;

    // 3. 按状态码分类响应
    let status = response.status();
    debug!(%status, "收到服务端响应");
    if status == StatusCode::OK {
        return Ok(BucketOutcome::Created);
    }

    let body = response.text().await?;
    if status == StatusCode::BAD_REQUEST {
        // 400 响应体应为 JSON，message 字段描述失败原因
        let error_body: ApiErrorBody = serde_json::from_str(&body)
            .map_err(|source| StorageError::InvalidResponse { status, source })?;
        let message = error_body.message.unwrap_or_else(|| body.clone());
        if message.contains(ALREADY_EXISTS_MARKER) {
            return Ok(BucketOutcome::AlreadyExists);
        }
        return Err(StorageError::Api { status, message });
    }

    // 其他状态直接携带原始响应体
    Err(StorageError::Api {
        status,
        message: body,
    })
}
