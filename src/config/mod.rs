//! 存储桶配置工具的配置模块。
//!
//! 该模块负责从环境变量加载和管理配置。

use std::env;
use thiserror::Error;

/// 默认存储桶名称。
pub const DEFAULT_BUCKET_NAME: &str = "portfolio";

/// 配置加载错误。
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 缺少必需的环境变量
    #[error("缺少必需的环境变量 {0}")]
    Missing(&'static str),
    /// 环境变量的值无法解析
    #[error("环境变量 {var} 的值无效: {reason}")]
    Invalid { var: &'static str, reason: String },
    /// 存储桶名称为空
    #[error("BUCKET_NAME 不能为空")]
    EmptyBucketName,
}

/// 远程存储服务的访问凭证。
///
/// 在进程生命周期内不可变，显式传入各个操作，不使用全局状态。
#[derive(Debug, Clone)]
pub struct Credentials {
    /// 服务的基础 URL（如 `https://xxx.supabase.co`）
    pub base_url: String,
    /// Supabase 项目标识（仅用于日志输出，不参与请求）
    pub project_ref: String,
    /// service role 密钥，作为 Bearer 令牌发送
    pub service_role_key: String,
}

impl Credentials {
    /// 从环境变量加载访问凭证。
    ///
    /// # 环境变量
    ///
    /// * `SUPABASE_URL` - 服务的基础 URL
    /// * `SUPABASE_PROJECT_REF` - Supabase 项目标识
    /// * `SUPABASE_SERVICE_ROLE_KEY` - service role 密钥
    ///
    /// # 返回值
    ///
    /// 加载成功的凭证，缺少变量时返回 `ConfigError::Missing`。
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: require_var("SUPABASE_URL")?,
            project_ref: require_var("SUPABASE_PROJECT_REF")?,
            service_role_key: require_var("SUPABASE_SERVICE_ROLE_KEY")?,
        })
    }

    /// 拼接存储桶创建接口的完整 URL。
    ///
    /// 基础 URL 末尾多余的斜杠会被去除。
    pub fn bucket_endpoint(&self) -> String {
        format!("{}/storage/v1/bucket", self.base_url.trim_end_matches('/'))
    }
}

/// 待创建存储桶的参数。
#[derive(Debug, Clone)]
pub struct BucketSpec {
    /// 存储桶名称（非空）
    pub name: String,
    /// 是否公开可读
    pub public: bool,
    /// 单个文件的大小上限（字节），`None` 表示不设上限
    pub file_size_limit: Option<u64>,
}

impl BucketSpec {
    /// 从环境变量加载存储桶参数。
    ///
    /// # 环境变量
    ///
    /// * `BUCKET_NAME` - 存储桶名称（默认 `portfolio`，不允许为空）
    /// * `BUCKET_PUBLIC` - 是否公开可读，接受 true/false/1/0（默认 true）
    /// * `BUCKET_FILE_SIZE_LIMIT` - 单个文件大小上限（字节，默认不限制）
    ///
    /// # 返回值
    ///
    /// 加载成功的参数，值非法时返回 `ConfigError`。
    pub fn from_env() -> Result<Self, ConfigError> {
        let name =
            optional_var("BUCKET_NAME").unwrap_or_else(|| DEFAULT_BUCKET_NAME.to_string());
        if name.is_empty() {
            return Err(ConfigError::EmptyBucketName);
        }

        let public = match optional_var("BUCKET_PUBLIC") {
            Some(raw) => parse_bool("BUCKET_PUBLIC", &raw)?,
            None => true,
        };

        let file_size_limit = match optional_var("BUCKET_FILE_SIZE_LIMIT") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "BUCKET_FILE_SIZE_LIMIT",
                reason: e.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            name,
            public,
            file_size_limit,
        })
    }
}

/// 读取必需的环境变量。
fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

/// 读取可选的环境变量。
fn optional_var(name: &'static str) -> Option<String> {
    env::var(name).ok()
}

/// 将环境变量的值解析为布尔值，接受 true/false/1/0。
fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::Invalid {
            var,
            reason: format!("无法解析布尔值 {other:?}"),
        }),
    }
}
