//! 存储模块
//!
//! 该模块负责与远程存储服务的交互，包括请求类型、错误分类和存储桶创建操作。

// 声明子模块
pub mod bucket;
pub mod error;
pub mod types;

// 重新导出常用的接口
pub use bucket::{REQUEST_TIMEOUT, create_bucket, default_client};
pub use error::StorageError;
pub use types::BucketOutcome;
