use anyhow::Context;
use bucket_provisioner::config::{BucketSpec, Credentials};
use bucket_provisioner::storage::{self, BucketOutcome};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::fmt::time::LocalTime;

#[tokio::main]
async fn main() -> ExitCode {
    // 加载 .env 文件
    dotenvy::dotenv().ok();

    // 初始化日志（本地时间戳）
    tracing_subscriber::fmt()
        .with_timer(LocalTime::rfc_3339())
        .init();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("存储桶配置失败: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// 执行一次配置流程，返回进程退出码。
///
/// 创建成功和已存在都映射为退出码 0，任何失败映射为 1。
async fn run() -> anyhow::Result<ExitCode> {
    // 1. 加载配置
    let credentials = Credentials::from_env().context("加载访问凭证失败")?;
    let spec = BucketSpec::from_env().context("加载存储桶参数失败")?;
    info!(
        project = %credentials.project_ref,
        bucket = %spec.name,
        "开始配置存储桶"
    );

    // 2. 构建客户端并发送创建请求
    let client = storage::default_client().context("初始化 HTTP 客户端失败")?;
    match storage::create_bucket(&client, &credentials, &spec).await {
        Ok(BucketOutcome::Created) => {
            println!("存储桶 \"{}\" 创建成功", spec.name);
            println!("请到 Supabase 控制台的 Storage 页面为该存储桶配置访问策略");
            Ok(ExitCode::SUCCESS)
        }
        Ok(BucketOutcome::AlreadyExists) => {
            println!("存储桶 \"{}\" 已存在", spec.name);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("存储桶配置失败: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
