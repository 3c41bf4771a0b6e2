//! 存储桶配置工具库
//!
//! 这是一个基于 reqwest 的 Supabase 存储桶配置工具，主要功能包括：
//! - 从环境变量加载服务凭证和存储桶参数
//! - 调用存储服务的 REST 接口创建存储桶
//! - 幂等处理"存储桶已存在"的情况
//! - 将结果归类为创建成功、已存在或失败

pub mod config;
pub mod storage;
