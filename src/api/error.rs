// ==========================================
// 智慧农场记录与监测系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换导入层错误为统一的业务错误
// 说明: 记录级导入失败是报告数据而非错误,
//       此处只承载调用边界的硬失败
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("导入失败: {0}")]
    ImportFailed(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ImportError 转换
// 目的: 载荷级硬失败以统一的 API 错误形态上抛
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::JsonParse(_) | ImportError::NotAnArray => {
                ApiError::ImportFailed(err.to_string())
            }
            ImportError::Other(inner) => ApiError::Other(inner),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
