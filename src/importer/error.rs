// ==========================================
// 智慧农场记录与监测系统 - 导入模块错误类型
// ==========================================
// 职责: 载荷级硬失败 (整体导入在任何记录处理前中止)
// 说明: 记录级失败不是错误类型,而是报告数据
//       (ImportReport.errors / warnings)
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
///
/// 仅两类硬失败: 载荷不是合法 JSON,或不是记录数组。
/// 其余一切失败按记录记入报告,从不中止批次。
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("JSON must be an array of records")]
    NotAnArray,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParse(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
