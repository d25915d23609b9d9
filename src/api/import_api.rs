// ==========================================
// 智慧农场记录与监测系统 - JSON 导入 API
// ==========================================
// 职责: 封装 JSON 文本到导入报告的完整流程
// 失败语义: 仅载荷级失败 (非法 JSON / 非数组) 硬失败;
//           记录级失败全部记入报告,批次继续
// ==========================================

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::error::ApiResult;
use crate::dataset::FarmDataset;
use crate::domain::import::{ImportRecord, ImportReport};
use crate::importer::error::ImportError;
use crate::importer::reconciler::ImportReconciler;

// ==========================================
// ImportApi - 导入 API
// ==========================================
pub struct ImportApi {
    reconciler: ImportReconciler,
}

impl ImportApi {
    /// 创建新的 ImportApi 实例
    pub fn new() -> Self {
        Self {
            reconciler: ImportReconciler::new(),
        }
    }

    /// 从 JSON 文本执行批量导入
    ///
    /// # 参数
    /// - json_text: 记录数组的 JSON 文本
    /// - dataset: 既有数据集 (只读; 并回由调用方对报告的 created 显式执行)
    /// - now: 注入时钟
    ///
    /// # 返回
    /// - Ok(ImportReport): 导入报告 (含审计轨迹; 记录级失败在报告内)
    /// - Err(ApiError::ImportFailed): 载荷不是合法 JSON 或不是数组
    pub fn import_json(
        &self,
        json_text: &str,
        dataset: &FarmDataset,
        now: DateTime<Utc>,
    ) -> ApiResult<ImportReport> {
        let records = self.parse_payload(json_text)?;

        tracing::info!(total = records.len(), "开始 JSON 批量导入");

        Ok(self.reconciler.import_records(&records, dataset, now))
    }

    /// 载荷解析: 合法 JSON 且为数组,任何记录处理之前完成
    fn parse_payload(&self, json_text: &str) -> Result<Vec<ImportRecord>, ImportError> {
        let value: Value = serde_json::from_str(json_text)?;

        if !value.is_array() {
            return Err(ImportError::NotAnArray);
        }

        Ok(serde_json::from_value(value)?)
    }
}

impl Default for ImportApi {
    fn default() -> Self {
        Self::new()
    }
}
