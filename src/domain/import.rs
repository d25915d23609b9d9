// ==========================================
// 智慧农场记录与监测系统 - 导入领域模型
// ==========================================
// 职责: 外部 JSON 记录结构、单条处理结果、审计轨迹、批量导入报告
// 生命周期: 仅在导入流程内产生,由调用方决定是否并回数据集
// ==========================================

use crate::domain::event::{IrrigationEvent, Note, StatusEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ImportRecord - 外部导入记录
// ==========================================
// 字段全部可缺省: 结构校验负责产出逐字段错误消息,
// 因此不在反序列化层做必填约束
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportRecord {
    pub date: Option<String>,       // 业务日期, 格式 YYYY-MM-DD
    pub field_name: Option<String>, // 田块名称 (精确匹配)
    pub crop_type: Option<String>,  // 作物品种 (精确匹配)
    pub event_type: Option<String>, // 事件类型判别标签
    pub note_text: Option<String>,  // 随记内容 (可选)
}

// ==========================================
// CreatedEntity - 导入产出的新实体
// ==========================================
// 带判别标签的联合: 序列化为 { "type": ..., "data": ... }
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum CreatedEntity {
    IrrigationEvent(IrrigationEvent), // 灌溉事件
    StatusChange(StatusEntry),        // 状态记录
    Note(Note),                       // 随记
}

// ==========================================
// RecordOutcome - 单条记录处理结果
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub errors: Vec<String>,          // 错误 (终止该条记录)
    pub warnings: Vec<String>,        // 警告 (重复跳过等,不影响成功判定)
    pub created: Vec<CreatedEntity>,  // 新建实体
}

impl RecordOutcome {
    /// 单条错误的快捷构造
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Default::default()
        }
    }
}

// ==========================================
// AuditEntry - 审计轨迹条目
// ==========================================
// 每条输入记录恰好产生一条审计条目,无论成败
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub record_index: usize,        // 记录序号 (1 起)
    pub record: ImportRecord,       // 原始记录
    #[serde(rename = "result")]
    pub outcome: RecordOutcome,     // 处理结果
    pub timestamp: DateTime<Utc>,   // 处理时间
}

// ==========================================
// AuditTrail - 审计轨迹
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrail {
    pub import_date: DateTime<Utc>, // 本次导入时间
    pub source: String,             // 来源标识 (固定 "json-import")
    pub records: Vec<AuditEntry>,   // 逐条审计条目 (保持输入顺序)
}

// ==========================================
// ImportReport - 批量导入报告
// ==========================================
// errors/warnings 已带 "Record N: " 前缀 (N 为 1 起的输入位置);
// created 仅为新实体,并回数据集由调用方显式执行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub total: usize,                // 输入记录总数
    pub processed: usize,            // 已处理记录数
    pub created: Vec<CreatedEntity>, // 全部新建实体
    pub errors: Vec<String>,         // 全部错误
    pub warnings: Vec<String>,       // 全部警告
    pub audit_trail: AuditTrail,     // 审计轨迹
}

impl ImportReport {
    /// 导入是否成功: 无错误即成功,警告不影响判定
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_record_tolerates_missing_fields() {
        let record: ImportRecord = serde_json::from_str("{}").unwrap();
        assert!(record.date.is_none());
        assert!(record.event_type.is_none());
    }

    #[test]
    fn test_import_record_camel_case_wire() {
        let json = r#"{
            "date": "2024-03-11",
            "fieldName": "North Field",
            "cropType": "Wheat",
            "eventType": "watering"
        }"#;
        let record: ImportRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.field_name.as_deref(), Some("North Field"));
        assert_eq!(record.event_type.as_deref(), Some("watering"));
        assert!(record.note_text.is_none());
    }

    #[test]
    fn test_is_success_ignores_warnings() {
        let report = ImportReport {
            total: 1,
            processed: 1,
            created: vec![],
            errors: vec![],
            warnings: vec!["Record 1: Watering event for 2024-03-11 already exists - skipping"
                .to_string()],
            audit_trail: AuditTrail {
                import_date: Utc::now(),
                source: "json-import".to_string(),
                records: vec![],
            },
        };
        assert!(report.is_success());
    }
}
