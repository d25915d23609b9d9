// ==========================================
// 智慧农场记录与监测系统 - 事件领域模型
// ==========================================
// 职责: 批次下的三类事件实体 (状态记录/灌溉事件/随记)
// 红线: 状态历史为仅追加事件日志,只增不改
// ==========================================

use crate::domain::field::Archivable;
use crate::domain::types::{ChangedBy, CropStatus, IrrigationKind, NoteKind};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// StatusEntry - 作物状态记录
// ==========================================
// 仅追加: 当前状态由派生视图引擎按 (date, priority) 取最大值得出,
// 而非"最近创建"的一条
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub id: String,             // 记录唯一标识
    pub crop_batch_id: String,  // 所属批次 (引用 CropBatch.id)
    pub status: CropStatus,     // 作物状态
    pub date: NaiveDate,        // 业务日期
    pub changed_by: ChangedBy,  // 变更来源
    pub reason: String,         // 变更原因
    #[serde(default)]
    pub archived: bool,         // 归档标记
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>, // 归档时间
    pub owner_wallet: String,   // 归属钱包地址

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl Archivable for StatusEntry {
    fn archived(&self) -> bool {
        self.archived
    }

    fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }
}

// ==========================================
// IrrigationEvent - 灌溉事件
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationEvent {
    pub id: String,                      // 事件唯一标识
    pub crop_batch_id: String,           // 所属批次
    #[serde(rename = "type")]
    pub kind: IrrigationKind,            // 事件类型 (planned/executed)
    pub planned_date: NaiveDate,         // 计划日期
    pub executed_date: Option<NaiveDate>, // 执行日期 (None = 尚未执行)
    #[serde(default)]
    pub archived: bool,                  // 归档标记
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>, // 归档时间
    pub owner_wallet: String,            // 归属钱包地址

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl IrrigationEvent {
    /// 是否为待执行的计划灌溉
    ///
    /// 历史数据中 kind 与 executed_date 并非严格同步,两者须同时检查
    pub fn is_outstanding(&self) -> bool {
        self.kind == IrrigationKind::Planned && self.executed_date.is_none()
    }

    /// 有效日期: 已执行取执行日期,否则取计划日期
    pub fn effective_date(&self) -> NaiveDate {
        self.executed_date.unwrap_or(self.planned_date)
    }
}

impl Archivable for IrrigationEvent {
    fn archived(&self) -> bool {
        self.archived
    }

    fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }
}

// ==========================================
// Note - 批次随记
// ==========================================
// linked_event_id 是对状态记录或灌溉事件的弱引用,
// 仅作关联展示,不做引用完整性约束
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,                    // 随记唯一标识
    pub crop_batch_id: String,         // 所属批次
    #[serde(rename = "type")]
    pub kind: NoteKind,                // 随记类型
    pub text: String,                  // 随记内容
    pub date: NaiveDate,               // 业务日期
    pub tags: Vec<String>,             // 标签集合
    pub linked_event_id: Option<String>, // 关联事件 (弱引用)
    #[serde(default)]
    pub archived: bool,                // 归档标记
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>, // 归档时间
    pub owner_wallet: String,          // 归属钱包地址

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl Archivable for Note {
    fn archived(&self) -> bool {
        self.archived
    }

    fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_event(
        kind: IrrigationKind,
        executed_date: Option<NaiveDate>,
    ) -> IrrigationEvent {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        IrrigationEvent {
            id: "irr-1".to_string(),
            crop_batch_id: "batch-1".to_string(),
            kind,
            planned_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            executed_date,
            archived: false,
            archived_at: None,
            owner_wallet: "0x1234".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_outstanding_checks_both_kind_and_executed_date() {
        let exec_date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();

        assert!(create_test_event(IrrigationKind::Planned, None).is_outstanding());
        // kind=planned 但已有执行日期: 不算待执行
        assert!(!create_test_event(IrrigationKind::Planned, Some(exec_date)).is_outstanding());
        assert!(!create_test_event(IrrigationKind::Executed, Some(exec_date)).is_outstanding());
    }

    #[test]
    fn test_effective_date_prefers_executed() {
        let exec_date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        let outstanding = create_test_event(IrrigationKind::Planned, None);
        assert_eq!(outstanding.effective_date(), outstanding.planned_date);

        let executed = create_test_event(IrrigationKind::Executed, Some(exec_date));
        assert_eq!(executed.effective_date(), exec_date);
    }

    #[test]
    fn test_event_kind_serializes_as_type() {
        let event = create_test_event(IrrigationKind::Planned, None);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"planned\""));
        assert!(json.contains("\"plannedDate\""));
    }
}
