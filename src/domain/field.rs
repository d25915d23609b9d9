// ==========================================
// 智慧农场记录与监测系统 - 田块与批次领域模型
// ==========================================
// 职责: 主数据实体 (田块/作物批次) 与软删除判定接口
// 红线: 实体永不硬删除,归档即 archived=true + archived_at=now
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Trait: Archivable - 软删除判定
// ==========================================
// 历史数据同时携带 archived 布尔与 archived_at 时间戳两个字段,
// 判定口径统一收敛到 is_active: 两者都未置位才算活跃。
// 所有派生计算必须先经过此谓词过滤。
pub trait Archivable {
    /// 归档标记
    fn archived(&self) -> bool;

    /// 归档时间 (None = 未归档)
    fn archived_at(&self) -> Option<DateTime<Utc>>;

    /// 是否活跃 (未归档)
    fn is_active(&self) -> bool {
        !self.archived() && self.archived_at().is_none()
    }
}

// ==========================================
// Field - 田块主数据
// ==========================================
// name 在活跃集内唯一,导入解析按 name 精确匹配
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,          // 田块唯一标识
    pub name: String,        // 田块名称 (活跃集内唯一)
    #[serde(default)]
    pub archived: bool,      // 归档标记
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>, // 归档时间
    pub owner_wallet: String, // 归属钱包地址

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl Archivable for Field {
    fn archived(&self) -> bool {
        self.archived
    }

    fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }
}

// ==========================================
// CropBatch - 作物批次
// ==========================================
// 一个田块下可有多个批次; 批次归档与田块归档相互独立
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropBatch {
    pub id: String,                  // 批次唯一标识
    pub field_id: String,            // 所属田块 (引用 Field.id)
    pub crop_type: String,           // 作物品种
    pub planted_date: chrono::NaiveDate, // 播种日期
    #[serde(default)]
    pub archived: bool,              // 归档标记
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>, // 归档时间
    pub owner_wallet: String,        // 归属钱包地址

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl Archivable for CropBatch {
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

    fn create_test_field(archived: bool, archived_at: Option<DateTime<Utc>>) -> Field {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        Field {
            id: "field-1".to_string(),
            name: "North Field".to_string(),
            archived,
            archived_at,
            owner_wallet: "0x1234".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_active_requires_both_fields_clear() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();

        assert!(create_test_field(false, None).is_active());
        assert!(!create_test_field(true, None).is_active());
        assert!(!create_test_field(false, Some(ts)).is_active());
        assert!(!create_test_field(true, Some(ts)).is_active());
    }

    #[test]
    fn test_field_wire_format_camel_case() {
        let field = create_test_field(false, None);
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"ownerWallet\""));
        assert!(json.contains("\"archivedAt\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_field_deserialize_without_archived_flag() {
        // 历史导出中部分记录缺省 archived 布尔,缺省视为未归档
        let json = r#"{
            "id": "field-9",
            "name": "Hill Field",
            "ownerWallet": "0xabc",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let field: Field = serde_json::from_str(json).unwrap();
        assert!(field.is_active());
    }
}
