// ==========================================
// 智慧农场记录与监测系统 - 样例数据集
// ==========================================
// 职责: 构造一份有代表性的演示/测试数据集
// 覆盖: 归档田块、归档批次、归档随记、逾期/危急/未来灌溉计划、
//       同批次多条状态记录
// ==========================================

use crate::dataset::FarmDataset;
use crate::domain::event::{IrrigationEvent, Note, StatusEntry};
use crate::domain::field::{CropBatch, Field};
use crate::domain::types::{ChangedBy, CropStatus, IrrigationKind, NoteKind};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// 样例数据的"当前日期" (派生计算的注入时钟)
pub fn sample_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).expect("合法的样例日期")
}

const WALLET_A: &str = "0x1234567890123456789012345678901234567890";
const WALLET_B: &str = "0x0987654321098765432109876543210987654321";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("合法的样例日期")
}

fn timestamp(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// 样例数据统一的记录创建时间
fn base_timestamp() -> DateTime<Utc> {
    timestamp(2024, 3, 10, 0)
}

fn field(id: &str, name: &str, wallet: &str) -> Field {
    Field {
        id: id.to_string(),
        name: name.to_string(),
        archived: false,
        archived_at: None,
        owner_wallet: wallet.to_string(),
        created_at: base_timestamp(),
        updated_at: base_timestamp(),
    }
}

fn crop_batch(id: &str, field_id: &str, crop_type: &str, planted: NaiveDate, wallet: &str) -> CropBatch {
    CropBatch {
        id: id.to_string(),
        field_id: field_id.to_string(),
        crop_type: crop_type.to_string(),
        planted_date: planted,
        archived: false,
        archived_at: None,
        owner_wallet: wallet.to_string(),
        created_at: base_timestamp(),
        updated_at: base_timestamp(),
    }
}

#[allow(clippy::too_many_arguments)]
fn status_entry(
    id: &str,
    batch_id: &str,
    status: CropStatus,
    on: NaiveDate,
    changed_by: ChangedBy,
    reason: &str,
    wallet: &str,
) -> StatusEntry {
    StatusEntry {
        id: id.to_string(),
        crop_batch_id: batch_id.to_string(),
        status,
        date: on,
        changed_by,
        reason: reason.to_string(),
        archived: false,
        archived_at: None,
        owner_wallet: wallet.to_string(),
        created_at: base_timestamp(),
        updated_at: base_timestamp(),
    }
}

fn irrigation_event(
    id: &str,
    batch_id: &str,
    kind: IrrigationKind,
    planned: NaiveDate,
    executed: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    wallet: &str,
) -> IrrigationEvent {
    IrrigationEvent {
        id: id.to_string(),
        crop_batch_id: batch_id.to_string(),
        kind,
        planned_date: planned,
        executed_date: executed,
        archived: false,
        archived_at: None,
        owner_wallet: wallet.to_string(),
        created_at,
        updated_at: created_at,
    }
}

#[allow(clippy::too_many_arguments)]
fn note(
    id: &str,
    batch_id: &str,
    kind: NoteKind,
    text: &str,
    on: NaiveDate,
    tags: &[&str],
    linked: Option<&str>,
    wallet: &str,
) -> Note {
    Note {
        id: id.to_string(),
        crop_batch_id: batch_id.to_string(),
        kind,
        text: text.to_string(),
        date: on,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        linked_event_id: linked.map(|l| l.to_string()),
        archived: false,
        archived_at: None,
        owner_wallet: wallet.to_string(),
        created_at: base_timestamp(),
        updated_at: base_timestamp(),
    }
}

/// 构造样例数据集
///
/// 日期分布围绕 `sample_today()` (2024-03-10) 设计:
/// - irr-1 计划 02-18 未执行, batch-1 最久未履行 → critical
/// - irr-4 计划 03-08, 延迟 2 天 → overdue
/// - irr-8 计划 03-06, 延迟 4 天 → critical
/// - irr-9 计划 03-09, 延迟 1 天 → normal
/// - irr-6 计划 03-12, 未来 → normal
pub fn sample_dataset() -> FarmDataset {
    let mut dataset = FarmDataset::new();

    // ===== 田块 =====
    dataset.fields = vec![
        field("field-1", "North Field", WALLET_A),
        field("field-2", "South Field", WALLET_A),
        field("field-3", "East Field", WALLET_B),
        {
            let mut archived = field("field-4", "West Field", WALLET_B);
            archived.archived = true;
            archived.archived_at = Some(timestamp(2024, 1, 15, 10));
            archived
        },
    ];

    // ===== 作物批次 =====
    dataset.crop_batches = vec![
        crop_batch("batch-1", "field-1", "Wheat", date(2024, 1, 15), WALLET_A),
        crop_batch("batch-2", "field-1", "Corn", date(2024, 2, 10), WALLET_A),
        crop_batch("batch-3", "field-2", "Soybeans", date(2024, 1, 20), WALLET_A),
        crop_batch("batch-4", "field-2", "Wheat", date(2024, 3, 5), WALLET_A),
        crop_batch("batch-5", "field-3", "Barley", date(2024, 2, 25), WALLET_B),
        {
            let mut archived = crop_batch("batch-6", "field-4", "Oats", date(2023, 11, 10), WALLET_B);
            archived.archived = true;
            archived.archived_at = Some(timestamp(2024, 1, 10, 10));
            archived
        },
    ];

    // ===== 状态历史 =====
    dataset.status_history = vec![
        status_entry("status-1", "batch-1", CropStatus::Healthy, date(2024, 1, 15), ChangedBy::System, "Seeds planted", WALLET_A),
        status_entry("status-2", "batch-1", CropStatus::Healthy, date(2024, 1, 22), ChangedBy::Farmer, "First sprouts observed", WALLET_A),
        status_entry("status-3", "batch-1", CropStatus::Risk, date(2024, 2, 5), ChangedBy::Farmer, "Minor pest activity detected", WALLET_A),
        status_entry("status-4", "batch-1", CropStatus::Critical, date(2024, 2, 20), ChangedBy::Farmer, "Pest infestation detected - immediate action required", WALLET_A),
        status_entry("status-5", "batch-2", CropStatus::Healthy, date(2024, 2, 10), ChangedBy::System, "Seeds planted", WALLET_A),
        status_entry("status-6", "batch-2", CropStatus::Healthy, date(2024, 2, 17), ChangedBy::Farmer, "Germination started", WALLET_A),
        status_entry("status-7", "batch-2", CropStatus::Healthy, date(2024, 3, 1), ChangedBy::Farmer, "Normal growth", WALLET_A),
        status_entry("status-8", "batch-3", CropStatus::Healthy, date(2024, 1, 20), ChangedBy::System, "Seeds planted", WALLET_A),
        status_entry("status-9", "batch-3", CropStatus::Healthy, date(2024, 1, 27), ChangedBy::Farmer, "Germination observed", WALLET_A),
        status_entry("status-10", "batch-3", CropStatus::Risk, date(2024, 2, 10), ChangedBy::Farmer, "Weather concerns", WALLET_A),
        status_entry("status-11", "batch-4", CropStatus::Healthy, date(2024, 3, 5), ChangedBy::System, "Seeds planted", WALLET_A),
        status_entry("status-12", "batch-4", CropStatus::Healthy, date(2024, 3, 12), ChangedBy::Farmer, "Germination started", WALLET_A),
        status_entry("status-13", "batch-5", CropStatus::Healthy, date(2024, 2, 25), ChangedBy::System, "Seeds planted", WALLET_B),
        status_entry("status-14", "batch-5", CropStatus::Sick, date(2024, 3, 3), ChangedBy::Farmer, "Disease symptoms observed", WALLET_B),
        status_entry("status-15", "batch-5", CropStatus::Critical, date(2024, 3, 15), ChangedBy::Farmer, "Disease outbreak - treatment applied", WALLET_B),
    ];

    // ===== 灌溉事件 =====
    dataset.irrigation_events = vec![
        irrigation_event("irr-1", "batch-1", IrrigationKind::Planned, date(2024, 2, 18), None, timestamp(2024, 2, 15, 10), WALLET_A),
        irrigation_event("irr-2", "batch-1", IrrigationKind::Executed, date(2024, 2, 19), Some(date(2024, 2, 19)), timestamp(2024, 2, 19, 8), WALLET_A),
        irrigation_event("irr-3", "batch-1", IrrigationKind::Planned, date(2024, 3, 5), None, timestamp(2024, 3, 1, 10), WALLET_A),
        irrigation_event("irr-4", "batch-2", IrrigationKind::Planned, date(2024, 3, 8), None, timestamp(2024, 3, 5, 10), WALLET_A),
        irrigation_event("irr-5", "batch-2", IrrigationKind::Executed, date(2024, 2, 25), Some(date(2024, 2, 25)), timestamp(2024, 2, 25, 8), WALLET_A),
        irrigation_event("irr-6", "batch-3", IrrigationKind::Planned, date(2024, 3, 12), None, timestamp(2024, 3, 10, 10), WALLET_A),
        irrigation_event("irr-7", "batch-3", IrrigationKind::Executed, date(2024, 2, 15), Some(date(2024, 2, 15)), timestamp(2024, 2, 15, 8), WALLET_A),
        irrigation_event("irr-8", "batch-4", IrrigationKind::Planned, date(2024, 3, 6), None, timestamp(2024, 3, 5, 10), WALLET_A),
        irrigation_event("irr-9", "batch-5", IrrigationKind::Planned, date(2024, 3, 9), None, timestamp(2024, 3, 7, 10), WALLET_B),
    ];

    // ===== 随记 =====
    dataset.notes = vec![
        note("note-1", "batch-1", NoteKind::Disease, "Found aphids on lower leaves. Applied organic pesticide.", date(2024, 2, 20), &["pest", "treatment"], Some("status-4"), WALLET_A),
        note("note-2", "batch-1", NoteKind::Watering, "Irrigation completed successfully. Soil moisture optimal.", date(2024, 2, 19), &["irrigation"], Some("irr-2"), WALLET_A),
        note("note-3", "batch-1", NoteKind::Observation, "Weather conditions favorable. No immediate concerns.", date(2024, 2, 25), &["weather"], None, WALLET_A),
        note("note-4", "batch-2", NoteKind::Fertilizer, "Applied nitrogen fertilizer as scheduled.", date(2024, 3, 2), &["fertilizer", "scheduled"], None, WALLET_A),
        note("note-5", "batch-2", NoteKind::Watering, "Irrigation system working well.", date(2024, 2, 25), &["irrigation"], Some("irr-5"), WALLET_A),
        {
            let mut archived = note("note-6", "batch-3", NoteKind::Observation, "Crop growth is on track.", date(2024, 2, 20), &["growth"], None, WALLET_A);
            archived.archived = true;
            archived.archived_at = Some(timestamp(2024, 2, 21, 10));
            archived
        },
        note("note-7", "batch-5", NoteKind::Disease, "Fungal infection detected. Treatment applied.", date(2024, 3, 15), &["disease", "treatment"], Some("status-15"), WALLET_B),
    ];

    dataset
}
