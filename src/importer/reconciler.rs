// ==========================================
// 智慧农场记录与监测系统 - 导入对账器
// ==========================================
// 职责: 将校验通过的外部记录解析到既有田块/批次,
//       按事件类型产出新实体,重复按日期跳过,
//       逐条生成审计轨迹
// 红线: 只读既有数据集,从不改写; 并回由调用方显式执行
// ==========================================

use crate::dataset::FarmDataset;
use crate::domain::event::{IrrigationEvent, Note, StatusEntry};
use crate::domain::field::Archivable;
use crate::domain::import::{
    AuditEntry, AuditTrail, CreatedEntity, ImportRecord, ImportReport, RecordOutcome,
};
use crate::domain::types::{ChangedBy, CropStatus, ImportEventType, IrrigationKind, NoteKind};
use crate::importer::record_validator::RecordValidator;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 问题上报缺省原因
const DEFAULT_PROBLEM_REASON: &str = "Problem detected via import";

// ==========================================
// ImportReconciler - 导入对账器
// ==========================================
pub struct ImportReconciler {
    validator: RecordValidator,
}

impl ImportReconciler {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            validator: RecordValidator::new(),
        }
    }

    // ==========================================
    // 批量导入主流程
    // ==========================================

    /// 批量导入
    ///
    /// 按数组顺序处理每条记录: 结构校验 → 解析 → 事件效果。
    /// 任何记录级失败都记入报告继续处理,从不中止批次。
    /// 每条输入恰好产生一条审计条目; 错误/警告消息带
    /// "Record N: " 前缀 (N 为 1 起的输入位置)。
    ///
    /// # 参数
    /// - records: 外部记录数组 (顺序即审计顺序)
    /// - dataset: 既有数据集 (只读)
    /// - now: 注入时钟 (审计时间戳与新实体的创建时间)
    pub fn import_records(
        &self,
        records: &[ImportRecord],
        dataset: &FarmDataset,
        now: DateTime<Utc>,
    ) -> ImportReport {
        let mut report = ImportReport {
            total: records.len(),
            processed: 0,
            created: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            audit_trail: AuditTrail {
                import_date: now,
                source: "json-import".to_string(),
                records: Vec::new(),
            },
        };

        for (index, record) in records.iter().enumerate() {
            let outcome = self.process_record(record, dataset, now);

            report.processed += 1;
            let record_no = index + 1;
            report
                .errors
                .extend(outcome.errors.iter().map(|e| format!("Record {}: {}", record_no, e)));
            report
                .warnings
                .extend(outcome.warnings.iter().map(|w| format!("Record {}: {}", record_no, w)));
            report.created.extend(outcome.created.iter().cloned());

            report.audit_trail.records.push(AuditEntry {
                record_index: record_no,
                record: record.clone(),
                outcome,
                timestamp: now,
            });
        }

        tracing::info!(
            total = report.total,
            created = report.created.len(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "JSON 批量导入完成"
        );

        report
    }

    // ==========================================
    // 单条记录处理
    // ==========================================

    /// 处理单条记录: 结构校验 → 解析 → 类型化效果
    ///
    /// 消息不带 "Record N: " 前缀,由批量流程统一添加。
    pub fn process_record(
        &self,
        record: &ImportRecord,
        dataset: &FarmDataset,
        now: DateTime<Utc>,
    ) -> RecordOutcome {
        // 1. 结构校验 (未通过的记录不进入解析)
        let valid = match self.validator.validate(record) {
            Ok(valid) => valid,
            Err(errors) => {
                return RecordOutcome {
                    errors,
                    ..Default::default()
                }
            }
        };

        // 2. 解析: 活跃田块按名称精确匹配
        let field = match dataset.find_active_field_by_name(valid.field_name) {
            Some(field) => field,
            None => {
                return RecordOutcome::error(format!(
                    "Field \"{}\" not found or archived",
                    valid.field_name
                ))
            }
        };

        // 2. 解析: 该田块下活跃批次按品种精确匹配
        let batch = match dataset.find_active_batch(&field.id, valid.crop_type) {
            Some(batch) => batch,
            None => {
                return RecordOutcome::error(format!(
                    "Crop batch \"{}\" in field \"{}\" not found or archived",
                    valid.crop_type, valid.field_name
                ))
            }
        };

        // 3. 类型化效果
        let mut outcome = RecordOutcome::default();
        match valid.event_type {
            ImportEventType::Watering => {
                // 同批次同计划日期的活跃事件已存在则跳过
                let duplicate = dataset.irrigation_events.iter().any(|e| {
                    e.crop_batch_id == batch.id && e.planned_date == valid.date && e.is_active()
                });

                if duplicate {
                    outcome.warnings.push(format!(
                        "Watering event for {} already exists - skipping",
                        valid.date
                    ));
                } else {
                    outcome.created.push(CreatedEntity::IrrigationEvent(IrrigationEvent {
                        id: format!("irr-import-{}", Uuid::new_v4()),
                        crop_batch_id: batch.id.clone(),
                        kind: IrrigationKind::Executed,
                        planned_date: valid.date,
                        executed_date: Some(valid.date),
                        archived: false,
                        archived_at: None,
                        owner_wallet: batch.owner_wallet.clone(),
                        created_at: now,
                        updated_at: now,
                    }));
                }
            }

            ImportEventType::Problem => {
                // 同批次同日期的活跃状态记录已存在则跳过
                let duplicate = dataset.status_history.iter().any(|s| {
                    s.crop_batch_id == batch.id && s.date == valid.date && s.is_active()
                });

                if duplicate {
                    outcome.warnings.push(format!(
                        "Status change for {} already exists - skipping",
                        valid.date
                    ));
                } else {
                    // 问题上报固定映射为 sick
                    outcome.created.push(CreatedEntity::StatusChange(StatusEntry {
                        id: format!("status-import-{}", Uuid::new_v4()),
                        crop_batch_id: batch.id.clone(),
                        status: CropStatus::Sick,
                        date: valid.date,
                        changed_by: ChangedBy::Import,
                        reason: valid
                            .note_text
                            .unwrap_or(DEFAULT_PROBLEM_REASON)
                            .to_string(),
                        archived: false,
                        archived_at: None,
                        owner_wallet: batch.owner_wallet.clone(),
                        created_at: now,
                        updated_at: now,
                    }));
                }
            }

            ImportEventType::Observation => {
                // 观察随记不做重复检查,仅在提供了内容时创建
                if let Some(text) = valid.note_text {
                    outcome.created.push(CreatedEntity::Note(Note {
                        id: format!("note-import-{}", Uuid::new_v4()),
                        crop_batch_id: batch.id.clone(),
                        kind: NoteKind::Observation,
                        text: text.to_string(),
                        date: valid.date,
                        tags: vec!["imported".to_string()],
                        linked_event_id: None,
                        archived: false,
                        archived_at: None,
                        owner_wallet: batch.owner_wallet.clone(),
                        created_at: now,
                        updated_at: now,
                    }));
                }
            }
        }

        outcome
    }
}

impl Default for ImportReconciler {
    fn default() -> Self {
        Self::new()
    }
}
