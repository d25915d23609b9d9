// ==========================================
// 智慧农场记录与监测系统 - 驾驶舱 API
// ==========================================
// 职责: 聚合派生视图引擎,产出前端驾驶舱读模型
// 架构: API 层 → 引擎层 (Status/Irrigation/Note/Metrics)
// 说明: "当前日期"与灌溉间隔在构造时注入,数据集逐调用传入
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::dataset::FarmDataset;
use crate::domain::event::{IrrigationEvent, Note, StatusEntry};
use crate::domain::field::Archivable;
use crate::domain::types::DelayLevel;
use crate::engine::irrigation::IrrigationEngine;
use crate::engine::metrics::{FieldBatchCount, MetricsEngine};
use crate::engine::notes::NoteEngine;
use crate::engine::status::StatusEngine;

// ==========================================
// DashboardSummary - 驾驶舱汇总 KPI
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub active_batches: usize,       // 活跃批次总数
    pub overdue_irrigation: usize,   // 灌溉逾期批次数 (overdue 或 critical)
    pub critical_status: usize,      // 当前状态危急的批次数
    pub batches_per_field: Vec<FieldBatchCount>, // 各活跃田块的批次计数
}

// ==========================================
// BatchDetail - 批次详情读模型
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDetail {
    pub batch_id: String,                    // 批次标识
    pub crop_type: String,                   // 作物品种
    pub field_id: String,                    // 所属田块
    pub current_status: Option<StatusEntry>, // 当前状态 (无记录时为 None)
    pub irrigation_state: DelayLevel,        // 灌溉延迟等级
    pub next_watering_date: Option<NaiveDate>, // 推算的下次灌溉日期
    pub status_history: Vec<StatusEntry>,    // 状态时间线 (升序)
    pub irrigation_events: Vec<IrrigationEvent>, // 灌溉时间线 (降序)
    pub notes: Vec<Note>,                    // 随记时间线 (降序)
}

// ==========================================
// NoteGroupsView - 随记分桶读模型
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteGroupsView {
    pub watering: Vec<Note>,    // 灌溉
    pub disease: Vec<Note>,     // 病害
    pub fertilizer: Vec<Note>,  // 施肥
    pub observation: Vec<Note>, // 观察
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    today: NaiveDate,           // 注入时钟
    watering_interval_days: i64, // 灌溉间隔 (配置口径)
    status_engine: StatusEngine,
    irrigation_engine: IrrigationEngine,
    note_engine: NoteEngine,
    metrics_engine: MetricsEngine,
}

impl DashboardApi {
    /// 创建新的 DashboardApi 实例
    ///
    /// # 参数
    /// - today: 派生计算使用的"当前日期" (真实部署须注入实时时钟)
    /// - watering_interval_days: 灌溉间隔天数 (来自配置)
    pub fn new(today: NaiveDate, watering_interval_days: i64) -> Self {
        Self {
            today,
            watering_interval_days,
            status_engine: StatusEngine::new(),
            irrigation_engine: IrrigationEngine::new(),
            note_engine: NoteEngine::new(),
            metrics_engine: MetricsEngine::new(),
        }
    }

    // ==========================================
    // 汇总 KPI
    // ==========================================

    /// 驾驶舱汇总: 四项 KPI,全量重算
    pub fn summary(&self, dataset: &FarmDataset) -> DashboardSummary {
        DashboardSummary {
            active_batches: self.metrics_engine.count_active_batches(&dataset.crop_batches),
            overdue_irrigation: self.metrics_engine.count_overdue_irrigation(
                &dataset.crop_batches,
                &dataset.irrigation_events,
                self.today,
            ),
            critical_status: self
                .metrics_engine
                .count_critical_status(&dataset.crop_batches, &dataset.status_history),
            batches_per_field: self
                .metrics_engine
                .batches_per_field(&dataset.fields, &dataset.crop_batches),
        }
    }

    // ==========================================
    // 批次详情
    // ==========================================

    /// 批次详情读模型
    ///
    /// # 返回
    /// - Ok(BatchDetail): 批次的派生视图聚合
    /// - Err(ApiError::NotFound): 批次不存在或已归档
    pub fn batch_detail(&self, dataset: &FarmDataset, batch_id: &str) -> ApiResult<BatchDetail> {
        if batch_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("批次ID不能为空".to_string()));
        }

        let batch = dataset
            .crop_batches
            .iter()
            .find(|b| b.id == batch_id && b.is_active())
            .ok_or_else(|| ApiError::NotFound(format!("CropBatch(id={})不存在", batch_id)))?;

        Ok(BatchDetail {
            batch_id: batch.id.clone(),
            crop_type: batch.crop_type.clone(),
            field_id: batch.field_id.clone(),
            current_status: self
                .status_engine
                .current_status(&batch.id, &dataset.status_history)
                .cloned(),
            irrigation_state: self.irrigation_engine.state_for_batch(
                &batch.id,
                &dataset.irrigation_events,
                self.today,
            ),
            next_watering_date: self.irrigation_engine.next_watering_date(
                &batch.id,
                &dataset.irrigation_events,
                self.watering_interval_days,
            ),
            status_history: self
                .status_engine
                .history_for_batch(&batch.id, &dataset.status_history)
                .into_iter()
                .cloned()
                .collect(),
            irrigation_events: self
                .irrigation_engine
                .events_for_batch(&batch.id, &dataset.irrigation_events)
                .into_iter()
                .cloned()
                .collect(),
            notes: self
                .note_engine
                .notes_for_batch(&batch.id, &dataset.notes)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    /// 批次随记分桶读模型
    pub fn notes_by_kind(
        &self,
        dataset: &FarmDataset,
        batch_id: &str,
    ) -> ApiResult<NoteGroupsView> {
        if batch_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("批次ID不能为空".to_string()));
        }

        let batch_notes = self.note_engine.notes_for_batch(batch_id, &dataset.notes);
        let groups = self.note_engine.group_by_kind(&batch_notes);

        Ok(NoteGroupsView {
            watering: groups.watering.into_iter().cloned().collect(),
            disease: groups.disease.into_iter().cloned().collect(),
            fertilizer: groups.fertilizer.into_iter().cloned().collect(),
            observation: groups.observation.into_iter().cloned().collect(),
        })
    }
}
