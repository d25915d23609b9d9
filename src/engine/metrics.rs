// ==========================================
// 智慧农场记录与监测系统 - 指标引擎
// ==========================================
// 职责: 驾驶舱 KPI 计数
// 输入: 原始集合 + 注入时钟
// 输出: 计数/分组,每次调用全量重算,无增量维护
// ==========================================

use crate::domain::event::{IrrigationEvent, StatusEntry};
use crate::domain::field::{Archivable, CropBatch, Field};
use crate::domain::types::{CropStatus, DelayLevel};
use crate::engine::irrigation::IrrigationEngine;
use crate::engine::status::StatusEngine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// FieldBatchCount - 单田块批次计数
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBatchCount {
    pub field_id: String,   // 田块标识
    pub field_name: String, // 田块名称
    pub count: usize,       // 活跃批次数
}

// ==========================================
// MetricsEngine - 指标引擎
// ==========================================
pub struct MetricsEngine {
    status_engine: StatusEngine,
    irrigation_engine: IrrigationEngine,
}

impl MetricsEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            status_engine: StatusEngine::new(),
            irrigation_engine: IrrigationEngine::new(),
        }
    }

    /// 活跃批次总数
    pub fn count_active_batches(&self, crop_batches: &[CropBatch]) -> usize {
        crop_batches.iter().filter(|b| b.is_active()).count()
    }

    /// 灌溉逾期批次数 (灌溉状态为 overdue 或 critical)
    pub fn count_overdue_irrigation(
        &self,
        crop_batches: &[CropBatch],
        events: &[IrrigationEvent],
        today: NaiveDate,
    ) -> usize {
        crop_batches
            .iter()
            .filter(|b| b.is_active())
            .filter(|b| {
                let state = self.irrigation_engine.state_for_batch(&b.id, events, today);
                state == DelayLevel::Overdue || state == DelayLevel::Critical
            })
            .count()
    }

    /// 当前状态为危急的批次数
    pub fn count_critical_status(
        &self,
        crop_batches: &[CropBatch],
        history: &[StatusEntry],
    ) -> usize {
        crop_batches
            .iter()
            .filter(|b| b.is_active())
            .filter(|b| {
                self.status_engine
                    .current_status(&b.id, history)
                    .map(|s| s.status == CropStatus::Critical)
                    .unwrap_or(false)
            })
            .count()
    }

    /// 活跃田块的活跃批次计数 (归档田块不参与分组)
    pub fn batches_per_field(
        &self,
        fields: &[Field],
        crop_batches: &[CropBatch],
    ) -> Vec<FieldBatchCount> {
        fields
            .iter()
            .filter(|f| f.is_active())
            .map(|field| FieldBatchCount {
                field_id: field.id.clone(),
                field_name: field.name.clone(),
                count: crop_batches
                    .iter()
                    .filter(|b| b.field_id == field.id && b.is_active())
                    .count(),
            })
            .collect()
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}
