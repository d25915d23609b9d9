// ==========================================
// 智慧农场记录与监测系统 - 数据集
// ==========================================
// 职责: 五类实体集合的内存容器与活跃过滤访问器
// 红线: 派生计算一律基于活跃过滤后的集合,严禁对原始集合直接聚合
// ==========================================

use crate::domain::event::{IrrigationEvent, Note, StatusEntry};
use crate::domain::field::{Archivable, CropBatch, Field};
use crate::domain::import::CreatedEntity;
use serde::{Deserialize, Serialize};

pub mod sample;

/// 活跃过滤: 保留未归档实体
///
/// 幂等: 对已过滤结果再次过滤不改变内容
pub fn filter_active<'a, T, I>(entities: I) -> Vec<&'a T>
where
    T: Archivable,
    I: IntoIterator<Item = &'a T>,
{
    entities.into_iter().filter(|e| e.is_active()).collect()
}

// ==========================================
// FarmDataset - 农场数据集
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmDataset {
    pub fields: Vec<Field>,                    // 田块主数据
    pub crop_batches: Vec<CropBatch>,          // 作物批次
    pub status_history: Vec<StatusEntry>,      // 状态历史 (仅追加)
    pub irrigation_events: Vec<IrrigationEvent>, // 灌溉事件
    pub notes: Vec<Note>,                      // 批次随记
}

impl FarmDataset {
    /// 创建空数据集
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================
    // 活跃过滤访问器
    // ==========================================

    /// 活跃田块
    pub fn active_fields(&self) -> Vec<&Field> {
        filter_active(&self.fields)
    }

    /// 活跃作物批次
    pub fn active_crop_batches(&self) -> Vec<&CropBatch> {
        filter_active(&self.crop_batches)
    }

    /// 指定田块下的活跃批次
    pub fn active_batches_for_field(&self, field_id: &str) -> Vec<&CropBatch> {
        self.crop_batches
            .iter()
            .filter(|b| b.field_id == field_id && b.is_active())
            .collect()
    }

    // ==========================================
    // 导入解析查找
    // ==========================================

    /// 按名称精确匹配活跃田块
    pub fn find_active_field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name && f.is_active())
    }

    /// 按田块与作物品种精确匹配活跃批次
    pub fn find_active_batch(&self, field_id: &str, crop_type: &str) -> Option<&CropBatch> {
        self.crop_batches
            .iter()
            .find(|b| b.field_id == field_id && b.crop_type == crop_type && b.is_active())
    }

    // ==========================================
    // 导入产出并回 (调用方显式执行)
    // ==========================================

    /// 将导入产出的新实体并入数据集,返回并入数量
    ///
    /// 对账器本身从不改写数据集; 是否并回由调用方决定。
    pub fn absorb(&mut self, created: Vec<CreatedEntity>) -> usize {
        let count = created.len();
        for entity in created {
            match entity {
                CreatedEntity::IrrigationEvent(event) => self.irrigation_events.push(event),
                CreatedEntity::StatusChange(entry) => self.status_history.push(entry),
                CreatedEntity::Note(note) => self.notes.push(note),
            }
        }
        count
    }
}
