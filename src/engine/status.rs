// ==========================================
// 智慧农场记录与监测系统 - 状态视图引擎
// ==========================================
// 职责: 从仅追加的状态历史派生"当前状态"与时间线视图
// 输入: 状态历史集合 (调用方提供)
// 输出: 只读视图,不改写任何输入
// ==========================================

use crate::domain::event::StatusEntry;
use crate::domain::field::Archivable;

// ==========================================
// StatusEngine - 状态视图引擎
// ==========================================
pub struct StatusEngine {
    // 无状态引擎,集合由调用方传入
}

impl StatusEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 当前状态: 指定批次活跃状态记录中 (date, priority) 最大的一条
    ///
    /// 不是"最近创建"的一条 —— 同日多条记录时严重程度高者胜出。
    /// 批次无活跃记录时返回 None。
    pub fn current_status<'a>(
        &self,
        crop_batch_id: &str,
        history: &'a [StatusEntry],
    ) -> Option<&'a StatusEntry> {
        history
            .iter()
            .filter(|s| s.crop_batch_id == crop_batch_id && s.is_active())
            .max_by_key(|s| (s.date, s.status.priority()))
    }

    /// 批次状态时间线: 按日期升序,同日按优先级降序
    pub fn history_for_batch<'a>(
        &self,
        crop_batch_id: &str,
        history: &'a [StatusEntry],
    ) -> Vec<&'a StatusEntry> {
        let mut entries: Vec<&StatusEntry> = history
            .iter()
            .filter(|s| s.crop_batch_id == crop_batch_id && s.is_active())
            .collect();

        entries.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| b.status.priority().cmp(&a.status.priority()))
        });

        entries
    }
}

impl Default for StatusEngine {
    fn default() -> Self {
        Self::new()
    }
}
