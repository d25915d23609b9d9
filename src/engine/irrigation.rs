// ==========================================
// 智慧农场记录与监测系统 - 灌溉视图引擎
// ==========================================
// 职责: 灌溉延迟分级、批次灌溉状态、事件时间线、下次灌溉推算
// 红线: "当前日期"由调用方注入,引擎内部不读系统时钟
// ==========================================

use crate::domain::event::IrrigationEvent;
use crate::domain::field::Archivable;
use crate::domain::types::DelayLevel;
use chrono::{Duration, NaiveDate};

// ==========================================
// IrrigationEngine - 灌溉视图引擎
// ==========================================
pub struct IrrigationEngine {
    // 无状态引擎,阈值为固定业务口径
}

impl IrrigationEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 灌溉延迟分级
    ///
    /// 按计划日期距今天数分级 (边界含义固定,驱动驾驶舱告警计数):
    /// - 未来或延迟 <= 1 天 → Normal
    /// - 延迟 2..3 天 → Overdue
    /// - 延迟 > 3 天 → Critical
    pub fn delay_level(&self, planned_date: NaiveDate, today: NaiveDate) -> DelayLevel {
        let days_late = (today - planned_date).num_days();

        // 计划日期在未来
        if days_late < 0 {
            return DelayLevel::Normal;
        }

        if days_late <= 1 {
            DelayLevel::Normal
        } else if days_late <= 3 {
            DelayLevel::Overdue
        } else {
            DelayLevel::Critical
        }
    }

    /// 批次灌溉状态
    ///
    /// 取该批次活跃的待执行计划中计划日期最早的一条 (最久未履行的义务)
    /// 进行延迟分级; 无待执行计划时为 Normal。
    pub fn state_for_batch(
        &self,
        crop_batch_id: &str,
        events: &[IrrigationEvent],
        today: NaiveDate,
    ) -> DelayLevel {
        let oldest_outstanding = events
            .iter()
            .filter(|e| e.crop_batch_id == crop_batch_id && e.is_active() && e.is_outstanding())
            .min_by_key(|e| e.planned_date);

        match oldest_outstanding {
            Some(event) => self.delay_level(event.planned_date, today),
            None => DelayLevel::Normal,
        }
    }

    /// 批次灌溉事件时间线: 按有效日期降序 (最近在前)
    pub fn events_for_batch<'a>(
        &self,
        crop_batch_id: &str,
        events: &'a [IrrigationEvent],
    ) -> Vec<&'a IrrigationEvent> {
        let mut batch_events: Vec<&IrrigationEvent> = events
            .iter()
            .filter(|e| e.crop_batch_id == crop_batch_id && e.is_active())
            .collect();

        batch_events.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));

        batch_events
    }

    /// 推算下次灌溉日期: 最近一次事件的有效日期 + 间隔天数
    ///
    /// 批次无灌溉事件时返回 None (无推算依据)。
    pub fn next_watering_date(
        &self,
        crop_batch_id: &str,
        events: &[IrrigationEvent],
        interval_days: i64,
    ) -> Option<NaiveDate> {
        let last_effective = events
            .iter()
            .filter(|e| e.crop_batch_id == crop_batch_id && e.is_active())
            .map(|e| e.effective_date())
            .max()?;

        Some(last_effective + Duration::days(interval_days))
    }
}

impl Default for IrrigationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::IrrigationKind;
    use chrono::{TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn create_test_event(
        id: &str,
        batch_id: &str,
        kind: IrrigationKind,
        planned: NaiveDate,
        executed: Option<NaiveDate>,
    ) -> IrrigationEvent {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        IrrigationEvent {
            id: id.to_string(),
            crop_batch_id: batch_id.to_string(),
            kind,
            planned_date: planned,
            executed_date: executed,
            archived: false,
            archived_at: None,
            owner_wallet: "0x1234".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_delay_level_boundaries() {
        let engine = IrrigationEngine::new();
        let today = d(2024, 3, 10);

        // 未来 → normal
        assert_eq!(engine.delay_level(d(2024, 3, 12), today), DelayLevel::Normal);
        // 当天 → normal
        assert_eq!(engine.delay_level(d(2024, 3, 10), today), DelayLevel::Normal);
        // 延迟 1 天 → normal
        assert_eq!(engine.delay_level(d(2024, 3, 9), today), DelayLevel::Normal);
        // 延迟 2 天 → overdue
        assert_eq!(engine.delay_level(d(2024, 3, 8), today), DelayLevel::Overdue);
        // 延迟 3 天 → overdue
        assert_eq!(engine.delay_level(d(2024, 3, 7), today), DelayLevel::Overdue);
        // 延迟 4 天 → critical
        assert_eq!(engine.delay_level(d(2024, 3, 6), today), DelayLevel::Critical);
    }

    #[test]
    fn test_state_for_batch_uses_oldest_outstanding() {
        let engine = IrrigationEngine::new();
        let today = d(2024, 3, 10);
        let events = vec![
            // 最早的待执行计划延迟 5 天 → critical
            create_test_event("i1", "batch-1", IrrigationKind::Planned, d(2024, 3, 5), None),
            create_test_event("i2", "batch-1", IrrigationKind::Planned, d(2024, 3, 9), None),
        ];

        assert_eq!(
            engine.state_for_batch("batch-1", &events, today),
            DelayLevel::Critical
        );
    }

    #[test]
    fn test_state_for_batch_normal_when_none_outstanding() {
        let engine = IrrigationEngine::new();
        let today = d(2024, 3, 10);
        let events = vec![
            // 已执行事件不构成待执行义务
            create_test_event(
                "i1",
                "batch-1",
                IrrigationKind::Executed,
                d(2024, 3, 1),
                Some(d(2024, 3, 1)),
            ),
        ];

        assert_eq!(
            engine.state_for_batch("batch-1", &events, today),
            DelayLevel::Normal
        );
        assert_eq!(
            engine.state_for_batch("batch-9", &events, today),
            DelayLevel::Normal
        );
    }

    #[test]
    fn test_state_for_batch_ignores_archived_plans() {
        let engine = IrrigationEngine::new();
        let today = d(2024, 3, 10);
        let mut archived =
            create_test_event("i1", "batch-1", IrrigationKind::Planned, d(2024, 3, 1), None);
        archived.archived = true;
        let events = vec![archived];

        assert_eq!(
            engine.state_for_batch("batch-1", &events, today),
            DelayLevel::Normal
        );
    }

    #[test]
    fn test_events_for_batch_descending_by_effective_date() {
        let engine = IrrigationEngine::new();
        let events = vec![
            create_test_event("i1", "batch-1", IrrigationKind::Planned, d(2024, 3, 5), None),
            create_test_event(
                "i2",
                "batch-1",
                IrrigationKind::Executed,
                d(2024, 3, 1),
                Some(d(2024, 3, 8)),
            ),
            create_test_event("i3", "batch-1", IrrigationKind::Planned, d(2024, 2, 18), None),
        ];

        let timeline = engine.events_for_batch("batch-1", &events);
        let ids: Vec<&str> = timeline.iter().map(|e| e.id.as_str()).collect();
        // i2 有效日期 03-08 (执行日期优先于计划日期)
        assert_eq!(ids, vec!["i2", "i1", "i3"]);
    }

    #[test]
    fn test_next_watering_date_from_last_effective() {
        let engine = IrrigationEngine::new();
        let events = vec![
            create_test_event(
                "i1",
                "batch-1",
                IrrigationKind::Executed,
                d(2024, 2, 25),
                Some(d(2024, 2, 25)),
            ),
            create_test_event("i2", "batch-1", IrrigationKind::Planned, d(2024, 3, 8), None),
        ];

        assert_eq!(
            engine.next_watering_date("batch-1", &events, 7),
            Some(d(2024, 3, 15))
        );
        assert_eq!(engine.next_watering_date("batch-9", &events, 7), None);
    }
}
