// ==========================================
// 智慧农场记录与监测系统 - 随记视图引擎
// ==========================================
// 职责: 批次随记时间线与四类分桶视图
// 说明: NoteKind 为封闭枚举,分桶因此是全函数,
//       不存在未知类型被静默丢弃的情况
// ==========================================

use crate::domain::event::Note;
use crate::domain::field::Archivable;
use crate::domain::types::NoteKind;

// ==========================================
// NoteGroups - 四类分桶视图
// ==========================================
#[derive(Debug, Default)]
pub struct NoteGroups<'a> {
    pub watering: Vec<&'a Note>,    // 灌溉
    pub disease: Vec<&'a Note>,     // 病害
    pub fertilizer: Vec<&'a Note>,  // 施肥
    pub observation: Vec<&'a Note>, // 观察
}

impl<'a> NoteGroups<'a> {
    /// 全部分桶的总条数
    pub fn total(&self) -> usize {
        self.watering.len() + self.disease.len() + self.fertilizer.len() + self.observation.len()
    }
}

// ==========================================
// NoteEngine - 随记视图引擎
// ==========================================
pub struct NoteEngine {
    // 无状态引擎
}

impl NoteEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 批次随记时间线: 活跃随记按日期降序
    pub fn notes_for_batch<'a>(&self, crop_batch_id: &str, notes: &'a [Note]) -> Vec<&'a Note> {
        let mut batch_notes: Vec<&Note> = notes
            .iter()
            .filter(|n| n.crop_batch_id == crop_batch_id && n.is_active())
            .collect();

        batch_notes.sort_by(|a, b| b.date.cmp(&a.date));

        batch_notes
    }

    /// 按类型分桶 (输入顺序在桶内保持)
    ///
    /// 调用方负责先做活跃/批次过滤,本方法不再过滤。
    pub fn group_by_kind<'a>(&self, notes: &[&'a Note]) -> NoteGroups<'a> {
        let mut groups = NoteGroups::default();

        for note in notes {
            match note.kind {
                NoteKind::Watering => groups.watering.push(note),
                NoteKind::Disease => groups.disease.push(note),
                NoteKind::Fertilizer => groups.fertilizer.push(note),
                NoteKind::Observation => groups.observation.push(note),
            }
        }

        groups
    }
}

impl Default for NoteEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn create_test_note(id: &str, batch_id: &str, kind: NoteKind, date: NaiveDate) -> Note {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        Note {
            id: id.to_string(),
            crop_batch_id: batch_id.to_string(),
            kind,
            text: "test".to_string(),
            date,
            tags: vec![],
            linked_event_id: None,
            archived: false,
            archived_at: None,
            owner_wallet: "0x1234".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_notes_for_batch_descending_and_active_only() {
        let engine = NoteEngine::new();
        let mut archived = create_test_note("n3", "batch-1", NoteKind::Observation, d(2024, 3, 5));
        archived.archived = true;
        let notes = vec![
            create_test_note("n1", "batch-1", NoteKind::Watering, d(2024, 2, 19)),
            create_test_note("n2", "batch-1", NoteKind::Disease, d(2024, 2, 25)),
            archived,
            create_test_note("n4", "batch-2", NoteKind::Fertilizer, d(2024, 3, 2)),
        ];

        let timeline = engine.notes_for_batch("batch-1", &notes);
        let ids: Vec<&str> = timeline.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n2", "n1"]);
    }

    #[test]
    fn test_group_by_kind_covers_all_buckets() {
        let engine = NoteEngine::new();
        let notes = vec![
            create_test_note("n1", "batch-1", NoteKind::Watering, d(2024, 2, 19)),
            create_test_note("n2", "batch-1", NoteKind::Disease, d(2024, 2, 20)),
            create_test_note("n3", "batch-1", NoteKind::Fertilizer, d(2024, 3, 2)),
            create_test_note("n4", "batch-1", NoteKind::Observation, d(2024, 2, 25)),
            create_test_note("n5", "batch-1", NoteKind::Watering, d(2024, 2, 25)),
        ];
        let refs: Vec<&Note> = notes.iter().collect();

        let groups = engine.group_by_kind(&refs);
        assert_eq!(groups.watering.len(), 2);
        assert_eq!(groups.disease.len(), 1);
        assert_eq!(groups.fertilizer.len(), 1);
        assert_eq!(groups.observation.len(), 1);
        assert_eq!(groups.total(), notes.len());
    }
}
