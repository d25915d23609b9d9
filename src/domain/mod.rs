// ==========================================
// 智慧农场记录与监测系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含派生计算逻辑,不含导入流程逻辑
// ==========================================

pub mod event;
pub mod field;
pub mod import;
pub mod types;

// 重导出核心类型
pub use event::{IrrigationEvent, Note, StatusEntry};
pub use field::{Archivable, CropBatch, Field};
pub use import::{
    AuditEntry, AuditTrail, CreatedEntity, ImportRecord, ImportReport, RecordOutcome,
};
pub use types::{
    ChangedBy, CropStatus, DelayLevel, ImportEventType, IrrigationKind, NoteKind,
};
