// ==========================================
// 智慧农场记录与监测系统 - 派生视图引擎层
// ==========================================
// 职责: 从原始集合派生只读视图与驾驶舱指标
// 红线: 纯函数,无 I/O,不改写输入; "当前日期"一律由调用方注入
// ==========================================

pub mod irrigation;
pub mod metrics;
pub mod notes;
pub mod ownership;
pub mod status;

// 重导出核心引擎
pub use irrigation::IrrigationEngine;
pub use metrics::{FieldBatchCount, MetricsEngine};
pub use notes::{NoteEngine, NoteGroups};
pub use ownership::Owned;
pub use status::StatusEngine;
