// ==========================================
// 智慧农场记录与监测系统 - 核心库
// ==========================================
// 技术栈: Rust + serde + chrono + tokio
// 系统定位: 决策支持核心 (派生视图 + 导入对账)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据集 - 内存集合与活跃过滤
pub mod dataset;

// 引擎层 - 派生视图规则
pub mod engine;

// 导入层 - 外部数据对账
pub mod importer;

// 账本层 - 模拟上链保存
pub mod chain;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ChangedBy, CropStatus, DelayLevel, ImportEventType, IrrigationKind, NoteKind,
};

// 领域实体
pub use domain::{
    Archivable, AuditTrail, CreatedEntity, CropBatch, Field, ImportRecord, ImportReport,
    IrrigationEvent, Note, RecordOutcome, StatusEntry,
};

// 数据集
pub use dataset::FarmDataset;

// 引擎
pub use engine::{
    FieldBatchCount, IrrigationEngine, MetricsEngine, NoteEngine, StatusEngine,
};

// 导入对账
pub use importer::{ImportError, ImportReconciler, RecordValidator};

// 账本
pub use chain::{LedgerClient, LedgerReceipt, SimulatedLedger};

// API
pub use api::{DashboardApi, ImportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "智慧农场记录与监测系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
