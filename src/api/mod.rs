// ==========================================
// 智慧农场记录与监测系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供前端/宿主应用调用
// ==========================================

pub mod error;
pub mod dashboard_api;
pub mod import_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use dashboard_api::{BatchDetail, DashboardApi, DashboardSummary, NoteGroupsView};
pub use import_api::ImportApi;
