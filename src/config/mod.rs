// ==========================================
// 智慧农场记录与监测系统 - 配置层
// ==========================================
// 职责: 系统配置管理
// 存储: JSON key-value 配置文件
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, get_default_config_path, ConfigManager};
