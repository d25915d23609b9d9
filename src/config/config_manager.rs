// ==========================================
// 智慧农场记录与监测系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、快照
// 存储: 平台配置目录下的 JSON key-value 文件
// 说明: 缺失/非法的配置值一律退回默认值,不阻断启动
// ==========================================

use serde_json::json;
use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

/// 默认配置文件路径: <平台配置目录>/smart-farm-notes/config.json
pub fn get_default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("smart-farm-notes")
        .join("config.json")
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 从默认路径加载配置 (文件不存在时为全默认配置)
    pub fn load_default() -> Self {
        Self::load_from_path(&get_default_config_path())
    }

    /// 从指定路径加载配置
    ///
    /// 文件缺失或解析失败都不致命: 记日志并退回空配置,
    /// 后续查询全部命中默认值。
    pub fn load_from_path(path: &Path) -> Self {
        let values = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "配置文件格式错误,使用默认配置"
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { values }
    }

    /// 从内存键值对构造 (测试与嵌入场景)
    pub fn from_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 读取配置值
    fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 读取配置值,带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .map(String::from)
            .unwrap_or_else(|| default.to_string())
    }

    // ===== 灌溉推算配置 =====

    /// 灌溉间隔天数 (下次灌溉推算口径,默认 7 天)
    pub fn get_watering_interval_days(&self) -> i64 {
        let value = self.get_config_or_default(config_keys::WATERING_INTERVAL_DAYS, "7");
        value.parse::<i64>().unwrap_or_else(|_| {
            tracing::warn!(
                config_key = config_keys::WATERING_INTERVAL_DAYS,
                raw_value = %value,
                "灌溉间隔配置格式错误,使用默认值 7"
            );
            7
        })
    }

    // ===== 模拟账本配置 =====

    /// 模拟账本提交延迟 (毫秒,默认 1000)
    pub fn get_ledger_latency_ms(&self) -> u64 {
        let value = self.get_config_or_default(config_keys::LEDGER_LATENCY_MS, "1000");
        value.parse::<u64>().unwrap_or(1000)
    }

    // ===== 快照 =====

    /// 获取全部配置的快照 (JSON 格式,键排序稳定)
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let mut sorted: Vec<(&String, &String)> = self.values.iter().collect();
        sorted.sort_by_key(|(key, _)| key.clone());

        let map: serde_json::Map<String, serde_json::Value> = sorted
            .into_iter()
            .map(|(key, value)| (key.clone(), json!(value)))
            .collect();

        Ok(serde_json::to_string(&serde_json::Value::Object(map))?)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::from_values(HashMap::new())
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 灌溉推算
    pub const WATERING_INTERVAL_DAYS: &str = "watering_interval_days";

    // 模拟账本
    pub const LEDGER_LATENCY_MS: &str = "ledger_latency_ms";
}
