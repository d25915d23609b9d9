// ==========================================
// 智慧农场记录与监测系统 - 领域类型定义
// ==========================================
// 职责: 封闭枚举类型,未知标签在反序列化边界即被拒绝
// 序列化格式: 小写字符串 (与现有 JSON 导出一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 作物状态 (Crop Status)
// ==========================================
// 优先级全序: healthy(1) < risk(2) < sick(3) < critical(4)
// 同日多条状态记录时,优先级高者视为当前状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    Healthy,  // 健康
    Risk,     // 风险
    Sick,     // 病害
    Critical, // 危急
}

impl CropStatus {
    /// 状态优先级 (数值越大越严重)
    pub fn priority(&self) -> u8 {
        match self {
            CropStatus::Healthy => 1,
            CropStatus::Risk => 2,
            CropStatus::Sick => 3,
            CropStatus::Critical => 4,
        }
    }
}

impl fmt::Display for CropStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropStatus::Healthy => write!(f, "healthy"),
            CropStatus::Risk => write!(f, "risk"),
            CropStatus::Sick => write!(f, "sick"),
            CropStatus::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 状态变更来源 (Changed By)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangedBy {
    Farmer, // 农户手工录入
    System, // 系统生成
    Import, // 批量导入
}

impl fmt::Display for ChangedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangedBy::Farmer => write!(f, "farmer"),
            ChangedBy::System => write!(f, "system"),
            ChangedBy::Import => write!(f, "import"),
        }
    }
}

// ==========================================
// 灌溉事件类型 (Irrigation Kind)
// ==========================================
// 注意: kind 与 executed_date 在历史数据中并非严格同步,
// 判断"未执行"必须同时检查两者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationKind {
    Planned,  // 计划中
    Executed, // 已执行
}

impl fmt::Display for IrrigationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrigationKind::Planned => write!(f, "planned"),
            IrrigationKind::Executed => write!(f, "executed"),
        }
    }
}

// ==========================================
// 随记类型 (Note Kind)
// ==========================================
// 封闭枚举: 四类之外的标签在反序列化时报错,
// 不会出现分组时被静默丢弃的记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Watering,    // 灌溉
    Disease,     // 病害
    Fertilizer,  // 施肥
    Observation, // 观察
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteKind::Watering => write!(f, "watering"),
            NoteKind::Disease => write!(f, "disease"),
            NoteKind::Fertilizer => write!(f, "fertilizer"),
            NoteKind::Observation => write!(f, "observation"),
        }
    }
}

// ==========================================
// 灌溉延迟等级 (Delay Level)
// ==========================================
// 顺序: Normal < Overdue < Critical
// 驱动驾驶舱告警计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayLevel {
    Normal,   // 正常 (未到期或延迟 <= 1 天)
    Overdue,  // 逾期 (延迟 2..3 天)
    Critical, // 危急 (延迟 > 3 天)
}

impl fmt::Display for DelayLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayLevel::Normal => write!(f, "normal"),
            DelayLevel::Overdue => write!(f, "overdue"),
            DelayLevel::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 导入事件类型 (Import Event Type)
// ==========================================
// 外部 JSON 记录的判别标签,结构校验通过后解析
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportEventType {
    Watering,    // 灌溉执行记录
    Observation, // 观察随记
    Problem,     // 问题上报
}

impl ImportEventType {
    /// 合法的 eventType 标签全集 (用于校验错误消息)
    pub const VALID_TAGS: [&'static str; 3] = ["watering", "observation", "problem"];

    /// 从字符串解析导入事件类型
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "watering" => Some(ImportEventType::Watering),
            "observation" => Some(ImportEventType::Observation),
            "problem" => Some(ImportEventType::Problem),
            _ => None,
        }
    }
}

impl fmt::Display for ImportEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportEventType::Watering => write!(f, "watering"),
            ImportEventType::Observation => write!(f, "observation"),
            ImportEventType::Problem => write!(f, "problem"),
        }
    }
}
