// ==========================================
// 智慧农场记录与监测系统 - 导入记录结构校验器
// ==========================================
// 职责: 逐字段结构校验,产出错误消息列表或强类型记录
// 红线: 未通过结构校验的记录不得进入解析阶段
// ==========================================

use crate::domain::import::ImportRecord;
use crate::domain::types::ImportEventType;
use chrono::NaiveDate;

/// 严格解析 YYYY-MM-DD
///
/// 先做形状检查 (4位-2位-2位的数字),再做真实日历日期检查。
/// 形状放行但日历不存在的日期 (如 2024-13-45) 同样拒绝,
/// 杜绝下游出现不可比较的日期值。
pub fn parse_strict_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

// ==========================================
// ValidRecord - 校验通过的强类型记录
// ==========================================
#[derive(Debug, Clone)]
pub struct ValidRecord<'a> {
    pub date: NaiveDate,                 // 业务日期
    pub field_name: &'a str,             // 田块名称
    pub crop_type: &'a str,              // 作物品种
    pub event_type: ImportEventType,     // 事件类型
    pub note_text: Option<&'a str>,      // 随记内容
}

// ==========================================
// RecordValidator - 结构校验器
// ==========================================
pub struct RecordValidator {
    // 无状态校验器
}

impl RecordValidator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 结构校验
    ///
    /// # 返回
    /// - Ok(ValidRecord): 全部字段就位且合法
    /// - Err(Vec<String>): 逐字段错误消息 (缺失字段在前)
    pub fn validate<'a>(&self, record: &'a ImportRecord) -> Result<ValidRecord<'a>, Vec<String>> {
        let mut errors = Vec::new();

        // 必填字段检查 (缺失或空串都算缺失)
        let date_raw = non_empty(record.date.as_deref());
        let field_name = non_empty(record.field_name.as_deref());
        let crop_type = non_empty(record.crop_type.as_deref());
        let event_type_raw = non_empty(record.event_type.as_deref());

        if date_raw.is_none() {
            errors.push("Missing required field: date".to_string());
        }
        if field_name.is_none() {
            errors.push("Missing required field: fieldName".to_string());
        }
        if crop_type.is_none() {
            errors.push("Missing required field: cropType".to_string());
        }
        if event_type_raw.is_none() {
            errors.push("Missing required field: eventType".to_string());
        }

        // 事件类型枚举检查
        let event_type = match event_type_raw {
            Some(tag) => match ImportEventType::parse(tag) {
                Some(event_type) => Some(event_type),
                None => {
                    errors.push(format!(
                        "Invalid eventType: {}. Must be one of: {}",
                        tag,
                        ImportEventType::VALID_TAGS.join(", ")
                    ));
                    None
                }
            },
            None => None,
        };

        // 日期格式检查 (严格 YYYY-MM-DD)
        let date = match date_raw {
            Some(raw) => match parse_strict_date(raw) {
                Some(date) => Some(date),
                None => {
                    errors.push(format!(
                        "Invalid date format: {}. Expected YYYY-MM-DD",
                        raw
                    ));
                    None
                }
            },
            None => None,
        };

        // 任一字段为 None 必然已记录对应错误
        match (date, field_name, crop_type, event_type) {
            (Some(date), Some(field_name), Some(crop_type), Some(event_type))
                if errors.is_empty() =>
            {
                Ok(ValidRecord {
                    date,
                    field_name,
                    crop_type,
                    event_type,
                    note_text: non_empty(record.note_text.as_deref()),
                })
            }
            _ => Err(errors),
        }
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// 空串视同缺失
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(
        date: Option<&str>,
        field_name: Option<&str>,
        crop_type: Option<&str>,
        event_type: Option<&str>,
    ) -> ImportRecord {
        ImportRecord {
            date: date.map(String::from),
            field_name: field_name.map(String::from),
            crop_type: crop_type.map(String::from),
            event_type: event_type.map(String::from),
            note_text: None,
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let validator = RecordValidator::new();
        let record = create_test_record(
            Some("2024-03-11"),
            Some("North Field"),
            Some("Wheat"),
            Some("watering"),
        );

        let valid = validator.validate(&record).unwrap();
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(valid.event_type, ImportEventType::Watering);
        assert!(valid.note_text.is_none());
    }

    #[test]
    fn test_missing_fields_reported_individually() {
        let validator = RecordValidator::new();
        let record = create_test_record(None, None, None, None);

        let errors = validator.validate(&record).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Missing required field: date",
                "Missing required field: fieldName",
                "Missing required field: cropType",
                "Missing required field: eventType",
            ]
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let validator = RecordValidator::new();
        let record = create_test_record(
            Some(""),
            Some("North Field"),
            Some("Wheat"),
            Some("watering"),
        );

        let errors = validator.validate(&record).unwrap_err();
        assert_eq!(errors, vec!["Missing required field: date"]);
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        let validator = RecordValidator::new();
        let record = create_test_record(
            Some("2024-03-11"),
            Some("North Field"),
            Some("Wheat"),
            Some("harvest"),
        );

        let errors = validator.validate(&record).unwrap_err();
        assert_eq!(
            errors,
            vec!["Invalid eventType: harvest. Must be one of: watering, observation, problem"]
        );
    }

    #[test]
    fn test_invalid_date_shapes_rejected() {
        let validator = RecordValidator::new();

        for bad in ["11-03-2024", "2024/03/11", "2024-3-11", "not-a-date"] {
            let record = create_test_record(
                Some(bad),
                Some("North Field"),
                Some("Wheat"),
                Some("watering"),
            );
            let errors = validator.validate(&record).unwrap_err();
            assert_eq!(
                errors,
                vec![format!("Invalid date format: {}. Expected YYYY-MM-DD", bad)],
                "日期 {} 应被拒绝",
                bad
            );
        }
    }

    #[test]
    fn test_calendar_impossible_date_rejected() {
        // 形状正确但日历上不存在
        assert!(parse_strict_date("2024-13-45").is_none());
        assert!(parse_strict_date("2023-02-29").is_none());
        // 闰年 2 月 29 日合法
        assert!(parse_strict_date("2024-02-29").is_some());
    }
}
