// ==========================================
// 发票与报表自动生成系统 - 校验规则实现
// ==========================================
// 职责: 单条规则 = 单个函数,输出消息列表
// 粒度: 邮箱/数值为表级单条消息,日期为字段级单条消息
// ==========================================

use crate::domain::records::columns;
use crate::domain::sheet::{CellValue, Row, Sheet};
use regex::Regex;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// 取单元格,缺失键按空值处理
fn cell<'a>(row: &'a Row, column: &str) -> &'a CellValue {
    row.get(column).unwrap_or(&EMPTY_CELL)
}

/// 规则 1: 必填字段检查（所有表单）
///
/// 缺失列合并为一条错误,逗号连接列名
pub fn check_required_fields(sheet: &Sheet, required_fields: &[String]) -> Vec<String> {
    let mut errors = Vec::new();

    let missing_fields: Vec<&str> = required_fields
        .iter()
        .filter(|field| !sheet.has_column(field))
        .map(|field| field.as_str())
        .collect();

    if !missing_fields.is_empty() {
        errors.push(format!("缺少必填字段: {}", missing_fields.join(", ")));
    }

    errors
}

/// 规则 2: 邮箱格式检查（仅 Clients）
///
/// 任意行邮箱不匹配规范形态（含空值）→ 整表一条警告
pub fn check_email_format(sheet: &Sheet, email_pattern: &Regex) -> Vec<String> {
    let mut warnings = Vec::new();

    if !sheet.has_column(columns::EMAIL) {
        return warnings;
    }

    let has_invalid = sheet.rows.iter().any(|row| {
        let value = cell(row, columns::EMAIL).to_display_string();
        !email_pattern.is_match(&value)
    });

    if has_invalid {
        warnings.push("发现无效邮箱格式".to_string());
    }

    warnings
}

/// 规则 3: 数值类型检查（仅 Products 的单价列）
///
/// 列存在且存在不可数值化的非空单元格 → 一条错误,点名字段
/// 空单元格不破坏数值一致性
pub fn check_numeric_field(sheet: &Sheet, field: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if !sheet.has_column(field) {
        return errors;
    }

    let uniformly_numeric = sheet.rows.iter().all(|row| {
        let value = cell(row, field);
        value.is_empty() || value.as_number().is_some()
    });

    if !uniformly_numeric {
        errors.push(format!("{} 应为数值类型", field));
    }

    errors
}

/// 规则 4: 日期字段检查（Orders/Invoices 的指定日期列）
///
/// 每个存在的字段: 任意行转换失败（含空值）→ 该字段一条错误
pub fn check_date_fields(sheet: &Sheet, fields: &[&str]) -> Vec<String> {
    let mut errors = Vec::new();

    for field in fields {
        if !sheet.has_column(field) {
            continue;
        }

        let has_invalid = sheet
            .rows
            .iter()
            .any(|row| cell(row, field).coerce_date().is_none());

        if has_invalid {
            errors.push(format!("{} 日期格式无效", field));
        }
    }

    errors
}

/// 规则 5: 缺失值检查（所有表单,不受前序错误影响）
///
/// 每个存在的必填字段: 任意行为空 → 该字段一条警告
pub fn check_missing_values(sheet: &Sheet, required_fields: &[String]) -> Vec<String> {
    let mut warnings = Vec::new();

    for field in required_fields {
        if !sheet.has_column(field) {
            continue;
        }

        let has_missing = sheet.rows.iter().any(|row| cell(row, field).is_empty());

        if has_missing {
            warnings.push(format!("{} 存在缺失值", field));
        }
    }

    warnings
}
