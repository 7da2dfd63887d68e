// ==========================================
// 发票与报表自动生成系统 - 表单数据模型
// ==========================================
// 职责: 表单、单元格、校验裁定的数据结构
// 红线: 表单载入后不可变,下游只读
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// CellValue - 单元格取值
// ==========================================
// 表单单元格的类型化标量: 文本 / 数值 / 日期 / 空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Empty,
}

impl CellValue {
    /// 空值判定（Empty 或纯空白文本）
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 数值读取（文本数值亦可解析）
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// 日期强制转换
    ///
    /// - Date 单元格直接通过
    /// - 文本按 YYYY-MM-DD / YYYY/MM/DD / YYYYMMDD 依次尝试
    /// - 数值与空单元格视为转换失败
    pub fn coerce_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            CellValue::Text(s) => {
                let value = s.trim();
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"))
                    .or_else(|_| NaiveDate::parse_from_str(value, "%Y%m%d"))
                    .ok()
            }
            _ => None,
        }
    }

    /// 展示用文本（整数值不带小数尾巴）
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    format!("{}", *v as i64)
                } else {
                    format!("{}", v)
                }
            }
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

/// 行记录: 列名 → 单元格取值
pub type Row = HashMap<String, CellValue>;

// ==========================================
// Sheet - 表单
// ==========================================
// 用途: 载入层写入,校验/组装层只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,         // 表单名称（Clients/Products/Orders/Invoices/...）
    pub columns: Vec<String>, // 列名（保持源顺序）
    pub rows: Vec<Row>,       // 数据行
}

impl Sheet {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

// ==========================================
// Validated - 校验结果（带标签）
// ==========================================
// Clean 与零错误互为充要条件;仅有警告的表单仍为 Clean
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Validated {
    /// 校验通过,数据可供下游组装消费
    Clean {
        rows: Vec<Row>,
        warnings: Vec<String>,
    },
    /// 存在错误,数据对下游不可用
    Rejected {
        errors: Vec<String>,
        warnings: Vec<String>,
    },
}

impl Validated {
    pub fn is_clean(&self) -> bool {
        matches!(self, Validated::Clean { .. })
    }

    /// 错误列表（Clean 时为空）
    pub fn errors(&self) -> &[String] {
        match self {
            Validated::Clean { .. } => &[],
            Validated::Rejected { errors, .. } => errors,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            Validated::Clean { warnings, .. } => warnings,
            Validated::Rejected { warnings, .. } => warnings,
        }
    }

    /// 可用数据行（Rejected 时为 None,这是下游消费的唯一闸门）
    pub fn clean_rows(&self) -> Option<&[Row]> {
        match self {
            Validated::Clean { rows, .. } => Some(rows),
            Validated::Rejected { .. } => None,
        }
    }
}

// ==========================================
// SheetVerdict - 单表裁定
// ==========================================
// 校验引擎输出,每表一份,彼此独立
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetVerdict {
    pub sheet_name: String,  // 表单名称
    pub validated: Validated, // 校验结果
}

impl SheetVerdict {
    pub fn errors(&self) -> &[String] {
        self.validated.errors()
    }

    pub fn warnings(&self) -> &[String] {
        self.validated.warnings()
    }

    pub fn clean_rows(&self) -> Option<&[Row]> {
        self.validated.clean_rows()
    }
}

/// 全部表单的裁定集合: 表单名 → 裁定
pub type SheetVerdicts = HashMap<String, SheetVerdict>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::Text("   ".to_string()).is_empty());
        assert!(!CellValue::Text("x".to_string()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_cell_value_coerce_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        assert_eq!(
            CellValue::Text("2024-08-15".to_string()).coerce_date(),
            Some(expected)
        );
        assert_eq!(
            CellValue::Text("2024/08/15".to_string()).coerce_date(),
            Some(expected)
        );
        assert_eq!(
            CellValue::Text("20240815".to_string()).coerce_date(),
            Some(expected)
        );
        assert_eq!(CellValue::Date(expected).coerce_date(), Some(expected));
    }

    #[test]
    fn test_cell_value_coerce_date_failures() {
        assert_eq!(CellValue::Text("not-a-date".to_string()).coerce_date(), None);
        assert_eq!(CellValue::Number(20240815.0).coerce_date(), None);
        assert_eq!(CellValue::Empty.coerce_date(), None);
    }

    #[test]
    fn test_cell_value_display_integer_number() {
        assert_eq!(CellValue::Number(1001.0).to_display_string(), "1001");
        assert_eq!(CellValue::Number(12.5).to_display_string(), "12.5");
    }

    #[test]
    fn test_validated_gate() {
        let clean = Validated::Clean {
            rows: vec![],
            warnings: vec!["w".to_string()],
        };
        assert!(clean.is_clean());
        assert!(clean.clean_rows().is_some());
        assert!(clean.errors().is_empty());

        let rejected = Validated::Rejected {
            errors: vec!["e".to_string()],
            warnings: vec![],
        };
        assert!(!rejected.is_clean());
        assert!(rejected.clean_rows().is_none());
        assert_eq!(rejected.errors().len(), 1);
    }
}
