// ==========================================
// 发票与报表自动生成系统 - 校验引擎
// ==========================================
// 职责: 按固定规则顺序裁定每张表单,输出独立裁定
// 闸门: 零错误 ⇔ Clean,警告不阻断
// ==========================================

use crate::domain::records::columns;
use crate::domain::sheet::{Sheet, SheetVerdict, SheetVerdicts, Validated};
use crate::domain::types::SheetKind;
use crate::validator::rules;
use crate::validator::schema::SchemaRegistry;
use regex::Regex;
use std::collections::HashMap;

/// 规范邮箱形态: local@domain.tld
pub const EMAIL_PATTERN: &str = r"^[\w.-]+@[\w.-]+\.\w+$";

// ==========================================
// SheetValidator - 校验引擎
// ==========================================
pub struct SheetValidator {
    registry: SchemaRegistry,
    email_pattern: Regex,
}

impl SheetValidator {
    /// 以模式注册表构造校验引擎
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            // 模式为编译期常量,失败属于程序缺陷
            email_pattern: Regex::new(EMAIL_PATTERN).expect("邮箱正则编译失败"),
        }
    }

    /// 裁定单张表单
    ///
    /// # 规则顺序（固定）
    /// 1. 必填字段检查（所有表单）
    /// 2. 邮箱格式检查（仅 Clients,警告）
    /// 3. 数值类型检查（仅 Products 单价列）
    /// 4. 日期字段检查（Orders: Order Date; Invoices: Invoice Date/Due Date）
    /// 5. 缺失值检查（所有表单,警告,不受前序错误影响）
    pub fn validate_sheet(&self, sheet: &Sheet) -> SheetVerdict {
        let required_fields = self.registry.required_fields(&sheet.name);
        let kind = SheetKind::from_name(&sheet.name);

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // 规则 1: 必填字段
        errors.extend(rules::check_required_fields(sheet, required_fields));

        // 规则 2: 邮箱格式（仅客户表）
        if kind == SheetKind::Clients {
            warnings.extend(rules::check_email_format(sheet, &self.email_pattern));
        }

        // 规则 3: 数值类型（仅产品表单价列）
        if kind == SheetKind::Products {
            errors.extend(rules::check_numeric_field(sheet, columns::UNIT_PRICE));
        }

        // 规则 4: 日期字段
        match kind {
            SheetKind::Orders => {
                errors.extend(rules::check_date_fields(sheet, &[columns::ORDER_DATE]));
            }
            SheetKind::Invoices => {
                errors.extend(rules::check_date_fields(
                    sheet,
                    &[columns::INVOICE_DATE, columns::DUE_DATE],
                ));
            }
            _ => {}
        }

        // 规则 5: 缺失值（始终执行）
        warnings.extend(rules::check_missing_values(sheet, required_fields));

        tracing::debug!(
            "表单 {} 裁定完成: {} 错误, {} 警告",
            sheet.name,
            errors.len(),
            warnings.len()
        );

        // 闸门: 零错误才放行数据
        let validated = if errors.is_empty() {
            Validated::Clean {
                rows: sheet.rows.clone(),
                warnings,
            }
        } else {
            Validated::Rejected { errors, warnings }
        };

        SheetVerdict {
            sheet_name: sheet.name.clone(),
            validated,
        }
    }

    /// 裁定全部表单（各表独立,互不影响）
    pub fn validate_sheets(&self, sheets: &HashMap<String, Sheet>) -> SheetVerdicts {
        sheets
            .iter()
            .map(|(name, sheet)| (name.clone(), self.validate_sheet(sheet)))
            .collect()
    }
}

impl Default for SheetValidator {
    fn default() -> Self {
        Self::new(SchemaRegistry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sheet::{CellValue, Row};

    fn clients_sheet(rows: Vec<Row>) -> Sheet {
        Sheet::new(
            "Clients",
            vec![
                "Client ID".to_string(),
                "Client Name".to_string(),
                "Contact Person".to_string(),
                "Email".to_string(),
                "Address".to_string(),
            ],
            rows,
        )
    }

    fn full_client_row(id: &str, email: &str) -> Row {
        let mut row = Row::new();
        row.insert("Client ID".to_string(), CellValue::Text(id.to_string()));
        row.insert(
            "Client Name".to_string(),
            CellValue::Text("Acme Corp".to_string()),
        );
        row.insert(
            "Contact Person".to_string(),
            CellValue::Text("Jane Doe".to_string()),
        );
        row.insert("Email".to_string(), CellValue::Text(email.to_string()));
        row.insert(
            "Address".to_string(),
            CellValue::Text("5 Main St".to_string()),
        );
        row
    }

    #[test]
    fn test_clean_iff_no_errors() {
        let validator = SheetValidator::default();
        let sheet = clients_sheet(vec![
            full_client_row("C001", "john@x.com"),
            full_client_row("C002", "not-an-email"),
        ]);

        let verdict = validator.validate_sheet(&sheet);

        // 仅有警告: 数据仍放行
        assert!(verdict.errors().is_empty());
        assert_eq!(verdict.warnings().len(), 1);
        assert_eq!(verdict.clean_rows().map(|rows| rows.len()), Some(2));
    }

    #[test]
    fn test_missing_columns_block_clean_data() {
        let validator = SheetValidator::default();
        let sheet = Sheet::new(
            "Clients",
            vec!["Client ID".to_string()],
            vec![],
        );

        let verdict = validator.validate_sheet(&sheet);

        assert_eq!(verdict.errors().len(), 1);
        assert!(verdict.errors()[0].contains("Client Name"));
        assert!(verdict.clean_rows().is_none());
    }

    #[test]
    fn test_validation_idempotent() {
        let validator = SheetValidator::default();
        let sheet = clients_sheet(vec![full_client_row("C001", "bad-email")]);

        let first = validator.validate_sheet(&sheet);
        let second = validator.validate_sheet(&sheet);

        assert_eq!(first.errors(), second.errors());
        assert_eq!(first.warnings(), second.warnings());
        assert_eq!(
            first.clean_rows().map(|r| r.len()),
            second.clean_rows().map(|r| r.len())
        );
    }

    #[test]
    fn test_unrecognized_sheet_validates_clean() {
        let validator = SheetValidator::default();
        let sheet = Sheet::new(
            "Suppliers",
            vec!["Supplier ID".to_string()],
            vec![],
        );

        let verdict = validator.validate_sheet(&sheet);

        assert!(verdict.errors().is_empty());
        assert!(verdict.warnings().is_empty());
        assert!(verdict.clean_rows().is_some());
    }

    #[test]
    fn test_verdicts_independent_across_sheets() {
        let validator = SheetValidator::default();
        let mut sheets = HashMap::new();
        sheets.insert(
            "Clients".to_string(),
            clients_sheet(vec![full_client_row("C001", "john@x.com")]),
        );
        sheets.insert(
            "Products".to_string(),
            Sheet::new("Products", vec!["Product ID".to_string()], vec![]),
        );

        let verdicts = validator.validate_sheets(&sheets);

        assert!(verdicts.get("Clients").unwrap().errors().is_empty());
        assert!(!verdicts.get("Products").unwrap().errors().is_empty());
    }
}
