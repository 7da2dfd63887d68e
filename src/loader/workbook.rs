// ==========================================
// 发票与报表自动生成系统 - 表单载入器实现
// ==========================================
// 职责: 外部表格文件 → 内存表单集合
// 支持: Excel 工作簿 (.xlsx/.xls) / CSV 目录（每文件一表）
// ==========================================

use crate::domain::sheet::{CellValue, Row, Sheet};
use crate::loader::error::{LoadError, LoadResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// SheetSource Trait
// ==========================================
// 用途: 表单载入接口（输入边界）
// 实现者: ExcelWorkbookLoader, CsvDirectoryLoader
pub trait SheetSource: Send + Sync {
    /// 载入路径下的全部表单
    ///
    /// # 参数
    /// - path: 工作簿文件或 CSV 目录路径
    ///
    /// # 返回
    /// - Ok(HashMap<表单名, Sheet>): 载入的表单集合
    /// - Err: 文件读取错误、格式错误
    fn load_sheets(&self, path: &Path) -> LoadResult<HashMap<String, Sheet>>;
}

/// Excel 单元格 → 类型化单元格取值
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Text(v.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|ndt| CellValue::Date(ndt.date()))
            .unwrap_or(CellValue::Empty),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

/// CSV 字段 → 类型化单元格取值（数值推断）
fn infer_cell(value: &str) -> CellValue {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        CellValue::Empty
    } else if let Ok(number) = trimmed.parse::<f64>() {
        CellValue::Number(number)
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

// ==========================================
// ExcelWorkbookLoader 实现
// ==========================================
// 一个工作簿,每工作表一张表单
pub struct ExcelWorkbookLoader;

impl SheetSource for ExcelWorkbookLoader {
    fn load_sheets(&self, path: &Path) -> LoadResult<HashMap<String, Sheet>> {
        // 检查文件存在
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "xlsx" && ext != "xls" {
            return Err(LoadError::UnsupportedFormat(ext.to_string()));
        }

        // 打开工作簿
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| LoadError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(LoadError::EmptyWorkbook(path.display().to_string()));
        }

        let mut sheets = HashMap::new();
        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| LoadError::ExcelParseError(e.to_string()))?;

            // 提取表头（第一行）
            let mut rows_iter = range.rows();
            let header_row = rows_iter.next().ok_or_else(|| LoadError::MissingHeaderRow {
                sheet: sheet_name.clone(),
            })?;

            let columns: Vec<String> = header_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();

            // 读取数据行
            let mut rows: Vec<Row> = Vec::new();
            for data_row in rows_iter {
                let mut row: Row = HashMap::new();
                for (col_idx, cell) in data_row.iter().enumerate() {
                    if let Some(column) = columns.get(col_idx) {
                        if !column.is_empty() {
                            row.insert(column.clone(), convert_cell(cell));
                        }
                    }
                }

                // 跳过完全空白的行
                if row.values().all(|v| v.is_empty()) {
                    continue;
                }

                rows.push(row);
            }

            tracing::debug!(
                "载入表单 {} （{} 列, {} 行）",
                sheet_name,
                columns.len(),
                rows.len()
            );
            sheets.insert(sheet_name.clone(), Sheet::new(sheet_name, columns, rows));
        }

        Ok(sheets)
    }
}

// ==========================================
// CsvDirectoryLoader 实现
// ==========================================
// 一个目录,每个 .csv 文件一张表单（表单名 = 文件名主干）
pub struct CsvDirectoryLoader;

impl CsvDirectoryLoader {
    fn load_csv_sheet(&self, path: &Path, sheet_name: &str) -> LoadResult<Sheet> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows: Vec<Row> = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row: Row = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(column) = columns.get(col_idx) {
                    if !column.is_empty() {
                        row.insert(column.clone(), infer_cell(value));
                    }
                }
            }

            // 跳过完全空白的行
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(Sheet::new(sheet_name, columns, rows))
    }
}

impl SheetSource for CsvDirectoryLoader {
    fn load_sheets(&self, path: &Path) -> LoadResult<HashMap<String, Sheet>> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        if !path.is_dir() {
            return Err(LoadError::UnsupportedFormat(path.display().to_string()));
        }

        let mut sheets = HashMap::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let file_path = entry.path();

            let is_csv = file_path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("csv"))
                .unwrap_or(false);
            if !is_csv {
                continue;
            }

            let sheet_name = file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();

            let sheet = self.load_csv_sheet(&file_path, &sheet_name)?;
            sheets.insert(sheet_name, sheet);
        }

        Ok(sheets)
    }
}

// ==========================================
// 通用表单载入器（根据路径形态自动选择）
// ==========================================
pub struct UniversalSheetLoader;

impl SheetSource for UniversalSheetLoader {
    fn load_sheets(&self, path: &Path) -> LoadResult<HashMap<String, Sheet>> {
        if path.is_dir() {
            return CsvDirectoryLoader.load_sheets(path);
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "xlsx" | "xls" => ExcelWorkbookLoader.load_sheets(path),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }
}
