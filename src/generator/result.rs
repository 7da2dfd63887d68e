// ==========================================
// 发票与报表自动生成系统 - 生成结果结构
// ==========================================
// 职责: 批次产出与失败记录的汇总载体
// ==========================================

use crate::composer::SkippedOrder;
use crate::domain::sheet::SheetVerdicts;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

// ==========================================
// InvoiceGenerationResult - 发票批次结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceGenerationResult {
    pub documents: HashMap<String, PathBuf>, // 客户邮箱 → 发票路径
    pub skipped: Vec<SkippedOrder>,          // 跳过清单（含原因）
}

impl InvoiceGenerationResult {
    pub fn generated_count(&self) -> usize {
        self.documents.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

// ==========================================
// ReportGenerationResult - 报表结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ReportGenerationResult {
    pub report_period: String, // 报告期标签
    pub path: PathBuf,         // 报表落盘路径
}

// ==========================================
// BatchOutcome - 批次整体结果
// ==========================================
// 整体性失败（前置缺失等）回收为文本记录,两路生成互不拖累
#[derive(Debug, Serialize)]
pub struct BatchOutcome {
    pub batch_id: String,                           // 批次标识（uuid,日志关联用）
    pub verdicts: SheetVerdicts,                    // 全部表单裁定（错误/警告始终可见）
    pub invoices: Option<InvoiceGenerationResult>,  // 发票结果（整体中止时为 None）
    pub report: Option<ReportGenerationResult>,     // 报表结果（整体中止时为 None）
    pub failures: Vec<String>,                      // 整体性失败记录
}
