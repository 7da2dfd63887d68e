// ==========================================
// 发票与报表自动生成系统 - 单据生成 Trait
// ==========================================
// 职责: 定义批量单据生成接口（不包含实现）
// ==========================================

use crate::domain::sheet::{Sheet, SheetVerdicts};
use crate::generator::error::GenerateResult;
use crate::generator::result::{BatchOutcome, InvoiceGenerationResult, ReportGenerationResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// DocumentGenerator Trait
// ==========================================
// 用途: 单据生成主接口
// 实现者: DocumentGeneratorImpl
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// 按裁定批量生成发票
    ///
    /// # 参数
    /// - verdicts: 校验裁定集合
    ///
    /// # 返回
    /// - Ok(InvoiceGenerationResult): 客户邮箱→单据路径映射 + 跳过清单
    /// - Err: Orders/Clients 前置数据缺失（整体中止）
    ///
    /// # 说明
    /// - 单订单失败（关联/渲染）记录后跳过,批次继续
    /// - 各订单的渲染与写出并发执行
    async fn generate_invoices(
        &self,
        verdicts: &SheetVerdicts,
    ) -> GenerateResult<InvoiceGenerationResult>;

    /// 按裁定生成汇总报表
    ///
    /// # 参数
    /// - verdicts: 校验裁定集合
    ///
    /// # 返回
    /// - Ok(ReportGenerationResult): 报告期 + 报表路径
    /// - Err: Orders/Invoices/Clients 前置数据缺失（整体中止,无部分报表）
    async fn generate_report(
        &self,
        verdicts: &SheetVerdicts,
    ) -> GenerateResult<ReportGenerationResult>;

    /// 一次性批量运行（校验 → 发票 → 报表）
    ///
    /// # 参数
    /// - sheets: 载入的表单集合
    ///
    /// # 返回
    /// - BatchOutcome: 全部裁定 + 发票/报表结果;整体性失败
    ///   被回收为结果内的失败记录,不中断另一路生成
    async fn run_batch(&self, sheets: &HashMap<String, Sheet>) -> BatchOutcome;

    /// 从文件路径一次性批量运行
    ///
    /// # 参数
    /// - path: 工作簿文件（.xlsx/.xls）或 CSV 目录路径
    ///
    /// # 返回
    /// - Ok(BatchOutcome): 同 run_batch
    /// - Err: 载入失败（文件缺失/格式不支持/解析错误）
    async fn run_from_path(&self, path: &Path) -> GenerateResult<BatchOutcome>;
}
