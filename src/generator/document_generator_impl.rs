// ==========================================
// 发票与报表自动生成系统 - 单据生成实现
// ==========================================
// 职责: 校验 → 组装 → 渲染 → 写出 的批量编排
// 失败语义: 单订单失败跳过,前置缺失整体中止
// ==========================================

use crate::composer::{
    build_invoice_contexts, build_report_context, compose_invoice, compose_report, SkippedOrder,
};
use crate::config::GeneratorConfig;
use crate::domain::sheet::{Sheet, SheetVerdicts};
use crate::generator::document_generator_trait::DocumentGenerator;
use crate::generator::error::{GenerateError, GenerateResult};
use crate::generator::result::{BatchOutcome, InvoiceGenerationResult, ReportGenerationResult};
use crate::loader::{SheetSource, UniversalSheetLoader};
use crate::renderer::{DocumentRenderer, TeraDocumentRenderer};
use crate::validator::SheetValidator;
use async_trait::async_trait;
use futures::future::join_all;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// DocumentGeneratorImpl - 生成管线
// ==========================================
pub struct DocumentGeneratorImpl {
    config: GeneratorConfig,
    validator: SheetValidator,
    renderer: Arc<dyn DocumentRenderer>,
}

impl DocumentGeneratorImpl {
    /// 以配置与渲染器构造生成管线
    pub fn new(config: GeneratorConfig, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self {
            config,
            validator: SheetValidator::default(),
            renderer,
        }
    }

    /// 便捷构造: 按配置装配 Tera 渲染器
    pub fn from_config(config: GeneratorConfig) -> GenerateResult<Self> {
        let renderer = TeraDocumentRenderer::new(
            &config.template_dir,
            config.invoice_output_dir.clone(),
            config.report_output_dir.clone(),
        )?;

        Ok(Self::new(config, Arc::new(renderer)))
    }
}

#[async_trait]
impl DocumentGenerator for DocumentGeneratorImpl {
    async fn generate_invoices(
        &self,
        verdicts: &SheetVerdicts,
    ) -> GenerateResult<InvoiceGenerationResult> {
        // 阶段 1: 跨表关联,组装上下文（前置缺失在此中止）
        let batch = build_invoice_contexts(verdicts)?;
        let mut skipped = batch.skipped;

        // 阶段 2: 逐单渲染与写出,并发执行
        let render_futures = batch.contexts.iter().map(|context| {
            let renderer = Arc::clone(&self.renderer);
            async move {
                let request = compose_invoice(context)?;
                let bytes = renderer.render(request.kind.template_id(), &request.context)?;
                let path = renderer
                    .persist(request.kind, &request.output_id, &bytes)
                    .await?;
                Ok::<_, GenerateError>((context.client_email.clone(), path))
            }
        });

        let mut documents = HashMap::new();
        for (context, result) in batch.contexts.iter().zip(join_all(render_futures).await) {
            match result {
                Ok((client_email, path)) => {
                    documents.insert(client_email, path);
                }
                // 渲染/写出失败同样只影响该订单
                Err(e) => {
                    tracing::warn!("订单 {} 单据渲染跳过: {}", context.invoice_id, e);
                    skipped.push(SkippedOrder {
                        order_id: context.invoice_id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "发票批次完成: {} 份生成, {} 单跳过",
            documents.len(),
            skipped.len()
        );

        Ok(InvoiceGenerationResult { documents, skipped })
    }

    async fn generate_report(
        &self,
        verdicts: &SheetVerdicts,
    ) -> GenerateResult<ReportGenerationResult> {
        let report_period = self.config.resolved_report_period();

        let context =
            build_report_context(verdicts, &report_period, self.config.top_clients_limit)?;
        let request = compose_report(&context)?;

        let bytes = self
            .renderer
            .render(request.kind.template_id(), &request.context)?;
        let path = self
            .renderer
            .persist(request.kind, &request.output_id, &bytes)
            .await?;

        tracing::info!("报表生成完成: {}", path.display());

        Ok(ReportGenerationResult {
            report_period,
            path,
        })
    }

    async fn run_batch(&self, sheets: &HashMap<String, Sheet>) -> BatchOutcome {
        let batch_id = Uuid::new_v4().to_string();
        tracing::info!("批次 {} 开始: {} 张表单", batch_id, sheets.len());

        // 阶段 0: 全表校验,裁定彼此独立
        let verdicts = self.validator.validate_sheets(sheets);
        for verdict in verdicts.values() {
            if !verdict.errors().is_empty() {
                tracing::warn!(
                    "表单 {} 被拒: {}",
                    verdict.sheet_name,
                    verdict.errors().join("; ")
                );
            }
            for warning in verdict.warnings() {
                tracing::warn!("表单 {} 警告: {}", verdict.sheet_name, warning);
            }
        }

        let mut failures = Vec::new();

        // 发票与报表两路生成互不拖累,整体性失败回收为记录
        let invoices = match self.generate_invoices(&verdicts).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!("批次 {} 发票生成中止: {}", batch_id, e);
                failures.push(format!("发票生成中止: {}", e));
                None
            }
        };

        let report = match self.generate_report(&verdicts).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!("批次 {} 报表生成中止: {}", batch_id, e);
                failures.push(format!("报表生成中止: {}", e));
                None
            }
        };

        tracing::info!("批次 {} 结束", batch_id);

        BatchOutcome {
            batch_id,
            verdicts,
            invoices,
            report,
            failures,
        }
    }

    async fn run_from_path(&self, path: &Path) -> GenerateResult<BatchOutcome> {
        let sheets = UniversalSheetLoader.load_sheets(path)?;
        tracing::info!("从 {} 载入 {} 张表单", path.display(), sheets.len());

        Ok(self.run_batch(&sheets).await)
    }
}
