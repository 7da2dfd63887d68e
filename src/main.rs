// ==========================================
// 发票与报表自动生成系统 - 主入口
// ==========================================
// 一次性批量运行: 载入工作簿 → 校验 → 发票/报表生成
//
// 用法:
//   invoice-report-system <workbook.xlsx | csv目录> [config.json]
// ==========================================

use invoice_report_system::generator::{DocumentGenerator, DocumentGeneratorImpl};
use invoice_report_system::{logging, GeneratorConfig};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", invoice_report_system::APP_NAME);
    tracing::info!("系统版本: {}", invoice_report_system::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let input_path = PathBuf::from(
        args.next()
            .ok_or("缺少输入路径（工作簿文件或 CSV 目录）")?,
    );

    // 可选配置文件,缺省用默认配置
    let config = match args.next() {
        Some(config_path) => GeneratorConfig::from_json_file(&PathBuf::from(config_path))?,
        None => GeneratorConfig::default(),
    };

    tracing::info!("输入: {}", input_path.display());
    tracing::info!("发票输出目录: {}", config.invoice_output_dir.display());
    tracing::info!("报表输出目录: {}", config.report_output_dir.display());

    // 载入并运行批次
    let generator = DocumentGeneratorImpl::from_config(config)?;
    let outcome = generator.run_from_path(&input_path).await?;

    // 结果摘要
    if let Some(invoices) = &outcome.invoices {
        tracing::info!(
            "发票: {} 份生成, {} 单跳过",
            invoices.generated_count(),
            invoices.skipped_count()
        );
        for skipped in &invoices.skipped {
            tracing::warn!("跳过订单 {}: {}", skipped.order_id, skipped.reason);
        }
    }
    if let Some(report) = &outcome.report {
        tracing::info!("报表 ({}): {}", report.report_period, report.path.display());
    }
    for failure in &outcome.failures {
        tracing::error!("{}", failure);
    }

    Ok(())
}
