// ==========================================
// 发票与报表自动生成系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine + tera
// 系统定位: 批量校验与单据生成管线
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 表单与业务记录
pub mod domain;

// 载入层 - 外部表格
pub mod loader;

// 校验层 - 规则引擎
pub mod validator;

// 组装层 - 跨表关联与汇总
pub mod composer;

// 渲染边界 - 模板与落盘
pub mod renderer;

// 生成管线 - 批量编排
pub mod generator;

// 配置层 - 管线配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CellValue, ClientRecord, DocumentKind, InvoiceRecord, OrderRecord, PaidStatus, ProductRecord,
    Row, Sheet, SheetKind, SheetVerdict, SheetVerdicts, Validated,
};

// 载入
pub use loader::{CsvDirectoryLoader, ExcelWorkbookLoader, SheetSource, UniversalSheetLoader};

// 校验
pub use validator::{SchemaRegistry, SheetValidator};

// 组装
pub use composer::{
    build_invoice_contexts, build_report_context, ComposeError, DocumentRequest, InvoiceBatch,
    InvoiceContext, OrderItem, OrderSummary, ReportContext, SkippedOrder, TopClient,
};

// 渲染
pub use renderer::{DocumentRenderer, RenderError, TeraDocumentRenderer};

// 生成管线
pub use generator::{
    BatchOutcome, DocumentGenerator, DocumentGeneratorImpl, GenerateError,
    InvoiceGenerationResult, ReportGenerationResult,
};

// 配置
pub use config::GeneratorConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "发票与报表自动生成系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
