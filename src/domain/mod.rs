// ==========================================
// 发票与报表自动生成系统 - 领域模型层
// ==========================================
// 职责: 定义表单、业务记录、校验裁定等领域结构
// 红线: 不含载入逻辑,不含校验/组装逻辑
// ==========================================

pub mod records;
pub mod sheet;
pub mod types;

// 重导出核心类型
pub use records::{ClientRecord, InvoiceRecord, OrderRecord, ProductRecord};
pub use sheet::{CellValue, Row, Sheet, SheetVerdict, SheetVerdicts, Validated};
pub use types::{DocumentKind, PaidStatus, SheetKind};
