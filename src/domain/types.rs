// ==========================================
// 发票与报表自动生成系统 - 领域类型定义
// ==========================================
// 职责: 表单类别、单据类别、付款状态等基础枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 表单类别 (Sheet Kind)
// ==========================================
// 由表单名称派生,决定该表单适用的校验规则分支
// 未识别的表单归入 Other,按空必填字段集校验
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetKind {
    Clients,  // 客户表
    Products, // 产品表
    Orders,   // 订单表
    Invoices, // 发票表
    Other,    // 未识别表单
}

impl SheetKind {
    /// 从表单名称派生类别（精确匹配）
    pub fn from_name(name: &str) -> Self {
        match name {
            "Clients" => SheetKind::Clients,
            "Products" => SheetKind::Products,
            "Orders" => SheetKind::Orders,
            "Invoices" => SheetKind::Invoices,
            _ => SheetKind::Other,
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetKind::Clients => write!(f, "Clients"),
            SheetKind::Products => write!(f, "Products"),
            SheetKind::Orders => write!(f, "Orders"),
            SheetKind::Invoices => write!(f, "Invoices"),
            SheetKind::Other => write!(f, "Other"),
        }
    }
}

// ==========================================
// 单据类别 (Document Kind)
// ==========================================
// 决定模板选择与输出目录解析
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Invoice, // 发票单据
    Report,  // 汇总报表
}

impl DocumentKind {
    /// 渲染边界使用的模板标识
    pub fn template_id(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Report => "report",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template_id())
    }
}

// ==========================================
// 付款状态 (Paid Status)
// ==========================================
// 源字段为文本,精确匹配（区分大小写）
// 未识别取值归入 Unknown,不计入未付合计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaidStatus {
    Paid,    // 已付
    Unpaid,  // 未付
    Unknown, // 未识别
}

impl PaidStatus {
    /// 从源字段取值解析（"Paid"/"Unpaid" 精确匹配）
    pub fn from_value(value: &str) -> Self {
        match value {
            "Paid" => PaidStatus::Paid,
            "Unpaid" => PaidStatus::Unpaid,
            _ => PaidStatus::Unknown,
        }
    }
}
