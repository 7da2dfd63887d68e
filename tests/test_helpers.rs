// ==========================================
// 测试辅助函数
// ==========================================
// 共享的表单/数据行工厂
// ==========================================
#![allow(dead_code)]

use invoice_report_system::{CellValue, Row, Sheet};
use std::collections::HashMap;

pub fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

pub fn number(value: f64) -> CellValue {
    CellValue::Number(value)
}

pub fn row(values: Vec<(&str, CellValue)>) -> Row {
    values
        .into_iter()
        .map(|(column, cell)| (column.to_string(), cell))
        .collect()
}

/// 客户表（全列表头）
pub fn clients_sheet(rows: Vec<Row>) -> Sheet {
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

/// 产品表（全列表头）
pub fn products_sheet(rows: Vec<Row>) -> Sheet {
    Sheet::new(
        "Products",
        vec![
            "Product ID".to_string(),
            "Product Name".to_string(),
            "Unit Price ($)".to_string(),
            "Stock Quantity".to_string(),
            "Description".to_string(),
        ],
        rows,
    )
}

/// 订单表（全列表头）
pub fn orders_sheet(rows: Vec<Row>) -> Sheet {
    Sheet::new(
        "Orders",
        vec![
            "Order ID".to_string(),
            "Client ID".to_string(),
            "Order Date".to_string(),
            "Product ID".to_string(),
            "Quantity".to_string(),
            "Total Amount ($)".to_string(),
            "Delivery Date".to_string(),
            "Status".to_string(),
        ],
        rows,
    )
}

/// 发票表（全列表头）
pub fn invoices_sheet(rows: Vec<Row>) -> Sheet {
    Sheet::new(
        "Invoices",
        vec![
            "Invoice ID".to_string(),
            "Order ID".to_string(),
            "Invoice Date".to_string(),
            "Due Date".to_string(),
            "Amount Due ($)".to_string(),
            "Paid Status".to_string(),
        ],
        rows,
    )
}

pub fn client_row(id: &str, name: &str, email: &str) -> Row {
    row(vec![
        ("Client ID", text(id)),
        ("Client Name", text(name)),
        ("Contact Person", text("Jane Doe")),
        ("Email", text(email)),
        ("Address", text("5 Main St, Springfield")),
    ])
}

pub fn product_row(id: &str, name: &str, price: CellValue) -> Row {
    row(vec![
        ("Product ID", text(id)),
        ("Product Name", text(name)),
        ("Unit Price ($)", price),
        ("Stock Quantity", number(100.0)),
        ("Description", text("Standard item")),
    ])
}

pub fn order_row(id: &str, client_id: &str, product_ids: &str, quantity: f64, total: f64) -> Row {
    row(vec![
        ("Order ID", text(id)),
        ("Client ID", text(client_id)),
        ("Order Date", text("2024-08-01")),
        ("Product ID", text(product_ids)),
        ("Quantity", number(quantity)),
        ("Total Amount ($)", number(total)),
        ("Delivery Date", text("2024-08-15")),
        ("Status", text("Shipped")),
    ])
}

pub fn invoice_row(id: &str, order_id: &str, amount_due: f64, paid_status: &str) -> Row {
    row(vec![
        ("Invoice ID", text(id)),
        ("Order ID", text(order_id)),
        ("Invoice Date", text("2024-08-02")),
        ("Due Date", text("2024-09-01")),
        ("Amount Due ($)", number(amount_due)),
        ("Paid Status", text(paid_status)),
    ])
}

/// 四表俱全、可关联的标准工作簿
pub fn full_workbook() -> HashMap<String, Sheet> {
    let mut sheets = HashMap::new();
    sheets.insert(
        "Clients".to_string(),
        clients_sheet(vec![
            client_row("C001", "Acme Corp", "jane@acme.com"),
            client_row("C002", "Globex", "sam@globex.com"),
        ]),
    );
    sheets.insert(
        "Products".to_string(),
        products_sheet(vec![
            product_row("P001", "Widget", number(10.0)),
            product_row("P002", "Gadget", number(25.0)),
        ]),
    );
    sheets.insert(
        "Orders".to_string(),
        orders_sheet(vec![
            order_row("ORD1", "C001", "P001,P002", 2.0, 70.0),
            order_row("ORD2", "C002", "P001", 3.0, 30.0),
        ]),
    );
    sheets.insert(
        "Invoices".to_string(),
        invoices_sheet(vec![
            invoice_row("INV1", "ORD1", 70.0, "Unpaid"),
            invoice_row("INV2", "ORD2", 30.0, "Paid"),
        ]),
    );
    sheets
}
