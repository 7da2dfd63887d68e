// ==========================================
// 组装层集成测试
// ==========================================
// 测试目标: 跨表关联、局部失败语义、汇总口径、输出标识
// ==========================================

mod test_helpers;

use invoice_report_system::composer::{
    build_invoice_contexts, build_report_context, invoice_output_id, sanitize_name,
};
use invoice_report_system::{logging, ComposeError, SheetValidator};
use test_helpers::*;

/// 校验标准工作簿并返回裁定集合
fn validated_workbook() -> invoice_report_system::SheetVerdicts {
    SheetValidator::default().validate_sheets(&full_workbook())
}

#[test]
fn test_invoice_contexts_from_clean_workbook() {
    logging::init_test();
    let verdicts = validated_workbook();

    let batch = build_invoice_contexts(&verdicts).unwrap();

    assert_eq!(batch.contexts.len(), 2);
    assert!(batch.skipped.is_empty());

    let ord1 = batch
        .contexts
        .iter()
        .find(|c| c.invoice_id == "ORD1")
        .unwrap();
    assert_eq!(ord1.client_name, "Acme Corp");
    assert_eq!(ord1.order_items.len(), 2);
    // 订单级数量应用于每个行项
    assert_eq!(ord1.order_items[0].quantity, 2.0);
    assert_eq!(ord1.order_items[1].quantity, 2.0);
    assert_eq!(ord1.total_amount_due, 70.0);
}

#[test]
fn test_unresolved_client_is_local_failure() {
    logging::init_test();
    let mut sheets = full_workbook();
    sheets.insert(
        "Orders".to_string(),
        orders_sheet(vec![
            order_row("ORD1", "C001", "P001", 2.0, 20.0),
            order_row("ORD9", "C999", "P001", 1.0, 10.0),
        ]),
    );
    let verdicts = SheetValidator::default().validate_sheets(&sheets);

    let batch = build_invoice_contexts(&verdicts).unwrap();

    // 其余订单继续,问题订单恰好一条跳过记录
    assert_eq!(batch.contexts.len(), 1);
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].order_id, "ORD9");
    assert!(batch.skipped[0].reason.contains("C999"));
}

#[test]
fn test_invoice_building_aborts_without_clients() {
    logging::init_test();
    let mut verdicts = validated_workbook();
    verdicts.remove("Clients");

    let result = build_invoice_contexts(&verdicts);

    assert!(matches!(
        result,
        Err(ComposeError::MissingDependencyData { ref sheet }) if sheet == "Clients"
    ));
}

#[test]
fn test_report_aggregates_same_client_orders() {
    logging::init_test();
    let mut sheets = full_workbook();
    sheets.insert(
        "Orders".to_string(),
        orders_sheet(vec![
            order_row("ORD1", "C001", "P001", 1.0, 100.0),
            order_row("ORD2", "C001", "P001", 1.0, 50.0),
        ]),
    );
    let verdicts = SheetValidator::default().validate_sheets(&sheets);

    let context = build_report_context(&verdicts, "August 2024", 5).unwrap();

    assert_eq!(context.total_sales, 150.0);
    assert_eq!(context.top_clients.len(), 1);
    assert_eq!(context.top_clients[0].total_purchase, 150.0);
    assert_eq!(context.orders.len(), 2);
}

#[test]
fn test_report_outstanding_unpaid_only() {
    logging::init_test();
    let verdicts = validated_workbook();

    let context = build_report_context(&verdicts, "August 2024", 5).unwrap();

    // INV1 (Unpaid, 70.0) 计入,INV2 (Paid) 不计入
    assert_eq!(context.outstanding_invoices, 70.0);
}

#[test]
fn test_top_clients_limit_and_tie_break() {
    logging::init_test();
    let mut sheets = full_workbook();
    sheets.insert(
        "Clients".to_string(),
        clients_sheet(vec![
            client_row("C001", "Alpha", "a@x.com"),
            client_row("C002", "Beta", "b@x.com"),
            client_row("C003", "Gamma", "c@x.com"),
            client_row("C004", "Delta", "d@x.com"),
            client_row("C005", "Epsilon", "e@x.com"),
            client_row("C006", "Zeta", "f@x.com"),
        ]),
    );
    sheets.insert(
        "Orders".to_string(),
        orders_sheet(vec![
            order_row("ORD1", "C001", "P001", 1.0, 10.0),
            order_row("ORD2", "C002", "P001", 1.0, 60.0),
            order_row("ORD3", "C003", "P001", 1.0, 60.0), // 与 C002 并列
            order_row("ORD4", "C004", "P001", 1.0, 80.0),
            order_row("ORD5", "C005", "P001", 1.0, 20.0),
            order_row("ORD6", "C006", "P001", 1.0, 30.0),
        ]),
    );
    let verdicts = SheetValidator::default().validate_sheets(&sheets);

    let context = build_report_context(&verdicts, "P", 5).unwrap();

    // 至多 5 条,降序,并列按输入顺序
    assert_eq!(context.top_clients.len(), 5);
    assert_eq!(context.top_clients[0].name, "Delta");
    assert_eq!(context.top_clients[1].name, "Beta");
    assert_eq!(context.top_clients[2].name, "Gamma");
    for pair in context.top_clients.windows(2) {
        assert!(pair[0].total_purchase >= pair[1].total_purchase);
    }
}

#[test]
fn test_report_aborts_without_invoices_clean_data() {
    logging::init_test();
    let mut sheets = full_workbook();
    // 发票表日期破坏 → Rejected,报表前置不满足
    sheets.insert(
        "Invoices".to_string(),
        invoices_sheet(vec![row(vec![
            ("Invoice ID", text("INV1")),
            ("Order ID", text("ORD1")),
            ("Invoice Date", text("garbage")),
            ("Due Date", text("2024-09-01")),
            ("Amount Due ($)", number(10.0)),
            ("Paid Status", text("Unpaid")),
        ])]),
    );
    let verdicts = SheetValidator::default().validate_sheets(&sheets);

    let result = build_report_context(&verdicts, "P", 5);

    assert!(matches!(
        result,
        Err(ComposeError::MissingDependencyData { ref sheet }) if sheet == "Invoices"
    ));

    // 发票生成的前置（Orders/Clients）不受影响
    assert!(build_invoice_contexts(&verdicts).is_ok());
}

#[test]
fn test_output_id_sanitization_idempotent() {
    assert_eq!(sanitize_name("Jane Doe, Inc"), "Jane_Doe__Inc");
    assert_eq!(
        sanitize_name("invoice_Jane_Doe_ORD1"),
        "invoice_Jane_Doe_ORD1"
    );
    assert_eq!(
        invoice_output_id("Jane Doe", "ORD1"),
        "invoice_Jane_Doe_ORD1"
    );
}
