// ==========================================
// 发票与报表自动生成系统 - 配置层
// ==========================================
// 职责: 生成管线的显式配置（模板目录/输出根/排名上限）
// 红线: 不使用进程级全局目录常量,配置随构造注入
// ==========================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认客户排名条目上限
const DEFAULT_TOP_CLIENTS_LIMIT: usize = 5;

// ==========================================
// GeneratorConfig - 生成管线配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub template_dir: PathBuf,        // 模板目录（invoice.html / report.html）
    pub invoice_output_dir: PathBuf,  // 发票输出根目录
    pub report_output_dir: PathBuf,   // 报表输出根目录
    pub top_clients_limit: usize,     // 客户排名条目上限
    pub report_period: Option<String>, // 固定报告期标签（缺省按当前月份派生）
}

impl GeneratorConfig {
    /// 从 JSON 配置文件载入
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("配置文件读取失败: {}", path.display()))?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .with_context(|| format!("配置文件解析失败: {}", path.display()))?;
        Ok(config)
    }

    /// 解析报告期标签
    ///
    /// 配置显式给定则用之,否则按当前月份派生（如 "August 2024"）
    pub fn resolved_report_period(&self) -> String {
        self.report_period.clone().unwrap_or_else(|| {
            chrono::Utc::now().format("%B %Y").to_string()
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        // 输出根目录: 系统数据目录,取不到则退回当前目录
        let output_root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("invoice-report-system")
            .join("output");

        Self {
            template_dir: PathBuf::from("templates"),
            invoice_output_dir: output_root.join("invoices"),
            report_output_dir: output_root.join("reports"),
            top_clients_limit: DEFAULT_TOP_CLIENTS_LIMIT,
            report_period: None,
        }
    }
}
