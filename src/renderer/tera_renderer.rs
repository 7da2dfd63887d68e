// ==========================================
// 发票与报表自动生成系统 - 模板渲染器实现
// ==========================================
// 职责: 序列化上下文 + 模板标识 → 持久化单据
// 约定: 输出目录按单据类别解析,扩展名由渲染器追加
// ==========================================

use crate::domain::types::DocumentKind;
use crate::renderer::error::{RenderError, RenderResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tera::Tera;

// ==========================================
// DocumentRenderer Trait
// ==========================================
// 用途: 渲染边界接口（输出边界）
// 实现者: TeraDocumentRenderer
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// 渲染单据内容
    ///
    /// # 参数
    /// - template_id: 模板标识（"invoice" / "report"）
    /// - context: 序列化渲染上下文
    ///
    /// # 返回
    /// - Ok(Vec<u8>): 渲染产物字节
    /// - Err: 模板缺失、渲染失败
    fn render(&self, template_id: &str, context: &serde_json::Value) -> RenderResult<Vec<u8>>;

    /// 持久化单据
    ///
    /// # 参数
    /// - kind: 单据类别（解析输出目录）
    /// - output_id: 输出标识（不含扩展名）
    /// - bytes: 渲染产物
    ///
    /// # 返回
    /// - Ok(PathBuf): 落盘路径
    /// - Err: 写出失败
    async fn persist(
        &self,
        kind: DocumentKind,
        output_id: &str,
        bytes: &[u8],
    ) -> RenderResult<PathBuf>;
}

// ==========================================
// TeraDocumentRenderer 实现
// ==========================================
// 模板目录下 <template_id>.html,产物为 HTML
// PDF 转换属外部厂商环节,不在本渲染器内
pub struct TeraDocumentRenderer {
    tera: Tera,
    invoice_dir: PathBuf,
    report_dir: PathBuf,
}

impl TeraDocumentRenderer {
    /// 从模板目录与输出根目录构造渲染器
    pub fn new(
        template_dir: &Path,
        invoice_dir: PathBuf,
        report_dir: PathBuf,
    ) -> RenderResult<Self> {
        let glob = format!("{}/**/*.html", template_dir.display());
        let tera = Tera::new(&glob).map_err(|e| RenderError::TemplateDirError(e.to_string()))?;

        Ok(Self {
            tera,
            invoice_dir,
            report_dir,
        })
    }

    fn template_name(template_id: &str) -> String {
        format!("{}.html", template_id)
    }

    fn output_dir(&self, kind: DocumentKind) -> &Path {
        match kind {
            DocumentKind::Invoice => &self.invoice_dir,
            DocumentKind::Report => &self.report_dir,
        }
    }
}

#[async_trait]
impl DocumentRenderer for TeraDocumentRenderer {
    fn render(&self, template_id: &str, context: &serde_json::Value) -> RenderResult<Vec<u8>> {
        let template = Self::template_name(template_id);

        if !self.tera.get_template_names().any(|name| name == template) {
            return Err(RenderError::TemplateNotFound { template });
        }

        let tera_context = tera::Context::from_serialize(context).map_err(|e| {
            RenderError::RenderFailed {
                template: template.clone(),
                message: e.to_string(),
            }
        })?;

        let html = self
            .tera
            .render(&template, &tera_context)
            .map_err(|e| RenderError::RenderFailed {
                template: template.clone(),
                message: e.to_string(),
            })?;

        Ok(html.into_bytes())
    }

    async fn persist(
        &self,
        kind: DocumentKind,
        output_id: &str,
        bytes: &[u8],
    ) -> RenderResult<PathBuf> {
        let dir = self.output_dir(kind);
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(format!("{}.html", output_id));
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!("单据已写出: {}", path.display());
        Ok(path)
    }
}
