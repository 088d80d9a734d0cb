use crate::core::coordinated_reader::CoordinatedImageReader;
use crate::core::utils::{
    file_name, file_name_without_extension, parent_directory_name, path_extension, relative_path,
};
use crate::public::error::DropError;
use crate::public::image_ext::ImageInspector;
use crate::public::rule::DropRules;
use crate::public::token::Token;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Main file drop composer struct / 主文件拖放文本生成器结构体
///
/// Produces the text inserted into a document when a file is dropped onto it / 生成文件拖入文档时插入的文本
pub struct FileDropComposer {
    // Image metadata source for the image placeholders / 图片占位符的图片元数据来源
    image_inspector: Box<dyn ImageInspector>,
}

impl Default for FileDropComposer {
    fn default() -> Self {
        Self {
            // Use coordinated reader / 使用协调读取器
            image_inspector: Box::new(CoordinatedImageReader::default()),
        }
    }
}

impl FileDropComposer {
    /// Set custom image metadata source / 设置自定义图片元数据来源
    ///
    /// # Arguments / 参数
    /// * `inspector` - Custom image inspector / 自定义图片检查器
    ///
    /// see [`CoordinatedImageReader`]
    pub fn set_image_inspector(&mut self, inspector: Box<dyn ImageInspector>) {
        self.image_inspector = inspector;
    }

    /// Create the drop text for a dropped file / 为被拖入的文件生成拖放文本
    ///
    /// # Arguments / 参数
    /// * `dropped` - Path of the dropped file / 被拖入文件的路径
    /// * `document` - Path of the target document, if saved / 目标文档的路径（如已保存）
    /// * `rules` - Ordered rule set / 有序规则集
    ///
    /// # Returns / 返回
    /// * `Some(text)` - Template of the first matching rule, placeholders replaced / 首条匹配规则的模板，占位符已替换
    /// * `None` - If no rule matches the file's extension / 如果没有规则匹配文件扩展名
    pub fn compose(&self, dropped: &Path, document: Option<&Path>, rules: &DropRules) -> Option<String> {
        let extension = path_extension(dropped);

        // Find template for extension / 查找扩展名对应的模板
        let Some(template) = rules.template_for_extension(&extension) else {
            debug!(%extension, "no file drop rule for extension");
            return None;
        };

        // Path placeholders are always replaced / 路径占位符总是替换
        let mut text = Self::replace_path_tokens(template, dropped, document, &extension);

        // Image lookup only when the template asks for it / 仅当模板需要时才读取图片
        let width_token = Token::ImageWidth.render();
        let height_token = Token::ImageHeight.render();
        if template.contains(&width_token) || template.contains(&height_token) {
            match self.image_inspector.dimensions(dropped) {
                Ok((width, height)) => {
                    text = text
                        .replace(&width_token, &width.to_string())
                        .replace(&height_token, &height.to_string());
                }
                // Keep placeholders on failure / 失败时保留占位符
                Err(e) => {
                    debug!(path = %dropped.display(), error = %e, "image dimensions unavailable");
                }
            }
        }

        Some(text)
    }

    /// Create the drop text using rules straight from the settings store / 直接使用设置存储中的规则生成拖放文本
    ///
    /// A malformed settings value is logged and treated as "no rule" / 结构错误的设置值会被记录日志并视为“无规则”
    ///
    /// # Arguments / 参数
    /// * `dropped` - Path of the dropped file / 被拖入文件的路径
    /// * `document` - Path of the target document, if saved / 目标文档的路径（如已保存）
    /// * `settings` - Settings value as stored / 存储的设置值
    pub fn compose_from_settings(
        &self,
        dropped: &Path,
        document: Option<&Path>,
        settings: &Value,
    ) -> Option<String> {
        match DropRules::from_value(settings) {
            Ok(rules) => self.compose(dropped, document, &rules),
            Err(e) => {
                error!(error = %e, "invalid file drop setting");
                None
            }
        }
    }

    /// Create the drop text on tokio's blocking thread pool / 在 tokio 阻塞线程池中生成拖放文本
    ///
    /// For callers already on an async runtime; [`FileDropComposer::compose`] itself is synchronous.
    /// 供已处于异步运行时的调用方使用；[`FileDropComposer::compose`] 本身是同步的。
    ///
    /// A blocking task cannot be cancelled: when `timeout` elapses the caller gets `None`,
    /// but the composition (and its file read) keeps running to completion in the
    /// background and its result is discarded.
    /// 阻塞任务无法取消：超时后调用方得到 `None`，但生成过程（及其文件读取）会在后台继续运行直至完成，其结果被丢弃。
    ///
    /// # Arguments / 参数
    /// * `dropped` - Path of the dropped file / 被拖入文件的路径
    /// * `document` - Path of the target document, if saved / 目标文档的路径（如已保存）
    /// * `rules` - Ordered rule set / 有序规则集
    /// * `timeout` - Maximum wait for the result / 等待结果的最长时间
    ///
    /// # Returns / 返回
    /// Same as [`FileDropComposer::compose`], or `None` on timeout or task failure / 同 [`FileDropComposer::compose`]，超时或任务失败时返回 `None`
    pub async fn compose_detached(
        self: Arc<Self>,
        dropped: PathBuf,
        document: Option<PathBuf>,
        rules: DropRules,
        timeout: Duration,
    ) -> Option<String> {
        let task = tokio::task::spawn_blocking(move || {
            self.compose(&dropped, document.as_deref(), &rules)
        });

        match tokio::time::timeout(timeout, task).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                error!(error = %DropError::from(e), "detached file drop composition failed");
                None
            }
            // Task keeps running, its result is dropped / 任务继续运行，其结果被丢弃
            Err(_) => {
                warn!(
                    error = %DropError::Timeout(timeout),
                    "file drop composition still running in background, result will be discarded"
                );
                None
            }
        }
    }

    /// Replace all path placeholders, present or not / 替换所有路径占位符，无论是否存在
    ///
    /// # Arguments / 参数
    /// * `template` - Template of the matching rule / 匹配规则的模板
    /// * `dropped` - Path of the dropped file / 被拖入文件的路径
    /// * `document` - Path of the target document / 目标文档的路径
    /// * `extension` - Extracted extension / 提取出的扩展名
    ///
    /// # Returns / 返回
    /// Template with path placeholders replaced / 路径占位符已替换的模板
    fn replace_path_tokens(
        template: &str,
        dropped: &Path,
        document: Option<&Path>,
        extension: &str,
    ) -> String {
        let absolute = dropped.to_string_lossy();

        // Relative to the document's directory, else absolute / 相对于文档所在目录，否则使用绝对路径
        let relative = document
            .and_then(Path::parent)
            .and_then(|dir| relative_path(dropped, dir))
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_else(|| absolute.to_string());

        Token::PATH_TOKENS
            .into_iter()
            .fold(template.to_string(), |text, token| {
                let value = match token {
                    Token::AbsolutePath => absolute.to_string(),
                    Token::RelativePath => relative.clone(),
                    Token::Filename => file_name(dropped),
                    Token::FilenameWithoutExtension => file_name_without_extension(dropped),
                    Token::FileExtension => extension.to_string(),
                    Token::FileExtensionLowercase => extension.to_lowercase(),
                    Token::FileExtensionUppercase => extension.to_uppercase(),
                    Token::Directory => parent_directory_name(dropped),
                    Token::ImageWidth | Token::ImageHeight => return text,
                };
                text.replace(&token.render(), &value)
            })
    }
}

/// Create the drop text with the default composer / 使用默认生成器生成拖放文本
///
/// see [`FileDropComposer::compose`]
pub fn compose_drop_text(dropped: &Path, document: Option<&Path>, rules: &DropRules) -> Option<String> {
    FileDropComposer::default().compose(dropped, document, rules)
}
