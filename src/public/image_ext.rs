use crate::public::error::DropError;
use std::path::Path;

/// Image metadata trait for the image placeholders / 图片占位符所用的图片元数据 trait
///
/// Only called when a template references `<<<IMAGEWIDTH>>>` or `<<<IMAGEHEIGHT>>>` / 仅在模板引用 `<<<IMAGEWIDTH>>>` 或 `<<<IMAGEHEIGHT>>>` 时调用
pub trait ImageInspector: Send + Sync {
    /// Read the pixel dimensions of a file / 读取文件的像素尺寸
    ///
    /// # Arguments / 参数
    /// * `path` - Dropped file path, possibly a symlink / 被拖入文件的路径，可能是符号链接
    ///
    /// # Returns / 返回
    /// * `Ok((width, height))` - Dimensions in pixels / 像素尺寸
    /// * `Err` - If the file cannot be read or is not an image / 如果文件无法读取或不是图片
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), DropError>;
}
