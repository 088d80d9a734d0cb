use std::path::PathBuf;
use std::time::Duration;

/// Error type for file drop composition / 文件拖放文本生成的错误类型
///
/// Wraps errors from the settings store, the filesystem and the image decoder / 包装来自设置存储、文件系统和图片解码器的错误
///
/// The compose entry points never return it: a failing step degrades to "no text"
/// or leaves its placeholders in place
/// 生成入口从不返回该错误：失败的步骤退化为“无文本”或保留其占位符
#[derive(thiserror::Error, Debug)]
pub enum DropError {
    /// Settings value does not have the expected shape / 设置值的结构不符合预期
    #[error("malformed file drop setting: {0}")]
    MalformedSettings(String),

    /// Settings JSON could not be parsed / 设置 JSON 无法解析
    #[error("invalid file drop setting JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error while resolving or opening the file / 解析或打开文件时的文件系统错误
    #[error("there was an i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Dropped file is not a decodable image / 被拖入的文件不是可解码的图片
    #[error("error while reading the image (via the `image` crate): {0}")]
    Image(#[from] image::ImageError),

    /// Another process kept an exclusive lock on the file / 其他进程一直持有文件的排他锁
    #[error("timed out waiting for a read lock on {}", .0.display())]
    LockTimeout(PathBuf),

    /// Blocking composition task panicked or was cancelled / 阻塞生成任务崩溃或被取消
    #[error("composition task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Detached composition did not finish in time / 后台生成未能按时完成
    #[error("composition did not finish within {0:?}")]
    Timeout(Duration),
}
