use crate::core::constant::{DEFAULT_LOCK_TIMEOUT, LOCK_POLL_INTERVAL};
use crate::public::error::DropError;
use crate::public::image_ext::ImageInspector;
use image::ImageReader;
use std::fs::{File, TryLockError};
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use std::thread::sleep;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default implementation of image metadata reading / 图片元数据读取的默认实现
///
/// Reads the dropped file without taking ownership of it:
/// 在不占有文件的前提下读取被拖入的文件：
/// - Symlinks are resolved before opening / 打开前解析符号链接
/// - The file is opened read-only / 以只读方式打开文件
/// - A shared lock is held during the read, a writer with an exclusive lock is
///   waited for up to `lock_timeout` / 读取期间持有共享锁，持有排他锁的写入方最多等待 `lock_timeout`
/// - Only the image header is decoded / 仅解码图片头部
#[derive(Debug, Clone)]
pub struct CoordinatedImageReader {
    // Maximum wait for a conflicting writer / 等待冲突写入方的最长时间
    lock_timeout: Duration,
}

impl Default for CoordinatedImageReader {
    fn default() -> Self {
        Self {
            // Use default lock timeout constant / 使用默认锁超时常量
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }
}

impl CoordinatedImageReader {
    /// Set how long to wait for a conflicting writer / 设置等待冲突写入方的时长
    ///
    /// # Arguments / 参数
    /// * `timeout` - Maximum wait before giving up / 放弃前的最长等待时间
    pub fn set_lock_timeout(&mut self, timeout: Duration) {
        self.lock_timeout = timeout;
    }

    // Current lock timeout / 当前的锁超时
    pub fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    /// Take a shared lock on the file, polling until the timeout elapses / 获取文件的共享锁，轮询直到超时
    ///
    /// # Arguments / 参数
    /// * `file` - Opened file / 已打开的文件
    /// * `path` - Resolved path, for the error / 解析后的路径，用于错误信息
    ///
    /// # Returns / 返回
    /// * `Ok(())` - Lock held, or locking unsupported / 已持有锁，或不支持加锁
    /// * `Err(DropError::LockTimeout)` - If a writer kept its lock / 如果写入方一直持有锁
    fn lock_shared(&self, file: &File, path: &Path) -> Result<(), DropError> {
        let deadline = Instant::now() + self.lock_timeout;

        loop {
            match file.try_lock_shared() {
                Ok(()) => return Ok(()),
                // Held exclusively by a writer, retry until deadline / 被写入方独占，重试直到截止时间
                Err(TryLockError::WouldBlock) => {
                    if Instant::now() >= deadline {
                        return Err(DropError::LockTimeout(path.to_path_buf()));
                    }
                    sleep(LOCK_POLL_INTERVAL);
                }
                // Filesystem without advisory locks, read unlocked / 文件系统不支持建议锁，不加锁读取
                Err(TryLockError::Error(e)) if e.kind() == ErrorKind::Unsupported => {
                    debug!(path = %path.display(), "file locking unsupported, reading unlocked");
                    return Ok(());
                }
                Err(TryLockError::Error(e)) => return Err(e.into()),
            }
        }
    }
}

// Implementation of ImageInspector trait / ImageInspector trait 的实现
impl ImageInspector for CoordinatedImageReader {
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), DropError> {
        // Resolve symlinks to the real file / 将符号链接解析为真实文件
        let resolved = std::fs::canonicalize(path)?;

        // Open read-only / 只读打开
        let file = File::open(&resolved)?;

        self.lock_shared(&file, &resolved)?;

        // Guess format from content, read header only / 根据内容猜测格式，仅读取头部
        let dimensions = ImageReader::new(BufReader::new(&file))
            .with_guessed_format()?
            .into_dimensions();

        // Also released on close / 关闭时也会释放
        let _ = file.unlock();

        Ok(dimensions?)
    }
}
