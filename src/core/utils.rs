use std::path::{Component, Path, PathBuf};

/// Extension of the final path component / 最后一个路径组件的扩展名
///
/// A leading dot does not start an extension (`.bashrc` has none) / 开头的点不算扩展名（`.bashrc` 没有扩展名）
///
/// # Arguments / 参数
/// * `path` - Dropped file path / 被拖入文件的路径
///
/// # Returns / 返回
/// Extension without the dot, empty if there is none / 不带点的扩展名，没有则为空
#[inline]
pub(crate) fn path_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Final path component including its extension / 包含扩展名的最后一个路径组件
#[inline]
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Final path component with the extension removed / 去掉扩展名的最后一个路径组件
#[inline]
pub(crate) fn file_name_without_extension(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Name of the immediate parent directory / 直接父目录的名称
///
/// # Arguments / 参数
/// * `path` - Dropped file path / 被拖入文件的路径
///
/// # Returns / 返回
/// The parent's final component, the root itself (`/`) for files at the root,
/// or an empty string for a bare file name
/// 父目录的最后一个组件；位于根目录的文件返回根本身（`/`）；单纯的文件名返回空字符串
pub(crate) fn parent_directory_name(path: &Path) -> String {
    match path.parent() {
        Some(parent) => match parent.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            // Root has no file name / 根目录没有文件名
            None => parent.to_string_lossy().into_owned(),
        },
        None => String::new(),
    }
}

/// Express a path relative to a directory / 将路径表示为相对于某目录的路径
///
/// Purely lexical, nothing is read from disk / 纯词法计算，不读取磁盘
///
/// # Arguments / 参数
/// * `target` - Path to express / 要表示的路径
/// * `base` - Directory the result is relative to / 结果所相对的目录
///
/// # Returns / 返回
/// * `Some(path)` - e.g. `../b/img.png` for `/a/b/img.png` against `/a/x` / 例如 `/a/b/img.png` 相对 `/a/x` 为 `../b/img.png`
/// * `None` - If one path is absolute and the other is not, or if `base` climbs
///   with `..` after the shared prefix / 如果一个是绝对路径而另一个不是，或 `base` 在公共前缀之后含有 `..`
pub(crate) fn relative_path(target: &Path, base: &Path) -> Option<PathBuf> {
    if target.is_absolute() != base.is_absolute() {
        return None;
    }

    // Drop `.` components so `./a` and `a` compare equal / 去掉 `.` 组件，使 `./a` 与 `a` 相等
    let target_parts: Vec<Component> = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let base_parts: Vec<Component> = base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    // Different prefixes (e.g. Windows drives) cannot be bridged / 不同前缀（如 Windows 盘符）无法互通
    if target_parts.first() != base_parts.first()
        && (matches!(target_parts.first(), Some(Component::Prefix(_)))
            || matches!(base_parts.first(), Some(Component::Prefix(_))))
    {
        return None;
    }

    // Length of the shared prefix / 公共前缀的长度
    let common = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(t, b)| t == b)
        .count();

    // Climb out of the rest of the base / 从基准目录的剩余部分向上回退
    let mut result = PathBuf::new();
    for part in &base_parts[common..] {
        match part {
            Component::Normal(_) => result.push(Component::ParentDir),
            _ => return None,
        }
    }

    // Descend into the rest of the target / 进入目标路径的剩余部分
    for part in &target_parts[common..] {
        result.push(part);
    }

    Some(result)
}
