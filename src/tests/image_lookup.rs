use crate::{CoordinatedImageReader, DropError, DropRule, DropRules, ImageInspector, compose_drop_text};
use image::{Rgb, RgbImage};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::{TempDir, tempdir};

fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    RgbImage::from_pixel(width, height, Rgb([200, 40, 40]))
        .save(&path)
        .unwrap();
    path
}

fn image_rules() -> DropRules {
    DropRules::from(vec![DropRule::new(
        "png, txt",
        "<<<IMAGEWIDTH>>>x<<<IMAGEHEIGHT>>>",
    )])
}

#[test]
fn test_reads_png_dimensions() {
    let dir = tempdir().unwrap();
    let path = write_png(&dir, "photo.png", 800, 600);

    let dimensions = CoordinatedImageReader::default().dimensions(&path).unwrap();

    assert_eq!(dimensions, (800, 600));
}

#[test]
fn test_format_comes_from_content_not_extension() {
    let dir = tempdir().unwrap();
    let png = write_png(&dir, "photo.png", 12, 7);
    let disguised = dir.path().join("photo.txt");
    std::fs::rename(&png, &disguised).unwrap();

    let text = compose_drop_text(&disguised, None, &image_rules());

    assert_eq!(text.as_deref(), Some("12x7"));
}

#[test]
fn test_compose_with_real_image() {
    let dir = tempdir().unwrap();
    let path = write_png(&dir, "photo.png", 800, 600);

    let text = compose_drop_text(&path, None, &image_rules());

    assert_eq!(text.as_deref(), Some("800x600"));
}

#[test]
fn test_non_image_keeps_placeholders() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "just some text, definitely not pixels").unwrap();

    let result = CoordinatedImageReader::default().dimensions(&path);
    assert!(matches!(result, Err(DropError::Image(_))), "{:?}", result);

    let text = compose_drop_text(&path, None, &image_rules());
    assert_eq!(text.as_deref(), Some("<<<IMAGEWIDTH>>>x<<<IMAGEHEIGHT>>>"));
}

#[test]
fn test_missing_file_keeps_placeholders() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.png");

    let result = CoordinatedImageReader::default().dimensions(&path);
    assert!(matches!(result, Err(DropError::Io(_))), "{:?}", result);

    let text = compose_drop_text(&path, None, &image_rules());
    assert_eq!(text.as_deref(), Some("<<<IMAGEWIDTH>>>x<<<IMAGEHEIGHT>>>"));
}

#[cfg(unix)]
#[test]
fn test_symlink_is_resolved() {
    let dir = tempdir().unwrap();
    let target = write_png(&dir, "real.png", 64, 48);
    let link = dir.path().join("link.png");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let rules = DropRules::from(vec![DropRule::new(
        "png",
        "<<<FILENAME>>> <<<IMAGEWIDTH>>>x<<<IMAGEHEIGHT>>>",
    )]);
    let text = compose_drop_text(&link, None, &rules);

    // Path tokens describe the link, dimensions come from its target / 路径令牌描述链接本身，尺寸来自其目标
    assert_eq!(text.as_deref(), Some("link.png 64x48"));
}

#[test]
fn test_reading_does_not_modify_file() {
    let dir = tempdir().unwrap();
    let path = write_png(&dir, "photo.png", 10, 10);
    let before = std::fs::read(&path).unwrap();

    CoordinatedImageReader::default().dimensions(&path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_exclusive_writer_lock_times_out() {
    let dir = tempdir().unwrap();
    let path = write_png(&dir, "busy.png", 10, 10);

    let writer = File::options().write(true).open(&path).unwrap();
    writer.lock().unwrap();

    let mut reader = CoordinatedImageReader::default();
    reader.set_lock_timeout(Duration::from_millis(50));
    assert_eq!(reader.lock_timeout(), Duration::from_millis(50));

    let result = reader.dimensions(&path);
    assert!(matches!(result, Err(DropError::LockTimeout(_))), "{:?}", result);

    writer.unlock().unwrap();
    assert_eq!(reader.dimensions(&path).unwrap(), (10, 10));
}

#[test]
fn test_shared_readers_do_not_block_each_other() {
    let dir = tempdir().unwrap();
    let path = write_png(&dir, "shared.png", 3, 5);

    let other = File::open(&path).unwrap();
    other.lock_shared().unwrap();

    let mut reader = CoordinatedImageReader::default();
    reader.set_lock_timeout(Duration::from_millis(50));

    assert_eq!(reader.dimensions(&path).unwrap(), (3, 5));
}
