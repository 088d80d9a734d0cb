use crate::core::utils::{
    file_name, file_name_without_extension, parent_directory_name, path_extension, relative_path,
};
use std::path::{Path, PathBuf};

#[test]
fn test_path_components() {
    let path = Path::new("/a/b/report.TXT");

    assert_eq!(path_extension(path), "TXT");
    assert_eq!(file_name(path), "report.TXT");
    assert_eq!(file_name_without_extension(path), "report");
    assert_eq!(parent_directory_name(path), "b");
}

#[test]
fn test_extension_uses_last_dot() {
    let path = Path::new("/tmp/archive.tar.gz");

    assert_eq!(path_extension(path), "gz");
    assert_eq!(file_name_without_extension(path), "archive.tar");
}

#[test]
fn test_extension_edge_cases() {
    assert_eq!(path_extension(Path::new("/tmp/Makefile")), "");
    assert_eq!(path_extension(Path::new("/home/u/.bashrc")), "");
    assert_eq!(file_name_without_extension(Path::new("/home/u/.bashrc")), ".bashrc");
    assert_eq!(path_extension(Path::new("/tmp/name.")), "");
}

#[test]
fn test_parent_directory_edge_cases() {
    assert_eq!(parent_directory_name(Path::new("/file.txt")), "/");
    assert_eq!(parent_directory_name(Path::new("file.txt")), "");
}

#[test]
fn test_relative_path_sibling_directory() {
    assert_eq!(
        relative_path(Path::new("/a/b/img.png"), Path::new("/a/x")),
        Some(PathBuf::from("../b/img.png"))
    );
}

#[test]
fn test_relative_path_same_and_nested_directory() {
    assert_eq!(
        relative_path(Path::new("/a/b/img.png"), Path::new("/a/b")),
        Some(PathBuf::from("img.png"))
    );
    assert_eq!(
        relative_path(Path::new("/a/b/c/img.png"), Path::new("/a/b/")),
        Some(PathBuf::from("c/img.png"))
    );
    assert_eq!(
        relative_path(Path::new("/a/b/report.TXT"), Path::new("/a/b/c")),
        Some(PathBuf::from("../report.TXT"))
    );
}

#[test]
fn test_relative_path_not_computable() {
    assert_eq!(relative_path(Path::new("/a/b/img.png"), Path::new("x/y")), None);
    assert_eq!(relative_path(Path::new("b/img.png"), Path::new("/a")), None);
    assert_eq!(relative_path(Path::new("b/img.png"), Path::new("../x")), None);
}
