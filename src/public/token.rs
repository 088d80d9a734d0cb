use crate::core::constant::{REGEX_PLACEHOLDER, TOKEN_PREFIX, TOKEN_SUFFIX};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Placeholder recognized inside a drop template / 拖放模板中可识别的占位符
///
/// Written in a template as `<<<NAME>>>`, see [`Token::render`] / 在模板中写作 `<<<NAME>>>`，参见 [`Token::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    AbsolutePath,
    RelativePath,
    Filename,
    FilenameWithoutExtension,
    FileExtension,
    FileExtensionLowercase,
    FileExtensionUppercase,
    Directory,
    ImageWidth,
    ImageHeight,
}

// Regex for placeholder-shaped sequences - compiled once / 占位符形式序列的正则表达式 - 仅编译一次
static REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(REGEX_PLACEHOLDER).unwrap());

impl Token {
    /// Tokens computed from the dropped file's path / 由被拖入文件路径计算的令牌
    pub const PATH_TOKENS: [Token; 8] = [
        Token::AbsolutePath,
        Token::RelativePath,
        Token::Filename,
        Token::FilenameWithoutExtension,
        Token::FileExtension,
        Token::FileExtensionLowercase,
        Token::FileExtensionUppercase,
        Token::Directory,
    ];

    /// Tokens that need the file to be read as an image / 需要将文件作为图片读取的令牌
    pub const IMAGE_TOKENS: [Token; 2] = [Token::ImageWidth, Token::ImageHeight];

    /// Path tokens followed by image tokens / 路径令牌在前，图片令牌在后
    pub const ALL: [Token; 10] = [
        Token::AbsolutePath,
        Token::RelativePath,
        Token::Filename,
        Token::FilenameWithoutExtension,
        Token::FileExtension,
        Token::FileExtensionLowercase,
        Token::FileExtensionUppercase,
        Token::Directory,
        Token::ImageWidth,
        Token::ImageHeight,
    ];

    /// Stable name written between the delimiters / 写在分隔符之间的固定名称
    pub const fn name(self) -> &'static str {
        match self {
            Token::AbsolutePath => "ABSOLUTE-PATH",
            Token::RelativePath => "RELATIVE-PATH",
            Token::Filename => "FILENAME",
            Token::FilenameWithoutExtension => "FILENAME-NOSUFFIX",
            Token::FileExtension => "FILEEXTENSION",
            Token::FileExtensionLowercase => "FILEEXTENSION-LOWER",
            Token::FileExtensionUppercase => "FILEEXTENSION-UPPER",
            Token::Directory => "DIRECTORY",
            Token::ImageWidth => "IMAGEWIDTH",
            Token::ImageHeight => "IMAGEHEIGHT",
        }
    }

    /// Placeholder as it appears in a template / 占位符在模板中的写法
    ///
    /// # Returns / 返回
    /// Prefix, name and suffix, e.g. `<<<FILENAME>>>` / 前缀、名称和后缀，例如 `<<<FILENAME>>>`
    pub fn render(self) -> String {
        let name = self.name();

        // Pre-allocate exact space needed / 预分配所需的精确空间
        let mut token = String::with_capacity(TOKEN_PREFIX.len() + name.len() + TOKEN_SUFFIX.len());
        token.push_str(TOKEN_PREFIX);
        token.push_str(name);
        token.push_str(TOKEN_SUFFIX);
        token
    }

    /// Canonical, non-localized description / 规范的、未本地化的说明
    pub const fn description(self) -> &'static str {
        match self {
            Token::AbsolutePath => "The dropped file absolute path.",
            Token::RelativePath => "The relative path between dropped file and the document.",
            Token::Filename => "The dropped file's name including extension (if exists).",
            Token::FilenameWithoutExtension => "The dropped file's name without extension.",
            Token::FileExtension => "The dropped file's extension.",
            Token::FileExtensionLowercase => {
                "The dropped file's extension (converted to lowercase)."
            }
            Token::FileExtensionUppercase => {
                "The dropped file's extension (converted to uppercase)."
            }
            Token::Directory => "The parent directory name of dropped file.",
            Token::ImageWidth => "(If the dropped file is an image) image width.",
            Token::ImageHeight => "(If the dropped file is an image) image height.",
        }
    }

    // Width or height / 宽度或高度
    pub const fn is_image_token(self) -> bool {
        matches!(self, Token::ImageWidth | Token::ImageHeight)
    }

    // Every token that is not an image token / 所有非图片令牌
    pub const fn is_path_token(self) -> bool {
        !self.is_image_token()
    }

    /// Look a token up by its bare name / 按不带分隔符的名称查找令牌
    ///
    /// # Arguments / 参数
    /// * `name` - Name without delimiters, case-sensitive / 不带分隔符的名称，区分大小写
    pub fn from_name(name: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|token| token.name() == name)
    }

    /// Find every placeholder-shaped sequence in a template / 查找模板中所有占位符形式的序列
    ///
    /// # Arguments / 参数
    /// * `template` - Template text / 模板文本
    ///
    /// # Returns / 返回
    /// Recognized tokens and unknown names, both in order of appearance / 可识别的令牌与未知名称，均按出现顺序
    pub fn scan(template: &str) -> (Vec<Token>, Vec<String>) {
        let mut known = Vec::new();
        let mut unknown = Vec::new();

        // Sort every match into known or unknown / 将每个匹配归入已知或未知
        for cap in REGEX.captures_iter(template) {
            if let Some(name) = cap.get(1) {
                match Token::from_name(name.as_str()) {
                    Some(token) => known.push(token),
                    None => unknown.push(name.as_str().to_string()),
                }
            }
        }

        (known, unknown)
    }
}

// Display is the rendered placeholder / Display 即渲染后的占位符
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Token {
    type Err = String;

    /// Accepts either the bare name or the rendered placeholder / 接受单纯名称或渲染后的占位符
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|rest| rest.strip_suffix(TOKEN_SUFFIX))
            .unwrap_or(s);

        Token::from_name(name).ok_or_else(|| format!("unknown token `{}`", s))
    }
}
