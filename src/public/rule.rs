use crate::core::constant::{
    DEFAULT_IMAGE_EXTENSIONS, DEFAULT_IMAGE_FORMAT_STRING, ERR_SETTINGS_NOT_ARRAY,
    EXTENSION_SEPARATOR, SETTING_KEY_EXTENSIONS, SETTING_KEY_FORMAT_STRING, TYPICAL_RULE_COUNT,
};
use crate::public::error::DropError;
use crate::public::token::Token;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// One user-defined file drop rule / 一条用户定义的文件拖放规则
///
/// Serializes to the settings store's shape / 序列化为设置存储的结构：
/// `{"extensions": "jpg, png", "formatString": "<<<FILENAME>>>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropRule {
    /// Extensions separated by `", "`, taken literally / 以 `", "` 分隔的扩展名，按原样比较
    pub extensions: String,

    /// Template; a stored entry may lack one, then matching it yields no text / 模板；存储的条目可能缺失，此时匹配到它不产生文本
    #[serde(
        rename = "formatString",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_string: Option<String>,
}

impl DropRule {
    /// Create a rule with a template / 创建带模板的规则
    ///
    /// # Arguments / 参数
    /// * `extensions` - Extensions separated by `", "` / 以 `", "` 分隔的扩展名
    /// * `format_string` - Template / 模板
    pub fn new(extensions: impl Into<String>, format_string: impl Into<String>) -> Self {
        Self {
            extensions: extensions.into(),
            format_string: Some(format_string.into()),
        }
    }

    /// Individual extension entries of the rule / 规则中的各个扩展名条目
    pub fn extension_list(&self) -> impl Iterator<Item = &str> {
        self.extensions.split(EXTENSION_SEPARATOR)
    }

    /// Whether the rule applies to an extension / 规则是否适用于某扩展名
    ///
    /// The lowercase and uppercase forms of `extension` are compared with the entries
    /// as written, so a mixed-case entry like `Txt` matches nothing
    /// 将 `extension` 的小写与大写形式与原样的条目比较，因此 `Txt` 这类大小写混合的条目不匹配任何扩展名
    ///
    /// # Arguments / 参数
    /// * `extension` - Dropped file's extension / 被拖入文件的扩展名
    pub fn matches_extension(&self, extension: &str) -> bool {
        let lower = extension.to_lowercase();
        let upper = extension.to_uppercase();

        self.extension_list()
            .any(|entry| entry == lower || entry == upper)
    }

    /// Placeholder-shaped names in the template that are not tokens / 模板中形似占位符但不是令牌的名称
    pub fn unknown_placeholders(&self) -> Vec<String> {
        self.format_string
            .as_deref()
            .map(|template| Token::scan(template).1)
            .unwrap_or_default()
    }
}

/// Ordered rule set, first match wins / 有序规则集，首个匹配生效
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropRules(Vec<DropRule>);

impl Default for DropRules {
    /// Rule shipped with a fresh installation: an `<img>` tag for common images / 全新安装时内置的规则：常见图片的 `<img>` 标签
    fn default() -> Self {
        Self(vec![DropRule::new(
            DEFAULT_IMAGE_EXTENSIONS,
            DEFAULT_IMAGE_FORMAT_STRING,
        )])
    }
}

impl From<Vec<DropRule>> for DropRules {
    fn from(rules: Vec<DropRule>) -> Self {
        Self(rules)
    }
}

impl DropRules {
    // Rule set without any rule / 不含任何规则的规则集
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn rules(&self) -> &[DropRule] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert the loosely-typed settings value into rules / 将松散类型的设置值转换为规则
    ///
    /// The value must be an array of objects whose values are all strings.
    /// Entries without an `extensions` key are skipped.
    /// 该值必须是所有值均为字符串的对象数组；缺少 `extensions` 键的条目将被跳过。
    ///
    /// # Arguments / 参数
    /// * `value` - Settings value as stored / 存储的设置值
    ///
    /// # Returns / 返回
    /// * `Ok(rules)` - Validated rules, in stored order / 校验后的规则，保持存储顺序
    /// * `Err(DropError::MalformedSettings)` - If the value has another shape / 如果该值结构不符
    pub fn from_value(value: &Value) -> Result<Self, DropError> {
        // Shape check: [{String: String}] / 结构检查：[{String: String}]
        let entries: Vec<HashMap<String, String>> = serde_json::from_value(value.clone())
            .map_err(|e| DropError::MalformedSettings(format!("{}: {}", ERR_SETTINGS_NOT_ARRAY, e)))?;

        // Pre-allocate with estimated capacity / 预分配估计容量
        let mut rules = Vec::with_capacity(entries.len().max(TYPICAL_RULE_COUNT));
        for (index, mut entry) in entries.into_iter().enumerate() {
            let Some(extensions) = entry.remove(SETTING_KEY_EXTENSIONS) else {
                warn!(index, "file drop setting entry has no extensions, skipping");
                continue;
            };

            // Missing template is kept, it ends the lookup / 缺失的模板保留，它会终止查找
            let rule = DropRule {
                extensions,
                format_string: entry.remove(SETTING_KEY_FORMAT_STRING),
            };

            let unknown = rule.unknown_placeholders();
            if !unknown.is_empty() {
                warn!(index, ?unknown, "file drop template references unknown placeholders");
            }

            rules.push(rule);
        }

        Ok(Self(rules))
    }

    /// Parse rules from the settings store's JSON text / 从设置存储的 JSON 文本解析规则
    ///
    /// see [`DropRules::from_value`]
    pub fn from_json_str(json: &str) -> Result<Self, DropError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Settings representation of the rules / 规则的设置存储表示
    pub fn to_value(&self) -> Result<Value, DropError> {
        Ok(serde_json::to_value(self)?)
    }

    /// First rule whose extension list covers an extension / 扩展名列表覆盖该扩展名的首条规则
    pub fn rule_for_extension(&self, extension: &str) -> Option<&DropRule> {
        self.0.iter().find(|rule| rule.matches_extension(extension))
    }

    /// Template of the first matching rule / 首条匹配规则的模板
    ///
    /// # Arguments / 参数
    /// * `extension` - Dropped file's extension / 被拖入文件的扩展名
    ///
    /// # Returns / 返回
    /// `None` if no rule matches, or if the matching rule has no template / 如果没有规则匹配，或匹配的规则没有模板，则返回 `None`
    pub fn template_for_extension(&self, extension: &str) -> Option<&str> {
        self.rule_for_extension(extension)?.format_string.as_deref()
    }
}
