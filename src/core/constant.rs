use std::time::Duration;

// ---------- Token delimiter constants / 令牌分隔符常量 ----------

// Opening delimiter of every placeholder / 每个占位符的起始分隔符
pub(crate) const TOKEN_PREFIX: &str = "<<<";

// Closing delimiter of every placeholder / 每个占位符的结束分隔符
pub(crate) const TOKEN_SUFFIX: &str = ">>>";

// ---------- Settings key constants / 设置键常量 ----------

// Key of the extension list in a settings entry / 设置条目中扩展名列表的键
pub(crate) const SETTING_KEY_EXTENSIONS: &str = "extensions";

// Key of the template in a settings entry / 设置条目中模板的键
pub(crate) const SETTING_KEY_FORMAT_STRING: &str = "formatString";

// Separator between extensions of one rule / 同一规则中扩展名之间的分隔符
pub(crate) const EXTENSION_SEPARATOR: &str = ", ";

// ---------- Default rule constants / 默认规则常量 ----------

// Extensions covered by the shipped rule / 内置规则覆盖的扩展名
pub(crate) const DEFAULT_IMAGE_EXTENSIONS: &str = "jpg, jpeg, gif, png";

// Template of the shipped rule: an <img> tag / 内置规则的模板：一个 <img> 标签
pub(crate) const DEFAULT_IMAGE_FORMAT_STRING: &str = r#"<img src="<<<RELATIVE-PATH>>>" alt="<<<FILENAME-NOSUFFIX>>>" title="<<<FILENAME-NOSUFFIX>>>" width="<<<IMAGEWIDTH>>>" height="<<<IMAGEHEIGHT>>>" />"#;

// ---------- Coordinated read constants / 协调读取常量 ----------

// How long to wait for a writer to release its lock (3s) / 等待写入方释放锁的时长（3秒）
pub(crate) const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(3);

// Delay between two attempts to take the shared lock (10ms) / 两次尝试获取共享锁之间的间隔（10毫秒）
pub(crate) const LOCK_POLL_INTERVAL: Duration = Duration::from_millis(10);

// ---------- Capacity hint constants / 容量提示常量 ----------

// Typical number of rules in a settings store / 设置存储中典型的规则数量
pub(crate) const TYPICAL_RULE_COUNT: usize = 4;

// ---------- Regex pattern constants / 正则表达式模式常量 ----------

// Anything shaped like a placeholder, recognized or not / 任何形似占位符的序列，无论是否可识别
pub(crate) const REGEX_PLACEHOLDER: &str = r"<<<([A-Z][A-Z-]*)>>>";

// ---------- Error message constants / 错误消息常量 ----------

pub(crate) const ERR_SETTINGS_NOT_ARRAY: &str = "file drop setting is not an array of string maps";
