//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Resolve a language tag such as `en`, `zh` or `zh-CN`
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Tutor Desk", "辅导台"));

    // Navigation
    map.insert("nav-home", ("Home", "首页"));
    map.insert("nav-become-tutor", ("Become a Tutor", "成为导师"));
    map.insert("nav-find-tutor", ("Find Tutor", "寻找导师"));
    map.insert("nav-create-study-group", ("Create Study Group", "创建学习小组"));
    map.insert("nav-study-groups", ("Study Groups", "学习小组"));
    map.insert("nav-view-your-groups", ("View Your Groups", "我的小组"));
    map.insert("nav-group-details", ("Group Details", "小组详情"));
    map.insert("nav-study-group-details", ("Study Group Details", "学习小组详情"));

    // Create form
    map.insert("field-name", ("Study Group Name", "学习小组名称"));
    map.insert("field-subject", ("Subject", "科目"));
    map.insert("field-topic", ("Topic", "主题"));
    map.insert("field-description", ("Description", "描述"));
    map.insert("field-scheduled-time", ("Scheduled Time (YYYY-MM-DDTHH:MM)", "预定时间 (YYYY-MM-DDTHH:MM)"));
    map.insert("field-required", ("required", "必填"));
    map.insert("field-invalid-time", ("Invalid date/time, expected YYYY-MM-DDTHH:MM", "日期时间无效，格式应为 YYYY-MM-DDTHH:MM"));
    map.insert("action-create", ("Create Study Group", "创建学习小组"));
    map.insert("action-submitting", ("Creating study group...", "正在创建学习小组..."));

    // Notices
    map.insert("notice-missing-fields", ("Please fill in all the required fields", "请填写所有必填字段"));
    map.insert("notice-create-failed", ("Failed to create study group", "创建学习小组失败"));
    map.insert("notice-network-error", ("Network error: Unable to create study group", "网络错误：无法创建学习小组"));

    // Navigation handoff
    map.insert("navigated-to", ("Navigated to", "已跳转至"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => en.to_string(),
            Locale::ZhCN => zh.to_string(),
        }
    } else {
        // Fallback: return the key itself
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(
            t(Locale::EnUS, "notice-network-error"),
            "Network error: Unable to create study group"
        );
        assert_eq!(t(Locale::ZhCN, "nav-home"), "首页");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::ZhCN, "no-such-key"), "no-such-key");
    }

    #[test]
    fn locale_from_tag() {
        assert_eq!(Locale::from_tag("zh"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("ZH_tw"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_tag("fr"), Locale::EnUS);
        assert_eq!(Locale::from_tag(""), Locale::EnUS);
    }
}
