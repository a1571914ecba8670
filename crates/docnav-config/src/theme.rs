//! `[theme]` section: navigation, search, page chrome labels, social links,
//! footer and last-updated stamp.
//!
//! Label sets are spelled out field by field and reject unknown keys, so a
//! misspelled translation key fails at load time instead of silently falling
//! back to the host's default label.

use std::collections::BTreeMap;
use std::fmt;

use docnav_descriptor::NavDescriptor;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// External descriptor file (TOML, JSON or YAML) relative to the config
    /// directory. Mutually exclusive with inline `nav` and `sidebar`.
    pub navigation_file: Option<String>,
    /// Inline `nav` and `sidebar`, replaced by the file contents when
    /// `navigation_file` is set.
    #[serde(flatten)]
    pub descriptor: NavDescriptor,
    /// Site logo path shown in the navigation bar (e.g., "/logo.svg").
    pub logo: Option<String>,
    /// Label of the sidebar toggle on narrow screens.
    pub sidebar_menu_label: Option<String>,
    /// Label of the "return to top" link.
    pub return_to_top_label: Option<String>,
    /// Previous/next page link labels.
    pub doc_footer: Option<DocFooterConfig>,
    /// On-page outline (table of contents).
    pub outline: Option<OutlineConfig>,
    /// Built-in search settings.
    pub search: SearchConfig,
    /// Icon links shown in the navigation bar.
    pub social_links: Vec<SocialLink>,
    /// Footer text.
    pub footer: Option<FooterConfig>,
    /// Per-page "last updated" stamp.
    pub last_updated: Option<LastUpdatedConfig>,
}

/// Labels of the previous/next page links under each document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocFooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Heading levels listed in the on-page outline.
///
/// Written as a single level (`2`), an inclusive range (`[2, 4]`) or
/// `"deep"` for levels 2 through 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutlineLevel {
    Single(u8),
    Range(u8, u8),
    Deep,
}

impl Default for OutlineLevel {
    fn default() -> Self {
        Self::Single(2)
    }
}

impl OutlineLevel {
    /// Inclusive range of heading levels covered.
    #[must_use]
    pub fn bounds(self) -> (u8, u8) {
        match self {
            Self::Single(level) => (level, level),
            Self::Range(start, end) => (start, end),
            Self::Deep => (2, 6),
        }
    }
}

impl Serialize for OutlineLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Single(level) => serializer.serialize_u8(level),
            Self::Range(start, end) => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element(&start)?;
                tuple.serialize_element(&end)?;
                tuple.end()
            }
            Self::Deep => serializer.serialize_str("deep"),
        }
    }
}

struct OutlineLevelVisitor;

impl<'de> Visitor<'de> for OutlineLevelVisitor {
    type Value = OutlineLevel;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(r#"a heading level, a [start, end] pair or "deep""#)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .map(OutlineLevel::Single)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .map(OutlineLevel::Single)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value == "deep" {
            Ok(OutlineLevel::Deep)
        } else {
            Err(E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let start: u8 = seq
            .next_element()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
        let end: u8 = seq
            .next_element()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(1, &self))?;
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(OutlineLevel::Range(start, end))
    }
}

impl<'de> Deserialize<'de> for OutlineLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OutlineLevelVisitor)
    }
}

/// `[theme.outline]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineConfig {
    /// Heading levels to list. Defaults to level 2 only.
    pub level: OutlineLevel,
    /// Outline heading. Unset uses the host's default ("On this page").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Search provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Host's built-in client-side index.
    #[default]
    Local,
}

/// `[theme.search]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub provider: SearchProvider,
    #[serde(skip_serializing_if = "SearchOptions::is_empty")]
    pub options: SearchOptions,
}

/// Search UI options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    /// Labels for the root locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<SearchTranslations>,
    /// Labels per locale key (e.g., "zh", "fr").
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub locales: BTreeMap<String, LocaleSearchOptions>,
}

impl SearchOptions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_none() && self.locales.is_empty()
    }
}

/// Search options for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocaleSearchOptions {
    pub translations: SearchTranslations,
}

/// Search UI label overrides. Unset labels use the host's defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchTranslations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonTranslations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ModalTranslations>,
}

/// Labels of the search button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct ButtonTranslations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_aria_label: Option<String>,
}

/// Labels of the search modal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct ModalTranslations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_button_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_button_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<ModalFooterTranslations>,
}

/// Keyboard hint labels in the search modal footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct ModalFooterTranslations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_key_aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_up_key_aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_down_key_aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_key_aria_label: Option<String>,
}

/// Icon link (e.g., GitHub repository).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name understood by the host (e.g., "github", "discord").
    pub icon: String,
    /// Absolute http(s) URL.
    pub link: String,
}

/// Footer text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Date or time rendering style of the "last updated" stamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeStyle {
    Full,
    Long,
    Medium,
    #[default]
    Short,
}

/// How the "last updated" timestamp is formatted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct FormatOptions {
    pub date_style: DateTimeStyle,
    pub time_style: DateTimeStyle,
}

/// `[theme.last_updated]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct LastUpdatedConfig {
    /// Label before the timestamp.
    pub text: String,
    pub format_options: FormatOptions,
}

impl Default for LastUpdatedConfig {
    fn default() -> Self {
        Self {
            text: "Last updated".to_owned(),
            format_options: FormatOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_theme() {
        let theme: ThemeConfig = toml::from_str("").unwrap();
        assert!(theme.navigation_file.is_none());
        assert!(theme.descriptor.is_empty());
        assert_eq!(theme.search.provider, SearchProvider::Local);
        assert!(theme.search.options.is_empty());
        assert!(theme.social_links.is_empty());
        assert!(theme.footer.is_none());
        assert!(theme.last_updated.is_none());
        assert!(theme.logo.is_none());
        assert!(theme.doc_footer.is_none());
        assert!(theme.outline.is_none());
    }

    #[test]
    fn test_parse_page_chrome_labels() {
        let toml = r#"
logo = "/logo.svg"
sidebar_menu_label = "菜单"
return_to_top_label = "返回顶部"

[doc_footer]
prev = "上一页"
next = "下一页"

[outline]
level = "deep"
label = "目录大纲"
"#;
        let theme: ThemeConfig = toml::from_str(toml).unwrap();

        assert_eq!(theme.logo.as_deref(), Some("/logo.svg"));
        assert_eq!(theme.sidebar_menu_label.as_deref(), Some("菜单"));
        assert_eq!(theme.return_to_top_label.as_deref(), Some("返回顶部"));
        assert_eq!(
            theme.doc_footer,
            Some(DocFooterConfig {
                prev: Some("上一页".to_owned()),
                next: Some("下一页".to_owned()),
            })
        );
        let outline = theme.outline.unwrap();
        assert_eq!(outline.level, OutlineLevel::Deep);
        assert_eq!(outline.label.as_deref(), Some("目录大纲"));
    }

    #[test]
    fn test_outline_level_forms() {
        let parse = |toml: &str| toml::from_str::<OutlineConfig>(toml).map(|o| o.level);

        assert_eq!(parse("").unwrap(), OutlineLevel::Single(2));
        assert_eq!(parse("level = 3").unwrap(), OutlineLevel::Single(3));
        assert_eq!(parse("level = [2, 4]").unwrap(), OutlineLevel::Range(2, 4));
        assert_eq!(parse(r#"level = "deep""#).unwrap(), OutlineLevel::Deep);
        assert!(parse(r#"level = "shallow""#).is_err());
        assert!(parse("level = [2]").is_err());
        assert!(parse("level = [2, 3, 4]").is_err());
        assert!(parse("level = -1").is_err());
    }

    #[test]
    fn test_outline_level_serializes_host_shape() {
        assert_eq!(
            serde_json::to_value(OutlineLevel::Single(2)).unwrap(),
            serde_json::json!(2)
        );
        assert_eq!(
            serde_json::to_value(OutlineLevel::Range(2, 4)).unwrap(),
            serde_json::json!([2, 4])
        );
        assert_eq!(
            serde_json::to_value(OutlineLevel::Deep).unwrap(),
            serde_json::json!("deep")
        );
        assert_eq!(OutlineLevel::Deep.bounds(), (2, 6));
    }

    #[test]
    fn test_misspelled_doc_footer_key_is_rejected() {
        let toml = r#"
[doc_footer]
previous = "Back"
"#;
        let err = toml::from_str::<ThemeConfig>(toml).unwrap_err();
        assert!(err.to_string().contains("previous"));
    }

    #[test]
    fn test_parse_inline_descriptor() {
        let toml = r#"
[[nav]]
text = "Guide"
link = "/guide/"

[[sidebar."/guide/"]]
text = "Basics"
collapsed = false
items = [{ text = "Intro", link = "/guide/intro" }]
"#;
        let theme: ThemeConfig = toml::from_str(toml).unwrap();

        assert_eq!(theme.descriptor.nav.len(), 1);
        let groups = theme.descriptor.sidebar.get("/guide/").unwrap().groups();
        assert_eq!(groups[0].collapsed, Some(false));
        assert_eq!(groups[0].items[0].text, "Intro");
    }

    #[test]
    fn test_parse_search_translations() {
        let toml = r#"
[search]
provider = "local"

[search.options.translations.button]
button_text = "Search docs"

[search.options.locales.zh.translations.modal]
no_results_text = "无法找到相关结果"

[search.options.locales.zh.translations.modal.footer]
close_text = "关闭"
"#;
        let theme: ThemeConfig = toml::from_str(toml).unwrap();

        let options = &theme.search.options;
        assert_eq!(
            options
                .translations
                .as_ref()
                .and_then(|t| t.button.as_ref())
                .and_then(|b| b.button_text.as_deref()),
            Some("Search docs")
        );
        let zh_modal = options.locales["zh"].translations.modal.as_ref().unwrap();
        assert_eq!(zh_modal.no_results_text.as_deref(), Some("无法找到相关结果"));
        assert_eq!(
            zh_modal.footer.as_ref().unwrap().close_text.as_deref(),
            Some("关闭")
        );
    }

    #[test]
    fn test_misspelled_translation_key_is_rejected() {
        let toml = r#"
[search.options.translations.button]
buton_text = "Search"
"#;
        let err = toml::from_str::<ThemeConfig>(toml).unwrap_err();
        assert!(err.to_string().contains("buton_text"));
    }

    #[test]
    fn test_unknown_search_provider_is_rejected() {
        let toml = r#"
[search]
provider = "algolia"
"#;
        assert!(toml::from_str::<ThemeConfig>(toml).is_err());
    }

    #[test]
    fn test_last_updated_defaults() {
        let toml = "[last_updated]\n";
        let theme: ThemeConfig = toml::from_str(toml).unwrap();

        let last_updated = theme.last_updated.unwrap();
        assert_eq!(last_updated.text, "Last updated");
        assert_eq!(last_updated.format_options.date_style, DateTimeStyle::Short);
        assert_eq!(last_updated.format_options.time_style, DateTimeStyle::Short);
    }

    #[test]
    fn test_last_updated_custom() {
        let toml = r#"
[last_updated]
text = "Updated at"
format_options = { date_style = "full", time_style = "medium" }
"#;
        let theme: ThemeConfig = toml::from_str(toml).unwrap();

        let last_updated = theme.last_updated.unwrap();
        assert_eq!(last_updated.text, "Updated at");
        assert_eq!(last_updated.format_options.date_style, DateTimeStyle::Full);
        assert_eq!(last_updated.format_options.time_style, DateTimeStyle::Medium);
    }

    #[test]
    fn test_translations_serialize_camel_case() {
        let modal = ModalTranslations {
            no_results_text: Some("Nothing".to_owned()),
            footer: Some(ModalFooterTranslations {
                navigate_up_key_aria_label: Some("Up".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&modal).unwrap();

        assert_eq!(json["noResultsText"], "Nothing");
        assert_eq!(json["footer"]["navigateUpKeyAriaLabel"], "Up");
        assert!(json.get("displayDetails").is_none());
    }
}
