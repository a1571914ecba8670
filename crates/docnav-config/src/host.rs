//! Host-facing configuration shape.
//!
//! The site host reads camelCase keys (`srcDir`, `themeConfig`,
//! `socialLinks`, ...). [`HostConfig`] borrows from a loaded [`Config`] and
//! serializes into that shape with the sidebar in its canonical group-list
//! form.

use docnav_descriptor::{NavEntry, Sidebar};
use serde::Serialize;

use crate::Config;
use crate::compression::{CompressionAlgorithm, CompressionPass};
use crate::page::{HeadTag, MarkdownConfig};
use crate::theme::{
    DocFooterConfig, FooterConfig, LastUpdatedConfig, OutlineConfig, SearchConfig, SocialLink,
};

/// Configuration handed to the site host.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    /// Content root as written in the config file (relative to it).
    pub src_dir: &'a str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub head: &'a [HeadTag],
    pub theme_config: HostThemeConfig<'a>,
    pub markdown: &'a MarkdownConfig,
    pub build: HostBuildConfig<'a>,
}

/// `themeConfig` block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostThemeConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<&'a str>,
    pub nav: &'a [NavEntry],
    pub sidebar: &'a Sidebar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_menu_label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_top_label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_footer: Option<&'a DocFooterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<&'a OutlineConfig>,
    pub search: &'a SearchConfig,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub social_links: &'a [SocialLink],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<&'a FooterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<&'a LastUpdatedConfig>,
}

/// Bundler post-processing passes.
#[derive(Debug, Serialize)]
pub struct HostBuildConfig<'a> {
    pub compression: Vec<HostCompressionPass<'a>>,
}

/// Compression pass with its extension filled in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCompressionPass<'a> {
    pub algorithm: CompressionAlgorithm,
    pub threshold: u64,
    pub ext: &'a str,
    pub delete_origin_file: bool,
    pub verbose: bool,
    pub disable: bool,
}

impl<'a> From<&'a CompressionPass> for HostCompressionPass<'a> {
    fn from(pass: &'a CompressionPass) -> Self {
        Self {
            algorithm: pass.algorithm,
            threshold: pass.threshold,
            ext: pass.ext(),
            delete_origin_file: pass.delete_origin_file,
            verbose: pass.verbose,
            disable: pass.disable,
        }
    }
}

impl Config {
    /// Borrow this configuration in the host's shape.
    #[must_use]
    pub fn to_host_config(&self) -> HostConfig<'_> {
        let descriptor = self.descriptor();
        HostConfig {
            title: &self.title,
            description: self.description.as_deref(),
            src_dir: &self.src_dir,
            head: &self.head,
            theme_config: HostThemeConfig {
                logo: self.theme.logo.as_deref(),
                nav: &descriptor.nav,
                sidebar: &descriptor.sidebar,
                sidebar_menu_label: self.theme.sidebar_menu_label.as_deref(),
                return_to_top_label: self.theme.return_to_top_label.as_deref(),
                doc_footer: self.theme.doc_footer.as_ref(),
                outline: self.theme.outline.as_ref(),
                search: &self.theme.search,
                social_links: &self.theme.social_links,
                footer: self.theme.footer.as_ref(),
                last_updated: self.theme.last_updated.as_ref(),
            },
            markdown: &self.markdown,
            build: HostBuildConfig {
                compression: self.build.compression.iter().map(Into::into).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config(toml: &str) -> Config {
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project")).unwrap();
        config
    }

    #[test]
    fn test_host_config_defaults() {
        let config = config("");

        let json = serde_json::to_value(config.to_host_config()).unwrap();

        assert_eq!(
            json,
            json!({
                "title": "Documentation",
                "srcDir": "docs",
                "themeConfig": {
                    "nav": [],
                    "sidebar": {},
                    "search": { "provider": "local" }
                },
                "markdown": { "lineNumbers": false },
                "build": {
                    "compression": [
                        {
                            "algorithm": "gzip",
                            "threshold": 1025,
                            "ext": ".gz",
                            "deleteOriginFile": false,
                            "verbose": true,
                            "disable": false
                        },
                        {
                            "algorithm": "brotliCompress",
                            "threshold": 1025,
                            "ext": ".br",
                            "deleteOriginFile": false,
                            "verbose": true,
                            "disable": false
                        }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_host_config_uses_camel_case_keys() {
        let config = config(
            r#"
title = "Handbook"
description = "Team handbook"
src_dir = "content"

[[theme.nav]]
text = "Guide"
link = "/guide/"

[theme.sidebar."/guide/"]
text = "Guide"
items = [{ text = "Intro", link = "/guide/intro" }]

[[theme.social_links]]
icon = "github"
link = "https://github.com/example/handbook"

[theme.footer]
copyright = "Copyright © 2024"

[theme.last_updated]
text = "Updated"
format_options = { date_style = "long" }

[theme.search.options.translations.button]
button_text = "Find"
"#,
        );

        let json = serde_json::to_value(config.to_host_config()).unwrap();

        assert_eq!(json["title"], "Handbook");
        assert_eq!(json["description"], "Team handbook");
        assert_eq!(json["srcDir"], "content");
        let theme = &json["themeConfig"];
        assert_eq!(theme["nav"][0]["link"], "/guide/");
        assert_eq!(theme["sidebar"]["/guide/"][0]["items"][0]["text"], "Intro");
        assert_eq!(theme["socialLinks"][0]["icon"], "github");
        assert_eq!(theme["footer"]["copyright"], "Copyright © 2024");
        assert_eq!(theme["lastUpdated"]["text"], "Updated");
        assert_eq!(theme["lastUpdated"]["formatOptions"]["dateStyle"], "long");
        assert_eq!(theme["lastUpdated"]["formatOptions"]["timeStyle"], "short");
        assert_eq!(
            theme["search"]["options"]["translations"]["button"]["buttonText"],
            "Find"
        );
    }

    #[test]
    fn test_host_config_page_chrome_and_markdown() {
        let config = config(
            r#"
[[head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.ico" }

[theme]
logo = "/logo.svg"
sidebar_menu_label = "Menu"
return_to_top_label = "Back to top"
doc_footer = { prev = "Previous page", next = "Next page" }
outline = { level = [2, 3], label = "On this page" }

[markdown]
line_numbers = true

[[build.compression]]
algorithm = "gzip"
threshold = 10240
verbose = false
disable = true
"#,
        );

        let json = serde_json::to_value(config.to_host_config()).unwrap();

        assert_eq!(
            json["head"],
            json!([["link", { "href": "/favicon.ico", "rel": "icon" }]])
        );
        let theme = &json["themeConfig"];
        assert_eq!(theme["logo"], "/logo.svg");
        assert_eq!(theme["sidebarMenuLabel"], "Menu");
        assert_eq!(theme["returnToTopLabel"], "Back to top");
        assert_eq!(
            theme["docFooter"],
            json!({ "prev": "Previous page", "next": "Next page" })
        );
        assert_eq!(
            theme["outline"],
            json!({ "level": [2, 3], "label": "On this page" })
        );
        assert_eq!(json["markdown"], json!({ "lineNumbers": true }));
        let pass = &json["build"]["compression"][0];
        assert_eq!(pass["verbose"], false);
        assert_eq!(pass["disable"], true);
    }
}
