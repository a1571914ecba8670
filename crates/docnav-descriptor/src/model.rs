//! Descriptor data model.
//!
//! The descriptor is a pure value: the ordered top navigation bar plus the
//! [`Sidebar`] mapping route prefixes to groups of links. Order of `nav`
//! and of every `items` list is display order and is preserved by all
//! storage formats.

use serde::{Deserialize, Serialize};

use crate::sidebar::Sidebar;

/// Top navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub text: String,
    /// Site-relative target path (e.g., "/guide/").
    pub link: String,
}

impl NavEntry {
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Link record inside a sidebar group.
///
/// Leaf items carry a `link`. Items with nested `items` may omit it, in
/// which case they render as a sub-heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Display label.
    pub text: String,
    /// Site-relative target path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Initial collapse state of nested items (`None` = not collapsible).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Nested items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

impl SidebarItem {
    /// Create a leaf item.
    #[must_use]
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            collapsed: None,
            items: Vec::new(),
        }
    }

    /// Whether this item has no nested items.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.items.is_empty()
    }
}

/// Labeled, optionally collapsible cluster of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,
    /// Initial UI state.
    ///
    /// `Some(true)` starts collapsed, `Some(false)` starts expanded but can be
    /// collapsed, `None` renders a group that cannot be collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Ordered link records.
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    #[must_use]
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            collapsed: None,
            items,
        }
    }
}

/// Reference to a `link` value somewhere in a descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRef<'a> {
    /// The link value.
    pub link: &'a str,
    /// Human-readable location (e.g., `sidebar["/guide/"][0].items[2]`).
    pub location: String,
}

/// Navigation bar plus sidebar taxonomy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavDescriptor {
    /// Top navigation bar, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavEntry>,
    /// Per-section sidebar keyed by route prefix.
    #[serde(default, skip_serializing_if = "Sidebar::is_empty")]
    pub sidebar: Sidebar,
}

impl NavDescriptor {
    /// Whether the descriptor declares neither nav entries nor sidebar sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nav.is_empty() && self.sidebar.is_empty()
    }

    /// All link values in document order: `nav` first, then every sidebar
    /// section in key order, depth-first through nested items.
    #[must_use]
    pub fn links(&self) -> Vec<LinkRef<'_>> {
        let mut links: Vec<LinkRef<'_>> = self
            .nav
            .iter()
            .enumerate()
            .map(|(i, entry)| LinkRef {
                link: &entry.link,
                location: format!("nav[{i}]"),
            })
            .collect();

        for (prefix, section) in self.sidebar.iter() {
            for (g, group) in section.groups().iter().enumerate() {
                let base = format!("sidebar[{prefix:?}][{g}]");
                collect_item_links(&group.items, &base, &mut links);
            }
        }

        links
    }
}

fn collect_item_links<'a>(items: &'a [SidebarItem], base: &str, out: &mut Vec<LinkRef<'a>>) {
    for (i, item) in items.iter().enumerate() {
        let location = format!("{base}.items[{i}]");
        if let Some(link) = &item.link {
            out.push(LinkRef {
                link,
                location: location.clone(),
            });
        }
        collect_item_links(&item.items, &location, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::SidebarSection;
    use pretty_assertions::assert_eq;

    fn sample() -> NavDescriptor {
        let mut sidebar = Sidebar::default();
        sidebar.insert(
            "/guide/",
            SidebarSection::new(vec![SidebarGroup::new(
                "Guide",
                vec![
                    SidebarItem::link("Intro", "/guide/intro"),
                    SidebarItem {
                        text: "Advanced".to_owned(),
                        link: None,
                        collapsed: Some(true),
                        items: vec![SidebarItem::link("Plugins", "/guide/plugins")],
                    },
                ],
            )]),
        );
        NavDescriptor {
            nav: vec![NavEntry::new("Guide", "/guide/")],
            sidebar,
        }
    }

    #[test]
    fn test_links_in_document_order() {
        let descriptor = sample();

        let links: Vec<_> = descriptor.links().into_iter().map(|l| l.link).collect();

        assert_eq!(links, vec!["/guide/", "/guide/intro", "/guide/plugins"]);
    }

    #[test]
    fn test_links_report_nested_location() {
        let descriptor = sample();

        let links = descriptor.links();

        assert_eq!(links[0].location, "nav[0]");
        assert_eq!(links[1].location, "sidebar[\"/guide/\"][0].items[0]");
        assert_eq!(
            links[2].location,
            "sidebar[\"/guide/\"][0].items[1].items[0]"
        );
    }

    #[test]
    fn test_empty_descriptor() {
        let descriptor = NavDescriptor::default();
        assert!(descriptor.is_empty());
        assert!(descriptor.links().is_empty());
    }

    #[test]
    fn test_sidebar_item_serialization_skips_empty_fields() {
        let item = SidebarItem::link("Intro", "/guide/intro");

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["text"], "Intro");
        assert_eq!(json["link"], "/guide/intro");
        assert!(json.get("collapsed").is_none());
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_sidebar_group_collapsed_defaults_to_none() {
        let group: SidebarGroup =
            serde_json::from_str(r#"{"text": "Guide", "items": []}"#).unwrap();
        assert_eq!(group.collapsed, None);
        assert!(group.items.is_empty());
    }
}
