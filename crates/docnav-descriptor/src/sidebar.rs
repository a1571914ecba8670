//! Sidebar sections keyed by route prefix.
//!
//! # Shape
//!
//! Each prefix maps to an ordered list of [`SidebarGroup`]s. Older
//! descriptors map a prefix directly to a single group object; that form is
//! still accepted on load and migrated into a one-element list. Serialization
//! always writes the list form.
//!
//! # Selection
//!
//! A route selects the section with the longest prefix it starts with. Both
//! route and keys are compared with a leading `/`, so `"guide/"` and
//! `"/guide/"` name the same prefix.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::SidebarGroup;

/// Ordered list of sidebar groups for one route prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SidebarSection(Vec<SidebarGroup>);

impl SidebarSection {
    #[must_use]
    pub fn new(groups: Vec<SidebarGroup>) -> Self {
        Self(groups)
    }

    /// Groups in display order.
    #[must_use]
    pub fn groups(&self) -> &[SidebarGroup] {
        &self.0
    }
}

impl From<SidebarGroup> for SidebarSection {
    fn from(group: SidebarGroup) -> Self {
        Self(vec![group])
    }
}

impl From<Vec<SidebarGroup>> for SidebarSection {
    fn from(groups: Vec<SidebarGroup>) -> Self {
        Self(groups)
    }
}

/// Accepts either a list of groups or a single group object.
///
/// Each shape is handed straight to the group deserializer, so a bad field
/// inside a group reports that field instead of a generic shape mismatch.
struct SectionVisitor;

impl<'de> Visitor<'de> for SectionVisitor {
    type Value = SidebarSection;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a list of sidebar groups or a single sidebar group")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        Vec::<SidebarGroup>::deserialize(SeqAccessDeserializer::new(seq)).map(SidebarSection)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let group = SidebarGroup::deserialize(MapAccessDeserializer::new(map))?;
        tracing::warn!(
            group = %group.text,
            "Sidebar section uses the single-group form, migrated to a group list"
        );
        Ok(SidebarSection::from(group))
    }
}

impl<'de> Deserialize<'de> for SidebarSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SectionVisitor)
    }
}

/// Sidebar section selected for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedSidebar<'a> {
    /// Key that matched, as written in the descriptor.
    pub prefix: &'a str,
    /// Groups of the matched section.
    pub groups: &'a [SidebarGroup],
}

/// Mapping from route prefix to sidebar section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar {
    sections: BTreeMap<String, SidebarSection>,
}

impl Sidebar {
    /// Insert a section, replacing any previous section under the same key.
    pub fn insert(&mut self, prefix: impl Into<String>, section: impl Into<SidebarSection>) {
        self.sections.insert(prefix.into(), section.into());
    }

    /// Section stored under exactly this key.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&SidebarSection> {
        self.sections.get(prefix)
    }

    /// Sections in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SidebarSection)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Select the section for `route` by longest prefix match.
    ///
    /// Keys that normalize to the same prefix tie; the first in key order
    /// wins. Returns `None` when no key is a prefix of the route.
    #[must_use]
    pub fn resolve(&self, route: &str) -> Option<ResolvedSidebar<'_>> {
        let route = normalize_prefix(route);
        let mut best: Option<(usize, &str, &SidebarSection)> = None;

        for (key, section) in &self.sections {
            let prefix = normalize_prefix(key);
            if !route.starts_with(prefix.as_ref()) {
                continue;
            }
            if best.is_none_or(|(len, _, _)| prefix.len() > len) {
                best = Some((prefix.len(), key.as_str(), section));
            }
        }

        let (_, prefix, section) = best?;
        tracing::debug!(route = %route, prefix, "Resolved sidebar section");
        Some(ResolvedSidebar {
            prefix,
            groups: section.groups(),
        })
    }
}

impl FromIterator<(String, SidebarSection)> for Sidebar {
    fn from_iter<I: IntoIterator<Item = (String, SidebarSection)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

/// Ensure a route or prefix starts with `/`.
#[must_use]
pub fn normalize_prefix(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}
