//! Navigation and sidebar descriptor for docnav.
//!
//! This crate provides:
//! - [`NavDescriptor`]: the top navigation bar plus the per-section sidebar
//! - [`Sidebar::resolve`]: longest-prefix selection of sidebar groups for a route
//! - [`validate`]: data-shape checks producing [`ValidationIssue`]s
//! - [`check_documents`]: opt-in check that link targets exist in a content tree
//! - TOML, JSON and YAML storage via [`DescriptorFormat`]
//!
//! # Quick Start
//!
//! ```
//! use docnav_descriptor::{DescriptorFormat, NavDescriptor, validate};
//!
//! let toml = r#"
//! [[nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[sidebar."/guide/"]]
//! text = "Introduction"
//! items = [{ text = "Getting Started", link = "/guide/getting-started" }]
//! "#;
//!
//! let descriptor = NavDescriptor::from_str_as(toml, DescriptorFormat::Toml).unwrap();
//! assert!(validate(&descriptor).is_empty());
//!
//! let resolved = descriptor.sidebar.resolve("/guide/getting-started").unwrap();
//! assert_eq!(resolved.prefix, "/guide/");
//! ```

mod documents;
mod format;
mod model;
mod sidebar;
mod validate;

pub use documents::{check_documents, document_path};
pub use format::{DescriptorError, DescriptorFormat};
pub use model::{LinkRef, NavDescriptor, NavEntry, SidebarGroup, SidebarItem};
pub use sidebar::{ResolvedSidebar, Sidebar, SidebarSection, normalize_prefix};
pub use validate::{IssueKind, Severity, ValidationIssue, ValidationReport, validate};
