//! Navigation tree builder for documentation sidebars.
//!
//! Source files follow a `<name>.<type>.<suffix>` naming convention. This
//! crate turns a flat list of such paths into labeled sidebar groups:
//!
//! 1. [`Discovery`] asks a [`FileLister`] for matching paths
//! 2. [`decompose`] extracts `(type, name)` from each basename
//! 3. [`aggregate`] groups names by type in first-seen order
//! 4. [`assemble`] resolves labels through a [`LabelDictionary`] and builds links
//!
//! Steps 2–4 are pure and infallible; [`build_sidebar`] runs them over paths
//! you already have, [`SidebarBuilder`] runs the whole pipeline.
//!
//! # Example
//!
//! ```
//! use navgen_core::{build_sidebar, LabelDictionary, SidebarOptions};
//!
//! let options = SidebarOptions {
//!     labels: LabelDictionary::builtin().with_label("clas", "Classes"),
//!     ..SidebarOptions::default()
//! };
//! let nav = build_sidebar(["zif_a.intf.abap", "zcl_b.clas.abap"], &options);
//!
//! assert_eq!(nav[0].label, "Interfaces");
//! assert_eq!(nav[1].label, "Classes");
//! assert_eq!(nav[1].items[0].link, "/abap/clas/zcl_b");
//! ```

mod aggregate;
mod decompose;
mod discovery;
mod labels;
#[cfg(test)]
mod mock;
mod sidebar;

pub use aggregate::{Group, aggregate};
pub use decompose::{DecomposedEntry, UNKNOWN_TYPE, decompose};
pub use discovery::{Discovery, FileLister, ListError, ListErrorKind};
pub use labels::LabelDictionary;
pub use sidebar::{
    SidebarBuilder, SidebarItem, SidebarNode, SidebarOptions, SortOrder, assemble, build_sidebar,
};
