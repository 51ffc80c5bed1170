//! `s2m-sndlib` — read sndlib network documents and extract their topology.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`reader`]   | `SndlibDocument`, `read_document`, `load_document`         |
//! | [`topology`] | `GeoNode`, `Link`, `Topology`, `extract_nodes`, `extract_links` |
//! | [`error`]    | `SndlibError`, `SndlibResult<T>`                           |
//!
//! # Source layout
//!
//! Only two paths below the root are read; everything else (demands,
//! meta data, link capacities) is ignored:
//!
//! ```text
//! networkStructure/nodes/node[@id]   with nested .../x and .../y
//! networkStructure/links/link        with child source and target
//! ```

pub mod error;
pub mod reader;
pub mod topology;


pub use error::{SndlibError, SndlibResult};
pub use reader::{SndlibDocument, load_document, qualified_tag, read_document};
pub use topology::{GeoNode, Link, Topology, extract_links, extract_nodes, extract_topology};
