//! Node and link extraction.
//!
//! Both extractors are single forward scans in document order.  When an
//! element carries the same child more than once (two `<x>` under one node,
//! two `<source>` under one link) the last occurrence wins.

use s2m_core::{CoreError, CoreResult, GeoPoint};

use crate::reader::{SndlibDocument, child_elements, qualified_tag, visit_descendants};
use crate::{SndlibError, SndlibResult};

const NODE_PATH: [&str; 3] = ["networkStructure", "nodes", "node"];
const LINK_PATH: [&str; 3] = ["networkStructure", "links", "link"];

// ── Types ─────────────────────────────────────────────────────────────────────

/// A network node with the coordinate text exactly as the source wrote it.
///
/// `x` is longitude-like, `y` latitude-like.  `None` means the node element
/// had no such child; it is written out as `0` and measured as `0.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoNode {
    pub name: String,
    pub x:    Option<String>,
    pub y:    Option<String>,
}

impl GeoNode {
    /// Coordinate text for `xCoord`.
    pub fn x_text(&self) -> &str {
        self.x.as_deref().unwrap_or("0")
    }

    /// Coordinate text for `yCoord`.
    pub fn y_text(&self) -> &str {
        self.y.as_deref().unwrap_or("0")
    }

    /// Parse the coordinates into a point, `y` as latitude and `x` as
    /// longitude.
    pub fn point(&self) -> CoreResult<GeoPoint> {
        let lat = self.parse_coordinate(self.y.as_deref())?;
        let lon = self.parse_coordinate(self.x.as_deref())?;
        Ok(GeoPoint::new(lat, lon))
    }

    fn parse_coordinate(&self, text: Option<&str>) -> CoreResult<f64> {
        let Some(text) = text else {
            return Ok(0.0);
        };
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CoreError::Coordinate {
                node:  self.name.clone(),
                value: text.to_owned(),
            })
    }
}

/// A link between two nodes, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub source: String,
    pub target: String,
}

/// Everything the emitter needs from one sndlib document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    pub nodes: Vec<GeoNode>,
    pub links: Vec<Link>,
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Extract every `networkStructure/nodes/node` in document order.
///
/// # Errors
///
/// [`SndlibError::MissingAttribute`] if a node has no `id`.
pub fn extract_nodes(doc: &SndlibDocument) -> SndlibResult<Vec<GeoNode>> {
    let x_tag = doc.tag("x");
    let y_tag = doc.tag("y");

    let nodes = doc
        .find_all(&NODE_PATH)
        .into_iter()
        .enumerate()
        .map(|(position, element)| -> SndlibResult<GeoNode> {
            let name = element.attributes.get("id").cloned().ok_or(
                SndlibError::MissingAttribute {
                    element: "node",
                    attribute: "id",
                    position,
                },
            )?;

            // Fresh per node: a node without coordinates never inherits the
            // previous node's values.
            let (mut x, mut y) = (None, None);
            visit_descendants(element, &mut |e: &xmltree::Element| {
                let tag = qualified_tag(e);
                if tag == x_tag {
                    x = Some(element_text(e));
                } else if tag == y_tag {
                    y = Some(element_text(e));
                }
            });

            Ok(GeoNode { name, x, y })
        })
        .collect::<SndlibResult<Vec<_>>>()?;

    tracing::debug!(count = nodes.len(), "extracted nodes");
    Ok(nodes)
}

/// Extract every `networkStructure/links/link` in document order.
///
/// # Errors
///
/// [`SndlibError::MissingElement`] if a link lacks a non-empty `source` or
/// `target` child.
pub fn extract_links(doc: &SndlibDocument) -> SndlibResult<Vec<Link>> {
    let source_tag = doc.tag("source");
    let target_tag = doc.tag("target");

    let links = doc
        .find_all(&LINK_PATH)
        .into_iter()
        .enumerate()
        .map(|(position, element)| -> SndlibResult<Link> {
            let (mut source, mut target) = (None, None);
            for child in child_elements(element) {
                let tag = qualified_tag(child);
                if tag == source_tag {
                    source = Some(element_text(child));
                } else if tag == target_tag {
                    target = Some(element_text(child));
                }
            }

            let missing = |child: &'static str| SndlibError::MissingElement {
                element: "link",
                child,
                position,
            };
            let source = source.filter(|s| !s.is_empty()).ok_or_else(|| missing("source"))?;
            let target = target.filter(|s| !s.is_empty()).ok_or_else(|| missing("target"))?;
            Ok(Link { source, target })
        })
        .collect::<SndlibResult<Vec<_>>>()?;

    tracing::debug!(count = links.len(), "extracted links");
    Ok(links)
}

/// Run [`extract_nodes`] then [`extract_links`].
pub fn extract_topology(doc: &SndlibDocument) -> SndlibResult<Topology> {
    let nodes = extract_nodes(doc)?;
    let links = extract_links(doc)?;
    Ok(Topology { nodes, links })
}

fn element_text(element: &xmltree::Element) -> String {
    element.get_text().map(|t| t.into_owned()).unwrap_or_default()
}
