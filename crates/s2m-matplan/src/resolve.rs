//! Link endpoint resolution.
//!
//! sndlib links name their endpoints; MatPlanWDM fibres reference nodes by
//! position.  An endpoint resolves to the **first** node, in list order, whose
//! name the configured [`MatchStrategy`] accepts.  With the default
//! `Contains` strategy a short endpoint such as `"Bern"` can match an earlier
//! node called `"Bernau"`; that is the behavior planning files have been
//! produced with, so it is kept.

use std::fmt;

use s2m_core::{LinkIndex, MatchStrategy, NodeIndex};
use s2m_sndlib::{GeoNode, Link};

/// A link whose endpoints both resolved, with its length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLink {
    pub orig:      NodeIndex,
    pub dest:      NodeIndex,
    /// Great-circle length truncated to whole kilometres.
    pub length_km: u32,
}

/// A per-record problem.  The affected fibre is skipped; nothing else is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// No node name matched the link endpoint.
    EndpointNotFound { link: LinkIndex, endpoint: String },

    /// An endpoint node's coordinate text is not a number.
    BadCoordinate { link: LinkIndex, detail: String },
}

impl Diagnostic {
    pub fn link(&self) -> LinkIndex {
        match self {
            Diagnostic::EndpointNotFound { link, .. } | Diagnostic::BadCoordinate { link, .. } => *link,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EndpointNotFound { endpoint, .. } => {
                write!(f, "{endpoint} not found in node list")
            }
            Diagnostic::BadCoordinate { link, detail } => {
                write!(f, "cannot measure fibre {}: {detail}", link.ordinal())
            }
        }
    }
}

/// Position of the first node whose name `strategy` matches against `endpoint`.
pub fn resolve_endpoint(
    nodes:    &[GeoNode],
    endpoint: &str,
    strategy: MatchStrategy,
) -> Option<NodeIndex> {
    nodes
        .iter()
        .position(|node| strategy.matches(endpoint, &node.name))
        .and_then(|i| NodeIndex::try_from(i).ok())
}

/// Resolve both endpoints of `link` and measure it.
///
/// Returns every problem found rather than stopping at the first, so a link
/// with two unknown endpoints yields two diagnostics.
pub fn resolve_link(
    nodes:    &[GeoNode],
    link:     &Link,
    index:    LinkIndex,
    strategy: MatchStrategy,
) -> Result<ResolvedLink, Vec<Diagnostic>> {
    let orig = resolve_endpoint(nodes, &link.source, strategy);
    let dest = resolve_endpoint(nodes, &link.target, strategy);

    let (orig, dest) = match (orig, dest) {
        (Some(orig), Some(dest)) => (orig, dest),
        (orig, dest) => {
            let missing = [(orig, &link.source), (dest, &link.target)];
            return Err(missing
                .into_iter()
                .filter(|(found, _)| found.is_none())
                .map(|(_, endpoint)| Diagnostic::EndpointNotFound {
                    link:     index,
                    endpoint: endpoint.clone(),
                })
                .collect());
        }
    };

    let measure = || -> s2m_core::CoreResult<u32> {
        let from = nodes[orig.index()].point()?;
        let to = nodes[dest.index()].point()?;
        Ok(from.whole_km_to(to))
    };

    match measure() {
        Ok(length_km) => Ok(ResolvedLink { orig, dest, length_km }),
        Err(e) => Err(vec![Diagnostic::BadCoordinate { link: index, detail: e.to_string() }]),
    }
}
