//! XML document loading and namespace-qualified element lookup.
//!
//! Tags are compared in "Clark notation": a namespaced element `<node>` in
//! `http://sndlib.zib.de/network` is `{http://sndlib.zib.de/network}node`, an
//! element without namespace is just `node`.  The root element's namespace,
//! in the same `{uri}` form, is the prefix prepended to every tag we look for.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use xmltree::{Element, XMLNode};

use crate::SndlibResult;

// ── SndlibDocument ────────────────────────────────────────────────────────────

/// A parsed sndlib document together with its namespace prefix.
#[derive(Debug, Clone)]
pub struct SndlibDocument {
    root:      Element,
    namespace: String,
}

impl SndlibDocument {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// `"{uri}"` if the root element is namespaced, `""` otherwise.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Qualify a local tag name with the document namespace.
    pub fn tag(&self, local: &str) -> String {
        format!("{}{}", self.namespace, local)
    }

    /// All elements reached from the root by following `path`, one level of
    /// direct children per segment.  Each segment is qualified with the
    /// document namespace.  Document order is preserved.
    pub fn find_all(&self, path: &[&str]) -> Vec<&Element> {
        let mut current: Vec<&Element> = vec![&self.root];
        for segment in path {
            let tag = self.tag(segment);
            current = current
                .into_iter()
                .flat_map(child_elements)
                .filter(|child| qualified_tag(child) == tag)
                .collect();
        }
        current
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parse an sndlib document from any `Read` source.
///
/// # Errors
///
/// [`SndlibError::Parse`](crate::SndlibError::Parse) if the input is not
/// well-formed XML.
pub fn read_document<R: Read>(reader: R) -> SndlibResult<SndlibDocument> {
    let root = Element::parse(reader)?;
    let namespace = namespace_prefix(&root);
    tracing::debug!(root = %qualified_tag(&root), namespace = %namespace, "parsed document");
    Ok(SndlibDocument { root, namespace })
}

/// Like [`read_document`] but opens `path` first.
///
/// The file handle is dropped before this function returns, whether parsing
/// succeeded or not.
pub fn load_document(path: &Path) -> SndlibResult<SndlibDocument> {
    let file = File::open(path).map(BufReader::new)?;
    read_document(file)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Tag of `element` in `{uri}local` form.
pub fn qualified_tag(element: &Element) -> String {
    match &element.namespace {
        Some(uri) => format!("{{{uri}}}{}", element.name),
        None => element.name.clone(),
    }
}

fn namespace_prefix(root: &Element) -> String {
    root.namespace
        .as_deref()
        .map(|uri| format!("{{{uri}}}"))
        .unwrap_or_default()
}

/// Direct element children of `element`, skipping text, comments and
/// processing instructions.
pub(crate) fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(XMLNode::as_element)
}

/// Visit every element below `element` (not `element` itself) depth-first in
/// document order.
pub(crate) fn visit_descendants<'a>(element: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    for child in child_elements(element) {
        visit(child);
        visit_descendants(child, visit);
    }
}
