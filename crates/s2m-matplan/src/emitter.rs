//! MatPlanWDM document writer.
//!
//! # Output shape
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE network SYSTEM "../dtd/vtDesign.dtd">
//! <network author="" ... title="nobel-eu" ...>
//!     <layer id="physicalTopology">
//!         <node id="1" ... xCoord="15.98" yCoord="45.81">
//!             <eoTransmitter number="10"/>
//!             <oeReceiver number="10"/>
//!             <wc number="0"/>
//!         </node>
//!         <fibre id="1" origNodeId="1" destNodeId="2" linkLengthInKm="258" numberWavelengths="40" />
//!         <levelInformationMatrix>
//!             <factor idDest="1" idOrig="1" value="1"/>
//!         </levelInformationMatrix>
//!         <lightpathCapacity value="40"/>
//!     </layer>
//! </network>
//! ```
//!
//! Indentation is one tab per level.  Node ids are list positions starting
//! at 1; fibre ids are link list positions starting at 1, so a skipped link
//! leaves a gap in the fibre ids.

use std::borrow::Cow;
use std::path::Path;

use s2m_core::{LinkIndex, MatPlanConfig};
use s2m_sndlib::{GeoNode, Link};

use crate::resolve::{Diagnostic, resolve_link};
use crate::{LineSink, MatPlanResult, VecSink};

// ── EmitReport ────────────────────────────────────────────────────────────────

/// What one [`Emitter::emit`] call wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub nodes:       usize,
    pub fibres:      usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl EmitReport {
    /// Number of links that produced no fibre.
    pub fn skipped_links(&self) -> usize {
        let mut links: Vec<LinkIndex> = self.diagnostics.iter().map(Diagnostic::link).collect();
        links.dedup();
        links.len()
    }
}

// ── Emitter ───────────────────────────────────────────────────────────────────

/// Writes MatPlanWDM documents with a fixed [`MatPlanConfig`].
#[derive(Clone, Debug)]
pub struct Emitter {
    config: MatPlanConfig,
}

impl Emitter {
    /// # Errors
    ///
    /// [`MatPlanError::Core`](crate::MatPlanError::Core) if the config does
    /// not validate.
    pub fn new(config: MatPlanConfig) -> MatPlanResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Write the complete document for `nodes` and `links` to `sink`.
    ///
    /// Links that cannot be resolved or measured are skipped and returned as
    /// diagnostics (each also logged at `debug`; reporting them is up to the
    /// caller).  Only sink errors fail the call.  The sink is not finished.
    pub fn emit<S: LineSink>(
        &self,
        title: &str,
        nodes: &[GeoNode],
        links: &[Link],
        sink:  &mut S,
    ) -> MatPlanResult<EmitReport> {
        let mut report = EmitReport::default();

        self.write_header(title, sink)?;

        for (position, node) in nodes.iter().enumerate() {
            self.write_node(position, nodes.len(), node, sink)?;
            report.nodes += 1;
        }

        for (position, link) in links.iter().enumerate() {
            let Ok(index) = LinkIndex::try_from(position) else {
                break;
            };
            match resolve_link(nodes, link, index, self.config.match_strategy) {
                Ok(resolved) => {
                    sink.write_line(&format!(
                        "\t\t<fibre id=\"{}\" origNodeId=\"{}\" destNodeId=\"{}\" \
                         linkLengthInKm=\"{}\" numberWavelengths=\"{}\" />",
                        index.ordinal(),
                        resolved.orig.ordinal(),
                        resolved.dest.ordinal(),
                        resolved.length_km,
                        self.config.wavelengths_per_fibre,
                    ))?;
                    report.fibres += 1;
                }
                Err(problems) => {
                    for problem in problems {
                        tracing::debug!(fibre = index.ordinal(), "{problem}");
                        report.diagnostics.push(problem);
                    }
                }
            }
        }

        self.write_trailer(sink)?;

        tracing::debug!(
            nodes = report.nodes,
            fibres = report.fibres,
            diagnostics = report.diagnostics.len(),
            "document emitted"
        );
        Ok(report)
    }

    /// [`emit`](Self::emit) into memory; returns the document lines.
    pub fn render(
        &self,
        title: &str,
        nodes: &[GeoNode],
        links: &[Link],
    ) -> MatPlanResult<(Vec<String>, EmitReport)> {
        let mut sink = VecSink::new();
        let report = self.emit(title, nodes, links, &mut sink)?;
        sink.finish()?;
        Ok((sink.into_lines(), report))
    }

    // ── Sections ──────────────────────────────────────────────────────────────

    fn write_header<S: LineSink>(&self, title: &str, sink: &mut S) -> MatPlanResult<()> {
        sink.write_line("<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        sink.write_line(&format!(
            "<!DOCTYPE network SYSTEM \"{}\">",
            escape_attr(&self.config.dtd_path)
        ))?;
        sink.write_line(&format!(
            "<network author=\"\" date=\"\" description=\"\" flowGeneratorFile=\"\" \
             flowGeneratorParametersString=\"\" multihourPlanning=\"false\" title=\"{}\" \
             planningAlgorithmFile=\"\" planningAlgorithmParametersString=\"\" \
             trafficMatrixFile=\"\">",
            escape_attr(title)
        ))?;
        sink.write_line("\t<layer id=\"physicalTopology\">")
    }

    fn write_node<S: LineSink>(
        &self,
        position: usize,
        count:    usize,
        node:     &GeoNode,
        sink:     &mut S,
    ) -> MatPlanResult<()> {
        let cfg = &self.config;
        let id = position + 1;
        let capacity = cfg.capacity_tier(position, count);

        sink.write_line(&format!(
            "\t\t<node id=\"{id}\" nodeLevel=\"{}\" nodeName=\"{}\" nodePopulation=\"{}\" \
             nodeTimezone=\"{}\" xCoord=\"{}\" yCoord=\"{}\">",
            cfg.node_level,
            escape_attr(&node.name),
            escape_attr(&cfg.node_population),
            cfg.node_timezone,
            escape_attr(node.x_text()),
            escape_attr(node.y_text()),
        ))?;
        sink.write_line(&format!("\t\t\t<eoTransmitter number=\"{capacity}\"/>"))?;
        sink.write_line(&format!("\t\t\t<oeReceiver number=\"{capacity}\"/>"))?;
        sink.write_line(&format!("\t\t\t<wc number=\"{}\"/>", cfg.wavelength_converters))?;
        sink.write_line("\t\t</node>")
    }

    fn write_trailer<S: LineSink>(&self, sink: &mut S) -> MatPlanResult<()> {
        sink.write_line("\t\t<levelInformationMatrix>")?;
        sink.write_line("\t\t\t<factor idDest=\"1\" idOrig=\"1\" value=\"1\"/>")?;
        sink.write_line("\t\t</levelInformationMatrix>")?;
        sink.write_line(&format!(
            "\t\t<lightpathCapacity value=\"{}\"/>",
            self.config.lightpath_capacity
        ))?;
        sink.write_line("\t</layer>")?;
        sink.write_line("</network>")
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Network title for an input path: its file name minus the last four
/// characters (the `.xml` extension).  Names of four characters or fewer give
/// an empty title.
pub fn document_title(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let keep = name.chars().count().saturating_sub(4);
    name.chars().take(keep).collect()
}

/// Escape text for use inside a double-quoted attribute value.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
