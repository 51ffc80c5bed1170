//! sndlib2matplan — convert an sndlib network model to a MatPlanWDM network
//! model.
//!
//! ```text
//! sndlib2matplan nobel-eu.xml > nobel-eu.matplan.xml
//! ```
//!
//! The document goes to stdout.  Links whose endpoints cannot be found are
//! left out of the document and reported on stderr, one line each.  Those
//! lines are written directly, not through the log filter, so `RUST_LOG`
//! cannot hide them.
//!
//! Environment:
//!   - `RUST_LOG`   — log filter, default `warn`.
//!   - `S2M_CONFIG` — optional YAML file overriding `MatPlanConfig` fields.

mod config;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use s2m_matplan::{EmitReport, Emitter, IoSink, LineSink, document_title};
use s2m_sndlib::{extract_topology, load_document};

fn main() -> Result<()> {
    init_tracing();

    let Some(input) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: sndlib2matplan <sndlib network file>");
    };

    let config = config::load_config()?;
    let emitter = Emitter::new(config).context("invalid MatPlanWDM configuration")?;

    let stdout = std::io::stdout();
    let report = convert(&input, &emitter, stdout.lock())?;
    write_diagnostics(&report, std::io::stderr().lock()).context("failed to write diagnostics")?;

    info!(
        nodes = report.nodes,
        fibres = report.fibres,
        skipped = report.skipped_links(),
        "conversion finished"
    );
    Ok(())
}

/// Read `input`, extract its topology and write the MatPlanWDM document to
/// `out`.  Nothing is written unless the whole input was read successfully.
fn convert<W: Write>(input: &Path, emitter: &Emitter, out: W) -> Result<EmitReport> {
    let doc = load_document(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let topology = extract_topology(&doc)
        .with_context(|| format!("failed to extract topology from {}", input.display()))?;

    info!(
        nodes = topology.nodes.len(),
        links = topology.links.len(),
        namespace = doc.namespace(),
        "topology extracted"
    );

    let mut sink = IoSink::new(out);
    let report = emitter.emit(&document_title(input), &topology.nodes, &topology.links, &mut sink)?;
    sink.finish()?;
    Ok(report)
}

/// One line per diagnostic, in link order.
fn write_diagnostics<W: Write>(report: &EmitReport, mut err: W) -> std::io::Result<()> {
    for problem in &report.diagnostics {
        writeln!(err, "{problem}")?;
    }
    err.flush()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use s2m_core::MatPlanConfig;
    use s2m_matplan::Emitter;

    use super::{convert, write_diagnostics};

    const INPUT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<network xmlns="http://sndlib.zib.de/network" version="1.0">
  <networkStructure>
    <nodes coordinatesType="geographical">
      <node id="Zagreb"><coordinates><x>15.98</x><y>45.81</y></coordinates></node>
      <node id="Split"><coordinates><x>16.44</x><y>43.51</y></coordinates></node>
    </nodes>
    <links>
      <link id="L1"><source>Zagreb</source><target>Split</target></link>
      <link id="L2"><source>Zagreb</source><target>Rijeka</target></link>
    </links>
  </networkStructure>
</network>"#;

    fn write_input(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).expect("create input");
        f.write_all(body.as_bytes()).expect("write input");
        path
    }

    #[test]
    fn converts_file_to_document() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_input(&dir, "croatia.xml", INPUT);
        let emitter = Emitter::new(MatPlanConfig::default()).unwrap();

        let mut out = Vec::new();
        let report = convert(&path, &emitter, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(report.fibres, 1);
        assert_eq!(report.skipped_links(), 1);
        assert!(text.contains("title=\"croatia\""));
        assert!(text.contains("linkLengthInKm=\"258\""));
        assert!(text.ends_with("</network>\n"));
    }

    #[test]
    fn malformed_input_writes_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_input(&dir, "broken.xml", "<network><networkStructure>");
        let emitter = Emitter::new(MatPlanConfig::default()).unwrap();

        let mut out = Vec::new();
        assert!(convert(&path, &emitter, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn missing_node_id_writes_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let body = "<network><networkStructure><nodes><node/></nodes></networkStructure></network>";
        let path = write_input(&dir, "noid.xml", body);
        let emitter = Emitter::new(MatPlanConfig::default()).unwrap();

        let mut out = Vec::new();
        let err = convert(&path, &emitter, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("`id`"), "{err:#}");
        assert!(out.is_empty());
    }

    #[test]
    fn diagnostics_written_as_plain_lines() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_input(&dir, "croatia.xml", INPUT);
        let emitter = Emitter::new(MatPlanConfig::default()).unwrap();
        let report = convert(&path, &emitter, std::io::sink()).unwrap();

        let mut err = Vec::new();
        write_diagnostics(&report, &mut err).unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Rijeka not found in node list\n");
    }
}
