//! `s2m-matplan` — write MatPlanWDM network documents.
//!
//! The emitter turns an extracted [`Topology`](s2m_sndlib::Topology) into the
//! `physicalTopology` layer of a MatPlanWDM document, one text line at a
//! time, through a [`LineSink`].
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`emitter`] | `Emitter`, `EmitReport`, `document_title`                 |
//! | [`resolve`] | `resolve_endpoint`, `resolve_link`, `ResolvedLink`, `Diagnostic` |
//! | [`sink`]    | `LineSink` trait, `VecSink`, `IoSink`                     |
//! | [`error`]   | `MatPlanError`, `MatPlanResult<T>`                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use s2m_matplan::{Emitter, IoSink};
//!
//! let mut sink = IoSink::new(std::io::stdout().lock());
//! let report = Emitter::new(config).emit("nobel-eu", &topo.nodes, &topo.links, &mut sink)?;
//! sink.finish()?;
//! ```

pub mod emitter;
pub mod error;
pub mod resolve;
pub mod sink;


pub use emitter::{EmitReport, Emitter, document_title};
pub use error::{MatPlanError, MatPlanResult};
pub use resolve::{Diagnostic, ResolvedLink, resolve_endpoint, resolve_link};
pub use sink::{IoSink, LineSink, VecSink};
