#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # plugdesc
//!
//! A typed decoder for plugin descriptor documents.
//!
//! A descriptor such as a Bukkit `plugin.yml` is read into a loosely-typed
//! [`TreeNode`] and then decoded against a [`Schema`] into a typed record.
//! Decoding is total: every problem in the document becomes a
//! [`DecodeDiagnostic`] and the rest of the document still decodes.
//!
//! ## Core Types
//!
//! - [`TreeNode`] and [`BlockStyle`]: the parsed document tree
//! - [`Schema`], [`SchemaRule`] and [`Record`]: what to decode and where it goes
//! - [`decode`], [`decode_tree`] and [`Decoded`]: the decoder
//! - [`PluginDescriptor`]: the `plugin.yml` record and its schema
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use plugdesc::document::Document;
//! use plugdesc::{DiagnosticKind, PluginDescriptor};
//!
//! let yaml = "\
//! name: Example
//! version: 1.0
//! main: com.example.Example
//! depend: [Vault]
//! database: sometimes
//! ";
//! let decoded = Document::parse(yaml)
//!     .unwrap()
//!     .decode(PluginDescriptor::schema())
//!     .unwrap();
//!
//! assert_eq!(decoded.record.depend, Some(vec!["Vault".to_string()]));
//! assert_eq!(decoded.record.database, Some(false));
//! assert_eq!(decoded.diagnostics[0].problem, DiagnosticKind::ExpectedBoolean);
//! ```

pub mod config;
pub mod decode;
pub mod document;
pub mod error;
pub mod logging;
pub mod manager;
pub mod output;
pub mod plugin;
pub mod schema;
pub mod tree;

// Re-export key types at crate root for convenience
pub use config::{Settings, SettingsBuilder};
pub use decode::{decode, decode_tree, DecodeDiagnostic, Decoded, DiagnosticKind};
pub use document::{load_descriptor, Document, DocumentWarning, LoadedDescriptor};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::{ChangeEvent, DescriptorManager};
pub use output::{DecodeReport, OutputFormat, OutputFormatter};
pub use plugin::{LoadOrder, PluginDescriptor};
pub use schema::{BooleanPolicy, FieldSlot, Record, RuleKind, ScalarValue, Schema, SchemaRule};
pub use tree::{BlockStyle, TreeNode};
