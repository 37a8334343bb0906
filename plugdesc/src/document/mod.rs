//! Reading descriptor files into [`TreeNode`]s.
//!
//! YAML text is parsed with `yaml-rust2`'s event parser. Scalars keep their
//! raw text: no number or boolean resolution happens here, that is left to
//! the schema. Literal and folded block scalars become
//! [`TreeNode::BlockScalar`] holding their source lines, indicator first;
//! nulls and aliases become empty plain scalars.
//!
//! # Examples
//!
//! ```
//! use plugdesc::document::Document;
//! use plugdesc::{PluginDescriptor, TreeNode};
//!
//! let doc = Document::parse("name: Example\ndepend: [Vault]\n").unwrap();
//! assert!(matches!(doc.root(), TreeNode::Mapping(_)));
//!
//! let decoded = doc.decode(PluginDescriptor::schema()).unwrap();
//! assert_eq!(decoded.record.name.as_deref(), Some("Example"));
//! ```

mod reader;

use crate::decode::{decode_tree, Decoded};
use crate::error::{Error, Result};
use crate::schema::{Record, Schema};
use crate::tree::TreeNode;
use reader::TreeBuilder;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use yaml_rust2::parser::Parser;

/// Something about the document worth telling the user that is not a
/// decoding problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentWarning {
    /// The stream held more than one YAML document; only the first is used.
    MultipleDocuments {
        /// Number of documents in the stream.
        count: usize,
    },
}

impl fmt::Display for DocumentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleDocuments { count } => write!(
                f,
                "file contains {count} YAML documents, only the first is decoded"
            ),
        }
    }
}

/// A parsed YAML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: TreeNode,
    warnings: Vec<DocumentWarning>,
}

impl Document {
    /// Parse YAML text.
    ///
    /// An empty stream, or a document holding only null, parses as an empty
    /// mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is not valid YAML.
    pub fn parse(text: &str) -> Result<Self> {
        let mut parser = Parser::new_from_str(text);
        let mut builder = TreeBuilder::new(text);

        parser.load(&mut builder, true).map_err(|err| Error::Parse {
            message: err.info().to_string(),
            line: err.marker().line(),
            column: err.marker().col() + 1,
        })?;

        let (root, documents) = builder.finish();
        let mut warnings = Vec::new();
        if documents > 1 {
            log::debug!("Ignoring {} trailing YAML documents", documents - 1);
            warnings.push(DocumentWarning::MultipleDocuments { count: documents });
        }

        Ok(Self {
            root: root.unwrap_or(TreeNode::Mapping(Vec::new())),
            warnings,
        })
    }

    /// The root node of the first document.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Warnings raised while reading.
    #[must_use]
    pub fn warnings(&self) -> &[DocumentWarning] {
        &self.warnings
    }

    /// Split into the root node and the warnings.
    #[must_use]
    pub fn into_parts(self) -> (TreeNode, Vec<DocumentWarning>) {
        (self.root, self.warnings)
    }

    /// Decode the root against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAMapping`] if the root is not a mapping.
    pub fn decode<R: Record>(&self, schema: &Schema<R>) -> Result<Decoded<R>> {
        decode_tree(&self.root, schema)
    }
}

/// A descriptor file that was read and decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDescriptor<R> {
    /// Where the descriptor was read from.
    pub path: PathBuf,
    /// The decoded record and its diagnostics.
    pub decoded: Decoded<R>,
    /// Warnings from reading the file.
    pub warnings: Vec<DocumentWarning>,
}

/// Read, parse, and decode the descriptor at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, or its top
/// level is not a mapping.
pub fn load_descriptor<R: Record>(path: &Path, schema: &Schema<R>) -> Result<LoadedDescriptor<R>> {
    log::debug!("Loading descriptor from {}", path.display());

    let text = std::fs::read_to_string(path)?;
    let document = Document::parse(&text)?;
    let decoded = document.decode(schema)?;

    log::debug!(
        "Decoded {} with {} diagnostics",
        path.display(),
        decoded.diagnostics.len()
    );

    Ok(LoadedDescriptor {
        path: path.to_path_buf(),
        decoded,
        warnings: document.into_parts().1,
    })
}
