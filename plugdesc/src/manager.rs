//! Keeping a decoded descriptor current as its file changes.
//!
//! The manager does not watch the filesystem itself. Whatever watches the
//! file sends [`ChangeEvent`]s over a channel, and the owner of the manager
//! calls [`DescriptorManager::process_changes`] when it is ready to pick them
//! up. A burst of events for the same file results in a single re-decode.
//!
//! # Examples
//!
//! ```
//! use plugdesc::manager::{ChangeEvent, DescriptorManager};
//! use plugdesc::PluginDescriptor;
//! use std::sync::mpsc;
//!
//! let mut manager = DescriptorManager::new("plugin.yml", PluginDescriptor::schema().clone());
//! let (tx, rx) = mpsc::channel();
//! tx.send(ChangeEvent::Modified("plugin.yml".into())).unwrap();
//! tx.send(ChangeEvent::Modified("plugin.yml".into())).unwrap();
//!
//! let changed = manager
//!     .process_changes(&rx, |_| Ok("name: Example\n".to_string()))
//!     .unwrap();
//! assert!(changed);
//! assert_eq!(manager.generation(), 1);
//! assert_eq!(manager.record().name.as_deref(), Some("Example"));
//! ```

use crate::decode::Decoded;
use crate::document::{Document, DocumentWarning};
use crate::error::Result;
use crate::schema::{Record, Schema};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

/// A change reported by a file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The file at this path was created or written.
    Modified(PathBuf),
}

impl ChangeEvent {
    /// The path the event refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Modified(path) => path,
        }
    }
}

/// Holds the latest decoded value of one descriptor file.
#[derive(Debug, Clone)]
pub struct DescriptorManager<R> {
    path: PathBuf,
    schema: Schema<R>,
    current: Decoded<R>,
    warnings: Vec<DocumentWarning>,
    generation: u64,
}

impl<R: Record> DescriptorManager<R> {
    /// Create a manager for the descriptor at `path`.
    ///
    /// Until the first import the current value is an empty record.
    pub fn new(path: impl Into<PathBuf>, schema: Schema<R>) -> Self {
        Self {
            path: path.into(),
            schema,
            current: Decoded::default(),
            warnings: Vec::new(),
            generation: 0,
        }
    }

    /// The watched descriptor path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The latest decode result.
    #[must_use]
    pub fn current(&self) -> &Decoded<R> {
        &self.current
    }

    /// The latest decoded record.
    #[must_use]
    pub fn record(&self) -> &R {
        &self.current.record
    }

    /// Warnings from the latest successful import.
    #[must_use]
    pub fn warnings(&self) -> &[DocumentWarning] {
        &self.warnings
    }

    /// Number of successful imports so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Decode `text` and make it the current value.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid YAML or its top level is not a
    /// mapping. The previous value is kept in that case.
    pub fn reimport(&mut self, text: &str) -> Result<&Decoded<R>> {
        let document = Document::parse(text)?;
        let decoded = document.decode(&self.schema)?;

        self.current = decoded;
        self.warnings = document.into_parts().1;
        self.generation += 1;
        log::debug!(
            "Reimported {} (generation {}, {} diagnostics)",
            self.path.display(),
            self.generation,
            self.current.diagnostics.len()
        );
        Ok(&self.current)
    }

    /// Drain every pending event and re-decode once if any refer to the
    /// watched path.
    ///
    /// `read` is called at most once, with the watched path. Returns whether a
    /// re-decode happened.
    ///
    /// # Errors
    ///
    /// Returns an error if `read` fails or the new text cannot be imported.
    /// The previous value is kept in that case.
    pub fn process_changes<F>(&mut self, events: &Receiver<ChangeEvent>, read: F) -> Result<bool>
    where
        F: FnOnce(&Path) -> io::Result<String>,
    {
        let mut pending = 0usize;
        let mut relevant = false;
        for event in events.try_iter() {
            pending += 1;
            relevant |= event.path() == self.path;
        }

        if !relevant {
            if pending > 0 {
                log::debug!("Ignored {pending} change events for other files");
            }
            return Ok(false);
        }

        log::debug!(
            "Coalesced {pending} change events for {}",
            self.path.display()
        );
        let text = read(&self.path)?;
        self.reimport(&text)?;
        Ok(true)
    }
}
