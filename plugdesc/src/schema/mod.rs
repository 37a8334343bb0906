//! Declarative description of the keys a document may contain.
//!
//! A [`Schema`] is built once from a list of [`SchemaRule`]s and a
//! [`Record`] type. Construction binds every rule to the record's typed
//! setter and fails fast when a rule names a field the record does not have,
//! or a field whose type does not fit the rule's kind. After that, decoding
//! never looks a field up by name again.
//!
//! # Examples
//!
//! ```
//! use plugdesc::schema::{FieldSlot, Record, RuleKind, Schema, SchemaRule};
//!
//! #[derive(Debug, Default)]
//! struct Manifest {
//!     name: Option<String>,
//!     tags: Vec<String>,
//! }
//!
//! impl Record for Manifest {
//!     fn slot(field: &str) -> Option<FieldSlot<Self>> {
//!         match field {
//!             "name" => Some(FieldSlot::Text(|r, v| r.name = Some(v))),
//!             "tags" => Some(FieldSlot::TextList(|r, v| r.tags = v)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let schema = Schema::<Manifest>::new([
//!     SchemaRule::new("name", RuleKind::Scalar, "name"),
//!     SchemaRule::new("tags", RuleKind::StringList, "tags"),
//! ])
//! .unwrap();
//! assert_eq!(schema.len(), 2);
//!
//! // A rule naming a field that does not exist is rejected up front.
//! let err = Schema::<Manifest>::new([SchemaRule::new("id", RuleKind::Scalar, "id")]);
//! assert!(err.is_err());
//! ```

mod record;
mod rule;

pub use record::{FieldSlot, Record, ScalarValue};
pub use rule::{BooleanPolicy, RuleKind, SchemaRule};

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// A rule bound to the record's setter.
pub struct Binding<R> {
    rule: SchemaRule,
    slot: Option<FieldSlot<R>>,
}

impl<R> Binding<R> {
    /// The rule this binding was built from.
    #[must_use]
    pub fn rule(&self) -> &SchemaRule {
        &self.rule
    }

    /// The bound setter. `None` for ignored keys.
    #[must_use]
    pub fn slot(&self) -> Option<FieldSlot<R>> {
        self.slot
    }
}

impl<R> Clone for Binding<R> {
    fn clone(&self) -> Self {
        Self {
            rule: self.rule.clone(),
            slot: self.slot,
        }
    }
}

impl<R> fmt::Debug for Binding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("rule", &self.rule)
            .field("slot", &self.slot)
            .finish()
    }
}

/// A validated set of rules for record type `R`.
pub struct Schema<R> {
    bindings: Vec<Binding<R>>,
    index: HashMap<String, usize>,
}

impl<R: Record> Schema<R> {
    /// Bind `rules` to the fields of `R`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRule`] if two rules share a key, and
    /// [`Error::SchemaFieldMismatch`] if a rule's target field is missing
    /// from `R` or has a type the rule cannot write.
    pub fn new(rules: impl IntoIterator<Item = SchemaRule>) -> Result<Self> {
        let mut bindings = Vec::new();
        let mut index = HashMap::new();

        for rule in rules {
            if index.contains_key(&rule.key) {
                return Err(Error::DuplicateRule { key: rule.key });
            }

            let slot = Self::bind(&rule)?;
            index.insert(rule.key.clone(), bindings.len());
            bindings.push(Binding { rule, slot });
        }

        Ok(Self { bindings, index })
    }

    /// Resolve and type-check the setter for one rule.
    fn bind(rule: &SchemaRule) -> Result<Option<FieldSlot<R>>> {
        let mismatch = |field: &str, reason: String| Error::SchemaFieldMismatch {
            key: rule.key.clone(),
            field: field.to_string(),
            reason,
        };

        let field = match (&rule.kind, rule.target_field.as_deref()) {
            (RuleKind::Ignored, None) => return Ok(None),
            (RuleKind::Ignored, Some(field)) => {
                return Err(mismatch(field, "ignored keys take no target field".into()));
            }
            (_, None) => return Err(mismatch("", "rule has no target field".into())),
            (_, Some(field)) => field,
        };

        let slot = R::slot(field)
            .ok_or_else(|| mismatch(field, "record has no such field".into()))?;

        let fits = matches!(
            (&rule.kind, &slot),
            (RuleKind::Scalar, FieldSlot::Text(_))
                | (RuleKind::Boolean(BooleanPolicy::Strict), FieldSlot::Flag(_))
                | (RuleKind::Boolean(BooleanPolicy::Lenient), FieldSlot::FlagOrText(_))
                | (RuleKind::Enum, FieldSlot::Choice { .. })
                | (RuleKind::StringList, FieldSlot::TextList(_))
        );

        if !fits {
            return Err(mismatch(
                field,
                format!(
                    "{} rule cannot write a {} field",
                    rule.kind,
                    slot.type_name()
                ),
            ));
        }

        Ok(Some(slot))
    }
}

impl<R> Schema<R> {
    /// Look up the binding for a document key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Binding<R>> {
        self.index.get(key).map(|&i| &self.bindings[i])
    }

    /// Whether `key` is recognized.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &SchemaRule> {
        self.bindings.iter().map(Binding::rule)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the schema has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<R> Clone for Schema<R> {
    fn clone(&self) -> Self {
        Self {
            bindings: self.bindings.clone(),
            index: self.index.clone(),
        }
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}
