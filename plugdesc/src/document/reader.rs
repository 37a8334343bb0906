//! YAML event stream to [`TreeNode`] conversion.

use crate::tree::{BlockStyle, TreeNode};
use yaml_rust2::parser::{Event, MarkedEventReceiver};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Plain scalars YAML reads as null.
const NULL_TOKENS: [&str; 5] = ["~", "null", "Null", "NULL", ""];

/// A container being built.
enum Frame {
    Sequence(Vec<TreeNode>),
    Mapping {
        entries: Vec<(String, TreeNode)>,
        pending_key: Option<String>,
    },
}

/// Receives parser events and assembles the first document's tree.
///
/// Block scalars are sliced from the source lines so that the decoder sees
/// their raw text rather than the parser's folded value.
pub(super) struct TreeBuilder<'a> {
    lines: Vec<&'a str>,
    stack: Vec<Frame>,
    root: Option<TreeNode>,
    documents: usize,
}

impl<'a> TreeBuilder<'a> {
    pub(super) fn new(source: &'a str) -> Self {
        Self {
            lines: source.split('\n').collect(),
            stack: Vec::new(),
            root: None,
            documents: 0,
        }
    }

    /// The first document's root, if the stream held any document.
    pub(super) fn finish(self) -> (Option<TreeNode>, usize) {
        (self.root, self.documents)
    }

    fn push_complete(&mut self, node: TreeNode) {
        match self.stack.last_mut() {
            None => self.root = Some(node),
            Some(Frame::Sequence(items)) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
            }) => match pending_key.take() {
                Some(key) => entries.push((key, node)),
                None => *pending_key = Some(key_text(node)),
            },
        }
    }

    fn push_scalar(&mut self, value: String, style: TScalarStyle, mark: Marker) {
        let node = match style {
            TScalarStyle::Literal => self.block(BlockStyle::Literal, &value, mark),
            TScalarStyle::Folded => self.block(BlockStyle::Folded, &value, mark),
            TScalarStyle::Plain if NULL_TOKENS.contains(&value.as_str()) => {
                // A null document is an empty one.
                if self.stack.is_empty() {
                    TreeNode::Mapping(Vec::new())
                } else {
                    TreeNode::PlainScalar(String::new())
                }
            }
            _ => TreeNode::PlainScalar(value),
        };
        self.push_complete(node);
    }

    fn block(&self, style: BlockStyle, value: &str, mark: Marker) -> TreeNode {
        let text = self
            .raw_block(style, value, mark)
            .unwrap_or_else(|| format!("{}\n{value}", style.indicator()));
        TreeNode::BlockScalar { style, text }
    }

    /// Source lines of the block scalar whose indicator sits at `mark`,
    /// from the indicator to the last non-blank content line.
    fn raw_block(&self, style: BlockStyle, value: &str, mark: Marker) -> Option<String> {
        let line_index = mark.line().checked_sub(1)?;
        let header_line = *self.lines.get(line_index)?;
        let start = header_line
            .char_indices()
            .nth(mark.col())
            .map_or(header_line.len(), |(i, _)| i);
        let header = header_line.get(start..)?.trim_end_matches('\r');
        if !header.starts_with(style.indicator()) {
            return None;
        }

        let mut raw = vec![header];
        if value.is_empty() {
            return Some(header.to_string());
        }

        let parent_indent = indentation(header_line);
        let mut content_indent = header[1..]
            .chars()
            .find_map(|c| c.to_digit(10))
            .filter(|digit| *digit > 0)
            .map(|digit| parent_indent + digit as usize);

        for line in &self.lines[line_index + 1..] {
            let body = line.trim_end_matches('\r');
            if body.trim().is_empty() {
                raw.push(body);
                continue;
            }
            let indent = indentation(body);
            let required = *content_indent.get_or_insert(indent);
            if indent < required || indent <= parent_indent {
                break;
            }
            raw.push(body);
        }

        while raw.len() > 1 && raw.last().is_some_and(|line| line.trim().is_empty()) {
            raw.pop();
        }
        Some(raw.join("\n"))
    }
}

impl MarkedEventReceiver for TreeBuilder<'_> {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        if let Event::DocumentStart { .. } = ev {
            self.documents += 1;
            return;
        }
        if self.documents > 1 {
            return;
        }

        match ev {
            Event::Scalar(value, style, _anchor_id, _tag) => self.push_scalar(value, style, mark),
            Event::SequenceStart(..) => self.stack.push(Frame::Sequence(Vec::new())),
            Event::MappingStart(..) => self.stack.push(Frame::Mapping {
                entries: Vec::new(),
                pending_key: None,
            }),
            Event::SequenceEnd => {
                if let Some(Frame::Sequence(items)) = self.stack.pop() {
                    self.push_complete(TreeNode::Sequence(items));
                }
            }
            Event::MappingEnd => {
                if let Some(Frame::Mapping { entries, .. }) = self.stack.pop() {
                    self.push_complete(TreeNode::Mapping(entries));
                }
            }
            // Anchors are not resolved.
            Event::Alias(_) => self.push_complete(TreeNode::PlainScalar(String::new())),
            _ => {}
        }
    }
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn key_text(node: TreeNode) -> String {
    match node {
        TreeNode::PlainScalar(text) => text,
        TreeNode::BlockScalar { style, text } => crate::decode::fold_block(style, &text),
        other => other.to_string(),
    }
}
