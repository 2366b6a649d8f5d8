use crate::block;
use crate::entity::{BlockNode, RenderTree};

use tracing::{debug, trace};

#[derive(Debug, Default)]
struct CodeFence {
    language: String,
    lines: Vec<String>,
}

/// Line-at-a-time builder for a [`RenderTree`].
#[derive(Debug, Default)]
pub struct Assembler {
    code: Option<CodeFence>,
    table: Option<Vec<Vec<String>>>,
    tree: RenderTree,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_code_block(&self) -> bool {
        self.code.is_some()
    }

    pub fn in_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn parsed(&self) -> &[BlockNode] {
        &self.tree
    }

    /// Feeds one raw source line. `next` is the following line, if any; a
    /// table is closed as soon as `next` is not another table row.
    pub fn push_line(&mut self, line: &str, next: Option<&str>) {
        let trimmed = line.trim();

        if let Some(language) = block::fence_language(trimmed) {
            self.toggle_fence(language);
            return;
        }

        if let Some(fence) = self.code.as_mut() {
            fence.lines.push(line.to_string());
            return;
        }

        if block::is_table_row(trimmed) {
            self.push_table_row(trimmed);
            if !next.map_or(false, |n| block::is_table_row(n.trim())) {
                self.flush_table();
            }
            return;
        }

        if trimmed.is_empty() {
            return;
        }

        self.tree.push(block::classify_line(trimmed));
    }

    /// An unterminated code fence is discarded with its buffered lines.
    pub fn finish(mut self) -> RenderTree {
        self.flush_table();
        if let Some(fence) = self.code.take() {
            debug!(
                language = %fence.language,
                lines = fence.lines.len(),
                "dropping unterminated code block"
            );
        }
        self.tree
    }

    fn toggle_fence(&mut self, language: &str) {
        match self.code.take() {
            Some(CodeFence { language, lines }) => {
                trace!(%language, lines = lines.len(), "closing code block");
                self.tree.push(BlockNode::CodeBlock { language, lines });
            }
            None => {
                trace!(%language, "opening code block");
                self.code = Some(CodeFence {
                    language: language.to_string(),
                    lines: Vec::new(),
                });
            }
        }
    }

    fn push_table_row(&mut self, trimmed: &str) {
        let rows = self.table.get_or_insert_with(Vec::new);
        if block::is_separator_row(trimmed) {
            return;
        }
        rows.push(block::split_cells(trimmed));
    }

    fn flush_table(&mut self) {
        let Some(rows) = self.table.take() else {
            return;
        };
        let mut rows = rows.into_iter();
        match rows.next() {
            Some(header) => {
                let rows: Vec<Vec<String>> = rows.collect();
                trace!(columns = header.len(), rows = rows.len(), "emitting table");
                self.tree.push(BlockNode::Table { header, rows });
            }
            None => debug!("dropping table made only of separator rows"),
        }
    }
}

/// Renders a whole article body. Never fails: anything the grammar does not
/// recognise becomes paragraph text or is dropped.
pub fn render_content(content: &str) -> RenderTree {
    let mut assembler = Assembler::new();
    let mut lines = content.lines().peekable();
    while let Some(line) = lines.next() {
        assembler.push_line(line, lines.peek().copied());
    }
    assembler.finish()
}
