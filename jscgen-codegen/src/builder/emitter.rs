//! Text emitter for generating properly indented code.

use std::fmt::Display;

use super::Indent;

/// Stateful text accumulator with block indentation and list joining.
///
/// Indentation is written lazily: the first text placed on a fresh line is
/// prefixed with one indent unit per open block. Every mutator returns
/// `&mut Self` so calls can be chained.
///
/// # Example
///
/// ```
/// use jscgen_codegen::builder::Emitter;
///
/// let mut e = Emitter::java();
/// e.append("void run()")
///     .append_wrapped(" throws ", None, "")
///     .append(" ")
///     .begin_block()
///     .append("go()")
///     .terminate()
///     .end_block();
///
/// assert_eq!(e.build(), "void run() {\n  go();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct Emitter {
    indent_level: usize,
    indent: Indent,
    buffer: String,
    line_open: bool,
}

impl Emitter {
    /// Create a new Emitter with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
            line_open: false,
        }
    }

    /// Create a new Emitter with 2-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Append text verbatim.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.write(text);
        self
    }

    /// Append text verbatim when present. `None` is a no-op.
    pub fn append_opt(&mut self, text: Option<&str>) -> &mut Self {
        if let Some(text) = text {
            self.write(text);
        }
        self
    }

    /// Append `prefix`, `text` and `suffix`, but only when `text` is present.
    ///
    /// Optional clauses such as ` extends Base` vanish entirely when the value
    /// is absent.
    pub fn append_wrapped(
        &mut self,
        prefix: &str,
        text: Option<&str>,
        suffix: &str,
    ) -> &mut Self {
        if let Some(text) = text {
            self.write(prefix);
            self.write(text);
            self.write(suffix);
        }
        self
    }

    /// Append a single space.
    pub fn space(&mut self) -> &mut Self {
        self.write(" ");
        self
    }

    /// Open a `{` block and indent what follows.
    pub fn begin_block(&mut self) -> &mut Self {
        self.write("{");
        self.newline();
        self.indent_level += 1;
        self
    }

    /// Close the innermost block with `}` at the enclosing indentation.
    pub fn end_block(&mut self) -> &mut Self {
        if self.line_open {
            self.newline();
        }
        self.indent_level = self.indent_level.saturating_sub(1);
        self.write("}");
        self.newline();
        self
    }

    /// Terminate a simple statement with `;` and end the line.
    pub fn terminate(&mut self) -> &mut Self {
        self.write(";");
        self.newline();
        self
    }

    /// End the current line.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.line_open = false;
        self
    }

    /// Emit an empty line, closing the current one first if it has content.
    pub fn blank_line(&mut self) -> &mut Self {
        if self.line_open {
            self.newline();
        }
        self.newline()
    }

    /// Join items with `", "`. An empty slice emits nothing.
    pub fn append_list<T: Display>(&mut self, items: &[T]) -> &mut Self {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&item.to_string());
        }
        self
    }

    /// Join items with `", "` between `prefix` and `suffix`.
    ///
    /// Like [`Emitter::append_wrapped`], nothing at all is emitted when the
    /// slice is empty.
    pub fn append_list_wrapped<T: Display>(
        &mut self,
        prefix: &str,
        items: &[T],
        suffix: &str,
    ) -> &mut Self {
        if !items.is_empty() {
            self.write(prefix);
            self.append_list(items);
            self.write(suffix);
        }
        self
    }

    /// Emit each item on its own line.
    pub fn append_lines<T: Display>(&mut self, items: &[T]) -> &mut Self {
        for item in items {
            self.write(&item.to_string());
            self.newline();
        }
        self
    }

    /// Get the current block nesting depth.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the emitter and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if !self.line_open {
            for _ in 0..self.indent_level {
                self.indent.write_to(&mut self.buffer);
            }
        }
        self.buffer.push_str(s);
        self.line_open = !s.ends_with('\n');
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::java()
    }
}
