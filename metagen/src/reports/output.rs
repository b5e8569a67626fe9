//! Output targets for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to print with these methods; implementations
/// decide where the lines go.
pub trait Output {
    /// Render a title underlined with `=`.
    fn title(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn key_value_indented(&mut self, key: &str, value: &str);

    fn numbered_item(&mut self, index: usize, text: &str);

    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., a written file).
    fn added_item(&mut self, text: &str);

    /// Render a warning. Terminal output sends these to stderr.
    fn warning(&mut self, msg: &str);

    /// Render a separator with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of text as-is.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Formats every line of output the same way for every target.
fn line(kind: Line<'_>) -> String {
    match kind {
        Line::Title(text) => format!("{}\n{}", text, "=".repeat(text.chars().count())),
        Line::Section(name) => format!("{}:", name),
        Line::KeyValue(key, value) => format!("{}: {}", key, value),
        Line::KeyValueIndented(key, value) => format!("  {}: {}", key, value),
        Line::Numbered(index, text) => format!("  {}. {}", index, text),
        Line::Item(text) => format!("  - {}", text),
        Line::Added(text) => format!("  + {}", text),
        Line::Warning(msg) => format!("warning: {}", msg),
        Line::Divider(label) => format!("── {} ──", label),
    }
}

enum Line<'a> {
    Title(&'a str),
    Section(&'a str),
    KeyValue(&'a str, &'a str),
    KeyValueIndented(&'a str, &'a str),
    Numbered(usize, &'a str),
    Item(&'a str),
    Added(&'a str),
    Warning(&'a str),
    Divider(&'a str),
}

/// Prints to stdout, with warnings on stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", line(Line::Title(text)));
    }

    fn section(&mut self, name: &str) {
        println!("{}", line(Line::Section(name)));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}", line(Line::KeyValue(key, value)));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("{}", line(Line::KeyValueIndented(key, value)));
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("{}", line(Line::Numbered(index, text)));
    }

    fn list_item(&mut self, text: &str) {
        println!("{}", line(Line::Item(text)));
    }

    fn added_item(&mut self, text: &str) {
        println!("{}", line(Line::Added(text)));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", line(Line::Warning(msg)));
    }

    fn divider(&mut self, label: &str) {
        println!("{}", line(Line::Divider(label)));
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects everything, warnings included, into one string.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct StringOutput {
    buf: String,
}

#[cfg(test)]
impl StringOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn push(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }
}

#[cfg(test)]
impl Output for StringOutput {
    fn title(&mut self, text: &str) {
        self.push(&line(Line::Title(text)));
    }

    fn section(&mut self, name: &str) {
        self.push(&line(Line::Section(name)));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.push(&line(Line::KeyValue(key, value)));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.push(&line(Line::KeyValueIndented(key, value)));
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        self.push(&line(Line::Numbered(index, text)));
    }

    fn list_item(&mut self, text: &str) {
        self.push(&line(Line::Item(text)));
    }

    fn added_item(&mut self, text: &str) {
        self.push(&line(Line::Added(text)));
    }

    fn warning(&mut self, msg: &str) {
        self.push(&line(Line::Warning(msg)));
    }

    fn divider(&mut self, label: &str) {
        self.push(&line(Line::Divider(label)));
    }

    fn preformatted(&mut self, text: &str) {
        self.push(text);
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }
}

/// Render a report into a string.
#[cfg(test)]
pub fn render_to_string(report: &dyn Report) -> String {
    let mut out = StringOutput::new();
    report.render(&mut out);
    out.into_string()
}
