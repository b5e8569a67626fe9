//! Tree command report.

use super::output::{Output, Report};

/// A rendered containment tree.
#[derive(Debug)]
pub struct TreeReport {
    /// The tree, without a trailing newline.
    pub rendered: String,
    /// Number of accessor families in the tree.
    pub families: usize,
}

impl Report for TreeReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.rendered);
        if self.families == 0 {
            out.warning("schema declares no entities below the root");
        }
    }
}
