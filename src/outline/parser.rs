use crate::application::data::OutlineFormat;
use crate::outline::{LayeredParser, OutlineEvent, TreeParser};

/// One of the supported notations, selected by [`OutlineFormat`].
#[derive(Debug)]
pub enum OutlineParser {
    Layered(LayeredParser),
    Tree(TreeParser),
}

impl OutlineParser {
    pub fn for_format(format: OutlineFormat) -> Self {
        match format {
            OutlineFormat::Layered => OutlineParser::Layered(LayeredParser::new()),
            OutlineFormat::Tree => OutlineParser::Tree(TreeParser::new()),
        }
    }

    /// Returns the event for one raw line, or `None` when the line is skipped.
    pub fn parse_line(&mut self, line: &str) -> Option<OutlineEvent> {
        match self {
            OutlineParser::Layered(parser) => parser.parse_line(line),
            OutlineParser::Tree(parser) => parser.parse_line(line),
        }
    }

    /// Lazily parses every line of `text` in order.
    pub fn events(mut self, text: &str) -> impl Iterator<Item = OutlineEvent> + '_ {
        text.lines().filter_map(move |line| self.parse_line(line))
    }
}
