//! Command-line grammar.
//!
//! A client line is either plain chat text or, when it begins with the
//! command marker `-`, a command selected by the two characters that
//! follow the marker. Tokens are split on single spaces; verbs that carry
//! a free-text payload recover the original substring after their header
//! tokens so interior whitespace survives intact.

/// Character that introduces a command line.
pub const COMMAND_MARKER: char = '-';

/// Line that ends a session. Not a command - it is matched verbatim
/// before any command classification happens.
pub const EXIT_KEYWORD: &str = "exit";

/// The closed set of command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `-hp` - usage help.
    Help,
    /// `-dm <user> <text>` - private message.
    Direct,
    /// `-cu <name>` - change username.
    Rename,
    /// `-mg <group> <member>...` - create a group.
    MakeGroup,
    /// `-sg <group> <text>` - message a group.
    SendGroup,
    /// `-sc <color>` - set display color.
    SetColor,
    /// `-la` - list the art catalog.
    ListArt,
    /// `-pa <name>` - broadcast an art entry.
    PrintArt,
}

impl Verb {
    /// Every verb, in help-text order.
    pub const ALL: [Verb; 8] = [
        Verb::Help,
        Verb::Direct,
        Verb::Rename,
        Verb::MakeGroup,
        Verb::SendGroup,
        Verb::SetColor,
        Verb::ListArt,
        Verb::PrintArt,
    ];

    /// The two-character tag that selects this verb on the wire.
    pub fn tag(&self) -> &'static str {
        match self {
            Verb::Help => "hp",
            Verb::Direct => "dm",
            Verb::Rename => "cu",
            Verb::MakeGroup => "mg",
            Verb::SendGroup => "sg",
            Verb::SetColor => "sc",
            Verb::ListArt => "la",
            Verb::PrintArt => "pa",
        }
    }

    /// Look up a verb by its wire tag. The set is closed: anything not
    /// listed here is a "wrong option".
    pub fn from_tag(tag: &str) -> Option<Verb> {
        Verb::ALL.iter().copied().find(|v| v.tag() == tag)
    }
}

/// Classification of one received line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Plain chat text, broadcast to everyone else.
    Chat(&'a str),
    /// A command line; `tag` is the two characters after the marker.
    Command {
        /// Candidate verb tag. May not name a real verb.
        tag: &'a str,
    },
    /// Begins with the marker but is too short to carry a tag.
    Malformed,
}

/// Classify a received line as chat text or a tagged command.
pub fn classify(line: &str) -> LineKind<'_> {
    if !line.starts_with(COMMAND_MARKER) {
        return LineKind::Chat(line);
    }
    match line.get(1..3) {
        Some(tag) => LineKind::Command { tag },
        None => LineKind::Malformed,
    }
}

/// Split a line on single spaces, the way handlers count tokens.
///
/// Consecutive spaces yield empty tokens; that matches the wire grammar,
/// where the separator is exactly one space.
pub fn tokens(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

/// The original text following the first `n` space-separated tokens and
/// the single space after them. Interior whitespace is preserved exactly.
///
/// Returns `None` when the line has no payload after `n` tokens.
pub fn payload(line: &str, n: usize) -> Option<&str> {
    line.splitn(n + 1, ' ').nth(n)
}
