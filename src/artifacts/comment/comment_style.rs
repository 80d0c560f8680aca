/// How `DELETED` and `NEW` markers are rendered into a line of a given file type
///
/// Deleted lines are commented out so the annotated file stays close to valid
/// source; new lines keep their payload and get a trailing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// Single-line comment such as `// ` or `# `
    LinePrefix {
        prefix: &'static str,
        new_suffix: &'static str,
    },
    /// Block comment such as `/* */` or `<!-- -->`
    Block {
        open: &'static str,
        close: &'static str,
        new_block: &'static str,
    },
}

impl CommentStyle {
    pub const SLASH: CommentStyle = CommentStyle::LinePrefix {
        prefix: "// ",
        new_suffix: " // NEW",
    };
    pub const HASH: CommentStyle = CommentStyle::LinePrefix {
        prefix: "# ",
        new_suffix: " # NEW",
    };
    pub const DASH: CommentStyle = CommentStyle::LinePrefix {
        prefix: "-- ",
        new_suffix: " -- NEW",
    };
    pub const PERCENT: CommentStyle = CommentStyle::LinePrefix {
        prefix: "% ",
        new_suffix: " % NEW",
    };
    pub const SEMICOLON: CommentStyle = CommentStyle::LinePrefix {
        prefix: "; ",
        new_suffix: " ; NEW",
    };
    pub const HTML: CommentStyle = CommentStyle::Block {
        open: "<!--",
        close: "-->",
        new_block: "<!-- NEW -->",
    };
    pub const C_BLOCK: CommentStyle = CommentStyle::Block {
        open: "/*",
        close: "*/",
        new_block: "/* NEW */",
    };

    pub fn deleted_line(&self, line: &str) -> String {
        let (content, eol) = split_line_ending(line);

        match self {
            CommentStyle::LinePrefix { prefix, .. } => format!("{prefix}DELETED: {content}{eol}"),
            CommentStyle::Block { open, close, .. } => {
                format!("{open} DELETED: {content} {close}{eol}")
            }
        }
    }

    pub fn append_new_suffix(&self, line: &str) -> String {
        let (content, eol) = split_line_ending(line);

        match self {
            CommentStyle::LinePrefix { new_suffix, .. } => format!("{content}{new_suffix}{eol}"),
            CommentStyle::Block { new_block, .. } => format!("{content} {new_block}{eol}"),
        }
    }
}

/// Split a line into its payload and its terminator (`\r\n`, `\n`, `\r` or nothing)
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else if let Some(content) = line.strip_suffix('\r') {
        (content, "\r")
    } else {
        (line, "")
    }
}
