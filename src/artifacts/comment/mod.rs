//! Comment style registry
//!
//! Maps a lower-cased file extension to the [`CommentStyle`] used when
//! annotating modified text files. Unknown extensions fall back to `#`.

pub mod comment_style;

pub use comment_style::CommentStyle;

use std::path::Path;

pub const FALLBACK_STYLE: CommentStyle = CommentStyle::HASH;

pub const EXTENSION_STYLES: phf::Map<&'static str, CommentStyle> = phf::phf_map! {
    // line comments: //
    "c" => CommentStyle::SLASH,
    "h" => CommentStyle::SLASH,
    "cpp" => CommentStyle::SLASH,
    "hpp" => CommentStyle::SLASH,
    "cc" => CommentStyle::SLASH,
    "java" => CommentStyle::SLASH,
    "js" => CommentStyle::SLASH,
    "ts" => CommentStyle::SLASH,
    "tsx" => CommentStyle::SLASH,
    "cs" => CommentStyle::SLASH,
    "swift" => CommentStyle::SLASH,
    "go" => CommentStyle::SLASH,
    "kt" => CommentStyle::SLASH,
    "kts" => CommentStyle::SLASH,
    "scala" => CommentStyle::SLASH,
    "dart" => CommentStyle::SLASH,
    "php" => CommentStyle::SLASH,
    "rs" => CommentStyle::SLASH,
    // line comments: #
    "py" => CommentStyle::HASH,
    "sh" => CommentStyle::HASH,
    "rb" => CommentStyle::HASH,
    "r" => CommentStyle::HASH,
    "ps1" => CommentStyle::HASH,
    "toml" => CommentStyle::HASH,
    "yaml" => CommentStyle::HASH,
    "yml" => CommentStyle::HASH,
    "cfg" => CommentStyle::HASH,
    "txt" => CommentStyle::HASH,
    "log" => CommentStyle::HASH,
    "conf" => CommentStyle::HASH,
    "csv" => CommentStyle::HASH,
    "tsv" => CommentStyle::HASH,
    // line comments: --, %, ;
    "sql" => CommentStyle::DASH,
    "hs" => CommentStyle::DASH,
    "tex" => CommentStyle::PERCENT,
    "m" => CommentStyle::PERCENT,
    "ini" => CommentStyle::SEMICOLON,
    // block comments
    "html" => CommentStyle::HTML,
    "htm" => CommentStyle::HTML,
    "xml" => CommentStyle::HTML,
    "xhtml" => CommentStyle::HTML,
    "svg" => CommentStyle::HTML,
    "md" => CommentStyle::HTML,
    "css" => CommentStyle::C_BLOCK,
    "scss" => CommentStyle::C_BLOCK,
    "less" => CommentStyle::C_BLOCK,
    "json" => CommentStyle::C_BLOCK,
};

pub fn comment_style_for(path: &Path) -> CommentStyle {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .and_then(|ext| EXTENSION_STYLES.get(ext.as_str()).copied())
        .unwrap_or(FALLBACK_STYLE)
}
