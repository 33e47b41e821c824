use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const HIGHLIGHT_CLASS: &str = "bg-gray-100 p-3 rounded-lg my-2";

static MARKUP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)</?(p|div|span|strong|b|em|i|h[1-6]|ul|ol|li|br|code|pre|blockquote|table|tr|td|th)\b[^>]*>",
    )
    .expect("MARKUP_TAG_REGEX is a valid regex pattern")
});

/// Block-level structure of a chat reply, rendered to markup only at the
/// HTTP boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum ReplyBlock {
    Paragraph(String),
    Highlight(String),
    Subtitle(String),
    /// Model output that is already markup; rendered verbatim.
    Markup(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormattedReply {
    pub blocks: Vec<ReplyBlock>,
}

impl FormattedReply {
    /// Wraps a canned message (fallbacks, scope refusals) in a single paragraph.
    pub fn notice(text: &str) -> Self {
        FormattedReply {
            blocks: vec![ReplyBlock::Paragraph(text.to_string())],
        }
    }

    pub fn from_model_text(text: &str) -> Self {
        let text = strip_code_fence(text.trim());

        // Anything from the first recognised tag on is kept as markup; prose
        // before it becomes an escaped paragraph.
        if let Some(tag) = MARKUP_TAG_REGEX.find(text) {
            let (lead, markup) = text.split_at(tag.start());
            let mut blocks = Vec::new();
            let lead = lead.split_whitespace().collect::<Vec<_>>().join(" ");
            if !lead.is_empty() {
                blocks.push(ReplyBlock::Paragraph(lead));
            }
            blocks.push(ReplyBlock::Markup(markup.trim_end().to_string()));
            return FormattedReply { blocks };
        }

        let mut blocks = Vec::new();
        for chunk in text.split("\n\n").map(str::trim).filter(|c| !c.is_empty()) {
            let mut lines = chunk.lines().map(str::trim).filter(|l| !l.is_empty());
            let mut body: Vec<&str> = Vec::new();

            if let Some(first) = lines.next() {
                if first.starts_with('#') {
                    blocks.push(ReplyBlock::Subtitle(
                        first.trim_start_matches('#').trim().to_string(),
                    ));
                } else {
                    body.push(first);
                }
            }
            body.extend(lines);

            if body.is_empty() {
                continue;
            }
            let joined = body.join(" ");
            match strip_emphasis(&joined) {
                Some(inner) => blocks.push(ReplyBlock::Highlight(inner.to_string())),
                None => blocks.push(ReplyBlock::Paragraph(joined)),
            }
        }

        FormattedReply { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn render_html(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                ReplyBlock::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
                ReplyBlock::Highlight(text) => format!(
                    "<div class=\"{}\"><strong>{}</strong></div>",
                    HIGHLIGHT_CLASS,
                    escape_html(text)
                ),
                ReplyBlock::Subtitle(text) => format!("<h3>{}</h3>", escape_html(text)),
                ReplyBlock::Markup(markup) => markup.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. "html") on the opening fence line.
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

fn strip_emphasis(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("**")?.strip_suffix("**")?.trim();
    if inner.is_empty() || inner.contains("**") {
        None
    } else {
        Some(inner)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
