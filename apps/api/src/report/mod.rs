//! Report rendering: the line-prefix presentation convention.
//!
//! The analysis itself is opaque prose. This module only decorates it for the
//! browser: a leading `+` marks an affirmed item, a leading `-` marks an
//! improvement item, and `**text**` spans are emphasized. Nothing here feeds
//! back into the analysis path.

pub mod handlers;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Positive,
    Negative,
    Plain,
}

impl LineKind {
    fn css_class(self) -> &'static str {
        match self {
            LineKind::Positive => "positive",
            LineKind::Negative => "negative",
            LineKind::Plain => "plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub kind: LineKind,
    pub segments: Vec<Segment>,
}

/// Splits a report into newline-delimited lines and classifies each one.
pub fn parse_report(report: &str) -> Vec<ReportLine> {
    report.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> ReportLine {
    let (kind, rest) = if let Some(rest) = line.strip_prefix('+') {
        (LineKind::Positive, rest)
    } else if let Some(rest) = line.strip_prefix('-') {
        (LineKind::Negative, rest)
    } else {
        (LineKind::Plain, line)
    };

    ReportLine {
        kind,
        segments: parse_emphasis(rest.trim()),
    }
}

/// Non-greedy `**...**` matching. A trailing unmatched `**` stays literal.
fn parse_emphasis(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };

        push_segment(&mut segments, &rest[..open], false);
        push_segment(&mut segments, &after_open[..close], true);
        rest = &after_open[close + 2..];
    }

    push_segment(&mut segments, rest, false);
    segments
}

fn push_segment(segments: &mut Vec<Segment>, text: &str, emphasized: bool) {
    if text.is_empty() {
        return;
    }
    segments.push(Segment {
        text: text.to_string(),
        emphasized,
    });
}

/// Renders parsed lines as HTML paragraphs. All report text is escaped.
pub fn to_html(lines: &[ReportLine]) -> String {
    let mut html = String::new();
    for line in lines {
        html.push_str("<p class=\"");
        html.push_str(line.kind.css_class());
        html.push_str("\">");
        for segment in &line.segments {
            if segment.emphasized {
                html.push_str("<strong>");
                push_escaped(&mut html, &segment.text);
                html.push_str("</strong>");
            } else {
                push_escaped(&mut html, &segment.text);
            }
        }
        html.push_str("</p>\n");
    }
    html
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
