//! Package metadata descriptors.
//!
//! Parses the gemspec files RubyGems writes into a vendored
//! `specifications/` directory. Those files are generated, so they only use
//! a small declarative subset of Ruby:
//!
//! ```text
//! Gem::Specification.new do |s|
//!   s.name = "logstash-filter-grok".freeze
//!   s.version = "4.4.3"
//!   s.files = ["lib/grok.rb".freeze]
//!   s.add_runtime_dependency(%q<jls-grok>.freeze, ["~> 0.11.3"])
//! end
//! ```
//!
//! The parse is line-based and entirely in memory. Nothing is evaluated.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::error::DescriptorError;

static SPEC_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"Gem::Specification\.new\s+do\s*\|\s*([A-Za-z_]\w*)\s*\|").expect("valid regex")
});

static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^([a-z_]+)\s*=(.*)$").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Runtime,
    Development,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub name: String,
    pub kind: DependencyKind,
    /// Version requirements such as `"~> 1.0"`, in declaration order.
    pub requirements: Vec<String>,
}

/// Structured view of one package's metadata file.
///
/// `name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: Option<String>,
    pub platform: Option<String>,
    pub dependencies: Vec<Dependency>,
    pub files: Vec<String>,
}

/// Parse the raw text of a gemspec.
///
/// # Errors
///
/// Returns a [`DescriptorError`] when the text has no specification block,
/// no usable name, or an unterminated string literal.
pub fn parse(raw: &str) -> Result<PackageDescriptor, DescriptorError> {
    let caps = SPEC_BLOCK_RE
        .captures(raw)
        .ok_or(DescriptorError::MissingSpecification)?;
    let var = caps.get(1).map_or("s", |m| m.as_str());
    let body_start = caps.get(0).map_or(0, |m| m.end());
    let first_line = raw[..body_start].lines().count();
    let prefix = format!("{var}.");

    let mut name = None;
    let mut version = None;
    let mut platform = None;
    let mut files = Vec::new();
    let mut dependencies: Vec<Dependency> = Vec::new();

    for (idx, line) in raw[body_start..].lines().enumerate() {
        let Some(stmt) = line.trim().strip_prefix(&prefix) else {
            continue;
        };
        let line_no = first_line + idx;

        if let Some(kind) = dependency_kind(stmt) {
            let mut literals = string_literals(stmt, line_no)?.into_iter();
            let Some(dep) = literals.next() else {
                continue;
            };
            // Older specs declare each dependency twice, once per RubyGems branch.
            if dependencies.iter().any(|d| d.name == dep) {
                continue;
            }
            dependencies.push(Dependency {
                name: dep,
                kind,
                requirements: literals.collect(),
            });
            continue;
        }

        let Some(assign) = ASSIGNMENT_RE.captures(stmt) else {
            continue;
        };
        let attr = assign.get(1).map_or("", |m| m.as_str());
        let rhs = assign.get(2).map_or("", |m| m.as_str());
        // `s.name == x` and `s.name =~ /x/` are comparisons.
        if rhs.starts_with(['=', '~']) {
            continue;
        }
        match attr {
            "name" => name = string_literals(rhs, line_no)?.into_iter().next(),
            "version" => version = string_literals(rhs, line_no)?.into_iter().next(),
            "platform" => platform = string_literals(rhs, line_no)?.into_iter().next(),
            "files" => files = string_literals(rhs, line_no)?,
            _ => {}
        }
    }

    let name = name.ok_or(DescriptorError::MissingName)?;
    if name.trim().is_empty() {
        return Err(DescriptorError::EmptyName);
    }

    Ok(PackageDescriptor {
        name,
        version,
        platform,
        dependencies,
        files,
    })
}

fn dependency_kind(stmt: &str) -> Option<DependencyKind> {
    if stmt.starts_with("add_development_dependency") {
        Some(DependencyKind::Development)
    } else if stmt.starts_with("add_runtime_dependency") || stmt.starts_with("add_dependency") {
        Some(DependencyKind::Runtime)
    } else {
        None
    }
}

/// Collect every string literal in `src`, in order.
///
/// Understands `"..."`, `'...'`, `%q` / `%Q` with any bracket or symmetric
/// delimiter, and `%w[...]` word lists.
fn string_literals(src: &str, line: usize) -> Result<Vec<String>, DescriptorError> {
    let mut out = Vec::new();
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => out.push(read_quoted(&mut chars, c, line)?),
            '%' => {
                let mut words = false;
                match chars.peek() {
                    Some('q' | 'Q') => {
                        chars.next();
                    }
                    Some('w' | 'W') => {
                        chars.next();
                        words = true;
                    }
                    _ => {}
                }
                let Some(&open) = chars.peek() else {
                    break;
                };
                let Some(close) = closing_delimiter(open) else {
                    continue;
                };
                chars.next();
                let body = read_delimited(&mut chars, open, close, line)?;
                if words {
                    out.extend(body.split_whitespace().map(str::to_string));
                } else {
                    out.push(body);
                }
            }
            // Trailing comment.
            '#' => break,
            _ => {}
        }
    }
    Ok(out)
}

fn closing_delimiter(open: char) -> Option<char> {
    match open {
        '{' => Some('}'),
        '<' => Some('>'),
        '(' => Some(')'),
        '[' => Some(']'),
        '|' | '!' | '/' | '^' => Some(open),
        _ => None,
    }
}

fn read_quoted(
    chars: &mut impl Iterator<Item = char>,
    quote: char,
    line: usize,
) -> Result<String, DescriptorError> {
    let mut buf = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') if quote == '"' => buf.push('\n'),
                Some('t') if quote == '"' => buf.push('\t'),
                // Single quotes only unescape the quote and the backslash.
                Some(escaped) if quote == '\'' && escaped != '\'' && escaped != '\\' => {
                    buf.push('\\');
                    buf.push(escaped);
                }
                Some(escaped) => buf.push(escaped),
                None => break,
            },
            c if c == quote => return Ok(buf),
            c => buf.push(c),
        }
    }
    Err(DescriptorError::UnterminatedLiteral { line })
}

fn read_delimited(
    chars: &mut impl Iterator<Item = char>,
    open: char,
    close: char,
    line: usize,
) -> Result<String, DescriptorError> {
    let mut buf = String::new();
    let mut depth = 0usize;
    for c in chars.by_ref() {
        if c == close {
            if depth == 0 {
                return Ok(buf);
            }
            depth -= 1;
        } else if c == open && open != close {
            depth += 1;
        }
        buf.push(c);
    }
    Err(DescriptorError::UnterminatedLiteral { line })
}
