//! Plugin listing output, as printed by the remote plugin tool.
//!
//! One token per line: either `name` or `name (version)`. Matching is always
//! on whole lines; a name that is a prefix of another never matches it.

/// One parsed line of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingToken<'a> {
    Bare(&'a str),
    Versioned { name: &'a str, version: &'a str },
}

impl<'a> ListingToken<'a> {
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        line.strip_suffix(')')
            .and_then(|rest| rest.rsplit_once(" ("))
            .filter(|(name, version)| !name.is_empty() && !version.is_empty())
            .map_or(ListingToken::Bare(line), |(name, version)| {
                ListingToken::Versioned { name, version }
            })
    }
}

/// The lines of one listing, trailing whitespace removed, blanks dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginListing {
    lines: Vec<String>,
}

impl PluginListing {
    #[must_use]
    pub fn parse(stdout: &str) -> Self {
        let lines = stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    /// Exact whole-line membership.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.lines.iter().any(|line| line == token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = ListingToken<'_>> {
        self.lines.iter().map(|line| ListingToken::parse(line))
    }

    /// Every version listed for exactly `name`, in listing order.
    #[must_use]
    pub fn versions_of(&self, name: &str) -> Vec<&str> {
        self.tokens()
            .filter_map(|token| match token {
                ListingToken::Versioned { name: n, version } if n == name => Some(version),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The verbose-listing token for `name` at `version`.
#[must_use]
pub fn versioned_token(name: &str, version: &str) -> String {
    format!("{name} ({version})")
}
