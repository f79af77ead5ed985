use std::fmt::Display;

/// Separator between the name and the link on a stored line.
pub const FIELD_SEPARATOR: &str = " > ";

/// A stored `name → link` mapping.
///
/// On disk every record occupies one line of the form `<name> > <link>`.
/// Neither field is escaped, so the validator is responsible for keeping
/// separators and line breaks out of both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRecord {
    /// The short name visited as `/<name>`.
    pub name: String,
    /// The target the name redirects to.
    pub link: String,
}

impl RedirectRecord {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    /// Parses a stored line.
    ///
    /// The name is everything before the first separator and the link is the
    /// field after it; any further fields are ignored. Returns `None` for
    /// lines without a separator.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut fields = line.split(FIELD_SEPARATOR);
        let name = fields.next()?;
        let link = fields.next()?;
        Some(Self::new(name, link))
    }

    /// Renders the record as a stored line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.name, FIELD_SEPARATOR, self.link)
    }
}

impl Display for RedirectRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_line())
    }
}
