use std::fmt;

/// Path and fragment of the page currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    fragment: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>, fragment: Option<&str>) -> Self {
        Self {
            path: path.into(),
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_owned),
        }
    }

    /// Splits `"/path?query#fragment"` at the first `#`.
    ///
    /// A trailing `#` with nothing after it counts as no fragment.
    pub fn parse(url: &str) -> Self {
        match url.split_once('#') {
            Some((path, fragment)) => Self::new(path, Some(fragment)),
            None => Self::new(url, None),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The fragment without its leading `#`, if non-empty.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.path, fragment),
            None => f.write_str(&self.path),
        }
    }
}
