//! # Query String Builder
//!
//! Edits the query component of an absolute or relative URL while leaving
//! everything else untouched.
//!
//! The builder keeps its parameters as an ordered list: existing keys keep
//! their position when overwritten, new keys are appended at the end, and
//! values are form-urlencoded on output. Relative references are handled
//! directly as a path plus a raw query, so no synthetic authority is ever
//! involved and nothing can leak into the output.
//!
//! ## Examples
//!
//! ```
//! use web_toolbelt_rs::error::ToolbeltError;
//! use web_toolbelt_rs::query::QueryStringBuilder;
//!
//! # fn example() -> Result<(), ToolbeltError> {
//! let url = QueryStringBuilder::new("http://domain.com/?p1=v1")?
//!     .add("p2", "v2")
//!     .to_string();
//! assert_eq!(url, "http://domain.com/?p1=v1&p2=v2");
//!
//! // Relative references round-trip without gaining an authority.
//! let url = QueryStringBuilder::new("/search")?
//!     .add("q", "rust slugs")
//!     .to_string();
//! assert_eq!(url, "/search?q=rust+slugs");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use log::debug;
use url::{ParseError, Url, form_urlencoded};

use crate::error::ToolbeltError;

/// The non-query portion of the URL being edited.
enum Target {
    /// A full absolute URL; serialization renders the whole URL.
    Absolute(Url),
    /// A relative reference; serialization renders path + query only.
    Relative { path: String },
}

/// Helper for creating and modifying a URL's query parameters.
///
/// Parameter names are case-sensitive and unique; overwriting a key keeps its
/// original position and the last write wins. Mutators consume and return the
/// builder so calls can be chained, in the same style as the other builders in
/// this crate; the edit always happens on the value you hold, there is no
/// hidden copy.
///
/// A builder is a plain value with no interior mutability. Sharing one
/// instance across threads for concurrent mutation requires external
/// synchronization, like any other `&mut` access.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::query::QueryStringBuilder;
///
/// # fn example() -> Result<(), web_toolbelt_rs::ToolbeltError> {
/// let url = QueryStringBuilder::new("http://domain.com")?
///     .add("p1", "v1")
///     .add_value("page", 10)
///     .toggle("debug", "1")
///     .to_string();
/// assert_eq!(url, "http://domain.com/?p1=v1&page=10&debug=1");
/// # Ok(())
/// # }
/// ```
pub struct QueryStringBuilder {
    target: Target,
    /// Ordered name/value pairs; insertion order drives serialization order.
    params: Vec<(String, String)>,
}

impl QueryStringBuilder {
    /// Creates a builder from an absolute URL or a relative reference.
    ///
    /// A string that parses as neither fails fast with
    /// [`ToolbeltError::InvalidUrl`] instead of producing a builder that
    /// breaks on first use.
    ///
    /// # Errors
    ///
    /// Returns `ToolbeltError::InvalidUrl` when the input is not a valid URL
    /// or relative reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::query::QueryStringBuilder;
    ///
    /// assert!(QueryStringBuilder::new("http://domain.com/?p1=v1").is_ok());
    /// assert!(QueryStringBuilder::new("/relative/path").is_ok());
    /// assert!(QueryStringBuilder::new("http://exa mple.com").is_err());
    /// ```
    pub fn new(url: &str) -> Result<Self, ToolbeltError> {
        match Url::parse(url) {
            Ok(parsed) => Ok(Self::from_url(parsed)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                let (path, query) = match url.split_once('?') {
                    Some((path, query)) => (path, query),
                    None => (url, ""),
                };
                let mut builder = QueryStringBuilder {
                    target: Target::Relative {
                        path: path.to_string(),
                    },
                    params: Vec::new(),
                };
                builder.absorb_query(query);
                Ok(builder)
            }
            Err(reason) => Err(ToolbeltError::InvalidUrl {
                url: url.to_string(),
                reason: reason.to_string(),
            }),
        }
    }

    /// Creates a builder from an already parsed absolute URL.
    pub fn from_url(url: Url) -> Self {
        let mut builder = QueryStringBuilder {
            target: Target::Absolute(url),
            params: Vec::new(),
        };
        let query = match &builder.target {
            Target::Absolute(url) => url.query().unwrap_or("").to_string(),
            Target::Relative { .. } => String::new(),
        };
        builder.absorb_query(&query);
        builder
    }

    /// Adds a query string parameter, URL encoded on output.
    ///
    /// An empty value is a no-op. An existing key is overwritten silently and
    /// keeps its position; a new key is appended at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::query::QueryStringBuilder;
    ///
    /// # fn example() -> Result<(), web_toolbelt_rs::ToolbeltError> {
    /// let url = QueryStringBuilder::new("http://domain.com/?p1=v1")?
    ///     .add("p1", "v9")
    ///     .add("p2", "")
    ///     .to_string();
    /// assert_eq!(url, "http://domain.com/?p1=v9");
    /// # Ok(())
    /// # }
    /// ```
    pub fn add(mut self, name: &str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }

        debug!("query add: {name}={value}");
        self.set_param(name, value);
        self
    }

    /// Adds a parameter using the value's natural string representation.
    pub fn add_value<T: ToString>(self, name: &str, value: T) -> Self {
        self.add(name, &value.to_string())
    }

    /// Adds a parameter when a value is present; `None` is a no-op.
    pub fn add_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.add_value(name, value),
            None => self,
        }
    }

    /// Removes a query string parameter.
    ///
    /// An empty name or a missing key is a no-op.
    pub fn remove(mut self, name: &str) -> Self {
        if name.is_empty() {
            return self;
        }

        debug!("query remove: {name}");
        self.params.retain(|(key, _)| key != name);
        self
    }

    /// Adds the parameter when the key is absent, removes it when present.
    ///
    /// An empty name is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::query::QueryStringBuilder;
    ///
    /// # fn example() -> Result<(), web_toolbelt_rs::ToolbeltError> {
    /// let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?;
    /// assert_eq!(builder.toggle("p1", "v2").to_string(), "http://domain.com/");
    /// # Ok(())
    /// # }
    /// ```
    pub fn toggle(self, name: &str, value: &str) -> Self {
        if name.is_empty() {
            return self;
        }

        if self.contains(name) {
            self.remove(name)
        } else {
            self.add(name, value)
        }
    }

    /// Toggles a parameter using the value's natural string representation.
    pub fn toggle_value<T: ToString>(self, name: &str, value: T) -> Self {
        self.toggle(name, &value.to_string())
    }

    /// Toggles a parameter when a value is present; `None` is a no-op.
    pub fn toggle_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.toggle_value(name, value),
            None => self,
        }
    }

    /// Returns `true` when the query currently contains the parameter.
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|(key, _)| key == name)
    }

    /// Returns `true` when the builder was created from a relative reference.
    pub fn is_relative(&self) -> bool {
        matches!(self.target, Target::Relative { .. })
    }

    /// Overwrites an existing key in place or appends a new one.
    fn set_param(&mut self, name: &str, value: &str) {
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.params.push((name.to_string(), value.to_string())),
        }
    }

    /// Parses a raw query component into the ordered parameter list.
    fn absorb_query(&mut self, query: &str) {
        let pairs: Vec<(String, String)> =
            form_urlencoded::parse(query.as_bytes()).into_owned().collect();
        for (name, value) in pairs {
            // Duplicate keys collapse to one entry, last value wins.
            self.set_param(&name, &value);
        }
    }

    /// Serializes the parameter list, or `None` when the query is empty.
    fn query_string(&self) -> Option<String> {
        if self.params.is_empty() {
            return None;
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.params {
            serializer.append_pair(name, value);
        }
        Some(serializer.finish())
    }
}

impl fmt::Display for QueryStringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.query_string();
        match &self.target {
            Target::Absolute(url) => {
                let mut url = url.clone();
                url.set_query(query.as_deref());
                write!(f, "{url}")
            }
            Target::Relative { path } => match query {
                Some(query) => write!(f, "{path}?{query}"),
                None => write!(f, "{path}"),
            },
        }
    }
}
