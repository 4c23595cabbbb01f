//! Image retrieval from files and URLs.
//!
//! A location string is either a filesystem path or an `http`/`https` URL.
//! Remote retrieval needs the `http` feature; without it, URL sources fail
//! with [`IoError::UnsupportedFeature`].
//!
//! # Example
//!
//! ```rust
//! use rasterfx_io::Source;
//!
//! let src = Source::parse("https://example.com/images/cat.JPG").unwrap();
//! assert!(src.is_remote());
//! assert_eq!(src.format_hint(), Some("jpeg"));
//!
//! let src = Source::parse("renders/out.png").unwrap();
//! assert!(!src.is_remote());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

#[allow(unused_imports)]
use tracing::{debug, trace};
use url::Url;

use crate::{Format, IoError, IoResult};

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local file.
    Path(PathBuf),
    /// Remote `http` or `https` resource.
    Url(Url),
}

impl Source {
    /// Classifies a location string.
    ///
    /// # Errors
    ///
    /// [`IoError::Fetch`] for a string that starts like an http(s) URL but
    /// does not parse as one.
    pub fn parse(location: &str) -> IoResult<Self> {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(location)
                .map_err(|e| IoError::Fetch(format!("invalid URL '{}': {}", location, e)))?;
            Ok(Source::Url(url))
        } else {
            Ok(Source::Path(PathBuf::from(location)))
        }
    }

    /// Whether retrieving this source needs the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Url(_))
    }

    /// Format tag suggested by the path or URL path extension, if it names a
    /// supported format.
    pub fn format_hint(&self) -> Option<&'static str> {
        let format = match self {
            Source::Path(path) => Format::from_extension(path),
            Source::Url(url) => Format::from_extension(Path::new(url.path())),
        };
        format.map(|f| f.tag())
    }

    /// Reads the raw bytes.
    pub fn fetch(&self) -> IoResult<Vec<u8>> {
        match self {
            Source::Path(path) => {
                trace!(path = %path.display(), "reading file");
                Ok(std::fs::read(path)?)
            }
            Source::Url(url) => fetch_url(url),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(feature = "http")]
fn fetch_url(url: &Url) -> IoResult<Vec<u8>> {
    use std::time::Duration;

    debug!(%url, "fetching");
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| IoError::Fetch(e.to_string()))?;

    let response = client
        .get(url.as_str())
        .send()
        .map_err(|e| IoError::Fetch(format!("{}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(IoError::Fetch(format!("{}: HTTP {}", url, status)));
    }

    let body = response
        .bytes()
        .map_err(|e| IoError::Fetch(format!("{}: {}", url, e)))?;
    debug!(%url, len = body.len(), "fetched");
    Ok(body.to_vec())
}

#[cfg(not(feature = "http"))]
fn fetch_url(url: &Url) -> IoResult<Vec<u8>> {
    Err(IoError::UnsupportedFeature(format!(
        "fetching {} requires the `http` feature",
        url
    )))
}
