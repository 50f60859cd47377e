//! Path pattern matching and variable capture for gateway route predicates.
//!
//! A [`PathPattern`] is compiled once from a textual pattern and then matched
//! against any number of request paths, concurrently and without locking.
//! Patterns are built from `/`-separated segments:
//!
//! - literal text, matched exactly: `/users`
//! - `*`, matching exactly one arbitrary segment
//! - `**`, matching zero or more trailing segments
//! - `{name}`, matching one segment and binding its decoded value
//! - `{name:regex}`, additionally requiring a full regex match
//! - `{*name}`, binding all remaining segments rejoined with `/`
//!
//! ```
//! use route_pattern::PathPattern;
//!
//! let pattern = PathPattern::parse("/users/{id}/posts/{*rest}")?;
//!
//! let caps = pattern.captures("/users/42/posts/2024/hello").unwrap();
//! assert_eq!(&caps["id"], "42");
//! assert_eq!(&caps["rest"], "2024/hello");
//!
//! assert!(!pattern.is_match("/users"));
//! # Ok::<(), route_pattern::PatternError>(())
//! ```
//!
//! Request segments are percent-decoded before comparison, so an encoded
//! slash (`%2F`) never introduces a segment boundary, and malformed escapes
//! fail closed to a non-match. Matching never panics and performs no I/O.

#![deny(rust_2018_idioms, nonstandard_style)]

mod cache;
mod captures;
mod constraint;
mod de;
mod decode;
mod pattern;

pub use self::{
    cache::PatternCache,
    captures::{Captures, CapturesIter},
    de::CapturesDeserializer,
    pattern::{PathPattern, PatternError, PatternParser, TrailingSlash},
};

/// Types that can supply a request path for matching.
pub trait RequestPath {
    fn path(&self) -> &str;
}

impl RequestPath for str {
    fn path(&self) -> &str {
        self
    }
}

impl RequestPath for String {
    fn path(&self) -> &str {
        self.as_str()
    }
}

impl<T: RequestPath + ?Sized> RequestPath for &T {
    fn path(&self) -> &str {
        (**self).path()
    }
}

#[cfg(feature = "http")]
mod http_impls {
    use super::RequestPath;

    impl RequestPath for http::Uri {
        fn path(&self) -> &str {
            self.path()
        }
    }
}
