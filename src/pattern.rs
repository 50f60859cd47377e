use std::{
    borrow::Cow,
    hash::{Hash, Hasher},
    str::FromStr,
};

use tracing::trace;

use crate::{captures::Captures, constraint::Constraint, decode::decode_segment, RequestPath};

/// One parsed pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SegmentSpec {
    /// Literal text, matched exactly against one decoded segment.
    Literal(String),

    /// `*`: exactly one arbitrary segment.
    SingleWildcard,

    /// `**`: all remaining segments, value discarded.
    MultiWildcard,

    /// `{name}`: one arbitrary segment, bound.
    Capture(String),

    /// `{name:regex}`: one segment satisfying the constraint, bound.
    CaptureConstraint(String, Constraint),

    /// `{*name}`: all remaining segments rejoined with `/`, bound.
    CaptureTail(String),
}

/// Error raised when a path pattern fails to compile.
///
/// Only ever produced at compile time; matching a compiled pattern cannot
/// fail. A pattern that does not compile is a configuration error and the
/// route carrying it should be rejected outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern \"{0}\" contains an empty segment")]
    EmptySegment(String),

    #[error("capture segment \"{0}\" is not closed by a single trailing `}}`")]
    UnclosedCapture(String),

    #[error("capture segment \"{0}\" has an empty name")]
    EmptyCaptureName(String),

    #[error("capture name \"{0}\" is bound more than once")]
    DuplicateCaptureName(String),

    #[error("multi-segment wildcard in \"{0}\" must be the final segment")]
    TailNotLast(String),

    #[error("tail capture \"{0}\" cannot have a constraint")]
    ConstraintOnTail(String),

    #[error("invalid constraint for capture \"{name}\": {reason}")]
    InvalidConstraint { name: String, reason: String },
}

/// Policy for trailing slashes on request paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TrailingSlash {
    /// `/users` and `/users/` are interchangeable.
    #[default]
    Insensitive,

    /// Request and pattern must agree on the trailing slash.
    Strict,
}

/// Configurable pattern compiler.
///
/// Holds the match policy baked into every [`PathPattern`] it produces.
/// Compilation is deterministic and side-effect-free, so a parser can be
/// shared freely between threads.
///
/// # Examples
/// ```
/// use route_pattern::{PatternParser, TrailingSlash};
///
/// let parser = PatternParser::new().trailing_slash(TrailingSlash::Strict);
/// let pattern = parser.parse("/health")?;
///
/// assert!(pattern.is_match("/health"));
/// assert!(!pattern.is_match("/health/"));
/// # Ok::<(), route_pattern::PatternError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternParser {
    trailing_slash: TrailingSlash,
    match_empty_tail: bool,
}

impl Default for PatternParser {
    fn default() -> PatternParser {
        PatternParser {
            trailing_slash: TrailingSlash::Insensitive,
            match_empty_tail: true,
        }
    }
}

impl PatternParser {
    pub fn new() -> PatternParser {
        PatternParser::default()
    }

    /// Sets the trailing slash policy. Defaults to
    /// [`TrailingSlash::Insensitive`].
    pub fn trailing_slash(mut self, policy: TrailingSlash) -> Self {
        self.trailing_slash = policy;
        self
    }

    /// Controls whether a multi-segment wildcard accepts an empty remainder,
    /// i.e. whether `/files/**` matches `/files`. Defaults to `true`.
    pub fn match_empty_tail(mut self, matches: bool) -> Self {
        self.match_empty_tail = matches;
        self
    }

    /// Compiles `pattern` under this parser's policy.
    pub fn parse(&self, pattern: &str) -> Result<PathPattern, PatternError> {
        if pattern.contains("//") {
            return Err(PatternError::EmptySegment(pattern.to_owned()));
        }

        let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);
        let (trimmed, has_trailing_slash) = match trimmed.strip_suffix('/') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };

        let mut segments = Vec::new();
        let mut names: Vec<String> = Vec::new();

        if !trimmed.is_empty() {
            for segment in trimmed.split('/') {
                if matches!(
                    segments.last(),
                    Some(SegmentSpec::MultiWildcard | SegmentSpec::CaptureTail(_))
                ) {
                    return Err(PatternError::TailNotLast(pattern.to_owned()));
                }

                let spec = match segment {
                    "*" => SegmentSpec::SingleWildcard,
                    "**" => SegmentSpec::MultiWildcard,
                    _ if segment.starts_with('{') => parse_capture(segment, &mut names)?,
                    _ => SegmentSpec::Literal(segment.to_owned()),
                };

                segments.push(spec);
            }
        }

        Ok(PathPattern {
            pattern: pattern.to_owned(),
            segments,
            has_trailing_slash,
            trailing_slash: self.trailing_slash,
            match_empty_tail: self.match_empty_tail,
        })
    }
}

/// Parses a `{...}` segment into its capture variant.
fn parse_capture(segment: &str, names: &mut Vec<String>) -> Result<SegmentSpec, PatternError> {
    let inner = segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| PatternError::UnclosedCapture(segment.to_owned()))?;

    let (tail, inner) = match inner.strip_prefix('*') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };

    let (name, constraint) = split_constraint(inner);

    if name.is_empty() {
        return Err(PatternError::EmptyCaptureName(segment.to_owned()));
    }

    // a stray brace inside the name means the braces were unbalanced
    if name.chars().any(|ch| matches!(ch, '{' | '}')) {
        return Err(PatternError::UnclosedCapture(segment.to_owned()));
    }

    if names.iter().any(|seen| seen == name) {
        return Err(PatternError::DuplicateCaptureName(name.to_owned()));
    }
    names.push(name.to_owned());

    match (tail, constraint) {
        (true, Some(_)) => Err(PatternError::ConstraintOnTail(name.to_owned())),
        (true, None) => Ok(SegmentSpec::CaptureTail(name.to_owned())),
        (false, None) => Ok(SegmentSpec::Capture(name.to_owned())),
        (false, Some(expr)) => {
            let constraint = Constraint::new(expr).map_err(|reason| {
                PatternError::InvalidConstraint {
                    name: name.to_owned(),
                    reason,
                }
            })?;
            Ok(SegmentSpec::CaptureConstraint(name.to_owned(), constraint))
        }
    }
}

/// Splits `name:constraint` on the first unescaped `:`.
fn split_constraint(inner: &str) -> (&str, Option<&str>) {
    let mut escaped = false;

    for (idx, ch) in inner.char_indices() {
        match ch {
            '\\' if !escaped => escaped = true,
            ':' if !escaped => return (&inner[..idx], Some(&inner[idx + 1..])),
            _ => escaped = false,
        }
    }

    (inner, None)
}

/// A compiled path pattern.
///
/// Immutable once constructed; share it behind an `Arc` and match from any
/// number of threads. Equality and hashing consider the original pattern
/// text (plus the parser policy), which makes `PathPattern` usable directly
/// as a cache key.
///
/// # Pattern format
/// A pattern is zero or more `/`-separated segments. Each segment is either
/// literal text, a single-segment wildcard `*`, a trailing multi-segment
/// wildcard `**`, or a named capture `{name}` / `{name:regex}` / `{*name}`.
/// Segment counts must line up exactly unless the pattern ends in a
/// multi-segment wildcard.
///
/// # Examples
/// ```
/// use route_pattern::PathPattern;
///
/// let pattern = PathPattern::parse("/shop/{category}/{id:\\d+}")?;
///
/// let caps = pattern.captures("/shop/books/421").unwrap();
/// assert_eq!(&caps["category"], "books");
/// assert_eq!(&caps["id"], "421");
///
/// // constraint is a full match on the segment
/// assert!(!pattern.is_match("/shop/books/421b"));
/// # Ok::<(), route_pattern::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// Pattern text that generated this matcher.
    pattern: String,

    /// Segment specifiers, in order.
    segments: Vec<SegmentSpec>,

    /// Pattern itself ended in `/`.
    has_trailing_slash: bool,

    trailing_slash: TrailingSlash,
    match_empty_tail: bool,
}

impl PathPattern {
    /// Compiles `pattern` with the default [`PatternParser`] policy.
    ///
    /// # Examples
    /// ```
    /// use route_pattern::PathPattern;
    ///
    /// let pattern = PathPattern::parse("/user/{id}")?;
    /// assert!(pattern.is_match("/user/123"));
    /// assert!(!pattern.is_match("/user/123/stars"));
    /// assert!(!pattern.is_match("/foo"));
    /// # Ok::<(), route_pattern::PatternError>(())
    /// ```
    pub fn parse(pattern: &str) -> Result<PathPattern, PatternError> {
        PatternParser::new().parse(pattern)
    }

    /// Returns the pattern text that generated this matcher.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns capture names in pattern order.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|spec| match spec {
            SegmentSpec::Capture(name)
            | SegmentSpec::CaptureConstraint(name, _)
            | SegmentSpec::CaptureTail(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Returns `true` if `path` matches this pattern.
    ///
    /// Always agrees with [`captures`](Self::captures) on the decision.
    pub fn is_match<P: RequestPath>(&self, path: P) -> bool {
        let path = path.path();
        let matched = self.evaluate(path).is_some();
        trace!(pattern = %self.pattern, path, matched, "evaluated path pattern");
        matched
    }

    /// Matches `path`, returning the captured variable bindings.
    ///
    /// Returns `None` when the path does not match; no partial bindings are
    /// ever exposed. A path with malformed percent-encoding never matches.
    ///
    /// # Examples
    /// ```
    /// use route_pattern::PathPattern;
    ///
    /// let pattern = PathPattern::parse("/blob/{*path}")?;
    ///
    /// let caps = pattern.captures("/blob/HEAD/Cargo.toml").unwrap();
    /// assert_eq!(&caps["path"], "HEAD/Cargo.toml");
    /// # Ok::<(), route_pattern::PatternError>(())
    /// ```
    pub fn captures<P: RequestPath>(&self, path: P) -> Option<Captures> {
        let path = path.path();
        let captures = self.evaluate(path);
        trace!(
            pattern = %self.pattern,
            path,
            matched = captures.is_some(),
            "evaluated path pattern"
        );
        captures
    }

    fn has_tail(&self) -> bool {
        matches!(
            self.segments.last(),
            Some(SegmentSpec::MultiWildcard | SegmentSpec::CaptureTail(_))
        )
    }

    /// Positional walk of the specifier list over the decoded path segments.
    ///
    /// A multi-segment wildcard is only ever last, so there is exactly one
    /// possible alignment and no backtracking.
    fn evaluate(&self, raw: &str) -> Option<Captures> {
        let mut segs: Vec<Cow<'_, str>> = Vec::new();
        for part in raw.split('/') {
            if part.is_empty() {
                continue;
            }
            // malformed escapes fail closed
            segs.push(decode_segment(part)?);
        }

        if self.trailing_slash == TrailingSlash::Strict && !self.has_tail() {
            let req_trailing = raw.len() > 1 && raw.ends_with('/');
            if req_trailing != self.has_trailing_slash {
                return None;
            }
        }

        let mut bindings = Vec::new();
        let mut idx = 0;

        for spec in &self.segments {
            match spec {
                SegmentSpec::Literal(lit) => {
                    if segs.get(idx)?.as_ref() != lit.as_str() {
                        return None;
                    }
                    idx += 1;
                }
                SegmentSpec::SingleWildcard => {
                    segs.get(idx)?;
                    idx += 1;
                }
                SegmentSpec::Capture(name) => {
                    let value = segs.get(idx)?;
                    bindings.push((name.clone(), value.to_string()));
                    idx += 1;
                }
                SegmentSpec::CaptureConstraint(name, constraint) => {
                    let value = segs.get(idx)?;
                    if !constraint.matches(value) {
                        return None;
                    }
                    bindings.push((name.clone(), value.to_string()));
                    idx += 1;
                }
                SegmentSpec::MultiWildcard => {
                    if idx == segs.len() && !self.match_empty_tail {
                        return None;
                    }
                    idx = segs.len();
                }
                SegmentSpec::CaptureTail(name) => {
                    if idx == segs.len() && !self.match_empty_tail {
                        return None;
                    }
                    bindings.push((name.clone(), segs[idx..].join("/")));
                    idx = segs.len();
                }
            }
        }

        // leftover request segments mean no match
        (idx == segs.len()).then(|| Captures::new(bindings))
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &PathPattern) -> bool {
        self.pattern == other.pattern
            && self.trailing_slash == other.trailing_slash
            && self.match_empty_tail == other.match_empty_tail
    }
}

impl Eq for PathPattern {}

impl Hash for PathPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(pattern: &str) -> Result<PathPattern, PatternError> {
        PathPattern::parse(pattern)
    }
}

impl TryFrom<&str> for PathPattern {
    type Error = PatternError;

    fn try_from(pattern: &str) -> Result<PathPattern, PatternError> {
        PathPattern::parse(pattern)
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    fn parse(pattern: &str) -> PathPattern {
        PathPattern::parse(pattern).unwrap()
    }

    #[test]
    fn parse_static() {
        let pattern = parse("/name");
        assert!(pattern.is_match("/name"));
        assert!(!pattern.is_match("/name1"));
        assert!(!pattern.is_match("/name~"));
        assert!(!pattern.is_match("/name/gs"));
        assert!(!pattern.is_match("/"));

        let pattern = parse("/user/profile");
        assert!(pattern.is_match("/user/profile"));
        assert!(!pattern.is_match("/user"));
        assert!(!pattern.is_match("/user/profile/profile"));
    }

    #[test]
    fn root_pattern() {
        let pattern = parse("/");
        assert!(pattern.is_match("/"));
        assert!(pattern.is_match(""));
        assert!(!pattern.is_match("/foo"));
    }

    #[test]
    fn duplicate_slashes_in_request_collapse() {
        let pattern = parse("/user/profile");
        assert!(pattern.is_match("//user//profile"));
        assert!(pattern.is_match("/user///profile"));
    }

    #[test]
    fn static_match_is_segment_wise() {
        // "/users" is not a prefix of "/users-archive"
        let pattern = parse("/users");
        assert!(!pattern.is_match("/users-archive"));
        assert!(!pattern.is_match("/user"));
    }

    #[test]
    fn parse_capture() {
        let pattern = parse("/user/{id}");
        assert!(pattern.is_match("/user/profile"));
        assert!(pattern.is_match("/user/2345"));
        assert!(!pattern.is_match("/user"));
        assert!(!pattern.is_match("/user/2345/sdg"));

        let caps = pattern.captures("/user/42").unwrap();
        assert_eq!(caps.get("id"), Some("42"));
        assert_eq!(caps.len(), 1);

        assert!(pattern.captures("/user").is_none());
        assert!(pattern.captures("/user/42/extra").is_none());
    }

    #[test]
    fn capture_names_in_order() {
        let pattern = parse("/{a}/x/{b:\\d+}/{*c}");
        let names: Vec<_> = pattern.capture_names().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn multiple_captures() {
        let pattern = parse("/{key}/{value}");
        let caps = pattern.captures("/name/user1").unwrap();
        assert_eq!(&caps["key"], "name");
        assert_eq!(&caps["value"], "user1");
    }

    #[test]
    fn capture_with_constraint() {
        let pattern = parse(r"/user/{id:\d+}");
        assert!(pattern.is_match("/user/123"));
        assert!(pattern.is_match("/user/314159"));
        assert!(!pattern.is_match("/user/abc"));
        assert!(!pattern.is_match("/user/123abc"));

        let caps = pattern.captures("/user/007").unwrap();
        assert_eq!(&caps["id"], "007");
    }

    #[test]
    fn constraint_with_colon_and_braces() {
        // first unescaped ':' separates name from expression
        let pattern = parse(r"/v/{tag:\d{2}:\d{2}}");
        assert!(pattern.is_match("/v/12:34"));
        assert!(!pattern.is_match("/v/12-34"));
        assert_eq!(&pattern.captures("/v/12:34").unwrap()["tag"], "12:34");
    }

    #[test]
    fn single_wildcard() {
        let pattern = parse("/users/*/profile");
        assert!(pattern.is_match("/users/alice/profile"));
        assert!(pattern.is_match("/users/bob/profile"));
        assert!(!pattern.is_match("/users/profile"));
        assert!(!pattern.is_match("/users/a/b/profile"));

        // wildcard binds nothing
        assert!(pattern.captures("/users/alice/profile").unwrap().is_empty());
    }

    #[test]
    fn multi_wildcard() {
        let pattern = parse("/files/**");
        assert!(pattern.is_match("/files/a"));
        assert!(pattern.is_match("/files/a/b/c"));
        assert!(pattern.captures("/files/a/b/c").unwrap().is_empty());
        assert!(!pattern.is_match("/other/a"));
    }

    #[test]
    fn multi_wildcard_empty_remainder_default() {
        // default policy: empty remainder matches
        let pattern = parse("/files/**");
        assert!(pattern.is_match("/files"));
        assert!(pattern.is_match("/files/"));
    }

    #[test]
    fn multi_wildcard_empty_remainder_disabled() {
        let pattern = PatternParser::new()
            .match_empty_tail(false)
            .parse("/files/**")
            .unwrap();
        assert!(!pattern.is_match("/files"));
        assert!(pattern.is_match("/files/a"));
    }

    #[test]
    fn capture_tail() {
        let pattern = parse("/blob/{*path}");
        let caps = pattern.captures("/blob/HEAD/Cargo.toml").unwrap();
        assert_eq!(&caps["path"], "HEAD/Cargo.toml");

        let caps = pattern.captures("/blob/LICENSE").unwrap();
        assert_eq!(&caps["path"], "LICENSE");

        // empty remainder binds an empty string under the default policy
        let caps = pattern.captures("/blob").unwrap();
        assert_eq!(&caps["path"], "");
    }

    #[test]
    fn capture_tail_empty_remainder_disabled() {
        let pattern = PatternParser::new()
            .match_empty_tail(false)
            .parse("/blob/{*path}")
            .unwrap();
        assert!(pattern.captures("/blob").is_none());
        assert_eq!(&pattern.captures("/blob/x").unwrap()["path"], "x");
    }

    #[test]
    fn trailing_slash_insensitive_default() {
        let pattern = parse("/users");
        assert!(pattern.is_match("/users"));
        assert!(pattern.is_match("/users/"));

        let pattern = parse("/users/");
        assert!(pattern.is_match("/users"));
        assert!(pattern.is_match("/users/"));
    }

    #[test]
    fn trailing_slash_strict() {
        let parser = PatternParser::new().trailing_slash(TrailingSlash::Strict);

        let pattern = parser.parse("/users").unwrap();
        assert!(pattern.is_match("/users"));
        assert!(!pattern.is_match("/users/"));

        let pattern = parser.parse("/users/").unwrap();
        assert!(!pattern.is_match("/users"));
        assert!(pattern.is_match("/users/"));

        // tail owns the remainder, slash and all
        let pattern = parser.parse("/files/**").unwrap();
        assert!(pattern.is_match("/files/a/"));
    }

    #[test]
    fn encoded_slash_is_not_a_separator() {
        let pattern = parse("/user/{id}");
        let caps = pattern.captures("/user/james%2Fbond").unwrap();
        assert_eq!(&caps["id"], "james/bond");

        // two encoded segments do not become three
        assert!(pattern.captures("/user%2Fjames/bond").is_none());
    }

    #[test]
    fn matches_paths_encoded_by_client() {
        use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

        let pattern = parse("/tag/{name}");
        let encoded = utf8_percent_encode("ünïcode/slash", NON_ALPHANUMERIC).to_string();
        let caps = pattern.captures(format!("/tag/{}", encoded)).unwrap();
        assert_eq!(&caps["name"], "ünïcode/slash");
    }

    #[test]
    fn percent_decoded_literals() {
        let pattern = parse("/a b/{id}");
        assert!(pattern.is_match("/a%20b/x"));
        assert_eq!(&pattern.captures("/a%20b/x").unwrap()["id"], "x");
    }

    #[test]
    fn malformed_percent_encoding_fails_closed() {
        let pattern = parse("/user/{id}");
        assert!(!pattern.is_match("/user/%zz"));
        assert!(!pattern.is_match("/user/%2"));
        assert!(pattern.captures("/user/%zz").is_none());
    }

    #[test]
    fn dot_segments_match_literally() {
        let pattern = parse("/static/{file}");
        assert_eq!(&pattern.captures("/static/..").unwrap()["file"], "..");

        let pattern = parse("/static/..");
        assert!(pattern.is_match("/static/.."));
        assert!(!pattern.is_match("/static/x"));
    }

    #[test]
    fn matching_is_idempotent() {
        let pattern = parse("/user/{id}/posts/{*rest}");
        let first = pattern.captures("/user/1/posts/a/b");
        for _ in 0..16 {
            assert_eq!(pattern.captures("/user/1/posts/a/b"), first);
        }
    }

    #[test]
    fn mid_segment_braces_are_literal() {
        // captures are whole segments only; embedded braces read as text
        let pattern = parse("/rust-is-{opinion");
        assert!(pattern.is_match("/rust-is-{opinion"));
        assert!(!pattern.is_match("/rust-is-cool"));
    }

    #[test]
    fn err_unclosed_capture() {
        assert_eq!(
            PathPattern::parse("/user/{id"),
            Err(PatternError::UnclosedCapture("{id".to_owned()))
        );
        assert_eq!(
            PathPattern::parse("/user/{a}b}"),
            Err(PatternError::UnclosedCapture("{a}b}".to_owned()))
        );
    }

    #[test]
    fn err_empty_capture_name() {
        assert_eq!(
            PathPattern::parse("/user/{}"),
            Err(PatternError::EmptyCaptureName("{}".to_owned()))
        );
        assert_eq!(
            PathPattern::parse(r"/user/{:\d+}"),
            Err(PatternError::EmptyCaptureName(r"{:\d+}".to_owned()))
        );
        assert_eq!(
            PathPattern::parse("/f/{*}"),
            Err(PatternError::EmptyCaptureName("{*}".to_owned()))
        );
    }

    #[test]
    fn err_duplicate_capture_name() {
        assert_eq!(
            PathPattern::parse("/{id}/{id}"),
            Err(PatternError::DuplicateCaptureName("id".to_owned()))
        );
        assert_eq!(
            PathPattern::parse(r"/{id}/{id:\d+}"),
            Err(PatternError::DuplicateCaptureName("id".to_owned()))
        );
    }

    #[test]
    fn err_tail_not_last() {
        assert_eq!(
            PathPattern::parse("/a/**/b"),
            Err(PatternError::TailNotLast("/a/**/b".to_owned()))
        );
        assert_eq!(
            PathPattern::parse("/a/**/**"),
            Err(PatternError::TailNotLast("/a/**/**".to_owned()))
        );
        assert_eq!(
            PathPattern::parse("/a/{*rest}/b"),
            Err(PatternError::TailNotLast("/a/{*rest}/b".to_owned()))
        );
    }

    #[test]
    fn err_constraint_on_tail() {
        assert_eq!(
            PathPattern::parse(r"/a/{*rest:\d+}"),
            Err(PatternError::ConstraintOnTail("rest".to_owned()))
        );
    }

    #[test]
    fn err_invalid_constraint() {
        assert!(matches!(
            PathPattern::parse("/a/{id:[}"),
            Err(PatternError::InvalidConstraint { name, .. }) if name == "id"
        ));
    }

    #[test]
    fn err_empty_segment() {
        assert_eq!(
            PathPattern::parse("/a//b"),
            Err(PatternError::EmptySegment("/a//b".to_owned()))
        );
    }

    #[test]
    fn equality_and_hash_by_pattern_text() {
        use std::collections::HashSet;

        assert_eq!(parse("/user/{id}"), parse("/user/{id}"));
        assert_ne!(parse("/user/{id}"), parse("/user/{uid}"));

        let strict = PatternParser::new()
            .trailing_slash(TrailingSlash::Strict)
            .parse("/user")
            .unwrap();
        assert_ne!(parse("/user"), strict);

        let mut set = HashSet::new();
        set.insert(parse("/user/{id}"));
        assert!(set.contains(&parse("/user/{id}")));
    }

    #[test]
    fn from_str_and_try_from() {
        let pattern: PathPattern = "/user/{id}".parse().unwrap();
        assert!(pattern.is_match("/user/1"));

        let pattern = PathPattern::try_from("/user/{id}").unwrap();
        assert!(pattern.is_match("/user/1"));

        assert!("/{a}/{a}".parse::<PathPattern>().is_err());
    }

    #[test]
    fn concurrent_matching_agrees_with_sequential() {
        let pattern = Arc::new(parse("/user/{id}/files/{*path}"));
        let expected = pattern.captures("/user/9/files/a/b");

        thread::scope(|scope| {
            for _ in 0..8 {
                let pattern = Arc::clone(&pattern);
                let expected = expected.clone();
                scope.spawn(move || {
                    for _ in 0..1_000 {
                        assert_eq!(pattern.captures("/user/9/files/a/b"), expected);
                        assert!(!pattern.is_match("/user"));
                    }
                });
            }
        });
    }

    #[cfg(feature = "http")]
    #[test]
    fn matches_http_uri() {
        let uri = http::Uri::from_static("https://example.com/user/7?verbose=1");
        let pattern = parse("/user/{id}");
        assert_eq!(&pattern.captures(&uri).unwrap()["id"], "7");
    }
}
