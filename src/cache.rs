use std::sync::Arc;

use dashmap::{mapref::entry::Entry, DashMap};
use tracing::debug;

use crate::pattern::{PathPattern, PatternError, PatternParser};

/// Concurrent cache of compiled patterns, keyed by pattern text.
///
/// Route configuration tends to hand the same pattern text to many
/// registration sites; the cache makes compilation amortized and hands out
/// shared handles. Reads are lock-free; a miss compiles under the entry for
/// the missing key, so one pattern text is compiled at most once no matter
/// how many callers race on it, and no caller ever observes a
/// partially-built pattern.
///
/// # Examples
/// ```
/// use route_pattern::PatternCache;
///
/// let cache = PatternCache::new();
///
/// let first = cache.get("/user/{id}")?;
/// let second = cache.get("/user/{id}")?;
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// # Ok::<(), route_pattern::PatternError>(())
/// ```
#[derive(Debug, Default)]
pub struct PatternCache {
    parser: PatternParser,
    compiled: DashMap<String, Arc<PathPattern>>,
}

impl PatternCache {
    /// Creates a cache compiling with the default [`PatternParser`] policy.
    pub fn new() -> PatternCache {
        PatternCache::default()
    }

    /// Creates a cache compiling with the given parser policy.
    pub fn with_parser(parser: PatternParser) -> PatternCache {
        PatternCache {
            parser,
            compiled: DashMap::new(),
        }
    }

    /// Returns the compiled pattern for `pattern`, compiling on first use.
    ///
    /// # Errors
    /// Propagates [`PatternError`] from compilation. Failed compilations are
    /// not cached; a broken pattern is a configuration error and every
    /// registration attempt should see it.
    pub fn get(&self, pattern: &str) -> Result<Arc<PathPattern>, PatternError> {
        if let Some(found) = self.compiled.get(pattern) {
            return Ok(Arc::clone(&found));
        }

        match self.compiled.entry(pattern.to_owned()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let compiled = Arc::new(self.parser.parse(pattern)?);
                debug!(pattern, "compiled path pattern");
                entry.insert(Arc::clone(&compiled));
                Ok(compiled)
            }
        }
    }

    /// Number of distinct compiled patterns.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}
