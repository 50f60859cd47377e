use std::ops::Index;

use serde::{de, Deserialize};

use crate::de::CapturesDeserializer;

/// Variable bindings produced by a successful pattern match.
///
/// Holds one decoded value per named capture, in pattern order. Values are
/// the literal matched segment text after percent-decoding; a tail capture
/// (`{*name}`) holds the remaining segments rejoined with `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    bindings: Vec<(String, String)>,
}

impl Captures {
    pub(crate) fn new(bindings: Vec<(String, String)>) -> Captures {
        Captures { bindings }
    }

    /// Returns the value bound to `name`, if the pattern captured it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if any variables were captured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns number of captured variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Return iterator over name/value pairs in capture order.
    pub fn iter(&self) -> CapturesIter<'_> {
        CapturesIter {
            idx: 0,
            captures: self,
        }
    }

    /// Deserializes the captured values to a specified type `T`.
    ///
    /// # Errors
    /// Returns error when the captured values cannot be deserialized into a
    /// `T` value.
    pub fn load<'de, T: Deserialize<'de>>(&'de self) -> Result<T, de::value::Error> {
        Deserialize::deserialize(CapturesDeserializer::new(self))
    }
}

#[derive(Debug)]
pub struct CapturesIter<'a> {
    idx: usize,
    captures: &'a Captures,
}

impl<'a> Iterator for CapturesIter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        let (name, value) = self.captures.bindings.get(self.idx)?;
        self.idx += 1;
        Some((name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.captures.len() - self.idx;
        (rem, Some(rem))
    }
}

impl<'a> IntoIterator for &'a Captures {
    type Item = (&'a str, &'a str);
    type IntoIter = CapturesIter<'a>;

    fn into_iter(self) -> CapturesIter<'a> {
        self.iter()
    }
}

impl<'a> Index<&'a str> for Captures {
    type Output = str;

    fn index(&self, name: &'a str) -> &str {
        self.get(name)
            .expect("value for capture is not available")
    }
}

impl Index<usize> for Captures {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        &self.bindings[idx].1
    }
}
