//! Path representation for navigating nested structures.
//!
//! Paths are sequences of segments that describe a location inside a value
//! built out of sequences (JSON arrays) and mappings (JSON objects). Each
//! segment is either a key (for mappings) or a signed index (for sequences).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single segment in a path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Mapping key access: `{"key": value}`
    Key(String),
    /// Sequence index access: `[index]`. Negative indices address from the
    /// end: `-1` is the last element.
    Index(i64),
}

impl Seg {
    /// Create a key segment.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Seg::Key(k.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: i64) -> Self {
        Seg::Index(i)
    }

    /// Returns true if this is a key segment.
    #[inline]
    pub fn is_key(&self) -> bool {
        matches!(self, Seg::Key(_))
    }

    /// Returns true if this is an index segment.
    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Seg::Index(_))
    }

    /// Get the key if this is a key segment.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Seg::Key(k) => Some(k),
            Seg::Index(_) => None,
        }
    }

    /// Get the index if this is an index segment.
    #[inline]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Seg::Key(_) => None,
            Seg::Index(i) => Some(*i),
        }
    }

    /// Resolve an index segment against a sequence of the given length.
    ///
    /// A non-negative index addresses that position directly; a negative
    /// index `i` addresses `len + i`. Returns `None` for key segments and
    /// for indices that fall outside `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypath::Seg;
    ///
    /// assert_eq!(Seg::index(1).resolve(3), Some(1));
    /// assert_eq!(Seg::index(-1).resolve(3), Some(2));
    /// assert_eq!(Seg::index(3).resolve(3), None);
    /// assert_eq!(Seg::key("a").resolve(3), None);
    /// ```
    #[inline]
    pub fn resolve(&self, len: usize) -> Option<usize> {
        let i = self.as_index()?;
        let resolved = if i >= 0 { i } else { len as i64 + i };
        if resolved >= 0 && (resolved as usize) < len {
            Some(resolved as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, ".{}", k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<i64> for Seg {
    fn from(i: i64) -> Self {
        Seg::Index(i)
    }
}

impl From<i32> for Seg {
    fn from(i: i32) -> Self {
        Seg::Index(i as i64)
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i as i64)
    }
}

/// A complete path into a nested structure.
///
/// Paths are immutable sequences of segments. Use builder methods to
/// construct paths incrementally, or the [`path!`](crate::path!) macro.
///
/// # Examples
///
/// ```
/// use keypath::Path;
///
/// let path = Path::root().key("users").index(0).key("name");
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Seg>);

impl Path {
    /// Create an empty path (root).
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty path (alias for `new`).
    #[inline]
    pub fn root() -> Self {
        Self::new()
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<Seg>) -> Self {
        Self(segments)
    }

    /// Append a key segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    /// Append an index segment and return self (builder pattern).
    #[inline]
    pub fn index(mut self, i: i64) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    /// Push a segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    /// Pop the last segment from the path.
    #[inline]
    pub fn pop(&mut self) -> Option<Seg> {
        self.0.pop()
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    /// Check if this path is empty (root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the first segment.
    #[inline]
    pub fn first(&self) -> Option<&Seg> {
        self.0.first()
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> Option<&Seg> {
        self.0.last()
    }

    /// Join this path with another path.
    #[inline]
    pub fn join(&self, other: &Path) -> Path {
        let mut result = self.clone();
        result.0.extend(other.0.iter().cloned());
        result
    }

    /// Get the parent path (path without the last segment).
    #[inline]
    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            let mut p = self.clone();
            p.pop();
            Some(p)
        }
    }

    /// Get a slice of segments from start to end.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> Path {
        Path(self.0[start..end].to_vec())
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Seg> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.0 {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Seg;
    type IntoIter = std::vec::IntoIter<Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Seg;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Construct a [`Path`] from a sequence of segments.
///
/// # Examples
///
/// ```
/// use keypath::path;
///
/// // String literals become Key segments
/// let p = path!("users", "alice", "email");
///
/// // Integers become Index segments; negatives address from the end
/// let p = path!("items", 0, "name");
/// let p = path!("items", -1);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Seg::from($seg));
        )+
        p
    }};
}
