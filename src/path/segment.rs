use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use super::PathCache;

/// The largest name that counts as an array index. Larger integers are plain property names.
pub const MAX_INDEX: usize = 4_294_967_294;

/// A single property-access step in a [`PropertyPath`].
///
/// The name is kept verbatim. If the name is a canonical non-negative integer no larger than
/// [`MAX_INDEX`] (`"0"`, `"42"`, but not `"007"`, `"-1"`, `"1e3"` or `"4294967295"`), the parsed
/// index is stored alongside it so array traversal doesn't need to re-parse on every access.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: Box<str>,
    index: Option<usize>,
}

impl Segment {
    pub fn new(name: &str) -> Segment {
        Segment {
            name: name.into(),
            index: parse_index(name),
        }
    }

    /// Returns the segment as it appeared in the path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the array index this segment addresses, if it looks like one.
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    pub const fn is_index(&self) -> bool {
        self.index.is_some()
    }
}

fn parse_index(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => name.parse()
            .ok()
            .filter(|index| *index <= MAX_INDEX),
        _ => None,
    }
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::new(value)
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Segment::new(&value)
    }
}

impl From<usize> for Segment {
    fn from(value: usize) -> Self {
        Segment {
            name: value.to_string().into(),
            index: (value <= MAX_INDEX).then_some(value),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An immutable, shared sequence of [`Segment`]s. Cloning is a reference count increment, which
/// is what lets the cache hand out parsed paths without copying them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath(Arc<[Segment]>);

impl PropertyPath {
    /// Splits `path` on `.` without consulting any cache. Every string produces at least one
    /// segment: `""` is a single empty segment and `"a."` ends with one.
    pub fn split(path: &str) -> PropertyPath {
        PropertyPath(path.split('.').map(Segment::new).collect())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl Deref for PropertyPath {
    type Target = [Segment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Segment>> for PropertyPath {
    fn from(value: Vec<Segment>) -> Self {
        PropertyPath(value.into())
    }
}

impl From<&[Segment]> for PropertyPath {
    fn from(value: &[Segment]) -> Self {
        PropertyPath(value.into())
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Segments resolved from anything implementing [`AsPath`]: either a path handed out by a cache
/// or a slice borrowed from the caller.
#[derive(Debug, Clone)]
pub enum Segments<'a> {
    Cached(PropertyPath),
    Borrowed(&'a [Segment]),
}

impl Deref for Segments<'_> {
    type Target = [Segment];

    fn deref(&self) -> &Self::Target {
        match self {
            Segments::Cached(path) => path.segments(),
            Segments::Borrowed(segments) => *segments,
        }
    }
}

/// Types that can address a location in a value tree: dotted strings (parsed through a
/// [`PathCache`]) and explicit segment lists (used as-is).
pub trait AsPath {
    fn segments_in<'a>(&'a self, cache: &PathCache) -> Segments<'a>;
}

impl AsPath for str {
    fn segments_in<'a>(&'a self, cache: &PathCache) -> Segments<'a> {
        Segments::Cached(cache.parse(self))
    }
}

impl AsPath for String {
    fn segments_in<'a>(&'a self, cache: &PathCache) -> Segments<'a> {
        self.as_str().segments_in(cache)
    }
}

impl AsPath for [Segment] {
    fn segments_in<'a>(&'a self, _cache: &PathCache) -> Segments<'a> {
        Segments::Borrowed(self)
    }
}

impl<const N: usize> AsPath for [Segment; N] {
    fn segments_in<'a>(&'a self, _cache: &PathCache) -> Segments<'a> {
        Segments::Borrowed(self)
    }
}

impl AsPath for Vec<Segment> {
    fn segments_in<'a>(&'a self, _cache: &PathCache) -> Segments<'a> {
        Segments::Borrowed(self)
    }
}

impl AsPath for PropertyPath {
    fn segments_in<'a>(&'a self, _cache: &PathCache) -> Segments<'a> {
        Segments::Borrowed(self)
    }
}

impl<P: AsPath + ?Sized> AsPath for &P {
    fn segments_in<'a>(&'a self, cache: &PathCache) -> Segments<'a> {
        (**self).segments_in(cache)
    }
}
