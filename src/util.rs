//! Small helpers for showing sequences of keys.

use std::fmt;

/// Displays a slice as `[ a b c ]`. An empty slice shows as `[ ]`.
///
/// # Examples
///
/// ```
/// use ordered_tree::util::Sequence;
///
/// assert_eq!(Sequence(&[3, 1, 2]).to_string(), "[ 3 1 2 ]");
/// assert_eq!(Sequence::<i32>(&[]).to_string(), "[ ]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sequence<'a, T>(pub &'a [T]);

impl<T> fmt::Display for Sequence<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for item in self.0 {
            write!(f, "{} ", item)?;
        }
        f.write_str("]")
    }
}
