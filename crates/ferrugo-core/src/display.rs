// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Collection Display
//!
//! Renders the elements of a range as delimited text, for example
//! `[1, 2, 3]`. [`DisplayOptions`] controls the separator, the surrounding
//! prefix and suffix, and an optional element limit, which makes unbounded
//! ranges printable.
//!
//! ```rust
//! # use ferrugo_core::display::{DisplayOptions, delimited};
//! # use ferrugo_core::range::adapt::adapt;
//! let data = vec![1, 2, 3, 4];
//! assert_eq!(delimited(&adapt(&data)).to_string(), "[1, 2, 3, 4]");
//!
//! let options = DisplayOptions::new()
//!     .with_separator(" ")
//!     .with_prefix("(")
//!     .with_suffix(")")
//!     .with_limit(2);
//! assert_eq!(
//!     delimited(&adapt(&data)).with_options(options).to_string(),
//!     "(1 2 ...)"
//! );
//! ```

use crate::range::{Range, RangeItem};
use std::borrow::Cow;

/// Formatting options for [`Delimited`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayOptions {
    separator: Cow<'static, str>,
    prefix: Cow<'static, str>,
    suffix: Cow<'static, str>,
    limit: Option<usize>,
}

impl Default for DisplayOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayOptions {
    /// Returns the default options: `", "` between elements inside `[` and `]`,
    /// without a limit.
    #[inline]
    pub fn new() -> Self {
        Self {
            separator: Cow::Borrowed(", "),
            prefix: Cow::Borrowed("["),
            suffix: Cow::Borrowed("]"),
            limit: None,
        }
    }

    /// Sets the text written between two elements.
    #[inline]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the text written before the first element.
    #[inline]
    pub fn with_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the text written after the last element.
    #[inline]
    pub fn with_suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Prints at most `limit` elements, followed by `...` if more remain.
    #[inline]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the text written between two elements.
    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the text written before the first element.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the text written after the last element.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the maximum number of printed elements, if any.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// A [`Display`](std::fmt::Display) adapter printing the elements of a range.
#[derive(Debug, Clone)]
pub struct Delimited<'a, R> {
    range: &'a R,
    options: DisplayOptions,
}

impl<'a, R> Delimited<'a, R> {
    /// Replaces the formatting options.
    #[inline]
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the formatting options.
    #[inline]
    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }
}

/// Prints the elements of `range` with the default [`DisplayOptions`].
#[inline]
pub fn delimited<R: Range>(range: &R) -> Delimited<'_, R> {
    Delimited {
        range,
        options: DisplayOptions::new(),
    }
}

impl<R> std::fmt::Display for Delimited<'_, R>
where
    R: Range,
    RangeItem<R>: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let options = &self.options;
        f.write_str(options.prefix())?;
        let mut items = self.range.iter();
        let limit = options.limit().unwrap_or(usize::MAX);
        let mut written = 0;
        while written < limit {
            let Some(item) = items.next() else {
                return f.write_str(options.suffix());
            };
            if written > 0 {
                f.write_str(options.separator())?;
            }
            write!(f, "{}", item)?;
            written += 1;
        }
        if items.next().is_some() {
            if written > 0 {
                f.write_str(options.separator())?;
            }
            f.write_str("...")?;
        }
        f.write_str(options.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{adapt::adapt, views};

    #[test]
    fn test_default_format() {
        let data = vec!["a", "b"];
        assert_eq!(delimited(&adapt(&data)).to_string(), "[a, b]");
        let empty: Vec<u8> = Vec::new();
        assert_eq!(delimited(&adapt(&empty)).to_string(), "[]");
    }

    #[test]
    fn test_limit() {
        let data = vec![1, 2, 3];
        let range = adapt(&data);
        let show = |limit| {
            delimited(&range)
                .with_options(DisplayOptions::default().with_limit(limit))
                .to_string()
        };
        assert_eq!(show(0), "[...]");
        assert_eq!(show(2), "[1, 2, ...]");
        assert_eq!(show(3), "[1, 2, 3]");
        assert_eq!(show(10), "[1, 2, 3]");
    }

    #[test]
    fn test_owned_separator_and_view() {
        let data = vec![1.5f64, 2.25];
        let view = views::transform(adapt(&data), |x: &f64| x * 2.0);
        let options = DisplayOptions::new()
            .with_separator(String::from(" | "))
            .with_prefix("")
            .with_suffix("");
        assert_eq!(options.separator(), " | ");
        assert_eq!(delimited(&view).with_options(options).to_string(), "3 | 4.5");
    }

    #[test]
    fn test_builder_setters_and_getters_agree() {
        let defaults = DisplayOptions::default();
        assert_eq!(defaults.separator(), ", ");
        assert_eq!(defaults.prefix(), "[");
        assert_eq!(defaults.suffix(), "]");
        assert_eq!(defaults.limit(), None);

        let options = defaults
            .with_separator(";")
            .with_prefix("<")
            .with_suffix(">")
            .with_limit(1);
        assert_eq!(options.separator(), ";");
        assert_eq!(options.prefix(), "<");
        assert_eq!(options.suffix(), ">");
        assert_eq!(options.limit(), Some(1));

        let data = [8, 9];
        let range = adapt(&data);
        let shown = delimited(&range).with_options(options.clone());
        assert_eq!(shown.options(), &options);
        assert_eq!(shown.to_string(), "<8;...>");
    }
}
