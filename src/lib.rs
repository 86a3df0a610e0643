//! Parser and ordering for `v`-prefixed Semantic Version numbers.
//!
//! ## Motivation
//!
//! Version tags in the wild are often written as `v1.2.3` and sometimes shortened to `v1.2` or `v1`.
//! This crate parses exactly that shape and orders the results:
//!
//! - The leading `v` is required (e.g. "1.2.3" is rejected)
//! - Minor and patch are optional and default to 0 (e.g. "v2" parses as "v2.0.0")
//! - Everything after the numbers is an opaque pre-release tag (e.g. "v1.2.3-rc.2" has the tag "rc.2")
//! - Pre-release tags are compared as plain strings, a release is greater than any of its pre-releases
//!
//! ## Examples
//!
//! ```rust
//! use vsemver::Version;
//!
//! let version = vsemver::parse("v1.0.7-alpha").unwrap();
//! assert_eq!(version, Version::with_pre_release(1, 0, 7, "alpha"));
//! assert_eq!(version.to_string(), "v1.0.7-alpha");
//!
//! assert_eq!(vsemver::parse("v2").unwrap(), Version::new(2, 0, 0));
//! assert_eq!(vsemver::parse("v2.4").unwrap(), Version::new(2, 4, 0));
//!
//! assert!(Version::new(1, 0, 7).greater_than(&version));
//! assert!(version.less_than(&Version::new(1, 1, 0)));
//! ```
//!
//! Parsing errors describe what went wrong and where.
//!
//! ```rust
//! use vsemver::ErrorKind;
//!
//! let error = vsemver::parse("v1.lol").unwrap_err();
//! assert_eq!(error.error_kind(), ErrorKind::IllegalVersion);
//! assert_eq!(
//!     format!("{:#}", error),
//!     "Could not parse the minor identifier: `lol` is not a number\n|    v1.lol\n|    ~~~^^^\n"
//! );
//!
//! assert_eq!(vsemver::parse("").unwrap_err().error_kind(), ErrorKind::EmptyVersion);
//! ```
//!
//! ## Custom Version types
//!
//! The parser can fill any type implementing [`VersionBuilder`].
//!
//! ```rust
//! use vsemver::VersionBuilder;
//!
//! /// Only keeps the numbers, on the stack
//! #[derive(Debug, Default)]
//! struct Numbers([u64; 3]);
//!
//! impl VersionBuilder<'_> for Numbers {
//!     type Out = [u64; 3];
//!
//!     fn new() -> Self {
//!         Self::default()
//!     }
//!
//!     fn set_major(&mut self, major: u64) {
//!         self.0[0] = major;
//!     }
//!
//!     fn set_minor(&mut self, minor: u64) {
//!         self.0[1] = minor;
//!     }
//!
//!     fn set_patch(&mut self, patch: u64) {
//!         self.0[2] = patch;
//!     }
//!
//!     fn build(self) -> Self::Out {
//!         self.0
//!     }
//! }
//!
//! assert_eq!(vsemver::parse_into::<Numbers>("v1.3-beta"), Ok([1, 3, 0]));
//! ```

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

pub use vsemver_parser::{Error, ErrorKind, OwnedError, VersionBuilder};
pub use vsemver_version::Version;

/// Parse a string slice into a [`Version`].
///
/// The input must look like `vMAJOR[.MINOR[.PATCH]][-PRERELEASE]`.
/// Missing minor and patch numbers default to 0.
///
/// ## Examples
///
/// ```rust
/// use vsemver::Version;
///
/// assert_eq!(vsemver::parse("v1.2.3"), Ok(Version::new(1, 2, 3)));
/// assert_eq!(vsemver::parse("v1.2.3-rc.2"), Ok(Version::with_pre_release(1, 2, 3, "rc.2")));
/// assert!(vsemver::parse("v.").is_err());
/// ```
pub fn parse(input: &str) -> Result<Version, Error<'_>> {
    parse_into::<Version>(input)
}

/// Parse a string slice into any [`VersionBuilder`].
///
/// See [`vsemver_parser::parse`].
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    vsemver_parser::parse::<V>(input)
}
