//! `v`-prefixed semantic version.
//!
//! Companion version struct for the vsemver_parser parser.
//! Compared to [`semver::Version`], this version:
//!  - Renders with a leading `v` (e.g. `v1.2.3-beta`)
//!  - Keeps the pre-release as one opaque string and compares it lexicographically
//!  - Has no build metadata
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

use std::{
    cmp::Ordering,
    fmt::{self, Display, Write},
};

/// Represents a semantic version number.
///
/// Values are plain data: construct them directly, through [`Version::new`],
/// or by parsing. Two versions are equal if all four fields are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    /// The major version.
    pub major: u64,
    /// The minor version.
    pub minor: u64,
    /// The patch version.
    pub patch: u64,
    /// The pre-release tag, empty if this is not a pre-release.
    pub prerelease: String,
}

impl Version {
    /// Constructs a new version out of the three numeric version components
    ///
    /// ## Examples
    ///
    /// ```
    /// # use vsemver_version::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "v1.2.3")
    /// ```
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: String::new(),
        }
    }

    /// Constructs a new pre-release version.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use vsemver_version::Version;
    /// let version = Version::with_pre_release(1, 2, 3, "beta1");
    /// assert_eq!(version.to_string(), "v1.2.3-beta1")
    /// ```
    pub fn with_pre_release(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: impl Into<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: prerelease.into(),
        }
    }

    /// Parse a string slice into a Version.
    ///
    /// Missing minor and patch components default to 0.
    /// For more information, see [`vsemver_parser::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use vsemver_version::Version;
    ///
    /// let version = Version::parse("v1.0.7-alpha").unwrap();
    /// assert_eq!(version, Version::with_pre_release(1, 0, 7, "alpha"));
    ///
    /// let version = Version::parse("v2.4").unwrap();
    /// assert_eq!(version, Version::new(2, 4, 0));
    ///
    /// assert!(Version::parse("1.2.3").is_err());
    /// ```
    #[cfg(feature = "parser")]
    pub fn parse(input: &str) -> Result<Self, vsemver_parser::Error<'_>> {
        vsemver_parser::parse::<Self>(input)
    }

    /// Returns true if this version has a pre-release tag.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use vsemver_version::Version;
    ///
    /// assert!(!Version::new(1, 0, 0).is_pre_release());
    /// assert!(Version::with_pre_release(1, 0, 0, "rc1").is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Returns true if both versions have identical components and pre-release tags.
    pub fn equals(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
    }

    /// Returns true if this is a higher version than `other`.
    ///
    /// Major, minor, and patch are compared in that order and the first difference decides.
    /// On a tie, a release is higher than any pre-release and two pre-releases
    /// are ordered by comparing their tags as plain strings.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use vsemver_version::Version;
    ///
    /// assert!(Version::new(4, 0, 0).greater_than(&Version::new(3, 6, 1)));
    /// assert!(Version::new(1, 0, 0).greater_than(&Version::with_pre_release(1, 0, 0, "beta")));
    /// assert!(Version::with_pre_release(1, 2, 3, "z").greater_than(&Version::with_pre_release(1, 2, 3, "foo")));
    /// ```
    pub fn greater_than(&self, other: &Self) -> bool {
        if self.major != other.major {
            return self.major > other.major;
        }
        if self.minor != other.minor {
            return self.minor > other.minor;
        }
        if self.patch != other.patch {
            return self.patch > other.patch;
        }
        cmp_pre_release(&self.prerelease, &other.prerelease) == Ordering::Greater
    }

    /// Returns true if this is a lower version than `other`.
    ///
    /// This is exactly the case when the versions are neither equal nor is this one greater.
    pub fn less_than(&self, other: &Self) -> bool {
        !self.equals(other) && !self.greater_than(other)
    }
}

/// The empty tag marks a release, which sorts after all pre-releases.
fn cmp_pre_release(left: &str, right: &str) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.cmp(right),
    }
}

impl From<u64> for Version {
    fn from(x: u64) -> Self {
        Version::new(x, 0, 0)
    }
}

impl From<(u64, u64)> for Version {
    fn from((x, y): (u64, u64)) -> Self {
        Version::new(x, y, 0)
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        Version::new(x, y, z)
    }
}

impl From<[u64; 3]> for Version {
    fn from(v: [u64; 3]) -> Self {
        Version::new(v[0], v[1], v[2])
    }
}

#[cfg(feature = "parser")]
impl<'input> std::convert::TryFrom<&'input str> for Version {
    type Error = vsemver_parser::Error<'input>;

    fn try_from(value: &'input str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(feature = "parser")]
impl std::str::FromStr for Version {
    type Err = vsemver_parser::OwnedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(|e| e.owned())
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_pre_release() {
            result.push('-');
            result.push_str(&self.prerelease);
        }

        f.pad(&result)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.equals(other) {
            Ordering::Equal
        } else if self.greater_than(other) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

#[cfg(feature = "parser")]
impl<'input> vsemver_parser::VersionBuilder<'input> for Version {
    type Out = Self;

    fn new() -> Self {
        Version::default()
    }

    fn set_major(&mut self, major: u64) {
        self.major = major;
    }

    fn set_minor(&mut self, minor: u64) {
        self.minor = minor;
    }

    fn set_patch(&mut self, patch: u64) {
        self.patch = patch;
    }

    fn set_pre_release(&mut self, pre_release: &'input str) {
        self.prerelease = pre_release.to_owned();
    }

    fn build(self) -> Self::Out {
        self
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

/// Fails if the pre-release tag is not a valid semver 2.0 pre-release.
#[cfg(feature = "semver")]
impl std::convert::TryFrom<Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: Version) -> Result<Self, Self::Error> {
        Ok(semver::Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre: semver::Prerelease::new(&v.prerelease)?,
            build: semver::BuildMetadata::EMPTY,
        })
    }
}

/// Build metadata is dropped.
#[cfg(feature = "semver")]
impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            prerelease: v.pre.as_str().to_owned(),
        }
    }
}
