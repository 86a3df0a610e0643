//! Parser for `v`-prefixed Semantic Version numbers.
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

use std::{fmt::Display, ops::Range};

/// Parse a string slice into a Version.
///
/// The accepted grammar is `vMAJOR[.MINOR[.PATCH]][-PRERELEASE]`:
///
/// - The leading `v` and the major number are required
/// - Minor and patch are optional and default to 0 (e.g. "v2" parses as "v2.0.0")
/// - A `-` ends the numeric part early (e.g. "v2-rc1" parses as "v2.0.0-rc1")
/// - Everything after the numeric part is taken verbatim as the pre-release
///   (e.g. "v1.2.3-rc.2" has the pre-release "rc.2")
///
/// The parser runs a single forward pass and fails on the first malformed component.
///
/// ## Examples
///
/// ```rust
/// use vsemver_parser::{parse, ErrorKind, VersionBuilder};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Numbers([u64; 3]);
///
/// impl VersionBuilder<'_> for Numbers {
///     type Out = [u64; 3];
///
///     fn new() -> Self {
///         Self::default()
///     }
///
///     fn set_major(&mut self, major: u64) {
///         self.0[0] = major;
///     }
///
///     fn set_minor(&mut self, minor: u64) {
///         self.0[1] = minor;
///     }
///
///     fn set_patch(&mut self, patch: u64) {
///         self.0[2] = patch;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// assert_eq!(parse::<Numbers>("v1.2.3"), Ok([1, 2, 3]));
/// assert_eq!(parse::<Numbers>("v2.4"), Ok([2, 4, 0]));
/// assert_eq!(parse::<Numbers>("v2"), Ok([2, 0, 0]));
/// assert_eq!(parse::<Numbers>("v2-beta"), Ok([2, 0, 0]));
///
/// assert_eq!(parse::<Numbers>("").unwrap_err().error_kind(), ErrorKind::EmptyVersion);
/// assert_eq!(parse::<Numbers>("1.2.3").unwrap_err().error_kind(), ErrorKind::IllegalVersion);
/// ```
pub fn parse<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    parse_version::<V>(input).map_err(|ErrorSpan { error, span }| Error { input, span, error })
}

/// Trait to abstract over version building.
///
/// The parser calls these methods while it walks the input.
/// Implementing them allows parsing into a custom type.
///
/// The trait is generic over the lifetime of the input string, so that one could
/// keep the pre-release without having to allocate.
///
/// Most methods have a default implementation that does nothing and ignores the input.
/// This can be used to implement some form of validation without needing to keep the result.
///
/// ## Example
///
/// ```rust
/// # use vsemver_parser::VersionBuilder;
///
/// struct IsPreRelease(bool);
///
/// impl<'input> VersionBuilder<'input> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///        IsPreRelease(false)
///     }
///
///     fn set_pre_release(&mut self, _input: &'input str) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// fn is_pre_release(v: &str) -> bool {
///     vsemver_parser::parse::<IsPreRelease>(v).unwrap_or_default()
/// }
///
/// assert!(is_pre_release("v1.2.3-pre"));
/// assert!(is_pre_release("v1-pre"));
/// assert!(!is_pre_release("v1.2.3"));
/// ```
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from [`VersionBuilder::build`] at this point)
    /// should represent "0.0.0"
    fn new() -> Self;

    /// Set the major version component.
    ///
    /// This is called for every successfully parsed version.
    #[allow(unused)]
    fn set_major(&mut self, major: u64) {}

    /// Set the minor version component.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_minor(&mut self, minor: u64) {}

    /// Set the patch version component.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    #[allow(unused)]
    fn set_patch(&mut self, patch: u64) {}

    /// Set the pre-release text.
    ///
    /// This is everything following the numeric components, without the separator.
    /// It is never empty and is called at most once.
    #[allow(unused)]
    fn set_pre_release(&mut self, pre_release: &'input str) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

/// Validates the input without building anything.
///
/// ```rust
/// assert!(vsemver_parser::parse::<()>("v1.0.7-alpha").is_ok());
/// assert!(vsemver_parser::parse::<()>("v1.lol").is_err());
/// ```
impl VersionBuilder<'_> for () {
    type Out = ();

    fn new() -> Self {}

    fn build(self) -> Self::Out {}
}

/// Possible errors that happen during parsing
/// and the location of the input where the error occurred.
///
/// # Example
///
/// ```rust
/// let error = vsemver_parser::parse::<()>("v1.lol").unwrap_err();
/// assert_eq!(error.to_string(), "Could not parse the minor identifier: `lol` is not a number");
///
/// let error = vsemver_parser::parse::<()>("1.2.3").unwrap_err();
/// assert_eq!(error.to_string(), "Expected a leading `v`, found `1`");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    error: ErrorType,
}

impl<'input> Error<'input> {
    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = vsemver_parser::parse::<()>("v1..").unwrap_err();
    /// assert_eq!(error.input(), "v1..");
    /// ```
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = vsemver_parser::parse::<()>("v1.2.x").unwrap_err();
    /// assert_eq!(error.error_span(), 5..6);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vsemver_parser::{parse, ErrorKind};
    ///
    /// assert_eq!(parse::<()>("").unwrap_err().error_kind(), ErrorKind::EmptyVersion);
    /// assert_eq!(parse::<()>("v").unwrap_err().error_kind(), ErrorKind::IllegalVersion);
    /// assert_eq!(parse::<()>("v-").unwrap_err().error_kind(), ErrorKind::IllegalVersion);
    /// assert_eq!(parse::<()>("1.2.3").unwrap_err().error_kind(), ErrorKind::IllegalVersion);
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        match self.error {
            ErrorType::Empty => ErrorKind::EmptyVersion,
            ErrorType::MissingPrefix | ErrorType::Missing(_) | ErrorType::NotANumber(_) => {
                ErrorKind::IllegalVersion
            }
        }
    }

    /// Returns a slice from the original input line that triggered the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = vsemver_parser::parse::<()>("v1.lol").unwrap_err();
    /// assert_eq!(error.erroneous_input(), "lol");
    /// ```
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        &self.input[self.error_span()]
    }

    /// Returns a text representation of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = vsemver_parser::parse::<()>("v1..").unwrap_err();
    /// assert_eq!(error.error_line(), String::from("Could not parse the minor identifier: No input"));
    /// ```
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    ///
    /// ```rust
    /// let error = vsemver_parser::parse::<()>("").unwrap_err();
    /// assert_eq!(format!("{:!^26}", error), String::from("!!!Empty version string!!!"));
    /// ```
    pub fn error_line(&self) -> String {
        match &self.error {
            ErrorType::Empty => String::from("Empty version string"),
            ErrorType::MissingPrefix => {
                format!("Expected a leading `v`, found `{}`", self.erroneous_input())
            }
            ErrorType::Missing(part) => {
                format!("Could not parse the {} identifier: No input", part)
            }
            ErrorType::NotANumber(part) => format!(
                "Could not parse the {} identifier: `{}` is not a number",
                part,
                self.erroneous_input()
            ),
        }
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = vsemver_parser::parse::<()>("foo").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "^");
    ///
    /// let error = vsemver_parser::parse::<()>("v1.2.bar").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~~^^^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = self.span.end - self.span.start
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorType,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.borrowed().error_kind()
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

/// The two classes of parse failures.
/// Details about the location are covered by various
/// error methods like [`Error::erroneous_input`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input string was empty
    EmptyVersion,
    /// The input string was not empty, but not a valid version either
    IllegalVersion,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::EmptyVersion => f.pad("Empty version string"),
            ErrorKind::IllegalVersion => f.pad("Illegal version string"),
        }
    }
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

impl From<Error<'_>> for OwnedError {
    fn from(error: Error<'_>) -> Self {
        error.owned()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ErrorSpan {
    error: ErrorType,
    span: Span,
}

impl ErrorSpan {
    fn new(error: ErrorType, span: Span) -> Self {
        Self { error, span }
    }

    fn missing(part: Part, span: Span) -> Self {
        Self::new(ErrorType::Missing(part), span)
    }

    fn not_a_number(part: Part, span: Span) -> Self {
        Self::new(ErrorType::NotANumber(part), span)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ErrorType {
    Empty,
    MissingPrefix,
    Missing(Part),
    NotANumber(Part),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Part {
    Major,
    Minor,
    Patch,
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::Major => f.pad("major"),
            Part::Minor => f.pad("minor"),
            Part::Patch => f.pad("patch"),
        }
    }
}

/// Parsing only ever moves forward through these states.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum State {
    Start,
    FoundV,
    FoundMajor,
    FoundMinor,
    FoundPatch,
    FoundPreRelease,
}

fn parse_version<'input, V>(input: &'input str) -> Result<V::Out, ErrorSpan>
where
    V: VersionBuilder<'input>,
{
    if input.is_empty() {
        return Err(ErrorSpan::new(ErrorType::Empty, Span::default()));
    }

    let mut version = V::new();
    let mut state = State::Start;
    let mut pos = 0;

    while pos < input.len() {
        state = match state {
            State::Start => {
                if !input.starts_with('v') {
                    return Err(ErrorSpan::new(
                        ErrorType::MissingPrefix,
                        Span::first_char(input),
                    ));
                }
                pos = 1;
                State::FoundV
            }
            State::FoundV => {
                let field = read_number(input, pos, Part::Major)?;
                version.set_major(field.value);
                pos = field.next;
                field.next_state(State::FoundMajor)
            }
            State::FoundMajor => {
                let field = read_number(input, pos, Part::Minor)?;
                version.set_minor(field.value);
                pos = field.next;
                field.next_state(State::FoundMinor)
            }
            State::FoundMinor => {
                let field = read_number(input, pos, Part::Patch)?;
                version.set_patch(field.value);
                pos = field.next;
                State::FoundPatch
            }
            State::FoundPatch => {
                version.set_pre_release(&input[pos..]);
                pos = input.len();
                State::FoundPreRelease
            }
            State::FoundPreRelease => break,
        };
    }

    // at minimum we need a major version
    if state < State::FoundMajor {
        return Err(ErrorSpan::missing(Part::Major, Span::new(pos, pos)));
    }

    Ok(version.build())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Separator {
    Dot,
    Hyphen,
    End,
}

#[derive(Debug, Copy, Clone)]
struct Field {
    value: u64,
    next: usize,
    separator: Separator,
}

impl Field {
    /// A hyphen skips any remaining numeric parts.
    fn next_state(&self, after_dot: State) -> State {
        match self.separator {
            Separator::Hyphen => State::FoundPatch,
            Separator::Dot | Separator::End => after_dot,
        }
    }
}

/// Reads the number starting at `start` up to the next `.`, `-`, or the end of the input.
///
/// The returned field points past the separator.
fn read_number(input: &str, start: usize, part: Part) -> Result<Field, ErrorSpan> {
    let (end, separator) = match input[start..].find(&['.', '-'][..]) {
        Some(offset) => {
            let end = start + offset;
            match input.as_bytes()[end] {
                b'.' => (end, Separator::Dot),
                _ => (end, Separator::Hyphen),
            }
        }
        None => (input.len(), Separator::End),
    };

    let run = &input[start..end];
    if run.is_empty() {
        let span = Span::new(end, (end + 1).min(input.len()));
        return Err(ErrorSpan::missing(part, span));
    }

    // `u64::from_str` would also accept a leading `+`
    if !run.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorSpan::not_a_number(part, Span::new(start, end)));
    }
    let value = run
        .parse::<u64>()
        .map_err(|_| ErrorSpan::not_a_number(part, Span::new(start, end)))?;

    let next = match separator {
        Separator::End => end,
        Separator::Dot | Separator::Hyphen => end + 1,
    };

    Ok(Field {
        value,
        next,
        separator,
    })
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn first_char(input: &str) -> Self {
        Self::new(0, input.chars().next().map_or(0, char::len_utf8))
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Parts<'input> {
        major: u64,
        minor: u64,
        patch: u64,
        pre: Option<&'input str>,
    }

    impl<'input> VersionBuilder<'input> for Parts<'input> {
        type Out = Self;

        fn new() -> Self {
            Self::default()
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
            assert!(self.pre.is_none(), "pre-release set twice");
            self.pre = Some(pre_release);
        }

        fn build(self) -> Self::Out {
            self
        }
    }

    fn vers(major: u64, minor: u64, patch: u64) -> Parts<'static> {
        Parts {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    fn vers_pre(major: u64, minor: u64, patch: u64, pre: &'static str) -> Parts<'static> {
        Parts {
            major,
            minor,
            patch,
            pre: Some(pre),
        }
    }

    fn parse_parts(input: &str) -> Result<Parts<'_>, ErrorKind> {
        parse::<Parts<'_>>(input).map_err(|e| e.error_kind())
    }

    #[test_case("v0" => Ok(vers(0, 0, 0)); "zero")]
    #[test_case("v1" => Ok(vers(1, 0, 0)); "major only")]
    #[test_case("v1.2" => Ok(vers(1, 2, 0)); "major minor")]
    #[test_case("v1.2.3" => Ok(vers(1, 2, 3)); "major minor patch")]
    #[test_case("v2020.04.09" => Ok(vers(2020, 4, 9)); "leading zeros")]
    #[test_case("v18446744073709551615" => Ok(vers(u64::MAX, 0, 0)); "max major")]
    fn test_numbers(input: &str) -> Result<Parts<'_>, ErrorKind> {
        parse_parts(input)
    }

    #[test_case("v1.2.3-rc.2" => Ok(vers_pre(1, 2, 3, "rc.2")); "dotted pre-release")]
    #[test_case("v2.0.0-beta" => Ok(vers_pre(2, 0, 0, "beta")); "simple pre-release")]
    #[test_case("v1.0.7-alpha" => Ok(vers_pre(1, 0, 7, "alpha")); "alpha")]
    #[test_case("v1.2.3-alpha-1" => Ok(vers_pre(1, 2, 3, "alpha-1")); "hyphen in pre-release")]
    #[test_case("v1.2.3.beta" => Ok(vers_pre(1, 2, 3, "beta")); "dot before pre-release")]
    #[test_case("v1.2.3-a+b c" => Ok(vers_pre(1, 2, 3, "a+b c")); "pre-release is not validated")]
    #[test_case("v1.2-rc1" => Ok(vers_pre(1, 2, 0, "rc1")); "hyphen after minor")]
    #[test_case("v1-rc1" => Ok(vers_pre(1, 0, 0, "rc1")); "hyphen after major")]
    #[test_case("v1-2.3" => Ok(vers_pre(1, 0, 0, "2.3")); "numbers after hyphen")]
    fn test_pre_release(input: &str) -> Result<Parts<'_>, ErrorKind> {
        parse_parts(input)
    }

    #[test_case("v1." => Ok(vers(1, 0, 0)); "trailing dot major")]
    #[test_case("v1.2." => Ok(vers(1, 2, 0)); "trailing dot minor")]
    #[test_case("v1.2.3." => Ok(vers(1, 2, 3)); "trailing dot patch")]
    #[test_case("v1-" => Ok(vers(1, 0, 0)); "trailing hyphen major")]
    #[test_case("v1.2-" => Ok(vers(1, 2, 0)); "trailing hyphen minor")]
    #[test_case("v1.2.3-" => Ok(vers(1, 2, 3)); "trailing hyphen patch")]
    fn test_trailing_separator(input: &str) -> Result<Parts<'_>, ErrorKind> {
        parse_parts(input)
    }

    #[test_case("" => Err(ErrorKind::EmptyVersion); "empty")]
    #[test_case("v" => Err(ErrorKind::IllegalVersion); "only v")]
    #[test_case("v." => Err(ErrorKind::IllegalVersion); "v dot")]
    #[test_case("v.." => Err(ErrorKind::IllegalVersion); "v dot dot")]
    #[test_case("v-" => Err(ErrorKind::IllegalVersion); "v hyphen")]
    #[test_case("1" => Err(ErrorKind::IllegalVersion); "no prefix major")]
    #[test_case("1.2" => Err(ErrorKind::IllegalVersion); "no prefix minor")]
    #[test_case("1.2.3" => Err(ErrorKind::IllegalVersion); "no prefix patch")]
    #[test_case("1.2.3haha" => Err(ErrorKind::IllegalVersion); "no prefix garbage")]
    #[test_case("V1.2.3" => Err(ErrorKind::IllegalVersion); "upper case prefix")]
    #[test_case(" v1.2.3" => Err(ErrorKind::IllegalVersion); "leading whitespace")]
    #[test_case("v1.lol" => Err(ErrorKind::IllegalVersion); "alpha minor")]
    #[test_case("v1.2.haha" => Err(ErrorKind::IllegalVersion); "alpha patch")]
    #[test_case("vx" => Err(ErrorKind::IllegalVersion); "alpha major")]
    #[test_case("v+1" => Err(ErrorKind::IllegalVersion); "plus sign")]
    #[test_case("v1.+2" => Err(ErrorKind::IllegalVersion); "plus sign minor")]
    #[test_case("v1..3" => Err(ErrorKind::IllegalVersion); "empty minor")]
    #[test_case("v1.-rc" => Err(ErrorKind::IllegalVersion); "hyphen instead of minor")]
    #[test_case("v18446744073709551616" => Err(ErrorKind::IllegalVersion); "overflow")]
    fn test_rejected(input: &str) -> Result<Parts<'_>, ErrorKind> {
        parse_parts(input)
    }

    #[test_case("" => (0..0, String::from("Empty version string")); "empty")]
    #[test_case("1.2.3" => (0..1, String::from("Expected a leading `v`, found `1`")); "missing prefix")]
    #[test_case("äv1" => (0..2, String::from("Expected a leading `v`, found `ä`")); "missing prefix multibyte")]
    #[test_case("v" => (1..1, String::from("Could not parse the major identifier: No input")); "missing major at end")]
    #[test_case("v." => (1..2, String::from("Could not parse the major identifier: No input")); "missing major before dot")]
    #[test_case("v-" => (1..2, String::from("Could not parse the major identifier: No input")); "missing major before hyphen")]
    #[test_case("v1..2" => (3..4, String::from("Could not parse the minor identifier: No input")); "missing minor")]
    #[test_case("v1.2..3" => (5..6, String::from("Could not parse the patch identifier: No input")); "missing patch")]
    #[test_case("vfoo" => (1..4, String::from("Could not parse the major identifier: `foo` is not a number")); "major not a number")]
    #[test_case("v1.lol" => (3..6, String::from("Could not parse the minor identifier: `lol` is not a number")); "minor not a number")]
    #[test_case("v1.2.3x" => (5..7, String::from("Could not parse the patch identifier: `3x` is not a number")); "patch not a number")]
    fn test_error_location(input: &str) -> (Range<usize>, String) {
        let error = parse::<()>(input).unwrap_err();
        (error.error_span(), error.error_line())
    }

    #[test]
    fn test_error_display() {
        let error = parse::<()>("v1.lol").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Could not parse the minor identifier: `lol` is not a number"
        );
        assert_eq!(
            format!("{:#}", error),
            "Could not parse the minor identifier: `lol` is not a number\n|    v1.lol\n|    ~~~^^^\n"
        );
    }

    #[test]
    fn test_owned_error() {
        let input = String::from("v1.2.haha");
        let owned = parse::<()>(&input).unwrap_err().owned();
        drop(input);

        assert_eq!(owned.input(), "v1.2.haha");
        assert_eq!(owned.error_kind(), ErrorKind::IllegalVersion);
        assert_eq!(owned.error_span(), 5..9);
        assert_eq!(owned.erroneous_input(), "haha");
        assert_eq!(owned.indicate_erroneous_input(), "~~~~~^^^^");
        assert_eq!(
            owned.to_string(),
            "Could not parse the patch identifier: `haha` is not a number"
        );
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::EmptyVersion.to_string(), "Empty version string");
        assert_eq!(
            ErrorKind::IllegalVersion.to_string(),
            "Illegal version string"
        );
    }

    #[test]
    fn test_validate_only() {
        assert_eq!(parse::<()>("v0"), Ok(()));
        assert!(parse::<()>("v").is_err());
    }
}
