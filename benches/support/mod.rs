use regex::Regex;
use vsemver::Version;

pub fn parsing_regex() -> Regex {
    Regex::new(r"^v(?P<major>\d+)(?:\.(?P<minor>\d+)(?:\.(?P<patch>\d+)(?:\.(?P<dotted>.*))?)?)?(?:-(?P<prerelease>.*))?$").unwrap()
}

pub fn regex_parser(re: &Regex, input: &str) -> Option<Version> {
    let caps = re.captures(input)?;

    let number = |name: &str| match caps.name(name) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    };

    let mut version = Version::new(number("major")?, number("minor")?, number("patch")?);
    // a dot only introduces the pre-release after the patch number
    if let Some(pre) = caps.name("dotted").or_else(|| caps.name("prerelease")) {
        version.prerelease = pre.as_str().into();
    }

    Some(version)
}
