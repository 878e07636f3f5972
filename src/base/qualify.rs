//! Package qualification for dotted type names.
//!
//! Protobuf has no reserved separator between the package part and the type
//! part of a dotted name: `foo.bar.Baz.Inner` could in principle be read in
//! several ways. We follow the naming convention laid out by Google, where
//! package segments are lower-case and type names start with an upper-case
//! letter. The first capitalized segment therefore begins the type path.

use std::fmt;

/// Where a dotted type reference points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackageRef<'a> {
    /// The package of the schema under validation.
    Main,
    /// One of the imported packages.
    Import(&'a str),
}

impl PackageRef<'_> {
    /// Check if the reference points into the main package.
    pub fn is_main(&self) -> bool {
        matches!(self, PackageRef::Main)
    }

    /// Get the imported package name, if any.
    pub fn import(&self) -> Option<&str> {
        match self {
            PackageRef::Main => None,
            PackageRef::Import(pkg) => Some(pkg),
        }
    }
}

impl fmt::Display for PackageRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageRef::Main => f.write_str("<main>"),
            PackageRef::Import(pkg) => f.write_str(pkg),
        }
    }
}

/// Strip the leading `.` of an absolute reference like `.pkg.Msg`.
#[inline]
pub fn normalize(name: &str) -> &str {
    name.strip_prefix('.').unwrap_or(name)
}

/// Get the most specific package prefix of a dotted type name.
///
/// "foo.bar.Baz.Inner" -> "foo.bar"
/// "Baz.Inner" -> ""
/// "Baz" -> ""
/// "foo.bar" -> "foo.bar"
pub fn package_prefix(name: &str) -> &str {
    if !name.contains('.') {
        return "";
    }

    let mut end = 0;
    for (i, segment) in name.split('.').enumerate() {
        if segment.chars().next().is_some_and(char::is_uppercase) {
            break;
        }
        end += segment.len();
        if i > 0 {
            end += 1; // the '.' before this segment
        }
    }

    &name[..end]
}

/// Decide whether a dotted type name refers to the main package or to one of
/// the imported packages.
///
/// An unrecognized non-empty prefix falls back to the main package, so a
/// misspelled package is reported later as an undefined type rather than as
/// an unknown package.
pub fn resolve_package<'a, S: AsRef<str>>(name: &str, imports: &'a [S]) -> PackageRef<'a> {
    let prefix = package_prefix(name);
    if prefix.is_empty() {
        return PackageRef::Main;
    }

    match imports.iter().map(AsRef::as_ref).find(|pkg| *pkg == prefix) {
        Some(pkg) => PackageRef::Import(pkg),
        None => {
            tracing::trace!(
                "[QUALIFY] prefix '{}' of '{}' matches no import, treating as main package",
                prefix,
                name
            );
            PackageRef::Main
        }
    }
}

/// Qualify a type name with a package unless it already carries it.
///
/// An empty package leaves the name untouched.
pub fn qualify_in(package: &str, name: &str) -> String {
    if package.is_empty() {
        return name.to_string();
    }
    match name.strip_prefix(package) {
        Some(rest) if rest.starts_with('.') => name.to_string(),
        _ => format!("{}.{}", package, name),
    }
}
