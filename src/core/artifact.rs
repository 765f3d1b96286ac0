//! Artifact filename resolution for distributable bundles.

use crate::apps::{App, UNKNOWN_APP};

/// All distributables ship as AppImage bundles.
pub const ARTIFACT_SUFFIX: &str = ".AppImage";

/// Canonical distributable filename for an application build.
///
/// `<Prefix>_<version>.AppImage`, or `<Prefix>_<version>-<arch>.AppImage`
/// when an architecture token is given.
pub fn file_name(app: App, version: &str, arch: Option<&str>) -> String {
    match arch {
        Some(arch) => format!(
            "{}_{}-{}{}",
            app.artifact_prefix(),
            version,
            arch,
            ARTIFACT_SUFFIX
        ),
        None => format!("{}_{}{}", app.artifact_prefix(), version, ARTIFACT_SUFFIX),
    }
}

/// Resolve an identifier straight to its artifact filename.
///
/// Unknown identifiers yield the sentinel rather than an error; callers
/// printing the result keep a success exit either way.
pub fn resolve(id: &str, version: &str, arch: Option<&str>) -> String {
    match App::from_id(id) {
        Some(app) => file_name(app, version, arch),
        None => UNKNOWN_APP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::display_name_for;

    #[test]
    fn resolves_single_token_filename() {
        assert_eq!(
            resolve("icy_term", "1.2.3", None),
            "Icy_Term_1.2.3.AppImage"
        );
    }

    #[test]
    fn resolves_two_token_filename_with_arch() {
        assert_eq!(
            resolve("icy_draw", "1.2.3", Some("x86_64")),
            "Icy_Draw_1.2.3-x86_64.AppImage"
        );
    }

    #[test]
    fn unknown_identifier_yields_sentinel() {
        assert_eq!(resolve("bogus_app", "1.0", None), UNKNOWN_APP);
        assert_eq!(resolve("bogus_app", "1.0", Some("aarch64")), UNKNOWN_APP);
    }

    #[test]
    fn name_resolvers_agree_on_known_identifiers() {
        for app in App::ALL {
            assert_ne!(resolve(app.id(), "1.0.0", None), UNKNOWN_APP);
            assert_ne!(display_name_for(app.id()), UNKNOWN_APP);
        }
        assert_eq!(resolve("not_an_app", "1.0.0", None), UNKNOWN_APP);
        assert_eq!(display_name_for("not_an_app"), UNKNOWN_APP);
    }
}
