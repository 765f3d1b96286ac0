//! The application registry: the closed set of shippable Icy applications.
//!
//! Both name-resolution tools dispatch through this one enum, so they can
//! never disagree about which identifiers are known.

/// Sentinel printed for identifiers outside the registry.
///
/// This is a soft failure: the process still exits 0 and downstream
/// release scripts match on the literal string, so it must not change
/// and must not become an error exit.
pub const UNKNOWN_APP: &str = "UNKNOWN APP";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum App {
    IcyTerm,
    IcyDraw,
    IcyView,
}

impl App {
    pub const ALL: [App; 3] = [App::IcyTerm, App::IcyDraw, App::IcyView];

    /// Exact-match lookup by application identifier.
    pub fn from_id(id: &str) -> Option<App> {
        match id {
            "icy_term" => Some(App::IcyTerm),
            "icy_draw" => Some(App::IcyDraw),
            "icy_view" => Some(App::IcyView),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            App::IcyTerm => "icy_term",
            App::IcyDraw => "icy_draw",
            App::IcyView => "icy_view",
        }
    }

    /// Human-readable product name.
    pub fn display_name(self) -> &'static str {
        match self {
            App::IcyTerm => "Icy Term",
            App::IcyDraw => "Icy Draw",
            App::IcyView => "Icy View",
        }
    }

    /// Filename prefix for distributable artifacts.
    pub fn artifact_prefix(self) -> &'static str {
        match self {
            App::IcyTerm => "Icy_Term",
            App::IcyDraw => "Icy_Draw",
            App::IcyView => "Icy_View",
        }
    }
}

/// Resolve an identifier to its display name, falling back to the sentinel.
pub fn display_name_for(id: &str) -> &'static str {
    App::from_id(id).map(App::display_name).unwrap_or(UNKNOWN_APP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_maps_every_application() {
        let expected = [
            (App::IcyTerm, "icy_term", "Icy Term", "Icy_Term"),
            (App::IcyDraw, "icy_draw", "Icy Draw", "Icy_Draw"),
            (App::IcyView, "icy_view", "Icy View", "Icy_View"),
        ];
        for (app, id, display, prefix) in expected {
            assert_eq!(App::from_id(id), Some(app));
            assert_eq!(app.id(), id);
            assert_eq!(app.display_name(), display);
            assert_eq!(app.artifact_prefix(), prefix);
        }
    }

    #[test]
    fn from_id_rejects_unknown_identifier() {
        assert_eq!(App::from_id("bogus_app"), None);
        assert_eq!(App::from_id(""), None);
        assert_eq!(App::from_id("Icy_Term"), None);
    }

    #[test]
    fn display_name_for_falls_back_to_sentinel() {
        assert_eq!(display_name_for("icy_view"), "Icy View");
        assert_eq!(display_name_for("bogus_app"), UNKNOWN_APP);
    }

    #[test]
    fn display_name_for_resolves_every_registered_id() {
        for app in App::ALL {
            assert_eq!(display_name_for(app.id()), app.display_name());
        }
    }

    #[test]
    fn all_lists_each_variant_once() {
        assert_eq!(App::ALL.len(), 3);
        for app in App::ALL {
            assert_eq!(App::from_id(app.id()), Some(app));
        }
    }
}
