use derive_more::{AsRef, Deref, Display, From, Into};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct RoutePath(String);

crate::impl_string_newtype!(RoutePath);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct IconToken(String);

crate::impl_string_newtype!(IconToken);

#[derive(Debug, Clone)]
pub struct NavEntry {
    pub path: RoutePath,
    pub icon: IconToken,
    pub label: String,
}

impl NavEntry {
    pub fn new(path: &str, icon: &str, label: &str) -> Self {
        Self {
            path: RoutePath::new(path),
            icon: IconToken::new(icon),
            label: label.to_string(),
        }
    }
}

/// The host-side menu entries, in display order.
pub fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("/host", "home", "Dashboard"),
        NavEntry::new("/host/audio", "mic", "Audio Capture"),
        NavEntry::new("/host/ai-questions", "brain", "AI Questions"),
        NavEntry::new("/host/participants", "users", "Participants"),
        NavEntry::new("/host/leaderboard", "trophy", "Leaderboard"),
        NavEntry::new("/host/reports", "file-text", "Reports"),
        NavEntry::new("/host/settings", "settings", "Settings"),
    ]
}

/// Side navigation list: static entries, a current route, and a transient
/// overlay menu whose open state is independent of the route.
#[derive(Debug)]
pub struct NavModel {
    pub entries: Vec<NavEntry>,
    pub current_route: RoutePath,
    pub overlay_open: bool,
}

impl NavModel {
    pub fn new(entries: Vec<NavEntry>, current_route: RoutePath) -> Self {
        Self {
            entries,
            current_route,
            overlay_open: false,
        }
    }

    /// Index of the entry whose path equals the current route exactly.
    /// No prefix matching; at most one entry can be active.
    pub fn active_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.path == self.current_route)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Picks an entry: closes the overlay and hands back the path to
    /// request from the routing collaborator. Out-of-range picks are a
    /// soft no-op.
    pub fn select(&mut self, index: usize) -> Option<RoutePath> {
        let entry = self.entries.get(index)?;
        self.overlay_open = false;
        Some(entry.path.clone())
    }

    pub fn set_route(&mut self, path: RoutePath) {
        self.current_route = path;
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay_open = !self.overlay_open;
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(route: &str) -> NavModel {
        NavModel::new(default_entries(), RoutePath::new(route))
    }

    #[test]
    fn test_exactly_one_entry_active_on_exact_match() {
        let nav = model("/host/reports");
        assert_eq!(nav.active_index(), Some(5));
        let active = (0..nav.entries.len()).filter(|&i| nav.is_active(i)).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_no_prefix_matching() {
        // "/host" must not light up while a child route is current
        let nav = model("/host/audio");
        assert_eq!(nav.active_index(), Some(1));

        let nav = model("/host/audio/live");
        assert_eq!(nav.active_index(), None);
    }

    #[test]
    fn test_unknown_route_leaves_none_active() {
        assert_eq!(model("/elsewhere").active_index(), None);
    }

    #[test]
    fn test_select_closes_overlay_and_yields_path() {
        let mut nav = model("/host");
        nav.toggle_overlay();
        assert!(nav.overlay_open);

        let path = nav.select(3);
        assert_eq!(path, Some(RoutePath::new("/host/participants")));
        assert!(!nav.overlay_open);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut nav = model("/host");
        nav.toggle_overlay();
        assert_eq!(nav.select(99), None);
        // a failed pick leaves the overlay alone
        assert!(nav.overlay_open);
    }

    #[test]
    fn test_overlay_independent_of_route() {
        let mut nav = model("/host");
        nav.toggle_overlay();
        nav.set_route(RoutePath::new("/host/settings"));
        assert!(nav.overlay_open);
        nav.close_overlay();
        nav.close_overlay();
        assert!(!nav.overlay_open);
    }
}
