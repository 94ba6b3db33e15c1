pub const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads the theme cookie out of a raw `Cookie` header. Unknown values fall
    /// back to the default.
    pub fn from_cookie_header(header: &str) -> Self {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_COOKIE)
            .map(|(_, value)| match value.trim() {
                "dark" => Theme::Dark,
                _ => Theme::Light,
            })
            .unwrap_or_default()
    }

    pub fn set_cookie(self) -> String {
        format!(
            "{THEME_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            self.as_str()
        )
    }
}

/// Navigation links shown in the header, in order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Experience", "/experience"),
    ("Projects", "/projects"),
    ("Skills", "/skills"),
    ("Education", "/education"),
    ("Contact", "/contact"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Per-request header state: where the reader is, which theme they picked and
/// whether the mobile menu is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub current_path: String,
    pub theme: Theme,
    pub menu_open: bool,
}

impl NavState {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            theme: Theme::default(),
            menu_open: false,
        }
    }

    /// Home is active only on `/`; every other link matches by prefix.
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            return self.current_path == "/";
        }
        self.current_path.starts_with(href)
    }

    pub fn links(&self) -> Vec<NavLink> {
        NAV_LINKS
            .iter()
            .map(|&(label, href)| NavLink {
                label,
                href,
                active: self.is_active(href),
            })
            .collect()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Link that flips the theme and comes back to this page.
    pub fn theme_toggle_href(&self) -> String {
        format!("/theme?next={}", self.current_path)
    }

    /// Link that flips the mobile menu on this page.
    pub fn menu_toggle_href(&self) -> String {
        if self.menu_open {
            self.current_path.clone()
        } else {
            format!("{}?menu=open", self.current_path)
        }
    }
}

/// Only same-site absolute paths are allowed as redirect targets. Browsers
/// treat `\` as `/`, and the target ends up in a `Location` header, so
/// anything outside printable ASCII is refused too.
pub fn safe_redirect_target(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && path.chars().all(|c| c.is_ascii_graphic() && c != '\\') =>
        {
            path
        }
        _ => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_from_cookie_header() {
        assert_eq!(Theme::from_cookie_header("theme=dark"), Theme::Dark);
        assert_eq!(
            Theme::from_cookie_header("session=abc; theme=dark; other=1"),
            Theme::Dark
        );
        assert_eq!(Theme::from_cookie_header("theme=purple"), Theme::Light);
        assert_eq!(Theme::from_cookie_header(""), Theme::Light);
    }

    #[test]
    fn test_home_active_only_on_root() {
        let nav = NavState::new("/projects/alyra");
        assert!(!nav.is_active("/"));
        assert!(nav.is_active("/projects"));
        assert!(!nav.is_active("/experience"));
        assert!(NavState::new("/").is_active("/"));
    }

    #[test]
    fn test_links_mark_exactly_one_active() {
        let nav = NavState::new("/experience/augle-ai-2024");
        let active: Vec<&str> = nav
            .links()
            .into_iter()
            .filter(|l| l.active)
            .map(|l| l.label)
            .collect();
        assert_eq!(active, vec!["Experience"]);
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavState::new("/about");
        assert_eq!(nav.menu_toggle_href(), "/about?menu=open");
        nav.toggle_menu();
        assert!(nav.menu_open);
        assert_eq!(nav.menu_toggle_href(), "/about");
    }

    #[test]
    fn test_safe_redirect_target() {
        assert_eq!(safe_redirect_target(Some("/skills")), "/skills");
        assert_eq!(safe_redirect_target(Some("//evil.example")), "/");
        assert_eq!(safe_redirect_target(Some("https://evil.example")), "/");
        assert_eq!(safe_redirect_target(None), "/");
    }

    #[test]
    fn test_safe_redirect_target_rejects_backslash_and_controls() {
        assert_eq!(safe_redirect_target(Some("/\\evil.example")), "/");
        assert_eq!(safe_redirect_target(Some("/skills\\..")), "/");
        assert_eq!(safe_redirect_target(Some("/\nevil")), "/");
        assert_eq!(safe_redirect_target(Some("/a b")), "/");
        assert_eq!(
            safe_redirect_target(Some("/experience/augle-ai-2024/full")),
            "/experience/augle-ai-2024/full"
        );
    }
}
