/// The four views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    SignIn,
    SignUp,
    Dashboard,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::SignIn => "/sign-in",
            AppRoute::SignUp => "/sign-up",
            AppRoute::Dashboard => "/dashboard",
        }
    }

    /// Path segment as used by the router (`""` for the landing page)
    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Landing => "Blunk",
            AppRoute::SignIn => "Sign In",
            AppRoute::SignUp => "Create an Account",
            AppRoute::Dashboard => "ChatBot",
        }
    }

    /// Resolve a location pathname. Tolerates one trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::all().into_iter().find(|route| route.path() == trimmed)
    }

    pub fn all() -> [AppRoute; 4] {
        [
            AppRoute::Landing,
            AppRoute::SignIn,
            AppRoute::SignUp,
            AppRoute::Dashboard,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_back() {
        for route in AppRoute::all() {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(AppRoute::from_path("/dashboard/"), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Landing));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(AppRoute::from_path("/settings"), None);
        assert_eq!(AppRoute::from_path(""), None);
        assert_eq!(AppRoute::from_path("/sign-in/extra"), None);
    }

    #[test]
    fn test_segments() {
        assert_eq!(AppRoute::Landing.segment(), "");
        assert_eq!(AppRoute::SignUp.segment(), "sign-up");
    }
}
