use serde::Serialize;

/// Every page the router knows, with its path parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    General,
    Login,
    Cloudinary,
    RestorePassword { uuid: String },
    Signup,
    YourProfile,
    Forum,
    Profiles,
    Profile,
    ProfilePage,
    Single { theid: String },
    NotFound,
}

#[derive(Serialize)]
struct ProfileQuery<'a> {
    email: &'a str,
}

impl AppRoute {
    /// Resolves a path relative to the router base.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            ["home"] => AppRoute::Home,
            ["general"] => AppRoute::General,
            ["login"] => AppRoute::Login,
            ["cloudinary"] => AppRoute::Cloudinary,
            ["restorePassword", uuid] if !uuid.is_empty() => AppRoute::RestorePassword {
                uuid: uuid.to_string(),
            },
            ["signup"] => AppRoute::Signup,
            ["yourprofile"] => AppRoute::YourProfile,
            ["forum"] => AppRoute::Forum,
            ["profiles"] => AppRoute::Profiles,
            ["profile"] => AppRoute::Profile,
            ["profilepage"] => AppRoute::ProfilePage,
            ["single", theid] if !theid.is_empty() => AppRoute::Single {
                theid: theid.to_string(),
            },
            _ => AppRoute::NotFound,
        }
    }

    /// Like [`AppRoute::resolve`], for a browser path that may still carry `base`.
    pub fn resolve_under(base: &str, path: &str) -> Self {
        let relative = if base.is_empty() {
            path
        } else {
            match path.strip_prefix(base) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                _ => path,
            }
        };
        Self::resolve(relative)
    }

    pub fn href(&self) -> String {
        match self {
            AppRoute::Home => "/home".to_string(),
            AppRoute::General => "/general".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Cloudinary => "/cloudinary".to_string(),
            AppRoute::RestorePassword { uuid } => format!("/restorePassword/{}", uuid),
            AppRoute::Signup => "/signup".to_string(),
            AppRoute::YourProfile => "/yourprofile".to_string(),
            AppRoute::Forum => "/forum".to_string(),
            AppRoute::Profiles => "/profiles".to_string(),
            AppRoute::Profile => "/profile".to_string(),
            AppRoute::ProfilePage => "/profilepage".to_string(),
            AppRoute::Single { theid } => format!("/single/{}", theid),
            AppRoute::NotFound => "/not-found".to_string(),
        }
    }

    /// Link to one author's public profile.
    pub fn profile_of(email: &str) -> String {
        match serde_qs::to_string(&ProfileQuery { email }) {
            Ok(query) => format!("{}?{}", AppRoute::Profile.href(), query),
            Err(_) => AppRoute::Profile.href(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::General => "General",
            AppRoute::Login => "Log in",
            AppRoute::Cloudinary => "Gallery",
            AppRoute::RestorePassword { .. } => "Restore password",
            AppRoute::Signup => "Sign up",
            AppRoute::YourProfile | AppRoute::ProfilePage => "Your profile",
            AppRoute::Forum => "Forum",
            AppRoute::Profiles => "Profiles",
            AppRoute::Profile => "Profile",
            AppRoute::Single { .. } => "Post",
            AppRoute::NotFound => "Not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_route_resolves() {
        let cases = [
            ("/home", AppRoute::Home),
            ("/general", AppRoute::General),
            ("/login", AppRoute::Login),
            ("/cloudinary", AppRoute::Cloudinary),
            ("/signup", AppRoute::Signup),
            ("/yourprofile", AppRoute::YourProfile),
            ("/forum", AppRoute::Forum),
            ("/profiles", AppRoute::Profiles),
            ("/profile", AppRoute::Profile),
            ("/profilepage", AppRoute::ProfilePage),
        ];
        for (path, route) in cases {
            assert_eq!(AppRoute::resolve(path), route, "{}", path);
            assert_eq!(route.href(), path);
        }
    }

    #[test]
    fn parameterized_routes_capture_their_segment() {
        assert_eq!(
            AppRoute::resolve("/single/42"),
            AppRoute::Single { theid: "42".into() }
        );
        assert_eq!(
            AppRoute::resolve("/restorePassword/3f2b8c1e-9a4d-4e7b-8f61-2c5d9e0a7b14/"),
            AppRoute::RestorePassword {
                uuid: "3f2b8c1e-9a4d-4e7b-8f61-2c5d9e0a7b14".into()
            }
        );
        assert_eq!(AppRoute::Single { theid: "7".into() }.href(), "/single/7");
    }

    #[test]
    fn unmatched_paths_fall_back() {
        for path in ["/", "", "/nope", "/single", "/single/1/extra", "/Login", "/restorePassword"] {
            assert_eq!(AppRoute::resolve(path), AppRoute::NotFound, "{}", path);
        }
    }

    #[test]
    fn base_is_stripped_only_on_segment_boundary() {
        assert_eq!(AppRoute::resolve_under("/petstar", "/petstar/forum"), AppRoute::Forum);
        assert_eq!(AppRoute::resolve_under("/petstar", "/petstar/home"), AppRoute::Home);
        assert_eq!(AppRoute::resolve_under("/petstar", "/petstar"), AppRoute::NotFound);
        assert_eq!(AppRoute::resolve_under("/pet", "/petstar/forum"), AppRoute::NotFound);
        assert_eq!(AppRoute::resolve_under("", "/forum"), AppRoute::Forum);
    }

    #[test]
    fn profile_link_carries_email_query() {
        let href = AppRoute::profile_of("a+b@c.com");
        let query = href.strip_prefix("/profile?").unwrap();
        assert!(!query.contains('+'));
        let parsed: std::collections::HashMap<String, String> = serde_qs::from_str(query).unwrap();
        assert_eq!(parsed.get("email").map(String::as_str), Some("a+b@c.com"));
    }
}
