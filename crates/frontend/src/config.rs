//! Build-time configuration.
//!
//! Values come from the environment of the `trunk build` that produced the
//! bundle, e.g. `BACKEND_URL=https://api.petstar.dev trunk build`.

use log::warn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl CloudinaryConfig {
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    backend_url: Option<String>,
    /// Router base path: `""` or `/segment[/segment...]` without a trailing slash.
    pub basename: String,
    pub cloudinary: Option<CloudinaryConfig>,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("BASENAME"),
            option_env!("CLOUDINARY_CLOUD_NAME"),
            option_env!("CLOUDINARY_UPLOAD_PRESET"),
        )
    }

    pub fn from_values(
        backend_url: Option<&str>,
        basename: Option<&str>,
        cloud_name: Option<&str>,
        upload_preset: Option<&str>,
    ) -> Self {
        let backend_url = non_empty(backend_url).map(|url| url.trim_end_matches('/').to_string());

        let cloudinary = match (non_empty(cloud_name), non_empty(upload_preset)) {
            (Some(cloud_name), Some(upload_preset)) => Some(CloudinaryConfig {
                cloud_name: cloud_name.to_string(),
                upload_preset: upload_preset.to_string(),
            }),
            (None, None) => None,
            _ => {
                warn!("CLOUDINARY_CLOUD_NAME and CLOUDINARY_UPLOAD_PRESET must be set together, uploads disabled");
                None
            }
        };

        Self {
            backend_url,
            basename: normalize_basename(basename.unwrap_or_default()),
            cloudinary,
        }
    }

    /// The backend root, or `None` when the app must render the setup guide.
    pub fn backend_url(&self) -> Option<&str> {
        self.backend_url.as_deref()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_basename(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_backend_url_is_absent() {
        assert_eq!(AppConfig::from_values(None, None, None, None).backend_url(), None);
        assert_eq!(AppConfig::from_values(Some(""), None, None, None).backend_url(), None);
        assert_eq!(AppConfig::from_values(Some("   "), None, None, None).backend_url(), None);
    }

    #[test]
    fn backend_url_is_trimmed() {
        let config = AppConfig::from_values(Some(" https://api.petstar.dev/ "), None, None, None);
        assert_eq!(config.backend_url(), Some("https://api.petstar.dev"));
    }

    #[test]
    fn basename_normalization() {
        assert_eq!(normalize_basename(""), "");
        assert_eq!(normalize_basename("/"), "");
        assert_eq!(normalize_basename("petstar"), "/petstar");
        assert_eq!(normalize_basename("/react-hello-webapp/"), "/react-hello-webapp");
    }

    #[test]
    fn cloudinary_needs_both_values() {
        let partial = AppConfig::from_values(Some("http://x"), None, Some("demo"), None);
        assert_eq!(partial.cloudinary, None);

        let full = AppConfig::from_values(Some("http://x"), None, Some("demo"), Some("unsigned"));
        let cloudinary = full.cloudinary.unwrap();
        assert_eq!(
            cloudinary.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
        assert_eq!(cloudinary.upload_preset, "unsigned");
    }
}
