//! External-link target resolution.

/// The only symbolic target currently recognised: the organisation console.
pub const CONSOLE_TARGET: &str = "console";

/// Browsing context external links open in.
pub const NEW_BROWSING_CONTEXT: &str = "_blank";

/// Maps symbolic link targets to URLs under the organisation base URL.
#[derive(Debug, Clone)]
pub struct ExternalLinkResolver {
    base_organization_url: String,
}

impl ExternalLinkResolver {
    pub fn new(base_organization_url: impl Into<String>) -> Self {
        let mut base: String = base_organization_url.into();
        if base.ends_with('/') {
            base.pop();
        }
        Self {
            base_organization_url: base,
        }
    }

    pub fn base_organization_url(&self) -> &str {
        &self.base_organization_url
    }

    /// Resolve `target` for `org_id`. Unrecognised targets yield an empty
    /// string, which callers treat as "do not navigate".
    pub fn resolve(&self, target: &str, org_id: &str) -> String {
        match target {
            CONSOLE_TARGET => format!("{}/o/{org_id}/console", self.base_organization_url),
            _ => String::new(),
        }
    }
}
