//! Side navigation test utilities.
//!
//! Helpers for integration testing: navigation fixture builders, console
//! user contexts, and assertion utilities for rendered output.

use serde_json::{Value as JsonValue, json};

/// Create a test leaf entry with default values (no visibility flags).
pub fn test_leaf(event_key: &str, title: &str) -> TestNavItem {
    TestNavItem {
        event_key: event_key.to_string(),
        title: title.to_string(),
        icon: None,
        external_link: None,
        is_new: false,
        show_based_on_role: false,
        hide_based_on_role: false,
        hide_based_on_scope: false,
        scopes: None,
        children: None,
    }
}

/// Create a test submenu with default values and no children.
pub fn test_menu(event_key: &str, title: &str) -> TestNavItem {
    TestNavItem {
        children: Some(Vec::new()),
        ..test_leaf(event_key, title)
    }
}

/// A navigation entry builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestNavItem {
    pub event_key: String,
    pub title: String,
    pub icon: Option<String>,
    pub external_link: Option<String>,
    pub is_new: bool,
    pub show_based_on_role: bool,
    pub hide_based_on_role: bool,
    pub hide_based_on_scope: bool,
    pub scopes: Option<Vec<String>>,
    pub children: Option<Vec<TestNavItem>>,
}

impl TestNavItem {
    /// Set the icon name.
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Set an external-link target.
    pub fn with_external_link(mut self, target: &str) -> Self {
        self.external_link = Some(target.to_string());
        self
    }

    /// Mark with the "NEW" tag.
    pub fn new_entry(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Enable the show-by-role rule.
    pub fn show_based_on_role(mut self) -> Self {
        self.show_based_on_role = true;
        self
    }

    /// Enable the hide-by-role rule.
    pub fn hide_based_on_role(mut self) -> Self {
        self.hide_based_on_role = true;
        self
    }

    /// Enable the hide-by-scope rule with the given required scopes.
    pub fn hide_based_on_scope(mut self, scopes: &[&str]) -> Self {
        self.hide_based_on_scope = true;
        if !scopes.is_empty() {
            self.scopes = Some(scopes.iter().map(|s| s.to_string()).collect());
        }
        self
    }

    /// Add a child entry, turning this entry into a submenu.
    pub fn with_child(mut self, child: TestNavItem) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Serialize to the console's camelCase navigation format.
    pub fn to_json(&self) -> JsonValue {
        let mut value = json!({
            "eventKey": self.event_key,
            "title": self.title,
        });

        if let Some(obj) = value.as_object_mut() {
            if let Some(icon) = &self.icon {
                obj.insert("icon".into(), json!(icon));
            }
            if let Some(link) = &self.external_link {
                obj.insert("externalLink".into(), json!(link));
            }
            if self.is_new {
                obj.insert("new".into(), json!(true));
            }
            if self.show_based_on_role {
                obj.insert("showBasedOnRole".into(), json!(true));
            }
            if self.hide_based_on_role {
                obj.insert("hideBasedOnRole".into(), json!(true));
            }
            if self.hide_based_on_scope {
                obj.insert("hideBasedOnScope".into(), json!(true));
            }
            if let Some(scopes) = &self.scopes {
                obj.insert("scopes".into(), json!(scopes));
            }
            if let Some(children) = &self.children {
                obj.insert("type".into(), json!("menu"));
                obj.insert(
                    "items".into(),
                    JsonValue::Array(children.iter().map(TestNavItem::to_json).collect()),
                );
            } else {
                obj.insert("type".into(), json!("item"));
            }
        }

        value
    }
}

/// Build a navigation document (`{"items": [...]}`) from entries.
pub fn nav_document(items: &[TestNavItem]) -> JsonValue {
    json!({ "items": items.iter().map(TestNavItem::to_json).collect::<Vec<_>>() })
}

/// The console navigation used across integration tests.
///
/// - `1` Manage: scope-gated submenu with `1-1` Doctors (`doctor_read`) and
///   `1-2` Bookings (`booking_read`, new)
/// - `2` Console: admin-only, links out to the organisation console
/// - `3` Settings: hidden from the `guest` role, otherwise scope-gated
/// - `4` Help: no flags, never shown
pub fn console_navigation() -> JsonValue {
    nav_document(&[
        test_menu("1", "Manage")
            .with_icon("people")
            .hide_based_on_scope(&[])
            .with_child(test_leaf("1-1", "Doctors").hide_based_on_scope(&["doctor_read"]))
            .with_child(
                test_leaf("1-2", "Bookings")
                    .hide_based_on_scope(&["booking_read"])
                    .new_entry(),
            ),
        test_leaf("2", "Console")
            .with_icon("gear")
            .with_external_link("console")
            .show_based_on_role(),
        test_leaf("3", "Settings")
            .with_icon("settings")
            .hide_based_on_role()
            .hide_based_on_scope(&["settings_view"]),
        test_leaf("4", "Help"),
    ])
}

/// Create a console user context.
pub fn test_user(org_id: &str, role: &str, scopes: &[&str]) -> TestUser {
    TestUser {
        org_id: org_id.to_string(),
        role: role.to_string(),
        scopes: scopes.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create an admin user with no scopes.
pub fn admin_user() -> TestUser {
    test_user("petcare", "admin", &[])
}

/// A console user context.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub org_id: String,
    pub role: String,
    pub scopes: Vec<String>,
}

impl TestUser {
    /// Add a granted scope.
    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scopes.push(scope.to_string());
        self
    }

    /// Granted scopes as the space-separated scope string.
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }

    /// Query string for the side navigation endpoints.
    pub fn query(&self, active_key: &str) -> String {
        format!(
            "org_id={}&role={}&scope={}&active_key={}",
            urlencoding::encode(&self.org_id),
            urlencoding::encode(&self.role),
            urlencoding::encode(&self.scope_string()),
            urlencoding::encode(active_key)
        )
    }

    /// JSON body for the selection endpoint.
    pub fn select_body(&self, event_key: &str) -> JsonValue {
        json!({
            "org_id": self.org_id,
            "role": self.role,
            "scope": self.scope_string(),
            "event_key": event_key,
        })
    }
}

/// Assertion helpers for rendered output.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a rendered node has the given CSS display value.
    pub fn node_display(html: &str, event_key: &str, display: &str) {
        let needle = format!(r#"data-event-key="{event_key}" style="display: {display}""#);
        contains(html, &needle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_json_shape() {
        let value = test_leaf("2", "Console")
            .with_external_link("console")
            .show_based_on_role()
            .to_json();

        assert_eq!(value["eventKey"], "2");
        assert_eq!(value["externalLink"], "console");
        assert_eq!(value["showBasedOnRole"], true);
        assert_eq!(value["type"], "item");
        assert!(value.get("items").is_none());
    }

    #[test]
    fn test_menu_json_shape() {
        let value = test_menu("1", "Manage")
            .with_child(test_leaf("1-1", "Doctors"))
            .to_json();

        assert_eq!(value["type"], "menu");
        assert_eq!(value["items"][0]["eventKey"], "1-1");
    }

    #[test]
    fn test_user_query_is_encoded() {
        let user = test_user("petcare", "admin", &["doctor_read"]).with_scope("booking_read");
        assert_eq!(
            user.query("1-1"),
            "org_id=petcare&role=admin&scope=doctor_read%20booking_read&active_key=1-1"
        );
    }
}
