//! Role and scope matching for navigation visibility.
//!
//! The visibility resolver only knows *which* rule an item enables; whether a
//! role is in the allowed/denied set, or whether a scope string grants what an
//! item needs, is decided here:
//! - [`RoleMatcher`] / [`RolePolicy`] for the role allow and deny rules
//! - [`ScopeMatcher`] / [`GrantedScopeMatcher`] for the scope deny rule

mod roles;
mod scopes;

pub use roles::{RoleMatcher, RolePolicy};
pub use scopes::{GrantedScopeMatcher, ScopeMatcher, ScopeSet};
