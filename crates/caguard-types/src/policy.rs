use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// One Conditional Access policy as returned by the directory service.
///
/// Optional condition collections are deliberately `Option<Vec<String>>`:
/// `None` means the sub-field is not configured at all, `Some(vec![])` means
/// it is configured with zero entries. Rules depend on that distinction, so
/// nothing in this model may collapse the two.
///
/// A `Policy` is an immutable snapshot taken once per fetch. It is never
/// mutated and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Opaque identifier, unique within one fetch result.
    pub id: String,
    pub display_name: String,
    pub state: PolicyState,

    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_date_time: Option<OffsetDateTime>,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub modified_date_time: Option<OffsetDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,

    /// Required grant controls, mirrored unmodified from the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_controls: Option<JsonValue>,

    /// Session controls, mirrored unmodified from the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_controls: Option<JsonValue>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PolicyState {
    Enabled,
    Disabled,
    EnabledForReportingButNotEnforced,
}

impl PolicyState {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyState::Enabled => "enabled",
            PolicyState::Disabled => "disabled",
            PolicyState::EnabledForReportingButNotEnforced => {
                "enabledForReportingButNotEnforced"
            }
        }
    }
}

/// Policy conditions. Only the sub-structures the rules inspect are typed;
/// everything else (platforms, locations, client app types, ...) is carried
/// through the flattened map so exports reproduce the remote shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<UserScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<ApplicationScope>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

/// User assignment for a policy. Entries are object IDs or the sentinel
/// `"All"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_groups: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_applications: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

impl Policy {
    /// Application scope list, if configured. `None` means absent at any
    /// level (no conditions, no applications block, or no include list).
    pub fn included_applications(&self) -> Option<&[String]> {
        self.conditions
            .as_ref()?
            .applications
            .as_ref()?
            .include_applications
            .as_deref()
    }

    pub fn excluded_users(&self) -> Option<&[String]> {
        self.conditions.as_ref()?.users.as_ref()?.exclude_users.as_deref()
    }

    pub fn excluded_groups(&self) -> Option<&[String]> {
        self.conditions.as_ref()?.users.as_ref()?.exclude_groups.as_deref()
    }

    pub fn included_users(&self) -> Option<&[String]> {
        self.conditions.as_ref()?.users.as_ref()?.include_users.as_deref()
    }
}
