use crate::policy::{Conditions, Policy, PolicyState};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Stable schema identifier for the export document.
pub const SCHEMA_EXPORT_V1: &str = "caguard.export.v1";

/// Portable projection of a policy for JSON export.
///
/// The wire contract is exactly these five keys, in declaration order.
/// `id` and the timestamps are excluded by design: the projection is the
/// importable subset, and identity/audit fields do not transfer between
/// tenants. Fields are never skipped on serialization so every exported
/// object carries all five keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportPolicy {
    pub display_name: String,
    pub state: PolicyState,
    #[serde(default)]
    pub conditions: Option<Conditions>,
    #[serde(default)]
    pub grant_controls: Option<JsonValue>,
    #[serde(default)]
    pub session_controls: Option<JsonValue>,
}

impl From<&Policy> for ExportPolicy {
    fn from(policy: &Policy) -> Self {
        ExportPolicy {
            display_name: policy.display_name.clone(),
            state: policy.state,
            conditions: policy.conditions.clone(),
            grant_controls: policy.grant_controls.clone(),
            session_controls: policy.session_controls.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_has_exactly_five_keys_in_order() {
        let policy: Policy = serde_json::from_value(json!({
            "id": "p1",
            "displayName": "Require MFA",
            "state": "enabled",
            "createdDateTime": "2025-01-02T03:04:05Z",
            "conditions": { "users": { "includeUsers": ["All"] } },
            "grantControls": { "operator": "OR", "builtInControls": ["mfa"] }
        }))
        .unwrap();

        let value = serde_json::to_value(ExportPolicy::from(&policy)).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "displayName",
                "state",
                "conditions",
                "grantControls",
                "sessionControls"
            ]
        );
        assert_eq!(value["displayName"], json!("Require MFA"));
        assert_eq!(value["state"], json!("enabled"));
        assert_eq!(value["sessionControls"], JsonValue::Null);
        assert!(value.get("id").is_none());
        assert!(value.get("createdDateTime").is_none());
    }
}
