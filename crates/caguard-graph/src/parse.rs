use caguard_types::Policy;
use serde::Deserialize;

/// One page of the policy collection, in Graph list-response shape.
#[derive(Clone, Debug)]
pub struct PolicyPage {
    pub policies: Vec<Policy>,
    /// Absolute URL of the next page, when the collection is paginated.
    pub next_link: Option<String>,
}

#[derive(Deserialize)]
struct WirePage {
    #[serde(default)]
    value: Vec<Policy>,
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
}

/// Parse one list-response body.
///
/// Never panics on any input; malformed bodies come back as `Err`.
pub fn parse_policy_page(text: &str) -> anyhow::Result<PolicyPage> {
    let page: WirePage = serde_json::from_str(text)?;
    Ok(PolicyPage {
        policies: page.value,
        next_link: page.next_link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use caguard_types::PolicyState;

    #[test]
    fn parses_a_page_with_next_link() {
        let body = r#"{
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#policies",
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/identity/conditionalAccess/policies?$skip=2",
            "value": [
                { "id": "p1", "displayName": "One", "state": "enabled" },
                { "id": "p2", "displayName": "Two", "state": "disabled" }
            ]
        }"#;

        let page = parse_policy_page(body).unwrap();
        assert_eq!(page.policies.len(), 2);
        assert_eq!(page.policies[1].state, PolicyState::Disabled);
        assert!(page.next_link.as_deref().unwrap().contains("$skip=2"));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let page = parse_policy_page(r#"{ "value": [] }"#).unwrap();
        assert!(page.policies.is_empty());
        assert!(page.next_link.is_none());
    }

    #[test]
    fn malformed_body_is_an_error_not_a_panic() {
        assert!(parse_policy_page("not json").is_err());
        assert!(parse_policy_page(r#"{ "value": [{ "id": "x" }] }"#).is_err());
    }
}
