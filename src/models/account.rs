use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Export owner metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: Option<String>,
    pub account_id: Option<String>,
    pub display_name: Option<String>,
}

impl Account {
    /// Account with only a handle, mostly useful in tests and embedding code
    pub fn with_username(username: impl Into<String>) -> Self {
        Self { username: Some(username.into()), ..Self::default() }
    }

    /// Extract account metadata from a decoded account entry.
    ///
    /// Accepts `[{"account": {...}}]` as found in exports, a bare
    /// `{"account": {...}}` or the inner object itself. Every field is optional;
    /// anything unrecognized yields an empty account.
    pub fn from_export(value: &Value) -> Self {
        let outer = match value {
            Value::Array(items) => items.first(),
            other => Some(other),
        };
        let inner = outer.map(|v| v.get("account").unwrap_or(v));

        let field = |name: &str| {
            inner
                .and_then(|v| v.get(name))
                .and_then(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
        };

        Self {
            username: field("username"),
            account_id: field("accountId"),
            display_name: field("accountDisplayName"),
        }
    }
}
