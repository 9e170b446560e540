//! Why a page request failed.
//!
//! The host produces an access-failure record while resolving the page. Only
//! the `fe_group` part of it matters here: it maps frontend user-group keys to
//! the value the access check recorded, and its shape tells the two
//! not-authorized cases apart.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Group key the host uses for "any authenticated user".
pub const ANY_USER_GROUP: &str = "";

/// A scalar recorded by the host's access check for one group key.
///
/// Values arrive as integers, strings, and occasionally booleans or floats.
/// Only the integer `0` counts as zero; `"0"`, `false` and `0.0` do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupValue {
    /// A boolean value.
    Bool(bool),
    /// An integer value, typically a page uid.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A textual value, typically a group list such as `"1,2"`.
    Text(String),
}

impl GroupValue {
    /// Whether this is exactly the integer zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, GroupValue::Int(0))
    }
}

impl From<i64> for GroupValue {
    fn from(value: i64) -> Self {
        GroupValue::Int(value)
    }
}

impl From<i32> for GroupValue {
    fn from(value: i32) -> Self {
        GroupValue::Int(i64::from(value))
    }
}

impl From<bool> for GroupValue {
    fn from(value: bool) -> Self {
        GroupValue::Bool(value)
    }
}

impl From<String> for GroupValue {
    fn from(value: String) -> Self {
        GroupValue::Text(value)
    }
}

impl From<&str> for GroupValue {
    fn from(value: &str) -> Self {
        GroupValue::Text(value.to_owned())
    }
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Bool(v) => write!(f, "{v}"),
            GroupValue::Int(v) => write!(f, "{v}"),
            GroupValue::Float(v) => write!(f, "{v}"),
            GroupValue::Text(v) => f.write_str(v),
        }
    }
}

/// `fe_group` as hosts encode it: a map, or a list when the keys are
/// sequential (an empty group set is always encoded as `[]`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawGroups {
    Map(BTreeMap<String, Option<GroupValue>>),
    List(Vec<Option<GroupValue>>),
}

/// Null entries count as absent, as does a null `fe_group`.
fn deserialize_groups<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, GroupValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    let groups = Option::<RawGroups>::deserialize(deserializer)?.map(|raw| match raw {
        RawGroups::Map(entries) => entries
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect(),
        RawGroups::List(entries) => entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| value.map(|value| (index.to_string(), value)))
            .collect(),
    });
    Ok(groups)
}

/// The access-failure record for a page request.
///
/// Keys other than `fe_group` are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessFailureReason {
    /// Group gate detail, absent when access did not fail on a group gate.
    #[serde(
        default,
        deserialize_with = "deserialize_groups",
        skip_serializing_if = "Option::is_none"
    )]
    pub fe_group: Option<BTreeMap<String, GroupValue>>,
}

impl AccessFailureReason {
    /// A reason with no group detail: the page simply does not exist.
    pub fn none() -> Self {
        Self::default()
    }

    /// A reason carrying the given `fe_group` entries.
    pub fn with_groups<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<GroupValue>,
    {
        Self {
            fe_group: Some(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// The user is logged in but the page is restricted to another group.
    ///
    /// `fe_group` is present and has no entry for [`ANY_USER_GROUP`].
    pub fn is_authenticated_but_not_authorized(&self) -> bool {
        self.fe_group
            .as_ref()
            .is_some_and(|groups| !groups.contains_key(ANY_USER_GROUP))
    }

    /// Access failed on a group gate.
    ///
    /// `fe_group` is present and its [`ANY_USER_GROUP`] entry is not the
    /// integer zero. A missing entry also qualifies, but that case is caught
    /// earlier by [`is_authenticated_but_not_authorized`].
    ///
    /// [`is_authenticated_but_not_authorized`]: Self::is_authenticated_but_not_authorized
    pub fn is_unauthorized(&self) -> bool {
        self.fe_group
            .as_ref()
            .is_some_and(|groups| !groups.get(ANY_USER_GROUP).is_some_and(GroupValue::is_zero))
    }
}

/// The input handed to the hook when a page request fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAccessFailure {
    /// Structured access-failure detail.
    #[serde(default, rename = "pageAccessFailureReasons")]
    pub reasons: AccessFailureReason,
    /// Human-readable reason, forwarded to the not-found renderer.
    #[serde(default)]
    pub reason_text: String,
}

impl PageAccessFailure {
    /// Create a failure from a reason and its text.
    pub fn new(reasons: AccessFailureReason, reason_text: impl Into<String>) -> Self {
        Self {
            reasons,
            reason_text: reason_text.into(),
        }
    }
}
