//! Team membership data reported by the identity provider

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// The caller's team -> role memberships for one verification call.
///
/// Entries keep the provider's response order, and the authorization
/// decision preserves that relative order. Transient: scoped to a single
/// authenticate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMemberships {
    entries: Vec<(String, String)>,
}

impl TeamMemberships {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(team, role)` pairs in response order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(team, role)| (team.as_str(), role.as_str()))
    }

    /// Team identifiers in response order
    pub fn teams(&self) -> Vec<&str> {
        self.entries.iter().map(|(team, _)| team.as_str()).collect()
    }

    pub fn role(&self, team: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == team)
            .map(|(_, role)| role.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, String)> for TeamMemberships {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// Deserialized through an explicit visitor: the provider reports teams as
// a JSON object of team -> role strings, and a non-string role must fail
// deserialization rather than be coerced.
impl<'de> Deserialize<'de> for TeamMemberships {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembershipVisitor;

        impl<'de> Visitor<'de> for MembershipVisitor {
            type Value = TeamMemberships;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of team identifiers to role strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((team, role)) = map.next_entry::<String, String>()? {
                    entries.push((team, role));
                }
                Ok(TeamMemberships { entries })
            }
        }

        deserializer.deserialize_map(MembershipVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_response_order() {
        let memberships: TeamMemberships =
            serde_json::from_str(r#"{"zeta": "admin", "alpha": "dev", "mid": "qa"}"#).unwrap();

        assert_eq!(memberships.teams(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(memberships.role("alpha"), Some("dev"));
        assert_eq!(memberships.role("absent"), None);
    }

    #[test]
    fn test_non_string_role_is_rejected() {
        let result: Result<TeamMemberships, _> = serde_json::from_str(r#"{"teamA": 7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let result: Result<TeamMemberships, _> = serde_json::from_str(r#"["teamA"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_object() {
        let memberships: TeamMemberships = serde_json::from_str("{}").unwrap();
        assert!(memberships.is_empty());
        assert_eq!(memberships.len(), 0);
    }
}
