//! Allow policy entity

use crate::domain::membership::TeamMemberships;

/// Roles permitted within one team.
///
/// An empty role set is the wildcard: any role within the team is
/// authorized. Distinct from the team being absent from the policy,
/// which never authorizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRule {
    roles: Vec<String>,
}

impl TeamRule {
    /// Rule permitting any role within the team
    pub fn any_role() -> Self {
        Self { roles: Vec::new() }
    }

    /// Rule permitting only the listed roles
    pub fn one_of(roles: Vec<String>) -> Self {
        Self { roles }
    }

    pub fn is_wildcard(&self) -> bool {
        self.roles.is_empty()
    }

    /// Exact, case-sensitive membership check
    pub fn permits(&self, role: &str) -> bool {
        self.is_wildcard() || self.roles.iter().any(|r| r == role)
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Ordered team -> permitted-roles mapping, built once from configuration
/// and immutable afterwards. Safe to read from any number of concurrent
/// authenticate calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowPolicy {
    entries: Vec<(String, TeamRule)>,
}

impl AllowPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing any earlier rule for the same team. The
    /// team keeps the position of its first occurrence.
    pub(crate) fn insert(&mut self, team: String, rule: TeamRule) {
        match self.entries.iter_mut().find(|(name, _)| *name == team) {
            Some((_, existing)) => *existing = rule,
            None => self.entries.push((team, rule)),
        }
    }

    pub fn rule(&self, team: &str) -> Option<&TeamRule> {
        self.entries
            .iter()
            .find(|(name, _)| name == team)
            .map(|(_, rule)| rule)
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Apply the policy to one verification result.
    ///
    /// A team is authorized when it appears in the policy and its rule
    /// permits the caller's role. The output keeps the membership order
    /// reported by the identity provider.
    pub fn authorized_teams(&self, memberships: &TeamMemberships) -> Vec<String> {
        memberships
            .iter()
            .filter(|(team, role)| self.rule(team).is_some_and(|rule| rule.permits(role)))
            .map(|(team, _)| team.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memberships(pairs: &[(&str, &str)]) -> TeamMemberships {
        pairs
            .iter()
            .map(|(team, role)| (team.to_string(), role.to_string()))
            .collect()
    }

    fn policy(entries: &[(&str, &[&str])]) -> AllowPolicy {
        let mut policy = AllowPolicy::new();
        for (team, roles) in entries {
            let rule = if roles.is_empty() {
                TeamRule::any_role()
            } else {
                TeamRule::one_of(roles.iter().map(|r| r.to_string()).collect())
            };
            policy.insert(team.to_string(), rule);
        }
        policy
    }

    #[test]
    fn test_wildcard_includes_any_role_and_absent_team_excludes() {
        let policy = policy(&[("teamA", &[]), ("teamB", &["dev"])]);
        let record = memberships(&[("teamA", "anything"), ("teamB", "dev"), ("teamC", "x")]);

        assert_eq!(policy.authorized_teams(&record), vec!["teamA", "teamB"]);
    }

    #[test]
    fn test_role_mismatch_excludes_team() {
        let policy = policy(&[("teamA", &[]), ("teamB", &["dev"])]);
        let record = memberships(&[("teamA", "anything"), ("teamB", "qa")]);

        assert_eq!(policy.authorized_teams(&record), vec!["teamA"]);
    }

    #[test]
    fn test_role_match_is_case_sensitive() {
        let policy = policy(&[("teamB", &["dev"])]);
        let record = memberships(&[("teamB", "Dev")]);

        assert!(policy.authorized_teams(&record).is_empty());
    }

    #[test]
    fn test_empty_policy_authorizes_nothing() {
        let policy = AllowPolicy::new();
        let record = memberships(&[("teamA", "dev")]);

        assert!(policy.authorized_teams(&record).is_empty());
    }

    #[test]
    fn test_decision_preserves_membership_order() {
        let policy = policy(&[("a", &[]), ("b", &[]), ("c", &[])]);
        let record = memberships(&[("c", "x"), ("a", "y"), ("b", "z")]);

        assert_eq!(policy.authorized_teams(&record), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_insert_replaces_rule_in_place() {
        let mut policy = AllowPolicy::new();
        policy.insert("teamA".to_string(), TeamRule::one_of(vec!["dev".to_string()]));
        policy.insert("teamB".to_string(), TeamRule::any_role());
        policy.insert("teamA".to_string(), TeamRule::any_role());

        assert_eq!(policy.teams().collect::<Vec<_>>(), vec!["teamA", "teamB"]);
        assert!(policy.rule("teamA").unwrap().is_wildcard());
    }
}
