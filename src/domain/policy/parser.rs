//! Allow-list grammar tokenizer
//!
//! The grammar is permissive: parsing always succeeds, and a malformed
//! parenthetical group degrades to a bare team name.

use super::entity::{AllowPolicy, TeamRule};

/// Parse the allow-list grammar into a policy.
///
/// Entries are comma separated (whitespace around entries is trimmed),
/// each either `team` or `team(role|role)`. A bare team authorizes any
/// role; a parenthesized list restricts the team to the listed roles.
/// An empty input yields an empty policy, and a later entry for the same
/// team replaces the earlier one.
pub fn parse_allow(allow: &str) -> AllowPolicy {
    let mut policy = AllowPolicy::new();

    for entry in allow.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (team, rule) = split_entry(entry);
        policy.insert(team.to_string(), rule);
    }

    policy
}

/// Split one trimmed entry into its team name and role rule.
///
/// The role list is the text between the last `(` and a closing `)` at
/// the end of the entry. Every other shape, including `team(`, `team)`
/// and `te(am`, is a bare team name. `team()` restricts nothing and is
/// the wildcard.
fn split_entry(entry: &str) -> (&str, TeamRule) {
    let Some(body) = entry.strip_suffix(')') else {
        return (entry, TeamRule::any_role());
    };

    let Some(open) = body.rfind('(') else {
        return (entry, TeamRule::any_role());
    };

    let roles = &body[open + 1..];
    if roles.is_empty() {
        return (&entry[..open], TeamRule::any_role());
    }

    let roles = roles.split('|').map(str::to_string).collect();
    (&entry[..open], TeamRule::one_of(roles))
}
