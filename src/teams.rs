//! Team registry and team-affiliation inference.
//!
//! The registry is flat configuration data: the 30 canonical franchise
//! names plus an ordered nickname keyword table. Inference works on the
//! lowercased text with plain substring adjacency checks, so it will both
//! over- and under-match on unusual phrasing.

/// The 30 canonical franchise names used as the normalized `team` value.
pub const FRANCHISES: [&str; 30] = [
    "Atlanta Hawks",
    "Boston Celtics",
    "Brooklyn Nets",
    "Charlotte Hornets",
    "Chicago Bulls",
    "Cleveland Cavaliers",
    "Dallas Mavericks",
    "Denver Nuggets",
    "Detroit Pistons",
    "Golden State Warriors",
    "Houston Rockets",
    "Indiana Pacers",
    "LA Clippers",
    "Los Angeles Lakers",
    "Memphis Grizzlies",
    "Miami Heat",
    "Milwaukee Bucks",
    "Minnesota Timberwolves",
    "New Orleans Pelicans",
    "New York Knicks",
    "Oklahoma City Thunder",
    "Orlando Magic",
    "Philadelphia 76ers",
    "Phoenix Suns",
    "Portland Trail Blazers",
    "Sacramento Kings",
    "San Antonio Spurs",
    "Toronto Raptors",
    "Utah Jazz",
    "Washington Wizards",
];

/// Nickname keyword to canonical name, in match priority order.
///
/// Keywords are lowercase and unambiguous: each maps to exactly one team.
/// Compound keywords ("trail blazers", "timberwolves") come before their
/// shorter aliases so the longer form wins on full-name input.
const NICKNAMES: &[(&str, &str)] = &[
    ("hawks", "Atlanta Hawks"),
    ("celtics", "Boston Celtics"),
    ("nets", "Brooklyn Nets"),
    ("hornets", "Charlotte Hornets"),
    ("bulls", "Chicago Bulls"),
    ("cavaliers", "Cleveland Cavaliers"),
    ("cavs", "Cleveland Cavaliers"),
    ("mavericks", "Dallas Mavericks"),
    ("mavs", "Dallas Mavericks"),
    ("nuggets", "Denver Nuggets"),
    ("pistons", "Detroit Pistons"),
    ("warriors", "Golden State Warriors"),
    ("rockets", "Houston Rockets"),
    ("pacers", "Indiana Pacers"),
    ("clippers", "LA Clippers"),
    ("lakers", "Los Angeles Lakers"),
    ("grizzlies", "Memphis Grizzlies"),
    ("heat", "Miami Heat"),
    ("bucks", "Milwaukee Bucks"),
    ("timberwolves", "Minnesota Timberwolves"),
    ("wolves", "Minnesota Timberwolves"),
    ("pelicans", "New Orleans Pelicans"),
    ("knicks", "New York Knicks"),
    ("thunder", "Oklahoma City Thunder"),
    ("magic", "Orlando Magic"),
    ("76ers", "Philadelphia 76ers"),
    ("sixers", "Philadelphia 76ers"),
    ("suns", "Phoenix Suns"),
    ("trail blazers", "Portland Trail Blazers"),
    ("blazers", "Portland Trail Blazers"),
    ("kings", "Sacramento Kings"),
    ("spurs", "San Antonio Spurs"),
    ("raptors", "Toronto Raptors"),
    ("jazz", "Utah Jazz"),
    ("wizards", "Washington Wizards"),
];

/// Phrases that mark a nickname as the opponent rather than the player's
/// own team. Checked immediately before the keyword.
const OPPONENT_CONTEXT: [&str; 4] = ["against the ", "vs the ", "vs. the ", "versus the "];

/// Organizational action verbs, checked immediately after a bare keyword.
const ACTION_VERBS: [&str; 5] = ["recalled", "ruled", "announced", "signed", "placed"];

/// Resolve a team name the user typed to its canonical franchise name.
///
/// Tries an exact case-insensitive match against the franchise list first,
/// then the first nickname keyword contained in the input.
pub fn resolve_canonical(name: &str) -> Option<&'static str> {
    let lower = name.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    for franchise in FRANCHISES {
        if franchise.to_lowercase() == lower {
            return Some(franchise);
        }
    }

    for &(keyword, team) in NICKNAMES {
        if lower.contains(keyword) {
            return Some(team);
        }
    }

    None
}

/// Infer a team affiliation from a free-text injury note.
///
/// Used only as a fallback when a record carries no explicit team. For
/// each keyword, in registry order:
///
/// 1. An opponent mention ("against the Knicks", "vs. the Lakers")
///    disqualifies that keyword for the whole text.
/// 2. Possessive or organizational phrasing ("the Celtics ...",
///    "Celtics' ...", "Celtics official ...") is a match.
/// 3. A bare keyword immediately followed by an organizational action verb
///    ("Celtics recalled ...") is a match.
///
/// The first keyword that matches wins.
pub fn infer_team(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();

    for &(keyword, team) in NICKNAMES {
        // Opponent mentions must never be mistaken for affiliation, even
        // when other phrasing for the same keyword would match.
        if OPPONENT_CONTEXT
            .iter()
            .any(|ctx| lower.contains(&format!("{ctx}{keyword}")))
        {
            continue;
        }

        if lower.contains(&format!("the {keyword} "))
            || lower.contains(&format!(" {keyword}'s"))
            || lower.contains(&format!(" {keyword} official"))
        {
            return Some(team);
        }

        if lower.contains(keyword)
            && ACTION_VERBS
                .iter()
                .any(|verb| lower.contains(&format!("{keyword} {verb}")))
        {
            return Some(team);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_exact_franchise_name() {
        assert_eq!(
            resolve_canonical("boston celtics"),
            Some("Boston Celtics")
        );
        assert_eq!(
            resolve_canonical("Portland Trail Blazers"),
            Some("Portland Trail Blazers")
        );
    }

    #[test]
    fn resolve_nickname_substring() {
        assert_eq!(resolve_canonical("Sixers"), Some("Philadelphia 76ers"));
        assert_eq!(resolve_canonical("the knicks"), Some("New York Knicks"));
        assert_eq!(resolve_canonical("Mavs"), Some("Dallas Mavericks"));
    }

    #[test]
    fn resolve_unknown_is_none() {
        assert_eq!(resolve_canonical("Harlem Globetrotters"), None);
        assert_eq!(resolve_canonical(""), None);
    }

    #[test]
    fn infer_organizational_phrasing() {
        assert_eq!(
            infer_team("the Celtics recalled Neemias Queta from Maine"),
            Some("Boston Celtics")
        );
        assert_eq!(
            infer_team("the Lakers announced LeBron James is out"),
            Some("Los Angeles Lakers")
        );
        assert_eq!(
            infer_team("per a Suns official, he will be re-evaluated in a week"),
            Some("Phoenix Suns")
        );
        assert_eq!(
            infer_team("the Heat's medical staff confirmed the sprain"),
            Some("Miami Heat")
        );
    }

    #[test]
    fn infer_bare_keyword_with_action_verb() {
        assert_eq!(
            infer_team("Bucks ruled Giannis out for Friday"),
            Some("Milwaukee Bucks")
        );
        assert_eq!(
            infer_team("Nuggets signed a replacement on Monday"),
            Some("Denver Nuggets")
        );
    }

    #[test]
    fn infer_rejects_opponent_mentions() {
        assert_eq!(infer_team("he will miss the game against the Knicks"), None);
        assert_eq!(infer_team("out for Tuesday vs. the Lakers"), None);
        assert_eq!(infer_team("questionable versus the Raptors"), None);
    }

    #[test]
    fn opponent_context_disqualifies_keyword_entirely() {
        // Qualifying phrasing elsewhere in the text does not rescue a
        // keyword that also appears as an opponent.
        assert_eq!(
            infer_team("the Knicks starter sat out against the Knicks bench in practice"),
            None
        );
    }

    #[test]
    fn opponent_rejection_is_per_keyword() {
        // The rejected keyword is skipped, but a different keyword with
        // qualifying phrasing still matches.
        assert_eq!(
            infer_team("the Celtics recalled him before the game against the Knicks"),
            Some("Boston Celtics")
        );
    }

    #[test]
    fn infer_case_insensitive() {
        assert_eq!(
            infer_team("THE 76ERS PLACED JOEL EMBIID ON IR"),
            Some("Philadelphia 76ers")
        );
    }

    #[test]
    fn infer_no_signal_is_none() {
        assert_eq!(infer_team("out indefinitely with a sprained ankle"), None);
        assert_eq!(infer_team(""), None);
    }
}
