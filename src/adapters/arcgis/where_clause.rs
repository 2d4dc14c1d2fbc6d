//! SQL-like `where` clause construction for the ArcGIS query endpoint.

use crate::domain::incident::IncidentQuery;

/// Clause that matches every feature; filters are appended with `AND`.
pub const MATCH_ALL: &str = "1=1";

const FIELD_INCIDENT_NAME: &str = "IncidentName";
const FIELD_ORIGIN_STATE: &str = "POOState";

/// Escapes a string literal by doubling single quotes.
///
/// This keeps user text inside its literal. It is not a general defense
/// against every construct the query dialect accepts.
pub fn escape_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// Builds the `where` parameter for an incident query.
///
/// ```
/// use fireaid::adapters::arcgis::where_clause;
/// use fireaid::domain::incident::IncidentQuery;
///
/// let query = IncidentQuery::default()
///     .with_keyword(Some("Park".to_string()))
///     .with_state(Some("ca"));
/// assert_eq!(
///     where_clause(&query),
///     "1=1 AND IncidentName LIKE '%Park%' AND POOState = 'US-CA'"
/// );
/// ```
pub fn where_clause(query: &IncidentQuery) -> String {
    let mut clause = String::from(MATCH_ALL);

    if let Some(keyword) = &query.keyword {
        clause.push_str(&format!(
            " AND {} LIKE '%{}%'",
            FIELD_INCIDENT_NAME,
            escape_literal(keyword)
        ));
    }

    if let Some(state) = &query.state {
        clause.push_str(&format!(
            " AND {} = '{}'",
            FIELD_ORIGIN_STATE,
            escape_literal(state)
        ));
    }

    clause
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn no_filters_matches_everything() {
        assert_eq!(where_clause(&IncidentQuery::default()), "1=1");
    }

    #[test]
    fn state_only() {
        let query = IncidentQuery::default().with_state(Some("CA"));
        assert_eq!(where_clause(&query), "1=1 AND POOState = 'US-CA'");
    }

    #[test]
    fn keyword_only() {
        let query = IncidentQuery::default().with_keyword(Some("Creek".to_string()));
        assert_eq!(where_clause(&query), "1=1 AND IncidentName LIKE '%Creek%'");
    }

    #[test]
    fn keyword_quotes_are_doubled() {
        let query = IncidentQuery::default().with_keyword(Some("O'Brien".to_string()));
        assert_eq!(
            where_clause(&query),
            "1=1 AND IncidentName LIKE '%O''Brien%'"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_literal("Park Fire"), "Park Fire");
        assert_eq!(escape_literal("''"), "''''");
    }

    proptest! {
        #[test]
        fn quotes_stay_balanced(keyword in ".{1,40}", state in "[A-Za-z' ]{0,6}") {
            let query = IncidentQuery::default()
                .with_keyword(Some(keyword))
                .with_state(Some(state.as_str()));
            let clause = where_clause(&query);
            prop_assert_eq!(clause.matches('\'').count() % 2, 0);
            prop_assert!(clause.starts_with(MATCH_ALL));
        }
    }
}
