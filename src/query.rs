use sea_orm::{
    ColumnTrait, Condition,
    sea_query::{LikeExpr, SimpleExpr},
};

use crate::{entities::title, models::TitleFilter};

/// Builds the store predicate for a filtered title search. Every provided
/// parameter becomes a substring condition on its column; the conditions
/// AND together, and no parameters means an unconstrained match.
pub fn condition_for(filter: &TitleFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(name) = provided(&filter.name) {
        cond = cond.add(contains(title::Column::Title, name));
    }
    if let Some(kind) = provided(&filter.kind) {
        cond = cond.add(contains(title::Column::Kind, kind));
    }
    if let Some(cast) = provided(&filter.cast) {
        cond = cond.add(contains(title::Column::Cast, cast));
    }
    if let Some(country) = provided(&filter.country) {
        cond = cond.add(contains(title::Column::Country, country));
    }
    cond
}

// The original service treated empty parameters the same as absent ones.
fn provided(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

// Case-insensitive substring match. LIKE wildcards in the needle are
// escaped so filter input always matches literally.
fn contains(column: title::Column, needle: &str) -> SimpleExpr {
    column.like(LikeExpr::new(format!("%{}%", escape_like(needle))).escape('\\'))
}

fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;

    fn sql_for(filter: &TitleFilter) -> String {
        title::Entity::find().filter(condition_for(filter)).build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn empty_filter_is_unconstrained() {
        let sql = sql_for(&TitleFilter::default());
        assert!(!sql.contains("WHERE"), "unexpected predicate in: {sql}");
    }

    #[test]
    fn empty_string_parameter_is_unconstrained() {
        let filter = TitleFilter { name: Some(String::new()), ..Default::default() };
        assert!(!sql_for(&filter).contains("WHERE"));
    }

    #[test]
    fn name_becomes_substring_match_on_title() {
        let filter = TitleFilter { name: Some("okja".to_string()), ..Default::default() };
        let sql = sql_for(&filter);
        assert!(sql.contains(r"LIKE '%okja%' ESCAPE '\'"), "no LIKE pattern in: {sql}");
        assert!(sql.contains(r#""title"."title""#), "wrong column in: {sql}");
    }

    #[test]
    fn provided_parameters_combine_with_and() {
        let filter = TitleFilter {
            kind: Some("Movie".to_string()),
            country: Some("South Korea".to_string()),
            ..Default::default()
        };
        let sql = sql_for(&filter);
        assert!(sql.contains(r"LIKE '%Movie%'"));
        assert!(sql.contains(r"LIKE '%South Korea%'"));
        assert!(sql.contains(" AND "), "conditions not ANDed in: {sql}");
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%"), r"50\%");
        assert_eq!(escape_like("a_b"), r"a\_b");
        assert_eq!(escape_like(r"back\slash"), r"back\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn wildcard_in_parameter_matches_literally() {
        let filter = TitleFilter { name: Some("100%".to_string()), ..Default::default() };
        let sql = sql_for(&filter);
        assert!(sql.contains(r"LIKE '%100\%%' ESCAPE '\'"), "wildcard not escaped in: {sql}");
    }
}
