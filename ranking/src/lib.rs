//! Location search and performance ranking.
//!
//! A pure, read-only derivation over the registry's current institute
//! list: filter by city, then order by verified-roster size (descending)
//! with fee (ascending) as the tiebreak.

use eduverify_types::Institute;

/// Produce the display list for a location query.
///
/// Keeps institutes whose location contains `query` as a case-insensitive
/// substring; an empty query matches everything. The sort is stable, so
/// institutes tied on both keys keep their input order. A zero fee sorts
/// before any real fee.
pub fn rank<'a>(institutes: &'a [Institute], query: &str) -> Vec<&'a Institute> {
    let needle = query.to_lowercase();
    let mut matches: Vec<&Institute> = institutes
        .iter()
        .filter(|i| i.location.to_lowercase().contains(&needle))
        .collect();
    matches.sort_by(|a, b| {
        b.students
            .len()
            .cmp(&a.students.len())
            .then(a.fee.cmp(&b.fee))
    });
    matches
}
