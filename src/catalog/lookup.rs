//! Read-only lookups over the built-in catalog.
//!
//! Name lookup chain: exact match → substring match → fuzzy match
//! (edit distance <= 2). The catalog is five entries, so everything is a
//! linear scan.

use super::data::TAIWAN_LOCATIONS;
use super::types::Location;

/// Find an entry by its stable id.
pub fn find_by_id(id: u32) -> Option<&'static Location> {
    TAIWAN_LOCATIONS.iter().find(|loc| loc.id == id)
}

/// Find an entry by name, case-insensitively, with fuzzy fallback.
pub fn find_by_name(query: &str) -> Option<&'static Location> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }

    // Exact match first
    for loc in TAIWAN_LOCATIONS {
        if loc.name.to_lowercase() == q {
            return Some(loc);
        }
    }

    // Substring match
    for loc in TAIWAN_LOCATIONS {
        let name = loc.name.to_lowercase();
        if name.contains(&q) || q.contains(&name) {
            return Some(loc);
        }
    }

    // Fuzzy match (edit distance <= 2)
    let mut best: Option<(&'static Location, usize)> = None;
    for loc in TAIWAN_LOCATIONS {
        let dist = edit_distance(&q, &loc.name.to_lowercase());
        if dist <= 2 && best.map_or(true, |(_, d)| dist < d) {
            best = Some((loc, dist));
        }
    }

    best.map(|(loc, _)| loc)
}

/// Levenshtein distance, two-row rolling table. Operates on chars so that
/// non-ASCII place names are measured per character, not per byte.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
