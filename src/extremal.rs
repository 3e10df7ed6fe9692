// 📐 Extremal selection - one primitive, three tie policies
//
// Per-season superlatives report a single leader (the first tied entry for a
// maximum, the last for a minimum); hall-of-fame superlatives report every
// entry tied at the extreme. Both go through `find_extreme` so
// the comparison rules are identical, and the tie policy is explicit at every
// call site.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Max,
    Min,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiePolicy {
    /// Keep only the first entry (input order) reaching the extreme
    First,
    /// Keep only the last entry (input order) reaching the extreme
    Last,
    /// Keep every entry equal to the extreme, in input order
    All,
}

/// Find the entries of `items` whose `key` is extremal
///
/// Keys are compared with `f64::total_cmp`; callers only pass finite values
/// (see `win_pct` / `per_game`). Empty input yields an empty result.
pub fn find_extreme<'a, T, F>(items: &'a [T], key: F, extreme: Extreme, ties: TiePolicy) -> Vec<&'a T>
where
    F: Fn(&T) -> f64,
{
    let best = items.iter().map(&key).reduce(|acc, k| {
        let better = match extreme {
            Extreme::Max => k.total_cmp(&acc) == Ordering::Greater,
            Extreme::Min => k.total_cmp(&acc) == Ordering::Less,
        };
        if better {
            k
        } else {
            acc
        }
    });

    let Some(best) = best else {
        return Vec::new();
    };

    let mut matching = items.iter().filter(|item| key(*item).total_cmp(&best) == Ordering::Equal);

    match ties {
        TiePolicy::First => matching.next().into_iter().collect(),
        TiePolicy::Last => matching.last().into_iter().collect(),
        TiePolicy::All => matching.collect(),
    }
}

/// Single leader: first entry in input order reaching the extreme
pub fn extremal_one<'a, T, F>(items: &'a [T], key: F, extreme: Extreme) -> Option<&'a T>
where
    F: Fn(&T) -> f64,
{
    find_extreme(items, key, extreme, TiePolicy::First).into_iter().next()
}

/// Single leader: last entry in input order reaching the extreme
pub fn extremal_last<'a, T, F>(items: &'a [T], key: F, extreme: Extreme) -> Option<&'a T>
where
    F: Fn(&T) -> f64,
{
    find_extreme(items, key, extreme, TiePolicy::Last).into_iter().next()
}

/// Every entry tied at the extreme
pub fn extremal_all<'a, T, F>(items: &'a [T], key: F, extreme: Extreme) -> Vec<&'a T>
where
    F: Fn(&T) -> f64,
{
    find_extreme(items, key, extreme, TiePolicy::All)
}

// ============================================================================
// GUARDED DIVISION
// ============================================================================

/// `total / count`, or 0.0 when `count` is zero
///
/// Zero-game teams get a 0 rate instead of NaN so they sort to the bottom.
pub fn per_game(total: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// wins / (wins + losses + ties); 0.0 for a team with no games
pub fn win_pct(wins: u32, losses: u32, ties: u32) -> f64 {
    per_game(wins as f64, wins + losses + ties)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_returns_first_of_tied_max() {
        let items = [("a", 3.0), ("b", 5.0), ("c", 5.0), ("d", 1.0)];
        let top = extremal_one(&items, |i| i.1, Extreme::Max).unwrap();
        assert_eq!(top.0, "b");
    }

    #[test]
    fn test_one_returns_first_of_tied_min() {
        let items = [("a", 3.0), ("b", 1.0), ("c", 5.0), ("d", 1.0)];
        let low = extremal_one(&items, |i| i.1, Extreme::Min).unwrap();
        assert_eq!(low.0, "b");
    }

    #[test]
    fn test_last_returns_last_of_tied_min() {
        let items = [("a", 3.0), ("b", 1.0), ("c", 5.0), ("d", 1.0)];
        let low = extremal_last(&items, |i| i.1, Extreme::Min).unwrap();
        assert_eq!(low.0, "d");

        let single = [("a", 2.0)];
        assert_eq!(extremal_last(&single, |i| i.1, Extreme::Max).unwrap().0, "a");
    }

    #[test]
    fn test_all_returns_every_tie_in_order() {
        let items = [("a", 5.0), ("b", 2.0), ("c", 5.0)];
        let top: Vec<&str> = extremal_all(&items, |i| i.1, Extreme::Max).iter().map(|i| i.0).collect();
        assert_eq!(top, vec!["a", "c"]);
    }

    #[test]
    fn test_single_winner_yields_exactly_one() {
        let items = [("a", 5.0), ("b", 2.0), ("c", 4.0)];
        assert_eq!(extremal_all(&items, |i| i.1, Extreme::Max).len(), 1);
        assert_eq!(extremal_all(&items, |i| i.1, Extreme::Min).len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let items: [(&str, f64); 0] = [];
        assert!(extremal_one(&items, |i| i.1, Extreme::Max).is_none());
        assert!(extremal_last(&items, |i| i.1, Extreme::Min).is_none());
        assert!(extremal_all(&items, |i| i.1, Extreme::Min).is_empty());
    }

    #[test]
    fn test_guarded_division() {
        assert_eq!(per_game(100.0, 0), 0.0);
        assert_eq!(per_game(100.0, 4), 25.0);
        assert_eq!(win_pct(0, 0, 0), 0.0);
        assert_eq!(win_pct(3, 1, 0), 0.75);
        assert!((win_pct(1, 1, 1) - 1.0 / 3.0).abs() < 1e-12);
    }
}
