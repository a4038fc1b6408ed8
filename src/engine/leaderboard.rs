use crate::models::{LeaderboardEntry, Participant};

/// Competition ranking ("1224"): equal totals share a rank and the next
/// distinct total skips ahead. Input order breaks exact ties.
pub fn rank(participants: &[Participant]) -> Vec<LeaderboardEntry> {
    let mut sorted: Vec<&Participant> = participants.iter().collect();
    sorted.sort_by(|a, b| b.total_steps.cmp(&a.total_steps));

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(sorted.len());
    for (pos, p) in sorted.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.total_steps == p.total_steps => prev.rank,
            _ => pos as u32 + 1,
        };
        entries.push(LeaderboardEntry {
            participant_id: p.id.clone(),
            name: p.name.clone(),
            total_steps: p.total_steps,
            rank,
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(rows: &[(&str, u64)]) -> Vec<Participant> {
        rows.iter()
            .map(|(name, steps)| Participant::new(*name, *name, *steps))
            .collect()
    }

    fn ranks(entries: &[LeaderboardEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.rank).collect()
    }

    #[test]
    fn ties_share_rank_and_next_rank_skips() {
        let entries = rank(&roster(&[("A", 12456), ("B", 9000), ("C", 9000), ("D", 7000)]));
        assert_eq!(ranks(&entries), vec![1, 2, 2, 4]);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn sorts_descending_and_keeps_insertion_order_on_ties() {
        let entries = rank(&roster(&[("low", 10), ("x", 50), ("high", 99), ("y", 50)]));
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["high", "x", "y", "low"]);
        assert_eq!(ranks(&entries), vec![1, 2, 2, 4]);
    }

    #[test]
    fn all_tied_are_all_first() {
        let entries = rank(&roster(&[("a", 5), ("b", 5), ("c", 5)]));
        assert_eq!(ranks(&entries), vec![1, 1, 1]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let first = rank(&roster(&[
            ("Sarah M.", 12456),
            ("Mike P.", 7102),
            ("You", 7520),
            ("John D.", 10982),
            ("Lisa T.", 7102),
        ]));
        let again = rank(&first.iter().map(Participant::from).collect::<Vec<_>>());
        assert_eq!(first, again);
        assert_eq!(ranks(&first), vec![1, 2, 3, 4, 4]);
    }

    #[test]
    fn empty_roster() {
        assert!(rank(&[]).is_empty());
    }
}
