//! Rank assignment with fractional ties.

/// Assigns 1-based ranks, highest score first.
///
/// Only exactly equal scores tie. Tied scores share the average of the
/// positions they occupy, so a tie for 2nd and 3rd yields 2.5 for both.
/// Returned ranks are in input order.
pub fn average_ranks_descending(scores: &[f64]) -> Vec<f64> {
    let n = scores.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranks = vec![0.0f64; n];
    let mut start = 0;
    while start < n {
        let leader = scores[order[start]];
        let mut end = start;
        while end + 1 < n && scores[order[end + 1]] == leader {
            end += 1;
        }

        // positions start+1 ..= end+1
        let avg_rank = (start + end + 2) as f64 / 2.0;
        for &idx in &order[start..=end] {
            ranks[idx] = avg_rank;
        }
        start = end + 1;
    }

    ranks
}
