use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<K> {
    /// 1-based position in the full ordering.
    pub rank: usize,
    pub key: K,
    pub count: u64,
    pub percent: f64,
}

/// A frozen table in its final order: count descending, key ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<K> {
    pub total: u64,
    pub entries: Vec<RankedEntry<K>>,
}

impl<K> Default for Ranking<K> {
    fn default() -> Self {
        Self {
            total: 0,
            entries: Vec::new(),
        }
    }
}

/// Share of `total` in percent; zero when nothing was counted.
pub fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64) * 100.0
}

/// Two-key comparator: higher count first, then the smaller key.
pub fn compare<K: Ord>(a: (&K, u64), b: (&K, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

pub fn rank<K, I>(counts: I, total: u64) -> Ranking<K>
where
    K: Ord,
    I: IntoIterator<Item = (K, u64)>,
{
    let mut list: Vec<(K, u64)> = counts.into_iter().collect();
    list.sort_unstable_by(|a, b| compare((&a.0, a.1), (&b.0, b.1)));

    let entries = list
        .into_iter()
        .enumerate()
        .map(|(i, (key, count))| RankedEntry {
            rank: i + 1,
            key,
            count,
            percent: percent(count, total),
        })
        .collect();

    Ranking { total, entries }
}

impl<K> Ranking<K> {
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first `n` entries, or all of them when there are fewer.
    pub fn top(&self, n: usize) -> &[RankedEntry<K>] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Top-`n` view that also hides entries below `min_count`. Ranks and
    /// percentages stay those of the full table.
    pub fn top_filtered(&self, n: usize, min_count: u64) -> impl Iterator<Item = &RankedEntry<K>> {
        self.entries
            .iter()
            .filter(move |e| e.count >= min_count)
            .take(n)
    }

    pub fn counted(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
