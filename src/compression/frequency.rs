use std::collections::HashMap;

/// A symbol together with the number of times it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyEntry {
    pub symbol: char,
    pub count: usize,
}

/// Occurrence counts for every distinct symbol of an analyzed sequence.
///
/// Every stored count is at least 1 and the counts sum to the length (in
/// `char`s) of the analyzed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<char, usize>,
}

impl FrequencyTable {
    /// Count the symbols of `input`.
    ///
    /// With the `parallel` feature the input is split into chunks counted
    /// concurrently and merged afterwards; the result is the same either way.
    pub fn of(input: &str) -> Self {
        #[cfg(feature = "parallel")]
        let counts = count_parallel(input);
        #[cfg(not(feature = "parallel"))]
        let counts = count_sequential(input);

        log::trace!("counted {} distinct symbols", counts.len());
        Self { counts }
    }

    /// Build a table from explicit entries, summing repeated symbols and skipping zero counts.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = FrequencyEntry>,
    {
        let mut counts = HashMap::new();
        for entry in entries.into_iter().filter(|entry| entry.count > 0) {
            *counts.entry(entry.symbol).or_insert(0) += entry.count;
        }
        Self { counts }
    }

    /// Count for `symbol`, if it occurred.
    pub fn get(&self, symbol: char) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the analyzed input length.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = FrequencyEntry> + '_ {
        self.counts
            .iter()
            .map(|(&symbol, &count)| FrequencyEntry { symbol, count })
    }

    /// Entries ordered by symbol value.
    pub fn sorted_entries(&self) -> Vec<FrequencyEntry> {
        let mut entries: Vec<FrequencyEntry> = self.entries().collect();
        entries.sort_unstable_by_key(|entry| entry.symbol);
        entries
    }
}

/// Build a frequency table mapping each character in `input` to its frequency.
pub fn build_frequency_table(input: &str) -> FrequencyTable {
    FrequencyTable::of(input)
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn count_sequential(input: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in input.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

#[cfg(feature = "parallel")]
fn count_parallel(input: &str) -> HashMap<char, usize> {
    use rayon::prelude::*;

    input
        .par_chars()
        .fold(HashMap::new, |mut counts, ch| {
            *counts.entry(ch).or_insert(0) += 1;
            counts
        })
        .reduce(HashMap::new, |mut merged, shard| {
            for (ch, count) in shard {
                *merged.entry(ch).or_insert(0) += count;
            }
            merged
        })
}
