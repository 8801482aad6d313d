use std::collections::HashMap;

/// Occurrence counts for a word sequence, remembering first-occurrence order
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    /// (word, count) in order of first occurrence
    entries: Vec<(String, usize)>,
    /// word -> position in `entries`
    index: HashMap<String, usize>,
    total: usize,
}

impl WordFrequencyTable {
    /// Counts every word in the sequence
    pub fn build<S: AsRef<str>>(words: &[S]) -> Self {
        let mut table = Self::default();
        for word in words {
            let word = word.as_ref();
            match table.index.get(word) {
                Some(&pos) => table.entries[pos].1 += 1,
                None => {
                    table.index.insert(word.to_string(), table.entries.len());
                    table.entries.push((word.to_string(), 1));
                }
            }
        }
        table.total = words.len();
        table
    }

    /// Occurrences of a word (0 if it never appeared)
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of words counted, duplicates included
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (word, count) pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Up to `n` words by descending count.
    ///
    /// Words with equal counts keep their first-occurrence order.
    pub fn most_common(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // stable sort keeps first-occurrence order among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, _)| word.clone())
            .collect()
    }
}
