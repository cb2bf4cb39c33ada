use std::hash::Hash;

use indexmap::IndexMap;

/// Occurrence counts per distinct item, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequencies<T>
where
    T: Eq + Hash,
{
    counts: IndexMap<T, usize>,
}

impl<T> Default for Frequencies<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<T> Frequencies<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
    }

    /// Zero for items never seen.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(item, &count)| (item, count))
    }

    /// The `n` most frequent items, highest first. Equal counts keep
    /// first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&T, usize)> {
        let mut ranked: Vec<(&T, usize)> = self.iter().collect();
        // stable sort preserves first-seen order among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<T> FromIterator<T> for Frequencies<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut frequencies = Self::new();
        frequencies.extend(iter);
        frequencies
    }
}

impl<T> Extend<T> for Frequencies<T>
where
    T: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

/// Case-sensitive character counts of `text`.
pub fn letter_counts(text: &str) -> Frequencies<char> {
    text.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_counts() {
        let counts = letter_counts("Deepak");

        assert_eq!(counts.count(&'e'), 2);
        assert_eq!(counts.count(&'D'), 1);
        assert_eq!(counts.count(&'d'), 0);
        assert_eq!(counts.len(), 5);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_iteration_follows_first_seen_order() {
        let counts = letter_counts("Deepak");
        let order: Vec<char> = counts.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, vec!['D', 'e', 'p', 'a', 'k']);
    }

    #[test]
    fn test_most_common_breaks_ties_by_first_seen() {
        let counts: Frequencies<&str> = ["b", "a", "b", "c", "a", "d"].into_iter().collect();

        assert_eq!(counts.most_common(2), vec![(&"b", 2), (&"a", 2)]);
        assert_eq!(counts.most_common(10).len(), 4);
        assert!(counts.most_common(0).is_empty());
    }

    #[test]
    fn test_extend_accumulates() {
        let mut counts = letter_counts("aa");
        counts.extend("ab".chars());
        assert_eq!(counts.count(&'a'), 3);
        assert_eq!(counts.count(&'b'), 1);
    }

    #[test]
    fn test_empty_input() {
        let counts = letter_counts("");
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert!(counts.most_common(3).is_empty());
    }
}
