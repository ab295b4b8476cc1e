//! Type-ahead search over the panel items.

use std::time::{Duration, Instant};

use super::constants::SEARCH_TIMEOUT_MS;

/// The typed query and when its last character arrived.
#[derive(Debug, Clone)]
pub struct TypeAhead {
    query: String,
    last_key: Option<Instant>,
    timeout: Duration,
}

impl Default for TypeAhead {
    fn default() -> Self {
        Self::new(Duration::from_millis(SEARCH_TIMEOUT_MS))
    }
}

impl TypeAhead {
    pub fn new(timeout: Duration) -> Self {
        Self {
            query: String::new(),
            last_key: None,
            timeout,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Appends `c`, starting a new query first if the user paused longer
    /// than the timeout.
    pub fn push(&mut self, c: char, now: Instant) {
        let expired = match self.last_key {
            Some(last) => now.saturating_duration_since(last) > self.timeout,
            None => true,
        };
        if expired {
            self.query.clear();
        }
        self.last_key = Some(now);
        self.query.push(c);
    }

    /// Removes the last character. Returns false when the query was
    /// already empty. The idle timer is left untouched.
    pub fn backspace(&mut self) -> bool {
        self.query.pop().is_some()
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.last_key = None;
    }
}

/// Index of the next name starting with `query`, ignoring case.
///
/// The scan begins just after `current` (or at the first item), wraps
/// around and covers every item once, so the current item is checked last.
pub fn find_next_match<S: AsRef<str>>(
    names: &[S],
    current: Option<usize>,
    query: &str,
) -> Option<usize> {
    if query.is_empty() || names.is_empty() {
        return None;
    }

    let query = query.to_lowercase();
    let start = current.map_or(0, |i| i + 1);
    (0..names.len())
        .map(|offset| (start + offset) % names.len())
        .find(|&index| names[index].as_ref().to_lowercase().starts_with(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = ["Apps", "Projects", "Notes.txt", "Paint", "photo.png"];

    #[test]
    fn finds_first_prefix_match_from_start() {
        assert_eq!(find_next_match(&NAMES, None, "p"), Some(1));
    }

    #[test]
    fn continues_after_current_selection() {
        assert_eq!(find_next_match(&NAMES, Some(1), "p"), Some(3));
        assert_eq!(find_next_match(&NAMES, Some(3), "p"), Some(4));
    }

    #[test]
    fn wraps_around() {
        assert_eq!(find_next_match(&NAMES, Some(4), "a"), Some(0));
        assert_eq!(find_next_match(&NAMES, Some(4), "p"), Some(1));
    }

    #[test]
    fn current_item_matches_last() {
        assert_eq!(find_next_match(&NAMES, Some(2), "notes"), Some(2));
    }

    #[test]
    fn ignores_case() {
        assert_eq!(find_next_match(&NAMES, None, "PHO"), Some(4));
    }

    #[test]
    fn no_match_or_empty_query() {
        assert_eq!(find_next_match(&NAMES, None, "zz"), None);
        assert_eq!(find_next_match(&NAMES, None, ""), None);
        assert_eq!(find_next_match::<&str>(&[], None, "a"), None);
    }

    #[test]
    fn query_accumulates_within_timeout() {
        let t0 = Instant::now();
        let mut search = TypeAhead::default();
        search.push('p', t0);
        search.push('a', t0 + Duration::from_millis(400));
        search.push('i', t0 + Duration::from_millis(900));
        assert_eq!(search.query(), "pai");
    }

    #[test]
    fn query_resets_after_pause() {
        let t0 = Instant::now();
        let mut search = TypeAhead::default();
        search.push('p', t0);
        search.push('n', t0 + Duration::from_millis(1001));
        assert_eq!(search.query(), "n");
    }

    #[test]
    fn timeout_is_measured_from_last_character() {
        let t0 = Instant::now();
        let mut search = TypeAhead::default();
        search.push('a', t0);
        search.push('b', t0 + Duration::from_millis(800));
        search.push('c', t0 + Duration::from_millis(1600));
        assert_eq!(search.query(), "abc");
    }

    #[test]
    fn backspace_pops_until_empty() {
        let mut search = TypeAhead::default();
        search.push('a', Instant::now());
        assert!(search.backspace());
        assert_eq!(search.query(), "");
        assert!(!search.backspace());
    }
}
