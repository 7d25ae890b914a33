//! Word bank: one pool of candidate words per tier
//!
//! The data source is line oriented:
//!
//! ```text
//! # regular
//! reef
//! coral
//!
//! # great white
//! leviathan
//! ```
//!
//! A `#` line switches the active tier, blank lines are skipped and every
//! other line is one word. Loaded once at startup, immutable afterwards.

use std::path::Path;

use rand::Rng;

use super::state::Tier;
use crate::error::WordBankError;
use crate::is_matchable;

/// Immutable per-tier word pools
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    pools: [Vec<String>; Tier::COUNT],
}

impl WordBank {
    /// Read and parse a word file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordBankError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WordBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading words from {}", path.display());
        Self::parse(&text)
    }

    /// Parse word file contents.
    ///
    /// Unknown markers and unmatchable words are warned about and dropped.
    /// Fails only if no tier ends up with any word.
    pub fn parse(text: &str) -> Result<Self, WordBankError> {
        let mut bank = Self::default();
        // None after an unknown marker (or before the first one): lines are dropped
        let mut current: Option<Tier> = None;

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(marker) = line.strip_prefix('#') {
                current = Tier::from_marker(marker);
                match current {
                    Some(tier) => log::debug!("Category found: {}", tier),
                    None => log::warn!(
                        "line {}: unknown category '{}' ignored",
                        line_no + 1,
                        marker.trim()
                    ),
                }
                continue;
            }

            let Some(tier) = current else {
                log::debug!("line {}: '{}' is outside any known category, dropped", line_no + 1, line);
                continue;
            };
            bank.push_word(tier, line, line_no + 1);
        }

        bank.finish()
    }

    /// Build a bank directly from word lists (words are validated like file input)
    pub fn from_pools<'a>(
        pools: impl IntoIterator<Item = (Tier, &'a [&'a str])>,
    ) -> Result<Self, WordBankError> {
        let mut bank = Self::default();
        for (tier, words) in pools {
            for (i, word) in words.iter().enumerate() {
                bank.push_word(tier, word, i + 1);
            }
        }
        bank.finish()
    }

    fn push_word(&mut self, tier: Tier, raw: &str, line_no: usize) {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        if !word.chars().all(is_matchable) {
            log::warn!(
                "line {}: word '{}' has characters that cannot be typed, skipped",
                line_no,
                word
            );
            return;
        }
        log::trace!("Added word '{}' to category '{}'", word, tier);
        self.pools[tier.index()].push(word);
    }

    fn finish(self) -> Result<Self, WordBankError> {
        for tier in Tier::ALL {
            if self.pools[tier.index()].is_empty() {
                log::warn!("No words found for category '{}'", tier);
            }
        }
        if self.total_words() == 0 {
            return Err(WordBankError::NoWordsLoaded);
        }
        log::info!(
            "Loaded {} words (regular {}, tiger {}, mutated {}, great_white {})",
            self.total_words(),
            self.pools[Tier::Regular.index()].len(),
            self.pools[Tier::Tiger.index()].len(),
            self.pools[Tier::Mutated.index()].len(),
            self.pools[Tier::GreatWhite.index()].len(),
        );
        Ok(self)
    }

    /// Words for a tier; `EmptyTier` if the pool is empty
    pub fn words_for(&self, tier: Tier) -> Result<&[String], WordBankError> {
        let pool = &self.pools[tier.index()];
        if pool.is_empty() {
            Err(WordBankError::EmptyTier(tier))
        } else {
            Ok(pool)
        }
    }

    /// Uniformly random word from a tier's pool
    pub fn pick<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> Result<&str, WordBankError> {
        let pool = self.words_for(tier)?;
        Ok(&pool[rng.random_range(0..pool.len())])
    }

    pub fn total_words(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const SAMPLE: &str = "\
# regular
Reef
coral

# tiger
stripes
# Great White
leviathan
";

    #[test]
    fn test_parse_categories() {
        let bank = WordBank::parse(SAMPLE).unwrap();
        assert_eq!(bank.words_for(Tier::Regular).unwrap(), ["reef", "coral"]);
        assert_eq!(bank.words_for(Tier::Tiger).unwrap(), ["stripes"]);
        assert_eq!(bank.words_for(Tier::GreatWhite).unwrap(), ["leviathan"]);
        assert_eq!(bank.total_words(), 4);
    }

    #[test]
    fn test_empty_tier_error() {
        let bank = WordBank::parse(SAMPLE).unwrap();
        assert!(matches!(
            bank.words_for(Tier::Mutated),
            Err(WordBankError::EmptyTier(Tier::Mutated))
        ));
    }

    #[test]
    fn test_unknown_marker_drops_until_next_marker() {
        let text = "# hammerhead\nnope\nalso\n# tiger\nfin\n";
        let bank = WordBank::parse(text).unwrap();
        assert_eq!(bank.total_words(), 1);
        assert_eq!(bank.words_for(Tier::Tiger).unwrap(), ["fin"]);
    }

    #[test]
    fn test_words_before_any_marker_are_dropped() {
        let bank = WordBank::parse("orphan\n# regular\nfish\n").unwrap();
        assert_eq!(bank.total_words(), 1);
    }

    #[test]
    fn test_no_words_is_fatal() {
        assert!(matches!(WordBank::parse(""), Err(WordBankError::NoWordsLoaded)));
        assert!(matches!(
            WordBank::parse("# regular\n\n# tiger\n"),
            Err(WordBankError::NoWordsLoaded)
        ));
        assert!(matches!(
            WordBank::parse("# unknown\nword\n"),
            Err(WordBankError::NoWordsLoaded)
        ));
    }

    #[test]
    fn test_untypable_words_skipped() {
        let bank = WordBank::parse("# regular\nhammer head\nme@sea\nshark7\ncafé\n").unwrap();
        assert_eq!(bank.words_for(Tier::Regular).unwrap(), ["me@sea", "shark7"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WordBank::load("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, WordBankError::Io { .. }));
    }

    #[test]
    fn test_pick_stays_in_pool() {
        let bank = WordBank::from_pools([(Tier::Regular, &["a", "b", "c"][..])]).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let word = bank.pick(Tier::Regular, &mut rng).unwrap();
            assert!(["a", "b", "c"].contains(&word));
        }
        assert!(bank.pick(Tier::Tiger, &mut rng).is_err());
    }
}
