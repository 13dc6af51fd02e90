//! Random content for synthetic rows.
//!
//! The seeding stages never touch a random source directly; they go through
//! [`ContentGenerator`] so tests can swap in a seeded or scripted implementation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::Fake;
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of plausible primitive values for the entity factories.
pub trait ContentGenerator: Send {
    /// Uniform integer in `[min, max)`. Returns `min` when the range is empty.
    fn next_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform integer in `[min, max]`.
    fn next_int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        if max == i64::MAX {
            return self.next_int(min.saturating_sub(1), max).saturating_add(1);
        }
        self.next_int(min, max + 1)
    }

    /// A full person name, normally "First Last".
    fn full_name(&mut self) -> String;

    /// An email address derived from name parts. Uniqueness is the caller's concern.
    fn email(&mut self, first: &str, last: &str) -> String;

    fn sentence(&mut self) -> Option<String>;

    /// A short travel quotation, without attribution.
    fn quote(&mut self) -> Option<String>;

    /// `count` filler words formatted as a sentence. Always present.
    fn words_as_sentence(&mut self, count: usize) -> String;

    /// A timestamp between Jan 1 of `year_min` and Dec 31 of `year_max`.
    fn timestamp(&mut self, year_min: i32, year_max: i32) -> DateTime<Utc>;

    /// `true` with roughly `percent` in 100 odds.
    fn chance(&mut self, percent: i64) -> bool {
        self.next_int(0, 100) < percent
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_int(0, items.len() as i64) as usize;
        items.get(idx)
    }

    /// Fisher-Yates shuffle driven by [`ContentGenerator::next_int`].
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i as i64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl<G: ContentGenerator> ContentGenerator for &mut G {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (**self).next_int(min, max)
    }

    fn full_name(&mut self) -> String {
        (**self).full_name()
    }

    fn email(&mut self, first: &str, last: &str) -> String {
        (**self).email(first, last)
    }

    fn sentence(&mut self) -> Option<String> {
        (**self).sentence()
    }

    fn quote(&mut self) -> Option<String> {
        (**self).quote()
    }

    fn words_as_sentence(&mut self, count: usize) -> String {
        (**self).words_as_sentence(count)
    }

    fn timestamp(&mut self, year_min: i32, year_max: i32) -> DateTime<Utc> {
        (**self).timestamp(year_min, year_max)
    }
}

/// Returns the first candidate that is present and not blank, or an empty string.
pub fn first_non_empty<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or_default()
}

const QUOTES: &[&str] = &[
    "Not all those who wander are lost.",
    "The world is a book and those who do not travel read only one page.",
    "To travel is to live.",
    "Travel makes one modest.",
    "A journey is best measured in friends, rather than miles.",
    "Wherever you go, go with all your heart.",
    "Life is either a daring adventure or nothing.",
    "We travel not to escape life, but for life not to escape us.",
];

/// Production generator backed by `fake` and a seedable [`StdRng`].
pub struct FakeGenerator {
    rng: StdRng,
}

impl FakeGenerator {
    /// Reproducible generator: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ContentGenerator for FakeGenerator {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..max)
    }

    fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    fn email(&mut self, first: &str, last: &str) -> String {
        let provider: String = FreeEmailProvider().fake_with_rng(&mut self.rng);
        let first = email_slug(first, "user");
        let last = email_slug(last, "seed");
        format!("{first}.{last}@{provider}")
    }

    fn sentence(&mut self) -> Option<String> {
        let s: String = Sentence(4..10).fake_with_rng(&mut self.rng);
        Some(s).filter(|s| !s.trim().is_empty())
    }

    fn quote(&mut self) -> Option<String> {
        let idx = self.next_int(0, QUOTES.len() as i64) as usize;
        QUOTES.get(idx).map(|text| text.to_string())
    }

    fn words_as_sentence(&mut self, count: usize) -> String {
        if count == 0 {
            return String::new();
        }
        let words: Vec<String> = Words(count..count + 1).fake_with_rng(&mut self.rng);
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get(..1) {
            let upper = first.to_uppercase();
            sentence.replace_range(..1, &upper);
        }
        sentence.push('.');
        sentence
    }

    fn timestamp(&mut self, year_min: i32, year_max: i32) -> DateTime<Utc> {
        let (lo, hi) = if year_min <= year_max {
            (year_min, year_max)
        } else {
            (year_max, year_min)
        };
        let start = Utc.with_ymd_and_hms(lo, 1, 1, 0, 0, 0).single();
        let end = Utc.with_ymd_and_hms(hi + 1, 1, 1, 0, 0, 0).single();

        match (start, end) {
            (Some(start), Some(end)) => {
                let span = (end - start).num_seconds();
                start + Duration::seconds(self.next_int(0, span))
            }
            _ => Utc::now(),
        }
    }
}

/// Lowercase ASCII alphanumerics of `part`, or `fallback` if nothing survives.
fn email_slug(part: &str, fallback: &str) -> String {
    let slug: String = part
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}
