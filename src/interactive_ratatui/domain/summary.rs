use crate::config::AverageMode;
use crate::schemas::WatchedEntry;

/// Averages over the watched list. Every mean of an empty list is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub imdb_rating: f64,
    pub user_rating: f64,
    pub runtime: f64,
}

impl WatchedSummary {
    pub fn compute<'a, I>(entries: I, mode: AverageMode) -> Self
    where
        I: IntoIterator<Item = &'a WatchedEntry>,
    {
        let mut imdb = Mean::default();
        let mut user = Mean::default();
        let mut runtime = Mean::default();
        let mut count = 0;

        for entry in entries {
            count += 1;
            imdb.push(parse_rating(&entry.movie.imdb_rating), mode);
            user.push(Some(entry.user_rating.get() as f64), mode);
            runtime.push(parse_runtime(&entry.movie.runtime).map(|m| m as f64), mode);
        }

        Self {
            count,
            imdb_rating: imdb.value(),
            user_rating: user.value(),
            runtime: runtime.value(),
        }
    }
}

#[derive(Default)]
struct Mean {
    sum: f64,
    n: usize,
}

impl Mean {
    fn push(&mut self, value: Option<f64>, mode: AverageMode) {
        match (value, mode) {
            (Some(v), _) => {
                self.sum += v;
                self.n += 1;
            }
            (None, AverageMode::TreatAsZero) => self.n += 1,
            (None, AverageMode::ExcludeInvalid) => {}
        }
    }

    fn value(&self) -> f64 {
        if self.n == 0 { 0.0 } else { self.sum / self.n as f64 }
    }
}

/// Parses an IMDb rating such as `"7.8"`. `"N/A"` and other non-numbers
/// yield `None`.
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads the leading integer of a runtime such as `"142 min"`.
pub fn parse_runtime(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}
