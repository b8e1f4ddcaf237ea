/// Selects commit messages that start with one of the configured prefixes
///
/// Matching is case-insensitive on both sides: `FEAT: x` matches `feat`, and
/// `fix: y` matches `Fix`. No whitespace or punctuation is normalised, so a
/// prefix `feat` also matches `feature: z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalFilter {
    prefixes: Vec<String>,
}

impl ConventionalFilter {
    pub fn new<S: AsRef<str>>(prefixes: &[S]) -> Self {
        ConventionalFilter {
            prefixes: prefixes
                .iter()
                .map(|prefix| prefix.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_conventional(&self, message: &str) -> bool {
        if self.prefixes.is_empty() {
            return false;
        }

        let message = message.to_lowercase();
        self.prefixes
            .iter()
            .any(|prefix| message.starts_with(prefix.as_str()))
    }
}
