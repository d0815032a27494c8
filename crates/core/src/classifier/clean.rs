use regex::Regex;

use super::PipelineError;
use super::porter::PorterStemmer;
use super::stopwords::is_stopword;

/// Normalises raw tweet text into the stemmed form the vectorizer was fit on.
///
/// Steps: drop retweet markers, URLs, @-mentions and `&amp;`; replace every
/// non-letter with a space; lowercase; remove stopwords; stem; join with
/// single spaces.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    retweet: Regex,
    url: Regex,
    mention: Regex,
    non_alpha: Regex,
    token: Regex,
    stemmer: PorterStemmer,
}

impl TextCleaner {
    /// # Errors
    ///
    /// Returns `PipelineError::Pattern` if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            retweet: Regex::new(r"\bRT\b")?,
            url: Regex::new(r"http\S+|www\S+|https\S+")?,
            mention: Regex::new(r"@\w+")?,
            non_alpha: Regex::new(r"[^a-zA-Z\s]")?,
            token: Regex::new(r"\b\w\w+\b")?,
            stemmer: PorterStemmer::new(),
        })
    }

    /// Remove markup noise, leaving only letters and whitespace.
    #[must_use]
    pub fn strip_noise(&self, text: &str) -> String {
        let text = self.retweet.replace_all(text, "");
        let text = self.url.replace_all(&text, "");
        let text = self.mention.replace_all(&text, "");
        let text = text.replace("&amp;", "");
        self.non_alpha.replace_all(&text, " ").into_owned()
    }

    /// Full cleaning: noise removal, lowercasing, stopwords and stemming.
    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        self.strip_noise(text)
            .to_lowercase()
            .split_whitespace()
            .filter(|word| !is_stopword(word))
            .map(|word| self.stemmer.stem(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Split cleaned text into vectorizer tokens (two or more word characters).
    #[must_use]
    pub fn tokens<'a>(&self, cleaned: &'a str) -> Vec<&'a str> {
        self.token.find_iter(cleaned).map(|m| m.as_str()).collect()
    }
}
