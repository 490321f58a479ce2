//! Prompt templates for the summarizer and the review tagger.

use std::fmt;

/// Article summarised by the `summarize` command.
pub const SUMMARY_SOURCE_TEXT: &str = "
Indonesia adalah negara kepulauan terbesar di dunia yang terdiri dari 17.504 pulau.
Dengan populasi lebih dari 270 juta jiwa, Indonesia adalah negara berpenduduk
terpadat keempat di dunia.
Negara ini memiliki keanekaragaman suku, budaya, dan bahasa yang luar biasa.
Ibu kotanya adalah Jakarta, yang merupakan pusat bisnis dan pemerintahan.
Ekonomi Indonesia terus berkembang pesat, didorong oleh sektor jasa,
industri, dan pertanian.
";

const SUMMARY_PREFIX: &str = "Ringkas artikel:";

/// Text sent to the model as the sole input of one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wrap an article in the summarisation instruction.
pub fn summary_prompt(article: &str) -> Prompt {
    Prompt(format!("{SUMMARY_PREFIX}{article}"))
}

/// Bytes the summary template adds around the article.
pub fn summary_template_overhead() -> usize {
    SUMMARY_PREFIX.len()
}

/// Ask for exactly three `#`-prefixed, comma separated tags for one review.
///
/// The three-tag format is only requested; the reply is never checked against it.
pub fn tagging_prompt(review_text: &str) -> Prompt {
    Prompt(format!(
        "
    Berikan tags dari ulasan: {review_text}.
    Jawab berupa daftar tag yang relevan dengan ulasan tersebut.
    Berikan 3 tag yang relevan dengan ulasan tersebut.
    Tag dalam format: tag1, tag2, tag3.
    Tambahkan tanda pagar (#) di depan setiap tag tanpa spasi.
    Contoh: #tag1, #tag2, #tag3.
    "
    ))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn summary_prompt_wraps_the_article() {
        let prompt = summary_prompt(SUMMARY_SOURCE_TEXT);
        assert!(prompt.as_str().starts_with("Ringkas artikel:\nIndonesia adalah"));
        assert!(prompt.as_str().ends_with("industri, dan pertanian.\n"));
        assert_eq!(
            prompt.len(),
            SUMMARY_SOURCE_TEXT.len() + summary_template_overhead()
        );
    }

    #[test]
    fn tagging_prompt_embeds_review_and_format_example() {
        let prompt = tagging_prompt("Great product");
        let text = prompt.as_str();
        assert!(text.starts_with("\n    Berikan tags dari ulasan: Great product.\n"));
        assert!(text.contains("    Berikan 3 tag yang relevan dengan ulasan tersebut.\n"));
        assert!(text.contains("    Contoh: #tag1, #tag2, #tag3.\n"));
        assert!(text.ends_with("#tag3.\n    "));
    }

    #[test]
    fn blank_prompt_reports_empty() {
        assert!(Prompt::new("").is_empty());
        assert!(Prompt::new(" \n\t").is_empty());
        assert!(!tagging_prompt("").is_empty());
    }

    proptest! {
        #[test]
        fn tagging_prompt_is_pure(review in ".{1,200}") {
            prop_assert_eq!(tagging_prompt(&review), tagging_prompt(&review));
            prop_assert!(tagging_prompt(&review).as_str().contains(review.as_str()));
        }

        #[test]
        fn summary_overhead_is_constant(article in ".{1,500}") {
            let prompt = summary_prompt(&article);
            prop_assert_eq!(prompt.len(), article.len() + summary_template_overhead());
            prop_assert_eq!(summary_prompt(&article), prompt);
        }

        #[test]
        fn tagging_overhead_is_constant(a in ".{1,100}", b in ".{1,100}") {
            let overhead_a = tagging_prompt(&a).len() - a.len();
            let overhead_b = tagging_prompt(&b).len() - b.len();
            prop_assert_eq!(overhead_a, overhead_b);
        }
    }
}
