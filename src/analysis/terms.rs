// Distinctive terms per sector, via TF-IDF.
//
// Each brand's text is a separate document for IDF computation, so words
// every brand uses get downweighted and words particular to a few brands
// rise to the top. English stop words are removed.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::corpus::Document;

/// Top `n` (term, score) pairs for a set of documents, highest score first.
/// Returns an empty list when there are no documents.
pub fn distinctive_terms(documents: &[Document], n: usize) -> Vec<(String, f32)> {
    let texts: Vec<String> = documents
        .iter()
        .map(|d| d.text.clone())
        .filter(|t| !t.trim().is_empty())
        .collect();
    if texts.is_empty() || n == 0 {
        return Vec::new();
    }

    let stop_words: Vec<String> = get(LANGUAGE::English);

    let params = TfIdfParams::UnprocessedDocuments(&texts, &stop_words, None);
    let tfidf = TfIdf::new(params);

    // Pure numbers ("50", "2024") rank highly in marketing copy but say nothing
    let ranked: Vec<(String, f32)> = tfidf
        .get_ranked_word_scores(n * 2)
        .into_iter()
        .filter(|(term, _)| !term.chars().all(|c| c.is_ascii_digit()))
        .take(n)
        .collect();

    if let Some((top, score)) = ranked.first() {
        debug!(terms = ranked.len(), top_term = %top, top_score = *score, "Extracted distinctive terms");
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Sector;

    fn doc(brand: &str, text: &str) -> Document {
        Document {
            brand: brand.to_string(),
            sector: Sector::SkincareCosmetics,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_distinctive_terms_basic() {
        let docs = vec![
            doc("A", "Retinol serum with retinol for wrinkles and retinol lovers"),
            doc("B", "Hydrating moisturizer for dry skin, hydrating all day"),
            doc("C", "Sunscreen protects skin from the sun every day"),
        ];
        let terms = distinctive_terms(&docs, 5);
        assert!(!terms.is_empty());
        assert!(terms.len() <= 5);
        assert!(terms.iter().all(|(t, _)| t != "the" && t != "and"));
    }

    #[test]
    fn test_distinctive_terms_empty() {
        assert!(distinctive_terms(&[], 10).is_empty());
    }
}
