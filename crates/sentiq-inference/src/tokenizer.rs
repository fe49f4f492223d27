//! Tokenizer reconciliation
//!
//! Reconstructs a canonical word-to-index mapping from heterogeneous
//! serialized tokenizer representations, or from a fixed built-in vocabulary
//! when nothing on disk can be reconciled. Resolution never fails; the worst
//! case is the built-in vocabulary tagged `dummy`.

use sentiq_core::TokenizerFormat;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Reserved index for out-of-vocabulary tokens
pub const OOV_INDEX: u32 = 0;

/// Canonical text-to-index mapping.
///
/// Keys are case-normalized on ingest. Every index produced by
/// [`TokenizerMapping::tokenize`] is either [`OOV_INDEX`] or a table entry
/// below the `num_words` cap, and repeated calls with the same text yield the
/// same sequence.
pub struct TokenizerMapping {
    word_index: HashMap<String, u32>,
    index_word: HashMap<u32, String>,
    num_words: u32,
}

impl TokenizerMapping {
    /// Build a mapping from a word→index table.
    ///
    /// `num_words` caps the usable index range; when absent it defaults to
    /// the table size.
    pub fn new(word_index: HashMap<String, u32>, num_words: Option<u32>) -> Self {
        let word_index: HashMap<String, u32> = word_index
            .into_iter()
            .map(|(word, index)| (word.to_lowercase(), index))
            .collect();
        let num_words = num_words.unwrap_or(word_index.len() as u32);
        let index_word = word_index
            .iter()
            .map(|(word, index)| (*index, word.clone()))
            .collect();

        Self {
            word_index,
            index_word,
            num_words,
        }
    }

    /// Convert a text into its integer sequence.
    ///
    /// Lower-cases, splits on whitespace, and maps each token to its index.
    /// Tokens absent from the table, and tokens whose index reaches the
    /// `num_words` cap, map to [`OOV_INDEX`].
    pub fn tokenize(&self, text: &str) -> Vec<u32> {
        text.to_lowercase()
            .split_whitespace()
            .map(|token| match self.word_index.get(token) {
                Some(&index) if index < self.num_words => index,
                _ => OOV_INDEX,
            })
            .collect()
    }

    /// Look up the index for a word (uncapped)
    pub fn index_for(&self, word: &str) -> Option<u32> {
        self.word_index.get(&word.to_lowercase()).copied()
    }

    /// Look up the word for an index
    pub fn word_for(&self, index: u32) -> Option<&str> {
        self.index_word.get(&index).map(String::as_str)
    }

    /// Number of entries in the table
    pub fn vocab_size(&self) -> usize {
        self.word_index.len()
    }

    /// The vocabulary cap
    pub fn num_words(&self) -> u32 {
        self.num_words
    }
}

/// Supported source shapes for a serialized tokenizer, in resolution
/// priority order.
enum TokenizerSource {
    /// Native serialized tokenizer with a working tokenization capability
    Native(Box<tokenizers::Tokenizer>),
    /// Plain keyed structure with a `word_index` entry
    Keyed {
        word_index: HashMap<String, u32>,
        num_words: Option<u32>,
    },
    /// Opaque object with an introspectable `word_index`-shaped field
    Introspected { word_index: HashMap<String, u32> },
    /// Nothing matched
    Unrecognized,
}

/// Outcome of tokenizer resolution
pub struct ResolvedTokenizer {
    pub mapping: Arc<TokenizerMapping>,
    pub format: TokenizerFormat,
}

/// Resolves a serialized tokenizer file into a [`TokenizerMapping`]
pub struct TokenizerResolver {
    path: PathBuf,
}

impl TokenizerResolver {
    /// Create a resolver for the given tokenizer file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the file into a canonical mapping.
    ///
    /// Infallible: unrecognized, unreadable, or absent files resolve to the
    /// built-in vocabulary tagged [`TokenizerFormat::Builtin`].
    pub fn resolve(&self) -> ResolvedTokenizer {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "tokenizer file not found, using built-in vocabulary");
            return ResolvedTokenizer {
                mapping: Arc::new(builtin_vocabulary()),
                format: TokenizerFormat::Builtin,
            };
        }

        let (mapping, format) = match detect_source(&self.path) {
            TokenizerSource::Native(tokenizer) => {
                let vocab = tokenizer.get_vocab(true);
                (
                    TokenizerMapping::new(vocab, None),
                    TokenizerFormat::Native,
                )
            }
            TokenizerSource::Keyed {
                word_index,
                num_words,
            } => (
                TokenizerMapping::new(word_index, num_words),
                TokenizerFormat::KeyedDict,
            ),
            TokenizerSource::Introspected { word_index } => (
                TokenizerMapping::new(word_index, None),
                TokenizerFormat::Extracted,
            ),
            TokenizerSource::Unrecognized => {
                warn!(path = %self.path.display(), "tokenizer format unrecognized, using built-in vocabulary");
                (builtin_vocabulary(), TokenizerFormat::Builtin)
            }
        };

        info!(
            format = format.as_str(),
            vocab_size = mapping.vocab_size(),
            "tokenizer resolved"
        );

        ResolvedTokenizer {
            mapping: Arc::new(mapping),
            format,
        }
    }
}

/// Match the file against the supported source shapes, in priority order.
fn detect_source(path: &Path) -> TokenizerSource {
    // Shape 1: a native serialized tokenizer. Validated by invoking it once;
    // an invocation failure falls through to the structural shapes below.
    if let Ok(tokenizer) = tokenizers::Tokenizer::from_file(path) {
        match tokenizer.encode("test", false) {
            Ok(_) => return TokenizerSource::Native(Box::new(tokenizer)),
            Err(e) => {
                warn!(error = %e, "native tokenizer failed validation, falling through");
            }
        }
    }

    let Ok(raw) = std::fs::read_to_string(path) else {
        return TokenizerSource::Unrecognized;
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw) else {
        return TokenizerSource::Unrecognized;
    };
    let Some(object) = value.as_object() else {
        return TokenizerSource::Unrecognized;
    };

    // Shape 2: a plain keyed structure with a word_index entry.
    if let Some(word_index) = object.get("word_index").and_then(word_index_table) {
        let num_words = object
            .get("num_words")
            .and_then(serde_json::Value::as_u64)
            .map(|n| n as u32);
        return TokenizerSource::Keyed {
            word_index,
            num_words,
        };
    }

    // Shape 3: an opaque object carrying a word_index-shaped field under a
    // private-prefixed name, or nested one level down.
    if let Some(word_index) = object.get("_word_index").and_then(word_index_table) {
        return TokenizerSource::Introspected { word_index };
    }
    for nested in object.values() {
        if let Some(inner) = nested.as_object() {
            for key in ["word_index", "_word_index"] {
                if let Some(word_index) = inner.get(key).and_then(word_index_table) {
                    return TokenizerSource::Introspected { word_index };
                }
            }
        }
    }

    TokenizerSource::Unrecognized
}

/// Extract a word→index table from a JSON value, if it has that shape.
fn word_index_table(value: &serde_json::Value) -> Option<HashMap<String, u32>> {
    let object = value.as_object()?;
    if object.is_empty() {
        return None;
    }
    let mut table = HashMap::with_capacity(object.len());
    for (word, index) in object {
        table.insert(word.clone(), index.as_u64()? as u32);
    }
    Some(table)
}

/// The fixed built-in vocabulary used when no tokenizer can be reconciled.
pub fn builtin_vocabulary() -> TokenizerMapping {
    let words = [
        ("love", 1),
        ("great", 2),
        ("excellent", 3),
        ("amazing", 4),
        ("best", 5),
        ("hate", 6),
        ("terrible", 7),
        ("worst", 8),
        ("awful", 9),
        ("bad", 10),
        ("airline", 11),
        ("flight", 12),
        ("service", 13),
        ("crew", 14),
        ("staff", 15),
        ("i", 16),
        ("the", 17),
        ("is", 18),
        ("was", 19),
        ("this", 20),
        ("air", 21),
        ("paradis", 22),
        ("good", 23),
        ("ok", 24),
        ("fine", 25),
        ("nice", 26),
        ("comfortable", 27),
        ("friendly", 28),
        ("professional", 29),
        ("disappointing", 30),
        ("delayed", 31),
        ("cancelled", 32),
        ("rude", 33),
    ];

    let word_index = words
        .into_iter()
        .map(|(word, index)| (word.to_string(), index))
        .collect();

    TokenizerMapping::new(word_index, Some(10_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_mapping(num_words: Option<u32>) -> TokenizerMapping {
        let table = HashMap::from([
            ("hello".to_string(), 1),
            ("World".to_string(), 2),
            ("again".to_string(), 3),
        ]);
        TokenizerMapping::new(table, num_words)
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let mapping = builtin_vocabulary();
        let text = "I love this airline";
        assert_eq!(mapping.tokenize(text), mapping.tokenize(text));
    }

    #[test]
    fn test_unknown_words_map_to_oov() {
        let mapping = builtin_vocabulary();
        assert_eq!(mapping.tokenize("quantum entanglement"), vec![0, 0]);
    }

    #[test]
    fn test_case_normalization() {
        let mapping = small_mapping(None);
        // "World" was ingested with a capital; both lookups normalize.
        assert_eq!(mapping.tokenize("HELLO world"), vec![1, 2]);
        assert_eq!(mapping.index_for("WORLD"), Some(2));
    }

    #[test]
    fn test_num_words_cap() {
        let mapping = small_mapping(Some(3));
        // index 3 is not strictly below the cap and becomes OOV
        assert_eq!(mapping.tokenize("hello world again"), vec![1, 2, 0]);
    }

    #[test]
    fn test_back_mapping() {
        let mapping = builtin_vocabulary();
        assert_eq!(mapping.word_for(1), Some("love"));
        assert_eq!(mapping.word_for(9999), None);
    }

    #[test]
    fn test_builtin_vocabulary_contents() {
        let mapping = builtin_vocabulary();
        for word in ["love", "great", "hate", "terrible", "airline", "paradis"] {
            assert!(mapping.index_for(word).is_some(), "missing: {word}");
        }
        assert_eq!(mapping.num_words(), 10_000);
    }

    #[test]
    fn test_missing_file_resolves_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = TokenizerResolver::new(dir.path().join("absent.json")).resolve();
        assert_eq!(resolved.format, TokenizerFormat::Builtin);
        assert_eq!(resolved.mapping.index_for("love"), Some(1));
    }

    #[test]
    fn test_keyed_dict_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(
            &path,
            r#"{"word_index": {"love": 1, "hate": 2}, "num_words": 2}"#,
        )
        .unwrap();

        let resolved = TokenizerResolver::new(&path).resolve();
        assert_eq!(resolved.format, TokenizerFormat::KeyedDict);
        assert_eq!(resolved.mapping.tokenize("love hate"), vec![1, 0]);
    }

    #[test]
    fn test_private_field_introspection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(&path, r#"{"_word_index": {"love": 1, "hate": 2}}"#).unwrap();

        let resolved = TokenizerResolver::new(&path).resolve();
        assert_eq!(resolved.format, TokenizerFormat::Extracted);
        assert_eq!(resolved.mapping.index_for("hate"), Some(2));
    }

    #[test]
    fn test_nested_field_introspection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(
            &path,
            r#"{"config": {"word_index": {"love": 4}}, "kind": "wrapped"}"#,
        )
        .unwrap();

        let resolved = TokenizerResolver::new(&path).resolve();
        assert_eq!(resolved.format, TokenizerFormat::Extracted);
        assert_eq!(resolved.mapping.index_for("love"), Some(4));
    }

    #[test]
    fn test_unrecognized_shape_resolves_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(&path, r#"{"weights": [1, 2, 3]}"#).unwrap();

        let resolved = TokenizerResolver::new(&path).resolve();
        assert_eq!(resolved.format, TokenizerFormat::Builtin);
    }

    #[test]
    fn test_garbage_file_resolves_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(&path, b"\x00\x01not json").unwrap();

        let resolved = TokenizerResolver::new(&path).resolve();
        assert_eq!(resolved.format, TokenizerFormat::Builtin);
    }

    #[test]
    fn test_native_tokenizer_resolution() {
        use tokenizers::models::wordlevel::WordLevel;

        let vocab = HashMap::from([
            ("[UNK]".to_string(), 0u32),
            ("love".to_string(), 1),
            ("hate".to_string(), 2),
        ]);
        let model = WordLevel::builder()
            .vocab(vocab)
            .unk_token("[UNK]".to_string())
            .build()
            .unwrap();
        let tokenizer = tokenizers::Tokenizer::new(model);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        tokenizer.save(path.to_str().unwrap(), false).unwrap();

        let resolved = TokenizerResolver::new(&path).resolve();
        assert_eq!(resolved.format, TokenizerFormat::Native);
        assert_eq!(resolved.mapping.index_for("love"), Some(1));
    }
}
