use std::{collections::HashSet, fmt::Debug, sync::LazyLock};

use regex::Regex;

/// Tokens are runs of two or more word characters.
pub const TOKEN_PATTERN: &str = r"\b\w\w+\b";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("TOKEN_PATTERN is a valid regex"));

/// Turns a text into the tokens counted by the vectorizer.
///
/// Implementations decide case folding and which tokens to discard.
/// Any `Fn(&str) -> Vec<String>` closure is a tokenizer too.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Lowercasing word tokenizer with a fixed English stop-word list.
///
/// # Examples
/// ```
/// use soup_recommender::{EnglishTokenizer, Tokenizer};
///
/// let tok = EnglishTokenizer::new();
/// assert_eq!(tok.tokenize("The Dark Knight"), vec!["dark", "knight"]);
/// ```
#[derive(Clone)]
pub struct EnglishTokenizer {
    stop_words: HashSet<Box<str>>,
}

impl EnglishTokenizer {
    pub fn new() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Replace the stop-word list. Words are lowercased.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase().into_boxed_str())
            .collect();
        Self { stop_words }
    }

    #[inline]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

impl Default for EnglishTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for EnglishTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishTokenizer")
            .field("pattern", &TOKEN_PATTERN)
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_RE
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|tok| !self.is_stop_word(tok))
            .map(str::to_string)
            .collect()
    }
}

/// English stop words (318), the list conventionally shipped with count vectorizers.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against",
    "all", "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "amongst", "amoungst", "amount", "an", "and", "another",
    "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "bill", "both",
    "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done",
    "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "fifteen", "fifty", "fill",
    "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go",
    "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter",
    "latterly", "least", "less", "ltd", "made", "many", "may", "me",
    "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
    "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our",
    "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps",
    "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such",
    "system", "take", "ten", "than", "that", "the", "their", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards",
    "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];
