/// Word classes used by the NOID word_class field, keyed to Wikidata lexical categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Article,
    ProperNoun,
    Abbreviation,
    Prefix,
    Suffix,
}

impl LexicalCategory {
    pub const ALL: [LexicalCategory; 14] = [
        LexicalCategory::Noun,
        LexicalCategory::Verb,
        LexicalCategory::Adjective,
        LexicalCategory::Adverb,
        LexicalCategory::Pronoun,
        LexicalCategory::Preposition,
        LexicalCategory::Conjunction,
        LexicalCategory::Interjection,
        LexicalCategory::Numeral,
        LexicalCategory::Article,
        LexicalCategory::ProperNoun,
        LexicalCategory::Abbreviation,
        LexicalCategory::Prefix,
        LexicalCategory::Suffix,
    ];

    /// Exact match only, no case folding
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "sb." => Some(LexicalCategory::Noun),
            "vb." => Some(LexicalCategory::Verb),
            "adj." => Some(LexicalCategory::Adjective),
            "adv." => Some(LexicalCategory::Adverb),
            "pron." => Some(LexicalCategory::Pronoun),
            "præp." => Some(LexicalCategory::Preposition),
            "konj." => Some(LexicalCategory::Conjunction),
            "udråbsord" => Some(LexicalCategory::Interjection),
            "talord" => Some(LexicalCategory::Numeral),
            "art." => Some(LexicalCategory::Article),
            "propr." => Some(LexicalCategory::ProperNoun),
            "fork." => Some(LexicalCategory::Abbreviation),
            "præfiks" => Some(LexicalCategory::Prefix),
            "suffiks" => Some(LexicalCategory::Suffix),
            _ => None,
        }
    }

    /// Word class label as it appears in the index
    pub fn label(&self) -> &'static str {
        match self {
            LexicalCategory::Noun => "sb.",
            LexicalCategory::Verb => "vb.",
            LexicalCategory::Adjective => "adj.",
            LexicalCategory::Adverb => "adv.",
            LexicalCategory::Pronoun => "pron.",
            LexicalCategory::Preposition => "præp.",
            LexicalCategory::Conjunction => "konj.",
            LexicalCategory::Interjection => "udråbsord",
            LexicalCategory::Numeral => "talord",
            LexicalCategory::Article => "art.",
            LexicalCategory::ProperNoun => "propr.",
            LexicalCategory::Abbreviation => "fork.",
            LexicalCategory::Prefix => "præfiks",
            LexicalCategory::Suffix => "suffiks",
        }
    }

    /// Wikidata item id
    pub fn id(&self) -> &'static str {
        match self {
            LexicalCategory::Noun => "Q1084",
            LexicalCategory::Verb => "Q24905",
            LexicalCategory::Adjective => "Q34698",
            LexicalCategory::Adverb => "Q380057",
            LexicalCategory::Pronoun => "Q36224",
            LexicalCategory::Preposition => "Q4833830",
            LexicalCategory::Conjunction => "Q36484",
            LexicalCategory::Interjection => "Q83034",
            LexicalCategory::Numeral => "Q63116",
            LexicalCategory::Article => "Q103184",
            LexicalCategory::ProperNoun => "Q147276",
            LexicalCategory::Abbreviation => "Q102786",
            LexicalCategory::Prefix => "Q134830",
            LexicalCategory::Suffix => "Q102047",
        }
    }
}

/// Category id for a word class label, empty when absent or unknown
pub fn lexical_category(label: Option<&str>) -> &'static str {
    label
        .and_then(LexicalCategory::from_label)
        .map(|c| c.id())
        .unwrap_or("")
}
