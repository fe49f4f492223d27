//! Fixed sentiment lexicons backing the heuristic fallback classifier.
//!
//! English and French word lists. Matching is whole-token only, so every
//! entry is a single lowercase word.

pub const POSITIVE_EN: &[&str] = &[
    // A-C
    "able",
    "amazing",
    "appreciate",
    "awesome",
    "beautiful",
    "best",
    "better",
    "blessed",
    "bliss",
    "bright",
    "brilliant",
    "calm",
    "celebrate",
    "charming",
    "cheerful",
    "clean",
    "clever",
    "comfort",
    "comfortable",
    "confident",
    "cool",
    "courageous",
    "creative",
    "cute",
    // D-F
    "dazzling",
    "dedicated",
    "delight",
    "delighted",
    "delightful",
    "dependable",
    "easy",
    "ecstatic",
    "effective",
    "efficient",
    "elegant",
    "enjoy",
    "enjoyable",
    "enthusiastic",
    "excellent",
    "exceptional",
    "exciting",
    "exquisite",
    "extraordinary",
    "fabulous",
    "fair",
    "fantastic",
    "fascinating",
    "favorite",
    "fearless",
    "fine",
    "flawless",
    "fortunate",
    "fresh",
    "friendly",
    "fun",
    "funny",
    // G-L
    "generous",
    "genius",
    "gentle",
    "genuine",
    "glad",
    "glorious",
    "good",
    "gorgeous",
    "graceful",
    "grand",
    "grateful",
    "great",
    "happy",
    "harmonious",
    "helpful",
    "honest",
    "hope",
    "hopeful",
    "ideal",
    "impressive",
    "incredible",
    "innovative",
    "inspiring",
    "intelligent",
    "joy",
    "joyful",
    "jubilant",
    "kind",
    "kindness",
    "lively",
    "love",
    "lovely",
    "loving",
    "loyal",
    // M-P
    "magic",
    "magnificent",
    "marvelous",
    "masterpiece",
    "memorable",
    "merry",
    "nice",
    "noble",
    "optimistic",
    "outstanding",
    "paradise",
    "peaceful",
    "perfect",
    "phenomenal",
    "pleasant",
    "pleased",
    "pleasing",
    "polished",
    "popular",
    "positive",
    "powerful",
    "praise",
    "precious",
    "premium",
    "pretty",
    "pristine",
    "professional",
    "proud",
    // Q-S
    "quality",
    "quick",
    "radiant",
    "reliable",
    "remarkable",
    "respectful",
    "rewarding",
    "rich",
    "robust",
    "safe",
    "satisfied",
    "satisfying",
    "secure",
    "sensational",
    "serene",
    "sharp",
    "shining",
    "smart",
    "smile",
    "smooth",
    "solid",
    "spectacular",
    "splendid",
    "stellar",
    "strong",
    "stunning",
    "sublime",
    "successful",
    "super",
    "superb",
    "superior",
    "supportive",
    "sweet",
    // T-Z
    "talented",
    "terrific",
    "thrilled",
    "thrilling",
    "top",
    "tranquil",
    "triumphant",
    "trust",
    "trustworthy",
    "unbeatable",
    "unforgettable",
    "uplifting",
    "useful",
    "valuable",
    "vibrant",
    "victorious",
    "vivid",
    "warm",
    "welcome",
    "wholesome",
    "winner",
    "wise",
    "wonderful",
    "worthy",
];

pub const NEGATIVE_EN: &[&str] = &[
    // A-C
    "abandoned",
    "abusive",
    "afraid",
    "aggressive",
    "alarming",
    "angry",
    "annoyed",
    "annoying",
    "anxious",
    "appalling",
    "arrogant",
    "ashamed",
    "atrocious",
    "awful",
    "bad",
    "bitter",
    "bizarre",
    "bleak",
    "boring",
    "broken",
    "brutal",
    "careless",
    "catastrophe",
    "chaos",
    "chaotic",
    "cheap",
    "cheat",
    "clumsy",
    "collapse",
    "complain",
    "complaint",
    "confused",
    "confusing",
    "corrupt",
    "costly",
    "crash",
    "crazy",
    "crisis",
    "crude",
    "cruel",
    "cry",
    // D-F
    "damaged",
    "danger",
    "dangerous",
    "dark",
    "dead",
    "deceive",
    "defective",
    "delay",
    "delayed",
    "deplorable",
    "depressed",
    "depressing",
    "desperate",
    "despicable",
    "destroy",
    "dirty",
    "disappoint",
    "disappointed",
    "disappointing",
    "disaster",
    "disastrous",
    "disgrace",
    "disgusting",
    "dishonest",
    "dismal",
    "disrespect",
    "distress",
    "disturbing",
    "doubt",
    "doubtful",
    "dreadful",
    "dreary",
    "dull",
    "embarrassing",
    "enraged",
    "error",
    "evil",
    "exhausted",
    "fail",
    "failed",
    "failing",
    "failure",
    "fake",
    "false",
    "fatal",
    "fault",
    "faulty",
    "fear",
    "fearful",
    "fiasco",
    "filthy",
    "flawed",
    "foolish",
    "fraud",
    "frightening",
    "frustrated",
    "frustrating",
    "frustration",
    // G-L
    "garbage",
    "ghastly",
    "gloomy",
    "gross",
    "grotesque",
    "grumpy",
    "guilty",
    "harmful",
    "harsh",
    "hate",
    "hated",
    "hateful",
    "hazardous",
    "heartless",
    "helpless",
    "hideous",
    "horrendous",
    "horrible",
    "horrid",
    "horrific",
    "horror",
    "hostile",
    "hurt",
    "hurtful",
    "idiot",
    "ignorant",
    "illegal",
    "impossible",
    "inadequate",
    "incompetent",
    "inconsistent",
    "inconvenient",
    "incorrect",
    "ineffective",
    "inefficient",
    "inferior",
    "injustice",
    "insane",
    "insulting",
    "intolerable",
    "irritating",
    "jealous",
    "lame",
    "late",
    "lazy",
    "lost",
    "lousy",
    // M-R
    "mediocre",
    "mess",
    "messy",
    "miserable",
    "misery",
    "mistake",
    "nasty",
    "negative",
    "nightmare",
    "offensive",
    "outrage",
    "outrageous",
    "painful",
    "panic",
    "pathetic",
    "poor",
    "problem",
    "reckless",
    "regret",
    "rotten",
    "rude",
    "ruin",
    "ruined",
    // S-Z
    "sad",
    "scam",
    "scandal",
    "scared",
    "severe",
    "shabby",
    "shame",
    "shameful",
    "shocking",
    "sick",
    "slow",
    "sloppy",
    "sorrow",
    "stress",
    "stressful",
    "stupid",
    "suffer",
    "suffering",
    "terrible",
    "tragic",
    "trash",
    "trouble",
    "ugly",
    "unacceptable",
    "uncomfortable",
    "unfair",
    "unhappy",
    "unpleasant",
    "unreliable",
    "upset",
    "useless",
    "vicious",
    "vile",
    "weak",
    "woeful",
    "worry",
    "worse",
    "worst",
    "wrong",
];

pub const POSITIVE_FR: &[&str] = &[
    "adorable",
    "agréable",
    "aimable",
    "amusant",
    "authentique",
    "bienveillant",
    "bravo",
    "brillant",
    "charmant",
    "chouette",
    "confortable",
    "convivial",
    "délicieux",
    "drôle",
    "dynamique",
    "éblouissant",
    "éclatant",
    "élégant",
    "émouvant",
    "enchanté",
    "enrichissant",
    "enthousiaste",
    "épatant",
    "exceptionnel",
    "extraordinaire",
    "fabuleux",
    "fantastique",
    "fascinant",
    "formidable",
    "génial",
    "généreux",
    "grandiose",
    "gratifiant",
    "heureux",
    "idéal",
    "impeccable",
    "impressionnant",
    "incroyable",
    "inoubliable",
    "inspirant",
    "joli",
    "joyeux",
    "magnifique",
    "merveilleux",
    "mémorable",
    "paisible",
    "parfait",
    "passionnant",
    "performant",
    "plaisant",
    "positif",
    "propre",
    "rapide",
    "rassurant",
    "réussi",
    "satisfaisant",
    "sensationnel",
    "serein",
    "somptueux",
    "souriant",
    "splendide",
    "stimulant",
    "succès",
    "superbe",
    "surprenant",
    "sympa",
    "talentueux",
    "triomphant",
    "unique",
    "utile",
    "vivifiant",
];

pub const NEGATIVE_FR: &[&str] = &[
    "abominable",
    "absurde",
    "affligeant",
    "agressif",
    "alarmant",
    "angoissant",
    "arnaque",
    "atroce",
    "calamité",
    "catastrophique",
    "chiant",
    "choquant",
    "colère",
    "confus",
    "coupable",
    "dangereux",
    "décevant",
    "déception",
    "défectueux",
    "dégoûtant",
    "dégueulasse",
    "déprimant",
    "désagréable",
    "désastre",
    "désastreux",
    "désespoir",
    "détestable",
    "douleur",
    "douteux",
    "échec",
    "effrayant",
    "effroyable",
    "énervant",
    "ennuyeux",
    "épouvantable",
    "erreur",
    "exaspérant",
    "faible",
    "fou",
    "fragile",
    "frustrant",
    "grossier",
    "haine",
    "honte",
    "honteux",
    "horreur",
    "humiliant",
    "ignoble",
    "immonde",
    "impoli",
    "inacceptable",
    "inadmissible",
    "injuste",
    "inquiétant",
    "insultant",
    "insupportable",
    "inutile",
    "lamentable",
    "lent",
    "mauvais",
    "médiocre",
    "minable",
    "misérable",
    "moche",
    "navrant",
    "néfaste",
    "négatif",
    "nul",
    "odieux",
    "pénible",
    "pire",
    "pitoyable",
    "pourri",
    "problème",
    "rageant",
    "raté",
    "regrettable",
    "ridicule",
    "scandale",
    "scandaleux",
    "sinistre",
    "sombre",
    "stressant",
    "stupide",
    "terrifiant",
    "toxique",
    "triste",
    "vulgaire",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entries_are_single_lowercase_tokens() {
        for list in [POSITIVE_EN, NEGATIVE_EN, POSITIVE_FR, NEGATIVE_FR] {
            for word in list {
                assert!(!word.contains(char::is_whitespace), "multi-token entry: {word}");
                assert_eq!(*word, word.to_lowercase(), "entry not lowercase: {word}");
            }
        }
    }

    #[test]
    fn test_polarities_are_disjoint() {
        let positive: HashSet<_> = POSITIVE_EN.iter().chain(POSITIVE_FR).collect();
        for word in NEGATIVE_EN.iter().chain(NEGATIVE_FR) {
            assert!(!positive.contains(word), "word in both polarities: {word}");
        }
    }
}
