//! Porter stemming algorithm.
//!
//! Follows the published five-step algorithm with the common extensions used
//! by NLTK's default mode: a small table of irregular forms, words of one or
//! two letters left alone, `-ied`/`-ies` handled by length, `y → i` only after
//! a consonant, and the extra `alli`, `bli`, `fulli` and `logi` rules in
//! step 2. Vocabulary built with that stemmer lines up with what this one
//! produces.

type Condition = fn(&[u8]) -> bool;

struct Rule {
    suffix: &'static str,
    replacement: &'static str,
    condition: Option<Condition>,
}

const fn rule(suffix: &'static str, replacement: &'static str, condition: Condition) -> Rule {
    Rule {
        suffix,
        replacement,
        condition: Some(condition),
    }
}

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

fn is_consonant(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// Number of vowel→consonant transitions (`m` in `[C](VC)^m[V]`).
fn measure(stem: &[u8]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..stem.len() {
        let consonant = is_consonant(stem, i);
        if consonant && prev_vowel {
            m += 1;
        }
        prev_vowel = !consonant;
    }
    m
}

fn positive_measure(stem: &[u8]) -> bool {
    measure(stem) > 0
}

fn measure_gt_1(stem: &[u8]) -> bool {
    measure(stem) > 1
}

fn has_vowel(stem: &[u8]) -> bool {
    (0..stem.len()).any(|i| !is_consonant(stem, i))
}

fn ends_double_consonant(word: &[u8]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

/// `*o`: consonant-vowel-consonant ending where the last letter is not w, x or y.
fn ends_cvc(word: &[u8]) -> bool {
    let n = word.len();
    if n == 2 {
        return !is_consonant(word, 0) && is_consonant(word, 1);
    }
    n >= 3
        && is_consonant(word, n - 3)
        && !is_consonant(word, n - 2)
        && is_consonant(word, n - 1)
        && !matches!(word[n - 1], b'w' | b'x' | b'y')
}

/// The first rule whose suffix matches decides the outcome, even when its
/// condition fails.
fn apply_rules(word: String, rules: &[Rule]) -> String {
    for rule in rules {
        if let Some(stem) = word.strip_suffix(rule.suffix) {
            if rule.condition.is_none_or(|cond| cond(stem.as_bytes())) {
                return format!("{stem}{}", rule.replacement);
            }
            return word;
        }
    }
    word
}

fn step1a(word: String) -> String {
    if word.len() == 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}ie");
        }
    }
    const RULES: &[Rule] = &[
        Rule { suffix: "sses", replacement: "ss", condition: None },
        Rule { suffix: "ies", replacement: "i", condition: None },
        Rule { suffix: "ss", replacement: "ss", condition: None },
        Rule { suffix: "s", replacement: "", condition: None },
    ];
    apply_rules(word, RULES)
}

fn step1b(word: String) -> String {
    if let Some(stem) = word.strip_suffix("ied") {
        let replacement = if word.len() == 4 { "ie" } else { "i" };
        return format!("{stem}{replacement}");
    }

    if let Some(stem) = word.strip_suffix("eed") {
        if positive_measure(stem.as_bytes()) {
            return format!("{stem}ee");
        }
        return word;
    }

    let Some(stem) = ["ed", "ing"]
        .into_iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .filter(|stem| has_vowel(stem.as_bytes()))
    else {
        return word;
    };
    let stem = stem.to_owned();

    for (suffix, replacement) in [("at", "ate"), ("bl", "ble"), ("iz", "ize")] {
        if let Some(base) = stem.strip_suffix(suffix) {
            return format!("{base}{replacement}");
        }
    }

    let bytes = stem.as_bytes();
    if ends_double_consonant(bytes) {
        if matches!(bytes[bytes.len() - 1], b'l' | b's' | b'z') {
            return stem;
        }
        return stem[..stem.len() - 1].to_owned();
    }

    if measure(bytes) == 1 && ends_cvc(bytes) {
        return format!("{stem}e");
    }
    stem
}

fn step1c(word: String) -> String {
    const RULES: &[Rule] = &[rule("y", "i", |stem| {
        stem.len() > 1 && is_consonant(stem, stem.len() - 1)
    })];
    apply_rules(word, RULES)
}

fn step2(word: String) -> String {
    if let Some(stem) = word.strip_suffix("alli") {
        if positive_measure(stem.as_bytes()) {
            return step2(format!("{stem}al"));
        }
    }

    const RULES: &[Rule] = &[
        rule("ational", "ate", positive_measure),
        rule("tional", "tion", positive_measure),
        rule("enci", "ence", positive_measure),
        rule("anci", "ance", positive_measure),
        rule("izer", "ize", positive_measure),
        rule("bli", "ble", positive_measure),
        rule("alli", "al", positive_measure),
        rule("entli", "ent", positive_measure),
        rule("eli", "e", positive_measure),
        rule("ousli", "ous", positive_measure),
        rule("ization", "ize", positive_measure),
        rule("ation", "ate", positive_measure),
        rule("ator", "ate", positive_measure),
        rule("alism", "al", positive_measure),
        rule("iveness", "ive", positive_measure),
        rule("fulness", "ful", positive_measure),
        rule("ousness", "ous", positive_measure),
        rule("aliti", "al", positive_measure),
        rule("iviti", "ive", positive_measure),
        rule("biliti", "ble", positive_measure),
        rule("fulli", "ful", positive_measure),
        // The measure is taken on the word minus "ogi", i.e. the stem plus "l".
        rule("logi", "log", |stem| {
            let mut with_l = stem.to_vec();
            with_l.push(b'l');
            positive_measure(&with_l)
        }),
    ];
    apply_rules(word, RULES)
}

fn step3(word: String) -> String {
    const RULES: &[Rule] = &[
        rule("icate", "ic", positive_measure),
        rule("ative", "", positive_measure),
        rule("alize", "al", positive_measure),
        rule("iciti", "ic", positive_measure),
        rule("ical", "ic", positive_measure),
        rule("ful", "", positive_measure),
        rule("ness", "", positive_measure),
    ];
    apply_rules(word, RULES)
}

fn step4(word: String) -> String {
    const RULES: &[Rule] = &[
        rule("al", "", measure_gt_1),
        rule("ance", "", measure_gt_1),
        rule("ence", "", measure_gt_1),
        rule("er", "", measure_gt_1),
        rule("ic", "", measure_gt_1),
        rule("able", "", measure_gt_1),
        rule("ible", "", measure_gt_1),
        rule("ant", "", measure_gt_1),
        rule("ement", "", measure_gt_1),
        rule("ment", "", measure_gt_1),
        rule("ent", "", measure_gt_1),
        rule("ion", "", |stem| {
            measure_gt_1(stem) && matches!(stem.last(), Some(b's' | b't'))
        }),
        rule("ou", "", measure_gt_1),
        rule("ism", "", measure_gt_1),
        rule("ate", "", measure_gt_1),
        rule("iti", "", measure_gt_1),
        rule("ous", "", measure_gt_1),
        rule("ive", "", measure_gt_1),
        rule("ize", "", measure_gt_1),
    ];
    apply_rules(word, RULES)
}

fn step5a(word: String) -> String {
    if let Some(stem) = word.strip_suffix('e') {
        let m = measure(stem.as_bytes());
        if m > 1 || (m == 1 && !ends_cvc(stem.as_bytes())) {
            return stem.to_owned();
        }
    }
    word
}

fn step5b(word: String) -> String {
    if word.ends_with("ll") && measure_gt_1(&word.as_bytes()[..word.len() - 1]) {
        return word[..word.len() - 1].to_owned();
    }
    word
}

/// Reduces lowercase English words to their Porter stem.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Stem a single word.
    ///
    /// Input is lowercased first. Words containing anything other than ASCII
    /// letters are returned lowercased but otherwise untouched.
    #[must_use]
    pub fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if let Some((_, lemma)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word) {
            return (*lemma).to_owned();
        }
        if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word;
        }

        let word = step1a(word);
        let word = step1b(word);
        let word = step1c(word);
        let word = step2(word);
        let word = step3(word);
        let word = step4(word);
        let word = step5a(word);
        step5b(word)
    }
}
