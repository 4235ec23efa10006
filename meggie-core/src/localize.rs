//! Ingredient vocabulary localization.
//!
//! Outbound lookup queries use globally recognized names ("cottage cheese"),
//! while generated text shown to the user should use the local names hostel
//! students actually say ("paneer").

use std::sync::LazyLock;

use regex::Regex;

/// Local term -> global term, used for outbound lookup queries.
const LOCAL_TO_GLOBAL: &[(&str, &str)] = &[
    ("paneer", "cottage cheese"),
    ("maggi", "instant noodles"),
    ("poha", "flattened rice"),
    ("atta", "wheat flour"),
    ("roti", "flatbread"),
    ("chapati", "flatbread"),
    ("chaas", "buttermilk"),
    ("curd", "yogurt"),
    ("dahi", "yogurt"),
    ("bhindi", "okra"),
    ("methi", "fenugreek leaves"),
    ("jeera", "cumin seeds"),
    ("haldi", "turmeric"),
    ("dhania", "coriander"),
    ("aloo", "potato"),
    ("pyaz", "onion"),
    ("tamatar", "tomato"),
    ("dal", "lentils"),
    ("rajma", "kidney beans"),
    ("chana", "chickpeas"),
    ("upma", "semolina"),
    ("suji", "semolina"),
    ("besan", "chickpea flour"),
    ("ghee", "clarified butter"),
];

/// Global term -> local term, applied in order to generated text.
///
/// Not the exact inverse of `LOCAL_TO_GLOBAL`: semolina comes back as "rava".
const GLOBAL_TO_LOCAL: &[(&str, &str)] = &[
    ("cottage cheese", "paneer"),
    ("instant noodles", "maggi"),
    ("flattened rice", "poha"),
    ("wheat flour", "atta"),
    ("flatbread", "roti"),
    ("buttermilk", "chaas"),
    ("yogurt", "curd"),
    ("okra", "bhindi"),
    ("fenugreek leaves", "methi"),
    ("cumin seeds", "jeera"),
    ("turmeric", "haldi"),
    ("coriander", "dhania"),
    ("potato", "aloo"),
    ("onion", "pyaz"),
    ("tomato", "tamatar"),
    ("lentils", "dal"),
    ("kidney beans", "rajma"),
    ("chickpeas", "chana"),
    ("semolina", "rava"),
    ("chickpea flour", "besan"),
    ("clarified butter", "ghee"),
];

static LOCALIZERS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    GLOBAL_TO_LOCAL
        .iter()
        .map(|(global, local)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(global));
            // Patterns are built from the constant table above.
            let re = Regex::new(&pattern).expect("invalid localization pattern");
            (re, *local)
        })
        .collect()
});

/// Map a local ingredient name to its global equivalent.
///
/// The lookup is trimmed and case-insensitive; unknown terms come back as given.
pub fn to_global(term: &str) -> String {
    let key = term.trim().to_lowercase();

    LOCAL_TO_GLOBAL
        .iter()
        .find(|(local, _)| *local == key)
        .map(|(_, global)| global.to_string())
        .unwrap_or_else(|| term.to_string())
}

/// Map every ingredient in a list to its global name.
pub fn to_global_all(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| to_global(t)).collect()
}

/// Replace whole-word global ingredient names in `text` with local names.
pub fn localize_text(text: &str) -> String {
    let mut localized = text.to_string();

    for (re, local) in LOCALIZERS.iter() {
        if re.is_match(&localized) {
            localized = re.replace_all(&localized, *local).into_owned();
        }
    }

    localized
}
