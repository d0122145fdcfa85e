pub mod tables;

/// Reduces a lowercase token to its base form.
///
/// Lookup order: irregular forms, irregular plurals, then the first suffix
/// rule that applies. Tokens no rule touches come back unchanged.
///
/// The suffix rules never restore a dropped silent "e", so words outside the
/// exception tables can come back truncated (`hoped` -> `hop`, `baking` -> `bak`).
pub fn lemmatize(token: &str) -> String {
    // 1. Exception tables
    if let Some(lemma) = tables::irregular_form(token) {
        return lemma.to_string();
    }
    if let Some(lemma) = tables::irregular_plural(token) {
        return lemma.to_string();
    }

    // 2. Suffix heuristics
    strip_suffix(token).unwrap_or_else(|| token.to_string())
}

/// Lemmatizes every token independently, preserving order.
pub fn lemmatize_all<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| lemmatize(t.as_ref())).collect()
}

fn strip_suffix(word: &str) -> Option<String> {
    let len = word.chars().count();

    // carries -> carry
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(format!("{stem}y"));
        }
    }

    // watches -> watch; other "-es" words fall through to the later rules
    if len > 3 {
        if let Some(stem) = word.strip_suffix("es") {
            if ["sh", "ch", "x", "s", "z"].iter().any(|end| stem.ends_with(end)) {
                return Some(stem.to_string());
            }
        }
    }

    // walked -> walk, stopped -> stop, liked -> lik
    if len > 3 {
        if let Some(stem) = word.strip_suffix("ed") {
            if stem.ends_with('e') {
                return Some(stem.to_string());
            }
            return Some(undouble(stem));
        }
    }

    // running -> run, making -> mak
    if len > 4 {
        if let Some(stem) = word.strip_suffix("ing") {
            return Some(undouble(stem));
        }
    }

    // cats -> cat, but not glass
    if len > 2 && !word.ends_with("ss") {
        if let Some(stem) = word.strip_suffix('s') {
            return Some(stem.to_string());
        }
    }

    None
}

/// Drops one of a doubled final letter (`stopp` -> `stop`) on stems longer than two.
fn undouble(stem: &str) -> String {
    let mut rev = stem.chars().rev();
    let doubled = stem.chars().count() > 2 && matches!((rev.next(), rev.next()), (Some(a), Some(b)) if a == b);

    if doubled {
        let mut out = stem.to_string();
        out.pop();
        out
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_irregular_forms() {
        assert_eq!(lemmatize("went"), "go");
        assert_eq!(lemmatize("was"), "be");
        assert_eq!(lemmatize("brought"), "bring");
        assert_eq!(lemmatize("liked"), "like");
        assert_eq!(lemmatize("making"), "make");
    }

    #[test]
    fn test_contractions() {
        assert_eq!(lemmatize("don't"), "not");
        assert_eq!(lemmatize("hadn't"), "not");
        assert_eq!(lemmatize("i'm"), "i");
        assert_eq!(lemmatize("they're"), "they");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("geese"), "goose");
        assert_eq!(lemmatize("people"), "person");
    }

    #[test]
    fn test_ies_rule() {
        assert_eq!(lemmatize("carries"), "carry");
        assert_eq!(lemmatize("babies"), "baby");
        // too short for the "ies" rule, caught by the plain "s" rule
        assert_eq!(lemmatize("ties"), "tie");
    }

    #[test]
    fn test_es_rule() {
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("wishes"), "wish");
        assert_eq!(lemmatize("buzzes"), "buzz");
        assert_eq!(lemmatize("glasses"), "glass");
        // stem "hop" does not qualify, so the "s" rule applies
        assert_eq!(lemmatize("hopes"), "hope");
    }

    #[test]
    fn test_ed_rule() {
        assert_eq!(lemmatize("jumped"), "jump");
        assert_eq!(lemmatize("hugged"), "hug");
        assert_eq!(lemmatize("hoped"), "hop");
        assert_eq!(lemmatize("bed"), "bed");
    }

    #[test]
    fn test_ing_rule() {
        assert_eq!(lemmatize("jumping"), "jump");
        assert_eq!(lemmatize("swimming"), "swim");
        assert_eq!(lemmatize("baking"), "bak");
        assert_eq!(lemmatize("sleeping"), "sleep");
        assert_eq!(lemmatize("king"), "king");
    }

    #[test]
    fn test_s_rule() {
        assert_eq!(lemmatize("cats"), "cat");
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("us"), "us");
    }

    #[test]
    fn test_untouched() {
        assert_eq!(lemmatize("coffee"), "coffee");
        assert_eq!(lemmatize(""), "");
        assert_eq!(lemmatize("42"), "42");
    }

    #[test]
    fn test_exception_lemmas_are_fixed_points() {
        for lemma in tables::known_lemmas() {
            assert_eq!(lemmatize(lemma), lemma, "lemma {lemma:?} is not stable");
        }
    }

    #[test]
    fn test_lemmatize_all_keeps_order() {
        let out = lemmatize_all(&["cats", "went", "shop"]);
        assert_eq!(out, vec!["cat", "go", "shop"]);
    }

    proptest! {
        #[test]
        fn test_idempotent_on_base_forms(word in "[a-z]{1,8}") {
            let suffixed = ["s", "ed", "ing"].iter().any(|s| word.ends_with(s));
            prop_assume!(!suffixed);
            prop_assume!(tables::irregular_form(&word).is_none());
            prop_assume!(tables::irregular_plural(&word).is_none());

            let once = lemmatize(&word);
            prop_assert_eq!(&once, &word);
            prop_assert_eq!(lemmatize(&once), once);
        }

        #[test]
        fn test_regular_plural_round_trip(stem in "[b-df-hj-np-rtv-z][aeiou][b-df-hj-np-rtv-z]{2}") {
            // CVCC stems without a final "s" only ever meet the plain "s" rule
            prop_assert_eq!(lemmatize(&format!("{stem}s")), stem);
        }
    }
}
