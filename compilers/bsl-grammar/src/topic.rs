use crate::wordlists::{is_pronoun, is_time_word, is_verb};

/// Topic fronting for a PRONOUN ... VERB ... NOUN pattern.
///
/// When a pronoun precedes the first verb, every later word that is not a
/// pronoun, verb or time word is moved to the front, in order. Anything else
/// is returned as given. Case is preserved.
pub fn reorder_topic_comment<S: AsRef<str>>(glosses: &[S]) -> Vec<String> {
    let words: Vec<&str> = glosses.iter().map(AsRef::as_ref).collect();

    let pronoun_idx = words.iter().position(|w| is_pronoun(w));
    let verb_idx = words.iter().position(|w| is_verb(w));

    let verb_idx = match (pronoun_idx, verb_idx) {
        (Some(p), Some(v)) if v > p => v,
        _ => return words.iter().map(|w| w.to_string()).collect(),
    };

    let is_topic = |i: usize, w: &str| i > verb_idx && !is_pronoun(w) && !is_verb(w) && !is_time_word(w);

    let (topic, comment): (Vec<(usize, &str)>, Vec<(usize, &str)>) =
        words.iter().copied().enumerate().partition(|(i, w)| is_topic(*i, *w));

    if topic.is_empty() {
        return words.iter().map(|w| w.to_string()).collect();
    }

    topic
        .into_iter()
        .chain(comment)
        .map(|(_, w)| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_trailing_nouns_forward() {
        let out = reorder_topic_comment(&["I", "WANT", "COFFEE"]);
        assert_eq!(out, vec!["COFFEE", "I", "WANT"]);

        let out = reorder_topic_comment(&["she", "like", "green", "tea", "today"]);
        assert_eq!(out, vec!["green", "tea", "she", "like", "today"]);
    }

    #[test]
    fn test_leading_nouns_stay_put() {
        let out = reorder_topic_comment(&["COFFEE", "I", "WANT", "COFFEE"]);
        assert_eq!(out, vec!["COFFEE", "COFFEE", "I", "WANT"]);
    }

    #[test]
    fn test_requires_pronoun_before_verb() {
        let out = reorder_topic_comment(&["WANT", "YOU", "COFFEE"]);
        assert_eq!(out, vec!["WANT", "YOU", "COFFEE"]);

        let out = reorder_topic_comment(&["CAT", "SLEEP"]);
        assert_eq!(out, vec!["CAT", "SLEEP"]);
    }

    #[test]
    fn test_nothing_after_verb() {
        let out = reorder_topic_comment(&["WE", "GO", "TOMORROW"]);
        assert_eq!(out, vec!["WE", "GO", "TOMORROW"]);
    }

    #[test]
    fn test_empty() {
        let empty: [&str; 0] = [];
        assert!(reorder_topic_comment(&empty).is_empty());
    }
}
