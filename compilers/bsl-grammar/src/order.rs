use bsl_protocol::{Gloss, GrammarContext, QuestionType, WordRole};

use crate::wordlists::role_of;

/// WH-questions: TIME TOPIC SUBJECT VERB WH ("NAME YOU WHAT").
const WH_QUESTION_ORDER: [WordRole; 5] = [
    WordRole::Time,
    WordRole::Object,
    WordRole::Subject,
    WordRole::Verb,
    WordRole::WhWord,
];

/// Statements and yes/no questions: TIME TOPIC SUBJECT VERB, with any stray
/// WH-word trailing ("COFFEE YOU WANT").
const STATEMENT_ORDER: [WordRole; 5] = [
    WordRole::Time,
    WordRole::Object,
    WordRole::Subject,
    WordRole::Verb,
    WordRole::WhWord,
];

fn bucket(role: WordRole) -> usize {
    match role {
        WordRole::Time => 0,
        WordRole::WhWord => 1,
        WordRole::Subject => 2,
        WordRole::Verb => 3,
        WordRole::Object => 4,
    }
}

/// Rebuilds a gloss list in BSL order.
///
/// Each gloss lands in exactly one role bucket; buckets keep input order and
/// are emitted in the order the question type calls for. Empty strings are
/// dropped, everything else comes back uppercased.
pub fn apply_bsl_word_order<S: AsRef<str>>(glosses: &[S], context: &GrammarContext) -> Vec<Gloss> {
    let mut buckets: [Vec<Gloss>; 5] = Default::default();

    for gloss in glosses.iter().filter_map(|g| Gloss::new(g.as_ref())) {
        let role = role_of(gloss.as_str());
        buckets[bucket(role)].push(gloss);
    }

    let order = match context.question_type {
        QuestionType::Wh => &WH_QUESTION_ORDER,
        QuestionType::YesNo | QuestionType::None => &STATEMENT_ORDER,
    };

    let mut result = Vec::with_capacity(glosses.len());
    for role in order {
        result.append(&mut buckets[bucket(*role)]);
    }

    log::debug!(
        "bsl order ({}): {:?}",
        context.question_type,
        result.iter().map(Gloss::as_str).collect::<Vec<_>>()
    );
    result
}
