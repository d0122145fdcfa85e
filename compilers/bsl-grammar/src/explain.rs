use bsl_protocol::{GrammarContext, QuestionType};

const WH_EXPLANATION: &str = "In BSL wh-questions, the question word (what, where, etc.) goes at the END.";
const YES_NO_EXPLANATION: &str =
    "In BSL yes/no questions, the word order is similar but facial expressions (raised eyebrows) indicate it's a question.";
const TOPIC_COMMENT_EXPLANATION: &str =
    "BSL uses topic-comment order: what you're talking about (topic) comes first, then the comment about it.";

/// Human-readable note on the rule applied, chosen by question type alone.
pub fn explain_bsl_order(context: &GrammarContext) -> &'static str {
    match context.question_type {
        QuestionType::Wh => WH_EXPLANATION,
        QuestionType::YesNo => YES_NO_EXPLANATION,
        QuestionType::None => TOPIC_COMMENT_EXPLANATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanations_by_type() {
        let mut context = GrammarContext::default();
        assert!(explain_bsl_order(&context).starts_with("BSL uses topic-comment"));

        context.question_type = QuestionType::YesNo;
        assert!(explain_bsl_order(&context).contains("raised eyebrows"));

        context.question_type = QuestionType::Wh;
        assert!(explain_bsl_order(&context).ends_with("goes at the END."));
    }
}
