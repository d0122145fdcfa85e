//! Exception tables consulted before the suffix heuristics.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Irregular verb inflections, contractions, and base forms the suffix
/// rules would otherwise mangle (`need` -> `ne`, `bring` -> `br`).
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    // be
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"), ("being", "be"),
    // have
    ("has", "have"), ("had", "have"), ("having", "have"),
    // do
    ("does", "do"), ("did", "do"), ("doing", "do"), ("done", "do"),
    // go
    ("goes", "go"), ("went", "go"), ("gone", "go"), ("going", "go"),
    // common verbs
    ("wants", "want"), ("wanted", "want"), ("wanting", "want"),
    ("likes", "like"), ("liked", "like"), ("liking", "like"),
    ("need", "need"), ("needs", "need"), ("needed", "need"), ("needing", "need"),
    ("drinks", "drink"), ("drank", "drink"), ("drunk", "drink"), ("drinking", "drink"),
    ("eats", "eat"), ("ate", "eat"), ("eaten", "eat"), ("eating", "eat"),
    ("says", "say"), ("said", "say"), ("saying", "say"),
    ("makes", "make"), ("made", "make"), ("making", "make"),
    ("gets", "get"), ("got", "get"), ("gotten", "get"), ("getting", "get"),
    ("takes", "take"), ("took", "take"), ("taken", "take"), ("taking", "take"),
    ("comes", "come"), ("came", "come"), ("coming", "come"),
    ("sees", "see"), ("saw", "see"), ("seen", "see"), ("seeing", "see"),
    ("knows", "know"), ("knew", "know"), ("known", "know"), ("knowing", "know"),
    ("thinks", "think"), ("thought", "think"), ("thinking", "think"),
    ("gives", "give"), ("gave", "give"), ("given", "give"), ("giving", "give"),
    ("finds", "find"), ("found", "find"), ("finding", "find"),
    ("tells", "tell"), ("told", "tell"), ("telling", "tell"),
    ("asks", "ask"), ("asked", "ask"), ("asking", "ask"),
    ("works", "work"), ("worked", "work"), ("working", "work"),
    ("feels", "feel"), ("felt", "feel"), ("feeling", "feel"),
    ("tries", "try"), ("tried", "try"), ("trying", "try"),
    ("leaves", "leave"), ("left", "leave"), ("leaving", "leave"),
    ("calls", "call"), ("called", "call"), ("calling", "call"),
    ("keeps", "keep"), ("kept", "keep"), ("keeping", "keep"),
    ("lets", "let"), ("letting", "let"),
    ("begins", "begin"), ("began", "begin"), ("begun", "begin"), ("beginning", "begin"),
    ("seems", "seem"), ("seemed", "seem"), ("seeming", "seem"),
    ("helps", "help"), ("helped", "help"), ("helping", "help"),
    ("shows", "show"), ("showed", "show"), ("shown", "show"), ("showing", "show"),
    ("hears", "hear"), ("heard", "hear"), ("hearing", "hear"),
    ("plays", "play"), ("played", "play"), ("playing", "play"),
    ("runs", "run"), ("ran", "run"), ("running", "run"),
    ("moves", "move"), ("moved", "move"), ("moving", "move"),
    ("lives", "live"), ("lived", "live"), ("living", "live"),
    ("believes", "believe"), ("believed", "believe"), ("believing", "believe"),
    ("bring", "bring"), ("brings", "bring"), ("brought", "bring"), ("bringing", "bring"),
    ("writes", "write"), ("wrote", "write"), ("written", "write"), ("writing", "write"),
    ("sits", "sit"), ("sat", "sit"), ("sitting", "sit"),
    ("stands", "stand"), ("stood", "stand"), ("standing", "stand"),
    ("loses", "lose"), ("lost", "lose"), ("losing", "lose"),
    ("pays", "pay"), ("paid", "pay"), ("paying", "pay"),
    ("meets", "meet"), ("met", "meet"), ("meeting", "meet"),
    ("includes", "include"), ("included", "include"), ("including", "include"),
    ("continues", "continue"), ("continued", "continue"), ("continuing", "continue"),
    ("sets", "set"), ("setting", "set"),
    ("learns", "learn"), ("learned", "learn"), ("learnt", "learn"), ("learning", "learn"),
    ("changes", "change"), ("changed", "change"), ("changing", "change"),
    ("leads", "lead"), ("led", "lead"), ("leading", "lead"),
    ("understands", "understand"), ("understood", "understand"), ("understanding", "understand"),
    ("watches", "watch"), ("watched", "watch"), ("watching", "watch"),
    ("follows", "follow"), ("followed", "follow"), ("following", "follow"),
    ("stops", "stop"), ("stopped", "stop"), ("stopping", "stop"),
    ("creates", "create"), ("created", "create"), ("creating", "create"),
    ("speaks", "speak"), ("spoke", "speak"), ("spoken", "speak"), ("speaking", "speak"),
    ("reads", "read"), ("reading", "read"),
    ("spends", "spend"), ("spent", "spend"), ("spending", "spend"),
    ("grows", "grow"), ("grew", "grow"), ("grown", "grow"), ("growing", "grow"),
    ("opens", "open"), ("opened", "open"), ("opening", "open"),
    ("walks", "walk"), ("walked", "walk"), ("walking", "walk"),
    ("wins", "win"), ("won", "win"), ("winning", "win"),
    ("offers", "offer"), ("offered", "offer"), ("offering", "offer"),
    ("remembers", "remember"), ("remembered", "remember"), ("remembering", "remember"),
    ("loves", "love"), ("loved", "love"), ("loving", "love"),
    ("considers", "consider"), ("considered", "consider"), ("considering", "consider"),
    ("appears", "appear"), ("appeared", "appear"), ("appearing", "appear"),
    ("buys", "buy"), ("bought", "buy"), ("buying", "buy"),
    ("waits", "wait"), ("waited", "wait"), ("waiting", "wait"),
    ("serves", "serve"), ("served", "serve"), ("serving", "serve"),
    ("dies", "die"), ("died", "die"), ("dying", "die"),
    ("sends", "send"), ("sent", "send"), ("sending", "send"),
    ("expects", "expect"), ("expected", "expect"), ("expecting", "expect"),
    ("builds", "build"), ("built", "build"), ("building", "build"),
    ("stays", "stay"), ("stayed", "stay"), ("staying", "stay"),
    ("falls", "fall"), ("fell", "fall"), ("fallen", "fall"), ("falling", "fall"),
    ("cuts", "cut"), ("cutting", "cut"),
    ("reaches", "reach"), ("reached", "reach"), ("reaching", "reach"),
    ("kills", "kill"), ("killed", "kill"), ("killing", "kill"),
    ("remains", "remain"), ("remained", "remain"), ("remaining", "remain"),
    // subject contractions
    ("i'm", "i"), ("you're", "you"), ("he's", "he"), ("she's", "she"),
    ("it's", "it"), ("we're", "we"), ("they're", "they"),
    // negative contractions
    ("don't", "not"), ("doesn't", "not"), ("didn't", "not"), ("won't", "not"),
    ("wouldn't", "not"), ("can't", "not"), ("couldn't", "not"), ("shouldn't", "not"),
    ("isn't", "not"), ("aren't", "not"), ("wasn't", "not"), ("weren't", "not"),
    ("haven't", "not"), ("hasn't", "not"), ("hadn't", "not"),
];

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
];

static FORMS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR_FORMS.iter().copied().collect());

static PLURALS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR_PLURALS.iter().copied().collect());

pub fn irregular_form(token: &str) -> Option<&'static str> {
    FORMS.get(token).copied()
}

pub fn irregular_plural(token: &str) -> Option<&'static str> {
    PLURALS.get(token).copied()
}

/// Every base form reachable through the exception tables.
pub fn known_lemmas() -> impl Iterator<Item = &'static str> {
    IRREGULAR_FORMS
        .iter()
        .chain(IRREGULAR_PLURALS.iter())
        .map(|(_, lemma)| *lemma)
}
