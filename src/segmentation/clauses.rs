// ============================================================
// Layer 4 — Clause / Subtree Extraction Primitives
// ============================================================
// The shared dependency-tree walkers that the clause and
// verb-phrase strategies (and the cloze generator) build on.
//
// extract_clause is the subtle one: collecting a verb's full
// governed subtree would normally swallow a sibling clause
// joined by "and/but/or", because the sibling hangs off the
// verb via a conj edge. We therefore refuse to descend into
// any child whose dependency label is cc/conj AND whose part
// of speech is CCONJ territory — that pair of conditions is
// what distinguishes coordinating structure from, say, a
// conj-labeled noun inside a list.
//
// Subtree traversal order is depth-first, which is NOT document
// order, so results are re-sorted by token index before use.
// Token indices ARE arena indices, so a plain sort does it.
//
// Reference: Rust Book §8 (Vectors), §13 (Iterators)
//            Universal Dependencies: coordination analysis

use crate::domain::annotation::{AnnotatedDocument, PartOfSpeech};

/// The multilingual coordinating conjunctions split_by_conjunctions
/// recognises by surface text (Spanish, English, French "mais"
/// deliberately absent: "mas" covers the archaic Spanish form).
const CONJUNCTIONS: &[&str] = &["y", "pero", "mas", "sino", "o", "and", "but", "or", "yet"];

/// Collect `token` plus every token reachable through `children`,
/// excluding coordinating-conjunction children (and everything
/// below them). The result is sorted by token index, so calling
/// this twice on the same token yields identical output.
pub fn extract_clause(doc: &AnnotatedDocument, token: usize) -> Vec<usize> {
    let mut clause = vec![token];
    descend(doc, token, &mut clause, true);
    clause.sort_unstable();
    clause
}

/// Collect `token` plus its ENTIRE subtree with no exclusions
/// (the spaCy `Token.subtree` equivalent). Sorted by index.
pub fn subtree(doc: &AnnotatedDocument, token: usize) -> Vec<usize> {
    let mut out = vec![token];
    descend(doc, token, &mut out, false);
    out.sort_unstable();
    out
}

/// Depth-first collection of descendants. When `skip_coordination`
/// is set, a child that is both cc/conj-labeled and CCONJ-tagged
/// starts a sibling clause and is not entered.
///
/// Iterative with an explicit stack: a provider may emit an
/// arbitrarily deep parse chain, and the stack depth of the walk
/// must not depend on it. The builder guarantees heads are
/// acyclic, so every child is visited at most once.
fn descend(doc: &AnnotatedDocument, token: usize, out: &mut Vec<usize>, skip_coordination: bool) {
    let mut stack: Vec<usize> = doc.children(token).to_vec();
    while let Some(child) = stack.pop() {
        let t = &doc.tokens[child];
        if skip_coordination && t.dep.is_coordination() && t.pos == PartOfSpeech::Cconj {
            continue;
        }
        out.push(child);
        stack.extend_from_slice(doc.children(child));
    }
}

/// Split a token group at coordinating conjunctions, but only
/// once the running group is longer than `min_prefix` tokens —
/// this floor prevents spurious one-token fragments.
///
/// The conjunction that triggers a cut is dropped (it belongs to
/// neither side); a conjunction inside a still-short prefix is
/// kept as an ordinary token. If no cut happens, the INPUT group
/// is returned unchanged as the sole group, so callers can treat
/// a single-group result as "unsplit".
pub fn split_by_conjunctions(
    doc: &AnnotatedDocument,
    tokens: &[usize],
    min_prefix: usize,
) -> Vec<Vec<usize>> {
    let mut ordered: Vec<usize> = tokens.to_vec();
    ordered.sort_unstable();

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for i in ordered {
        let lower = doc.tokens[i].text.to_lowercase();
        if CONJUNCTIONS.contains(&lower.as_str()) && current.len() > min_prefix {
            groups.push(std::mem::take(&mut current));
        } else {
            current.push(i);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    if groups.len() > 1 {
        groups
    } else {
        vec![tokens.to_vec()]
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::{DepLabel, DocumentBuilder, PartOfSpeech};
    use crate::domain::language::Language;

    // "María canta y Pedro baila" — two clauses coordinated on the
    // first verb: canta(1) is ROOT; y(2) is cc, baila(4) is conj,
    // both headed by canta; Pedro(3) is nsubj of baila.
    fn coordinated_doc() -> crate::domain::annotation::AnnotatedDocument {
        let mut b = DocumentBuilder::new("María canta y Pedro baila", Language::Es);
        b.begin_sentence();
        b.token("María", "maría", PartOfSpeech::Propn, DepLabel::Nsubj, 1);
        b.token("canta", "cantar", PartOfSpeech::Verb, DepLabel::Root, 1);
        b.token("y", "y", PartOfSpeech::Cconj, DepLabel::Cc, 1);
        b.token("Pedro", "pedro", PartOfSpeech::Propn, DepLabel::Nsubj, 4);
        b.token("baila", "bailar", PartOfSpeech::Verb, DepLabel::Conj, 1);
        b.end_sentence("María canta y Pedro baila", None);
        b.build().unwrap()
    }

    #[test]
    fn test_clause_excludes_cconj_token() {
        let doc = coordinated_doc();
        let clause = extract_clause(&doc, 1);
        // Only the CCONJ "y" is cut: it is both conj-role and
        // CCONJ-tagged. The conj VERB "baila" fails the POS half
        // of the condition and stays in, subtree and all.
        assert_eq!(clause, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_clause_of_second_conjunct_is_complete() {
        let doc = coordinated_doc();
        let clause = extract_clause(&doc, 4);
        assert_eq!(clause, vec![3, 4]); // "Pedro baila"
    }

    #[test]
    fn test_conj_noun_is_not_excluded() {
        // "compra pan y queso" — queso is conj but NOUN, so the
        // CCONJ condition keeps it inside the clause; only the
        // CCONJ "y" itself is cut.
        let mut b = DocumentBuilder::new("compra pan y queso", Language::Es);
        b.begin_sentence();
        b.token("compra", "comprar", PartOfSpeech::Verb, DepLabel::Root, 0);
        b.token("pan", "pan", PartOfSpeech::Noun, DepLabel::Obj, 0);
        b.token("y", "y", PartOfSpeech::Cconj, DepLabel::Cc, 3);
        b.token("queso", "queso", PartOfSpeech::Noun, DepLabel::Conj, 1);
        b.end_sentence("compra pan y queso", None);
        let doc = b.build().unwrap();

        let clause = extract_clause(&doc, 0);
        assert_eq!(clause, vec![0, 1, 3]);
    }

    #[test]
    fn test_extract_clause_is_idempotent() {
        let doc = coordinated_doc();
        assert_eq!(extract_clause(&doc, 1), extract_clause(&doc, 1));
    }

    #[test]
    fn test_subtree_includes_coordination() {
        let doc = coordinated_doc();
        assert_eq!(subtree(&doc, 1), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_subtree_handles_deep_parse_chains() {
        // 20k tokens each headed by the previous one — a chain this
        // deep must not exhaust the call stack
        let n = 20_000usize;
        let mut b = DocumentBuilder::new("", Language::En);
        b.begin_sentence();
        for i in 0..n {
            let (dep, head) = if i == 0 {
                (DepLabel::Root, 0)
            } else {
                (DepLabel::Other("dep".into()), i - 1)
            };
            b.token(format!("w{i}"), format!("w{i}"), PartOfSpeech::Noun, dep, head);
        }
        b.end_sentence("chain", None);
        let doc = b.build().unwrap();

        let all = subtree(&doc, 0);
        assert_eq!(all.len(), n);
        assert_eq!(all[0], 0);
        assert_eq!(all[n - 1], n - 1);
    }

    #[test]
    fn test_short_group_is_never_split() {
        let doc = coordinated_doc();
        // 5 tokens, conjunction at position 2: the prefix has only
        // 2 tokens when "y" arrives, below the floor of 5, so the
        // input comes back as the single group.
        let tokens: Vec<usize> = (0..5).collect();
        let groups = split_by_conjunctions(&doc, &tokens, 5);
        assert_eq!(groups, vec![tokens]);
    }

    #[test]
    fn test_long_group_splits_and_drops_conjunction() {
        // Build a flat 13-token sentence with "and" in the middle
        let mut b = DocumentBuilder::new("", Language::En);
        b.begin_sentence();
        for i in 0..13 {
            let text = if i == 6 { "and".to_string() } else { format!("w{i}") };
            let pos = if i == 6 { PartOfSpeech::Cconj } else { PartOfSpeech::Noun };
            let dep = if i == 0 { DepLabel::Root } else { DepLabel::Other("dep".into()) };
            b.token(text.clone(), text, pos, dep, 0);
        }
        b.end_sentence("thirteen tokens", None);
        let doc = b.build().unwrap();

        let tokens: Vec<usize> = (0..13).collect();
        let groups = split_by_conjunctions(&doc, &tokens, 5);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], (0..6).collect::<Vec<_>>());
        // "and" (index 6) is in neither group
        assert_eq!(groups[1], (7..13).collect::<Vec<_>>());
    }
}
