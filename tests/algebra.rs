use std::collections::BTreeSet;

use text_query::{parse_query, Query, TextIndex};

const VOCABULARY: &[&str] = &["hair", "Alice", "Daddy", "wind", "fiery"];

fn index() -> TextIndex {
    TextIndex::new(vec!["Alice has long hair",
                        "Daddy likes his Alice",
                        "wind blows through hair",
                        "",
                        "the fiery bird"])
}

/// Every query with at most one operator over the vocabulary.
fn queries() -> Vec<Query> {
    let words: Vec<_> = VOCABULARY.iter().map(Query::word).collect();
    let mut queries = words.clone();
    for a in &words {
        queries.push(!a);
        for b in &words {
            queries.push(a & b);
            queries.push(a | b);
        }
    }
    queries
}

fn lines(query: &Query, index: &TextIndex) -> BTreeSet<usize> {
    query.eval(index).line_set().clone()
}

#[test]
fn test_scenario() {
    let index = TextIndex::new(vec!["Alice has long hair",
                                    "Daddy likes his Alice",
                                    "wind blows through hair"]);
    let word = |term: &str| Query::word(term);
    let expect = |query: Query, expected: &[usize]| {
        assert_eq!(query.eval(&index).lines().collect::<Vec<_>>(), expected, "{}", query);
    };
    expect(word("hair"), &[0, 2]);
    expect(!word("Alice"), &[2]);
    expect(word("hair") | word("Alice"), &[0, 1, 2]);
    expect(word("hair") & word("Alice"), &[0]);
    expect(word("fiery") & word("bird") | word("wind"), &[2]);
}

#[test]
fn test_unknown_words_match_nothing() {
    let index = index();
    for term in &["bird!", "alice", "HAIR", "nowhere"] {
        assert!(Query::word(term).eval(&index).is_empty());
    }
    assert!(!index.contains_term("nowhere"));
}

#[test]
fn test_double_complement() {
    let index = index();
    for q in queries() {
        assert_eq!(lines(&!!q.clone(), &index), lines(&q, &index), "{}", q);
    }
}

#[test]
fn test_complement_partitions_document() {
    let index = index();
    for q in queries() {
        let matched = lines(&q, &index);
        let unmatched = lines(&!&q, &index);
        assert!(matched.is_disjoint(&unmatched), "{}", q);
        assert_eq!(matched.len() + unmatched.len(), index.len(), "{}", q);
    }
}

#[test]
fn test_union_and_intersection() {
    let index = index();
    for a in queries() {
        let la = lines(&a, &index);
        for b in queries() {
            let lb = lines(&b, &index);
            let union: BTreeSet<_> = la.union(&lb).cloned().collect();
            let intersection: BTreeSet<_> = la.intersection(&lb).cloned().collect();
            assert_eq!(lines(&(&a | &b), &index), union);
            assert_eq!(lines(&(&b | &a), &index), union);
            assert_eq!(lines(&(&a & &b), &index), intersection);
            assert_eq!(lines(&(&b & &a), &index), intersection);
        }
    }
}

#[test]
fn test_de_morgan() {
    let index = index();
    for a in queries() {
        for b in queries() {
            assert_eq!(lines(&!(&a & &b), &index), lines(&(!&a | !&b), &index));
            assert_eq!(lines(&!(&a | &b), &index), lines(&(!&a & !&b), &index));
        }
    }
}

#[test]
fn test_distributive() {
    let index = index();
    let words: Vec<_> = VOCABULARY.iter().map(Query::word).collect();
    let operands: Vec<_> = words.iter().cloned().chain(words.iter().map(|w| !w)).collect();
    for a in &operands {
        for b in &operands {
            for c in &operands {
                assert_eq!(lines(&(a & &(b | c)), &index),
                           lines(&(&(a & b) | &(a & c)), &index));
            }
        }
    }
}

#[test]
fn test_description_is_rep() {
    let index = index();
    for a in queries() {
        for b in queries() {
            for q in vec![&a & &b, &a | &b, !&a] {
                assert_eq!(q.eval(&index).description(), q.rep());
                assert_eq!(parse_query(&q.rep()).unwrap(), q);
            }
        }
    }
}

#[test]
fn test_results_are_reproducible() {
    let index = index();
    for q in queries() {
        assert_eq!(q.eval(&index), q.eval(&index));
    }
}

#[test]
fn test_results_from_different_documents_do_not_mix() {
    let first = index();
    let second = index();
    let hair = Query::word("hair");
    let a = hair.eval(&first);
    let b = hair.eval(&second);
    assert_ne!(a, b);
    assert!(a.union(&b).is_err());
    assert!(a.intersection(&b).is_err());
    assert_eq!(a.union(&hair.eval(&first)).unwrap().description(), "(hair | hair)");
}
