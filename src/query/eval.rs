//! Boolean query evaluation over posting lists (spec.md §4.5.3).
//!
//! The original's reallocating stack-of-queues (`query.c`'s `stack`
//! array of `queue_t *`) becomes a `Vec<VecDeque<RankedDoc>>`; its
//! in-place `get_union` restore-dance becomes plain ownership transfer —
//! there is nothing to restore because nothing is borrowed.

use crate::index::Index;
use crate::page::PageId;
use crate::query::tokenizer::Token;
use std::collections::{HashMap, VecDeque};

/// One ranked result. `url`/`title`/`snippet` start empty and are filled
/// in by presentation (spec.md §4.5.4); only `doc_id` and `score` are
/// meaningful coming out of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedDoc {
    pub doc_id: PageId,
    pub score: i64,
    pub url: Option<String>,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

impl RankedDoc {
    fn new(doc_id: PageId, score: i64) -> Self {
        Self {
            doc_id,
            score,
            url: None,
            title: None,
            snippet: None,
        }
    }
}

type Operand = VecDeque<RankedDoc>;

/// Evaluates a validated, implicit-AND-expanded token sequence against
/// `index` (spec.md §4.5.3).
///
/// Non-operator tokens push a posting-list operand (an empty one for a
/// word missing from the index). The most recently seen operator sticks
/// until overwritten by the next one: when it is `and`, the operand just
/// pushed is immediately intersected with the one before it; `or` defers
/// combination. After all tokens are consumed, whatever operands remain
/// on the stack are folded pairwise with union until one remains.
pub fn evaluate(tokens: &[Token], index: &Index) -> Vec<RankedDoc> {
    let mut stack: Vec<Operand> = Vec::new();
    let mut pending_and = false;

    for token in tokens {
        match token {
            Token::And => pending_and = true,
            Token::Or => pending_and = false,
            Token::Word(word) => {
                stack.push(operand_for(word, index));
                if pending_and {
                    let qp1 = stack.pop().expect("just pushed");
                    let qp2 = stack.pop().expect("and requires a left operand");
                    stack.push(intersect(qp1, qp2));
                }
            }
        }
    }

    while stack.len() > 1 {
        let qp1 = stack.pop().expect("len > 1");
        let qp2 = stack.pop().expect("len > 1");
        stack.push(union(qp1, qp2));
    }

    stack.pop().unwrap_or_default().into_iter().collect()
}

fn operand_for(word: &str, index: &Index) -> Operand {
    match index.get(word) {
        Some(entry) => entry
            .postings
            .iter()
            .map(|p| RankedDoc::new(p.doc_id, p.count as i64))
            .collect(),
        None => Operand::new(),
    }
}

/// Keeps docs present in both `qp1` and `qp2`, scoring each as the min of
/// its two operand scores (spec.md §4.5.3). Order follows `qp1`.
fn intersect(qp1: Operand, qp2: Operand) -> Operand {
    let scores: HashMap<PageId, i64> = qp2.iter().map(|d| (d.doc_id, d.score)).collect();
    qp1.into_iter()
        .filter_map(|mut doc| {
            scores.get(&doc.doc_id).map(|&other| {
                doc.score = doc.score.min(other);
                doc
            })
        })
        .collect()
}

/// Merges `qp2` into `qp1`: docs present in both get the sum of their
/// scores (spec.md §4.5.3); docs only in `qp2` are appended in `qp2`'s
/// order.
fn union(mut qp1: Operand, qp2: Operand) -> Operand {
    let mut positions: HashMap<PageId, usize> =
        qp1.iter().enumerate().map(|(i, d)| (d.doc_id, i)).collect();
    for doc in qp2 {
        if let Some(&pos) = positions.get(&doc.doc_id) {
            qp1[pos].score += doc.score;
        } else {
            positions.insert(doc.doc_id, qp1.len());
            qp1.push_back(doc);
        }
    }
    qp1
}
