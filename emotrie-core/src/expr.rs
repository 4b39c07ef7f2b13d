//! Factoring a trie into a regular-expression tree
//!
//! The tree is dialect-independent; [`crate::render`] turns it into text.
//!
//! Factoring rules, applied bottom-up at every node:
//! - a single continuation is concatenated onto its code point;
//! - continuations whose remaining expression is identical are grouped, their
//!   leading code points collapsing into a character class;
//! - a trailing element shared by every alternative is hoisted after the
//!   alternation;
//! - a terminal node with continuations becomes a greedy optional, so longer
//!   matches are tried before stopping.
//!
//! Alternatives produced for one node always start with pairwise-disjoint
//! code points, so their relative order never decides which one matches.

use crate::trie::Trie;
use std::collections::HashMap;

/// Regular-expression tree over code points
#[derive(Debug)]
pub enum Expr {
    /// The empty string
    Empty,
    /// Matches no string at all
    Nothing,
    /// One code point
    Char(u32),
    /// Any one of two or more code points, ascending
    Class(Vec<u32>),
    /// Two or more parts in sequence; never nested, never containing `Empty`
    Concat(Vec<Expr>),
    /// Two or more alternatives, each matching only non-empty strings
    Alt(Vec<Expr>),
    /// The inner expression or nothing, preferring the inner expression
    Optional(Box<Expr>),
}

impl Expr {
    /// Factor the whole trie. An empty trie yields [`Expr::Nothing`].
    pub fn from_trie(trie: &Trie) -> Expr {
        if trie.is_empty() {
            return Expr::Nothing;
        }
        Factoring::new(trie).run(trie)
    }

    /// Single code point or class over `code_points`
    pub fn class(mut code_points: Vec<u32>) -> Expr {
        code_points.sort_unstable();
        code_points.dedup();
        match code_points.len() {
            0 => Expr::Nothing,
            1 => Expr::Char(code_points[0]),
            _ => Expr::Class(code_points),
        }
    }

    /// Normalizing concatenation
    pub fn concat(parts: Vec<Expr>) -> Expr {
        let mut flat = Vec::with_capacity(parts.len());
        for mut part in parts {
            match &mut part {
                Expr::Empty => continue,
                Expr::Nothing => return Expr::Nothing,
                Expr::Concat(inner) => {
                    flat.append(inner);
                    continue;
                }
                _ => {}
            }
            flat.push(part);
        }
        match flat.len() {
            0 => Expr::Empty,
            1 => flat.pop().unwrap_or(Expr::Empty),
            _ => Expr::Concat(flat),
        }
    }

    /// Normalizing alternation
    pub fn alt(alternatives: Vec<Expr>) -> Expr {
        let mut flat = Vec::with_capacity(alternatives.len());
        for mut alternative in alternatives {
            match &mut alternative {
                Expr::Nothing => continue,
                Expr::Alt(inner) => {
                    flat.append(inner);
                    continue;
                }
                _ => {}
            }
            flat.push(alternative);
        }
        match flat.len() {
            0 => Expr::Nothing,
            1 => flat.pop().unwrap_or(Expr::Nothing),
            _ => Expr::Alt(flat),
        }
    }

    /// Normalizing optional
    pub fn optional(inner: Expr) -> Expr {
        match inner {
            Expr::Empty | Expr::Nothing => Expr::Empty,
            already @ Expr::Optional(_) => already,
            other => Expr::Optional(Box::new(other)),
        }
    }

    /// Whether this expression matches exactly one code point
    pub fn is_single_char(&self) -> bool {
        matches!(self, Expr::Char(_) | Expr::Class(_))
    }

    fn has_subexpressions(&self) -> bool {
        matches!(self, Expr::Concat(_) | Expr::Alt(_) | Expr::Optional(_))
    }
}

// Trees can nest as deep as the longest literal, so comparison and drop walk
// an explicit stack instead of recursing.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Expr::Empty, Expr::Empty) | (Expr::Nothing, Expr::Nothing) => {}
                (Expr::Char(a), Expr::Char(b)) if a == b => {}
                (Expr::Class(a), Expr::Class(b)) if a == b => {}
                (Expr::Concat(a), Expr::Concat(b)) | (Expr::Alt(a), Expr::Alt(b))
                    if a.len() == b.len() =>
                {
                    pending.extend(a.iter().zip(b.iter()));
                }
                (Expr::Optional(a), Expr::Optional(b)) => pending.push((&**a, &**b)),
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

impl Drop for Expr {
    fn drop(&mut self) {
        let nested = match self {
            Expr::Concat(parts) | Expr::Alt(parts) => {
                parts.iter().any(Expr::has_subexpressions)
            }
            Expr::Optional(inner) => inner.has_subexpressions(),
            _ => false,
        };
        if !nested {
            return;
        }

        let mut stack = vec![std::mem::replace(self, Expr::Empty)];
        while let Some(mut expr) = stack.pop() {
            match &mut expr {
                Expr::Concat(parts) | Expr::Alt(parts) => stack.append(parts),
                Expr::Optional(inner) => stack.push(std::mem::replace(&mut **inner, Expr::Empty)),
                _ => {}
            }
        }
    }
}

/// Bottom-up factoring state, one slot per trie node.
///
/// Each node's result is a sequence stored last part first, so prefixing the
/// code point that leads into it is a push. Two nodes get the same shape id
/// exactly when their subtries are identical, which is exactly when their
/// factored expressions are equal.
struct Factoring {
    sequences: Vec<Vec<Expr>>,
    shapes: Vec<usize>,
    interned: HashMap<(bool, Vec<(u32, usize)>), usize>,
}

struct Group {
    heads: Vec<u32>,
    tail: Vec<Expr>,
}

impl Factoring {
    fn new(trie: &Trie) -> Self {
        let count = trie.node_count();
        Self {
            sequences: std::iter::repeat_with(Vec::new).take(count).collect(),
            shapes: vec![0; count],
            interned: HashMap::new(),
        }
    }

    fn run(mut self, trie: &Trie) -> Expr {
        for id in trie.post_order() {
            let node = trie.node(id);

            let key = (
                node.is_terminal(),
                node.children()
                    .map(|(cp, child)| (cp, self.shapes[child.index()]))
                    .collect::<Vec<_>>(),
            );
            let next = self.interned.len();
            self.shapes[id.index()] = *self.interned.entry(key).or_insert(next);

            // Children come out in ascending order, so groups are ordered by
            // their smallest head.
            let mut groups: Vec<Group> = Vec::with_capacity(node.child_count());
            let mut slots: HashMap<usize, usize> = HashMap::with_capacity(node.child_count());
            for (cp, child) in node.children() {
                let tail = std::mem::take(&mut self.sequences[child.index()]);
                match slots.get(&self.shapes[child.index()]) {
                    Some(&slot) => groups[slot].heads.push(cp),
                    None => {
                        slots.insert(self.shapes[child.index()], groups.len());
                        groups.push(Group {
                            heads: vec![cp],
                            tail,
                        });
                    }
                }
            }

            let mut alternatives: Vec<Vec<Expr>> = groups
                .into_iter()
                .map(|group| {
                    let mut sequence = group.tail;
                    prepend(&mut sequence, Expr::class(group.heads));
                    sequence
                })
                .collect();

            let body = match alternatives.len() {
                0 | 1 => alternatives.pop().unwrap_or_default(),
                _ => hoist_common_suffix(alternatives),
            };

            self.sequences[id.index()] = if node.is_terminal() && !body.is_empty() {
                vec![Expr::optional(seal(body))]
            } else {
                body
            };
        }

        let root = std::mem::take(&mut self.sequences[trie.root().index()]);
        seal(root)
    }
}

/// Put `expr` in front of a last-part-first sequence
fn prepend(sequence: &mut Vec<Expr>, mut expr: Expr) {
    match &mut expr {
        Expr::Empty => {}
        Expr::Concat(parts) => sequence.extend(parts.drain(..).rev()),
        _ => sequence.push(expr),
    }
}

/// Turn a last-part-first sequence into an expression
fn seal(mut sequence: Vec<Expr>) -> Expr {
    sequence.reverse();
    Expr::concat(sequence)
}

/// `ab|cb` becomes `(?:a|c)b`, and `b|ab` becomes `a?b`.
///
/// Takes and returns last-part-first sequences.
fn hoist_common_suffix(alternatives: Vec<Vec<Expr>>) -> Vec<Expr> {
    let shortest = alternatives.iter().map(Vec::len).min().unwrap_or(0);

    let mut shared = 0;
    while shared < shortest {
        let first = &alternatives[0][shared];
        if !alternatives.iter().all(|seq| &seq[shared] == first) {
            break;
        }
        shared += 1;
    }

    if shared == 0 {
        let sealed = alternatives.into_iter().map(seal).collect();
        return vec![Expr::alt(sealed)];
    }

    let mut suffix: Option<Vec<Expr>> = None;
    let mut bare = false;
    let mut heads = Vec::with_capacity(alternatives.len());
    for mut seq in alternatives {
        let head = seq.split_off(shared);
        if head.is_empty() {
            bare = true;
        } else {
            heads.push(seal(head));
        }
        if suffix.is_none() {
            suffix = Some(seq);
        }
    }

    // an alternative that was entirely suffix makes the remaining heads optional
    let head = if bare {
        Expr::optional(Expr::alt(heads))
    } else {
        Expr::alt(heads)
    };

    let mut sequence = suffix.unwrap_or_default();
    prepend(&mut sequence, head);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;

    fn factor(words: &[&str]) -> Expr {
        let literals: Vec<Literal> = words.iter().map(|w| Literal::from(*w)).collect();
        Expr::from_trie(&Trie::build(&literals).unwrap())
    }

    fn c(ch: char) -> Expr {
        Expr::Char(ch as u32)
    }

    #[test]
    fn test_empty_set_is_nothing() {
        assert_eq!(factor(&[]), Expr::Nothing);
    }

    #[test]
    fn test_single_literal_is_concat() {
        assert_eq!(factor(&["abc"]), Expr::Concat(vec![c('a'), c('b'), c('c')]));
        assert_eq!(factor(&["a"]), c('a'));
    }

    #[test]
    fn test_shared_prefix() {
        // ab|ac -> a[bc]
        assert_eq!(
            factor(&["ab", "ac"]),
            Expr::Concat(vec![c('a'), Expr::Class(vec!['b' as u32, 'c' as u32])])
        );
    }

    #[test]
    fn test_single_chars_become_class() {
        assert_eq!(
            factor(&["c", "a", "b"]),
            Expr::Class(vec!['a' as u32, 'b' as u32, 'c' as u32])
        );
    }

    #[test]
    fn test_terminal_prefix_is_optional() {
        // a|ab -> ab?
        assert_eq!(
            factor(&["a", "ab"]),
            Expr::Concat(vec![c('a'), Expr::Optional(Box::new(c('b')))])
        );
    }

    #[test]
    fn test_identical_tails_grouped() {
        // xz|yz -> [xy]z
        assert_eq!(
            factor(&["xz", "yz"]),
            Expr::Concat(vec![Expr::Class(vec!['x' as u32, 'y' as u32]), c('z')])
        );
    }

    #[test]
    fn test_common_suffix_hoisted() {
        // abz|cdz -> (?:ab|cd)z
        assert_eq!(
            factor(&["abz", "cdz"]),
            Expr::Concat(vec![
                Expr::Alt(vec![
                    Expr::Concat(vec![c('a'), c('b')]),
                    Expr::Concat(vec![c('c'), c('d')]),
                ]),
                c('z'),
            ])
        );
    }

    #[test]
    fn test_suffix_hoisted_over_bare_alternative() {
        // x|bx -> b?x
        assert_eq!(
            factor(&["ax", "abx"]),
            Expr::Concat(vec![c('a'), Expr::Optional(Box::new(c('b'))), c('x')])
        );
    }

    #[test]
    fn test_keycap_variation_selector_is_optional() {
        assert_eq!(
            factor(&["#\u{FE0F}\u{20E3}", "#\u{20E3}"]),
            Expr::Concat(vec![
                c('#'),
                Expr::Optional(Box::new(Expr::Char(0xFE0F))),
                Expr::Char(0x20E3),
            ])
        );
    }

    #[test]
    fn test_insertion_order_does_not_change_tree() {
        let forward = factor(&["ab", "a", "abc", "b", "\u{1F600}"]);
        let backward = factor(&["\u{1F600}", "b", "abc", "a", "ab"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_constructors_normalize() {
        assert_eq!(Expr::concat(vec![Expr::Empty, c('a')]), c('a'));
        assert_eq!(Expr::concat(vec![c('a'), Expr::Nothing]), Expr::Nothing);
        assert_eq!(Expr::alt(vec![Expr::Nothing]), Expr::Nothing);
        assert_eq!(Expr::optional(Expr::Nothing), Expr::Empty);
        assert_eq!(Expr::class(vec![5, 5]), Expr::Char(5));
        assert!(Expr::class(vec![1, 2]).is_single_char());
    }

    #[test]
    fn test_long_literal_is_one_flat_concat() {
        let long: String = "\u{1F600}".repeat(100_000);
        match &factor(&[long.as_str()]) {
            Expr::Concat(parts) => {
                assert_eq!(parts.len(), 100_000);
                assert!(parts.iter().all(|part| *part == Expr::Char(0x1F600)));
            }
            _ => panic!("expected a concatenation"),
        }
    }

    #[test]
    fn test_nested_terminal_chain() {
        // a, aa, aaa, ... nests one optional per literal
        let words: Vec<String> = (1..=5_000).map(|n| "a".repeat(n)).collect();
        let literals: Vec<Literal> = words.iter().map(|w| Literal::from(w.as_str())).collect();
        let expr = Expr::from_trie(&Trie::build(&literals).unwrap());

        let mut depth = 0;
        let mut current = &expr;
        loop {
            match current {
                Expr::Concat(parts) => {
                    assert_eq!(parts.len(), 2);
                    assert_eq!(parts[0], c('a'));
                    current = &parts[1];
                }
                Expr::Optional(inner) => {
                    depth += 1;
                    current = inner.as_ref();
                }
                Expr::Char(_) => break,
                _ => panic!("unexpected node in chain"),
            }
        }
        assert_eq!(depth, 4_999);
        assert_eq!(expr, Expr::from_trie(&Trie::build(&literals).unwrap()));
    }

    #[test]
    fn test_deep_trees_compare_structurally() {
        let deep = |leaf: u32| {
            let mut expr = Expr::Char(leaf);
            for _ in 0..50_000 {
                expr = Expr::Optional(Box::new(Expr::Concat(vec![c('a'), expr])));
            }
            expr
        };
        assert_eq!(deep(1), deep(1));
        assert_ne!(deep(1), deep(2));
    }
}
