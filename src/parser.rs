//! Recursive-descent parser from source text to a [`Node`] tree.
//!
//! The parser scans the character stream once, keeping a single pending
//! accumulator node so that runs of identical `+`/`-` or `>`/`<` symbols
//! fold into one [`Node::Increment`] or [`Node::Move`]. Every `[` opens a
//! recursive call that fills a fresh [`Node::Loop`] until the matching `]`.
//! Any character outside the eight instruction symbols is a comment.

use std::mem;
use std::str::Chars;

use crate::Error;
use crate::ast::Node;

/// Parse a whole source program into a [`Node::Root`].
///
/// Fails with [`Error::UnterminatedLoop`] when the stream ends inside an
/// open `[`; the error carries the char offset of the innermost unclosed
/// bracket. A `]` at the top level ends parsing normally and the rest of
/// the stream is discarded.
pub fn parse(source: &str) -> Result<Node, Error> {
    let mut parser = Parser {
        chars: source.chars(),
        offset: 0,
    };
    let mut root = Node::Root(Vec::new());
    parser.block(&mut root)?;
    Ok(root)
}

/// Which of the two terminating conditions ended a block.
enum BlockEnd {
    /// A `]` was seen at this nesting level.
    Closed,
    /// The character stream ran out.
    Exhausted,
}

struct Parser<'a> {
    chars: Chars<'a>,
    offset: usize,
}

impl Parser<'_> {
    fn next(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.offset += 1;
        }
        c
    }

    /// Fill `container` with nodes until the stream ends or a `]` closes
    /// this nesting level, reporting which terminator occurred.
    fn block(&mut self, container: &mut Node) -> Result<BlockEnd, Error> {
        let mut pending = Node::Noop;
        loop {
            let Some(symbol) = self.next() else {
                container.push(mem::take(&mut pending))?;
                return Ok(BlockEnd::Exhausted);
            };
            match symbol {
                '+' | '-' => {
                    if !matches!(pending, Node::Increment(_)) {
                        container.push(mem::replace(&mut pending, Node::Increment(0)))?;
                    }
                    if let Node::Increment(count) = &mut pending {
                        *count += if symbol == '+' { 1 } else { -1 };
                    }
                }
                '>' | '<' => {
                    if !matches!(pending, Node::Move(_)) {
                        container.push(mem::replace(&mut pending, Node::Move(0)))?;
                    }
                    if let Node::Move(count) = &mut pending {
                        *count += if symbol == '>' { 1 } else { -1 };
                    }
                }
                ',' => {
                    container.push(mem::take(&mut pending))?;
                    container.push(Node::Input)?;
                }
                '.' => {
                    container.push(mem::take(&mut pending))?;
                    container.push(Node::Output)?;
                }
                '[' => {
                    container.push(mem::take(&mut pending))?;
                    let opened_at = self.offset - 1;
                    let mut body = Node::Loop(Vec::new());
                    match self.block(&mut body)? {
                        BlockEnd::Closed => container.push(body)?,
                        BlockEnd::Exhausted => {
                            return Err(Error::UnterminatedLoop { offset: opened_at });
                        }
                    }
                }
                ']' => {
                    container.push(mem::take(&mut pending))?;
                    return Ok(BlockEnd::Closed);
                }
                // Comment character.
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_parses_to_empty_root() {
        assert_eq!(parse("").unwrap(), Node::Root(Vec::new()));
    }

    #[test]
    fn runs_collapse_into_single_nodes() {
        assert_eq!(parse("+++").unwrap(), Node::Root(vec![Node::Increment(3)]));
        assert_eq!(parse(">>><").unwrap(), Node::Root(vec![Node::Move(2)]));
    }

    #[test]
    fn mixed_signs_fold_within_one_run() {
        // '+' and '-' share an accumulator, as do '>' and '<'.
        assert_eq!(parse("+-+").unwrap(), Node::Root(vec![Node::Increment(1)]));
        assert_eq!(parse("<<>>").unwrap(), Node::Root(vec![Node::Move(0)]));
    }

    #[test]
    fn kind_change_flushes_the_accumulator() {
        assert_eq!(
            parse("++>>++").unwrap(),
            Node::Root(vec![
                Node::Increment(2),
                Node::Move(2),
                Node::Increment(2),
            ])
        );
    }

    #[test]
    fn io_symbols_flush_and_append() {
        assert_eq!(
            parse("+.,").unwrap(),
            Node::Root(vec![Node::Increment(1), Node::Output, Node::Input])
        );
    }

    #[test]
    fn comment_characters_do_not_break_runs() {
        assert_eq!(
            parse("+ two more coming +f+").unwrap(),
            Node::Root(vec![Node::Increment(3)])
        );
    }

    #[test]
    fn loops_nest() {
        assert_eq!(
            parse("+[>[-]<]").unwrap(),
            Node::Root(vec![
                Node::Increment(1),
                Node::Loop(vec![
                    Node::Move(1),
                    Node::Loop(vec![Node::Increment(-1)]),
                    Node::Move(-1),
                ]),
            ])
        );
    }

    #[test]
    fn empty_loop_parses() {
        assert_eq!(
            parse("[]").unwrap(),
            Node::Root(vec![Node::Loop(Vec::new())])
        );
    }

    #[test]
    fn unterminated_loop_is_a_syntax_error() {
        let result = parse("[");
        assert!(matches!(result, Err(Error::UnterminatedLoop { offset: 0 })));
    }

    #[test]
    fn unterminated_error_points_at_the_innermost_open_bracket() {
        let result = parse("+[>[->");
        assert!(matches!(result, Err(Error::UnterminatedLoop { offset: 3 })));
    }

    #[test]
    fn top_level_close_bracket_ends_the_parse() {
        // Everything after a stray top-level ']' is discarded.
        assert_eq!(
            parse("++]--").unwrap(),
            Node::Root(vec![Node::Increment(2)])
        );
    }

    #[test]
    fn finished_tree_never_contains_noop() {
        fn assert_no_noop(node: &Node) {
            match node {
                Node::Root(children) | Node::Loop(children) => {
                    children.iter().for_each(assert_no_noop)
                }
                Node::Noop => panic!("Noop leaked into a finished tree"),
                _ => {}
            }
        }
        let tree = parse("comment [+>-<.,] more commentary").unwrap();
        assert_no_noop(&tree);
    }
}
