//! The parsed program tree.
//!
//! A Brainfuck program is represented as a tree of [`Node`]s rooted at a
//! single [`Node::Root`]. Runs of identical `+`/`-` or `>`/`<` symbols are
//! collapsed into one leaf carrying a signed count, so the tree grows with
//! the number of direction changes in the source rather than its raw length.

use crate::Error;

/// One instruction in the parsed tree.
///
/// Only `Root` and `Loop` own children; every other kind is a childless
/// leaf. A finished tree never contains `Noop` — it exists only as the
/// parser's pending-accumulator state and [`Node::push`] drops it.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Node {
    /// The whole program; executes its children once, in order.
    Root(Vec<Node>),
    /// A `[` ... `]` loop; executes its children while the current cell is
    /// non-zero, testing before every iteration.
    Loop(Vec<Node>),
    /// A collapsed run of `+` and `-`; the count is the signed net change.
    Increment(i64),
    /// A collapsed run of `>` and `<`; the count is the signed net shift.
    Move(i64),
    /// A `,`: read one byte into the current cell.
    Input,
    /// A `.`: write the current cell as one byte.
    Output,
    /// The parser's empty accumulator. Never appears in a finished tree.
    #[default]
    Noop,
}

impl Node {
    /// Append `child` to a container node's child list.
    ///
    /// Pushing a `Noop` is a silent no-op, which lets the parser flush its
    /// accumulator unconditionally. Pushing into a leaf kind is a bug in
    /// the caller and reported as [`Error::Internal`].
    pub fn push(&mut self, child: Node) -> Result<(), Error> {
        if matches!(child, Node::Noop) {
            return Ok(());
        }
        match self {
            Node::Root(children) | Node::Loop(children) => {
                children.push(child);
                Ok(())
            }
            _ => Err(Error::Internal("push into a leaf node")),
        }
    }

    /// Whether this node may own children.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Root(_) | Node::Loop(_))
    }
}
