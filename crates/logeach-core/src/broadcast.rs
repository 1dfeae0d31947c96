//! Lock-step iteration over collections and broadcast scalars.
//!
//! Each positional argument becomes a *lane*: a backing sequence, an element
//! accessor and a stride. Collections advance their read offset by one per
//! iteration; scalars are wrapped as one-element arrays with stride 0, so
//! every iteration reads the same value. This is the same "zero stride"
//! trick used to broadcast array views along a dimension.
//!
//! ```text
//! args:     [1, 2, 3]    5        [4, 5, 6]
//! stride:       1        0            1
//! row 0:        1        5            4
//! row 1:        2        5            5
//! row 2:        3        5            6
//! ```
//!
//! The first collection fixes the iteration length; every later collection
//! must match it. Without any collection the length is 1.

mod classify;
mod trailing;

use log::{debug, trace};

pub use classify::{resolve_getter, Argument, Getter};
pub use trailing::{split_callback, Trailing};

use crate::{
    error::{ConsoleError, Result},
    value::Value,
};

#[derive(Clone, Copy)]
struct Lane {
    getter: Getter,
    stride: usize,
}

/// Classified arguments ready for lock-step iteration.
pub struct Broadcast {
    arrays: Vec<Value>,
    lanes: Vec<Lane>,
    len: usize,
}

impl Broadcast {
    /// Classify `args` and validate collection lengths.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::LengthMismatch`] for the first collection,
    /// after the one defining the iteration length, whose length differs.
    pub fn new(args: Vec<Value>) -> Result<Self> {
        let mut arrays = Vec::with_capacity(args.len());
        let mut lanes = Vec::with_capacity(args.len());
        let mut len = None;

        for (position, value) in args.into_iter().enumerate() {
            let argument = Argument::classify(value);
            trace!("argument {position} classified as {argument:?}");
            if let Some(found) = argument.len() {
                match len {
                    None => len = Some(found),
                    Some(expected) if expected != found => {
                        return Err(ConsoleError::length_mismatch(expected).found(found, position));
                    }
                    Some(_) => {}
                }
            }
            let (sequence, getter, stride) = argument.into_parts();
            arrays.push(sequence);
            lanes.push(Lane { getter, stride });
        }

        let len = len.unwrap_or(1);
        debug!(
            "broadcasting {} argument(s) over {len} iteration(s)",
            lanes.len()
        );
        Ok(Self { arrays, lanes, len })
    }

    /// Number of iterations.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when no iteration will run.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of broadcast arguments.
    pub fn arity(&self) -> usize {
        self.lanes.len()
    }

    /// Resolved backing sequences in argument order, scalars as singletons.
    pub fn arrays(&self) -> &[Value] {
        &self.arrays
    }

    /// Per-argument strides in argument order.
    pub fn strides(&self) -> impl Iterator<Item = usize> + '_ {
        self.lanes.iter().map(|lane| lane.stride)
    }

    /// Iterate the rows of current elements, in index order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            broadcast: self,
            offsets: vec![0; self.lanes.len()],
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Broadcast {
    type Item = Vec<Value>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over broadcast rows.
pub struct Iter<'a> {
    broadcast: &'a Broadcast,
    offsets: Vec<usize>,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = Vec<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.broadcast.len {
            return None;
        }
        let row = self
            .broadcast
            .lanes
            .iter()
            .zip(&self.broadcast.arrays)
            .zip(self.offsets.iter_mut())
            .map(|((lane, sequence), offset)| {
                let element = (lane.getter)(sequence, *offset);
                *offset += lane.stride;
                element
            })
            .collect();
        self.index += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.broadcast.len.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
