//! Work queues and the visited set of one exploration.

use std::collections::{HashSet, VecDeque};

use cast_core::NodeKind;

use super::info::ExploreInfo;

/// Which queue an item is drained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Queue {
    Variables,
    Functions,
    Types,
}

impl Queue {
    /// Drain order: variables, then functions, then types.
    pub(crate) const ORDER: [Self; 3] = [Self::Variables, Self::Functions, Self::Types];

    const fn of(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Variable => Self::Variables,
            NodeKind::Function => Self::Functions,
            _ => Self::Types,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Frontier<C, T> {
    variables: VecDeque<ExploreInfo<C, T>>,
    functions: VecDeque<ExploreInfo<C, T>>,
    types: VecDeque<ExploreInfo<C, T>>,
    visited: HashSet<(NodeKind, String)>,
}

impl<C, T> Default for Frontier<C, T> {
    fn default() -> Self {
        Self {
            variables: VecDeque::new(),
            functions: VecDeque::new(),
            types: VecDeque::new(),
            visited: HashSet::new(),
        }
    }
}

impl<C, T> Frontier<C, T> {
    /// Record `(kind, name)` as visited. Returns `false` if it already was.
    pub(crate) fn mark_visited(&mut self, kind: NodeKind, name: &str) -> bool {
        self.visited.insert((kind, name.to_string()))
    }

    pub(crate) fn push(&mut self, info: ExploreInfo<C, T>) {
        self.queue_mut(Queue::of(info.kind)).push_back(info);
    }

    pub(crate) fn pop(&mut self, queue: Queue) -> Option<ExploreInfo<C, T>> {
        self.queue_mut(queue).pop_front()
    }

    fn queue_mut(&mut self, queue: Queue) -> &mut VecDeque<ExploreInfo<C, T>> {
        match queue {
            Queue::Variables => &mut self.variables,
            Queue::Functions => &mut self.functions,
            Queue::Types => &mut self.types,
        }
    }
}
