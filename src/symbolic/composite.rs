//! # Composite chains and the chain rule
//!
//! A [`CompositeChain`] stores the nested application `f1(f2(...fn(x)))` as a persistent
//! singly-linked list of nodes, outermost first. Nodes are reference counted, so several
//! chains can share the same inner suffix:
//!
//! ```text
//!  chain:        [f1] -> [f2] -> [f3]
//!  factor of f1: [f1']---^            (shares f2 -> f3)
//!  factor of f2: [f2']-----------^    (shares f3)
//! ```
//!
//! Differentiation grafts each node's derivative as a new outermost node onto the suffix
//! that follows it, giving the factors `f1'(f2(f3(x)))`, `f2'(f3(x))` and `f3'(x)`, and
//! multiplies them. Grafting is an O(1) prepend: nothing is copied and nothing that is
//! already published is mutated.
//!
//! Chains are assembled either through [`ChainBuilder`] or with [`CompositeChain::append_start`]
//! and [`CompositeChain::append_end`]. Once a chain is handed out to other owners it is
//! treated as frozen; appending to a chain copies whatever part of the spine is shared.
use crate::symbolic::errors::DomainError;
use crate::symbolic::function::{Differentiable, Function};
use crate::symbolic::operations::Multiplication;
use crate::symbolic::primitives::PolyTerm;
use log::debug;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Link {
    func: Function,
    // the function applied inside this one
    next: Option<Arc<Link>>,
}

/// Nested composition of functions, outermost first. An empty chain is the identity.
#[derive(Debug, Clone, Default)]
pub struct CompositeChain {
    head: Option<Arc<Link>>,
    len: usize,
}

impl CompositeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain holding `func` alone; equal to `func` itself.
    pub fn single_node(func: Function) -> Self {
        let mut chain = Self::new();
        chain.append_start(func);
        chain
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn outermost(&self) -> Option<&Function> {
        self.head.as_deref().map(|link| &link.func)
    }

    pub fn innermost(&self) -> Option<&Function> {
        self.iter().last()
    }

    pub fn get(&self, index: usize) -> Option<&Function> {
        self.iter().nth(index)
    }

    /// The wrapped function when the chain has exactly one node.
    pub fn single(&self) -> Option<&Function> {
        if self.len == 1 { self.outermost() } else { None }
    }

    /// Iterates over the nodes, outermost first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Adds `func` as the new outermost function. The former nodes are shared, not copied.
    pub fn append_start(&mut self, func: Function) {
        let next = self.head.take();
        self.head = Some(Arc::new(Link { func, next }));
        self.len += 1;
    }

    /// Adds `func` as the new innermost function.
    ///
    /// Walks the whole chain. Links owned by this chain alone are updated in place, links
    /// shared with another chain are copied first, so chains that share a suffix with this
    /// one are left as they were. [`ChainBuilder::append_end`] is the O(1) way to
    /// assemble a chain from the outside in.
    pub fn append_end(&mut self, func: Function) {
        let mut slot = &mut self.head;
        while let Some(link) = slot {
            slot = &mut Arc::make_mut(link).next;
        }
        *slot = Some(Arc::new(Link { func, next: None }));
        self.len += 1;
    }

    /// A new chain with `outer` applied on top of this one, sharing all of its nodes.
    pub fn with_outer(&self, outer: Function) -> CompositeChain {
        CompositeChain {
            head: Some(Arc::new(Link {
                func: outer,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    fn links(&self) -> Links<'_> {
        Links {
            next: self.head.as_ref(),
        }
    }
}

/// Iterator over the functions of a chain, outermost first.
pub struct Iter<'a> {
    next: Option<&'a Link>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Function;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.next.as_deref();
        Some(&link.func)
    }
}

// walks the shared links themselves, used to graft derivatives onto suffixes
struct Links<'a> {
    next: Option<&'a Arc<Link>>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a Arc<Link>;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.next.as_ref();
        Some(link)
    }
}

impl FromIterator<Function> for CompositeChain {
    /// Collects functions given outermost first.
    fn from_iter<I: IntoIterator<Item = Function>>(iter: I) -> Self {
        let mut builder = ChainBuilder::new();
        for func in iter {
            builder.append_end(func);
        }
        builder.build()
    }
}

impl Differentiable for CompositeChain {
    fn compute(&self, x: f64) -> Result<f64, DomainError> {
        let nodes: Vec<&Function> = self.iter().collect();
        nodes
            .into_iter()
            .rev()
            .try_fold(x, |inner, func| func.compute(inner))
    }

    /// (f1 o f2 o ... o fk)' = f1'(f2 o ... o fk) * f2'(f3 o ... o fk) * ... * fk'
    fn differentiate(&self) -> Function {
        let mut factors: Vec<Function> = Vec::with_capacity(self.len);
        let mut remaining = self.len;
        for link in self.links() {
            remaining -= 1;
            let derivative = link.func.differentiate();
            let factor: Function = match &link.next {
                Some(suffix) => CompositeChain {
                    head: Some(Arc::new(Link {
                        func: derivative,
                        next: Some(Arc::clone(suffix)),
                    })),
                    len: remaining + 1,
                }
                .into(),
                None => derivative,
            };
            factors.push(factor);
        }
        debug!("chain rule over {} nested functions", factors.len());

        match factors.len() {
            0 => PolyTerm::identity().into(),
            1 => factors.remove(0),
            _ => Multiplication::new(factors).into(),
        }
    }
}

/// Mutable assembly of a chain; [`ChainBuilder::build`] freezes it.
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    nodes: VecDeque<Function>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `func` as the new outermost function.
    pub fn append_start(&mut self, func: Function) -> &mut Self {
        self.nodes.push_front(func);
        self
    }

    /// Adds `func` as the new innermost function.
    pub fn append_end(&mut self, func: Function) -> &mut Self {
        self.nodes.push_back(func);
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn build(self) -> CompositeChain {
        let len = self.nodes.len();
        let head = self
            .nodes
            .into_iter()
            .rev()
            .fold(None, |next, func| Some(Arc::new(Link { func, next })));
        CompositeChain { head, len }
    }
}
