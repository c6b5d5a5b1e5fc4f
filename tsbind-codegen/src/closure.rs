//! Transitive declaration generation.
//!
//! The [`ClosureDriver`] owns everything one generation run mutates: the
//! queue of pending references, the set of names already emitted, and the
//! output list. It borrows the declaration store read-only, so independent
//! runs never share state.

use crate::config::GeneratorConfig;
use crate::emitter::DeclarationEmitter;
use crate::mapper::ReferenceSink;
use std::collections::{HashMap, HashSet, VecDeque};
use tsbind_core::{OutputUnit, TargetDeclaration};
use tsbind_schema::{DeclarationKind, DeclarationStore, Resolved};

/// A symbol waiting to be resolved and emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingRequest {
    /// Unit the reference was found in.
    pub unit: String,
    /// Referenced symbol.
    pub symbol: String,
}

impl PendingRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(unit: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            symbol: symbol.into(),
        }
    }
}

/// FIFO of pending requests with deduplication.
///
/// A request is accepted at most once per run, and never when its symbol
/// name has already been emitted, whatever unit it came from.
#[derive(Debug, Default)]
pub struct PendingQueue {
    queue: VecDeque<PendingRequest>,
    seen: HashSet<PendingRequest>,
    emitted: HashMap<String, String>,
}

impl PendingQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a request. Returns false if it was dropped.
    pub fn push(&mut self, request: PendingRequest) -> bool {
        if self.emitted.contains_key(&request.symbol) || self.seen.contains(&request) {
            return false;
        }
        self.seen.insert(request.clone());
        self.queue.push_back(request);
        true
    }

    /// Dequeues the oldest request.
    pub fn pop(&mut self) -> Option<PendingRequest> {
        self.queue.pop_front()
    }

    /// Records that a declaration named `name` from `unit` was emitted.
    pub fn mark_emitted(&mut self, name: &str, unit: &str) {
        self.emitted
            .entry(name.to_string())
            .or_insert_with(|| unit.to_string());
    }

    /// Returns the unit that emitted `name`, if any.
    #[must_use]
    pub fn emitted_from(&self, name: &str) -> Option<&str> {
        self.emitted.get(name).map(String::as_str)
    }

    /// Returns the number of queued requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl ReferenceSink for PendingQueue {
    fn request(&mut self, unit: &str, symbol: &str) {
        if self.push(PendingRequest::new(unit, symbol)) {
            tracing::trace!("Queued '{}' from '{}'", symbol, unit);
        }
    }
}

/// Lifecycle of a [`ClosureDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureState {
    /// Nothing seeded yet.
    Idle,
    /// Root request queued, nothing processed.
    Seeded,
    /// Requests are being processed.
    Draining,
    /// Queue exhausted.
    Done,
}

/// Drives one generation run to its transitive closure.
///
/// Each [`step`](Self::step) processes one request, so callers that need
/// cancellation can stop between steps.
pub struct ClosureDriver<'a> {
    store: &'a DeclarationStore,
    config: &'a GeneratorConfig,
    pending: PendingQueue,
    roots: HashMap<PendingRequest, DeclarationKind>,
    output: Vec<TargetDeclaration>,
    state: ClosureState,
}

impl<'a> ClosureDriver<'a> {
    /// Creates an idle driver over `store`.
    #[must_use]
    pub fn new(store: &'a DeclarationStore, config: &'a GeneratorConfig) -> Self {
        Self {
            store,
            config,
            pending: PendingQueue::new(),
            roots: HashMap::new(),
            output: Vec::new(),
            state: ClosureState::Idle,
        }
    }

    /// Queues a root request. Roots resolve only as `kind`; transitive
    /// references resolve as an interface, then as a class.
    pub fn seed(&mut self, request: PendingRequest, kind: DeclarationKind) {
        tracing::debug!(
            "Seeding closure with {} '{}' from unit '{}'",
            kind,
            request.symbol,
            request.unit
        );
        self.roots.insert(request.clone(), kind);
        self.pending.push(request);
        self.state = match self.state {
            ClosureState::Idle | ClosureState::Seeded => ClosureState::Seeded,
            ClosureState::Draining | ClosureState::Done => ClosureState::Draining,
        };
    }

    /// Processes the next pending request and returns the new state.
    pub fn step(&mut self) -> ClosureState {
        if self.state == ClosureState::Idle {
            return self.state;
        }

        let Some(request) = self.pending.pop() else {
            self.state = ClosureState::Done;
            return self.state;
        };

        self.state = ClosureState::Draining;
        self.process(&request);

        if self.pending.is_empty() {
            self.state = ClosureState::Done;
        }
        self.state
    }

    /// Processes requests until the queue is exhausted.
    pub fn run(&mut self) -> ClosureState {
        loop {
            match self.step() {
                ClosureState::Idle | ClosureState::Done => return self.state,
                ClosureState::Seeded | ClosureState::Draining => {}
            }
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ClosureState {
        self.state
    }

    /// Returns the number of queued requests.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns the declarations emitted so far.
    #[must_use]
    pub fn output(&self) -> &[TargetDeclaration] {
        &self.output
    }

    /// Consumes the driver and wraps the output in `namespace`.
    #[must_use]
    pub fn finish(self, namespace: impl Into<String>) -> OutputUnit {
        OutputUnit {
            namespace: namespace.into(),
            declarations: self.output,
        }
    }

    fn process(&mut self, request: &PendingRequest) {
        if self.already_emitted(&request.symbol, &request.unit) {
            return;
        }

        let Some(resolved) = self.resolve(request) else {
            tracing::debug!(
                "Reference '{}' from unit '{}' not found, left unresolved",
                request.symbol,
                request.unit
            );
            return;
        };

        if self.already_emitted(&resolved.declaration.name, resolved.unit) {
            return;
        }
        self.pending
            .mark_emitted(&resolved.declaration.name, resolved.unit);

        let mut emitter = DeclarationEmitter::new(self.store, self.config, &mut self.pending);
        match emitter.emit(resolved.unit, resolved.declaration) {
            Ok(declaration) => {
                tracing::debug!(
                    "Emitted {} '{}' from unit '{}'",
                    declaration.kind.keyword(),
                    declaration.name,
                    resolved.unit
                );
                self.output.push(declaration);
            }
            Err(e) => {
                tracing::debug!("Skipped '{}': {}", resolved.declaration.name, e);
            }
        }
    }

    fn resolve(&self, request: &PendingRequest) -> Option<Resolved<'a>> {
        let store = self.store;
        match self.roots.get(request) {
            Some(kind) => store.resolve(&request.unit, &request.symbol, *kind).ok(),
            None => store.resolve_any(&request.unit, &request.symbol),
        }
    }

    fn already_emitted(&self, name: &str, unit: &str) -> bool {
        match self.pending.emitted_from(name) {
            Some(owner) => {
                if owner != unit {
                    tracing::debug!(
                        "Dropping '{}' from unit '{}': name already emitted from '{}'",
                        name,
                        unit,
                        owner
                    );
                }
                true
            }
            None => false,
        }
    }
}
