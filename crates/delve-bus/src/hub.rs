//! The [`Hub`]: broadcast subscribers plus single-handler services.

use std::fmt;

use indexmap::IndexMap;
use log::trace;

use crate::error::DispatchError;
use crate::protocol::{EventKind, Protocol, Request, RequestKind, Tagged};

// ── Participant traits ─────────────────────────────────────────────

/// Receives every event of the kinds it is subscribed to.
///
/// Subscribers get mutable access to the shared context `C` and may
/// issue requests through `services` while handling an event.
pub trait Subscriber<P: Protocol, C> {
    /// Human-readable name for error reporting and logs.
    fn name(&self) -> &str;

    /// Handle one event.
    ///
    /// An error stops delivery of this event to later subscribers and
    /// is returned from [`Hub::publish`].
    fn handle(
        &self,
        event: &P::Event,
        ctx: &mut C,
        services: &Services<P, C>,
    ) -> Result<(), DispatchError>;
}

/// Answers requests of exactly one kind.
pub trait ServiceHandler<P: Protocol, C> {
    /// Human-readable name for error reporting and logs.
    fn name(&self) -> &str;

    /// Answer `request`.
    ///
    /// The answer's kind must be the one
    /// [`Protocol::expected_response`] names for the request's kind.
    fn handle(&self, request: P::Request, ctx: &mut C) -> P::Response;
}

// ── Services ───────────────────────────────────────────────────────

/// Request kind → its one bound handler.
pub struct Services<P: Protocol, C> {
    handlers: IndexMap<RequestKind<P>, Box<dyn ServiceHandler<P, C>>>,
}

impl<P: Protocol, C> Services<P, C> {
    fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// Whether a handler is bound for `kind`.
    pub fn is_bound(&self, kind: RequestKind<P>) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Route an untyped request to its handler and check the answer's kind.
    ///
    /// # Errors
    ///
    /// `NoHandler` if nothing is bound for the request's kind;
    /// `InvalidResponseType` if the handler answered with a kind other
    /// than [`Protocol::expected_response`].
    pub fn dispatch(&self, request: P::Request, ctx: &mut C) -> Result<P::Response, DispatchError> {
        let kind = request.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or_else(|| DispatchError::NoHandler {
                request: format!("{kind:?}"),
            })?;
        trace!("dispatching {kind:?} to '{}'", handler.name());
        let response = handler.handle(request, ctx);
        let expected = P::expected_response(kind);
        let actual = response.kind();
        if actual != expected {
            return Err(DispatchError::InvalidResponseType {
                request: format!("{kind:?}"),
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
        }
        Ok(response)
    }

    /// Issue a typed request and unwrap its typed answer.
    ///
    /// # Errors
    ///
    /// As [`dispatch`](Self::dispatch). A response of the expected kind
    /// that still does not convert into `R::Response` is also reported
    /// as `InvalidResponseType`.
    pub fn call<R: Request<P>>(&self, request: R, ctx: &mut C) -> Result<R::Response, DispatchError> {
        let request: P::Request = request.into();
        let kind = request.kind();
        let response = self.dispatch(request, ctx)?;
        let actual = response.kind();
        <R::Response as TryFrom<P::Response>>::try_from(response).map_err(|_| {
            DispatchError::InvalidResponseType {
                request: format!("{kind:?}"),
                expected: format!("{:?}", P::expected_response(kind)),
                actual: format!("{actual:?}"),
            }
        })
    }
}

impl<P: Protocol, C> fmt::Debug for Services<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(|(k, h)| (k, h.name())))
            .finish()
    }
}

// ── Hub ────────────────────────────────────────────────────────────

/// In-process message hub over protocol `P` with shared context `C`.
///
/// Holds no context of its own; every `publish` and `call` borrows the
/// context for the duration of the dispatch. Subscribers run in
/// registration order.
pub struct Hub<P: Protocol, C> {
    subscribers: IndexMap<EventKind<P>, Vec<Box<dyn Subscriber<P, C>>>>,
    services: Services<P, C>,
}

impl<P: Protocol, C> Hub<P, C> {
    /// A hub with no subscribers and no bound handlers.
    pub fn new() -> Self {
        Self {
            subscribers: IndexMap::new(),
            services: Services::new(),
        }
    }

    /// Register `subscriber` for events of `kind`.
    ///
    /// The same subscriber type may be registered any number of times;
    /// each registration is invoked once per event.
    pub fn subscribe(&mut self, kind: EventKind<P>, subscriber: impl Subscriber<P, C> + 'static) {
        self.subscribers
            .entry(kind)
            .or_default()
            .push(Box::new(subscriber));
    }

    /// Bind `handler` as the sole handler for requests of `kind`.
    ///
    /// # Errors
    ///
    /// `DuplicateHandler` if a handler is already bound; the existing
    /// binding is kept.
    pub fn bind(
        &mut self,
        kind: RequestKind<P>,
        handler: impl ServiceHandler<P, C> + 'static,
    ) -> Result<(), DispatchError> {
        if let Some(existing) = self.services.handlers.get(&kind) {
            return Err(DispatchError::DuplicateHandler {
                request: format!("{kind:?}"),
                existing: existing.name().to_string(),
            });
        }
        self.services.handlers.insert(kind, Box::new(handler));
        Ok(())
    }

    /// Deliver `event` to every subscriber of its kind.
    ///
    /// An event nobody subscribes to is dropped silently.
    ///
    /// # Errors
    ///
    /// The first subscriber error, unchanged. Subscribers after the
    /// failing one do not see the event.
    pub fn publish(&self, event: &P::Event, ctx: &mut C) -> Result<(), DispatchError> {
        let kind = event.kind();
        let Some(subscribers) = self.subscribers.get(&kind) else {
            trace!("no subscribers for {kind:?}");
            return Ok(());
        };
        for subscriber in subscribers {
            subscriber.handle(event, ctx, &self.services)?;
        }
        Ok(())
    }

    /// Issue a typed request. See [`Services::call`].
    pub fn call<R: Request<P>>(&self, request: R, ctx: &mut C) -> Result<R::Response, DispatchError> {
        self.services.call(request, ctx)
    }

    /// The request side of the hub.
    pub fn services(&self) -> &Services<P, C> {
        &self.services
    }

    /// Number of subscribers registered for `kind`.
    pub fn subscriber_count(&self, kind: EventKind<P>) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}

impl<P: Protocol, C> Default for Hub<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Protocol, C> fmt::Debug for Hub<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers: Vec<_> = self
            .subscribers
            .iter()
            .map(|(k, subs)| (k, subs.iter().map(|s| s.name()).collect::<Vec<_>>()))
            .collect();
        f.debug_struct("Hub")
            .field("subscribers", &subscribers)
            .field("services", &self.services)
            .finish()
    }
}
