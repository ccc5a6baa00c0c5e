//! The message vocabulary a [`Hub`](crate::Hub) is instantiated over.

use std::fmt;
use std::hash::Hash;

/// A message that carries a discriminating tag.
///
/// Messages are usually enums; the kind is a fieldless mirror enum used
/// as the routing key.
pub trait Tagged {
    /// Routing key.
    type Kind: Copy + Eq + Hash + fmt::Debug + 'static;

    /// This message's kind.
    fn kind(&self) -> Self::Kind;
}

/// Event, request and response types that travel through one hub.
pub trait Protocol: 'static {
    /// Broadcast messages.
    type Event: Tagged;
    /// Messages answered by exactly one handler.
    type Request: Tagged;
    /// Handler answers.
    type Response: Tagged;

    /// The response kind a request of `kind` must be answered with.
    fn expected_response(kind: RequestKind<Self>) -> ResponseKind<Self>;
}

/// Routing key of a protocol's events.
pub type EventKind<P> = <<P as Protocol>::Event as Tagged>::Kind;
/// Routing key of a protocol's requests.
pub type RequestKind<P> = <<P as Protocol>::Request as Tagged>::Kind;
/// Tag of a protocol's responses.
pub type ResponseKind<P> = <<P as Protocol>::Response as Tagged>::Kind;

/// A typed request payload.
///
/// Each payload fixes its answer type, so a caller of
/// [`Services::call`](crate::Services::call) gets the concrete response
/// back without matching on the protocol's response enum.
pub trait Request<P: Protocol>: Into<P::Request> {
    /// The answer this request resolves to.
    type Response: TryFrom<P::Response>;
}
