//! In-process message hub for Delve.
//!
//! Two independent mechanisms share one [`Hub`]:
//!
//! - **Broadcast**: [`Hub::subscribe`] registers a [`Subscriber`] for an
//!   event kind and [`Hub::publish`] delivers an event to every subscriber
//!   of its kind, in registration order.
//! - **Request/response**: [`Hub::bind`] registers the single
//!   [`ServiceHandler`] for a request kind and [`Hub::call`] routes a
//!   request to it.
//!
//! A hub is generic over a [`Protocol`] (the event, request and response
//! enums) and over the context type subscribers and handlers mutate. Each
//! typed [`Request`] names its response type, so callers receive the
//! concrete answer; the hub still checks the handler's answer against
//! [`Protocol::expected_response`] because handlers see the untyped enum.
//!
//! Nothing here knows about grids or movement.
//!
//! ```
//! use delve_bus::{DispatchError, Hub, Protocol, Request, ServiceHandler, Tagged};
//!
//! struct Add(u32, u32);
//! struct Sum(u32);
//!
//! impl Tagged for Add {
//!     type Kind = ();
//!     fn kind(&self) {}
//! }
//! impl Tagged for Sum {
//!     type Kind = ();
//!     fn kind(&self) {}
//! }
//!
//! struct Math;
//! impl Protocol for Math {
//!     type Event = Add;
//!     type Request = Add;
//!     type Response = Sum;
//!     fn expected_response(_: ()) {}
//! }
//! impl Request<Math> for Add {
//!     type Response = Sum;
//! }
//!
//! struct Adder;
//! impl ServiceHandler<Math, ()> for Adder {
//!     fn name(&self) -> &str { "adder" }
//!     fn handle(&self, Add(a, b): Add, _: &mut ()) -> Sum { Sum(a + b) }
//! }
//!
//! let mut hub: Hub<Math, ()> = Hub::new();
//! assert!(matches!(hub.call(Add(1, 2), &mut ()), Err(DispatchError::NoHandler { .. })));
//! hub.bind((), Adder)?;
//! assert_eq!(hub.call(Add(1, 2), &mut ())?.0, 3);
//! # Ok::<(), DispatchError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hub;
pub mod protocol;

pub use error::DispatchError;
pub use hub::{Hub, ServiceHandler, Services, Subscriber};
pub use protocol::{EventKind, Protocol, Request, RequestKind, ResponseKind, Tagged};
