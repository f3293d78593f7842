//! Server-Sent Events (SSE) infrastructure for the greeting stream.
//!
//! This crate owns the send side of the stream: an [`Emitter`] that fans
//! greeting payloads out to every currently connected subscriber.
//!
//! # Message Flow
//!
//! 1. A client establishes an SSE connection via the `/hello` endpoint
//! 2. The handler subscribes to the emitter and holds the receiver for the
//!    lifetime of the connection
//! 3. The `/say` endpoint publishes a payload via `app_state.emitter.publish()`
//! 4. Every receiver subscribed at publish time gets the payload, in publish
//!    order
//!
//! All payloads are ephemeral - a subscriber that connects later simply
//! starts from the next published payload.

pub mod emitter;

pub use emitter::Emitter;
