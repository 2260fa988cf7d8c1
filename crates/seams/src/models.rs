//! These models represent the objects passed between the services, the tool systems and
//! the trace renderer
//!
//! Traces arrive from an external agent in a loose JSON shape (one object per message).
//! We convert them into the closed `Message` enum once, at decode time, so everything
//! downstream can match exhaustively instead of probing optional fields.
pub mod content;
pub mod message;
pub mod tool;
pub mod trace;
