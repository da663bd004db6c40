//! `fm-message`: layer-to-layer message channels.
//!
//! Both channels are double-buffered.  During a layer, producers append to a
//! growable *write* buffer.  [`seal`](BroadcastChannel::seal) then freezes
//! that buffer into the *read* snapshot that the next layer consumes and bumps
//! a generation counter.  A layer can therefore only ever observe messages
//! produced by the layer immediately before it.
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`broadcast`] | `BroadcastChannel<M>`: every reader sees every record     |
//! | [`spatial`]   | `SpatialChannel<M>`: uniform-grid bucketing + range query |
//! | [`error`]     | `MessageError`, `MessageResult<T>`                         |

pub mod broadcast;
pub mod error;
pub mod spatial;


pub use broadcast::BroadcastChannel;
pub use error::{MessageError, MessageResult};
pub use spatial::SpatialChannel;
