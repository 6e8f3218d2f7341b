//! Marten KV - local shim for the Marten `data` API
//!
//! Emulates the hosted `data` endpoint on top of a local key/value store, so
//! code written against the cloud API can run during development without a
//! server. The shim validates a request config, dispatches to one of three
//! operations (load, save, remove) against an injected storage capability,
//! and invokes exactly one of two callbacks with a result shape matching the
//! remote contract.
//!
//! # Usage
//!
//! ```
//! use marten_kv::{DataRequest, DataShim, MemoryStore};
//!
//! let shim = DataShim::new(MemoryStore::new());
//!
//! shim.data(
//!     DataRequest::save("greeting", "hello"),
//!     |_| {},
//!     |err| panic!("{err}"),
//! )?;
//!
//! shim.data(
//!     DataRequest::load("greeting"),
//!     |res| assert_eq!(res.unwrap().val.as_deref(), Some("hello")),
//!     |err| panic!("{err}"),
//! )?;
//! # Ok::<(), marten_kv::RequestError>(())
//! ```
//!
//! Note that loading a key which was never stored is a successful empty
//! read, not a failure: the success callback receives `val: None`.

mod error;
mod request;
mod shim;
mod store;

pub use error::{RequestError, StoreError, StoreResult};
pub use request::{Act, DataRequest, DataResponse};
pub use shim::DataShim;
pub use store::{LocalStore, MemoryStore, Storage};
