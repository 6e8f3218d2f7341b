//! The `data` entry point: validate, dispatch against the injected storage
//! capability, invoke exactly one callback.

use crate::error::RequestError;
use crate::request::{DataOp, DataRequest, DataResponse};
use crate::store::Storage;
use tracing::debug;

/// Message reported when the shim was built without a storage capability.
const STORAGE_UNSUPPORTED: &str = "local storage not supported!";

/// Shim mapping the remote `data` API onto a local storage capability.
///
/// Each call is stateless: validate the request, perform one storage
/// operation, invoke one callback. Errors split into two tiers: malformed
/// requests come back as [`RequestError`] for the caller to fix, while
/// environment problems (no storage capability, a backend fault) are
/// reported through the failure callback.
pub struct DataShim {
    storage: Option<Box<dyn Storage>>,
}

impl DataShim {
    /// Build a shim over the given storage capability.
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Some(Box::new(storage)),
        }
    }

    /// Build a shim for a host environment that provides no local storage.
    ///
    /// Every `data` call reports through the failure callback.
    pub fn unavailable() -> Self {
        Self { storage: None }
    }

    /// Emulation of the remote `data` method.
    ///
    /// Dispatches on `request.act`:
    ///
    /// - **load** - reads the key and invokes `on_success` with a
    ///   [`DataResponse`]. An absent key is a successful empty read with
    ///   `val: None`, never a failure.
    /// - **save** - writes the value, then invokes `on_success` with no
    ///   payload.
    /// - **remove** - deletes the key, then invokes `on_success` with no
    ///   payload.
    ///
    /// The missing-payload asymmetry for save and remove matches the remote
    /// API's actual behaviour.
    pub fn data<S, F>(
        &self,
        request: DataRequest,
        on_success: S,
        on_failure: F,
    ) -> Result<(), RequestError>
    where
        S: FnOnce(Option<DataResponse>),
        F: FnOnce(String),
    {
        // Availability is checked before validation, matching the remote
        // shim's ordering.
        let Some(storage) = self.storage.as_deref() else {
            on_failure(STORAGE_UNSUPPORTED.to_string());
            return Ok(());
        };

        match request.validate()? {
            DataOp::Load { key } => {
                debug!(%key, "load");
                match storage.get(&key) {
                    Ok(val) => on_success(Some(DataResponse { key, val })),
                    Err(e) => on_failure(e.to_string()),
                }
            }
            DataOp::Save { key, val } => {
                debug!(%key, "save");
                match storage.set(&key, &val) {
                    Ok(()) => on_success(None),
                    Err(e) => on_failure(e.to_string()),
                }
            }
            DataOp::Remove { key } => {
                debug!(%key, "remove");
                match storage.remove(&key) {
                    Ok(()) => on_success(None),
                    Err(e) => on_failure(e.to_string()),
                }
            }
        }

        Ok(())
    }
}
