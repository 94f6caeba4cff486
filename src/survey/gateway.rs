use crate::survey::io_fallback::FallbackFile;
use crate::survey::io_sheets::RemoteError;
use crate::survey::*;

/// Where a response ended up.
#[derive(Debug)]
pub enum Persisted {
    Remote,
    /// The remote store failed with `reason`; the row went to the file at `path`.
    Fallback { path: String, reason: RemoteError },
}

/// Sends each response to the remote store, or to the fallback file when the remote store fails.
///
/// There is no retry and no idempotency key: every call produces one row
/// in exactly one of the two stores.
pub struct PersistenceGateway<S: ResponseStore> {
    remote: S,
    fallback: FallbackFile,
}

impl<S: ResponseStore> PersistenceGateway<S> {
    pub fn new(remote: S, fallback: FallbackFile) -> PersistenceGateway<S> {
        PersistenceGateway { remote, fallback }
    }

    #[cfg(test)]
    pub fn remote(&self) -> &S {
        &self.remote
    }

    /// Any remote error selects the fallback. A fallback error is returned as is.
    pub fn append(&self, row: &ResponseRow) -> SurveyResult<Persisted> {
        match self.remote.append_row(row) {
            Ok(()) => Ok(Persisted::Remote),
            Err(reason) => {
                warn!(
                    "append: remote append failed, writing to {}: {}",
                    self.fallback.path(),
                    reason
                );
                self.fallback.append(row)?;
                Ok(Persisted::Fallback {
                    path: self.fallback.path().to_string(),
                    reason,
                })
            }
        }
    }
}
