//! Author-or-read-only access policy.
//!
//! Every content record carries an author reference. Reads are open to
//! anyone; writes are restricted to that author. The operation kind is an
//! explicit enum so route handlers never dispatch on action-name strings.

use crate::error::CoreError;
use crate::types::DbId;

/// The operation kinds a resource endpoint distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Create,
    Read,
    Update,
    Delete,
}

impl OperationKind {
    /// Whether this kind mutates the target record.
    pub fn is_write(self) -> bool {
        !matches!(self, OperationKind::Read)
    }
}

/// Apply the author-or-read-only rule for an operation against a record
/// owned by `author`.
///
/// - `Read` is always permitted.
/// - `Create` requires any authenticated caller (`author` is ignored; the
///   caller becomes the author of the new record).
/// - `Update` / `Delete` require the caller to be the author. An anonymous
///   caller gets `Unauthorized`; an authenticated non-author gets
///   `Forbidden`, never `NotFound` -- existence is not hidden.
pub fn authorize(
    kind: OperationKind,
    caller: Option<DbId>,
    author: DbId,
) -> Result<(), CoreError> {
    match kind {
        OperationKind::Read => Ok(()),
        OperationKind::Create => {
            if caller.is_some() {
                Ok(())
            } else {
                Err(CoreError::Unauthorized("Authentication required".into()))
            }
        }
        OperationKind::Update | OperationKind::Delete => match caller {
            None => Err(CoreError::Unauthorized("Authentication required".into())),
            Some(id) if id == author => Ok(()),
            Some(_) => Err(CoreError::Forbidden(
                "Only the author may modify this record".into(),
            )),
        },
    }
}
