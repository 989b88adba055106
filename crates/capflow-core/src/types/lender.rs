//! Lender reference data

use serde::{Deserialize, Serialize};

/// A financial institution selectable when provisioning a lender operator.
///
/// Read-only reference data; the client only ever lists lenders to populate
/// a selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lender {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
}
