//! Carat weight model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::catalog;
use atelier_core::types::{DbId, Timestamp};

/// A row from the `carat_weights` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CaratWeight {
    pub id: DbId,
    pub internal_name: String,
    pub display_name: String,
    pub value: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CaratWeight {
    pub fn into_catalog(self) -> catalog::CaratWeight {
        catalog::CaratWeight {
            id: self.id,
            internal_name: self.internal_name,
            display_name: self.display_name,
            value: self.value,
        }
    }
}

/// DTO for creating a new carat weight. An absent `internal_name` is
/// slugified from the display name.
#[derive(Debug, Deserialize)]
pub struct CreateCaratWeight {
    pub internal_name: Option<String>,
    pub display_name: String,
    pub value: f64,
}

/// DTO for updating a carat weight.
#[derive(Debug, Deserialize)]
pub struct UpdateCaratWeight {
    pub internal_name: Option<String>,
    pub display_name: Option<String>,
    pub value: Option<f64>,
}
