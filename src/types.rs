// src/types.rs - Shared type aliases

use std::collections::HashMap;

use serde_json::Value;

/// Generic metadata container attached to errors
pub type Metadata = HashMap<String, Value>;

/// Backend-assigned product identifier (opaque string)
pub type ProductId = String;

/// Stock-keeping variant label within a product (e.g. a size)
pub type VariantLabel = String;
