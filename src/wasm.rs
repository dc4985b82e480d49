//! WebAssembly bindings for recsql
//!
//! This module provides JavaScript-friendly APIs for describing record types
//! and generating CREATE TABLE DDL from them.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { WasmDescriptor, generateDdl } from 'recsql';
//!
//! await init();
//!
//! // Describe the element type and the root record
//! const item = new WasmDescriptor('InvoiceItem');
//! item.addScalarField('price', 'decimal');
//! item.addReferenceField('item');
//!
//! const invoice = new WasmDescriptor('Invoice');
//! invoice.addScalarField('internalId', 'text');
//! invoice.addReferenceField('entity');
//! invoice.addCollectionField('itemList', item);
//!
//! const result = generateDdl(invoice, null);
//! if (result.success) {
//!   console.log(result.ddl);
//!   console.log(result.tables); // structured table definitions
//! } else {
//!   console.error(result.error);
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::descriptor::{ScalarKind, TypeDescriptor};
use crate::sql::ddl::DdlEmitter;
use crate::sql::synthesize::synthesize_named;

/// Helper to serialize values as plain JS objects (not Maps)
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_scalar_kind(kind: &str) -> Option<ScalarKind> {
    match kind.to_lowercase().as_str() {
        "text" | "string" | "char" => Some(ScalarKind::Text),
        "integer" | "int" => Some(ScalarKind::Integer),
        "long" | "bigint" => Some(ScalarKind::Long),
        "short" => Some(ScalarKind::Short),
        "byte" => Some(ScalarKind::Byte),
        "boolean" | "bool" => Some(ScalarKind::Boolean),
        "datetime" | "date" => Some(ScalarKind::DateTime),
        "decimal" => Some(ScalarKind::Decimal),
        "double" => Some(ScalarKind::Double),
        "float" | "single" => Some(ScalarKind::Float),
        "enumeration" | "enum" => Some(ScalarKind::Enumeration),
        _ => None,
    }
}

/// Record type descriptor for WASM
///
/// This is a JavaScript-friendly wrapper around the Rust descriptor types.
#[wasm_bindgen]
pub struct WasmDescriptor {
    inner: TypeDescriptor,
}

#[wasm_bindgen]
impl WasmDescriptor {
    /// Create a descriptor for a named record type
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> WasmDescriptor {
        WasmDescriptor {
            inner: TypeDescriptor::new(name),
        }
    }

    /// Add a scalar field. `kind` is one of: text, integer, long, short,
    /// byte, boolean, datetime, decimal, double, float, enum.
    #[wasm_bindgen(js_name = addScalarField)]
    pub fn add_scalar_field(&mut self, name: &str, kind: &str) -> Result<(), JsValue> {
        let kind = parse_scalar_kind(kind)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown scalar kind '{}'", kind)))?;
        self.inner = std::mem::take(&mut self.inner).with_scalar(name, kind);
        Ok(())
    }

    /// Add a reference field (flattened into three columns)
    #[wasm_bindgen(js_name = addReferenceField)]
    pub fn add_reference_field(&mut self, name: &str) {
        self.inner = std::mem::take(&mut self.inner).with_reference(name);
    }

    /// Add a collection field with the given element type
    #[wasm_bindgen(js_name = addCollectionField)]
    pub fn add_collection_field(&mut self, name: &str, element: &WasmDescriptor) {
        self.inner = std::mem::take(&mut self.inner).with_collection(name, element.inner.clone());
    }

    /// Add a field of unsupported shape (skipped by synthesis)
    #[wasm_bindgen(js_name = addOtherField)]
    pub fn add_other_field(&mut self, name: &str) {
        self.inner = std::mem::take(&mut self.inner).with_other(name);
    }

    /// Build a descriptor from JSON
    ///
    /// Expected format:
    /// ```json
    /// {
    ///   "name": "Invoice",
    ///   "fields": [
    ///     { "name": "internalId", "kind": "text" },
    ///     { "name": "entity", "shape": "reference" },
    ///     { "name": "itemList", "shape": "collection",
    ///       "element": { "name": "InvoiceItem", "fields": [...] } }
    ///   ]
    /// }
    /// ```
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(descriptor_json: JsValue) -> Result<WasmDescriptor, JsValue> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(descriptor_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid JSON: {}", e)))?;
        let inner = parse_descriptor_json(&value).map_err(|e| JsValue::from_str(&e))?;
        Ok(WasmDescriptor { inner })
    }

    /// The described type's name
    #[wasm_bindgen(js_name = typeName)]
    pub fn type_name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Names of the described fields
    #[wasm_bindgen(js_name = getFieldNames)]
    pub fn get_field_names(&self) -> JsValue {
        let names: Vec<&str> = self.inner.fields().iter().map(|f| f.name.as_str()).collect();
        to_js_value(&names)
    }
}

fn parse_descriptor_json(value: &serde_json::Value) -> Result<TypeDescriptor, String> {
    let name = value["name"]
        .as_str()
        .ok_or_else(|| "Missing 'name' field".to_string())?;
    let mut descriptor = TypeDescriptor::new(name);

    if let Some(fields) = value["fields"].as_array() {
        for field in fields {
            let field_name = field["name"]
                .as_str()
                .ok_or_else(|| "Missing field 'name'".to_string())?;

            if let Some(kind) = field["kind"].as_str() {
                let kind = parse_scalar_kind(kind)
                    .ok_or_else(|| format!("Unknown scalar kind '{}'", kind))?;
                descriptor = descriptor.with_scalar(field_name, kind);
                continue;
            }

            match field["shape"].as_str() {
                Some("reference") => descriptor = descriptor.with_reference(field_name),
                Some("collection") => {
                    let element = parse_descriptor_json(&field["element"])
                        .map_err(|e| format!("Invalid element for '{}': {}", field_name, e))?;
                    descriptor = descriptor.with_collection(field_name, element);
                }
                Some("other") | None => descriptor = descriptor.with_other(field_name),
                Some(shape) => return Err(format!("Unknown field shape '{}'", shape)),
            }
        }
    }

    Ok(descriptor)
}

/// Synthesize a schema and render its DDL
///
/// # Arguments
/// * `descriptor` - The root record type description
/// * `table_name` - Optional root table name override
///
/// # Returns
/// JSON object with:
/// - `success`: boolean
/// - `ddl`: the CREATE TABLE script (if successful)
/// - `tables`: structured table definitions (if successful)
/// - `error`: error message (if failed)
#[wasm_bindgen(js_name = generateDdl)]
pub fn generate_ddl(descriptor: &WasmDescriptor, table_name: Option<String>) -> JsValue {
    match synthesize_named(&descriptor.inner, table_name.as_deref()) {
        Ok(schema) => {
            let ddl = DdlEmitter::new().emit_schema(&schema);
            to_js_value(&serde_json::json!({
                "success": true,
                "ddl": ddl,
                "tables": schema,
            }))
        }
        Err(e) => to_js_value(&serde_json::json!({
            "success": false,
            "error": e.to_string(),
        })),
    }
}
