//! Record type descriptors: the input model for schema synthesis.
//!
//! A [`TypeDescriptor`] is an explicit, statically constructed description of
//! a record type: its name plus an ordered list of fields, each tagged with a
//! [`FieldShape`]. Descriptors are built at the system boundary (by hand or by
//! a generator) and handed to the synthesizer; the core never introspects live
//! values or runtime types.
//!
//! Field order is insertion order and determines column emission order.

/// Serializer helper flags carried by wire-generated record types
/// (`amountSpecified` alongside `amount`). Never persisted.
pub const SERIALIZER_ARTIFACT_SUFFIX: &str = "Specified";

/// The identity field most source records carry; becomes the primary key.
pub const IDENTITY_FIELD: &str = "internalId";

/// Naming convention marking a one-to-many collection field.
pub const COLLECTION_SUFFIX: &str = "List";

/// Primitive value kinds a scalar field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    /// Strings and single characters
    Text,
    /// 32-bit integer
    Integer,
    /// 64-bit integer
    Long,
    /// 16-bit integer
    Short,
    /// 8-bit integer
    Byte,
    Boolean,
    DateTime,
    /// Fixed-point decimal
    Decimal,
    /// Double-precision float (persisted as fixed-point)
    Double,
    /// Single-precision float
    Float,
    /// Enumeration value, stored as its text label
    Enumeration,
}

/// Shape of a single field on a record type.
///
/// The set of recognized shapes is sealed; anything the synthesizer has no
/// rule for is described as [`FieldShape::Other`] and skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldShape {
    /// A primitive value, persisted as one column.
    Scalar(ScalarKind),
    /// A record reference (identifier, display name, type label), flattened
    /// into three columns on the owning table.
    Reference,
    /// Zero-or-more child records of the given element type, persisted as a
    /// child table. Only honored on fields following the `*List` naming
    /// convention; a list-named field whose element type could not be
    /// discovered is described as [`FieldShape::Other`] instead.
    Collection(TypeDescriptor),
    /// Unsupported shape, skipped by the synthesizer.
    Other,
}

/// A named field and its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub shape: FieldShape,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, shape: FieldShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Read-only description of a record type: a name plus ordered fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Create a descriptor with no fields yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The type's name (default root table name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the descriptor carries no usable name. A blank name is the
    /// Rust rendering of an absent descriptor and is rejected by synthesis.
    pub fn is_unnamed(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Append a field, preserving insertion order.
    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Builder form of [`add_field`](Self::add_field) for a scalar field.
    pub fn with_scalar(mut self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.add_field(FieldDescriptor::new(name, FieldShape::Scalar(kind)));
        self
    }

    /// Builder form for a reference field.
    pub fn with_reference(mut self, name: impl Into<String>) -> Self {
        self.add_field(FieldDescriptor::new(name, FieldShape::Reference));
        self
    }

    /// Builder form for a collection field of the given element type.
    pub fn with_collection(mut self, name: impl Into<String>, element: TypeDescriptor) -> Self {
        self.add_field(FieldDescriptor::new(name, FieldShape::Collection(element)));
        self
    }

    /// Builder form for a field of unsupported shape.
    pub fn with_other(mut self, name: impl Into<String>) -> Self {
        self.add_field(FieldDescriptor::new(name, FieldShape::Other));
        self
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Check for a field by name (case-insensitive).
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Ordered fields participating in root-table synthesis.
    ///
    /// Filters out serializer artifacts (`*Specified`) and a field duplicating
    /// the identity column the synthesizer materializes itself.
    pub fn persisted_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| {
            !f.name.ends_with(SERIALIZER_ARTIFACT_SUFFIX)
                && !f.name.eq_ignore_ascii_case(IDENTITY_FIELD)
        })
    }

    /// Ordered fields participating in child-table synthesis.
    ///
    /// Collection element types carry no synthesizer-materialized identity, so
    /// only serializer artifacts are filtered here.
    pub fn element_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| !f.name.ends_with(SERIALIZER_ARTIFACT_SUFFIX))
    }
}
