//! # Field Schemas
//!
//! Plugin-defined extra fields ("blob" data) are described by schemas: an
//! ordered list of fields and nested groups. The field kind is a closed
//! variant, and rendering is dispatched through a kind→renderer lookup
//! table registered by the embedding host — no runtime type strings.
//!
//! Blob values are JSON objects; a field binds to the entry with its own
//! name, a group binds to a nested object.

use liitos_core::Errors;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// The closed set of field kinds a schema can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free-form text input.
    Text,
    /// Checkbox-style flag.
    Boolean,
}

/// One editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Blob key this field binds to.
    pub name: String,
    /// Display label; falls back to `name` when unset.
    pub label: Option<String>,
    /// What kind of control renders this field.
    pub kind: FieldKind,
    /// Immutable fields can only be set while the record is new.
    pub immutable: bool,
    /// Whether the control is currently disabled.
    pub disabled: bool,
    /// Placeholder text for empty text inputs.
    pub placeholder: Option<String>,
}

impl Field {
    /// A text field bound to `name`.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// A boolean field bound to `name`.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            immutable: false,
            disabled: false,
            placeholder: None,
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the field settable only on new records.
    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    /// Set placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// The label to show: explicit label, else the field name.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// A schema entry: a field, or a named group with a nested schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A single field.
    Field(Field),
    /// A nested group of entries bound to a nested blob object.
    Group {
        /// Blob key the group binds to.
        name: String,
        /// Display label; falls back to `name` when unset.
        label: Option<String>,
        /// The group's own entries.
        schema: Schema,
    },
}

impl Entry {
    /// The label to show for this entry.
    pub fn label_text(&self) -> &str {
        match self {
            Self::Field(field) => field.label_text(),
            Self::Group { name, label, .. } => label.as_deref().unwrap_or(name),
        }
    }
}

impl From<Field> for Entry {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

/// An ordered list of schema entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    entries: Vec<Entry>,
}

impl Schema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn with(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Append a named group.
    pub fn with_group(self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        self.with(Entry::Group {
            name,
            label: None,
            schema,
        })
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Disable the immutable fields when editing an existing record
    /// (`is_new == false`), recursively through groups, and re-enable
    /// them on a new one.
    pub fn apply_edit_state(&mut self, is_new: bool) {
        for entry in &mut self.entries {
            match entry {
                Entry::Field(field) => {
                    if field.immutable {
                        field.disabled = !is_new;
                    }
                }
                Entry::Group { schema, .. } => schema.apply_edit_state(is_new),
            }
        }
    }
}

/// Rendering error: the host forgot to register a renderer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaError {
    /// No renderer in the lookup table for this kind.
    #[error("no renderer registered for {0:?} fields")]
    MissingRenderer(FieldKind),
}

type RenderFn<C> = Box<dyn Fn(&Field, Option<&Value>, Option<&Errors>) -> C + Send + Sync>;

/// One rendered schema row: a label and its content.
#[derive(Debug, PartialEq, Eq)]
pub struct SchemaRow<C> {
    /// Entry label.
    pub label: String,
    /// The rendered control, or nested rows for a group.
    pub content: RowContent<C>,
}

/// Content of a rendered row.
#[derive(Debug, PartialEq, Eq)]
pub enum RowContent<C> {
    /// A rendered field control.
    Input(C),
    /// A group's nested rows.
    Nested(Vec<SchemaRow<C>>),
}

/// The kind→renderer lookup table.
///
/// Renderers receive the field, its current blob value (if any) and the
/// validation sub-errors addressed to it.
pub struct Renderers<C> {
    table: HashMap<FieldKind, RenderFn<C>>,
}

impl<C> Default for Renderers<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Renderers<C> {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Bind a renderer to a field kind, replacing any previous one.
    pub fn register(
        &mut self,
        kind: FieldKind,
        render: impl Fn(&Field, Option<&Value>, Option<&Errors>) -> C + Send + Sync + 'static,
    ) {
        self.table.insert(kind, Box::new(render));
    }

    /// Render one field through the table.
    pub fn render_field(
        &self,
        field: &Field,
        value: Option<&Value>,
        errors: Option<&Errors>,
    ) -> Result<C, SchemaError> {
        let render = self
            .table
            .get(&field.kind)
            .ok_or(SchemaError::MissingRenderer(field.kind))?;
        Ok(render(field, value, errors))
    }

    /// Render a whole schema against a blob, threading each entry's
    /// validation sub-errors down by field name.
    pub fn render_schema(
        &self,
        schema: &Schema,
        blob: &Map<String, Value>,
        errors: Option<&Errors>,
    ) -> Result<Vec<SchemaRow<C>>, SchemaError> {
        schema
            .iter()
            .map(|entry| {
                let label = entry.label_text().to_string();
                let content = match entry {
                    Entry::Field(field) => {
                        let sub_errors = errors.and_then(|e| e.field(&field.name));
                        RowContent::Input(self.render_field(
                            field,
                            blob.get(&field.name),
                            sub_errors.as_ref(),
                        )?)
                    }
                    Entry::Group { name, schema, .. } => {
                        let sub_blob = blob.get(name).and_then(Value::as_object);
                        let sub_errors = errors.and_then(|e| e.field(name));
                        RowContent::Nested(self.render_schema(
                            schema,
                            sub_blob.unwrap_or(&Map::new()),
                            sub_errors.as_ref(),
                        )?)
                    }
                };
                Ok(SchemaRow { label, content })
            })
            .collect()
    }
}

/// Fetch (vivifying if needed) the nested blob object an editor binds
/// to, replacing a non-object value that somehow landed there.
pub fn blob_slot<'a>(blob: &'a mut Map<String, Value>, name: &str) -> &'a mut Map<String, Value> {
    let slot = blob
        .entry(name.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just replaced with an object"),
    }
}
