//! Field metadata for validated structs.

use leafkit_core::IsZero;

/// A struct that can describe its fields for validation.
///
/// Implement it by hand or with [`impl_fields!`](crate::impl_fields).
pub trait Fields {
    /// The struct's fields, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<T: Fields + ?Sized> Fields for &T {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

impl<T: Fields + ?Sized> Fields for Box<T> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// One field of a [`Fields`] struct.
pub struct Field<'a> {
    /// Serialized name, used to build the reported path.
    pub name: &'a str,
    /// Whether an empty value is an error.
    pub required: bool,
    /// The field's value.
    pub value: FieldValue<'a>,
}

/// The value side of a [`Field`].
pub enum FieldValue<'a> {
    /// A value checked with [`IsZero`].
    Leaf(&'a dyn IsZero),
    /// A struct whose own fields are validated recursively.
    Nested(&'a dyn Fields),
}

impl<'a> Field<'a> {
    /// A field that must not be empty.
    pub fn required(name: &'a str, value: &'a dyn IsZero) -> Self {
        Self {
            name,
            required: true,
            value: FieldValue::Leaf(value),
        }
    }

    /// A field that may be empty.
    pub fn optional(name: &'a str, value: &'a dyn IsZero) -> Self {
        Self {
            name,
            required: false,
            value: FieldValue::Leaf(value),
        }
    }

    /// A nested struct validated with the same rules as its parent.
    pub fn nested(name: &'a str, value: &'a dyn Fields) -> Self {
        Self {
            name,
            required: true,
            value: FieldValue::Nested(value),
        }
    }

    /// A nested struct whose empty fields are never errors.
    pub fn optional_nested(name: &'a str, value: &'a dyn Fields) -> Self {
        Self {
            name,
            required: false,
            value: FieldValue::Nested(value),
        }
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.value {
            FieldValue::Leaf(_) => "leaf",
            FieldValue::Nested(_) => "nested",
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("kind", &kind)
            .finish()
    }
}

/// Implement [`Fields`] by listing each field with its constructor.
///
/// Each entry is `<kind> "<name>" => <field>`, where `<kind>` is one of
/// `required`, `optional`, `nested` or `optional_nested`.
///
/// ```
/// use leafkit_validation::{impl_fields, validate_struct_fields};
///
/// struct Database { url: String, pool: u32 }
/// impl_fields!(Database {
///     required "url" => url,
///     optional "pool" => pool,
/// });
///
/// let db = Database { url: "postgres://".into(), pool: 0 };
/// assert_eq!(validate_struct_fields(&db, "").unwrap(), vec!["pool"]);
/// ```
#[macro_export]
macro_rules! impl_fields {
    ($t:ty { $($kind:ident $name:literal => $field:tt),* $(,)? }) => {
        impl $crate::Fields for $t {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![$($crate::Field::$kind($name, &self.$field)),*]
            }
        }
    };
}
