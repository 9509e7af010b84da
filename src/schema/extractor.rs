//! Property extraction.
//!
//! [`extract_shape`] reads the static field table a model declares through
//! [`ModelSchema`] (usually generated with [`model_schema!`](crate::model_schema))
//! and returns the fields in reverse declaration order. Tags come from the
//! field types, so a model only has one possible shape.

use std::marker::PhantomData;

use crate::schema::{FieldDescriptor, TypeShape, TypeTag};

/// A model with a statically declared field table.
pub trait ModelSchema {
    /// Name used as the key under `definitions`.
    fn schema_name() -> &'static str;

    /// Fields in declaration order.
    fn fields() -> Vec<FieldDescriptor>;
}

/// Extracts the shape of `T`, optionally under a different display name.
pub fn extract_shape<T: ModelSchema>(name: Option<&str>) -> TypeShape {
    TypeShape::from_declared(name.unwrap_or(T::schema_name()), T::fields())
}

/// Builds a descriptor for a struct field, taking the tag from the field's type.
///
/// The closure is never called; it only pins `T` to the field's type so a
/// declared table cannot disagree with the struct it describes.
pub fn field_of<M, T, F>(name: &str, _field: F) -> FieldDescriptor
where
    T: TypeTag + ?Sized,
    F: Fn(&M) -> PhantomData<T>,
{
    FieldDescriptor::new(name, T::TAG)
}

#[doc(hidden)]
pub fn pin_type<T: ?Sized>(_field: &T) -> PhantomData<T> {
    PhantomData
}

/// Implements [`ModelSchema`] and [`TypeTag`] for a struct from a list of its fields.
///
/// ```
/// use swaggify::model_schema;
/// use swaggify::schema::{ModelSchema, PrimitiveTag};
///
/// #[derive(Default)]
/// pub struct Phone {
///     first_name: String,
///     phone: u64,
/// }
///
/// model_schema!(Phone {
///     first_name => "firstName",
///     phone,
/// });
///
/// assert_eq!(Phone::schema_name(), "Phone");
/// assert_eq!(Phone::fields()[0].name, "firstName");
/// assert_eq!(Phone::fields()[1].tag, PrimitiveTag::Number);
/// ```
///
/// Use `model_schema!(Phone as "Mobile" { ... })` to register under another name.
#[macro_export]
macro_rules! model_schema {
    ($model:ident { $($field:ident $(=> $key:literal)?),* $(,)? }) => {
        $crate::model_schema!($model as (stringify!($model)) { $($field $(=> $key)?),* });
    };
    ($model:ty as $name:tt { $($field:ident $(=> $key:literal)?),* $(,)? }) => {
        impl $crate::schema::ModelSchema for $model {
            fn schema_name() -> &'static str {
                $name
            }

            fn fields() -> ::std::vec::Vec<$crate::schema::FieldDescriptor> {
                ::std::vec![
                    $(
                        $crate::schema::field_of(
                            $crate::__field_key!($field $(, $key)?),
                            |model: &$model| $crate::schema::pin_type(&model.$field),
                        )
                    ),*
                ]
            }
        }

        impl $crate::schema::TypeTag for $model {
            const TAG: $crate::schema::PrimitiveTag = $crate::schema::PrimitiveTag::Object;
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $key:literal) => {
        $key
    };
}
