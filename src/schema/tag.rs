use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Primitive runtime type tag written as a property's `type`.
///
/// Text, numbers and booleans keep their own tag. Everything else (dates,
/// lists, nested models) collapses to `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveTag {
    String,
    Number,
    Boolean,
    Object,
}

impl PrimitiveTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveTag::String => "string",
            PrimitiveTag::Number => "number",
            PrimitiveTag::Boolean => "boolean",
            PrimitiveTag::Object => "object",
        }
    }
}

impl fmt::Display for PrimitiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static mapping from a Rust field type to the tag its schema property carries.
///
/// Nested models declared with [`model_schema!`](crate::model_schema) get an
/// `object` implementation for free; other custom types implement this by hand.
pub trait TypeTag {
    const TAG: PrimitiveTag;
}

macro_rules! impl_type_tag {
    ($tag:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl TypeTag for $ty {
                const TAG: PrimitiveTag = PrimitiveTag::$tag;
            }
        )+
    };
}

impl_type_tag!(String => String, str, char);
impl_type_tag!(Number => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_type_tag!(Boolean => bool);
impl_type_tag!(Object => NaiveDate, NaiveDateTime, NaiveTime, SystemTime, serde_json::Value);

impl<Tz: TimeZone> TypeTag for DateTime<Tz> {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

impl<T> TypeTag for [T] {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

impl<T> TypeTag for Vec<T> {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

impl<T> TypeTag for VecDeque<T> {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

impl<T, S> TypeTag for HashSet<T, S> {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

impl<T> TypeTag for BTreeSet<T> {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

impl<K, V, S> TypeTag for HashMap<K, V, S> {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

impl<K, V> TypeTag for BTreeMap<K, V> {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

impl<K, V, S> TypeTag for IndexMap<K, V, S> {
    const TAG: PrimitiveTag = PrimitiveTag::Object;
}

// Wrappers report the tag of what they hold.
impl<T: TypeTag> TypeTag for Option<T> {
    const TAG: PrimitiveTag = T::TAG;
}

impl<T: TypeTag + ?Sized> TypeTag for Box<T> {
    const TAG: PrimitiveTag = T::TAG;
}

impl<T: TypeTag + ?Sized> TypeTag for &T {
    const TAG: PrimitiveTag = T::TAG;
}
