use serde::Serialize;
use serde::ser::{self, Serializer};

use crate::foundation::error::{SceneryError, SceneryResult};
use crate::foundation::math::round_to;

/// Build a stable cache key from `tag` and the serialized `args`.
///
/// Floats are rounded to `precision` decimals first, so per-frame parameters that only differ
/// by animation jitter land on the same entry. A float too large to scale keeps its exact value.
/// Non-finite floats are keyed by name (`"inf"`, `"-inf"`, `"NaN"`) instead of collapsing to
/// `null`. Integers, strings and booleans are keyed as-is. `serde_json` maps are sorted, so
/// field order never affects the key.
pub fn cache_key<A: Serialize + ?Sized>(
    tag: &str,
    args: &A,
    precision: u32,
) -> SceneryResult<String> {
    let value = serde_json::to_value(Keyed {
        value: args,
        precision,
    })
    .map_err(|e| SceneryError::validation(format!("memo key serialization failed: {e}")))?;
    Ok(format!("{tag}:{value}"))
}

enum KeyFloat {
    Finite(f64),
    Named(&'static str),
}

fn key_float(v: f64, precision: u32) -> KeyFloat {
    if v.is_nan() {
        return KeyFloat::Named("NaN");
    }
    if v.is_infinite() {
        return KeyFloat::Named(if v > 0.0 { "inf" } else { "-inf" });
    }
    let rounded = round_to(v, precision);
    let kept = if rounded.is_finite() { rounded } else { v };
    // `+ 0.0` folds -0.0 into 0.0 so both signs share a key.
    KeyFloat::Finite(kept + 0.0)
}

/// `value` as it should appear in a key.
struct Keyed<'a, T: ?Sized> {
    value: &'a T,
    precision: u32,
}

impl<T: Serialize + ?Sized> Serialize for Keyed<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(KeySerializer {
            inner: serializer,
            precision: self.precision,
        })
    }
}

/// Forwards to `inner`, rewriting floats on the way through. Compound serializers wrap each
/// element in [`Keyed`] so nested floats get the same treatment.
struct KeySerializer<S> {
    inner: S,
    precision: u32,
}

impl<S> KeySerializer<S> {
    fn keyed<'a, T: ?Sized>(&self, value: &'a T) -> Keyed<'a, T> {
        Keyed {
            value,
            precision: self.precision,
        }
    }
}

macro_rules! forward {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<S::Ok, S::Error> {
                self.inner.$method(v)
            }
        )*
    };
}

impl<S: Serializer> Serializer for KeySerializer<S> {
    type Ok = S::Ok;
    type Error = S::Error;
    type SerializeSeq = KeySerializer<S::SerializeSeq>;
    type SerializeTuple = KeySerializer<S::SerializeTuple>;
    type SerializeTupleStruct = KeySerializer<S::SerializeTupleStruct>;
    type SerializeTupleVariant = KeySerializer<S::SerializeTupleVariant>;
    type SerializeMap = KeySerializer<S::SerializeMap>;
    type SerializeStruct = KeySerializer<S::SerializeStruct>;
    type SerializeStructVariant = KeySerializer<S::SerializeStructVariant>;

    forward! {
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    }

    fn serialize_f32(self, v: f32) -> Result<S::Ok, S::Error> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<S::Ok, S::Error> {
        match key_float(v, self.precision) {
            KeyFloat::Finite(f) => self.inner.serialize_f64(f),
            KeyFloat::Named(name) => self.inner.serialize_str(name),
        }
    }

    fn serialize_none(self) -> Result<S::Ok, S::Error> {
        self.inner.serialize_none()
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<S::Ok, S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_some(&value)
    }

    fn serialize_unit(self) -> Result<S::Ok, S::Error> {
        self.inner.serialize_unit()
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<S::Ok, S::Error> {
        self.inner.serialize_unit_struct(name)
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
    ) -> Result<S::Ok, S::Error> {
        self.inner.serialize_unit_variant(name, variant_index, variant)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<S::Ok, S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_newtype_struct(name, &value)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<S::Ok, S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_newtype_variant(name, variant_index, variant, &value)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, S::Error> {
        let precision = self.precision;
        Ok(KeySerializer {
            inner: self.inner.serialize_seq(len)?,
            precision,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, S::Error> {
        let precision = self.precision;
        Ok(KeySerializer {
            inner: self.inner.serialize_tuple(len)?,
            precision,
        })
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, S::Error> {
        let precision = self.precision;
        Ok(KeySerializer {
            inner: self.inner.serialize_tuple_struct(name, len)?,
            precision,
        })
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, S::Error> {
        let precision = self.precision;
        Ok(KeySerializer {
            inner: self.inner.serialize_tuple_variant(name, variant_index, variant, len)?,
            precision,
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap, S::Error> {
        let precision = self.precision;
        Ok(KeySerializer {
            inner: self.inner.serialize_map(len)?,
            precision,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, S::Error> {
        let precision = self.precision;
        Ok(KeySerializer {
            inner: self.inner.serialize_struct(name, len)?,
            precision,
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant, S::Error> {
        let precision = self.precision;
        Ok(KeySerializer {
            inner: self.inner.serialize_struct_variant(name, variant_index, variant, len)?,
            precision,
        })
    }

    fn is_human_readable(&self) -> bool {
        self.inner.is_human_readable()
    }
}

impl<S: ser::SerializeSeq> ser::SerializeSeq for KeySerializer<S> {
    type Ok = S::Ok;
    type Error = S::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_element(&value)
    }

    fn end(self) -> Result<S::Ok, S::Error> {
        self.inner.end()
    }
}

impl<S: ser::SerializeTuple> ser::SerializeTuple for KeySerializer<S> {
    type Ok = S::Ok;
    type Error = S::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_element(&value)
    }

    fn end(self) -> Result<S::Ok, S::Error> {
        self.inner.end()
    }
}

impl<S: ser::SerializeTupleStruct> ser::SerializeTupleStruct for KeySerializer<S> {
    type Ok = S::Ok;
    type Error = S::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_field(&value)
    }

    fn end(self) -> Result<S::Ok, S::Error> {
        self.inner.end()
    }
}

impl<S: ser::SerializeTupleVariant> ser::SerializeTupleVariant for KeySerializer<S> {
    type Ok = S::Ok;
    type Error = S::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_field(&value)
    }

    fn end(self) -> Result<S::Ok, S::Error> {
        self.inner.end()
    }
}

impl<S: ser::SerializeMap> ser::SerializeMap for KeySerializer<S> {
    type Ok = S::Ok;
    type Error = S::Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), S::Error> {
        let key = self.keyed(key);
        self.inner.serialize_key(&key)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_value(&value)
    }

    fn end(self) -> Result<S::Ok, S::Error> {
        self.inner.end()
    }
}

impl<S: ser::SerializeStruct> ser::SerializeStruct for KeySerializer<S> {
    type Ok = S::Ok;
    type Error = S::Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_field(key, &value)
    }

    fn skip_field(&mut self, key: &'static str) -> Result<(), S::Error> {
        self.inner.skip_field(key)
    }

    fn end(self) -> Result<S::Ok, S::Error> {
        self.inner.end()
    }
}

impl<S: ser::SerializeStructVariant> ser::SerializeStructVariant for KeySerializer<S> {
    type Ok = S::Ok;
    type Error = S::Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), S::Error> {
        let value = self.keyed(value);
        self.inner.serialize_field(key, &value)
    }

    fn skip_field(&mut self, key: &'static str) -> Result<(), S::Error> {
        self.inner.skip_field(key)
    }

    fn end(self) -> Result<S::Ok, S::Error> {
        self.inner.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/memo/key.rs"]
mod tests;
