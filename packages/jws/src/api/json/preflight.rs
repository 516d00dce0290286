//! Pre-serialization checks for the JSON encoder
//!
//! `serde_json` writes non-finite floats as `null` and recurses without a
//! depth bound when building a `Value`. This serializer walks the value once,
//! without producing output, and rejects both before `serde_json` runs.

use serde::ser::{self, Serialize};
use std::fmt;

#[derive(Debug)]
pub(crate) struct PreflightError(pub(crate) String);

impl fmt::Display for PreflightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PreflightError {}

impl ser::Error for PreflightError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

type Result<T = ()> = std::result::Result<T, PreflightError>;

// Structs serde_json uses internally to carry number and raw-value text; they
// are scalars in the output.
const NUMBER_TOKEN: &str = "$serde_json::private::Number";
const RAW_VALUE_TOKEN: &str = "$serde_json::private::RawValue";

/// Walks a serializable value, tracking container depth as `serde_json`
/// would lay it out.
pub(crate) struct Preflight {
    depth: usize,
    max_depth: usize,
    open: Vec<usize>,
}

impl Preflight {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
            open: Vec::new(),
        }
    }

    pub(crate) fn check<T: Serialize + ?Sized>(value: &T, max_depth: usize) -> Result {
        value.serialize(&mut Self::new(max_depth))
    }

    fn enter(&mut self, levels: usize) -> Result {
        self.open.push(levels);
        self.depth += levels;
        if self.depth > self.max_depth {
            return Err(PreflightError(format!(
                "maximum nesting depth of {} exceeded",
                self.max_depth
            )));
        }
        Ok(())
    }

    fn leave(&mut self) -> Result {
        let levels = self.open.pop().unwrap_or_default();
        self.depth -= levels;
        Ok(())
    }

    fn float(value: f64) -> Result {
        if value.is_finite() {
            Ok(())
        } else {
            Err(PreflightError(format!(
                "non-finite float {value} cannot be represented in JSON"
            )))
        }
    }
}

impl ser::Serializer for &mut Preflight {
    type Ok = ();
    type Error = PreflightError;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _v: bool) -> Result {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Result {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Result {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Result {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Result {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> Result {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Result {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Result {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Result {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Result {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> Result {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result {
        Preflight::float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result {
        Preflight::float(v)
    }

    fn serialize_char(self, _v: char) -> Result {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Result {
        Ok(())
    }

    // serde_json writes bytes as an array of numbers
    fn serialize_bytes(self, _v: &[u8]) -> Result {
        self.enter(1)?;
        self.leave()
    }

    fn serialize_none(self) -> Result {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result {
        value.serialize(self)
    }

    // Externally tagged: `{"Variant": value}`
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result {
        self.enter(1)?;
        value.serialize(&mut *self)?;
        self.leave()
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.enter(1)?;
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        self.enter(1)?;
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.enter(1)?;
        Ok(self)
    }

    // `{"Variant": [..]}`
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.enter(2)?;
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.enter(1)?;
        Ok(self)
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        let levels = if name == NUMBER_TOKEN || name == RAW_VALUE_TOKEN {
            0
        } else {
            1
        };
        self.enter(levels)?;
        Ok(self)
    }

    // `{"Variant": {..}}`
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.enter(2)?;
        Ok(self)
    }
}

impl ser::SerializeSeq for &mut Preflight {
    type Ok = ();
    type Error = PreflightError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result {
        self.leave()
    }
}

impl ser::SerializeTuple for &mut Preflight {
    type Ok = ();
    type Error = PreflightError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result {
        self.leave()
    }
}

impl ser::SerializeTupleStruct for &mut Preflight {
    type Ok = ();
    type Error = PreflightError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result {
        self.leave()
    }
}

impl ser::SerializeTupleVariant for &mut Preflight {
    type Ok = ();
    type Error = PreflightError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result {
        self.leave()
    }
}

// Keys are left to serde_json, which rejects anything that is not a string
// or a primitive it can stringify.
impl ser::SerializeMap for &mut Preflight {
    type Ok = ();
    type Error = PreflightError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, _key: &T) -> Result {
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result {
        self.leave()
    }
}

impl ser::SerializeStruct for &mut Preflight {
    type Ok = ();
    type Error = PreflightError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _key: &'static str, value: &T) -> Result {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result {
        self.leave()
    }
}

impl ser::SerializeStructVariant for &mut Preflight {
    type Ok = ();
    type Error = PreflightError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _key: &'static str, value: &T) -> Result {
        value.serialize(&mut **self)
    }

    fn end(self) -> Result {
        self.leave()
    }
}
