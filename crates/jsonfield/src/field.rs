// JSON column wrappers with sqlx bind/result conversions

use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::decode::Decode;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef};
use sqlx::Type;

use crate::codec;

/// A value stored as canonical JSON text in a TEXT column.
///
/// Binding encodes the wrapped value; fetching decodes the stored text back
/// into it. `T` defaults to [`serde_json::Value`] for schemaless columns, but
/// any `Serialize + DeserializeOwned` type works:
///
/// ```ignore
/// struct Row {
///     row_name: String,
///     json_record: JsonField,
/// }
/// ```
///
/// NULL columns map through `Option<JsonField<T>>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonField<T = serde_json::Value>(pub T);

/// Like [`JsonField`], but stores ASCII-escaped JSON text.
///
/// Every non-ASCII character is written as a `\uXXXX` escape, so the stored
/// bytes are 7-bit clean regardless of connection charset. Reads are
/// interchangeable with [`JsonField`]; only the bind side differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AsciiJsonField<T = serde_json::Value>(pub T);

impl<T> JsonField<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsciiJsonField<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for JsonField<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> From<T> for AsciiJsonField<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for JsonField<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for JsonField<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Deref for AsciiJsonField<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for AsciiJsonField<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

// The physical form is text, so type info and compatibility defer to &str.

impl<T> Type<Sqlite> for JsonField<T> {
    fn type_info() -> SqliteTypeInfo {
        <&str as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <&str as Type<Sqlite>>::compatible(ty)
    }
}

impl<T> Type<Sqlite> for AsciiJsonField<T> {
    fn type_info() -> SqliteTypeInfo {
        <&str as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <&str as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q, T: Serialize> Encode<'q, Sqlite> for JsonField<T> {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        let text = codec::to_text(&self.0)?;
        buf.push(SqliteArgumentValue::Text(Cow::Owned(text)));
        Ok(IsNull::No)
    }
}

impl<'q, T: Serialize> Encode<'q, Sqlite> for AsciiJsonField<T> {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        let text = codec::to_ascii_text(&self.0)?;
        buf.push(SqliteArgumentValue::Text(Cow::Owned(text)));
        Ok(IsNull::No)
    }
}

impl<'r, T: DeserializeOwned> Decode<'r, Sqlite> for JsonField<T> {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        Ok(Self(codec::from_text(text)?))
    }
}

impl<'r, T: DeserializeOwned> Decode<'r, Sqlite> for AsciiJsonField<T> {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        Ok(Self(codec::from_text(text)?))
    }
}
