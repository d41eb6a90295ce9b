// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion of list-typed alarm fields to and from the JSON text stored in
//! SQLite columns.
//!
//! `None` always maps to `None`. Malformed text fails with
//! [`Error::Codec`](crate::Error::Codec); no further validation is done.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{AlarmTitleType, CustomRepeat, Error, Repeat};

/// Encodes a value to its stored text form.
pub fn encode<T: Serialize + ?Sized>(value: Option<&T>) -> Result<Option<String>, Error> {
    value
        .map(serde_json::to_string)
        .transpose()
        .map_err(Error::from)
}

/// Decodes a value from its stored text form.
pub fn decode<T: DeserializeOwned>(text: Option<&str>) -> Result<Option<T>, Error> {
    text.map(serde_json::from_str)
        .transpose()
        .map_err(Error::from)
}

macro_rules! field_codec {
    ($from: ident, $to: ident, $ty: ty) => {
        pub fn $from(value: Option<&$ty>) -> Result<Option<String>, Error> {
            encode(value)
        }

        pub fn $to(text: Option<&str>) -> Result<Option<$ty>, Error> {
            decode(text)
        }
    };
}

field_codec!(from_integer_list, to_integer_list, Vec<i32>);
field_codec!(from_list_integer_list, to_list_integer_list, Vec<Vec<i32>>);
field_codec!(from_boolean_list, to_boolean_list, Vec<bool>);
field_codec!(from_repeat_list, to_repeat_list, Vec<Repeat>);
field_codec!(from_alarm_title_type, to_alarm_title_type, AlarmTitleType);
field_codec!(
    from_custom_repeat_list,
    to_custom_repeat_list,
    Vec<Option<CustomRepeat>>
);
