//! Call-data codec and serde helpers for byte fields.
//!
//! Call data is the ASCII function name followed by `@`-separated,
//! lower-case hex arguments: `SetUserName@9f86d0...`.

use crate::error::BuiltinError;

pub const CALL_DATA_SEPARATOR: char = '@';

/// Function name and raw arguments recovered from call data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallData {
    pub function: String,
    pub arguments: Vec<Vec<u8>>,
}

pub fn encode_call_data<A: AsRef<[u8]>>(function: &str, arguments: &[A]) -> Vec<u8> {
    let mut data = String::from(function);
    for argument in arguments {
        data.push(CALL_DATA_SEPARATOR);
        data.push_str(&hex::encode(argument));
    }
    data.into_bytes()
}

pub fn decode_call_data(data: &[u8]) -> Result<CallData, BuiltinError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| BuiltinError::InvalidCallData(e.to_string()))?;

    let mut parts = text.split(CALL_DATA_SEPARATOR);
    let function = parts.next().unwrap_or_default();
    if function.is_empty() {
        return Err(BuiltinError::InvalidCallData("missing function name".to_string()));
    }

    let arguments = parts
        .map(|part| {
            hex::decode(part)
                .map_err(|e| BuiltinError::InvalidCallData(format!("argument {}: {}", part, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CallData {
        function: function.to_string(),
        arguments,
    })
}

/// Bytes as a hex string
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T: AsRef<[u8]>, S: Serializer>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}

/// ASCII payload bytes as a plain string
pub mod text_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T: AsRef<[u8]>, S: Serializer>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error> {
        let text = std::str::from_utf8(bytes.as_ref()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        Ok(String::deserialize(deserializer)?.into_bytes())
    }
}

/// List of byte strings as a list of hex strings
pub mod hex_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(list: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(list.iter().map(hex::encode))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

/// Arbitrary-precision unsigned integer as a decimal string
pub mod decimal {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<BigUint>().map_err(serde::de::Error::custom)
    }
}
