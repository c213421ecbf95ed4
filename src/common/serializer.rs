use crate::constants::FRAME_DELIMITER;

/// Serializa a JSON y agrega el delimitador de fin de mensaje
pub fn serialize<T: ?Sized>(req: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: serde::Serialize,
{
    let mut serialized = serde_json::to_vec(req)?;
    serialized.push(FRAME_DELIMITER);
    Ok(serialized)
}

/// Deserializa un mensaje recibido, descartando el delimitador si esta presente
pub fn deserialize<'a, T>(encoded: &'a mut Vec<u8>) -> Result<T, serde_json::Error>
where
    T: serde::de::Deserialize<'a>,
{
    if encoded.last() == Some(&FRAME_DELIMITER) {
        encoded.pop();
    }
    let decoded: T = serde_json::from_slice(&encoded[..])?;
    Ok(decoded)
}
