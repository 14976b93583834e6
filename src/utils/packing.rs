use crate::error::{BridgeError, Result};

/// Bit shifts applied to each byte of a 4-byte group, in byte order.
///
/// The shift at index `i` is where byte `i` of the group lands inside the
/// packed `u32`.
pub type RollTable = [u32; 4];

/// Roll table for big-endian hosts: the first byte is the most significant.
pub const BIG_ENDIAN_ROLL: RollTable = [24, 16, 8, 0];

/// Roll table for little-endian hosts: the first byte is the least significant.
pub const LITTLE_ENDIAN_ROLL: RollTable = [0, 8, 16, 24];

/// The roll table matching this target's native byte order.
#[cfg(target_endian = "big")]
pub const NATIVE_ROLL: RollTable = BIG_ENDIAN_ROLL;

/// The roll table matching this target's native byte order.
#[cfg(target_endian = "little")]
pub const NATIVE_ROLL: RollTable = LITTLE_ENDIAN_ROLL;

/// Packs every 4 bytes of `bytes` into one `u32` using the native roll table.
///
/// Returns [`BridgeError::OutOfBounds`] if the length is not a multiple of 4.
///
/// ```
/// use mediabridge::utils::{bytes_to_ints, ints_to_bytes};
///
/// let bytes = [0x01, 0x02, 0x03, 0x04];
/// let ints = bytes_to_ints(&bytes).unwrap();
/// assert_eq!(ints.len(), 1);
/// assert_eq!(ints_to_bytes(&ints), bytes);
/// ```
pub fn bytes_to_ints(bytes: &[u8]) -> Result<Vec<u32>> {
    bytes_to_ints_with(bytes, &NATIVE_ROLL)
}

/// Unpacks each `u32` into 4 bytes using the native roll table.
pub fn ints_to_bytes(ints: &[u32]) -> Vec<u8> {
    ints_to_bytes_with(ints, &NATIVE_ROLL)
}

/// Same as [`bytes_to_ints`] with an explicit roll table.
pub fn bytes_to_ints_with(bytes: &[u8], roll: &RollTable) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(BridgeError::OutOfBounds {
            len: bytes.len(),
            multiple: 4,
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|group| {
            group
                .iter()
                .zip(roll)
                .fold(0u32, |acc, (&b, &shift)| acc | (b as u32) << shift)
        })
        .collect())
}

/// Same as [`ints_to_bytes`] with an explicit roll table.
pub fn ints_to_bytes_with(ints: &[u32], roll: &RollTable) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(ints.len() * 4);
    for &value in ints {
        for &shift in roll {
            bytes.push((value >> shift) as u8);
        }
    }
    bytes
}
