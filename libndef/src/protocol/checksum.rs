// libndef/src/protocol/checksum.rs

/// Compute the ISO/IEC 14443-3 Type A CRC (CRC_A).
///
/// Preset 0x6363, reflected polynomial x^16 + x^12 + x^5 + 1, result
/// transmitted LSB first. Readers append it to every READ response.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(0x6363u16, |crc, &b| {
        let mut ch = b ^ (crc & 0x00FF) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4)
    });
    crc.to_le_bytes()
}

/// Check a frame whose last two bytes are its CRC_A.
pub fn verify_crc_a(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }
    let (data, crc) = frame.split_at(frame.len() - 2);
    crc_a(data) == [crc[0], crc[1]]
}
