/// Describe an ESP3 packet type byte.
///
/// # Example
/// ```
/// use enocean::desc::packet_type_description;
///
/// assert_eq!(packet_type_description(0x0A), "RADIO_ERP2 (ERP2 protocol radio telegram)");
/// assert_eq!(packet_type_description(0x90), "available (MSC and messages)");
/// ```
#[must_use]
pub fn packet_type_description(packet_type: u8) -> &'static str {
    match packet_type {
        0x01 => "RADIO_ERP1 (Radio telegram)",
        0x02 => "RESPONSE (Response to any packet)",
        0x03 => "RADIO_SUB_TEL (Radio subtelegram)",
        0x04 => "EVENT (Event message)",
        0x05 => "COMMON_COMMAND (Common command)",
        0x06 => "SMART_ACK_COMMAND (Smart Ack command)",
        0x07 => "REMOTE_MAN_COMMAND (Remote management command)",
        0x09 => "RADIO_MESSAGE (Radio message)",
        0x0A => "RADIO_ERP2 (ERP2 protocol radio telegram)",
        0x10 => "RADIO_802_15_4 (802_15_4_RAW Packet)",
        0x11 => "COMMAND_2_4 (2.4 GHz Command)",
        0x80..=0xFF => "available (MSC and messages)",
        _ => "(Reserved for EnOcean)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_ranges() {
        assert_eq!(packet_type_description(0x00), "(Reserved for EnOcean)");
        assert_eq!(packet_type_description(0x08), "(Reserved for EnOcean)");
        assert_eq!(packet_type_description(0x7F), "(Reserved for EnOcean)");
        assert_eq!(packet_type_description(0x80), "available (MSC and messages)");
        assert_eq!(packet_type_description(0xFF), "available (MSC and messages)");
    }

    #[test]
    fn named() {
        assert_eq!(packet_type_description(0x01), "RADIO_ERP1 (Radio telegram)");
        assert_eq!(packet_type_description(0x11), "COMMAND_2_4 (2.4 GHz Command)");
    }
}
