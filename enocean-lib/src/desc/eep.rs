//! RORG/FUNC/TYPE names for equipment profile ids.

#[cfg(feature = "serde")]
use serde::Serialize;

/// The segments of a profile id along with whatever names are known for them.
///
/// Segments are filled left to right and the lookup stops at the first segment
/// that has no name, so e.g. an unknown FUNC leaves `type_` and `type_desc` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EepDescription {
    pub rorg: String,
    pub rorg_desc: String,
    pub func: String,
    pub func_desc: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_: String,
    pub type_desc: String,
}

fn is_hex_pair(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}

/// Describe `eep`, which should be in the canonical `RR-FF-TT` form. Prefixes such
/// as `"D5"` are accepted and describe only the segments present.
///
/// # Example
/// ```
/// use enocean::desc::describe_eep;
///
/// let desc = describe_eep("A5-02-05");
/// assert_eq!(desc.rorg_desc, "4BS Telegram");
/// assert_eq!(desc.func_desc, "Temperature Sensors");
/// assert_eq!(desc.type_desc, "Temperature Sensor Range 0℃ to +40℃");
/// ```
#[must_use]
pub fn describe_eep(eep: &str) -> EepDescription {
    let mut desc = EepDescription::default();
    let mut segments = eep.split('-');

    let Some(rorg) = segments.next().filter(|s| is_hex_pair(s)) else {
        return desc;
    };
    desc.rorg = rorg.to_string();
    let Some(name) = rorg_name(rorg) else {
        return desc;
    };
    desc.rorg_desc = name.to_string();

    let Some(func) = segments.next().filter(|s| is_hex_pair(s)) else {
        return desc;
    };
    desc.func = func.to_string();
    let Some(name) = func_name(rorg, func) else {
        return desc;
    };
    desc.func_desc = name.to_string();

    let Some(type_) = segments.next().filter(|s| is_hex_pair(s)) else {
        return desc;
    };
    desc.type_ = type_.to_string();
    if let Some(name) = type_name(rorg, func, type_) {
        desc.type_desc = name.to_string();
    }
    desc
}

fn rorg_name(rorg: &str) -> Option<&'static str> {
    let name = match rorg {
        "F6" => "RPS Telegram",
        "D5" => "1BS Telegram",
        "A5" => "4BS Telegram",
        "D2" => "VLD Telegram",
        _ => return None,
    };
    Some(name)
}

fn func_name(rorg: &str, func: &str) -> Option<&'static str> {
    let name = match (rorg, func) {
        ("F6", "02") => "Rocker Switch, 2 Rocker",
        ("F6", "03") => "Rocker Switch, 4 Rocker",
        ("F6", "04") => "Position Switch, Home and Office Application",
        ("F6", "05") => "Detectors",
        ("F6", "10") => "Mechanical Handle",
        ("D5", "00") => "Contacts and Switches",
        ("A5", "02") => "Temperature Sensors",
        ("A5", "04") => "Temperature and Humidity Sensor",
        ("A5", "05") => "Barometric Sensor",
        ("A5", "06") => "Light Sensor",
        ("A5", "07") => "Occupancy Sensor",
        ("A5", "08") => "Light, Temperature and Occupancy Sensor",
        ("A5", "09") => "Gas Sensor",
        ("A5", "10") => "Room Operating Panel",
        ("A5", "11") => "Controller Status",
        ("A5", "12") => "Automated Meter Reading (AMR)",
        ("A5", "13") => "Environmental Applications",
        ("A5", "14") => "Multi-Func Sensor",
        ("A5", "20") => "HVAC Components",
        ("A5", "30") => "Digital Input",
        ("A5", "37") => "Energy Management",
        ("A5", "38") => "Central Command",
        ("A5", "3F") => "Universal",
        ("D2", "00") => "Room Control Panel (RCP)",
        ("D2", "01") => "Electronic switches and dimmers with Energy Measurement and Local Control",
        ("D2", "02") => "Sensors for Temperature, Illumination, Occupancy And Smoke",
        ("D2", "03") => "Light, Switching + Blind Control",
        ("D2", "04") => "CO2, Humidity, Temperature, Day/Night and Autonomy",
        ("D2", "05") => "Blinds Control for Position and Angle",
        ("D2", "06") => "Multisensor Window Handle",
        ("D2", "10") => "Room Control Panels with Temperature & Fan Speed Control, Room Status Information and Time Program",
        ("D2", "11") => "Bidirectional Room Operating Panel",
        ("D2", "20") => "Fan Control",
        ("D2", "30") => "Floor Heating Controls and Automated Meter Reading",
        ("D2", "31") => "Automated Meter Reading Gateway",
        ("D2", "32") => "A.C. Current Clamp",
        ("D2", "40") => "LED Controller Status",
        ("D2", "50") => "Heat Recovery Ventilation",
        ("D2", "A0") => "Standard Valve",
        _ => return None,
    };
    Some(name)
}

#[allow(clippy::too_many_lines)]
fn type_name(rorg: &str, func: &str, type_: &str) -> Option<&'static str> {
    let name = match (rorg, func, type_) {
        ("F6", "02", "01") => "Light and Blind Control - Application Style 1",
        ("F6", "02", "02") => "Light and Blind Control - Application Style 2",
        ("F6", "02", "03") => "Light Control - Application Style 1",
        ("F6", "02", "04") => "Light and blind control ERP2",
        ("F6", "03", "01") => "Light and Blind Control - Application Style 1",
        ("F6", "03", "02") => "Light and Blind Control - Application Style 2",
        ("F6", "04", "01") => "Key Card Activated Switch",
        ("F6", "04", "02") => "Key Card Activated Switch ERP2",
        ("F6", "05", "01") => "Liquid Leakage Sensor (mechanic harvester)",
        ("F6", "10", "00") => "Window Handle",
        ("F6", "10", "01") => "Window Handle ERP2",
        ("D5", "00", "01") => "Single Input Contact",
        ("A5", "02", "01") => "Temperature Sensor Range -40℃ to 0℃",
        ("A5", "02", "02") => "Temperature Sensor Range -30℃ to +10℃",
        ("A5", "02", "03") => "Temperature Sensor Range -20℃ to +20℃",
        ("A5", "02", "04") => "Temperature Sensor Range -10℃ to +30℃",
        ("A5", "02", "05") => "Temperature Sensor Range 0℃ to +40℃",
        ("A5", "02", "06") => "Temperature Sensor Range +10℃ to +50℃",
        ("A5", "02", "07") => "Temperature Sensor Range +20℃ to +60℃",
        ("A5", "02", "08") => "Temperature Sensor Range +30℃ to +70℃",
        ("A5", "02", "09") => "Temperature Sensor Range +40℃ to +80℃",
        ("A5", "02", "0A") => "Temperature Sensor Range +50℃ to +90℃",
        ("A5", "02", "0B") => "Temperature Sensor Range +60℃ to +100℃",
        ("A5", "02", "10") => "Temperature Sensor Range -60℃ to +20℃",
        ("A5", "02", "11") => "Temperature Sensor Range -50℃ to +30℃",
        ("A5", "02", "12") => "Temperature Sensor Range -40℃ to +40℃",
        ("A5", "02", "13") => "Temperature Sensor Range -30℃ to +50℃",
        ("A5", "02", "14") => "Temperature Sensor Range -20℃ to +60℃",
        ("A5", "02", "15") => "Temperature Sensor Range -10℃ to +70℃",
        ("A5", "02", "16") => "Temperature Sensor Range 0℃ to +80℃",
        ("A5", "02", "17") => "Temperature Sensor Range +10℃ to +90℃",
        ("A5", "02", "18") => "Temperature Sensor Range +20℃ to +100℃",
        ("A5", "02", "19") => "Temperature Sensor Range +30℃ to +110℃",
        ("A5", "02", "1A") => "Temperature Sensor Range +40℃ to +120℃",
        ("A5", "02", "1B") => "Temperature Sensor Range +50℃ to +130℃",
        ("A5", "02", "20") => "10 Bit Temperature Sensor Range -10℃ to +41.2℃",
        ("A5", "04", "01") => "Range 0°C to +40°C and 0% to 100%",
        ("A5", "04", "02") => "Range -20°C to +60°C and 0% to 100%",
        ("A5", "04", "03") => "Range -20°C to +60°C 10bit-measurement and 0% to 100%",
        ("A5", "05", "01") => "Range 500 to 1150 hPa",
        ("A5", "06", "01") => "Range 300lx to 60.000lx",
        ("A5", "06", "02") => "Range 0lx to 1.020lx",
        ("A5", "06", "03") => "10-bit measurement (1-Lux resolution) with range 0lx to 1000lx",
        ("A5", "06", "04") => "Curtain Wall Brightness Sensor",
        ("A5", "06", "05") => "Range 0lx to 10.200lx",
        ("A5", "07", "01") => "Occupancy with Supply voltage monitor",
        ("A5", "07", "02") => "Occupancy with Supply voltage monitor",
        ("A5", "07", "03") => "Occupancy with Supply voltage monitor and 10-bit illumination measurement",
        ("A5", "08", "01") => "Range 0lx to 510lx, 0°C to +51°C and Occupancy Button",
        ("A5", "08", "02") => "Range 0lx to 1020lx, 0°C to +51°C and Occupancy Button",
        ("A5", "08", "03") => "Range 0lx to 1530lx, -30°C to +50°C and Occupancy Button",
        ("A5", "09", "02") => "CO-Sensor 0 ppm to 1020 ppm",
        ("A5", "09", "04") => "CO2 Sensor",
        ("A5", "09", "05") => "VOC Sensor",
        ("A5", "09", "06") => "Radon",
        ("A5", "09", "07") => "Particles",
        ("A5", "09", "08") => "Pure CO2 Sensor",
        ("A5", "09", "09") => "Pure CO2 Sensor with Power Failure Detection",
        ("A5", "09", "0A") => "Hydrogen Gas Sensor",
        ("A5", "10", "01") => "Temperature Sensor, Set Point, Fan Speed and Occupancy Control",
        ("A5", "10", "02") => "Temperature Sensor, Set Point, Fan Speed and Day/Night Control",
        ("A5", "10", "03") => "Temperature Sensor, Set Point Control",
        ("A5", "10", "04") => "Temperature Sensor, Set Point and Fan Speed Control",
        ("A5", "10", "05") => "Temperature Sensor, Set Point and Occupancy Control",
        ("A5", "10", "06") => "Temperature Sensor, Set Point and Day/Night Control",
        ("A5", "10", "07") => "Temperature Sensor, Fan Speed Control",
        ("A5", "10", "08") => "Temperature Sensor, Fan Speed and Occupancy Control",
        ("A5", "10", "09") => "Temperature Sensor, Fan Speed and Day/Night Control",
        ("A5", "10", "0A") => "Temperature Sensor, Set Point Adjust and Single Input Contact",
        ("A5", "10", "0B") => "Temperature Sensor and Single Input Contact",
        ("A5", "10", "0C") => "Temperature Sensor and Occupancy Control",
        ("A5", "10", "0D") => "Temperature Sensor and Day/Night Control",
        ("A5", "10", "10") => "Temperature and Humidity Sensor, Set Point and Occupancy Control",
        ("A5", "10", "11") => "Temperature and Humidity Sensor, Set Point and Day/Night Control",
        ("A5", "10", "12") => "Temperature and Humidity Sensor and Set Point",
        ("A5", "10", "13") => "Temperature and Humidity Sensor, Occupancy Control",
        ("A5", "10", "14") => "Temperature and Humidity Sensor, Day/Night Control",
        ("A5", "10", "15") => "10 Bit Temperature Sensor, 6 bit Set Point Control",
        ("A5", "10", "16") => "10 Bit Temperature Sensor, 6 bit Set Point Control;Occupancy Control",
        ("A5", "10", "17") => "10 Bit Temperature Sensor, Occupancy Control",
        ("A5", "10", "18") => "Illumination, Temperature Set Point, Temperature Sensor, Fan Speed and Occupancy Control",
        ("A5", "10", "19") => "Humidity, Temperature Set Point, Temperature Sensor, Fan Speed and Occupancy Control",
        ("A5", "10", "1A") => "Supply voltage monitor, Temperature Set Point, Temperature Sensor, Fan Speed and Occupancy Control",
        ("A5", "10", "1B") => "Supply Voltage Monitor, Illumination, Temperature Sensor, Fan Speed and Occupancy Control",
        ("A5", "10", "1C") => "Illumination, Illumination Set Point, Temperature Sensor, Fan Speed and Occupancy Control",
        ("A5", "10", "1D") => "Humidity, Humidity Set Point, Temperature Sensor, Fan Speed and Occupancy Control",
        ("A5", "10", "1E") => "Supply Voltage Monitor, Illumination, Temperature Sensor, Fan Speed and Occupancy Control",
        ("A5", "10", "1F") => "Temperature Sensor, Set Point, Fan Speed, Occupancy and Unoccupancy Control",
        ("A5", "10", "20") => "Temperature and Set Point with Special Heating States",
        ("A5", "10", "21") => "Temperature, Humidity and Set Point with Special Heating States",
        ("A5", "10", "22") => "Temperature, Setpoint, Humidity and Fan Speed",
        ("A5", "10", "23") => "Temperature, Setpoint, Humidity, Fan Speed and Occupancy",
        ("A5", "11", "01") => "Lighting Controller",
        ("A5", "11", "02") => "Temperature Controller Output",
        ("A5", "11", "03") => "Blind Status",
        ("A5", "11", "04") => "Extended Lighting Status",
        ("A5", "11", "05") => "Dual-Channel Switch Actuator (BI-DIR)",
        ("A5", "12", "00") => "Counter",
        ("A5", "12", "01") => "Electricity",
        ("A5", "12", "02") => "Gas",
        ("A5", "12", "03") => "Water",
        ("A5", "12", "04") => "Temperature and Load Sensor",
        ("A5", "12", "05") => "Temperature and Container Sensor",
        ("A5", "12", "10") => "Current meter 16 channels",
        ("A5", "13", "01") => "Weather Station",
        ("A5", "13", "02") => "Sun Intensity",
        ("A5", "13", "03") => "Date Exchange",
        ("A5", "13", "04") => "Time and Day Exchange",
        ("A5", "13", "05") => "Direction Exchange",
        ("A5", "13", "06") => "Geographic Position Exchange",
        ("A5", "13", "07") => "Wind Sensor",
        ("A5", "13", "08") => "Rain Sensor",
        ("A5", "13", "10") => "Sun position and radiation",
        ("A5", "14", "01") => "Single Input Contact (Window/Door), Supply voltage monitor",
        ("A5", "14", "02") => "Single Input Contact (Window/Door), Supply voltage monitor and Illumination",
        ("A5", "14", "03") => "Single Input Contact (Window/Door), Supply voltage monitor and Vibration",
        ("A5", "14", "04") => "Single Input Contact (Window/Door), Supply voltage monitor, Vibration and Illumination",
        ("A5", "14", "05") => "Vibration/Tilt, Supply voltage monitor",
        ("A5", "14", "06") => "Vibration/Tilt, Illumination and Supply voltage monitor",
        ("A5", "20", "01") => "Battery Powered Actuator (BI-DIR)",
        ("A5", "20", "02") => "Basic Actuator (BI-DIR)",
        ("A5", "20", "03") => "Line powered Actuator (BI-DIR)",
        ("A5", "20", "04") => "Heating Radiator Valve Actuating Drive with Feed and Room Temperature Measurement, Local Set Point Control and Display (BI-DIR)",
        ("A5", "20", "10") => "Generic HVAC Interface (BI-DIR)",
        ("A5", "20", "11") => "Generic HVAC Interface – Error Control",
        ("A5", "20", "12") => "Temperature Controller Input",
        ("A5", "30", "01") => "Single Input Contact, Battery Monitor",
        ("A5", "30", "02") => "Single Input Contact",
        ("A5", "30", "03") => "4 Digital Inputs, Wake and Temperature",
        ("A5", "30", "04") => "3 Digital Inputs, 1 Digital Input 8 Bits",
        ("A5", "30", "05") => "Single Input Contact, Retransmission, Battery Monitor",
        ("A5", "37", "01") => "Demand Response",
        ("A5", "38", "08") => "Gateway",
        ("A5", "38", "09") => "Extended Lighting-Control",
        ("A5", "3F", "00") => "Radio Link Test (BI-DIR)",
        ("A5", "3F", "7F") => "Universal",
        ("D2", "00", "01") => "RCP with Temperature Measurement and Display (BI-DIR)",
        ("D2", "01", "00") => "Type 0x00",
        ("D2", "01", "01") => "Type 0x01",
        ("D2", "01", "02") => "Type 0x02",
        ("D2", "01", "03") => "Type 0x03",
        ("D2", "01", "04") => "Type 0x04",
        ("D2", "01", "05") => "Type 0x05",
        ("D2", "01", "06") => "Type 0x06",
        ("D2", "01", "07") => "Type 0x07",
        ("D2", "01", "08") => "Type 0x08",
        ("D2", "01", "09") => "Type 0x09",
        ("D2", "01", "0A") => "Type 0x0A",
        ("D2", "01", "0B") => "Type 0x0B",
        ("D2", "01", "0C") => "Type 0x0C",
        ("D2", "01", "0D") => "Type 0x0D",
        ("D2", "01", "0E") => "Type 0x0E",
        ("D2", "01", "0F") => "Type 0x0F",
        ("D2", "01", "10") => "Type 0x10",
        ("D2", "01", "11") => "Type 0x11",
        ("D2", "01", "12") => "Type 0x12",
        ("D2", "02", "00") => "Type 0x00",
        ("D2", "02", "01") => "Type 0x01",
        ("D2", "02", "02") => "Type 0x02",
        ("D2", "03", "00") => "Type 0x00",
        ("D2", "03", "10") => "Mechanical Handle",
        ("D2", "03", "20") => "Beacon with Vibration Detection",
        ("D2", "04", "00") => "Type 0x00",
        ("D2", "04", "01") => "Type 0x01",
        ("D2", "04", "02") => "Type 0x02",
        ("D2", "04", "03") => "Type 0x03",
        ("D2", "04", "04") => "Type 0x04",
        ("D2", "04", "05") => "Type 0x05",
        ("D2", "04", "06") => "Type 0x06",
        ("D2", "04", "07") => "Type 0x07",
        ("D2", "04", "08") => "Type 0x08",
        ("D2", "04", "09") => "Type 0x09",
        ("D2", "04", "10") => "Type 0x10",
        ("D2", "04", "1A") => "Type 0x1A",
        ("D2", "04", "1B") => "Type 0x1B",
        ("D2", "04", "1C") => "Type 0x1C",
        ("D2", "04", "1D") => "Type 0x1D",
        ("D2", "04", "1E") => "Type 0x1E",
        ("D2", "05", "00") => "Type 0x00",
        ("D2", "06", "01") => "Alarm, Position Sensor, Vacation Mode, Optional Sensors",
        ("D2", "10", "00") => "Type 0x00",
        ("D2", "10", "01") => "Type 0x01",
        ("D2", "10", "02") => "Type 0x02",
        ("D2", "11", "01") => "Type 0x01",
        ("D2", "11", "02") => "Type 0x02",
        ("D2", "11", "03") => "Type 0x03",
        ("D2", "11", "04") => "Type 0x04",
        ("D2", "11", "05") => "Type 0x05",
        ("D2", "11", "06") => "Type 0x06",
        ("D2", "11", "07") => "Type 0x07",
        ("D2", "11", "08") => "Type 0x08",
        ("D2", "20", "00") => "Type 0x00",
        ("D2", "20", "01") => "Type 0x01",
        ("D2", "20", "02") => "Type 0x02",
        ("D2", "30", "00") => "Type 0x00",
        ("D2", "30", "01") => "Type 0x01",
        ("D2", "30", "02") => "Type 0x02",
        ("D2", "30", "03") => "Type 0x03",
        ("D2", "30", "04") => "Type 0x04",
        ("D2", "30", "05") => "Type 0x05",
        ("D2", "31", "00") => "Type 0x00",
        ("D2", "31", "01") => "Type 0x01",
        ("D2", "32", "00") => "Type 0x00",
        ("D2", "32", "01") => "Type 0x01",
        ("D2", "32", "02") => "Type 0x02",
        ("D2", "40", "00") => "Type 0x00",
        ("D2", "40", "01") => "Type 0x01",
        ("D2", "50", "00") => "Type 0x00",
        ("D2", "50", "01") => "Type 0x01",
        ("D2", "A0", "01") => "Valve Control (BI-DIR)",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_description() {
        let desc = describe_eep("D2-32-02");
        assert_eq!(desc.rorg, "D2");
        assert_eq!(desc.rorg_desc, "VLD Telegram");
        assert_eq!(desc.func, "32");
        assert_eq!(desc.func_desc, "A.C. Current Clamp");
        assert_eq!(desc.type_, "02");
        assert_eq!(desc.type_desc, "Type 0x02");
    }

    #[test]
    fn stops_at_unknown_rorg() {
        let desc = describe_eep("B3-01-01");
        assert_eq!(desc.rorg, "B3");
        assert_eq!(desc.rorg_desc, "");
        assert_eq!(desc.func, "");
        assert_eq!(desc.type_, "");
    }

    #[test]
    fn stops_at_unknown_func() {
        let desc = describe_eep("A5-01-01");
        assert_eq!(desc.rorg_desc, "4BS Telegram");
        assert_eq!(desc.func, "01");
        assert_eq!(desc.func_desc, "");
        assert_eq!(desc.type_, "");
    }

    #[test]
    fn unknown_type_keeps_code() {
        let desc = describe_eep("F6-02-7F");
        assert_eq!(desc.func_desc, "Rocker Switch, 2 Rocker");
        assert_eq!(desc.type_, "7F");
        assert_eq!(desc.type_desc, "");
    }

    #[test]
    fn rorg_only() {
        let desc = describe_eep("D5");
        assert_eq!(desc.rorg_desc, "1BS Telegram");
        assert_eq!(desc.func, "");
    }

    #[test]
    fn empty_and_lowercase() {
        assert_eq!(describe_eep(""), EepDescription::default());
        assert_eq!(describe_eep("a5-02-05"), EepDescription::default());
    }
}
