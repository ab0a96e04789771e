use serde::{Deserialize, Serialize};

/// Current door state as persisted in the status JSON file.
///
/// Field names and the 0/1 encoding of `isOpen` match what the front-end
/// reads, so they are fixed wire format, not style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(
        rename = "isOpen",
        serialize_with = "bool_as_int",
        deserialize_with = "int_as_bool"
    )]
    pub is_open: bool, // ⇔ isOpen (0 = closed, 1 = open)

    #[serde(rename = "lastOpened")]
    pub last_opened: i64, // epoch seconds of last opening, 0 = never

    #[serde(rename = "lastClosed")]
    pub last_closed: i64, // epoch seconds of last closing, 0 = never
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            is_open: false,
            last_opened: 0,
            last_closed: 0,
        }
    }
}

impl StatusSnapshot {
    /// True when the snapshot has never recorded an opening.
    pub fn never_opened(&self) -> bool {
        self.last_opened == 0
    }
}

/// On-disk wrapper: the snapshot sits under a single `current_status` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusFile {
    pub current_status: StatusSnapshot,
}

fn bool_as_int<S>(v: &bool, ser: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    ser.serialize_u8(if *v { 1 } else { 0 })
}

fn int_as_bool<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = u8::deserialize(de)?;
    Ok(v != 0)
}
