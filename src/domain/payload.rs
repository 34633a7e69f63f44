use std::fmt;
use std::str::FromStr;

/// Input kind a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Text,
    Image,
    Audio,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Image => "image",
            Modality::Audio => "audio",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What to do with a payload: analyse it or produce augmented variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Process,
    Augment,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Process => "process",
            Operation::Augment => "augment",
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "process" => Ok(Operation::Process),
            "augment" => Ok(Operation::Augment),
            other => Err(format!("Invalid operation: {}", other)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request payload after transport decoding.
///
/// Binary variants only ever hold bytes that were successfully decoded from
/// their transport encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Image(Vec<u8>),
    Audio(Vec<u8>),
}

impl Payload {
    pub fn modality(&self) -> Modality {
        match self {
            Payload::Text(_) => Modality::Text,
            Payload::Image(_) => Modality::Image,
            Payload::Audio(_) => Modality::Audio,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Payload::Text(text) => text.len(),
            Payload::Image(bytes) | Payload::Audio(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
