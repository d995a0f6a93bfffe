//! Frame-navigation signals for the frame scheduler

/// Single-byte navigation signals sent by a remote controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Navigation {
    /// Show the next frame
    Next,
    /// Show the previous frame
    Previous,
    /// Stop rotating frames automatically
    Pause,
    /// Resume automatic frame rotation
    Resume,
}

// Wire format values
const NAV_NEXT: u8 = b'n';
const NAV_PREVIOUS: u8 = b'p';
const NAV_PAUSE: u8 = b'a';
const NAV_RESUME: u8 = b'e';

impl Navigation {
    /// Parse a signal from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            NAV_NEXT => Some(Navigation::Next),
            NAV_PREVIOUS => Some(Navigation::Previous),
            NAV_PAUSE => Some(Navigation::Pause),
            NAV_RESUME => Some(Navigation::Resume),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Navigation::Next => NAV_NEXT,
            Navigation::Previous => NAV_PREVIOUS,
            Navigation::Pause => NAV_PAUSE,
            Navigation::Resume => NAV_RESUME,
        }
    }

    /// Returns true if this signal moves between frames
    pub fn is_step(&self) -> bool {
        matches!(self, Navigation::Next | Navigation::Previous)
    }

    /// Returns the frame step as a signed delta (-1, 0, or +1)
    pub fn frame_delta(&self) -> i8 {
        match self {
            Navigation::Next => 1,
            Navigation::Previous => -1,
            _ => 0,
        }
    }

    /// Returns the requested auto-rotation state, if this signal changes it
    pub fn auto_rotation(&self) -> Option<bool> {
        match self {
            Navigation::Pause => Some(false),
            Navigation::Resume => Some(true),
            _ => None,
        }
    }
}
