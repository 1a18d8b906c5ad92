//! Types for input handling

/// Button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    StartStop,
    Reset,
    Function,
}

/// Button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    /// State of an active-low button for the sampled pin level
    pub fn from_level(high: bool) -> Self {
        if high {
            ButtonState::Released
        } else {
            ButtonState::Pressed
        }
    }
}

/// Button events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Falling edge on the pin
    Pressed(Button),
    /// Rising edge on the pin
    Released(Button),
}

impl ButtonEvent {
    /// Button the event belongs to
    pub fn button(&self) -> Button {
        match self {
            ButtonEvent::Pressed(button) | ButtonEvent::Released(button) => *button,
        }
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Button::StartStop => write!(f, "Start/Stop"),
            Button::Reset => write!(f, "Reset"),
            Button::Function => write!(f, "Function"),
        }
    }
}

impl std::fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonEvent::Pressed(btn) => write!(f, "{} pressed", btn),
            ButtonEvent::Released(btn) => write!(f, "{} released", btn),
        }
    }
}
