//! Primitive Components
//!
//! Buttons and inputs.

pub mod button;
pub mod input;

pub use button::{Button, ButtonProps, ButtonSize, ButtonStyle, ButtonVariant};
pub use input::{
    Input, InputProps, InputSize, InputStyle, InputVariant, SupportingText, TrailingSlot,
    Validity,
};
