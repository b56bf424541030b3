//! Macro for implementing Display and FromStr for label enums
//!
//! Scheduling enums such as [`crate::MeetingPhase`] and [`crate::DayKind`]
//! travel as lowercase labels in API payloads and logs. The macro keeps the
//! two directions of that conversion in one place.
//!
//! # Example
//!
//! ```rust
//! use aura_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Morning,
//!     Afternoon,
//! }
//!
//! impl_label_conversions!(Shift {
//!     Morning => "morning",
//!     Afternoon => "afternoon",
//! });
//!
//! assert_eq!(Shift::Morning.to_string(), "morning");
//! assert_eq!("AFTERNOON".parse::<Shift>(), Ok(Shift::Afternoon));
//! ```

/// Implements `Display` and case-insensitive `FromStr` for a label enum.
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($label),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
