//! Newtype IDs for type-safe identifiers.
//!
//! Item ids and receipt numbers are both small integers; keeping them as
//! distinct types stops a receipt number from being used as a catalog key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate numeric newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from its raw value.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Stable identifier of a catalog item.
    ItemId
);
define_id!(
    /// Sequential number of a checkout receipt within a session.
    ReceiptNumber
);

impl ReceiptNumber {
    /// The number that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(ItemId::new(6).to_string(), "6");
    }

    #[test]
    fn test_id_from_u32() {
        let id: ItemId = 3.into();
        assert_eq!(id.get(), 3);
    }

    #[test]
    fn test_receipt_number_next() {
        let first = ReceiptNumber::new(1);
        assert_eq!(first.next(), ReceiptNumber::new(2));
        assert_eq!(ReceiptNumber::new(u32::MAX).next().get(), u32::MAX);
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ItemId::new(4)).unwrap();
        assert_eq!(json, "4");
    }
}
