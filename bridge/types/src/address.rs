use {
    crate::TypesError,
    serde_with::{DeserializeFromStr, SerializeDisplay},
    std::{fmt, str::FromStr},
};

/// An EVM account or contract address.
///
/// Parsed from `0x` followed by 40 hex digits of either case; rendered in
/// lowercase without checksum.
#[derive(
    SerializeDisplay, DeserializeFromStr, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Addr([u8; Self::LENGTH]);

impl Addr {
    /// The length (number of bytes) of addresses.
    pub const LENGTH: usize = 20;
    pub const PREFIX: &'static str = "0x";
    /// An unset address. Contract mappings return this for missing entries.
    pub const ZERO: Self = Self([0; Self::LENGTH]);

    pub const fn from_array(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Generate a mock address for use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0u8; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Addr {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TypesError::InvalidAddress {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let Some(hex_str) = s.strip_prefix(Self::PREFIX) else {
            return Err(invalid("string does not start with `0x`"));
        };

        if hex_str.len() != Self::LENGTH * 2 {
            return Err(invalid(&format!(
                "expecting {} hex digits, found {}",
                Self::LENGTH * 2,
                hex_str.len()
            )));
        }

        let mut bytes = [0u8; Self::LENGTH];
        hex::decode_to_slice(hex_str, &mut bytes).map_err(|err| invalid(&err.to_string()))?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addr({self})")
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(
        "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4" => "0x5b38da6a701c568545dcfcb03fcb875f56beddc4";
        "mixed case"
    )]
    #[test_case(
        "0x0000000000000000000000000000000000000000" => "0x0000000000000000000000000000000000000000";
        "zero"
    )]
    fn parsing_valid_addresses(input: &str) -> String {
        input.parse::<Addr>().unwrap().to_string()
    }

    #[test_case("5b38da6a701c568545dcfcb03fcb875f56beddc4"; "missing prefix")]
    #[test_case("0x5b38da6a701c568545dcfcb03fcb875f56bedd"; "too short")]
    #[test_case("0x5b38da6a701c568545dcfcb03fcb875f56beddc4aa"; "too long")]
    #[test_case("0x5b38da6a701c568545dcfcb03fcb875f56beddzz"; "not hex")]
    #[test_case(""; "empty")]
    fn parsing_invalid_addresses(input: &str) {
        assert!(matches!(
            input.parse::<Addr>(),
            Err(TypesError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn zero_address() {
        assert!(Addr::ZERO.is_zero());
        assert!(Addr::default().is_zero());
        assert!(!Addr::mock(1).is_zero());
    }

    #[test]
    fn serializing_addresses() {
        let addr = Addr::mock(0xab);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, r#""0x00000000000000000000000000000000000000ab""#);
        assert_eq!(serde_json::from_str::<Addr>(&json).unwrap(), addr);
    }
}
