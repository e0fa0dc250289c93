//! Contract identifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A contract known to the source registry.
///
/// The set is closed: every source entry and every compiled artifact is
/// keyed by one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractName {
    TonVault,
    LiquidityDeposit,
    AmmPool,
}

impl ContractName {
    /// All known contracts, in registry declaration order.
    pub const ALL: [ContractName; 3] = [
        ContractName::TonVault,
        ContractName::LiquidityDeposit,
        ContractName::AmmPool,
    ];

    /// The kebab-case name used in source maps and status output.
    pub fn as_str(self) -> &'static str {
        match self {
            ContractName::TonVault => "ton-vault",
            ContractName::LiquidityDeposit => "liquidity-deposit",
            ContractName::AmmPool => "amm-pool",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized contract name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contract name '{0}'")]
pub struct UnknownContract(pub String);

impl FromStr for ContractName {
    type Err = UnknownContract;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ton-vault" => Ok(ContractName::TonVault),
            "liquidity-deposit" => Ok(ContractName::LiquidityDeposit),
            "amm-pool" => Ok(ContractName::AmmPool),
            other => Err(UnknownContract(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        for name in ContractName::ALL {
            let parsed: ContractName = name.to_string().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let result = "jetton-minter".parse::<ContractName>();
        assert_eq!(result, Err(UnknownContract("jetton-minter".to_string())));
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(ContractName::ALL.len(), 3);
        assert_eq!(ContractName::ALL[0].as_str(), "ton-vault");
        assert_eq!(ContractName::ALL[1].as_str(), "liquidity-deposit");
        assert_eq!(ContractName::ALL[2].as_str(), "amm-pool");
    }
}
