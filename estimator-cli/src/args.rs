//! Command-line argument value types.

use std::str::FromStr;

use thiserror::Error;

/// Error returned when a `--material` value is not a valid
/// `TRADE:CATEGORY:ITEM` triple.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid material choice '{input}': expected TRADE:CATEGORY:ITEM")]
pub struct ParseMaterialArgError {
    input: String,
}

/// A material choice given on the command line as `TRADE:CATEGORY:ITEM`,
/// e.g. `plumber:Tapware:tap-premium`.
///
/// Categories may contain spaces (`"plumber:Fixtures - Toilets:toilet-mid"`);
/// only the two colons are structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialArg {
    pub trade_id: String,
    pub category: String,
    pub item_id: String,
}

impl FromStr for MaterialArg {
    type Err = ParseMaterialArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMaterialArgError {
            input: s.to_string(),
        };

        let mut parts = s.splitn(3, ':');
        let trade_id = parts.next().ok_or_else(err)?.trim();
        let category = parts.next().ok_or_else(err)?.trim();
        let item_id = parts.next().ok_or_else(err)?.trim();

        if trade_id.is_empty() || category.is_empty() || item_id.is_empty() {
            return Err(err());
        }

        Ok(Self {
            trade_id: trade_id.to_string(),
            category: category.to_string(),
            item_id: item_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_simple_triple() {
        let arg: MaterialArg = "plumber:Tapware:tap-premium".parse().unwrap();

        assert_eq!(arg.trade_id, "plumber");
        assert_eq!(arg.category, "Tapware");
        assert_eq!(arg.item_id, "tap-premium");
    }

    #[test]
    fn category_may_contain_spaces() {
        let arg: MaterialArg = "plumber:Fixtures - Toilets:toilet-mid".parse().unwrap();

        assert_eq!(arg.category, "Fixtures - Toilets");
    }

    #[test]
    fn trims_whitespace_around_components() {
        let arg: MaterialArg = " plumber : Tapware : tap-mid ".parse().unwrap();

        assert_eq!(arg.trade_id, "plumber");
        assert_eq!(arg.item_id, "tap-mid");
    }

    #[test]
    fn rejects_missing_components() {
        assert!("plumber:Tapware".parse::<MaterialArg>().is_err());
        assert!("plumber".parse::<MaterialArg>().is_err());
        assert!("".parse::<MaterialArg>().is_err());
        assert!("plumber::tap-mid".parse::<MaterialArg>().is_err());
        assert!(":Tapware:tap-mid".parse::<MaterialArg>().is_err());
    }

    #[test]
    fn extra_colons_stay_in_the_item_id() {
        // splitn(3) keeps everything after the second colon together.
        let arg: MaterialArg = "a:b:c:d".parse().unwrap();

        assert_eq!(arg.item_id, "c:d");
    }
}
