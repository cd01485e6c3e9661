//! The closed set of category tags for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A category label for a transaction.
///
/// The set of tags is fixed. Records arriving from outside sources may carry
/// labels that fall outside this set; such records are treated as untagged
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionTag {
    /// Public transport and travel fares.
    Transport,
    /// Groceries, takeaways and dining out.
    Food,
    /// Rent, mortgage and home maintenance.
    Housing,
    /// Insurance premiums.
    Insurance,
    /// Medicine, appointments and healthcare.
    Medical,
    /// Money put aside.
    Savings,
    /// Personal care and shopping.
    Personal,
    /// Movies, games and going out.
    Entertainment,
    /// Anything that does not fit the other tags.
    Others,
    /// Power, water, internet and phone bills.
    Utilities,
    /// Vehicle purchase, fuel and servicing.
    Car,
}

impl TransactionTag {
    /// Every tag, in the order they are presented to users.
    pub const ALL: [TransactionTag; 11] = [
        Self::Transport,
        Self::Food,
        Self::Housing,
        Self::Insurance,
        Self::Medical,
        Self::Savings,
        Self::Personal,
        Self::Entertainment,
        Self::Others,
        Self::Utilities,
        Self::Car,
    ];

    /// The stable key used in serialized data and queries.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Food => "food",
            Self::Housing => "housing",
            Self::Insurance => "insurance",
            Self::Medical => "medical",
            Self::Savings => "savings",
            Self::Personal => "personal",
            Self::Entertainment => "entertainment",
            Self::Others => "others",
            Self::Utilities => "utilities",
            Self::Car => "car",
        }
    }

    /// The human-readable display name, used to label chart entries.
    pub fn title(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Insurance => "Insurance",
            Self::Medical => "Medical",
            Self::Savings => "Savings",
            Self::Personal => "Personal",
            Self::Entertainment => "Entertainment",
            Self::Others => "Others",
            Self::Utilities => "Utilities",
            Self::Car => "Car",
        }
    }

    /// The emoji shown next to the tag in transaction lists.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Transport => "🚆",
            Self::Food => "🍔",
            Self::Housing => "🏠",
            Self::Insurance => "🛡️",
            Self::Medical => "💊",
            Self::Savings => "💰",
            Self::Personal => "🙋",
            Self::Entertainment => "🎬",
            Self::Others => "📦",
            Self::Utilities => "💡",
            Self::Car => "🚗",
        }
    }
}

impl FromStr for TransactionTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transport" => Ok(Self::Transport),
            "food" => Ok(Self::Food),
            "housing" => Ok(Self::Housing),
            "insurance" => Ok(Self::Insurance),
            "medical" => Ok(Self::Medical),
            "savings" => Ok(Self::Savings),
            "personal" => Ok(Self::Personal),
            "entertainment" => Ok(Self::Entertainment),
            "others" => Ok(Self::Others),
            "utilities" => Ok(Self::Utilities),
            "car" => Ok(Self::Car),
            _ => Err(Error::UnrecognizedTag(s.to_owned())),
        }
    }
}

impl Display for TransactionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}
