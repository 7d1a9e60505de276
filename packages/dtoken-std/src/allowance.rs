use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Spending right granted by an owner to a spender.
///
/// Approving `Uint128::MAX` on the wire is the legacy "infinite approval"
/// sentinel; it is stored as [`Allowance::Unlimited`] and is never drawn down.
#[cw_serde]
#[derive(Copy)]
pub enum Allowance {
    Limited(Uint128),
    Unlimited,
}

impl Default for Allowance {
    fn default() -> Self {
        Allowance::Limited(Uint128::zero())
    }
}

impl Allowance {
    /// Interprets an approval amount coming from a message
    pub fn from_amount(amount: Uint128) -> Self {
        if amount == Uint128::MAX {
            Allowance::Unlimited
        } else {
            Allowance::Limited(amount)
        }
    }

    /// Amount reported to callers. Unlimited allowances report `Uint128::MAX`
    pub fn amount(&self) -> Uint128 {
        match self {
            Allowance::Limited(remaining) => *remaining,
            Allowance::Unlimited => Uint128::MAX,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Allowance::Unlimited)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Allowance::Limited(remaining) if remaining.is_zero())
    }

    pub fn covers(&self, amount: Uint128) -> bool {
        match self {
            Allowance::Limited(remaining) => *remaining >= amount,
            Allowance::Unlimited => true,
        }
    }

    /// Returns the allowance left after spending `amount`, or `None` if it does not cover it
    pub fn spend(self, amount: Uint128) -> Option<Self> {
        match self {
            Allowance::Limited(remaining) => remaining.checked_sub(amount).ok().map(Allowance::Limited),
            Allowance::Unlimited => Some(Allowance::Unlimited),
        }
    }
}
