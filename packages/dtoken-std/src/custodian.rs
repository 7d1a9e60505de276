use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128};

/// Something that holds underlying funds on behalf of the dToken.
///
/// Funds themselves always move through the token contract; a custodian is only
/// notified that it received them, asked to make them available again, and queried
/// for what it holds.
pub trait Custodian {
    fn addr(&self) -> &Addr;

    /// Message telling the custodian `amount` of `token` was just transferred to it
    fn accept_msg(&self, token: &Addr, amount: Uint128) -> StdResult<CosmosMsg>;

    /// Message asking the custodian to free `amount` of `token` for collection
    fn release_msg(&self, token: &Addr, amount: Uint128) -> StdResult<CosmosMsg>;

    /// Amount of `token` currently held, yield included
    fn balance(&self, querier: &QuerierWrapper, token: &Addr) -> StdResult<Uint128>;
}

/// Amount routed to (or taken from) one handler
#[cw_serde]
pub struct Allocation {
    pub handler: Addr,
    pub amount: Uint128,
}

/// Sums the holdings of every custodian
pub fn total_held<C: Custodian>(
    custodians: &[C],
    querier: &QuerierWrapper,
    token: &Addr,
) -> StdResult<Uint128> {
    custodians.iter().try_fold(Uint128::zero(), |acc, custodian| {
        Ok(acc.checked_add(custodian.balance(querier, token)?)?)
    })
}
