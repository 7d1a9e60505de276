use cosmwasm_std::{
    CheckedFromRatioError, CheckedMultiplyRatioError, Decimal, DivideByZeroError, StdError,
    Uint128, Uint256,
};

/// Underlying per dToken. `Decimal` carries 18 fractional digits, so the atomics
/// of a fresh vault are exactly 1e18.
pub fn exchange_rate(
    total_underlying: Uint128,
    total_supply: Uint128,
) -> Result<Decimal, CheckedFromRatioError> {
    if total_supply.is_zero() {
        return Ok(Decimal::one());
    }
    Decimal::checked_from_ratio(total_underlying, total_supply)
}

/// dToken minted for `amount` of underlying
pub fn to_shares(
    amount: Uint128,
    total_underlying: Uint128,
    total_supply: Uint128,
) -> Result<Uint128, CheckedMultiplyRatioError> {
    if total_supply.is_zero() {
        return Ok(amount);
    }
    amount.checked_multiply_ratio(total_supply, total_underlying)
}

/// Underlying paid out for `shares` dToken
pub fn to_underlying(
    shares: Uint128,
    total_underlying: Uint128,
    total_supply: Uint128,
) -> Result<Uint128, CheckedMultiplyRatioError> {
    shares.checked_multiply_ratio(total_underlying, total_supply)
}

/// `amount * numerator / denominator`, rounded up
pub fn multiply_ratio_ceil(
    amount: Uint128,
    numerator: Uint128,
    denominator: Uint128,
) -> Result<Uint128, StdError> {
    if denominator.is_zero() {
        return Err(DivideByZeroError::new(amount).into());
    }
    let denominator = Uint256::from(denominator);
    let product = amount.full_mul(numerator);
    let rounded = product.checked_add(denominator - Uint256::one())? / denominator;
    Uint128::try_from(rounded).map_err(|e| StdError::generic_err(e.to_string()))
}
