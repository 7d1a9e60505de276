use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response};

use crate::{
    error::ContractError,
    handlers,
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
};

/// The type of the result returned by the dispatcher entry points.
pub type ContractResult<T = Response> = Result<T, ContractError>;

#[cfg_attr(feature = "export", cosmwasm_std::entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult {
    handlers::instantiate_handler(deps, env, info, msg)
}

#[cfg_attr(feature = "export", cosmwasm_std::entry_point)]
pub fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecuteMsg) -> ContractResult {
    handlers::execute_handler(deps, env, info, msg)
}

#[cfg_attr(feature = "export", cosmwasm_std::entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    handlers::query_handler(deps, env, msg)
}

#[cfg(feature = "interface")]
pub mod interface {
    use cosmwasm_std::Empty;
    use cw_orch::prelude::*;

    use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

    #[cw_orch::interface(InstantiateMsg, ExecuteMsg, QueryMsg, Empty)]
    pub struct DispatcherInterface;

    impl<Chain> Uploadable for DispatcherInterface<Chain> {
        fn wrapper() -> Box<dyn MockContract<Empty>> {
            Box::new(ContractWrapper::new_with_empty(
                super::execute,
                super::instantiate,
                super::query,
            ))
        }
    }
}
