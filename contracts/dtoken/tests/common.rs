#![allow(dead_code)]

use cosmwasm_std::{Addr, Uint128};
use cw_orch::{anyhow, prelude::*};
use dtoken::DTokenInterface;
use dtoken_dispatcher::{msg::HandlersResponse, DispatcherInterface};
use dtoken_handler::{msg::HandlerBalanceResponse, HandlerInterface};
use dtoken_std::ledger::AllowanceResponse;
use stable_token::StableTokenInterface;

pub const ONE: u128 = 1_000_000_000_000_000_000;

pub const OWNER: &str = "owner";
pub const MANAGER: &str = "manager";
pub const USER1: &str = "user1";
pub const USER2: &str = "user2";

/// Address of a named test account. The owner is the chain's default sender.
pub fn account(chain: &MockBech32, name: &str) -> Addr {
    if name == OWNER {
        chain.sender_addr()
    } else {
        chain.addr_make(name)
    }
}

pub struct Suite {
    pub chain: MockBech32,
    pub usdx: StableTokenInterface<MockBech32>,
    pub dtoken: DTokenInterface<MockBech32>,
    pub handler: HandlerInterface<MockBech32>,
    pub handler1: HandlerInterface<MockBech32>,
    pub dispatcher: DispatcherInterface<MockBech32>,
}

// Funded faucet token and a dToken with its manager set, no dispatcher attached
pub fn deploy_vault(
    chain: &MockBech32,
) -> anyhow::Result<(StableTokenInterface<MockBech32>, DTokenInterface<MockBech32>)> {
    let _ = env_logger::builder().is_test(true).try_init();

    let usdx = StableTokenInterface::new("usdx", chain.clone());
    usdx.upload()?;
    usdx.instantiate(
        &stable_token::msg::InstantiateMsg {
            name: "USDx".to_owned(),
            symbol: "USDx".to_owned(),
            decimals: 18,
        },
        None,
        None,
    )?;
    {
        use stable_token::ExecuteMsgFns;
        for (name, amount) in [
            (OWNER, 100_000 * ONE),
            (MANAGER, 10_000 * ONE),
            (USER1, 10_000 * ONE),
            (USER2, 10_000 * ONE),
        ] {
            usdx.allocate_to(Uint128::new(amount), account(chain, name).to_string())?;
        }
    }

    let dtoken = DTokenInterface::new("dtoken", chain.clone());
    dtoken.upload()?;
    dtoken.instantiate(
        &dtoken::msg::InstantiateMsg {
            name: "dToken USDx".to_owned(),
            symbol: "dUSDx".to_owned(),
            decimals: 18,
            token: usdx.address()?.to_string(),
            dispatcher: None,
        },
        None,
        None,
    )?;
    {
        use dtoken::ExecuteMsgFns;
        dtoken.set_manager(account(chain, MANAGER).to_string())?;
    }

    Ok((usdx, dtoken))
}

// Deploys the vault, two approved handlers and a dispatcher routing everything
// to the first handler, then attaches the dispatcher
pub fn deploy() -> anyhow::Result<Suite> {
    let chain = MockBech32::new("mock");
    let (usdx, dtoken) = deploy_vault(&chain)?;

    let handler = new_handler(&chain, &usdx, &dtoken, "handler", true)?;
    let handler1 = new_handler(&chain, &usdx, &dtoken, "handler1", true)?;
    let dispatcher = new_dispatcher(&chain, "dispatcher", &[&handler], vec![1000])?;
    {
        use dtoken_dispatcher::ExecuteMsgFns;
        dispatcher.set_manager(account(&chain, MANAGER).to_string())?;
    }
    {
        use dtoken::ExecuteMsgFns;
        dtoken
            .call_as(&account(&chain, MANAGER))
            .update_dispatcher(dispatcher.address()?.to_string())?;
    }

    Ok(Suite {
        chain,
        usdx,
        dtoken,
        handler,
        handler1,
        dispatcher,
    })
}

/// Instantiates a handler for `dtoken`, optionally approving it on USDx
pub fn new_handler(
    chain: &MockBech32,
    usdx: &StableTokenInterface<MockBech32>,
    dtoken: &DTokenInterface<MockBech32>,
    id: &str,
    approve: bool,
) -> anyhow::Result<HandlerInterface<MockBech32>> {
    let handler = HandlerInterface::new(id, chain.clone());
    handler.upload()?;
    handler.instantiate(
        &dtoken_handler::msg::InstantiateMsg {
            market: chain.addr_make("market").to_string(),
            dtoken: dtoken.address()?.to_string(),
        },
        None,
        None,
    )?;
    if approve {
        use dtoken_handler::ExecuteMsgFns;
        handler.approve(usdx.address()?.to_string())?;
    }
    Ok(handler)
}

pub fn new_dispatcher(
    chain: &MockBech32,
    id: &str,
    handlers: &[&HandlerInterface<MockBech32>],
    proportions: Vec<u64>,
) -> anyhow::Result<DispatcherInterface<MockBech32>> {
    let dispatcher = DispatcherInterface::new(id, chain.clone());
    dispatcher.upload()?;
    dispatcher.instantiate(
        &dtoken_dispatcher::msg::InstantiateMsg {
            handlers: handlers
                .iter()
                .map(|h| h.address().map(|a| a.to_string()))
                .collect::<Result<Vec<_>, _>>()?,
            proportions,
        },
        None,
        None,
    )?;
    Ok(dispatcher)
}

/// Fails unless some error in the chain mentions `expected`
pub fn assert_error(err: impl Into<anyhow::Error>, expected: impl ToString) {
    let err = err.into();
    let expected = expected.to_string();
    assert!(
        err.chain().any(|cause| cause.to_string().contains(&expected)),
        "expected `{expected}`, got {err:?}"
    );
}

impl Suite {
    pub fn addr(&self, name: &str) -> Addr {
        account(&self.chain, name)
    }

    /// The dToken, called by `name`
    pub fn dtoken_as(&self, name: &str) -> DTokenInterface<MockBech32> {
        self.dtoken.call_as(&self.addr(name))
    }

    pub fn new_handler(
        &self,
        id: &str,
        approve: bool,
    ) -> anyhow::Result<HandlerInterface<MockBech32>> {
        new_handler(&self.chain, &self.usdx, &self.dtoken, id, approve)
    }

    pub fn new_dispatcher(
        &self,
        id: &str,
        handlers: &[&HandlerInterface<MockBech32>],
        proportions: Vec<u64>,
    ) -> anyhow::Result<DispatcherInterface<MockBech32>> {
        new_dispatcher(&self.chain, id, handlers, proportions)
    }

    pub fn approve_handler(&self, handler: &HandlerInterface<MockBech32>) -> anyhow::Result<()> {
        use dtoken_handler::ExecuteMsgFns;
        handler.approve(self.usdx.address()?.to_string())?;
        Ok(())
    }

    /// Lets the dToken pull `account`'s USDx without limit
    pub fn approve_dtoken(&self, account: &str) -> anyhow::Result<()> {
        use stable_token::ExecuteMsgFns;
        self.usdx
            .call_as(&self.addr(account))
            .approve(Uint128::MAX, self.dtoken.address()?.to_string())?;
        Ok(())
    }

    /// Yield showing up on a handler, as a market paying interest would
    pub fn donate(
        &self,
        handler: &HandlerInterface<MockBech32>,
        amount: u128,
    ) -> anyhow::Result<()> {
        use stable_token::ExecuteMsgFns;
        self.usdx
            .transfer(Uint128::new(amount), handler.address()?.to_string())?;
        Ok(())
    }

    pub fn usdx_balance(&self, account: &str) -> anyhow::Result<Uint128> {
        use stable_token::QueryMsgFns;
        Ok(self.usdx.balance(self.addr(account).to_string())?.balance)
    }

    pub fn usdx_allowance(&self, owner: &str) -> anyhow::Result<AllowanceResponse> {
        use stable_token::QueryMsgFns;
        Ok(self.usdx.allowance(
            self.addr(owner).to_string(),
            self.dtoken.address()?.to_string(),
        )?)
    }

    pub fn dispatcher_handlers(&self) -> anyhow::Result<HandlersResponse> {
        use dtoken_dispatcher::QueryMsgFns;
        Ok(self.dispatcher.handlers()?)
    }

    pub fn handler_balance(
        &self,
        handler: &HandlerInterface<MockBech32>,
    ) -> anyhow::Result<HandlerBalanceResponse> {
        use dtoken_handler::QueryMsgFns;
        Ok(handler.balance(self.usdx.address()?.to_string())?)
    }

    /// Adds handler1 and splits deposits 700 / 300 between handler and handler1
    pub fn split_between_handlers(&self) -> anyhow::Result<()> {
        use dtoken_dispatcher::ExecuteMsgFns;
        let dispatcher = self.dispatcher.call_as(&self.addr(MANAGER));
        dispatcher.add_handler(vec![self.handler1.address()?.to_string()])?;
        dispatcher.update_proportion(
            vec![
                self.handler.address()?.to_string(),
                self.handler1.address()?.to_string(),
            ],
            vec![700, 300],
        )?;
        Ok(())
    }
}
