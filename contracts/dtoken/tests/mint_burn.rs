mod common;

use common::{assert_error, deploy, deploy_vault, new_dispatcher, new_handler, Suite};
use common::{account, MANAGER, ONE, OWNER, USER1, USER2};
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_orch::{anyhow, prelude::*};
use dtoken::{ExecuteMsgFns, QueryMsgFns};

fn mint(suite: &Suite, name: &str, amount: u128) -> anyhow::Result<()> {
    suite
        .dtoken_as(name)
        .mint(Uint128::new(amount), suite.addr(name).to_string())?;
    Ok(())
}

fn burn(suite: &Suite, name: &str, amount: u128) -> anyhow::Result<()> {
    suite
        .dtoken_as(name)
        .burn(Uint128::new(amount), suite.addr(name).to_string())?;
    Ok(())
}

fn dtoken_balance(suite: &Suite, name: &str) -> anyhow::Result<Uint128> {
    Ok(suite.dtoken.balance(suite.addr(name).to_string())?.balance)
}

#[test]
fn attach_dispatcher_to_fresh_dtoken() -> anyhow::Result<()> {
    let chain = MockBech32::new("mock");
    let (usdx, dtoken) = deploy_vault(&chain)?;
    assert_eq!(dtoken.dispatcher()?, None);
    assert!(dtoken.handlers()?.is_empty());

    let handler = new_handler(&chain, &usdx, &dtoken, "handler", true)?;
    let first = new_dispatcher(&chain, "first", &[&handler], vec![1])?;
    let manager = dtoken.call_as(&account(&chain, MANAGER));

    let res = manager.update_dispatcher(first.address()?.to_string())?;
    assert_eq!(
        res.event_attr_value("wasm", "dispatcher")?,
        first.address()?.to_string()
    );
    assert!(res.event_attr_value("wasm", "previous").is_err());
    assert_eq!(dtoken.dispatcher()?, Some(first.address()?));
    assert_eq!(dtoken.handlers()?, vec![handler.address()?]);

    // Replacing it reports the dispatcher it replaced
    let second = new_dispatcher(&chain, "second", &[&handler], vec![1])?;
    let res = manager.update_dispatcher(second.address()?.to_string())?;
    assert_eq!(
        res.event_attr_value("wasm", "previous")?,
        first.address()?.to_string()
    );
    assert_eq!(dtoken.dispatcher()?, Some(second.address()?));
    Ok(())
}

#[test]
fn unapproved_mint_on_fresh_dtoken() -> anyhow::Result<()> {
    let chain = MockBech32::new("mock");
    let (_, dtoken) = deploy_vault(&chain)?;
    let user1 = account(&chain, USER1);

    let err = dtoken
        .call_as(&user1)
        .mint(Uint128::new(10 * ONE), user1.to_string())
        .unwrap_err();
    assert_error(err, "ds-token-insufficient-approval");
    assert_eq!(dtoken.balance(user1.to_string())?.balance, Uint128::zero());
    Ok(())
}

#[test]
fn mint_lands() -> anyhow::Result<()> {
    let suite = deploy()?;
    suite.approve_dtoken(USER1)?;

    mint(&suite, USER1, 100 * ONE)?;

    assert_eq!(dtoken_balance(&suite, USER1)?, Uint128::new(100 * ONE));
    assert_eq!(suite.usdx_balance(USER1)?, Uint128::new(9_900 * ONE));
    // Everything went to the only weighted handler
    let handler = suite.handler_balance(&suite.handler)?;
    assert_eq!(handler.balance, Uint128::new(100 * ONE));
    assert_eq!(handler.principal, Uint128::new(100 * ONE));
    assert_eq!(suite.dtoken.total_underlying()?, Uint128::new(100 * ONE));
    Ok(())
}

#[test]
fn burn_everything_back() -> anyhow::Result<()> {
    let suite = deploy()?;
    suite.approve_dtoken(USER1)?;
    mint(&suite, USER1, 100 * ONE)?;

    burn(&suite, USER1, 100 * ONE)?;

    assert_eq!(dtoken_balance(&suite, USER1)?, Uint128::zero());
    assert_eq!(suite.usdx_balance(USER1)?, Uint128::new(10_000 * ONE));
    assert_eq!(
        suite.handler_balance(&suite.handler)?.balance,
        Uint128::zero()
    );
    // The unlimited approval is never drawn down
    let allowance = suite.usdx_allowance(USER1)?;
    assert_eq!(allowance.allowance, Uint128::MAX);
    assert!(allowance.unlimited);
    Ok(())
}

#[test]
fn handlers_mirror_the_dispatcher() -> anyhow::Result<()> {
    let suite = deploy()?;

    let handlers: Vec<Addr> = suite.dtoken.handlers()?;
    assert_eq!(handlers, suite.dispatcher_handlers()?.handlers);
    assert_eq!(handlers, vec![suite.handler.address()?]);

    suite.split_between_handlers()?;
    assert_eq!(
        suite.dtoken.handlers()?,
        vec![suite.handler.address()?, suite.handler1.address()?]
    );
    assert_eq!(suite.dtoken.dispatcher()?, Some(suite.dispatcher.address()?));
    Ok(())
}

#[test]
fn exchange_rate_starts_at_one() -> anyhow::Result<()> {
    let suite = deploy()?;
    assert_eq!(suite.dtoken.exchange_rate()?.atomics(), Uint128::new(ONE));

    suite.approve_dtoken(USER1)?;
    mint(&suite, USER1, 100 * ONE)?;
    assert_eq!(suite.dtoken.exchange_rate()?, Decimal::one());
    Ok(())
}

#[test]
fn mint_without_approval_fails() -> anyhow::Result<()> {
    let suite = deploy()?;

    for name in [OWNER, USER1, USER2] {
        let usdx_before = suite.usdx_balance(name)?;
        let err = suite
            .dtoken_as(name)
            .mint(Uint128::new(10 * ONE), suite.addr(name).to_string())
            .unwrap_err();
        assert_error(err, "ds-token-insufficient-approval");
        assert_eq!(suite.usdx_balance(name)?, usdx_before);
        assert_eq!(dtoken_balance(&suite, name)?, Uint128::zero());
    }
    assert_eq!(suite.dtoken.total_underlying()?, Uint128::zero());
    Ok(())
}

#[test]
fn mint_and_burn_across_two_handlers() -> anyhow::Result<()> {
    let suite = deploy()?;
    suite.split_between_handlers()?;

    let amounts = [100 * ONE, 99_999_999 * ONE / 1_000_000, 99_999 * ONE / 100_000];
    for name in [USER1, USER2] {
        suite.approve_dtoken(name)?;
        let usdx_before = suite.usdx_balance(name)?;

        for amount in amounts {
            mint(&suite, name, amount)?;
            assert_eq!(dtoken_balance(&suite, name)?, Uint128::new(amount));
            burn(&suite, name, amount)?;
            assert_eq!(dtoken_balance(&suite, name)?, Uint128::zero());
        }

        assert_eq!(suite.usdx_balance(name)?, usdx_before);
    }

    assert_eq!(
        suite.handler_balance(&suite.handler)?.balance,
        Uint128::zero()
    );
    assert_eq!(
        suite.handler_balance(&suite.handler1)?.balance,
        Uint128::zero()
    );
    Ok(())
}

#[test]
fn interleaved_mints_and_burns_across_two_handlers() -> anyhow::Result<()> {
    let suite = deploy()?;
    suite.split_between_handlers()?;
    suite.approve_dtoken(USER1)?;
    suite.approve_dtoken(USER2)?;

    for amount in [100 * ONE, 99_999_999 * ONE / 1_000_000, 99_999 * ONE / 100_000] {
        mint(&suite, USER1, amount)?;
        mint(&suite, USER2, amount)?;
        assert_eq!(
            suite.dtoken.total_underlying()?,
            Uint128::new(2 * amount)
        );

        burn(&suite, USER2, amount)?;
        assert_eq!(dtoken_balance(&suite, USER2)?, Uint128::zero());
        assert_eq!(dtoken_balance(&suite, USER1)?, Uint128::new(amount));

        burn(&suite, USER1, amount)?;
        assert_eq!(dtoken_balance(&suite, USER1)?, Uint128::zero());

        assert_eq!(
            suite.handler_balance(&suite.handler)?.balance,
            Uint128::zero()
        );
        assert_eq!(
            suite.handler_balance(&suite.handler1)?.balance,
            Uint128::zero()
        );
    }

    assert_eq!(suite.usdx_balance(USER1)?, Uint128::new(10_000 * ONE));
    assert_eq!(suite.usdx_balance(USER2)?, Uint128::new(10_000 * ONE));
    Ok(())
}

#[test]
fn deposits_follow_proportions() -> anyhow::Result<()> {
    let suite = deploy()?;
    suite.split_between_handlers()?;
    suite.approve_dtoken(USER1)?;

    mint(&suite, USER1, 100 * ONE)?;

    let handler = &suite.handler;
    let handler1 = &suite.handler1;
    assert_eq!(suite.handler_balance(handler)?.balance, Uint128::new(70 * ONE));
    assert_eq!(suite.handler_balance(handler1)?.balance, Uint128::new(30 * ONE));

    // Partial burns keep both handlers in proportion
    burn(&suite, USER1, 50 * ONE)?;
    assert_eq!(suite.handler_balance(handler)?.balance, Uint128::new(35 * ONE));
    assert_eq!(suite.handler_balance(handler1)?.balance, Uint128::new(15 * ONE));
    assert_eq!(suite.usdx_balance(USER1)?, Uint128::new(9_950 * ONE));
    Ok(())
}

#[test]
fn burn_on_behalf_needs_dtoken_allowance() -> anyhow::Result<()> {
    let suite = deploy()?;
    suite.approve_dtoken(USER1)?;
    mint(&suite, USER1, 100 * ONE)?;

    let owner = suite.addr(USER1).to_string();
    let err = suite
        .dtoken_as(USER2)
        .burn(Uint128::new(40 * ONE), owner.clone())
        .unwrap_err();
    assert_error(err, "ds-token-insufficient-approval");

    suite
        .dtoken_as(USER1)
        .approve(Uint128::new(40 * ONE), suite.addr(USER2).to_string())?;
    suite
        .dtoken_as(USER2)
        .burn(Uint128::new(40 * ONE), owner)?;

    // Funds go back to the owner, not the caller
    assert_eq!(dtoken_balance(&suite, USER1)?, Uint128::new(60 * ONE));
    assert_eq!(suite.usdx_balance(USER1)?, Uint128::new(9_940 * ONE));
    assert_eq!(suite.usdx_balance(USER2)?, Uint128::new(10_000 * ONE));
    Ok(())
}

#[test]
fn burn_more_than_balance_fails() -> anyhow::Result<()> {
    let suite = deploy()?;
    suite.approve_dtoken(USER1)?;
    mint(&suite, USER1, 10 * ONE)?;

    let err = burn(&suite, USER1, 10 * ONE + 1).unwrap_err();
    assert_error(err, "ds-token-insufficient-balance");
    assert_eq!(dtoken_balance(&suite, USER1)?, Uint128::new(10 * ONE));
    Ok(())
}
