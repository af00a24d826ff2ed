use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::events::NFTEvent;
use common::{
    nft::{
        interface::NFTInterface,
        types::{DataKey, Error, Token, ADMIN, NAME, SYMBOL},
    },
    storage::{
        get_data, get_persistent, has_data, remove_persistent, store_data, store_persistent,
    },
};

#[contract]
pub struct NFTContract;

#[contractimpl]
impl NFTInterface for NFTContract {
    fn initialize(env: Env, admin: Address, name: String, symbol: String) -> Result<(), Error> {
        admin.require_auth();
        if has_data(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &NAME, &name);
        store_data(&env, &SYMBOL, &symbol);
        store_data(&env, &DataKey::TokenCount, &0u64);
        NFTEvent::Initialized(admin).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn name(env: Env) -> String {
        get_data(&env, &NAME).unwrap_or_else(|| String::from_str(&env, ""))
    }

    fn symbol(env: Env) -> String {
        get_data(&env, &SYMBOL).unwrap_or_else(|| String::from_str(&env, ""))
    }

    fn mint(env: Env, to: Address, token_uri: String) -> Result<u64, Error> {
        let admin: Address = get_data(&env, &ADMIN).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        let token_id: u64 = get_data::<_, u64>(&env, &DataKey::TokenCount).unwrap_or(0) + 1;
        let token = Token {
            owner: to.clone(),
            token_uri,
        };

        store_persistent(&env, &DataKey::Token(token_id), &token);
        store_data(&env, &DataKey::TokenCount, &token_id);
        adjust_balance(&env, &to, 1);

        NFTEvent::Mint(token_id, to).publish(&env);
        Ok(token_id)
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        Ok(read_token(&env, token_id)?.owner)
    }

    fn balance_of(env: Env, owner: Address) -> u64 {
        get_persistent(&env, &DataKey::Balance(owner)).unwrap_or(0)
    }

    fn total_supply(env: Env) -> u64 {
        get_data(&env, &DataKey::TokenCount).unwrap_or(0)
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        Ok(read_token(&env, token_id)?.token_uri)
    }

    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let token: Token = read_token(&env, token_id)?;
        if token.owner != owner {
            return Err(Error::NotOwner);
        }
        if operator == owner {
            return Err(Error::SelfApproval);
        }

        store_persistent(&env, &DataKey::Approved(token_id), &operator);
        NFTEvent::Approval(token_id, owner, operator).publish(&env);
        Ok(())
    }

    fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        get_persistent(&env, &DataKey::Approved(token_id))
    }

    fn set_approval_for_all(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        owner.require_auth();
        if operator == owner {
            return Err(Error::SelfApproval);
        }

        let key = DataKey::Operator(owner.clone(), operator.clone());
        if approved {
            store_persistent(&env, &key, &true);
        } else {
            remove_persistent(&env, &key);
        }

        NFTEvent::ApprovalForAll(owner, operator, approved).publish(&env);
        Ok(())
    }

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        get_persistent(&env, &DataKey::Operator(owner, operator)).unwrap_or(false)
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let token: Token = read_token(&env, token_id)?;
        if token.owner != from {
            return Err(Error::NotOwner);
        }

        move_token(&env, token, from, to, token_id);
        Ok(())
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let token: Token = read_token(&env, token_id)?;
        if token.owner != from {
            return Err(Error::NotOwner);
        }
        if !is_authorized_spender(&env, &spender, &from, token_id) {
            return Err(Error::Unauthorized);
        }

        move_token(&env, token, from, to, token_id);
        Ok(())
    }
}

fn read_token(env: &Env, token_id: u64) -> Result<Token, Error> {
    get_persistent(env, &DataKey::Token(token_id)).ok_or(Error::TokenNotFound)
}

fn is_authorized_spender(env: &Env, spender: &Address, owner: &Address, token_id: u64) -> bool {
    if spender == owner {
        return true;
    }
    let approved: Option<Address> = get_persistent(env, &DataKey::Approved(token_id));
    if approved.as_ref() == Some(spender) {
        return true;
    }
    get_persistent(env, &DataKey::Operator(owner.clone(), spender.clone())).unwrap_or(false)
}

fn move_token(env: &Env, mut token: Token, from: Address, to: Address, token_id: u64) {
    // Approvals never survive a change of owner
    remove_persistent(env, &DataKey::Approved(token_id));

    token.owner = to.clone();
    store_persistent(env, &DataKey::Token(token_id), &token);
    adjust_balance(env, &from, -1);
    adjust_balance(env, &to, 1);

    NFTEvent::Transfer(token_id, from, to).publish(env);
}

fn adjust_balance(env: &Env, owner: &Address, delta: i64) {
    let key = DataKey::Balance(owner.clone());
    let current: u64 = get_persistent(env, &key).unwrap_or(0);
    let updated: u64 = current.saturating_add_signed(delta);
    store_persistent(env, &key, &updated);
}
