use crate::{
    types::{Error, PAYMENT_TOKEN},
    utils::helpers::read_config,
};
use common::nft::interface::NFTContractClient;
use soroban_sdk::{token, Address, Env};

pub fn get_nft_client<'a>(env: &'a Env, asset_contract: &Address) -> NFTContractClient<'a> {
    NFTContractClient::new(env, asset_contract)
}

pub fn get_payment_token_client(env: &Env) -> Result<token::Client<'_>, Error> {
    let token_addr: Address = read_config(env, &PAYMENT_TOKEN)?;
    Ok(token::Client::new(env, &token_addr))
}
