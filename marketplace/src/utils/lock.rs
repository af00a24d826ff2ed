use common::storage::{get_data, remove_data, store_data};
use soroban_sdk::Env;

use crate::types::{DataKey, Error};

/// Marketplace-wide "operation in progress" flag.
///
/// `acquire` fails if another `list` or `purchase` is still on the call stack.
/// The flag is cleared when the lock is dropped, whatever path the operation
/// leaves by.
pub struct OperationLock<'a> {
    env: &'a Env,
}

impl<'a> OperationLock<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, Error> {
        if is_locked(env) {
            return Err(Error::ReentrancyRejected);
        }
        store_data(env, &DataKey::Locked, &true);
        Ok(OperationLock { env })
    }
}

impl Drop for OperationLock<'_> {
    fn drop(&mut self) {
        remove_data(self.env, &DataKey::Locked);
    }
}

pub fn is_locked(env: &Env) -> bool {
    get_data(env, &DataKey::Locked).unwrap_or(false)
}
