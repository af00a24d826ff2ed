#![no_std]

pub mod nft;
pub mod storage;
