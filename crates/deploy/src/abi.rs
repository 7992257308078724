//! Minimal ABI call-data encoding.
//!
//! Covers exactly the argument shapes the step tables use: addresses,
//! unsigned integers, strings and address arrays. Dynamic arguments are
//! encoded with head offsets and length-prefixed, zero-padded tails per the
//! contract ABI. Call data is built as hex strings, ready for the `data`
//! field of an `eth_sendTransaction` payload.

use alloy_core::primitives::{Address, keccak256};

/// A fully resolved ABI argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    Address(Address),
    Uint(u64),
    Str(String),
    AddressArray(Vec<Address>),
}

/// 4-byte function selector for a canonical signature, as hex.
pub fn selector(signature: &str) -> String {
    hex::encode(&keccak256(signature.as_bytes())[..4])
}

/// Call data for a method invocation: selector plus encoded arguments.
pub fn encode_call(signature: &str, args: &[AbiValue]) -> String {
    format!("0x{}{}", selector(signature), encode_args(args))
}

/// Deployment data: creation bytecode followed by encoded constructor args.
pub fn encode_deploy(bytecode: &str, args: &[AbiValue]) -> String {
    format!("0x{}{}", bytecode.trim_start_matches("0x"), encode_args(args))
}

/// Encode an argument list as ABI words, as hex without a 0x prefix.
pub fn encode_args(args: &[AbiValue]) -> String {
    let head_len = 32 * args.len();
    let mut head = String::new();
    let mut tail = String::new();

    for arg in args {
        match arg {
            AbiValue::Address(address) => head.push_str(&address_word(address)),
            AbiValue::Uint(value) => head.push_str(&uint_word(*value)),
            AbiValue::Str(s) => {
                head.push_str(&offset_word(head_len, &tail));
                tail.push_str(&bytes_tail(s.as_bytes()));
            }
            AbiValue::AddressArray(addresses) => {
                head.push_str(&offset_word(head_len, &tail));
                tail.push_str(&array_tail(addresses));
            }
        }
    }

    head + &tail
}

/// Head slot for a dynamic value: byte offset of its tail within the
/// argument block.
fn offset_word(head_len: usize, tail: &str) -> String {
    uint_word((head_len + tail.len() / 2) as u64)
}

fn address_word(address: &Address) -> String {
    format!("{:0>64}", hex::encode(address))
}

fn uint_word(value: u64) -> String {
    format!("{value:064x}")
}

/// Length word followed by the data, zero-padded right to a word boundary.
fn bytes_tail(bytes: &[u8]) -> String {
    let mut words = uint_word(bytes.len() as u64);
    let mut data = hex::encode(bytes);
    while data.len() % 64 != 0 {
        data.push('0');
    }
    words.push_str(&data);
    words
}

/// Length word followed by one word per element.
fn array_tail(addresses: &[Address]) -> String {
    let mut words = uint_word(addresses.len() as u64);
    for address in addresses {
        words.push_str(&address_word(address));
    }
    words
}
