//! Transaction construction.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxKind, U256},
    rpc::types::TransactionRequest,
};

use crate::error::{AppError, Result};

/// Semantic fields of an unsigned transaction.
///
/// `to: None` denotes contract creation.
#[derive(Debug, Clone)]
pub struct TxParams {
    pub from: Address,
    pub to: Option<Address>,
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub value: U256,
    /// Optional call data / deployment code.
    pub payload: Option<Bytes>,
}

/// Build a well-formed transaction request from semantic fields.
///
/// Pure construction: gas price and gas limit must be strictly positive;
/// `value` is a `U256`, so non-negativity is structural. No RPC interaction
/// happens here.
pub fn build(params: TxParams) -> Result<TransactionRequest> {
    if params.gas_price == 0 {
        return Err(AppError::InvalidTransaction("gas price must be strictly positive".into()));
    }
    if params.gas_limit == 0 {
        return Err(AppError::InvalidTransaction("gas limit must be strictly positive".into()));
    }

    let mut tx = TransactionRequest::default()
        .with_from(params.from)
        .with_nonce(params.nonce)
        .with_gas_price(params.gas_price)
        .with_gas_limit(params.gas_limit)
        .with_value(params.value);

    tx = match params.to {
        Some(to) => tx.with_to(to),
        None => tx.with_kind(TxKind::Create),
    };

    if let Some(payload) = params.payload {
        tx = tx.with_input(payload);
    }

    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn valid_params() -> TxParams {
        TxParams {
            from: address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            to: Some(address!("70997970c51812dc3a010c7d01b50e0d17dc79c8")),
            nonce: 7,
            gas_price: 20_000_000_000,
            gas_limit: 21_000,
            value: U256::from(123u64),
            payload: None,
        }
    }

    #[test]
    fn test_build_carries_all_fields() {
        let params = valid_params();
        let tx = build(params.clone()).unwrap();

        assert_eq!(tx.from, Some(params.from));
        assert_eq!(tx.to, Some(TxKind::Call(params.to.unwrap())));
        assert_eq!(tx.nonce, Some(7));
        assert_eq!(tx.gas_price, Some(20_000_000_000));
        assert_eq!(tx.gas, Some(21_000));
        assert_eq!(tx.value, Some(U256::from(123u64)));
    }

    #[test]
    fn test_build_rejects_zero_gas_price() {
        let params = TxParams { gas_price: 0, ..valid_params() };
        assert!(matches!(build(params), Err(AppError::InvalidTransaction(_))));
    }

    #[test]
    fn test_build_rejects_zero_gas_limit() {
        let params = TxParams { gas_limit: 0, ..valid_params() };
        assert!(matches!(build(params), Err(AppError::InvalidTransaction(_))));
    }

    #[test]
    fn test_build_without_recipient_is_contract_creation() {
        let params = TxParams {
            to: None,
            payload: Some(Bytes::from(vec![0x60, 0x01])),
            ..valid_params()
        };
        let tx = build(params).unwrap();
        assert_eq!(tx.to, Some(TxKind::Create));
        assert!(tx.input.input().is_some());
    }

    #[test]
    fn test_build_accepts_zero_value() {
        let params = TxParams { value: U256::ZERO, ..valid_params() };
        assert!(build(params).is_ok());
    }

    #[test]
    fn test_address_equality_is_case_insensitive() {
        // Mixed-case and lowercase renderings are the same 20 bytes.
        let checksummed: Address = "0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
        let lowercase: Address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
        assert_eq!(checksummed, lowercase);
    }
}
