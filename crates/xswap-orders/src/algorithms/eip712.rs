//! # EIP-712 Signing Payload
//!
//! Projects an order onto the limit-order protocol's typed-data schema.
//!
//! The payload is handed to an external signer; the digest is what the
//! signer's key actually signs. Field order in both is fixed, so the same
//! order always yields byte-identical output.
//!
//! The escrow extension (factory, hash lock, time locks, chains, deposits,
//! auction, whitelist) is folded into `extensionHash`, so a signature covers
//! the commitment and destination chain as well as the amounts.

use super::secret::keccak256;
use crate::domain::{u256_to_word, Address, Hash, Order, OrderResult, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Domain type string.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Order type string.
pub const ORDER_TYPE: &str = "Order(uint256 salt,address maker,address receiver,address makerAsset,address takerAsset,uint256 makingAmount,uint256 takingAmount,uint256 makerTraits,bytes32 extensionHash)";

/// Domain name of the limit-order protocol.
pub const DOMAIN_NAME: &str = "1inch Aggregation Router";

/// Domain version of the limit-order protocol.
pub const DOMAIN_VERSION: &str = "6";

/// Maker traits flag: order cannot be partially filled.
pub const NO_PARTIAL_FILLS_FLAG: usize = 255;
/// Maker traits flag: order can be filled more than once.
pub const ALLOW_MULTIPLE_FILLS_FLAG: usize = 254;
/// Maker traits flag: call the post-interaction (escrow factory).
pub const POST_INTERACTION_CALL_FLAG: usize = 251;
/// Maker traits flag: order carries an extension.
pub const HAS_EXTENSION_FLAG: usize = 249;
/// Bit offset of the nonce inside maker traits.
pub const NONCE_OFFSET: usize = 120;

/// EIP-712 domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Domain {
    /// Protocol name.
    pub name: String,
    /// Protocol version.
    pub version: String,
    /// Chain the order is signed for.
    pub chain_id: u64,
    /// Limit-order protocol contract.
    pub verifying_contract: Address,
}

/// One member of a typed-data struct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedField {
    /// Member name.
    pub name: String,
    /// Solidity type.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Order message with big integers as decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMessage {
    /// Salt.
    pub salt: String,
    /// Maker.
    pub maker: Address,
    /// Receiver (zero means maker).
    pub receiver: Address,
    /// Maker asset.
    pub maker_asset: Address,
    /// Taker asset.
    pub taker_asset: Address,
    /// Making amount.
    pub making_amount: String,
    /// Taking amount.
    pub taking_amount: String,
    /// Packed maker traits.
    pub maker_traits: String,
    /// `0x` hex of [`extension_hash`].
    pub extension_hash: String,
}

/// Full typed-data document (`eth_signTypedData_v4` shape).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
    /// Domain.
    pub domain: Eip712Domain,
    /// Type schema, keyed by struct name.
    pub types: BTreeMap<String, Vec<TypedField>>,
    /// Struct being signed.
    pub primary_type: String,
    /// Message values.
    pub message: OrderMessage,
}

impl TypedData {
    /// Canonical JSON text.
    pub fn to_json(&self) -> OrderResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Minimal ABI encoder for static EIP-712 members.
#[derive(Default)]
struct AbiEncoder {
    buf: Vec<u8>,
}

impl AbiEncoder {
    fn push_word(&mut self, word: &Hash) -> &mut Self {
        self.buf.extend_from_slice(word);
        self
    }

    fn push_address(&mut self, addr: &Address) -> &mut Self {
        self.push_word(&addr.to_word())
    }

    fn push_u256(&mut self, value: U256) -> &mut Self {
        self.push_word(&u256_to_word(value))
    }

    fn push_u64(&mut self, value: u64) -> &mut Self {
        self.push_u256(U256::from(value))
    }

    fn push_flag(&mut self, present: bool) -> &mut Self {
        self.push_u64(u64::from(present))
    }

    fn hash(&self) -> Hash {
        keccak256(&self.buf)
    }
}

fn fields(members: &[(&str, &str)]) -> Vec<TypedField> {
    members
        .iter()
        .map(|(name, kind)| TypedField {
            name: (*name).to_string(),
            kind: (*kind).to_string(),
        })
        .collect()
}

/// Pack flags and nonce into the maker traits word.
pub fn maker_traits(order: &Order) -> U256 {
    let mut traits = U256::from(order.nonce()) << NONCE_OFFSET;
    if !order.allow_partial_fills() {
        traits = traits | (U256::one() << NO_PARTIAL_FILLS_FLAG);
    }
    if order.allow_multiple_fills() {
        traits = traits | (U256::one() << ALLOW_MULTIPLE_FILLS_FLAG);
    }
    traits | (U256::one() << POST_INTERACTION_CALL_FLAG) | (U256::one() << HAS_EXTENSION_FLAG)
}

/// Keccak-256 over the ABI-style encoding of the escrow extension.
///
/// Absent auction, whitelist or resolving start encode a zero presence word,
/// so an absent field never collides with an explicit zero.
pub fn extension_hash(order: &Order) -> Hash {
    let mut enc = AbiEncoder::default();
    let tl = order.time_locks();
    enc.push_address(&order.escrow_factory())
        .push_word(&order.hash_lock().value())
        .push_u64(tl.src_withdrawal)
        .push_u64(tl.src_public_withdrawal)
        .push_u64(tl.src_cancellation)
        .push_u64(tl.src_public_cancellation)
        .push_u64(tl.dst_withdrawal)
        .push_u64(tl.dst_public_withdrawal)
        .push_u64(tl.dst_cancellation)
        .push_u64(order.src_chain_id())
        .push_u64(order.dst_chain_id())
        .push_u256(order.src_safety_deposit())
        .push_u256(order.dst_safety_deposit());

    enc.push_flag(order.auction().is_some());
    if let Some(auction) = order.auction() {
        enc.push_u64(u64::from(auction.initial_rate_bump))
            .push_u64(auction.duration)
            .push_u64(auction.start_time)
            .push_u64(auction.points.len() as u64);
        for point in &auction.points {
            enc.push_u64(u64::from(point.coefficient))
                .push_u64(u64::from(point.delay));
        }
    }

    enc.push_flag(order.whitelist().is_some());
    if let Some(whitelist) = order.whitelist() {
        enc.push_u64(whitelist.len() as u64);
        for item in whitelist.items() {
            enc.push_address(&item.address).push_u64(item.allow_from);
        }
    }

    enc.push_flag(order.resolving_start_time().is_some())
        .push_u64(order.resolving_start_time().unwrap_or(0));
    enc.hash()
}

/// Typed-data payload for `order`.
pub fn typed_data(order: &Order, verifying_contract: Address) -> TypedData {
    let mut types = BTreeMap::new();
    types.insert(
        "EIP712Domain".to_string(),
        fields(&[
            ("name", "string"),
            ("version", "string"),
            ("chainId", "uint256"),
            ("verifyingContract", "address"),
        ]),
    );
    types.insert(
        "Order".to_string(),
        fields(&[
            ("salt", "uint256"),
            ("maker", "address"),
            ("receiver", "address"),
            ("makerAsset", "address"),
            ("takerAsset", "address"),
            ("makingAmount", "uint256"),
            ("takingAmount", "uint256"),
            ("makerTraits", "uint256"),
            ("extensionHash", "bytes32"),
        ]),
    );

    TypedData {
        domain: Eip712Domain {
            name: DOMAIN_NAME.to_string(),
            version: DOMAIN_VERSION.to_string(),
            chain_id: order.src_chain_id(),
            verifying_contract,
        },
        types,
        primary_type: "Order".to_string(),
        message: OrderMessage {
            salt: order.salt().to_string(),
            maker: order.maker(),
            receiver: Address::ZERO,
            maker_asset: order.maker_asset(),
            taker_asset: order.taker_asset(),
            making_amount: order.making_amount().to_string(),
            taking_amount: order.taking_amount().to_string(),
            maker_traits: maker_traits(order).to_string(),
            extension_hash: format!("0x{}", hex::encode(extension_hash(order))),
        },
    }
}

/// `keccak256(abi.encode(typeHash, nameHash, versionHash, chainId, verifyingContract))`.
pub fn domain_separator(chain_id: u64, verifying_contract: &Address) -> Hash {
    AbiEncoder::default()
        .push_word(&keccak256(DOMAIN_TYPE.as_bytes()))
        .push_word(&keccak256(DOMAIN_NAME.as_bytes()))
        .push_word(&keccak256(DOMAIN_VERSION.as_bytes()))
        .push_u256(U256::from(chain_id))
        .push_address(verifying_contract)
        .hash()
}

/// Struct hash of the order message.
pub fn struct_hash(order: &Order) -> Hash {
    AbiEncoder::default()
        .push_word(&keccak256(ORDER_TYPE.as_bytes()))
        .push_u256(order.salt())
        .push_address(&order.maker())
        .push_address(&Address::ZERO)
        .push_address(&order.maker_asset())
        .push_address(&order.taker_asset())
        .push_u256(order.making_amount())
        .push_u256(order.taking_amount())
        .push_u256(maker_traits(order))
        .push_word(&extension_hash(order))
        .hash()
}

/// Final digest: `keccak256(0x1901 ‖ domainSeparator ‖ structHash)`.
pub fn order_hash(order: &Order, verifying_contract: Address) -> Hash {
    let mut out = Vec::with_capacity(2 + 32 + 32);
    out.push(0x19);
    out.push(0x01);
    out.extend_from_slice(&domain_separator(order.src_chain_id(), &verifying_contract));
    out.extend_from_slice(&struct_hash(order));
    keccak256(&out)
}
