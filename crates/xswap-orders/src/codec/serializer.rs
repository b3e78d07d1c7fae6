//! # Canonical Serializer
//!
//! Converts an [`Order`] plus its secret material to the transport record
//! and back.
//!
//! ## Round trip
//!
//! Serializing an order with its material and deserializing the result
//! yields an order with the same commitment, schedule, chain ids, amounts,
//! nonce and flags. The commitment is always re-derived from the original
//! secrets; `hashLock.data` holds raw secrets (or a placeholder), never the
//! derived leaves or root.
//!
//! ## Fallbacks
//!
//! Missing auction, whitelist or resolving start are written as neutral
//! defaults. Every substitution is reported in [`Serialized::diagnostics`]
//! and logged, so a defaulted record is never mistaken for a faithful one.

use super::transport::{
    parse_u256, parse_u64, whitelist_from_transport, whitelist_to_transport, HashLockData,
    OriginalParams, SerializedAuction, SerializedHashLock, SerializedOrder, SerializedTimeLocks,
};
use crate::domain::{
    invariant_chain_ids, invariant_secrets_match, Address, Details, EscrowParams, Extra, HashLock, HashLockKind, Order,
    OrderError, OrderInfo, OrderResult, SecretMaterial, SecureSecret, SECRET_PLACEHOLDER,
};
use std::fmt;
use tracing::{debug, warn};

/// Caller-supplied replacements for order fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeOverrides {
    /// Replaces the order's escrow factory.
    pub escrow_factory: Option<Address>,
    /// Replaces the order's source chain id.
    pub src_chain_id: Option<u64>,
    /// Replaces the order's destination chain id.
    pub dst_chain_id: Option<u64>,
}

/// Something the serializer substituted instead of reading from the order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializeDiagnostic {
    /// No usable secret material; `hashLock.data` holds the placeholder.
    SecretPlaceholder,
    /// Order had no auction; the zero auction was written.
    DefaultedAuction,
    /// Order had no whitelist; an empty list was written.
    DefaultedWhitelist,
    /// Order had no resolving start; `"0"` was written.
    DefaultedResolvingStartTime,
    /// An override replaced a different value held by the order.
    FieldOverridden {
        /// Transport field name.
        field: &'static str,
    },
}

impl fmt::Display for SerializeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretPlaceholder => f.write_str("hashLock.data holds a placeholder"),
            Self::DefaultedAuction => f.write_str("auction defaulted"),
            Self::DefaultedWhitelist => f.write_str("whitelist defaulted"),
            Self::DefaultedResolvingStartTime => f.write_str("resolvingStartTime defaulted"),
            Self::FieldOverridden { field } => write!(f, "{field} overridden"),
        }
    }
}

/// Serializer output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Serialized {
    /// Transport record.
    pub order: SerializedOrder,
    /// Substitutions made while writing it, in field order.
    pub diagnostics: Vec<SerializeDiagnostic>,
}

impl Serialized {
    /// True when nothing was substituted.
    pub fn is_faithful(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// True when `diagnostic` was reported.
    pub fn has(&self, diagnostic: &SerializeDiagnostic) -> bool {
        self.diagnostics.contains(diagnostic)
    }
}

/// How closely a reconstructed order matches the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fidelity {
    /// Commitment re-derived from `originalParams`.
    Exact,
    /// Commitment derived from `hashLock.data`, which may be a placeholder.
    BestEffort,
}

/// Where the reconstructed commitment came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretSource {
    /// `originalParams.secrets`.
    OriginalSecrets,
    /// `originalParams.secret`.
    OriginalSecret,
    /// `hashLock.data`.
    HashLockData,
}

/// Best-effort deserializer output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconstruction {
    /// Rebuilt order.
    pub order: Order,
    /// Whether the commitment is trustworthy.
    pub fidelity: Fidelity,
    /// Which secrets were used.
    pub source: SecretSource,
}

/// Write the transport record for `order`.
///
/// `material` must re-derive the order's commitment, otherwise
/// [`OrderError::CommitmentMismatch`]. Without material the record gets a
/// placeholder and cannot be reconstructed exactly.
pub fn serialize(
    order: &Order,
    material: Option<&SecretMaterial>,
    overrides: &SerializeOverrides,
) -> OrderResult<Serialized> {
    let mut diagnostics = Vec::new();

    if let Some(material) = material {
        invariant_secrets_match(material, order.hash_lock())?;
    }

    let hash_lock = match material {
        Some(SecretMaterial::Multiple(secrets)) if order.allow_multiple_fills() => {
            SerializedHashLock {
                kind: HashLockKind::Multiple,
                data: HashLockData::Multiple(secrets.clone()),
            }
        }
        Some(SecretMaterial::Single(secret)) => SerializedHashLock {
            kind: HashLockKind::Single,
            data: HashLockData::Single(secret.clone()),
        },
        _ => {
            diagnostics.push(SerializeDiagnostic::SecretPlaceholder);
            placeholder_hash_lock(order.allow_multiple_fills())
        }
    };

    let original_params = OriginalParams {
        secret: match material {
            Some(SecretMaterial::Single(secret)) => Some(secret.clone()),
            _ => None,
        },
        secrets: match material {
            Some(SecretMaterial::Multiple(secrets)) => Some(secrets.clone()),
            _ => None,
        },
        allow_multiple_fills: order.allow_multiple_fills(),
    };

    let auction = match order.auction() {
        Some(auction) => SerializedAuction::from(auction),
        None => {
            diagnostics.push(SerializeDiagnostic::DefaultedAuction);
            SerializedAuction::fallback()
        }
    };

    let whitelist = match order.whitelist() {
        Some(whitelist) => whitelist_to_transport(whitelist),
        None => {
            diagnostics.push(SerializeDiagnostic::DefaultedWhitelist);
            Vec::new()
        }
    };

    let resolving_start_time = match order.resolving_start_time() {
        Some(start) => start,
        None => {
            diagnostics.push(SerializeDiagnostic::DefaultedResolvingStartTime);
            0
        }
    };

    let escrow_factory = overridden(
        "escrowFactory",
        order.escrow_factory(),
        overrides.escrow_factory,
        &mut diagnostics,
    );
    let src_chain_id = overridden(
        "srcChainId",
        order.src_chain_id(),
        overrides.src_chain_id,
        &mut diagnostics,
    );
    let dst_chain_id = overridden(
        "dstChainId",
        order.dst_chain_id(),
        overrides.dst_chain_id,
        &mut diagnostics,
    );
    invariant_chain_ids(src_chain_id, dst_chain_id)?;

    for diagnostic in &diagnostics {
        warn!("[xswap] Serialization fallback: {}", diagnostic);
    }

    let serialized = SerializedOrder {
        salt: order.salt().to_string(),
        maker: order.maker(),
        making_amount: order.making_amount().to_string(),
        taking_amount: order.taking_amount().to_string(),
        maker_asset: order.maker_asset(),
        taker_asset: order.taker_asset(),
        hash_lock,
        time_locks: SerializedTimeLocks::from(order.time_locks()),
        src_chain_id,
        dst_chain_id,
        src_safety_deposit: order.src_safety_deposit().to_string(),
        dst_safety_deposit: order.dst_safety_deposit().to_string(),
        auction,
        whitelist,
        resolving_start_time: resolving_start_time.to_string(),
        nonce: order.nonce().to_string(),
        allow_partial_fills: order.allow_partial_fills(),
        allow_multiple_fills: order.allow_multiple_fills(),
        escrow_factory,
        original_params,
    };

    debug!(
        "[xswap] Serialized {} order with {} diagnostic(s)",
        serialized.hash_lock.kind,
        diagnostics.len()
    );

    Ok(Serialized {
        order: serialized,
        diagnostics,
    })
}

fn placeholder_hash_lock(multiple: bool) -> SerializedHashLock {
    let placeholder = SecureSecret::new(SECRET_PLACEHOLDER);
    if multiple {
        SerializedHashLock {
            kind: HashLockKind::Multiple,
            data: HashLockData::Multiple(vec![placeholder]),
        }
    } else {
        SerializedHashLock {
            kind: HashLockKind::Single,
            data: HashLockData::Single(placeholder),
        }
    }
}

fn overridden<T: PartialEq + Copy>(
    field: &'static str,
    own: T,
    replacement: Option<T>,
    diagnostics: &mut Vec<SerializeDiagnostic>,
) -> T {
    match replacement {
        Some(value) if value != own => {
            diagnostics.push(SerializeDiagnostic::FieldOverridden { field });
            value
        }
        Some(value) => value,
        None => own,
    }
}

/// Rebuild an order from its transport record.
///
/// The commitment is re-derived from `originalParams.secrets`, else from
/// `originalParams.secret`. Records without either are rejected with
/// [`OrderError::ReconstructionAmbiguous`]; use [`deserialize_best_effort`]
/// to fall back to `hashLock.data`.
///
/// `hashLock` must agree with `originalParams`: either it repeats the same
/// secrets under the derived type, or it is the placeholder typed by
/// `allowMultipleFills`. Anything else is [`OrderError::MalformedTransportData`].
pub fn deserialize(serialized: &SerializedOrder) -> OrderResult<Order> {
    let (hash_lock, source) = original_hash_lock(serialized)?.ok_or_else(|| {
        OrderError::ReconstructionAmbiguous(
            "originalParams carries neither secret nor secrets".to_string(),
        )
    })?;
    reconcile_hash_lock(serialized, &hash_lock)?;
    debug!("[xswap] Rebuilding order from {:?}", source);
    rebuild(serialized, hash_lock)
}

/// Rebuild an order, falling back to `hashLock.data` when `originalParams`
/// carries no secrets.
///
/// The fallback result is marked [`Fidelity::BestEffort`]: the data may be a
/// placeholder, in which case the commitment does not match the order that
/// was serialized.
pub fn deserialize_best_effort(serialized: &SerializedOrder) -> OrderResult<Reconstruction> {
    if let Some((hash_lock, source)) = original_hash_lock(serialized)? {
        reconcile_hash_lock(serialized, &hash_lock)?;
        return Ok(Reconstruction {
            order: rebuild(serialized, hash_lock)?,
            fidelity: Fidelity::Exact,
            source,
        });
    }

    let hash_lock = data_hash_lock(&serialized.hash_lock)?;
    warn!(
        "[xswap] Rebuilding order from hashLock.data; commitment may not match the original"
    );
    Ok(Reconstruction {
        order: rebuild(serialized, hash_lock)?,
        fidelity: Fidelity::BestEffort,
        source: SecretSource::HashLockData,
    })
}

fn original_hash_lock(
    serialized: &SerializedOrder,
) -> OrderResult<Option<(HashLock, SecretSource)>> {
    let params = &serialized.original_params;
    if let Some(secrets) = &params.secrets {
        let material = SecretMaterial::Multiple(secrets.clone());
        return Ok(Some((
            HashLock::from_material(&material)?,
            SecretSource::OriginalSecrets,
        )));
    }
    if let Some(secret) = &params.secret {
        return Ok(Some((
            HashLock::for_single_fill(secret.expose())?,
            SecretSource::OriginalSecret,
        )));
    }
    Ok(None)
}

fn reconcile_hash_lock(serialized: &SerializedOrder, derived: &HashLock) -> OrderResult<()> {
    let hash_lock = &serialized.hash_lock;
    let params = &serialized.original_params;

    let shaped = matches!(
        (hash_lock.kind, &hash_lock.data),
        (HashLockKind::Single, HashLockData::Single(_))
            | (HashLockKind::Multiple, HashLockData::Multiple(_))
    );
    if !shaped {
        return Err(OrderError::MalformedTransportData(format!(
            "hashLock.data shape does not match type {}",
            hash_lock.kind
        )));
    }

    let repeats_params = hash_lock.kind == derived.kind()
        && match &hash_lock.data {
            HashLockData::Single(secret) => params.secret.as_ref() == Some(secret),
            HashLockData::Multiple(secrets) => params.secrets.as_ref() == Some(secrets),
        };
    let placeholder_kind = if serialized.allow_multiple_fills {
        HashLockKind::Multiple
    } else {
        HashLockKind::Single
    };
    let is_placeholder =
        hash_lock.kind == placeholder_kind && is_placeholder_data(&hash_lock.data);

    if repeats_params || is_placeholder {
        Ok(())
    } else {
        Err(OrderError::MalformedTransportData(format!(
            "hashLock ({}) disagrees with originalParams ({})",
            hash_lock.kind,
            derived.kind()
        )))
    }
}

fn is_placeholder_data(data: &HashLockData) -> bool {
    match data {
        HashLockData::Single(secret) => secret.expose() == SECRET_PLACEHOLDER,
        HashLockData::Multiple(secrets) => {
            secrets.len() == 1 && secrets[0].expose() == SECRET_PLACEHOLDER
        }
    }
}

fn data_hash_lock(hash_lock: &SerializedHashLock) -> OrderResult<HashLock> {
    match (hash_lock.kind, &hash_lock.data) {
        (HashLockKind::Single, HashLockData::Single(secret)) => {
            HashLock::for_single_fill(secret.expose())
        }
        (HashLockKind::Multiple, HashLockData::Multiple(secrets)) => {
            HashLock::from_material(&SecretMaterial::Multiple(secrets.clone()))
        }
        (kind, _) => Err(OrderError::MalformedTransportData(format!(
            "hashLock.data shape does not match type {kind}"
        ))),
    }
}

fn rebuild(s: &SerializedOrder, hash_lock: HashLock) -> OrderResult<Order> {
    let info = OrderInfo {
        salt: parse_u256("salt", &s.salt)?,
        maker: s.maker,
        making_amount: parse_u256("makingAmount", &s.making_amount)?,
        taking_amount: parse_u256("takingAmount", &s.taking_amount)?,
        maker_asset: s.maker_asset,
        taker_asset: s.taker_asset,
    };

    let escrow = EscrowParams {
        hash_lock,
        time_locks: s.time_locks.to_time_locks()?,
        src_chain_id: s.src_chain_id,
        dst_chain_id: s.dst_chain_id,
        src_safety_deposit: parse_u256("srcSafetyDeposit", &s.src_safety_deposit)?,
        dst_safety_deposit: parse_u256("dstSafetyDeposit", &s.dst_safety_deposit)?,
    };

    let details = Details {
        auction: s.auction.to_auction()?,
        whitelist: whitelist_from_transport(&s.whitelist)?,
        resolving_start_time: parse_u64("resolvingStartTime", &s.resolving_start_time)?,
    };

    let extra = Extra {
        nonce: parse_u64("nonce", &s.nonce)?,
        allow_partial_fills: s.allow_partial_fills,
        allow_multiple_fills: s.allow_multiple_fills,
    };

    Order::new(s.escrow_factory, info, escrow, details, extra)
}

/// Serialize straight to JSON text.
pub fn to_text(
    order: &Order,
    material: Option<&SecretMaterial>,
    overrides: &SerializeOverrides,
) -> OrderResult<String> {
    serialize(order, material, overrides)?.order.to_json()
}

/// Parse JSON text and rebuild the order strictly.
pub fn from_text(text: &str) -> OrderResult<Order> {
    deserialize(&SerializedOrder::from_json(text)?)
}
