//! FCFA amount handling: tolerant wire decoding and grouped display.
//!
//! The backend stores amounts as positive integers of CFA francs, but
//! depending on the serializer in play an amount can arrive as a JSON
//! number or as a numeric string. Decoding accepts all of those; display
//! always renders the backend's `prix_affichage` convention (thousands
//! grouped with commas, `FCFA` suffix, no decimals).

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use serde::{Deserialize, Deserializer};

/// Format an amount with thousands separators, e.g. `12,500`.
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string().into_bytes();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in digits.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(b',');
        }
        out.push(*b);
    }
    out.reverse();
    // Input bytes are ASCII digits and commas, so this cannot fail.
    String::from_utf8(out).unwrap_or_default()
}

/// Format an amount as a full FCFA label, e.g. `12,500 FCFA`.
#[must_use]
pub fn format_fcfa(value: u64) -> String {
    format!("{} FCFA", format_grouped(value))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Int(u64),
    Float(f64),
    Text(String),
}

// Decimal payloads ("5000.00") surface as floats; only the whole part is
// meaningful for FCFA.
fn whole_part(v: f64) -> Option<u64> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let truncated = v.trunc() as u64;
    Some(truncated)
}

fn amount_from_repr<E: serde::de::Error>(repr: AmountRepr) -> Result<u32, E> {
    let value = match repr {
        AmountRepr::Int(v) => v,
        AmountRepr::Float(v) => whole_part(v).ok_or_else(|| E::custom("invalid amount"))?,
        AmountRepr::Text(s) => {
            let trimmed = s.trim();
            if let Ok(v) = trimmed.parse::<u64>() {
                v
            } else if let Ok(v) = trimmed.parse::<f64>() {
                whole_part(v).ok_or_else(|| E::custom("invalid amount"))?
            } else {
                return Err(E::custom("invalid amount"));
            }
        }
    };
    u32::try_from(value).map_err(|_| E::custom("amount out of range"))
}

/// Deserialize an FCFA amount from a JSON number or numeric string.
///
/// # Errors
///
/// Fails on negative, non-numeric, or out-of-range values.
pub fn deserialize_montant<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = AmountRepr::deserialize(deserializer)?;
    amount_from_repr(repr)
}

/// Deserialize an optional FCFA amount, treating `null` as absent.
///
/// # Errors
///
/// Fails on negative, non-numeric, or out-of-range values.
pub fn deserialize_montant_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<AmountRepr>::deserialize(deserializer)?;
    repr.map(amount_from_repr).transpose()
}
