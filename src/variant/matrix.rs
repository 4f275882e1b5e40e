//! Variant matrix: the Cartesian product of the selected axis values,
//! reconciled against the previous rows so edits to price, stock, SKU and
//! status survive a regeneration.
//!
//! Rows are matched by their ordered `(axis type, value)` tuple, never by id.
//! Reordering axes therefore changes every key and the rows come back as new.

use std::collections::{HashMap, HashSet};

use chrono::Utc;

use super::images::image_for;
use crate::config::VariantDefaults;
use crate::models::{VariantAxis, VariantOption, VariantRow};

/// Source of fresh row and axis ids, seeded from the clock.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn from_clock() -> Self {
        let millis = Utc::now().timestamp_millis();
        Self::starting_at(u64::try_from(millis).unwrap_or_default())
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CombinationKey(Vec<(String, String)>);

impl CombinationKey {
    fn of(options: &[VariantOption]) -> Self {
        Self(
            options
                .iter()
                .map(|o| (o.axis.clone(), o.value.clone()))
                .collect(),
        )
    }
}

/// Default SKU for a combination: `MBA13` + Midnight/Space Gray ->
/// `MBA13-MIDNIGHT-SPACEGRAY`.
pub fn default_sku(product_sku: &str, options: &[VariantOption]) -> String {
    let mut sku = product_sku.to_string();
    for option in options {
        let part: String = option
            .value
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();
        sku.push('-');
        sku.push_str(&part);
    }
    sku
}

fn combinations(axes: &[VariantAxis]) -> Vec<Vec<VariantOption>> {
    let active: Vec<&VariantAxis> = axes.iter().filter(|a| a.is_active()).collect();
    if active.is_empty() {
        return Vec::new();
    }

    let mut combos: Vec<Vec<VariantOption>> = vec![Vec::new()];
    for axis in active {
        let mut seen = HashSet::new();
        let values: Vec<&String> = axis.values.iter().filter(|v| seen.insert(*v)).collect();

        let mut next = Vec::with_capacity(combos.len() * values.len());
        for combo in &combos {
            for value in &values {
                let mut extended = combo.clone();
                extended.push(VariantOption {
                    axis: axis.kind.clone(),
                    value: (*value).clone(),
                });
                next.push(extended);
            }
        }
        combos = next;
    }
    combos
}

/// Position among the active axes of the one axis rows take their image
/// from, if exactly one asks for it. Rows list one option per active axis
/// in axis order, so the position indexes a row's options directly.
fn image_axis(axes: &[VariantAxis]) -> Option<usize> {
    let mut flagged = axes
        .iter()
        .filter(|a| a.is_active())
        .enumerate()
        .filter(|(_, a)| a.use_image);
    match (flagged.next(), flagged.next()) {
        (Some((position, _)), None) => Some(position),
        _ => None,
    }
}

/// Recomputes the variant rows for `axes`.
///
/// Output order follows axis order, first axis outermost, then value order.
/// Axes without values take no part; with none left the result is empty.
pub fn build_variant_rows(
    axes: &[VariantAxis],
    previous: &[VariantRow],
    product_sku: &str,
    defaults: &VariantDefaults,
    ids: &mut IdSequence,
) -> Vec<VariantRow> {
    let by_key: HashMap<CombinationKey, &VariantRow> = previous
        .iter()
        .map(|row| (CombinationKey::of(&row.options), row))
        .collect();
    let image_position = image_axis(axes);

    combinations(axes)
        .into_iter()
        .map(|options| {
            let image = image_position
                .and_then(|position| options.get(position))
                .and_then(|o| image_for(&o.value))
                .map(str::to_string);

            match by_key.get(&CombinationKey::of(&options)) {
                Some(prior) => VariantRow {
                    id: prior.id,
                    image,
                    options,
                    price: prior.price.clone(),
                    stock: prior.stock.clone(),
                    sku: prior.sku.clone(),
                    status: prior.status,
                },
                None => VariantRow {
                    id: ids.next_id(),
                    image,
                    sku: default_sku(product_sku, &options),
                    options,
                    price: defaults.price.clone(),
                    stock: defaults.stock.clone(),
                    status: true,
                },
            }
        })
        .collect()
}
