use super::matrix::{build_variant_rows, IdSequence};
use crate::config::VariantDefaults;
use crate::error::{AppError, AppResult};
use crate::models::{RowPatch, VariantAxis, VariantRow};

/// Editing session for one product's variants.
///
/// The axes are the canonical state; `rows` is derived from them and rebuilt
/// after every axis mutation. Row edits only touch `rows`.
#[derive(Debug, Clone)]
pub struct VariantEditor {
    pub product_sku: String,
    axes: Vec<VariantAxis>,
    rows: Vec<VariantRow>,
    defaults: VariantDefaults,
    ids: IdSequence,
}

impl VariantEditor {
    pub fn new(product_sku: impl Into<String>, defaults: VariantDefaults) -> Self {
        Self::with_ids(product_sku, defaults, IdSequence::from_clock())
    }

    pub fn with_ids(product_sku: impl Into<String>, defaults: VariantDefaults, ids: IdSequence) -> Self {
        Self {
            product_sku: product_sku.into(),
            axes: Vec::new(),
            rows: Vec::new(),
            defaults,
            ids,
        }
    }

    pub fn axes(&self) -> &[VariantAxis] {
        &self.axes
    }

    pub fn rows(&self) -> &[VariantRow] {
        &self.rows
    }

    fn recompute(&mut self) {
        self.rows = build_variant_rows(
            &self.axes,
            &self.rows,
            &self.product_sku,
            &self.defaults,
            &mut self.ids,
        );
        log::debug!(
            "variant matrix for {} rebuilt: {} axes, {} rows",
            self.product_sku,
            self.axes.len(),
            self.rows.len()
        );
    }

    fn axis_mut(&mut self, axis_id: u64) -> AppResult<&mut VariantAxis> {
        self.axes
            .iter_mut()
            .find(|a| a.id == axis_id)
            .ok_or(AppError::AxisNotFound(axis_id))
    }

    /// Appends an empty axis. It joins the product once a value is picked.
    pub fn add_axis(&mut self, kind: impl Into<String>) -> u64 {
        let id = self.ids.next_id();
        self.axes.push(VariantAxis::new(id, kind));
        self.recompute();
        id
    }

    pub fn remove_axis(&mut self, axis_id: u64) -> AppResult<()> {
        let before = self.axes.len();
        self.axes.retain(|a| a.id != axis_id);
        if self.axes.len() == before {
            return Err(AppError::AxisNotFound(axis_id));
        }
        self.recompute();
        Ok(())
    }

    pub fn set_axis_type(&mut self, axis_id: u64, kind: impl Into<String>) -> AppResult<()> {
        self.axis_mut(axis_id)?.kind = kind.into();
        self.recompute();
        Ok(())
    }

    pub fn set_axis_values(&mut self, axis_id: u64, values: Vec<String>) -> AppResult<()> {
        let axis = self.axis_mut(axis_id)?;
        axis.values.clear();
        for value in values {
            if !axis.values.contains(&value) {
                axis.values.push(value);
            }
        }
        self.recompute();
        Ok(())
    }

    /// Selects `value` if absent, deselects it otherwise.
    pub fn toggle_axis_value(&mut self, axis_id: u64, value: &str) -> AppResult<()> {
        let axis = self.axis_mut(axis_id)?;
        match axis.values.iter().position(|v| v == value) {
            Some(idx) => {
                axis.values.remove(idx);
            }
            None => axis.values.push(value.to_string()),
        }
        self.recompute();
        Ok(())
    }

    pub fn set_use_image(&mut self, axis_id: u64, use_image: bool) -> AppResult<()> {
        self.axis_mut(axis_id)?.use_image = use_image;
        self.recompute();
        Ok(())
    }

    pub fn update_row(&mut self, row_id: u64, patch: RowPatch) -> AppResult<&VariantRow> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == row_id)
            .ok_or(AppError::RowNotFound(row_id))?;
        row.apply(patch);
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn editor() -> VariantEditor {
        VariantEditor::with_ids("MBA13", VariantDefaults::default(), IdSequence::starting_at(1))
    }

    #[test]
    fn axis_without_values_adds_no_rows() {
        let mut ed = editor();
        let color = ed.add_axis("Color");
        assert!(ed.rows().is_empty());

        ed.toggle_axis_value(color, "Midnight").unwrap();
        ed.toggle_axis_value(color, "Silver").unwrap();
        assert_eq!(ed.rows().len(), 2);

        let ssd = ed.add_axis("SSD");
        assert_eq!(ed.rows().len(), 2);
        ed.set_axis_values(ssd, vec!["256GB".into(), "512GB".into(), "1TB".into()])
            .unwrap();
        assert_eq!(ed.rows().len(), 6);
    }

    #[test]
    fn row_edit_survives_further_axis_changes() {
        let mut ed = editor();
        let color = ed.add_axis("Color");
        let ssd = ed.add_axis("SSD");
        ed.toggle_axis_value(color, "Midnight").unwrap();
        ed.toggle_axis_value(ssd, "256GB").unwrap();

        let row_id = ed.rows()[0].id;
        let patch = RowPatch {
            price: Some("999".into()),
            ..Default::default()
        };
        assert_eq!(ed.update_row(row_id, patch).unwrap().price, "999");

        ed.toggle_axis_value(ssd, "512GB").unwrap();
        ed.set_use_image(color, true).unwrap();
        let row = ed.rows().iter().find(|r| r.id == row_id).unwrap();
        assert_eq!(row.price, "999");
        assert_eq!(row.image.as_deref(), Some("/static/img/variants/midnight.png"));
    }

    #[test]
    fn deselecting_and_removing_shrink_the_matrix() {
        let mut ed = editor();
        let color = ed.add_axis("Color");
        ed.set_axis_values(color, vec!["Gold".into(), "Silver".into(), "Gold".into()])
            .unwrap();
        assert_eq!(ed.axes()[0].values, vec!["Gold", "Silver"]);

        ed.toggle_axis_value(color, "Gold").unwrap();
        assert_eq!(ed.rows().len(), 1);

        ed.remove_axis(color).unwrap();
        assert!(ed.rows().is_empty());
        assert!(ed.axes().is_empty());
    }

    #[test]
    fn renaming_axis_changes_row_keys() {
        let mut ed = editor();
        let axis = ed.add_axis("Colour");
        ed.toggle_axis_value(axis, "Red").unwrap();
        let old_id = ed.rows()[0].id;

        ed.set_axis_type(axis, "Color").unwrap();
        assert_ne!(ed.rows()[0].id, old_id);
        assert_eq!(ed.rows()[0].option("Color"), Some("Red"));
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut ed = editor();
        assert_eq!(ed.remove_axis(42), Err(AppError::AxisNotFound(42)));
        assert_eq!(ed.toggle_axis_value(42, "Red"), Err(AppError::AxisNotFound(42)));
        assert_eq!(
            ed.update_row(7, RowPatch::default()).unwrap_err(),
            AppError::RowNotFound(7)
        );
    }

    #[test]
    fn axis_and_row_ids_never_collide() {
        let mut ed = editor();
        let color = ed.add_axis("Color");
        ed.set_axis_values(color, vec!["Midnight".into(), "Silver".into()])
            .unwrap();
        let ssd = ed.add_axis("SSD");
        ed.set_axis_values(ssd, vec!["256GB".into(), "512GB".into()])
            .unwrap();
        let memory = ed.add_axis("Memory");
        ed.toggle_axis_value(memory, "16GB").unwrap();

        let ids: Vec<u64> = ed
            .axes()
            .iter()
            .map(|a| a.id)
            .chain(ed.rows().iter().map(|r| r.id))
            .collect();
        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 3 + 4);
        assert_eq!(unique.len(), ids.len());
    }
}
