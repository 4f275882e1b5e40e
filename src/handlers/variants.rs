use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    extract::{AppJson, AppPath, AppQuery},
    models::{RowPatch, VariantAxis, VariantRow},
    state::AppState,
    table::{Page, TableQuery},
    variant::{preset_values, presets, VariantEditor},
};

#[derive(Serialize)]
pub struct EditorResponse {
    pub id: Uuid,
    pub product_sku: String,
    pub axes: Vec<VariantAxis>,
    pub rows: Vec<VariantRow>,
}

impl EditorResponse {
    fn new(id: Uuid, editor: &VariantEditor) -> Self {
        Self {
            id,
            product_sku: editor.product_sku.clone(),
            axes: editor.axes().to_vec(),
            rows: editor.rows().to_vec(),
        }
    }
}

#[derive(Deserialize)]
pub struct AxisForm {
    #[serde(rename = "type")]
    kind: Option<String>,
    values: Option<Vec<String>>,
    #[serde(rename = "useImage")]
    use_image: Option<bool>,
}

#[derive(Serialize)]
pub struct PresetDisplay {
    #[serde(rename = "type")]
    kind: String,
    values: &'static [&'static str],
}

#[derive(Deserialize)]
pub struct PresetFilter {
    #[serde(rename = "type")]
    kind: Option<String>,
}

fn required_type(kind: String) -> AppResult<String> {
    let kind = kind.trim();
    if kind.is_empty() {
        return Err(AppError::InvalidInput("axis type is required".to_string()));
    }
    Ok(kind.to_string())
}

fn apply_axis_form(editor: &mut VariantEditor, axis_id: u64, form: AxisForm) -> AppResult<()> {
    if let Some(kind) = form.kind {
        editor.set_axis_type(axis_id, required_type(kind)?)?;
    }
    if let Some(values) = form.values {
        editor.set_axis_values(axis_id, values)?;
    }
    if let Some(use_image) = form.use_image {
        editor.set_use_image(axis_id, use_image)?;
    }
    Ok(())
}

// Suggested values, all of them or only those for `?type=`
pub async fn presets_list(AppQuery(filter): AppQuery<PresetFilter>) -> Json<Vec<PresetDisplay>> {
    let listed = match filter.kind {
        Some(kind) => {
            let values = preset_values(kind.trim());
            if values.is_empty() {
                Vec::new()
            } else {
                vec![PresetDisplay { kind: kind.trim().to_string(), values }]
            }
        }
        None => presets()
            .map(|(kind, values)| PresetDisplay { kind: kind.to_string(), values })
            .collect(),
    };
    Json(listed)
}

// Opens a fresh variant editor for a catalog product
pub async fn open_editor(
    State(state): State<AppState>,
    AppPath(sku): AppPath<String>,
) -> AppResult<(StatusCode, Json<EditorResponse>)> {
    let product = state
        .catalog
        .product(&sku)
        .ok_or_else(|| AppError::ProductNotFound(sku.clone()))?;

    let editor = VariantEditor::new(&product.sku, state.config.variant_defaults.clone());
    let id = Uuid::new_v4();
    let response = EditorResponse::new(id, &editor);
    state.editors.write().await.insert(id, editor);

    log::info!("opened variant editor {} for {}", id, product.sku);
    Ok((StatusCode::CREATED, Json(response)))
}

// Drops an editor session once the product form is closed
pub async fn close_editor(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    state
        .editors
        .write()
        .await
        .remove(&id)
        .ok_or(AppError::EditorNotFound(id))?;
    log::info!("closed variant editor {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn editor_detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<EditorResponse>> {
    let editors = state.editors.read().await;
    let editor = editors.get(&id).ok_or(AppError::EditorNotFound(id))?;
    Ok(Json(EditorResponse::new(id, editor)))
}

// Variant table of the editor with the usual sort/filter/page controls
pub async fn editor_rows(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(query): AppQuery<TableQuery>,
) -> AppResult<Json<Page<VariantRow>>> {
    let editors = state.editors.read().await;
    let editor = editors.get(&id).ok_or(AppError::EditorNotFound(id))?;
    let page = super::table_page(editor.rows(), query, state.config.page_size)?;
    Ok(Json(page))
}

pub async fn add_axis(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(form): AppJson<AxisForm>,
) -> AppResult<(StatusCode, Json<EditorResponse>)> {
    let mut editors = state.editors.write().await;
    let editor = editors.get_mut(&id).ok_or(AppError::EditorNotFound(id))?;

    let kind = required_type(form.kind.clone().unwrap_or_default())?;
    let axis_id = editor.add_axis(kind);
    apply_axis_form(editor, axis_id, AxisForm { kind: None, ..form })?;

    Ok((StatusCode::CREATED, Json(EditorResponse::new(id, editor))))
}

pub async fn update_axis(
    State(state): State<AppState>,
    AppPath((id, axis_id)): AppPath<(Uuid, u64)>,
    AppJson(form): AppJson<AxisForm>,
) -> AppResult<Json<EditorResponse>> {
    let mut editors = state.editors.write().await;
    let editor = editors.get_mut(&id).ok_or(AppError::EditorNotFound(id))?;
    apply_axis_form(editor, axis_id, form)?;
    Ok(Json(EditorResponse::new(id, editor)))
}

pub async fn delete_axis(
    State(state): State<AppState>,
    AppPath((id, axis_id)): AppPath<(Uuid, u64)>,
) -> AppResult<Json<EditorResponse>> {
    let mut editors = state.editors.write().await;
    let editor = editors.get_mut(&id).ok_or(AppError::EditorNotFound(id))?;
    editor.remove_axis(axis_id)?;
    Ok(Json(EditorResponse::new(id, editor)))
}

pub async fn update_row(
    State(state): State<AppState>,
    AppPath((id, row_id)): AppPath<(Uuid, u64)>,
    AppJson(patch): AppJson<RowPatch>,
) -> AppResult<Json<VariantRow>> {
    let mut editors = state.editors.write().await;
    let editor = editors.get_mut(&id).ok_or(AppError::EditorNotFound(id))?;
    let row = editor.update_row(row_id, patch)?;
    Ok(Json(row.clone()))
}
