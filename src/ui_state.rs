use serde::Serialize;

/// Dropdowns and flyouts of the dashboard chrome. At most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", content = "row", rename_all = "snake_case")]
pub enum Panel {
    Notifications,
    Profile,
    TableFilter,
    DateRange,
    RowActions(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "modal", rename_all = "snake_case")]
pub enum Modal {
    AddProduct,
    VariantEditor { product_sku: String },
    ConfirmDelete { row_id: u64 },
    PosCheckout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Chrome state owned by the dashboard shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    open_panel: Option<Panel>,
    modal: Option<Modal>,
    theme: Theme,
}

impl DashboardView {
    pub fn open_panel(&self) -> Option<Panel> {
        self.open_panel
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.open_panel == Some(panel)
    }

    /// Opening a panel replaces whichever one was open; clicking the open
    /// one again closes it.
    pub fn toggle_panel(&mut self, panel: Panel) {
        self.open_panel = if self.is_open(panel) { None } else { Some(panel) };
    }

    pub fn dismiss_panel(&mut self) {
        self.open_panel = None;
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.open_panel = None;
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_panel_is_open() {
        let mut view = DashboardView::default();
        view.toggle_panel(Panel::Notifications);
        view.toggle_panel(Panel::Profile);
        assert_eq!(view.open_panel(), Some(Panel::Profile));
        assert!(!view.is_open(Panel::Notifications));

        view.toggle_panel(Panel::Profile);
        assert_eq!(view.open_panel(), None);
    }

    #[test]
    fn row_menus_are_distinct_panels() {
        let mut view = DashboardView::default();
        view.toggle_panel(Panel::RowActions(1));
        view.toggle_panel(Panel::RowActions(2));
        assert!(view.is_open(Panel::RowActions(2)));
        view.dismiss_panel();
        assert_eq!(view.open_panel(), None);
    }

    #[test]
    fn modal_closes_open_panel() {
        let mut view = DashboardView::default();
        view.toggle_panel(Panel::TableFilter);
        view.open_modal(Modal::ConfirmDelete { row_id: 9 });
        assert_eq!(view.open_panel(), None);
        assert_eq!(view.modal(), Some(&Modal::ConfirmDelete { row_id: 9 }));
        view.close_modal();
        assert_eq!(view.modal(), None);
    }

    #[test]
    fn theme_toggles() {
        let mut view = DashboardView::default();
        assert_eq!(view.theme(), Theme::Light);
        view.toggle_theme();
        assert_eq!(view.theme(), Theme::Dark);
        view.toggle_theme();
        assert_eq!(view.theme(), Theme::Light);
    }
}
