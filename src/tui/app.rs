//! `ExplorerApp` - state of the tabbed dataset explorer.
//!
//! Every filter mutation goes through a `refresh` call that re-derives the
//! visible rows, so the tables never show stale results.

use crate::fetch::LoadedDataset;
use crate::filter::{CertificateFilter, ProductFilter, MEDIA_TYPES};
use crate::model::{Certificate, DatasetKind, Product};
use crate::tui::clipboard::copy_to_clipboard;
use crate::tui::constants::{DETAIL_PAGE_LINES, STATUS_MESSAGE_SECS};
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::viewmodel::{
    CycleFilter, OptionCycle, OverlayKind, OverlayState, PickerState, SearchInput, StatusMessage,
};
use std::sync::Arc;
use std::time::Duration;

/// Top-level tabs, one per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorerTab {
    #[default]
    Products,
    TrustList,
    TsaTrustList,
}

impl ExplorerTab {
    pub const ALL: [Self; 3] = [Self::Products, Self::TrustList, Self::TsaTrustList];

    #[must_use]
    pub const fn dataset(self) -> DatasetKind {
        match self {
            Self::Products => DatasetKind::Products,
            Self::TrustList => DatasetKind::TrustList,
            Self::TsaTrustList => DatasetKind::TsaTrustList,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Products => "Products",
            Self::TrustList => "C2PA Trust List",
            Self::TsaTrustList => "C2PA TSA Trust List",
        }
    }

    /// Number key that selects the tab.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Products => '1',
            Self::TrustList => '2',
            Self::TsaTrustList => '3',
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Products => 0,
            Self::TrustList => 1,
            Self::TsaTrustList => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Products => Self::TrustList,
            Self::TrustList => Self::TsaTrustList,
            Self::TsaTrustList => Self::Products,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Products => Self::TsaTrustList,
            Self::TrustList => Self::Products,
            Self::TsaTrustList => Self::TrustList,
        }
    }
}

/// Products tab: collection, filter state and derived rows.
#[derive(Debug, Default)]
pub struct ProductsTab {
    pub(crate) products: Arc<Vec<Product>>,
    pub(crate) filter: ProductFilter,
    pub(crate) vendors: Vec<String>,
    pub(crate) product_types: Vec<String>,
    pub(crate) assurance_levels: Vec<String>,
    /// Formats offered by the format picker for the current media selection
    pub(crate) formats: Vec<String>,
    /// Positions into `products`, in display order
    pub(crate) visible: Vec<usize>,
    pub(crate) list: ListState,
}

impl ProductsTab {
    pub fn set_products(&mut self, products: Arc<Vec<Product>>) {
        self.vendors = ProductFilter::vendors(&products);
        self.product_types = ProductFilter::product_types(&products);
        self.assurance_levels = ProductFilter::assurance_levels(&products);
        self.products = products;
        self.refresh();
    }

    /// Re-derive the visible rows and the format options.
    pub fn refresh(&mut self) {
        self.formats = self.filter.available_formats(&self.products);
        self.visible = self.filter.apply_indices(&self.products);
        self.list.reset_total(self.visible.len());
    }

    #[must_use]
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.visible.iter().filter_map(|&i| self.products.get(i))
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Product> {
        self.visible
            .get(self.list.selected)
            .and_then(|&i| self.products.get(i))
    }
}

/// One trust-list tab. Both certificate datasets share this state shape.
#[derive(Debug, Default)]
pub struct CertificateTab {
    pub(crate) certificates: Arc<Vec<Certificate>>,
    pub(crate) filter: CertificateFilter,
    pub(crate) organizations: Vec<String>,
    pub(crate) visible: Vec<usize>,
    pub(crate) list: ListState,
}

impl CertificateTab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_certificates(&mut self, certificates: Arc<Vec<Certificate>>) {
        self.organizations = CertificateFilter::organizations(&certificates);
        self.certificates = certificates;
        self.refresh();
    }

    pub fn refresh(&mut self) {
        self.visible = self.filter.apply_indices(&self.certificates);
        self.list.reset_total(self.visible.len());
    }

    #[must_use]
    pub fn visible_certificates(&self) -> impl Iterator<Item = &Certificate> {
        self.visible.iter().filter_map(|&i| self.certificates.get(i))
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Certificate> {
        self.visible
            .get(self.list.selected)
            .and_then(|&i| self.certificates.get(i))
    }
}

/// A row of a multi-select picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub key: String,
    pub label: String,
    pub checked: bool,
}

/// Main application state.
#[derive(Debug)]
pub struct ExplorerApp {
    pub(crate) active_tab: ExplorerTab,
    pub(crate) products: ProductsTab,
    pub(crate) trust_list: CertificateTab,
    pub(crate) tsa_trust_list: CertificateTab,
    /// `/` prompt, bound to the active tab's search field
    pub(crate) search: SearchInput,
    pub(crate) overlays: OverlayState,
    pub(crate) picker: PickerState,
    /// First visible line of the details modal
    pub(crate) detail_scroll: u16,
    pub(crate) status: StatusMessage,
    pub(crate) should_quit: bool,
}

impl Default for ExplorerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerApp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_tab: ExplorerTab::Products,
            products: ProductsTab::default(),
            trust_list: CertificateTab::new(),
            tsa_trust_list: CertificateTab::new(),
            search: SearchInput::new(),
            overlays: OverlayState::new(),
            picker: PickerState::default(),
            detail_scroll: 0,
            status: StatusMessage::with_auto_clear(Duration::from_secs(STATUS_MESSAGE_SECS)),
            should_quit: false,
        }
    }

    /// Install a dataset delivered by a loader thread.
    pub fn apply_loaded(&mut self, dataset: LoadedDataset) {
        match dataset {
            LoadedDataset::Products(products) => self.products.set_products(products),
            LoadedDataset::Certificates(kind, certificates) => {
                if let Some(tab) = self.certificate_tab_mut(kind) {
                    tab.set_certificates(certificates);
                }
            }
        }
    }

    #[must_use]
    pub const fn active_tab(&self) -> ExplorerTab {
        self.active_tab
    }

    /// Number of rows the tab currently shows.
    #[must_use]
    pub fn visible_count(&self, tab: ExplorerTab) -> usize {
        match tab {
            ExplorerTab::Products => self.products.visible.len(),
            ExplorerTab::TrustList => self.trust_list.visible.len(),
            ExplorerTab::TsaTrustList => self.tsa_trust_list.visible.len(),
        }
    }

    pub(crate) fn certificate_tab(&self, kind: DatasetKind) -> Option<&CertificateTab> {
        match kind {
            DatasetKind::TrustList => Some(&self.trust_list),
            DatasetKind::TsaTrustList => Some(&self.tsa_trust_list),
            DatasetKind::Products => None,
        }
    }

    fn certificate_tab_mut(&mut self, kind: DatasetKind) -> Option<&mut CertificateTab> {
        match kind {
            DatasetKind::TrustList => Some(&mut self.trust_list),
            DatasetKind::TsaTrustList => Some(&mut self.tsa_trust_list),
            DatasetKind::Products => None,
        }
    }

    fn active_list_mut(&mut self) -> &mut ListState {
        match self.active_tab {
            ExplorerTab::Products => &mut self.products.list,
            ExplorerTab::TrustList => &mut self.trust_list.list,
            ExplorerTab::TsaTrustList => &mut self.tsa_trust_list.list,
        }
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: ExplorerTab) {
        if self.active_tab != tab {
            self.search.stop();
            self.active_tab = tab;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    fn active_search_mut(&mut self) -> &mut String {
        match self.active_tab {
            ExplorerTab::Products => &mut self.products.filter.search,
            ExplorerTab::TrustList => &mut self.trust_list.filter.search,
            ExplorerTab::TsaTrustList => &mut self.tsa_trust_list.filter.search,
        }
    }

    fn refresh_active(&mut self) {
        match self.active_tab {
            ExplorerTab::Products => self.products.refresh(),
            ExplorerTab::TrustList => self.trust_list.refresh(),
            ExplorerTab::TsaTrustList => self.tsa_trust_list.refresh(),
        }
    }

    /// Open the search prompt seeded with the active tab's query.
    pub fn start_search(&mut self) {
        let existing = self.active_search_mut().clone();
        self.search.start(&existing);
    }

    fn sync_search(&mut self) {
        let query = self.search.query.clone();
        *self.active_search_mut() = query;
        self.refresh_active();
    }

    pub fn search_push_char(&mut self, c: char) {
        self.search.push_char(c);
        self.sync_search();
    }

    pub fn search_pop_char(&mut self) {
        self.search.pop_char();
        self.sync_search();
    }

    /// Close the prompt, keeping the query applied.
    pub fn confirm_search(&mut self) {
        self.search.stop();
    }

    /// Close the prompt and drop the query.
    pub fn cancel_search(&mut self) {
        self.search.cancel();
        self.sync_search();
    }

    // ------------------------------------------------------------------
    // Products filters
    // ------------------------------------------------------------------

    pub fn cycle_vendor(&mut self, forward: bool) {
        let tab = &mut self.products;
        tab.filter.vendor = if forward {
            OptionCycle::next(&tab.filter.vendor, &tab.vendors)
        } else {
            OptionCycle::prev(&tab.filter.vendor, &tab.vendors)
        };
        tab.refresh();
    }

    pub fn cycle_product_type(&mut self) {
        let tab = &mut self.products;
        tab.filter.product_type = OptionCycle::next(&tab.filter.product_type, &tab.product_types);
        tab.refresh();
    }

    pub fn cycle_assurance_level(&mut self) {
        let tab = &mut self.products;
        tab.filter.assurance_level =
            OptionCycle::next(&tab.filter.assurance_level, &tab.assurance_levels);
        tab.refresh();
    }

    pub fn cycle_sort(&mut self) {
        let tab = &mut self.products;
        tab.filter.sort = CycleFilter::next(&tab.filter.sort);
        tab.refresh();
        let label = tab.filter.sort.display_name().to_string();
        self.status.set(format!("Sort: {label}"));
    }

    // ------------------------------------------------------------------
    // Certificate filters
    // ------------------------------------------------------------------

    pub fn cycle_organization(&mut self, forward: bool) {
        let kind = self.active_tab.dataset();
        let Some(tab) = self.certificate_tab_mut(kind) else {
            return;
        };
        tab.filter.organization = if forward {
            OptionCycle::next(&tab.filter.organization, &tab.organizations)
        } else {
            OptionCycle::prev(&tab.filter.organization, &tab.organizations)
        };
        tab.refresh();
    }

    /// Restore the active tab's filters to their defaults, sort order included.
    pub fn reset_filters(&mut self) {
        match self.active_tab {
            ExplorerTab::Products => {
                self.products.filter.reset();
                self.products.refresh();
            }
            ExplorerTab::TrustList => {
                self.trust_list.filter.reset();
                self.trust_list.refresh();
            }
            ExplorerTab::TsaTrustList => {
                self.tsa_trust_list.filter.reset();
                self.tsa_trust_list.refresh();
            }
        }
        self.search.cancel();
        self.status.set("Filters reset");
    }

    // ------------------------------------------------------------------
    // Media-type and format pickers
    // ------------------------------------------------------------------

    pub fn open_media_picker(&mut self) {
        if self.active_tab != ExplorerTab::Products {
            return;
        }
        self.picker.reset();
        self.overlays.show(OverlayKind::MediaPicker);
    }

    /// The format picker only opens while at least one media type is selected.
    pub fn open_format_picker(&mut self) {
        if self.active_tab != ExplorerTab::Products {
            return;
        }
        if self.products.filter.media_types().is_empty() {
            self.status.set("Select a media type first [m]");
            return;
        }
        self.picker.reset();
        self.overlays.show(OverlayKind::FormatPicker);
    }

    /// Rows of the open picker.
    #[must_use]
    pub fn picker_options(&self) -> Vec<PickerOption> {
        let filter = &self.products.filter;
        match self.overlays.current() {
            Some(OverlayKind::MediaPicker) => MEDIA_TYPES
                .iter()
                .map(|(key, label)| PickerOption {
                    key: (*key).to_string(),
                    label: (*label).to_string(),
                    checked: filter.media_types().contains(*key),
                })
                .collect(),
            Some(OverlayKind::FormatPicker) => self
                .products
                .formats
                .iter()
                .map(|format| PickerOption {
                    key: format.clone(),
                    label: format.clone(),
                    checked: filter.formats().contains(format),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Toggle the option under the picker cursor.
    pub fn picker_toggle(&mut self) {
        let options = self.picker_options();
        let Some(option) = options.get(self.picker.cursor) else {
            return;
        };
        match self.overlays.current() {
            Some(OverlayKind::MediaPicker) => {
                self.products.filter.toggle_media_type(&option.key);
            }
            Some(OverlayKind::FormatPicker) => self.products.filter.toggle_format(&option.key),
            _ => return,
        }
        self.products.refresh();
        // The format list shrinks when the last media type goes away.
        if self.overlays.is_showing(OverlayKind::FormatPicker) && self.products.formats.is_empty()
        {
            self.overlays.close();
        }
        self.picker.clamp(self.picker_options().len());
    }

    /// Deselect everything in the open picker.
    pub fn picker_clear(&mut self) {
        match self.overlays.current() {
            Some(OverlayKind::MediaPicker) => self.products.filter.clear_media_types(),
            Some(OverlayKind::FormatPicker) => self.products.filter.set_formats(Vec::new()),
            _ => return,
        }
        self.products.refresh();
    }

    pub fn picker_down(&mut self) {
        let len = self.picker_options().len();
        self.picker.down(len);
    }

    pub fn picker_up(&mut self) {
        self.picker.up();
    }

    // ------------------------------------------------------------------
    // Details modal
    // ------------------------------------------------------------------

    /// Open the details modal for the selected row, if any.
    pub fn open_details(&mut self) {
        let has_selection = match self.active_tab {
            ExplorerTab::Products => self.products.selected().is_some(),
            ExplorerTab::TrustList => self.trust_list.selected().is_some(),
            ExplorerTab::TsaTrustList => self.tsa_trust_list.selected().is_some(),
        };
        if has_selection {
            self.detail_scroll = 0;
            self.overlays.show(OverlayKind::Details);
        }
    }

    #[must_use]
    pub fn selected_certificate(&self) -> Option<&Certificate> {
        self.certificate_tab(self.active_tab.dataset())
            .and_then(CertificateTab::selected)
    }

    /// Copy the selected certificate's PEM to the system clipboard.
    ///
    /// Fire and forget: a failure is logged and nothing else.
    pub fn copy_selected_pem(&mut self) {
        let Some(pem) = self.selected_certificate().map(|c| c.pem.clone()) else {
            return;
        };
        let result = copy_to_clipboard(&pem);
        self.record_copy_result(result);
    }

    fn record_copy_result(&mut self, result: std::io::Result<()>) {
        match result {
            Ok(()) => self.status.set("PEM copied to clipboard"),
            Err(e) => tracing::warn!(error = %e, "clipboard copy failed"),
        }
    }

    pub fn scroll_details_down(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(lines);
    }

    pub fn scroll_details_up(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    pub fn page_details_down(&mut self) {
        self.scroll_details_down(DETAIL_PAGE_LINES);
    }

    pub fn page_details_up(&mut self) {
        self.scroll_details_up(DETAIL_PAGE_LINES);
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn select_next(&mut self) {
        self.active_list_mut().select_next();
    }

    pub fn select_prev(&mut self) {
        self.active_list_mut().select_prev();
    }

    pub fn page_down(&mut self) {
        self.active_list_mut().page_down();
    }

    pub fn page_up(&mut self) {
        self.active_list_mut().page_up();
    }

    pub fn go_first(&mut self) {
        self.active_list_mut().go_first();
    }

    pub fn go_last(&mut self) {
        self.active_list_mut().go_last();
    }

    // ------------------------------------------------------------------
    // Misc
    // ------------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        let name = crate::tui::theme::toggle_theme();
        self.status.set(format!("Theme: {name}"));
    }

    pub fn on_tick(&mut self) {
        self.status.expire();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
