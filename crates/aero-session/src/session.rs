//! Session state and its synchronous transitions.

use aero_core::{
    capabilities, export_csv, Account, AnalysisTarget, BatchResultRow, Capabilities, Coord, Owner,
    Surface, SurfaceStore, Tier,
};
use aero_sdk::AeroClient;
use aero_viewer::{
    draw_surfaces, DisplayMode, ObstaclePicker, PickEvent, RenderSink,
};

use crate::error::SessionError;

/// Which view the operator is in. The map-pick listener is live only in
/// the analyze view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Define,
    Analyze,
    Dashboard,
}

/// All mutable state for one operator session.
pub struct Session {
    account: Option<Account>,
    capabilities: Capabilities,
    pub(crate) store: SurfaceStore,
    view: ActiveView,
    pub(crate) display_mode: DisplayMode,
    picker: ObstaclePicker,
    pub(crate) obstacle: Coord,
    pub(crate) target: Option<AnalysisTarget>,
    pub(crate) last_batch: Vec<BatchResultRow>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            account: None,
            capabilities: capabilities(Tier::Guest),
            store: SurfaceStore::new(),
            view: ActiveView::Define,
            display_mode: DisplayMode::Natural,
            picker: ObstaclePicker::new(),
            obstacle: Coord {
                lat: 51.475,
                lon: -0.44,
                alt: 50.0,
            },
            target: None,
            last_batch: Vec::new(),
        }
    }
}

impl Session {
    /// Start a guest session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn tier(&self) -> Tier {
        self.account.as_ref().map_or(Tier::Guest, Account::tier)
    }

    pub fn owner(&self) -> Owner {
        Owner::from_account(self.account.as_ref())
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn store(&self) -> &SurfaceStore {
        &self.store
    }

    pub fn view(&self) -> ActiveView {
        self.view
    }

    pub fn obstacle(&self) -> Coord {
        self.obstacle
    }

    pub fn target(&self) -> Option<&AnalysisTarget> {
        self.target.as_ref()
    }

    pub fn last_batch(&self) -> &[BatchResultRow] {
        &self.last_batch
    }

    /// Adopt a fetched account profile, recomputing the capability set.
    pub fn adopt_account(&mut self, account: Account) {
        self.capabilities = capabilities(account.tier());
        self.account = Some(account);
    }

    /// Record a surface the service just created: tier-aware store update,
    /// and guests get the new surface auto-selected as the analysis target.
    pub fn record_surface(&mut self, surface: Surface) {
        let id = surface.id.clone();
        self.store.add(surface, self.tier());
        if self.tier() == Tier::Guest {
            self.target = Some(AnalysisTarget::Surface { surface_id: id });
        }
    }

    pub fn select_target(&mut self, target: AnalysisTarget) {
        self.target = Some(target);
    }

    pub fn set_obstacle(&mut self, obstacle: Coord) {
        self.obstacle = obstacle;
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// Switch views, attaching the pick listener only for the analyze view
    /// and detaching it the instant any other view takes over.
    pub fn set_view(&mut self, view: ActiveView) {
        self.view = view;
        match view {
            ActiveView::Analyze => self.picker.attach(),
            _ => self.picker.detach(),
        }
    }

    /// Deliver a map click. Updates the obstacle position (altitude kept)
    /// only while the analyze view's listener is attached.
    pub fn handle_map_click(&mut self, sink: &dyn RenderSink, event: PickEvent) -> bool {
        match self.picker.handle_click(event, sink) {
            Some((lat, lon)) => {
                self.obstacle.lat = lat;
                self.obstacle.lon = lon;
                true
            }
            None => false,
        }
    }

    /// Draw one stored surface, replacing the current polygon set.
    pub fn draw_surface(&self, sink: &dyn RenderSink, id: &str) -> Result<(), SessionError> {
        let surface = self
            .store
            .get(id)
            .ok_or_else(|| SessionError::UnknownSurface(id.to_string()))?;
        draw_surfaces(sink, &[surface], self.display_mode);
        Ok(())
    }

    /// Draw every surface sharing an airport grouping.
    pub fn draw_airport(&self, sink: &dyn RenderSink, airport: &str) -> Result<(), SessionError> {
        let groups = self.store.group_by_airport();
        let surfaces = groups
            .get(airport)
            .ok_or_else(|| SessionError::UnknownAirport(airport.to_string()))?;
        draw_surfaces(sink, surfaces, self.display_mode);
        Ok(())
    }

    /// Export the last batch result set; None until a batch has run.
    pub fn export_batch_csv(&self) -> Option<String> {
        if self.last_batch.is_empty() {
            None
        } else {
            Some(export_csv(&self.last_batch))
        }
    }

    /// Total synchronous teardown on logout or account switch: credential
    /// dropped, store and primitives cleared, listener detached. There is
    /// no partial-teardown state.
    pub fn reset(&mut self, client: &mut AeroClient, sink: &dyn RenderSink) {
        client.clear_token();
        self.account = None;
        self.capabilities = capabilities(Tier::Guest);
        self.store.clear();
        self.target = None;
        self.last_batch.clear();
        self.picker.detach();
        self.view = ActiveView::Define;
        sink.clear_all();
        tracing::info!("session reset to guest state");
    }
}
