use std::cell::RefCell;
use std::rc::Rc;
use std::rc::Weak;

use super::actions::AppAction;
use super::document::RootDocument;
use super::persistence::ProfileStore;
use super::reducer::reduce;
use super::reducer::AppEffect;
use super::state::AppState;
use super::state::User;

const OUTSIDE_PROVIDER: &str = "app store accessed outside its provider scope";

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Owns the single state instance and its collaborators. Every mutation
/// flows through [`AppStore::dispatch`]: reduce, notify subscribers, then
/// apply the effects the reducer described. Persistence is best-effort:
/// a failed write is logged and swallowed, never surfaced into state.
pub struct AppStore {
    state: AppState,
    profile: ProfileStore,
    document: RootDocument,
    subscribers: Vec<Subscriber>,
    bootstrapped: bool,
}

impl AppStore {
    pub fn new(profile: ProfileStore) -> Self {
        Self {
            state: AppState::default(),
            profile,
            document: RootDocument::new(),
            subscribers: Vec::new(),
            bootstrapped: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn document(&self) -> &RootDocument {
        &self.document
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    /// Register a callback invoked after every committed transition.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn dispatch(&mut self, action: AppAction) {
        let effects = reduce(&mut self.state, action);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: AppEffect) {
        match effect {
            AppEffect::PersistSettings(settings) => {
                if let Err(err) = self.profile.save_settings(&settings) {
                    log::warn!("failed to persist settings: {err}");
                }
            }
            AppEffect::PersistUser(user) => {
                if let Err(err) = self.profile.save_user(&user) {
                    log::warn!("failed to persist user: {err}");
                }
            }
            AppEffect::ApplyTheme(theme) => {
                self.document.apply_theme(&theme);
            }
        }
    }

    /// One-time startup restore. Persisted settings merge onto the
    /// defaults; a missing or malformed user seeds the demo account and
    /// writes it back. Parse failures are logged by the profile store and
    /// otherwise ignored.
    pub fn bootstrap(&mut self) {
        if self.bootstrapped {
            return;
        }
        self.bootstrapped = true;

        if let Some(patch) = self.profile.load_settings() {
            self.dispatch(AppAction::MergeSettings(patch));
        }

        match self.profile.load_user() {
            Some(user) => self.dispatch(AppAction::SetUser(Some(user))),
            None => self.dispatch(AppAction::SetUser(Some(User::demo()))),
        }

        // The document starts unstyled; restoring settings without a theme
        // key (or nothing at all) must still style it with the effective
        // theme.
        let theme = self.state.settings.theme.clone();
        self.document.apply_theme(&theme);
    }

    pub fn into_shared(self) -> SharedStore {
        SharedStore {
            inner: Rc::new(RefCell::new(self)),
        }
    }
}

/// The process-wide shared container. The model is single-threaded and
/// event-driven, so shared ownership is `Rc<RefCell<_>>`; dispatches are
/// applied one at a time, never interleaved.
#[derive(Clone)]
pub struct SharedStore {
    inner: Rc<RefCell<AppStore>>,
}

impl SharedStore {
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    pub fn dispatch(&self, action: AppAction) {
        self.inner.borrow_mut().dispatch(action);
    }

    pub fn state(&self) -> AppState {
        self.inner.borrow().state().clone()
    }
}

/// Weak accessor handed to consumers. Using a handle once the store is
/// gone is an initialization-order bug, and it fails loudly rather than
/// let a default value masquerade as real state.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Weak<RefCell<AppStore>>,
}

impl StoreHandle {
    fn upgrade(&self) -> Rc<RefCell<AppStore>> {
        self.inner.upgrade().expect(OUTSIDE_PROVIDER)
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        let store = self.upgrade();
        let mut store = store.borrow_mut();
        f(&mut store)
    }

    pub fn dispatch(&self, action: AppAction) {
        self.upgrade().borrow_mut().dispatch(action);
    }

    pub fn state(&self) -> AppState {
        self.upgrade().borrow().state().clone()
    }
}
