//! The local state store: current user, onboarding flag, whiteboard list.
//!
//! DESIGN
//! ======
//! `LocalStore` is the single owner of session state. The UI reads through
//! the accessors and mutates through the operations below; every mutator
//! writes through to storage immediately, so there is no separate flush
//! step. Board ordering is meaningful: the most recently updated board is
//! kept at index 0, and the widget surface renders that one as featured.
//!
//! ERROR HANDLING
//! ==============
//! Loads fall back to the previous in-memory value when a stored record is
//! absent or undecodable; corruption is logged, never surfaced. Writes to
//! storage are best-effort: a failed write is logged at `error` and the
//! in-memory state stands; callers never see a write error. The one hard
//! error is creating a whiteboard with nobody signed in.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tracing::{debug, error, info, warn};

use crate::consts::{
    ONBOARDING_KEY, SAMPLE_AUTHOR, SAMPLE_BOARD_NAME, SAMPLE_ITEM_CONTENT, SAMPLE_ITEM_X,
    SAMPLE_ITEM_Y, USER_KEY,
};
use crate::refresh::WidgetRefresher;
use crate::storage::{BoardListStore, KeyValueStore};
use crate::types::{ItemKind, Point, User, Whiteboard, WhiteboardItem};

/// Error raised by store operations with preconditions.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A whiteboard operation ran with nobody signed in.
    #[error("no current user; sign in before creating a whiteboard")]
    NoCurrentUser,
}

/// Owner of all on-device session state.
pub struct LocalStore {
    kv: Box<dyn KeyValueStore>,
    board_store: Box<dyn BoardListStore>,
    refresher: Box<dyn WidgetRefresher>,
    current_user: Option<User>,
    whiteboards: Vec<Whiteboard>,
    onboarding_complete: bool,
}

impl LocalStore {
    /// Create a store over the given collaborators. Nothing is loaded yet;
    /// callers invoke the `load_*` operations at startup.
    #[must_use]
    pub fn new(
        kv: Box<dyn KeyValueStore>,
        board_store: Box<dyn BoardListStore>,
        refresher: Box<dyn WidgetRefresher>,
    ) -> Self {
        Self {
            kv,
            board_store,
            refresher,
            current_user: None,
            whiteboards: Vec::new(),
            onboarding_complete: false,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// All boards, most recently updated first.
    #[must_use]
    pub fn whiteboards(&self) -> &[Whiteboard] {
        &self.whiteboards
    }

    /// Whether onboarding has been completed this session.
    #[must_use]
    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    /// The board the widget surface should feature: index 0, if any.
    #[must_use]
    pub fn featured_whiteboard(&self) -> Option<&Whiteboard> {
        self.whiteboards.first()
    }

    // =========================================================================
    // ONBOARDING + USER
    // =========================================================================

    /// Read the onboarding flag from storage. Absent or undecodable reads
    /// default to `false`.
    pub fn load_onboarding_status(&mut self) {
        self.onboarding_complete = match self.kv.get(ONBOARDING_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or(false),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "failed to read onboarding flag; assuming incomplete");
                false
            }
        };
    }

    /// Mark onboarding complete and persist the flag. Idempotent.
    pub fn complete_onboarding(&mut self) {
        self.onboarding_complete = true;
        if let Err(e) = self.kv.set(ONBOARDING_KEY, "true") {
            error!(error = %e, "failed to persist onboarding flag");
        }
    }

    /// Read the stored user record. On absence or decode failure the
    /// in-memory user is left unchanged; corruption is only logged, so a
    /// damaged record degrades to whatever the session already had.
    pub fn load_user(&mut self) {
        match self.kv.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    debug!(user_id = %user.id, "loaded stored user");
                    self.current_user = Some(user);
                }
                Err(e) => {
                    warn!(error = %e, "stored user record is malformed; keeping in-memory user");
                }
            },
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "failed to read stored user; keeping in-memory user");
            }
        }
    }

    /// Replace the in-memory user, and persist it when setup is complete.
    ///
    /// Partial-setup saves (`complete_setup == false`) are only persisted if
    /// a record already exists on disk; a half-finished onboarding flow never
    /// writes a first record. When `complete_setup` is true this also marks
    /// onboarding complete.
    pub fn save_user(&mut self, user: User, complete_setup: bool) {
        self.current_user = Some(user);

        let previously_saved = match self.kv.contains(USER_KEY) {
            Ok(present) => present,
            Err(e) => {
                warn!(error = %e, "failed to probe stored user; treating as unsaved");
                false
            }
        };
        if complete_setup || previously_saved {
            self.persist_user();
        }
        if complete_setup {
            self.complete_onboarding();
        }
    }

    /// Clear the session: no user, onboarding reset, both keys deleted.
    /// No confirmation, no undo.
    pub fn sign_out(&mut self) {
        self.current_user = None;
        self.onboarding_complete = false;
        if let Err(e) = self.kv.remove(USER_KEY) {
            error!(error = %e, "failed to delete stored user");
        }
        if let Err(e) = self.kv.remove(ONBOARDING_KEY) {
            error!(error = %e, "failed to delete onboarding flag");
        }
        info!("signed out; local session cleared");
    }

    fn persist_user(&mut self) {
        let Some(user) = &self.current_user else {
            return;
        };
        match serde_json::to_string(user) {
            Ok(raw) => {
                if let Err(e) = self.kv.set(USER_KEY, &raw) {
                    error!(error = %e, "failed to persist user record");
                }
            }
            Err(e) => error!(error = %e, "failed to serialize user record"),
        }
    }

    // =========================================================================
    // WHITEBOARDS
    // =========================================================================

    /// Load the board list from storage. An empty (or unreadable) list is
    /// seeded with one sample board so a fresh install has something to show,
    /// and the seed is persisted immediately.
    pub fn load_whiteboards(&mut self) {
        self.whiteboards = match self.board_store.load() {
            Ok(boards) => boards,
            Err(e) => {
                warn!(error = %e, "failed to load whiteboard list; starting empty");
                Vec::new()
            }
        };
        if self.whiteboards.is_empty() {
            info!("no stored whiteboards; seeding sample board");
            self.whiteboards.push(sample_whiteboard());
            self.save_whiteboards();
        }
    }

    /// Write the full board list to storage, then ping the widget surface.
    /// The refresh is fire-and-forget and only follows a successful write.
    pub fn save_whiteboards(&mut self) {
        match self.board_store.save(&self.whiteboards) {
            Ok(()) => {
                debug!(count = self.whiteboards.len(), "whiteboard list persisted");
                self.refresher.notify_changed();
            }
            Err(e) => error!(error = %e, "failed to persist whiteboard list"),
        }
    }

    /// Create a board owned by the current user and append it to the end of
    /// the list. Returns the created board.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoCurrentUser`] when nobody is signed in;
    /// callers route that to the sign-in flow.
    pub fn create_whiteboard(&mut self, name: &str) -> Result<Whiteboard, StoreError> {
        let Some(user) = &self.current_user else {
            return Err(StoreError::NoCurrentUser);
        };
        let board = Whiteboard::new(name, &user.id);
        info!(board_id = %board.id, name, "whiteboard created");
        self.whiteboards.push(board.clone());
        self.save_whiteboards();
        Ok(board)
    }

    /// Replace the board with the same id and move it to index 0; unknown
    /// ids are inserted at index 0. Always persists.
    pub fn update_whiteboard(&mut self, board: Whiteboard) {
        match self.whiteboards.iter().position(|b| b.id == board.id) {
            Some(0) => self.whiteboards[0] = board,
            Some(index) => {
                self.whiteboards.remove(index);
                self.whiteboards.insert(0, board);
            }
            None => self.whiteboards.insert(0, board),
        }
        self.save_whiteboards();
    }

    /// Append `item` to the board with id `board_id`. Returns `false` (and
    /// writes nothing) when no such board exists.
    pub fn add_item_to_whiteboard(&mut self, board_id: &str, item: WhiteboardItem) -> bool {
        let Some(board) = self.whiteboards.iter_mut().find(|b| b.id == board_id) else {
            debug!(board_id, "add item ignored; board not found");
            return false;
        };
        board.items.push(item);
        self.save_whiteboards();
        true
    }

    /// The board whose id equals `group_id`, if any.
    // TODO: group ids that stop matching a board id (e.g. after a future
    // board re-key) need a secondary lookup table.
    #[must_use]
    pub fn whiteboard_for_group(&self, group_id: &str) -> Option<&Whiteboard> {
        self.whiteboards.iter().find(|b| b.id == group_id)
    }

    // =========================================================================
    // BACKEND SYNC (stubs)
    // =========================================================================

    /// Placeholder for future server sync. Currently a no-op.
    pub fn sync_with_backend(&mut self) {
        debug!("backend sync requested; running local-only");
    }

    /// Fetch boards "from the backend". Until a backend exists this returns
    /// the local list and always succeeds.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` is the contract remote fetch will
    /// inhabit.
    pub fn fetch_whiteboards_from_backend(&mut self) -> Result<Vec<Whiteboard>, StoreError> {
        Ok(self.whiteboards.clone())
    }

    /// Upload a board "to the backend". Until a backend exists this applies
    /// the board locally via [`Self::update_whiteboard`] and always succeeds.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` is the contract remote upload will
    /// inhabit.
    pub fn upload_whiteboard_to_backend(&mut self, board: Whiteboard) -> Result<(), StoreError> {
        self.update_whiteboard(board);
        Ok(())
    }
}

/// The board seeded on first run: one text item at a fixed position.
fn sample_whiteboard() -> Whiteboard {
    let mut board = Whiteboard::new(SAMPLE_BOARD_NAME, SAMPLE_AUTHOR);
    board.items.push(WhiteboardItem {
        kind: ItemKind::Text,
        content: SAMPLE_ITEM_CONTENT.to_owned(),
        created_by: SAMPLE_AUTHOR.to_owned(),
        position: Point { x: SAMPLE_ITEM_X, y: SAMPLE_ITEM_Y },
    });
    board
}
