//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use chrono::{DateTime, Local, Timelike};

use crate::config::Settings;
use hearth_core::{clamp, Catalog};

/// Number of digits in a complete PIN entry.
pub const PIN_LENGTH: usize = 4;

/// How long an entered digit stays readable before it is masked.
pub const DIGIT_REVEAL: Duration = Duration::from_millis(500);

/// Phase of the login lifecycle.
///
/// Exactly one value is active at a time; it is owned by [`AppState`] and
/// mutated only through the update function, which keeps the transition
/// table in one place and exhaustively checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Lock screen, nothing entered yet
    #[default]
    LoggedOut,

    /// PIN entry in progress
    LoggingIn,

    /// A completed entry is being checked by the verifier
    VerifyingLogIn,

    /// Unlocked, menu visible
    LoggedIn,

    /// The last entry was rejected; re-armed to `LoggingIn` immediately
    LogInError,
}

impl SessionStatus {
    /// Human-readable label, e.g. for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::LoggedOut => "Logged Out",
            SessionStatus::LoggingIn => "Logging In",
            SessionStatus::VerifyingLogIn => "Verifying Log In",
            SessionStatus::LoggedIn => "Logged In",
            SessionStatus::LogInError => "Log In Error",
        }
    }

    /// Whether the PIN buffer is editable in this status.
    pub fn accepts_pin_input(&self) -> bool {
        matches!(self, SessionStatus::LoggingIn | SessionStatus::LogInError)
    }

    /// Whether the PIN screen (pad + hint) is shown for this status.
    pub fn shows_pin_screen(&self) -> bool {
        matches!(
            self,
            SessionStatus::LoggingIn | SessionStatus::LogInError | SessionStatus::VerifyingLogIn
        )
    }
}

/// A single entered PIN digit with its entry time (for reveal-then-mask).
#[derive(Debug, Clone, Copy)]
pub struct PinDigit {
    pub value: char,
    pub entered_at: Instant,
}

/// The in-progress digit sequence being entered by the user.
///
/// Holds at most [`PIN_LENGTH`] ASCII digits. Owned by [`AppState`]; cleared
/// whenever the session status leaves the entering states.
#[derive(Debug, Clone, Default)]
pub struct PinEntry {
    digits: Vec<PinDigit>,
}

impl PinEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit. Returns `false` when the character is not an ASCII
    /// digit or the buffer is already complete.
    pub fn push(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.digits.len() >= PIN_LENGTH {
            return false;
        }
        self.digits.push(PinDigit {
            value: digit,
            entered_at: Instant::now(),
        });
        true
    }

    /// Remove the most recent digit, if any.
    pub fn pop(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.digits.len() == PIN_LENGTH
    }

    pub fn digits(&self) -> &[PinDigit] {
        &self.digits
    }

    /// The buffer as a string, for handing to the verifier.
    pub fn as_string(&self) -> String {
        self.digits.iter().map(|d| d.value).collect()
    }

    /// Whether the digit at `index` is still within its reveal window at
    /// `now`. Digits older than [`DIGIT_REVEAL`] render masked.
    pub fn is_revealed(&self, index: usize, now: Instant) -> bool {
        self.digits
            .get(index)
            .map(|d| now.duration_since(d.entered_at) < DIGIT_REVEAL)
            .unwrap_or(false)
    }
}

/// Sections of the unlocked menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuSection {
    #[default]
    Forecast,
    Restaurants,
    Tools,
    Movies,
}

impl MenuSection {
    pub const ALL: [MenuSection; 4] = [
        MenuSection::Forecast,
        MenuSection::Restaurants,
        MenuSection::Tools,
        MenuSection::Movies,
    ];

    /// Section heading shown in the menu.
    pub fn title(&self) -> &'static str {
        match self {
            MenuSection::Forecast => "How's it look out there?",
            MenuSection::Restaurants => "Get it delivered!",
            MenuSection::Tools => "What's Appening?",
            MenuSection::Movies => "Popcorn time!",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Navigation state for the unlocked menu: which section has focus and how
/// far each card row is scrolled.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub section: MenuSection,
    offsets: [usize; MenuSection::ALL.len()],
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal card offset for a section.
    pub fn offset(&self, section: MenuSection) -> usize {
        self.offsets[section.index()]
    }

    /// Scroll the focused section one card left.
    pub fn scroll_left(&mut self) {
        let idx = self.section.index();
        self.offsets[idx] = self.offsets[idx].saturating_sub(1);
    }

    /// Scroll the focused section one card right, bounded by the item count.
    pub fn scroll_right(&mut self, item_count: usize) {
        let idx = self.section.index();
        let max = item_count.saturating_sub(1);
        self.offsets[idx] = clamp(0, self.offsets[idx] + 1, max);
    }

    pub fn select(&mut self, section: MenuSection) {
        self.section = section;
    }

    pub fn next_section(&mut self) {
        self.section = self.section.next();
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
    }
}

/// Wall-clock readout, refreshed by ticks.
#[derive(Debug, Clone)]
pub struct ClockState {
    now: DateTime<Local>,
}

impl ClockState {
    pub fn new() -> Self {
        Self { now: Local::now() }
    }

    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    /// Re-read the wall clock. The stored value only changes when the
    /// displayed second changed, so redraw-triggering state churn is bounded
    /// to once a second even at a 100 ms tick rate.
    pub fn refresh(&mut self) -> bool {
        let update = Local::now();
        if update.second() != self.now.second() {
            self.now = update;
            true
        } else {
            false
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current phase of the login lifecycle
    pub status: SessionStatus,

    /// In-progress PIN digits
    pub pin: PinEntry,

    /// The PIN rejected by the last failed verification, retained so the
    /// invalid indicator survives the automatic re-arm to `LoggingIn`.
    pub last_rejected: Option<String>,

    /// Wall-clock readout
    pub clock: ClockState,

    /// Hard-coded widget content
    pub catalog: Catalog,

    /// Unlocked-menu navigation state
    pub menu: MenuState,

    /// Animation frame counter for the verifying spinner
    pub spinner_frame: u64,

    /// Application settings from config file
    pub settings: Settings,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            status: SessionStatus::LoggedOut,
            pin: PinEntry::new(),
            last_rejected: None,
            clock: ClockState::new(),
            catalog: Catalog::generate(),
            menu: MenuState::new(),
            spinner_frame: 0,
            settings,
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Session Transitions
    // ─────────────────────────────────────────────────────────

    /// `LoggedOut -> LoggingIn`; no-op in any other status.
    pub fn begin_login(&mut self) {
        if self.status == SessionStatus::LoggedOut {
            self.status = SessionStatus::LoggingIn;
            self.pin.clear();
            self.last_rejected = None;
        }
    }

    /// Abandon the entry/verification flow and return to the lock screen.
    pub fn cancel_login(&mut self) {
        if self.status.shows_pin_screen() {
            self.status = SessionStatus::LoggedOut;
            self.pin.clear();
            self.last_rejected = None;
        }
    }

    /// `LoggedIn -> LoggedOut`.
    pub fn sign_out(&mut self) {
        if self.status == SessionStatus::LoggedIn {
            self.status = SessionStatus::LoggedOut;
            self.menu = MenuState::new();
        }
    }

    /// Whether the invalid-PIN indicator should be shown.
    pub fn has_login_error(&self) -> bool {
        self.last_rejected.is_some() && self.status.accepts_pin_input()
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Advance the verifying spinner one frame.
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────
    // PinEntry
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_pin_entry_push_digits() {
        let mut pin = PinEntry::new();
        assert!(pin.push('1'));
        assert!(pin.push('2'));
        assert_eq!(pin.len(), 2);
        assert_eq!(pin.as_string(), "12");
    }

    #[test]
    fn test_pin_entry_rejects_non_digits() {
        let mut pin = PinEntry::new();
        assert!(!pin.push('a'));
        assert!(!pin.push(' '));
        assert!(pin.is_empty());
    }

    #[test]
    fn test_pin_entry_caps_at_four() {
        let mut pin = PinEntry::new();
        for d in ['1', '2', '3', '4'] {
            assert!(pin.push(d));
        }
        assert!(!pin.push('5'));
        assert!(pin.is_complete());
        assert_eq!(pin.as_string(), "1234");
    }

    #[test]
    fn test_pin_entry_pop_and_clear() {
        let mut pin = PinEntry::new();
        pin.push('9');
        pin.push('9');
        pin.pop();
        assert_eq!(pin.len(), 1);
        pin.clear();
        assert!(pin.is_empty());
        // Pop on empty is a no-op
        pin.pop();
        assert!(pin.is_empty());
    }

    #[test]
    fn test_pin_digit_reveal_window() {
        let mut pin = PinEntry::new();
        pin.push('7');
        let now = Instant::now();
        assert!(pin.is_revealed(0, now));
        assert!(!pin.is_revealed(0, now + DIGIT_REVEAL));
        // Out-of-range index is never revealed
        assert!(!pin.is_revealed(3, now));
    }

    // ─────────────────────────────────────────────────────────
    // SessionStatus
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_status_labels() {
        assert_eq!(SessionStatus::LoggedOut.label(), "Logged Out");
        assert_eq!(SessionStatus::VerifyingLogIn.label(), "Verifying Log In");
        assert_eq!(SessionStatus::LogInError.label(), "Log In Error");
    }

    #[test]
    fn test_status_pin_input_gating() {
        assert!(SessionStatus::LoggingIn.accepts_pin_input());
        assert!(SessionStatus::LogInError.accepts_pin_input());
        assert!(!SessionStatus::LoggedOut.accepts_pin_input());
        assert!(!SessionStatus::VerifyingLogIn.accepts_pin_input());
        assert!(!SessionStatus::LoggedIn.accepts_pin_input());
    }

    // ─────────────────────────────────────────────────────────
    // AppState transitions
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_begin_login_from_locked() {
        let mut state = AppState::default();
        state.begin_login();
        assert_eq!(state.status, SessionStatus::LoggingIn);
    }

    #[test]
    fn test_begin_login_noop_when_unlocked() {
        let mut state = AppState::default();
        state.status = SessionStatus::LoggedIn;
        state.begin_login();
        assert_eq!(state.status, SessionStatus::LoggedIn);
    }

    #[test]
    fn test_cancel_login_clears_entry() {
        let mut state = AppState::default();
        state.begin_login();
        state.pin.push('1');
        state.last_rejected = Some("9999".to_string());
        state.cancel_login();
        assert_eq!(state.status, SessionStatus::LoggedOut);
        assert!(state.pin.is_empty());
        assert!(state.last_rejected.is_none());
    }

    #[test]
    fn test_cancel_login_from_verifying() {
        let mut state = AppState::default();
        state.status = SessionStatus::VerifyingLogIn;
        state.cancel_login();
        assert_eq!(state.status, SessionStatus::LoggedOut);
    }

    #[test]
    fn test_sign_out_resets_menu() {
        let mut state = AppState::default();
        state.status = SessionStatus::LoggedIn;
        state.menu.select(MenuSection::Movies);
        state.sign_out();
        assert_eq!(state.status, SessionStatus::LoggedOut);
        assert_eq!(state.menu.section, MenuSection::Forecast);
    }

    #[test]
    fn test_quit_flag() {
        let mut state = AppState::default();
        assert!(!state.should_quit());
        state.request_quit();
        assert!(state.should_quit());
    }

    // ─────────────────────────────────────────────────────────
    // MenuState
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_menu_section_cycle() {
        let mut menu = MenuState::new();
        assert_eq!(menu.section, MenuSection::Forecast);
        menu.next_section();
        assert_eq!(menu.section, MenuSection::Restaurants);
        menu.prev_section();
        menu.prev_section();
        assert_eq!(menu.section, MenuSection::Movies);
    }

    #[test]
    fn test_menu_scroll_bounds() {
        let mut menu = MenuState::new();
        // Left at origin stays put
        menu.scroll_left();
        assert_eq!(menu.offset(MenuSection::Forecast), 0);

        for _ in 0..10 {
            menu.scroll_right(7);
        }
        assert_eq!(menu.offset(MenuSection::Forecast), 6);

        menu.scroll_left();
        assert_eq!(menu.offset(MenuSection::Forecast), 5);
    }

    #[test]
    fn test_menu_offsets_independent_per_section() {
        let mut menu = MenuState::new();
        menu.scroll_right(7);
        menu.select(MenuSection::Movies);
        assert_eq!(menu.offset(MenuSection::Movies), 0);
        assert_eq!(menu.offset(MenuSection::Forecast), 1);
    }

    #[test]
    fn test_menu_scroll_right_empty_row() {
        let mut menu = MenuState::new();
        menu.scroll_right(0);
        assert_eq!(menu.offset(MenuSection::Forecast), 0);
    }
}
