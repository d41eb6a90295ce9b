// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;

use crate::items::{AlarmTitleItem, ItemProvider, RepeatItem};
use crate::{Alarm, AlarmTitleType, Error, IconRes, Repeat, RepeatEntry};

/// Persistence used by the editor to save alarms.
#[async_trait]
pub trait AlarmStore: Send + Sync {
    /// Stores a new alarm, returning whether it was written.
    async fn insert_alarm(&self, alarm: Alarm) -> Result<bool, Error>;

    /// Overwrites an existing alarm, returning whether it was written.
    async fn update_alarm(&self, alarm: Alarm) -> Result<bool, Error>;
}

/// Discrete events for the view observing an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The repeat counter dropped to zero.
    ClearIcon,

    /// The first repeat was added.
    CreateIconWithEmphasis,

    /// The repeat counter grew.
    EmphasizeIcon,

    /// The alarm has been stored.
    Saved,

    GoBack,

    CloseExpansions,

    ShowRepeatManager,

    /// The user has to confirm the repeat being configured before saving.
    PromptLastRepeat(Repeat),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Saving,
    Saved,
}

/// Everything a view renders for an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorUiState {
    pub title: String,
    pub title_icon: Option<IconRes>,
    pub ringtone: String,

    /// Number of repeat entries, as shown on the counter badge.
    pub repeat_counter: String,

    /// Index of the open repeat page.
    pub current_tab: Option<usize>,

    /// Number of repeat pages.
    pub page_limit: usize,

    pub loading: bool,
    pub repeat_items: Vec<RepeatItem>,
    pub title_items: Vec<AlarmTitleItem>,
}

impl Default for EditorUiState {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_icon: None,
            ringtone: String::new(),
            repeat_counter: "0".to_string(),
            current_tab: None,
            page_limit: Repeat::count(),
            loading: false,
            repeat_items: Vec::new(),
            title_items: Vec::new(),
        }
    }
}

/// Result of a background operation, applied on the editor's own task.
#[derive(Debug)]
enum Completion {
    RepeatItems(Result<Vec<RepeatItem>, Error>),
    TitleItems(Result<Vec<AlarmTitleItem>, Error>),
    Saved(Result<bool, Error>),
}

/// State of one alarm editing session.
///
/// Data access runs on spawned tasks owned by the editor and is aborted when
/// the editor is dropped. Their results only take effect once the owner calls
/// [`process_next`](Self::process_next) or
/// [`drain_completions`](Self::drain_completions), so all state changes happen
/// on the owner's task.
pub struct AlarmEditor {
    store: Arc<dyn AlarmStore>,
    items: Arc<dyn ItemProvider>,

    alarm: Alarm,
    selected_repeat: Repeat,
    default_repeat_count: usize,
    should_update: bool,
    should_exit: bool,
    phase: EditorPhase,

    ui: watch::Sender<EditorUiState>,
    signals: mpsc::UnboundedSender<Signal>,
    signals_rx: Option<mpsc::UnboundedReceiver<Signal>>,
    tasks: JoinSet<Completion>,
}

impl AlarmEditor {
    pub fn new(store: Arc<dyn AlarmStore>, items: Arc<dyn ItemProvider>) -> Self {
        let (ui, _) = watch::channel(EditorUiState::default());
        let (signals, signals_rx) = mpsc::unbounded_channel();
        Self {
            store,
            items,
            alarm: Alarm::default(),
            selected_repeat: Repeat::default(),
            default_repeat_count: 0,
            should_update: false,
            should_exit: false,
            phase: EditorPhase::Uninitialized,
            ui,
            signals,
            signals_rx: Some(signals_rx),
            tasks: JoinSet::new(),
        }
    }

    /// Observes the published view state.
    pub fn subscribe(&self) -> watch::Receiver<EditorUiState> {
        self.ui.subscribe()
    }

    /// Snapshot of the published view state.
    pub fn ui_state(&self) -> EditorUiState {
        self.ui.borrow().clone()
    }

    /// Takes the signal stream. Only the first call returns `Some`.
    pub fn take_signals(&mut self) -> Option<mpsc::UnboundedReceiver<Signal>> {
        self.signals_rx.take()
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    pub fn alarm_mut(&mut self) -> &mut Alarm {
        &mut self.alarm
    }

    pub fn selected_repeat(&self) -> Repeat {
        self.selected_repeat
    }

    pub fn set_selected_repeat(&mut self, repeat: Repeat) {
        self.selected_repeat = repeat;
    }

    /// Whether saving will overwrite an existing alarm instead of inserting.
    pub fn should_update(&self) -> bool {
        self.should_update
    }

    /// Whether a save is waiting for the last repeat to be confirmed.
    pub fn pending_exit(&self) -> bool {
        self.should_exit
    }

    /// Starts a session on `alarm`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime, since the item loads are
    /// spawned onto it.
    pub fn init(&mut self, alarm: Alarm) {
        tracing::debug!(id = ?alarm.id, repeats = alarm.repeat_count(), "initializing alarm editor");
        self.should_update = alarm.repeat_count() > 0;
        self.should_exit = false;
        self.alarm = alarm;
        self.set_phase(EditorPhase::Loading);
        self.ui.send_modify(|ui| ui.loading = true);

        self.fetch_items();
        self.refresh();
        self.open_default_repeat_tab();
    }

    fn fetch_items(&mut self) {
        let items = self.items.clone();
        let repeat = self.alarm.default_repeat;
        self.spawn(async move { Completion::RepeatItems(items.repeat_items_for(repeat).await) });

        let items = self.items.clone();
        let title_type = self.alarm.title_type;
        self.spawn(async move { Completion::TitleItems(items.title_items_for(title_type).await) });

        self.ui
            .send_modify(|ui| ui.title_icon = Some(title_type.icon()));
        self.selected_repeat = self.alarm.default_repeat;
        self.default_repeat_count = self.alarm.repeat_count();
    }

    fn open_default_repeat_tab(&mut self) {
        let tab = self.alarm.default_repeat.value();
        self.ui.send_modify(|ui| {
            ui.current_tab = Some(tab);
            ui.loading = false;
        });
        if self.phase == EditorPhase::Loading {
            self.set_phase(EditorPhase::Ready);
        }
    }

    /// Republishes the alarm fields, and retries a save that was waiting on
    /// the last repeat.
    ///
    /// # Panics
    ///
    /// Panics outside a Tokio runtime when it retries a save, see
    /// [`save`](Self::save).
    pub fn refresh(&mut self) {
        let title = self.alarm.title.clone();
        let ringtone = self.alarm.ringtone.clone();
        self.ui.send_modify(|ui| {
            ui.title = title;
            ui.ringtone = ringtone;
        });
        self.update_repeat_counter(self.alarm.repeat_count());

        if self.should_exit {
            self.save();
        }
    }

    /// Appends a repeat entry, then refreshes.
    pub fn add_repeat(&mut self, entry: RepeatEntry) {
        self.selected_repeat = entry.repeat;
        self.alarm.repeats.push(entry);
        self.refresh();
    }

    pub fn set_title_type(&mut self, title_type: AlarmTitleType) {
        self.alarm.set_title_type(title_type);
        self.ui.send_modify(|ui| {
            ui.title = title_type.text().to_owned();
            ui.title_icon = Some(title_type.icon());
        });
    }

    pub fn on_title_text_changed(&mut self, text: &str) {
        self.alarm.title = text.to_owned();
    }

    /// Sets the ringtone if the picker returned one.
    pub fn on_ringtone_picked(&mut self, name: &str, uri: Option<&str>) {
        if uri.is_some() {
            self.alarm.ringtone = name.to_owned();
            let ringtone = self.alarm.ringtone.clone();
            self.ui.send_modify(|ui| ui.ringtone = ringtone);
        }
    }

    /// Publishes a new repeat count, signalling how the counter icon changes.
    pub fn update_repeat_counter(&mut self, counter: usize) {
        // compares against the published text, not the previous count
        let previous: usize = self.ui.borrow().repeat_counter.parse().unwrap_or_default();
        if counter == 0 {
            self.emit(Signal::ClearIcon);
        } else if previous == 0 {
            self.emit(Signal::CreateIconWithEmphasis);
        } else if counter > previous {
            self.emit(Signal::EmphasizeIcon);
        }

        self.ui
            .send_modify(|ui| ui.repeat_counter = counter.to_string());
    }

    /// Saves the alarm if a repeat was added in this session, otherwise asks
    /// for the last repeat to be confirmed first.
    ///
    /// # Panics
    ///
    /// Panics if it has to store the alarm outside a Tokio runtime.
    pub fn save(&mut self) {
        if self.alarm.repeat_count() <= self.default_repeat_count {
            tracing::debug!("no new repeat, prompting for the last one");
            self.should_exit = true;
            self.emit(Signal::PromptLastRepeat(self.selected_repeat));
            return;
        }

        let store = self.store.clone();
        let alarm = self.alarm.clone();
        if self.should_update {
            self.spawn(async move { Completion::Saved(store.update_alarm(alarm).await) });
        } else {
            self.spawn(async move { Completion::Saved(store.insert_alarm(alarm).await) });
        }
        self.set_phase(EditorPhase::Saving);
    }

    pub fn on_navigation_back(&self) {
        self.emit(Signal::GoBack);
    }

    pub fn on_ringtone_click(&self) {
        self.emit(Signal::CloseExpansions);
    }

    pub fn on_repeat_manager_click(&self) {
        self.emit(Signal::ShowRepeatManager);
    }

    /// Waits for the next background operation and applies its result.
    /// Returns `false` when nothing is outstanding.
    pub async fn process_next(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(Ok(completion)) => {
                self.apply(completion);
                true
            }
            Some(Err(e)) => {
                tracing::error!(error = %e, "background task failed");
                true
            }
            None => false,
        }
    }

    /// Applies every already finished background operation without waiting.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Some(result) = self.tasks.try_join_next() {
            match result {
                Ok(completion) => self.apply(completion),
                Err(e) => tracing::error!(error = %e, "background task failed"),
            }
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::RepeatItems(Ok(items)) => self.ui.send_modify(|ui| ui.repeat_items = items),
            Completion::TitleItems(Ok(items)) => self.ui.send_modify(|ui| ui.title_items = items),
            Completion::RepeatItems(Err(e)) | Completion::TitleItems(Err(e)) => {
                tracing::error!(error = %e, "failed to load editor items");
            }
            Completion::Saved(Ok(true)) => {
                self.set_phase(EditorPhase::Saved);
                self.emit(Signal::Saved);
            }
            Completion::Saved(Ok(false)) => {
                tracing::warn!("alarm was not saved");
                self.set_phase(EditorPhase::Ready);
            }
            Completion::Saved(Err(e)) => {
                tracing::error!(error = %e, "failed to save alarm");
                self.set_phase(EditorPhase::Ready);
            }
        }
    }

    fn spawn<F>(&mut self, work: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.tasks.spawn(work);
    }

    fn set_phase(&mut self, phase: EditorPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "editor phase changed");
        self.phase = phase;
    }

    fn emit(&self, signal: Signal) {
        if self.signals.send(signal).is_err() {
            tracing::trace!(?signal, "signal dropped, no observer");
        }
    }
}
