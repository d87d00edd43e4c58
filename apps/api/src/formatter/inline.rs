#![allow(dead_code)]

//! Click-to-edit state machine for the bullet lines of the display variant.
//!
//! Edit mode is owned by the `InlineEditor` controller and passed down to
//! the bullets, not read from ambient scope: a bullet can only enter editing
//! while the controller is unlocked.

use tracing::info;

/// Whether bullets may currently be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Locked,
    Unlocked,
}

/// Per-bullet state: display → editing → (display via save | cancel).
#[derive(Debug, Clone, PartialEq, Eq)]
enum BulletState {
    Display,
    Editing { draft: String },
}

/// One editable bullet line. `source` is the committed text — the
/// `data-original` attribute of the rendered element.
#[derive(Debug, Clone)]
struct Bullet {
    source: String,
    state: BulletState,
}

impl Bullet {
    fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            state: BulletState::Display,
        }
    }
}

/// Controller for inline bullet editing over one formatted document.
#[derive(Debug, Default)]
pub struct InlineEditor {
    mode: EditMode,
    bullets: Vec<Bullet>,
}

impl InlineEditor {
    pub fn new<I, S>(bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: EditMode::Locked,
            bullets: bullets.into_iter().map(Bullet::new).collect(),
        }
    }

    /// Collects the bullet lines of parsed text, in order.
    pub fn from_text(text: &str) -> Self {
        Self::new(
            text.lines()
                .filter_map(|line| line.strip_prefix('•'))
                .map(|rest| rest.trim().to_string()),
        )
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    /// Switching to `Locked` strips every in-progress edit without
    /// committing it.
    pub fn set_mode(&mut self, mode: EditMode) {
        if mode == EditMode::Locked {
            for bullet in &mut self.bullets {
                bullet.state = BulletState::Display;
            }
        }
        self.mode = mode;
    }

    /// Starts editing bullet `index`, seeding the draft from the committed
    /// text. A no-op unless the editor is unlocked and the bullet is on
    /// display. Returns whether the bullet entered editing.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        if self.mode != EditMode::Unlocked {
            return false;
        }
        match self.bullets.get_mut(index) {
            Some(bullet) if bullet.state == BulletState::Display => {
                bullet.state = BulletState::Editing {
                    draft: bullet.source.clone(),
                };
                true
            }
            _ => false,
        }
    }

    /// Updates the draft of a bullet that is being edited.
    pub fn update_draft(&mut self, index: usize, text: &str) -> bool {
        if let Some(Bullet {
            state: BulletState::Editing { draft },
            ..
        }) = self.bullets.get_mut(index)
        {
            *draft = text.to_string();
            true
        } else {
            false
        }
    }

    /// Commits the draft as the new source of truth. The change is only
    /// logged; nothing is persisted.
    pub fn save(&mut self, index: usize) -> bool {
        let Some(bullet) = self.bullets.get_mut(index) else {
            return false;
        };
        match std::mem::replace(&mut bullet.state, BulletState::Display) {
            BulletState::Editing { draft } => {
                info!(index, old = %bullet.source, new = %draft, "bullet edited");
                bullet.source = draft;
                true
            }
            BulletState::Display => false,
        }
    }

    /// Discards the draft and falls back to the stored source of truth.
    pub fn cancel(&mut self, index: usize) -> bool {
        match self.bullets.get_mut(index) {
            Some(bullet) if matches!(bullet.state, BulletState::Editing { .. }) => {
                bullet.state = BulletState::Display;
                true
            }
            _ => false,
        }
    }

    pub fn is_editing(&self, index: usize) -> bool {
        matches!(
            self.bullets.get(index),
            Some(Bullet {
                state: BulletState::Editing { .. },
                ..
            })
        )
    }

    /// The committed text of a bullet.
    pub fn source(&self, index: usize) -> Option<&str> {
        self.bullets.get(index).map(|b| b.source.as_str())
    }

    /// The rendered display text, `• {source}`.
    pub fn display_text(&self, index: usize) -> Option<String> {
        self.bullets.get(index).map(|b| format!("• {}", b.source))
    }
}
