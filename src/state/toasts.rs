//! Transient notification queue.
//!
//! Toasts auto-dismiss after [`DUREE_AFFICHAGE_MS`]; the timer side lives
//! in `components::toast_host`, this model stays pure.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// How long a toast stays on screen.
pub const DUREE_AFFICHAGE_MS: u32 = 4000;

/// Backlog cap; the 10-second dashboard poll can outpace dismissal.
const MAX_TOASTS: usize = 5;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Succes,
    Erreur,
    Info,
    Avertissement,
}

impl ToastKind {
    /// CSS modifier suffix for the toast element.
    #[must_use]
    pub fn classe(self) -> &'static str {
        match self {
            Self::Succes => "toast--succes",
            Self::Erreur => "toast--erreur",
            Self::Info => "toast--info",
            Self::Avertissement => "toast--avertissement",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Notification queue with monotonically increasing ids.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    prochain_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id for later dismissal. The oldest
    /// toast gives way once the backlog is full.
    pub fn pousser(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.prochain_id;
        self.prochain_id += 1;
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Drop a toast by id. Ignores ids already dismissed.
    pub fn retirer(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
