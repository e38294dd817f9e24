//! Toast notification state: a small queue of transient messages.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// A single toast notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
}

/// Queue of currently visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Remove the toast with `id`; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
