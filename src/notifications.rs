use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::NOTIFICATION_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
            NotificationKind::Info => "toast-info",
            NotificationKind::Warning => "toast-warning",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u32,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: Option<u32>,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            duration_ms: duration_ms.unwrap_or(NOTIFICATION_DURATION_MS),
        });
        id
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        self.items.retain(|n| n.id != id);
    }
}

pub enum NotificationAction {
    Show {
        message: String,
        kind: NotificationKind,
        duration_ms: Option<u32>,
    },
    Dismiss(NotificationId),
}

impl Reducible for Notifications {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Show {
                message,
                kind,
                duration_ms,
            } => {
                next.show(message, kind, duration_ms);
            }
            NotificationAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

/// Handle given to components through context.
#[derive(Clone, PartialEq)]
pub struct Notifier(UseReducerHandle<Notifications>);

impl Notifier {
    pub fn new(handle: UseReducerHandle<Notifications>) -> Self {
        Self(handle)
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        self.show_for(message, kind, None);
    }

    pub fn show_for(&self, message: impl Into<String>, kind: NotificationKind, duration_ms: Option<u32>) {
        self.0.dispatch(NotificationAction::Show {
            message: message.into(),
            kind,
            duration_ms,
        });
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.0.dispatch(NotificationAction::Dismiss(id));
    }
}

impl Deref for Notifier {
    type Target = Notifications;

    fn deref(&self) -> &Notifications {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_even_for_same_message() {
        let mut toasts = Notifications::default();
        let a = toasts.show("Item removido do carrinho", NotificationKind::Error, None);
        let b = toasts.show("Item removido do carrinho", NotificationKind::Error, None);
        assert_ne!(a, b);
        assert_eq!(toasts.items().len(), 2);
    }

    #[test]
    fn default_duration_applies() {
        let mut toasts = Notifications::default();
        toasts.show("ok", NotificationKind::Success, None);
        toasts.show("obrigado", NotificationKind::Success, Some(5000));
        assert_eq!(toasts.items()[0].duration_ms, NOTIFICATION_DURATION_MS);
        assert_eq!(toasts.items()[1].duration_ms, 5000);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut toasts = Notifications::default();
        let first = toasts.show("a", NotificationKind::Info, None);
        toasts.show("b", NotificationKind::Warning, None);
        toasts.dismiss(first);
        toasts.dismiss(first);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].message, "b");
    }

    #[test]
    fn reducer_shows_and_dismisses() {
        let state = Rc::new(Notifications::default());
        let state = state.reduce(NotificationAction::Show {
            message: "Portes de envio calculado".to_string(),
            kind: NotificationKind::Success,
            duration_ms: None,
        });
        let id = state.items()[0].id;
        let state = state.reduce(NotificationAction::Dismiss(id));
        assert!(state.items().is_empty());
    }

    #[test]
    fn every_kind_has_its_own_style() {
        let kinds = [
            NotificationKind::Success,
            NotificationKind::Error,
            NotificationKind::Info,
            NotificationKind::Warning,
        ];
        let mut classes: Vec<_> = kinds.iter().map(|k| k.class()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), kinds.len());
    }
}
