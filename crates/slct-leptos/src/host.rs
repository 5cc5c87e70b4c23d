//! Command execution, kept apart from the DOM so it runs natively.

use slct_core::Command;
use slct_types::Selection;

/// Holds at most one listener handle.
#[derive(Debug)]
pub(crate) struct ListenerSlot<H> {
    current: Option<H>,
}

impl<H> Default for ListenerSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> ListenerSlot<H> {
    /// Store `handle`, returning the one it replaces.
    pub(crate) fn attach(&mut self, handle: H) -> Option<H> {
        self.current.replace(handle)
    }

    pub(crate) fn detach(&mut self) -> Option<H> {
        self.current.take()
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.current.is_some()
    }
}

/// Side effects a widget performs for the controller.
pub(crate) trait CommandHost<V> {
    fn attach_dismiss(&mut self);
    fn detach_dismiss(&mut self);
    fn sync_native(&mut self, keys: &[String]);
    fn change(&mut self, selection: Selection<V>);
    fn create(&mut self, text: String);
    fn clear(&mut self);
    fn search(&mut self, text: String);
}

/// Run `commands` in order.
pub(crate) fn execute<V, H: CommandHost<V>>(host: &mut H, commands: Vec<Command<V>>) {
    for command in commands {
        match command {
            Command::AttachDismissListener => host.attach_dismiss(),
            Command::DetachDismissListener => host.detach_dismiss(),
            Command::SyncNative(keys) => host.sync_native(&keys),
            Command::Change(selection) => host.change(selection),
            Command::Create(text) => host.create(text),
            Command::Clear => host.clear(),
            Command::Search(text) => host.search(text),
        }
    }
}
