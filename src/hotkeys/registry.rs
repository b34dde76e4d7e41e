/*!
 * Owned hotkey binding table.
 *
 * A `HotkeyRegistry` maps combination lists to handlers. Components mount
 * their bindings through a `HotkeyScope`, which removes them again on drop,
 * so no handler outlives the component that registered it.
 */

use std::fmt;
use std::ops::{Deref, DerefMut};

use log::{debug, trace};

use crate::errors::HotkeyError;
use crate::hotkeys::context::EditorContext;
use crate::hotkeys::keys::{ComboList, KeyEvent};

/// Callback invoked when a bound combination is pressed
pub type HotkeyHandler = Box<dyn FnMut(&mut KeyEvent, &mut EditorContext<'_>)>;

/// Identifies a single binding inside a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

struct Binding {
    id: BindingId,
    combos: ComboList,
    handler: HotkeyHandler,
}

/// Table of active key bindings
#[derive(Default)]
pub struct HotkeyRegistry {
    bindings: Vec<Binding>,
    next_id: u64,
}

impl fmt::Debug for HotkeyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeyRegistry")
            .field(
                "bindings",
                &self.bindings.iter().map(|b| b.combos.to_string()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl HotkeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `combos` and bind `handler` to every synonym in it
    pub fn bind<F>(&mut self, combos: &str, handler: F) -> Result<BindingId, HotkeyError>
    where
        F: FnMut(&mut KeyEvent, &mut EditorContext<'_>) + 'static,
    {
        let combos: ComboList = combos.parse()?;
        Ok(self.bind_combos(combos, handler))
    }

    pub fn bind_combos<F>(&mut self, combos: ComboList, handler: F) -> BindingId
    where
        F: FnMut(&mut KeyEvent, &mut EditorContext<'_>) + 'static,
    {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        debug!("Binding hotkey '{}'", combos);
        self.bindings.push(Binding {
            id,
            combos,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove every binding registered under the same combination list.
    /// Returns how many bindings were removed.
    pub fn unbind(&mut self, combos: &str) -> Result<usize, HotkeyError> {
        let combos: ComboList = combos.parse()?;
        Ok(self.unbind_combos(&combos))
    }

    pub fn unbind_combos(&mut self, combos: &ComboList) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|b| &b.combos != combos);
        let removed = before - self.bindings.len();
        debug!("Unbound hotkey '{}' ({} binding(s))", combos, removed);
        removed
    }

    pub fn unbind_id(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        before != self.bindings.len()
    }

    /// Whether any binding would fire for `event`
    pub fn is_bound(&self, event: &KeyEvent) -> bool {
        self.bindings.iter().any(|b| b.combos.matches(event))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run every handler bound to `event`, in registration order.
    /// Returns the number of handlers invoked.
    pub fn dispatch(&mut self, event: &mut KeyEvent, ctx: &mut EditorContext<'_>) -> usize {
        let mut invoked = 0;
        for binding in self.bindings.iter_mut() {
            if binding.combos.matches(event) {
                trace!("Hotkey '{}' matched {:?}", binding.combos, event.key);
                (binding.handler)(event, ctx);
                invoked += 1;
            }
        }
        invoked
    }
}

/// Bindings registered for the lifetime of one component.
///
/// Dereferences to the underlying registry so events can be dispatched while
/// the scope is alive. Dropping the scope unbinds every combination it bound.
pub struct HotkeyScope<'r> {
    registry: &'r mut HotkeyRegistry,
    ids: Vec<BindingId>,
    combos: Vec<ComboList>,
}

impl<'r> HotkeyScope<'r> {
    pub fn new(registry: &'r mut HotkeyRegistry) -> Self {
        Self {
            registry,
            ids: Vec::new(),
            combos: Vec::new(),
        }
    }

    pub fn bind<F>(&mut self, combos: &str, handler: F) -> Result<BindingId, HotkeyError>
    where
        F: FnMut(&mut KeyEvent, &mut EditorContext<'_>) + 'static,
    {
        let combos: ComboList = combos.parse()?;
        Ok(self.bind_combos(combos, handler))
    }

    pub fn bind_combos<F>(&mut self, combos: ComboList, handler: F) -> BindingId
    where
        F: FnMut(&mut KeyEvent, &mut EditorContext<'_>) + 'static,
    {
        self.combos.push(combos.clone());
        let id = self.registry.bind_combos(combos, handler);
        self.ids.push(id);
        id
    }

    /// Combination lists bound through this scope
    pub fn bound_combos(&self) -> &[ComboList] {
        &self.combos
    }
}

impl Deref for HotkeyScope<'_> {
    type Target = HotkeyRegistry;

    fn deref(&self) -> &Self::Target {
        &*self.registry
    }
}

impl DerefMut for HotkeyScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.registry
    }
}

impl Drop for HotkeyScope<'_> {
    fn drop(&mut self) {
        // Only this scope's bindings; equal combos bound elsewhere stay
        for id in self.ids.drain(..) {
            self.registry.unbind_id(id);
        }
        debug!("Released {} scoped hotkey binding(s)", self.combos.len());
    }
}
