//! The live style root: named style variables plus stylesheet fragments
//!
//! Writers never touch the root directly. They describe their writes as a
//! [`StyleBatch`] and hand it to a [`StyleSink`], which applies the whole
//! batch before any reader can observe it. Two batches may interleave with
//! each other, but a single batch is never observed half-applied.
//!
//! [`StyleRoot`] is the in-memory sink. Hosts that render somewhere else
//! (a document, a native view tree) implement [`StyleSink`] themselves.

use std::fmt::Write;
use std::sync::{Mutex, OnceLock, PoisonError, RwLock};

use indexmap::IndexMap;
use tracing::{debug, trace};

/// Global style root instance
static STYLE_ROOT: OnceLock<StyleRoot> = OnceLock::new();

/// One write against the style root
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleOp {
    SetProperty { name: String, value: String },
    RemoveProperty { name: String },
    /// Create or replace the fragment with this id.
    WriteFragment { id: String, css: String },
    RemoveFragment { id: String },
}

/// An ordered group of writes that is applied as a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleBatch {
    label: &'static str,
    ops: Vec<StyleOp>,
}

impl StyleBatch {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            ops: Vec::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.ops.push(StyleOp::SetProperty {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn remove(&mut self, name: impl Into<String>) -> &mut Self {
        self.ops.push(StyleOp::RemoveProperty { name: name.into() });
        self
    }

    pub fn write_fragment(&mut self, id: impl Into<String>, css: impl Into<String>) -> &mut Self {
        self.ops.push(StyleOp::WriteFragment {
            id: id.into(),
            css: css.into(),
        });
        self
    }

    pub fn remove_fragment(&mut self, id: impl Into<String>) -> &mut Self {
        self.ops.push(StyleOp::RemoveFragment { id: id.into() });
        self
    }

    pub fn ops(&self) -> &[StyleOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Anything a synchronizer can write style batches into.
pub trait StyleSink {
    /// Apply every op in `batch` before returning. Returns how many ops
    /// changed the target.
    fn commit(&self, batch: StyleBatch) -> usize;
}

/// Point-in-time copy of a style root's contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSnapshot {
    pub properties: IndexMap<String, String>,
    pub fragments: IndexMap<String, String>,
}

impl StyleSnapshot {
    /// Render as stylesheet text: one `:root` block, then each fragment.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if !self.properties.is_empty() {
            css.push_str(":root {\n");
            for (name, value) in &self.properties {
                let _ = writeln!(css, "  {name}: {value};");
            }
            css.push_str("}\n");
        }
        for (id, fragment) in &self.fragments {
            let _ = writeln!(css, "\n/* {id} */\n{}", fragment.trim_end());
        }
        css
    }
}

/// In-memory style root
pub struct StyleRoot {
    state: RwLock<StyleSnapshot>,
    on_change: Mutex<Option<fn()>>,
}

impl Default for StyleRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRoot {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StyleSnapshot::default()),
            on_change: Mutex::new(None),
        }
    }

    /// The process-wide root, created on first use.
    pub fn global() -> &'static StyleRoot {
        STYLE_ROOT.get_or_init(StyleRoot::new)
    }

    /// Called once after every committed batch that changed something.
    ///
    /// This is how a host learns it needs to repaint.
    pub fn set_change_callback(&self, callback: fn()) {
        *self.on_change.lock().unwrap_or_else(PoisonError::into_inner) = Some(callback);
    }

    pub fn clear_change_callback(&self) {
        *self.on_change.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.read(|state| state.properties.get(name).cloned())
    }

    pub fn fragment(&self, id: &str) -> Option<String> {
        self.read(|state| state.fragments.get(id).cloned())
    }

    pub fn property_count(&self) -> usize {
        self.read(|state| state.properties.len())
    }

    pub fn fragment_count(&self) -> usize {
        self.read(|state| state.fragments.len())
    }

    pub fn snapshot(&self) -> StyleSnapshot {
        self.read(StyleSnapshot::clone)
    }

    pub fn to_css(&self) -> String {
        self.read(StyleSnapshot::to_css)
    }

    /// Drop everything, bypassing the synchronizer.
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = StyleSnapshot::default();
    }

    fn read<T>(&self, f: impl FnOnce(&StyleSnapshot) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn trigger_change(&self) {
        let callback = *self.on_change.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl StyleSink for StyleRoot {
    fn commit(&self, batch: StyleBatch) -> usize {
        let label = batch.label;
        let total = batch.ops.len();
        let changed = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            batch
                .ops
                .into_iter()
                .filter(|op| apply_op(&mut state, op))
                .count()
        };

        debug!(batch = label, ops = total, changed, "committed style batch");
        if changed > 0 {
            self.trigger_change();
        }
        changed
    }
}

fn apply_op(state: &mut StyleSnapshot, op: &StyleOp) -> bool {
    match op {
        StyleOp::SetProperty { name, value } => {
            trace!(name = %name, value = %value, "set style property");
            match state.properties.get_mut(name) {
                Some(current) if current == value => false,
                Some(current) => {
                    current.clone_from(value);
                    true
                }
                None => {
                    state.properties.insert(name.clone(), value.clone());
                    true
                }
            }
        }
        StyleOp::RemoveProperty { name } => state.properties.shift_remove(name).is_some(),
        StyleOp::WriteFragment { id, css } => match state.fragments.get_mut(id) {
            Some(current) if current == css => false,
            Some(current) => {
                current.clone_from(css);
                true
            }
            None => {
                state.fragments.insert(id.clone(), css.clone());
                true
            }
        },
        StyleOp::RemoveFragment { id } => state.fragments.shift_remove(id).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_commit_applies_in_order() {
        let root = StyleRoot::new();
        let mut batch = StyleBatch::new("test");
        batch.set("--a", "1").set("--b", "2").set("--a", "3").remove("--b");
        assert_eq!(root.commit(batch), 4);

        assert_eq!(root.property("--a").as_deref(), Some("3"));
        assert_eq!(root.property("--b"), None);
    }

    #[test]
    fn test_unchanged_writes_do_not_count() {
        let root = StyleRoot::new();
        let mut batch = StyleBatch::new("test");
        batch.set("--a", "1").write_fragment("f", "a {}");
        assert_eq!(root.commit(batch.clone()), 2);
        assert_eq!(root.commit(batch), 0);

        let mut removal = StyleBatch::new("test");
        removal.remove("--missing").remove_fragment("missing");
        assert_eq!(root.commit(removal), 0);
    }

    #[test]
    fn test_fragment_is_replaced_not_duplicated() {
        let root = StyleRoot::new();
        let mut first = StyleBatch::new("test");
        first.write_fragment("scroll", "one");
        root.commit(first);
        let mut second = StyleBatch::new("test");
        second.write_fragment("scroll", "two");
        root.commit(second);

        assert_eq!(root.fragment_count(), 1);
        assert_eq!(root.fragment("scroll").as_deref(), Some("two"));
    }

    static CHANGES: AtomicUsize = AtomicUsize::new(0);

    fn count_change() {
        CHANGES.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_change_callback_fires_once_per_changing_batch() {
        let root = StyleRoot::new();
        root.set_change_callback(count_change);

        let mut batch = StyleBatch::new("test");
        batch.set("--a", "1").set("--b", "2");
        root.commit(batch.clone());
        root.commit(batch);

        assert_eq!(CHANGES.load(Ordering::SeqCst), 1);
    }

    static CLEARED_CHANGES: AtomicUsize = AtomicUsize::new(0);

    fn count_cleared_change() {
        CLEARED_CHANGES.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_cleared_callback_stops_firing() {
        let root = StyleRoot::new();
        root.set_change_callback(count_cleared_change);

        let mut batch = StyleBatch::new("test");
        batch.set("--a", "1");
        root.commit(batch);

        root.clear_change_callback();
        let mut batch = StyleBatch::new("test");
        batch.set("--a", "2");
        assert_eq!(root.commit(batch), 1);

        assert_eq!(CLEARED_CHANGES.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_to_css() {
        let root = StyleRoot::new();
        let mut batch = StyleBatch::new("test");
        batch.set("--primary", "#000000").write_fragment("frag", "a { color: red; }\n");
        root.commit(batch);

        assert_eq!(
            root.to_css(),
            ":root {\n  --primary: #000000;\n}\n\n/* frag */\na { color: red; }\n"
        );
    }
}
