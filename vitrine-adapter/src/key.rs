/// Identifies a host element (a DOM node id, a widget handle, a test label).
pub trait ElementKey: Clone + core::hash::Hash + Eq + core::fmt::Debug {}
impl<T: Clone + core::hash::Hash + Eq + core::fmt::Debug> ElementKey for T {}
