#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type IndexMap<V> = HashMap<usize, V>;
#[cfg(not(feature = "std"))]
pub(crate) type IndexMap<V> = BTreeMap<usize, V>;
