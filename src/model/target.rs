//! Identity handles for the objects resources are resolved against.
//!
//! A [`Target`] is owned by the caller (typically the object selected in a property
//! inspector). The registry only ever keeps a [`TargetRef`], a weak reference compared by
//! identity, so it never extends the lifetime of the object it describes.
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

#[derive(Debug)]
struct TargetInfo {
    type_name: String,
}

/// Caller-owned handle to an inspected object.
///
/// Cloning shares identity: clones compare equal, two separate `Target::new` calls never do,
/// even with the same type name.
#[derive(Debug, Clone)]
pub struct Target {
    info: Arc<TargetInfo>,
}

impl Target {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            info: Arc::new(TargetInfo {
                type_name: type_name.into(),
            }),
        }
    }

    /// Display name of the object's type, e.g. `Button`.
    pub fn type_name(&self) -> &str {
        &self.info.type_name
    }

    pub fn downgrade(&self) -> TargetRef {
        TargetRef {
            info: Arc::downgrade(&self.info),
        }
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.info, &other.info)
    }
}

impl Eq for Target {}

impl Hash for Target {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.info) as usize).hash(state);
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Non-owning reference to a [`Target`].
#[derive(Debug, Clone)]
pub struct TargetRef {
    info: Weak<TargetInfo>,
}

impl TargetRef {
    pub fn upgrade(&self) -> Option<Target> {
        self.info.upgrade().map(|info| Target { info })
    }

    /// False once every [`Target`] handle for the object has been dropped.
    pub fn is_alive(&self) -> bool {
        self.info.strong_count() > 0
    }

    pub fn refers_to(&self, target: &Target) -> bool {
        std::ptr::eq(self.info.as_ptr(), Arc::as_ptr(&target.info))
    }
}

impl PartialEq for TargetRef {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.info, &other.info)
    }
}

impl Eq for TargetRef {}

// The weak count keeps the allocation, and therefore the address, reserved.
impl Hash for TargetRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.info.as_ptr() as usize).hash(state);
    }
}
