//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a body registered with the physics manager
    pub struct BodyHandle;
}

/// Handle-based map of registered bodies
pub type BodyMap<T> = SlotMap<BodyHandle, T>;
