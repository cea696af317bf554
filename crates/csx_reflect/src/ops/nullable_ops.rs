use crate::Reflect;

/// A value that may be absent (`Option<T>`).
pub trait Nullable: Reflect {
    /// The present value, or `None` for null.
    fn value(&self) -> Option<&dyn Reflect>;
}
